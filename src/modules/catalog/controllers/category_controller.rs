use actix_web::{web, HttpResponse};
use sqlx::MySqlPool;

use crate::core::{AppError, Page, PageQuery};
use crate::modules::catalog::repositories::CategoryRepository;

/// List product categories
/// GET /productCategories
pub async fn list_categories(
    pool: web::Data<MySqlPool>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let repo = CategoryRepository::new(pool.get_ref().clone());
    let (categories, total) = repo.list(query.limit(), query.offset()).await?;

    Ok(HttpResponse::Ok().json(Page::new(categories, total, &query)))
}

/// Get product category by id
/// GET /productCategories/{id}
pub async fn get_category(
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let repo = CategoryRepository::new(pool.get_ref().clone());
    let category = repo.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(category))
}

/// Configure product category routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/productCategories")
            .route("", web::get().to(list_categories))
            .route("/{id}", web::get().to(get_category)),
    );
}
