use actix_web::{web, HttpResponse};
use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::{AppError, Page, PageQuery};
use crate::modules::catalog::repositories::ProductRepository;

/// List products
/// GET /products
pub async fn list_products(
    pool: web::Data<MySqlPool>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let repo = ProductRepository::new(pool.get_ref().clone());
    let (products, total) = repo.list(query.limit(), query.offset()).await?;

    Ok(HttpResponse::Ok().json(Page::new(products, total, &query)))
}

/// Get product by id
/// GET /products/{id}
pub async fn get_product(
    pool: web::Data<MySqlPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let repo = ProductRepository::new(pool.get_ref().clone());
    let product = repo.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(list_products))
            .route("/{id}", web::get().to(get_product)),
    );
}
