use serde::{Deserialize, Serialize};

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

/// Query parameters shared by every paginated list endpoint.
///
/// Out-of-range values fall back to the defaults rather than erroring,
/// matching the permissive behavior of the original pagination parser.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl PageQuery {
    pub fn page(&self) -> u32 {
        self.page.max(1)
    }

    pub fn per_page(&self) -> u32 {
        if self.per_page == 0 {
            default_per_page()
        } else {
            self.per_page
        }
    }

    pub fn limit(&self) -> i64 {
        self.per_page() as i64
    }

    pub fn offset(&self) -> i64 {
        ((self.page() - 1) * self.per_page()) as i64
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

/// Paginated response envelope
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
    pub last_page: u32,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: i64, query: &PageQuery) -> Self {
        let per_page = query.per_page();
        let last_page = if total <= 0 {
            1
        } else {
            ((total as u64).div_ceil(per_page as u64)) as u32
        };

        Self {
            data,
            total,
            page: query.page(),
            per_page,
            last_page,
        }
    }
}
