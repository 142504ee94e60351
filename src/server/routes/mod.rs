mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use serde::Deserialize;

use crate::pagination::Page;

use super::error::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct PageQuery {
    page: Option<i64>,
}

impl PageQuery {
    fn page(&self) -> ApiResponse<Page> {
        match self.page {
            None => Ok(Page::default()),
            Some(number) => Page::new(number).ok_or_else(|| {
                ApiError::BadRequest(format!("page must be positive, got {number}"))
            }),
        }
    }
}
