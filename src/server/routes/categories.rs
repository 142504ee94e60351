use std::collections::BTreeMap;

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        Question,
    },
    pagination::{paginate, QUESTIONS_PER_PAGE},
    server::app::AppState,
};

use super::{ApiError, ApiResponse, PageQuery};

#[derive(Serialize)]
struct CategoriesList {
    success: bool,
    categories: BTreeMap<i64, String>,
    total_categories: usize,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: Option<String>,
}

/// Category id to display name, as the frontend expects it.
pub(super) async fn categories_map(pool: &SqlitePool) -> sqlx::Result<BTreeMap<i64, String>> {
    let categories = categories::get_all_categories(pool).await?;
    Ok(categories.into_iter().map(|c| (c.id, c.name)).collect())
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesList>> {
    let categories = categories_map(&pool).await?;
    Ok(Json(CategoriesList {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<Json<CategoryQuestions>> {
    // ids that are not integers name no category at all
    let Path(id) = id.map_err(|rejection| ApiError::NotFound(rejection.body_text()))?;
    let Query(query) = query?;
    let page = query.page()?;

    let in_category = questions::get_questions_for_category(&pool, id).await?;
    let category = categories::get_category(&pool, id).await?;
    Ok(Json(CategoryQuestions {
        success: true,
        questions: paginate(&in_category, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: questions::count_questions(&pool).await?,
        current_category: category.map(|c| c.name),
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
