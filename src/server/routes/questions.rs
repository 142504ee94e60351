use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::{
    db::{queries::questions, NewQuestion, Question},
    pagination::{paginate, Page, QUESTIONS_PER_PAGE},
    server::{app::AppState, deserializers::deserialize_optional_loose_i64},
};

use super::{categories::categories_map, ApiError, ApiResponse, PageQuery};

// the frontend has no notion of a selected category on the listing page
const CURRENT_CATEGORY: &str = "Science";

// one endpoint serves both creation and search, depending on which fields are sent
#[derive(Deserialize)]
struct QuestionsBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_loose_i64")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_loose_i64")]
    difficulty: Option<i64>,
}

impl TryFrom<QuestionsBody> for NewQuestion {
    type Error = ApiError;

    fn try_from(body: QuestionsBody) -> Result<Self, Self::Error> {
        fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
            value.ok_or_else(|| ApiError::BadRequest(format!("field `{field}` is required")))
        }
        let question = required(body.question.filter(|q| !q.trim().is_empty()), "question")?;
        let answer = required(body.answer.filter(|a| !a.trim().is_empty()), "answer")?;
        Ok(NewQuestion {
            question,
            answer,
            category: required(body.category, "category")?,
            difficulty: required(body.difficulty, "difficulty")?,
        })
    }
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    #[serde(rename = "currentCategory")]
    current_category: &'static str,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    search_term: String,
    questions: Vec<Question>,
    total_questions: i64,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<Json<QuestionsPage>> {
    let Query(query) = query?;
    let page = query.page()?;

    let all = questions::get_all_questions(&pool).await?;
    let current = paginate(&all, page, QUESTIONS_PER_PAGE);
    if current.is_empty() {
        return Err(ApiError::NotFound(format!("page {page} has no questions")));
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_questions: all.len(),
        categories: categories_map(&pool).await?,
        current_category: CURRENT_CATEGORY,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<Json<Deleted>> {
    let Path(id) = id?;
    let Query(query) = query?;
    let page = query.page()?;

    if !questions::delete_question(&pool, id).await? {
        return Err(ApiError::Unprocessable(format!("question {id} does not exist")));
    }
    tracing::info!(id, "Question deleted");

    let all = questions::get_all_questions(&pool).await?;
    Ok(Json(Deleted {
        success: true,
        deleted: id,
        questions: paginate(&all, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: all.len(),
    }))
}

async fn create_or_search(
    State(pool): State<SqlitePool>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<QuestionsBody>, JsonRejection>,
) -> ApiResponse<Response> {
    let Query(query) = query?;
    let page = query.page()?;
    let Json(body) = body?;

    match body.search_term.clone().filter(|term| !term.is_empty()) {
        Some(term) => Ok(search(&pool, term, page).await?.into_response()),
        None => Ok(create(&pool, body.try_into()?, page).await?.into_response()),
    }
}

async fn search(pool: &SqlitePool, term: String, page: Page) -> ApiResponse<Json<SearchResults>> {
    let found = questions::search_questions(pool, &term).await?;
    tracing::debug!(term = %term, matches = found.len(), "Searched questions");
    Ok(Json(SearchResults {
        success: true,
        questions: paginate(&found, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: questions::count_questions(pool).await?,
        search_term: term,
    }))
}

async fn create(pool: &SqlitePool, new: NewQuestion, page: Page) -> ApiResponse<Json<Created>> {
    let id = questions::create_question(pool, &new).await?;
    tracing::info!(id, category = new.category, "Question created");

    let all = questions::get_all_questions(pool).await?;
    Ok(Json(Created {
        success: true,
        created: id,
        questions: paginate(&all, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: all.len(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
