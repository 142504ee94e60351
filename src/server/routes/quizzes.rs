use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions, Question},
    quiz::{self, CategoryScope},
    server::{app::AppState, deserializers::LooseI64},
    telemetry::QUIZ_QUESTIONS_SERVED,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
    #[serde(rename = "type")]
    name: String,
}

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: QuizCategory,
    previous_questions: Option<Vec<LooseI64>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum QuizQuestion {
    Next(Question),
    // serialized as `{}`, which the frontend reads as "quiz over"
    Exhausted {},
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: QuizQuestion,
    category: String,
    total_quiz_in_category: usize,
}

async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResponse<Json<QuizResponse>> {
    let Json(body) = body?;
    let scope = CategoryScope::from(body.quiz_category.id);
    let excluded: HashSet<i64> = body
        .previous_questions
        .unwrap_or_default()
        .into_iter()
        .map(|id| id.0)
        .collect();

    let pool_questions = match scope {
        CategoryScope::Any => questions::get_all_questions(&pool).await?,
        CategoryScope::Category(id) => questions::get_questions_for_category(&pool, id).await?,
    };

    let selection = quiz::select(scope, &excluded, &pool_questions, &mut rand::thread_rng());
    let question = match selection.question {
        Some(question) => {
            let label = body.quiz_category.id.to_string();
            QUIZ_QUESTIONS_SERVED
                .with_label_values(&[label.as_str()])
                .inc();
            QuizQuestion::Next(question.clone())
        }
        None => {
            tracing::debug!(?scope, seen = excluded.len(), "No quiz questions left");
            QuizQuestion::Exhausted {}
        }
    };

    Ok(Json(QuizResponse {
        success: true,
        question,
        category: body.quiz_category.name,
        total_quiz_in_category: selection.total_in_category,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_quiz_question))
        .with_state(state)
}
