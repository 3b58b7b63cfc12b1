use actix_web::web::{block, Data, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{models::QuestionDetails, PollStore};
use errors::Error;

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<QuestionDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn index(store: Data<dyn PollStore>) -> Result<Json<IndexResponse>, Error> {
    let now = Utc::now();
    let questions = block(move || store.published_questions(now)).await??;
    debug!("{} questions published as of {}", questions.len(), now);

    let message = if questions.is_empty() {
        Some(NO_POLLS_MESSAGE.to_string())
    } else {
        None
    };

    Ok(Json(IndexResponse {
        latest_question_list: questions.iter().map(|q| q.details(now)).collect(),
        message,
    }))
}
