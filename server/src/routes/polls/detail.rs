use actix_web::web::{Data, Json, Path};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    models::{Choice, QuestionDetails},
    PollStore,
};
use errors::Error;

use crate::handlers::get_question_with_choices;

#[derive(Debug, Deserialize, Serialize)]
pub struct DetailResponse {
    pub question: QuestionDetails,
    pub choices: Vec<Choice>,
}

pub async fn detail(
    question_id: Path<i32>,
    store: Data<dyn PollStore>,
) -> Result<Json<DetailResponse>, Error> {
    let now = Utc::now();
    let (question, choices) =
        get_question_with_choices(store, question_id.into_inner(), now).await?;

    Ok(Json(DetailResponse {
        question: question.details(now),
        choices,
    }))
}
