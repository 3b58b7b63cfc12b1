use actix_web::web::{Data, Json, Path};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    models::{total_votes, Choice, QuestionDetails},
    PollStore,
};
use errors::Error;

use crate::handlers::get_question_with_choices;

#[derive(Debug, Deserialize, Serialize)]
pub struct ResultsResponse {
    pub question: QuestionDetails,
    pub choices: Vec<Choice>,
    pub total_votes: i32,
}

pub async fn results(
    question_id: Path<i32>,
    store: Data<dyn PollStore>,
) -> Result<Json<ResultsResponse>, Error> {
    let now = Utc::now();
    let (question, choices) =
        get_question_with_choices(store, question_id.into_inner(), now).await?;

    Ok(Json(ResultsResponse {
        question: question.details(now),
        total_votes: total_votes(&choices),
        choices,
    }))
}
