use actix_web::web::{block, Data};
use chrono::{DateTime, Utc};

use db::models::{Choice, Question};
use db::PollStore;
use errors::Error;

/// Loads a question visible at `now` along with its choices. A question that
/// is missing or still scheduled comes back as `Error::NotFound`.
pub async fn get_question_with_choices(
    store: Data<dyn PollStore>,
    question_id: i32,
    now: DateTime<Utc>,
) -> Result<(Question, Vec<Choice>), Error> {
    let data: Result<(Question, Vec<Choice>), Error> = block(move || {
        let question = store
            .find_published_question(question_id, now)
            .map_err(|err| match err {
                Error::NotFound(_) => Error::NotFound("Question not found".into()),
                err => err,
            })?;
        let choices = store.choices_for(question.id)?;
        Ok((question, choices))
    })
    .await?;

    data
}
