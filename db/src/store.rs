use chrono::{DateTime, Utc};

use errors::Error;

use crate::models::{Choice, Question};
use crate::{get_conn, PgPool};

/// Storage the HTTP handlers read polls through.
///
/// Methods are blocking; callers on the async side wrap them in `web::block`.
pub trait PollStore: Send + Sync {
    fn published_questions(&self, now: DateTime<Utc>) -> Result<Vec<Question>, Error>;

    fn find_question(&self, question_id: i32) -> Result<Question, Error>;

    fn choices_for(&self, question_id: i32) -> Result<Vec<Choice>, Error>;

    fn create_question(
        &self,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error>;

    fn create_choice(&self, question_id: i32, choice_text: String) -> Result<Choice, Error>;

    /// Looks a question up by id, treating one scheduled after `now` as missing.
    fn find_published_question(
        &self,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = self.find_question(question_id)?;
        if !question.is_published(now) {
            debug!(
                "Question {} is scheduled for {}, hiding it",
                question.id, question.pub_date
            );
            return Err(Error::NotFound("Question not found".into()));
        }

        Ok(question)
    }
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

impl PollStore for PgStore {
    fn published_questions(&self, now: DateTime<Utc>) -> Result<Vec<Question>, Error> {
        let conn = get_conn(&self.pool)?;
        Question::find_published(&conn, now)
    }

    fn find_question(&self, question_id: i32) -> Result<Question, Error> {
        let conn = get_conn(&self.pool)?;
        Question::find_by_id(&conn, question_id)
    }

    fn choices_for(&self, question_id: i32) -> Result<Vec<Choice>, Error> {
        let conn = get_conn(&self.pool)?;
        Choice::find_by_question_id(&conn, question_id)
    }

    fn create_question(
        &self,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let conn = get_conn(&self.pool)?;
        Question::create(&conn, question_text, pub_date)
    }

    fn create_choice(&self, question_id: i32, choice_text: String) -> Result<Choice, Error> {
        let conn = get_conn(&self.pool)?;
        Choice::create(&conn, question_id, choice_text)
    }
}
