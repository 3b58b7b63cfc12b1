use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use errors::Error;

use crate::models::{published, Choice, Question};
use crate::PollStore;

#[derive(Default)]
struct Tables {
    questions: Vec<Question>,
    choices: Vec<Choice>,
}

/// A `PollStore` held entirely in process memory. Ids are assigned in insertion
/// order starting at 1, like a fresh serial column.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, Error> {
        self.tables.lock().map_err(|err| {
            error!("Memory store lock poisoned - {}", err);
            Error::InternalServerError("Store unavailable".into())
        })
    }
}

impl PollStore for MemoryStore {
    fn published_questions(&self, now: DateTime<Utc>) -> Result<Vec<Question>, Error> {
        let tables = self.lock()?;
        Ok(published(&tables.questions, now))
    }

    fn find_question(&self, question_id: i32) -> Result<Question, Error> {
        let tables = self.lock()?;
        tables
            .questions
            .iter()
            .find(|question| question.id == question_id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Record not found".into()))
    }

    fn choices_for(&self, question_id: i32) -> Result<Vec<Choice>, Error> {
        let tables = self.lock()?;
        Ok(tables
            .choices
            .iter()
            .filter(|choice| choice.question_id == question_id)
            .cloned()
            .collect())
    }

    fn create_question(
        &self,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let mut tables = self.lock()?;
        let question = Question {
            id: tables.questions.len() as i32 + 1,
            question_text,
            pub_date,
        };
        tables.questions.push(question.clone());

        Ok(question)
    }

    fn create_choice(&self, question_id: i32, choice_text: String) -> Result<Choice, Error> {
        let mut tables = self.lock()?;
        if !tables.questions.iter().any(|q| q.id == question_id) {
            return Err(Error::BadRequest(format!(
                "Question {} does not exist",
                question_id
            )));
        }

        let choice = Choice {
            id: tables.choices.len() as i32 + 1,
            question_id,
            choice_text,
            votes: 0,
        };
        tables.choices.push(choice.clone());

        Ok(choice)
    }
}
