use chrono::{DateTime, Duration, Utc};
use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions::{self, table};

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

/// What the listing and detail endpoints expose for a question.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct QuestionDetails {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

impl Question {
    /// True when `pub_date` falls in the trailing day ending at `now`,
    /// exclusive of the start and inclusive of `now` itself.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) < self.pub_date && self.pub_date <= now
    }

    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    pub fn details(&self, now: DateTime<Utc>) -> QuestionDetails {
        QuestionDetails {
            id: self.id,
            question_text: self.question_text.clone(),
            pub_date: self.pub_date,
            was_published_recently: self.was_published_recently(now),
        }
    }

    pub fn create(
        conn: &PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    pub fn find_by_id(conn: &PgConnection, question_id: i32) -> Result<Question, Error> {
        use questions::dsl::questions as questions_table;

        let question = questions_table.find(question_id).first::<Question>(conn)?;

        Ok(question)
    }

    /// Questions visible at `now`, oldest publication first.
    pub fn find_published(conn: &PgConnection, now: DateTime<Utc>) -> Result<Vec<Question>, Error> {
        use questions::dsl::{id, pub_date, questions as questions_table};

        let results = questions_table
            .filter(pub_date.le(now))
            .order((pub_date.asc(), id.asc()))
            .load::<Question>(conn)?;

        Ok(results)
    }
}

/// In-memory counterpart of `Question::find_published`, same filter and order.
pub fn published(questions: &[Question], now: DateTime<Utc>) -> Vec<Question> {
    let mut visible: Vec<Question> = questions
        .iter()
        .filter(|question| question.is_published(now))
        .cloned()
        .collect();
    visible.sort_by(|a, b| a.pub_date.cmp(&b.pub_date).then(a.id.cmp(&b.id)));

    visible
}
