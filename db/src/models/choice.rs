use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices::{self, table};

#[derive(Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[belongs_to(Question)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[table_name = "choices"]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
}

impl Choice {
    pub fn create(
        conn: &PgConnection,
        question_id: i32,
        choice_text: String,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn find_by_question_id(conn: &PgConnection, question_id: i32) -> Result<Vec<Choice>, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field};

        let results = choices_table
            .filter(question_id_field.eq(question_id))
            .order(id.asc())
            .load::<Choice>(conn)?;

        Ok(results)
    }
}

pub fn total_votes(choices: &[Choice]) -> i32 {
    choices.iter().map(|choice| choice.votes).sum()
}
