mod get_question_with_choices;

pub use self::get_question_with_choices::*;
