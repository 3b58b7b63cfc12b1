#[macro_use]
extern crate log;

use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{new_pool, PgStore, PollStore};
use errors::Error;

// (text, days from now, choices)
const POLLS: &[(&str, i64, &[&str])] = &[
    ("What's new?", -3, &["Not much", "The sky", "Just hacking again"]),
    ("Favourite editor?", -20, &["vim", "emacs", "Something else"]),
    ("Tabs or spaces?", 0, &["Tabs", "Spaces"]),
    ("Best release of next year?", 30, &["The first one", "The last one"]),
];

fn seed(store: &dyn PollStore) -> Result<(), Error> {
    let now = Utc::now();

    for (text, days, choices) in POLLS {
        let question = store.create_question(text.to_string(), now + Duration::days(*days))?;
        for choice in choices.iter() {
            store.create_choice(question.id, choice.to_string())?;
        }
        info!("Seeded question {} - {}", question.id, question.question_text);
    }

    Ok(())
}

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let store = PgStore::new(new_pool()?);
    seed(&store)
}
