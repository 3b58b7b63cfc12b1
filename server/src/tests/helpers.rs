#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use actix_web::{test, web, App};
    use chrono::{Duration, Utc};
    use dotenv::dotenv;
    use serde::de::DeserializeOwned;
    use serde_json;

    use db::{models::Question, new_pool, MemoryStore, PgStore, PollStore};

    use crate::routes::{not_found, routes};

    pub fn memory_store() -> Arc<dyn PollStore> {
        Arc::new(MemoryStore::new())
    }

    /// Store backed by the database at DATABASE_URL, for `#[ignore]`d tests.
    pub fn pg_store() -> Arc<dyn PollStore> {
        dotenv().ok();
        Arc::new(PgStore::new(new_pool().unwrap()))
    }

    /// Creates a question published `days` away from now (negative for the past).
    pub fn create_question(store: &dyn PollStore, question_text: &str, days: i64) -> Question {
        store
            .create_question(question_text.to_string(), Utc::now() + Duration::days(days))
            .unwrap()
    }

    async fn get(route: &str, store: Arc<dyn PollStore>) -> (u16, web::Bytes) {
        let store: web::Data<dyn PollStore> = web::Data::from(store);
        let app = test::init_service(
            App::new()
                .app_data(store)
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri(route).to_request();
        let res = test::call_service(&app, req).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, body)
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(route: &str, store: Arc<dyn PollStore>) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let (status, body) = get(route, store).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Status only, for responses whose body isn't JSON.
    pub async fn test_get_status(route: &str, store: Arc<dyn PollStore>) -> u16 {
        get(route, store).await.0
    }
}
