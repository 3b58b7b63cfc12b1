#[macro_use]
extern crate log;

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod config;
mod handlers;
mod routes;
mod tests;

use crate::config::Config;
use crate::routes::{not_found, routes};
use db::{PgStore, PollStore};

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = db::new_pool().map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let store: web::Data<dyn PollStore> =
        web::Data::from(Arc::new(PgStore::new(pool)) as Arc<dyn PollStore>);

    info!("Starting polls server on {}", config.bind_address);
    let client_host = config.client_host.clone();

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(3600);
        if let Some(origin) = &client_host {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .app_data(store.clone())
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await
}
