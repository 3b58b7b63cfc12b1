#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use std::env;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

use errors::Error;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type Connection = PooledConnection<ConnectionManager<PgConnection>>;

pub mod memory;
pub mod models;
pub mod schema;
mod store;

pub use memory::MemoryStore;
pub use store::{PgStore, PollStore};

pub fn get_conn(pool: &PgPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err.into()
    })
}

pub fn new_pool() -> Result<PgPool, Error> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| Error::InternalServerError("DATABASE_URL must be set".into()))?;
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    Pool::builder().build(manager).map_err(|err| {
        error!("Failed to create db pool - {}", err.to_string());
        err.into()
    })
}
