pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;
pub mod session;

use std::sync::Arc;

use chefshare_recipe::{MemorySessionStore, SessionStore, SqliteSessionStore};
use sqlx::SqlitePool;

pub use crate::config::Config;
pub use routes::AppState;

/// Wires commands, queries and the configured session store.
///
/// Commands and the sqlite session store write through `write_pool`; listing
/// and detail queries read through `read_pool`.
pub fn app_state(config: Config, write_pool: SqlitePool, read_pool: SqlitePool) -> AppState {
    let sessions: Arc<dyn SessionStore> = match config.session.backend {
        crate::config::SessionBackend::Memory => Arc::new(MemorySessionStore::new()),
        crate::config::SessionBackend::Sqlite => Arc::new(SqliteSessionStore(write_pool.clone())),
    };

    AppState {
        config,
        recipe_command: chefshare_recipe::Command(write_pool),
        recipe_query: chefshare_recipe::Query(read_pool.clone()),
        sessions,
        pool: read_pool,
    }
}
