use crate::db::{DbPool, OrmConn};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
}

impl AppState {
    /// Shares the ORM's underlying pool so raw sqlx queries and entity
    /// queries see the same database.
    pub fn new(orm: OrmConn) -> Self {
        let pool = orm.get_sqlite_connection_pool().clone();
        Self { pool, orm }
    }
}
