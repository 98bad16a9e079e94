//! HTTP server configuration object.

use family_office::outbound::persistence::DbPool;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: String,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration around an established pool.
    #[must_use]
    pub fn new(bind_addr: impl Into<String>, db_pool: DbPool) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            db_pool,
        }
    }
}
