//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows and domain types and map
//! database failures onto port error enums. Row structs (`models.rs`) and
//! table definitions (`schema.rs`) stay private to this module.
//!
//! # Example
//!
//! ```no_run
//! use family_office::outbound::persistence::{DbPool, DieselFamilyRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), family_office::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/family_office")).await?;
//! let families = DieselFamilyRepository::new(pool);
//! # let _ = families;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_family_repository;
mod diesel_family_role_repository;
mod diesel_membership_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_family_repository::DieselFamilyRepository;
pub use diesel_family_role_repository::DieselFamilyRoleRepository;
pub use diesel_membership_repository::DieselMembershipRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
