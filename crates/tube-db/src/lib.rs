//! # tube-db
//!
//! Storage layer implementing the tube-core traits.
//!
//! - PostgreSQL via SQLx: pool management, migrations, row models, mappers,
//!   and the `Pg*` repositories including [`PgEngagementLedger`].
//! - [`MemoryStore`]: an in-process implementation of every trait, used for
//!   local runs and tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tube_db::{create_pool, run_migrations, PgEngagementLedger, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new("postgres://localhost/tube")).await?;
//!     run_migrations(&pool).await?;
//!     let ledger = PgEngagementLedger::new(pool).with_max_attempts(3);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgCommentRepository, PgEngagementLedger, PgUserRepository, PgVideoRepository};
