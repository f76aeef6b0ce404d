pub mod infrastructure;
#[cfg(feature = "database")]
pub mod postgres;
pub mod ports;

pub use infrastructure::memory::InMemoryDatabase;
#[cfg(feature = "database")]
pub use postgres::{PoolStats, PostgresDatabase};
