// Storage layer for the calendar
// Decision: Support both SQLite (durable file, default) and in-memory (dev mode)
//
// Services talk to StorageBackend only; the two implementations expose the
// same observable behavior, including row ordering (id ascending).

pub mod backend;
pub mod memory;
pub mod models;
pub mod repositories;


pub use backend::StorageBackend;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::Database;
