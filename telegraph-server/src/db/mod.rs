//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - Bounded pool shared by all handlers, no Arc<Mutex<Connection>>
//! - Every statement binds its parameters, user input never reaches SQL text
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::create_pool;
pub use repos::*;
