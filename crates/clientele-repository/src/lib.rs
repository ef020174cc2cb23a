//! # Clientele Repository
//!
//! Record store for customer records.
//!
//! ```text
//! CustomerService
//!   ↓  Arc<dyn CustomerRepository>
//! MySqlCustomerRepository  |  InMemoryCustomerRepository
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```
//!
//! The in-memory store is a complete implementation used by tests and by
//! local runs without a database.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::*;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
