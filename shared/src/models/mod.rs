//! Data models
//!
//! Shared between floor-server and frontend (via API).
//! All IDs are UUID strings generated by the store.

pub mod customer;
pub mod order;
pub mod settings;
pub mod table;
pub mod table_group;

// Re-exports
pub use customer::*;
pub use order::*;
pub use settings::*;
pub use table::*;
pub use table_group::*;
