//! Read-only access to the IO-set store.

pub mod pool;
pub mod value;

// Re-export commonly used items
pub use pool::open_store;
pub use value::StoreValue;
