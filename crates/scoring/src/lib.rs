pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use error::{EngineError, Result};
pub use store::{DataStore, MemoryStore};
