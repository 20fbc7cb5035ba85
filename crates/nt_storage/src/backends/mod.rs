pub mod json_file;
pub mod memory;

pub use json_file::{JsonFileStore, DEFAULT_DATA_FILE};
pub use memory::InMemoryStore;
