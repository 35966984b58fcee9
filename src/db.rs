pub mod catalog;
pub use catalog::PipelineCatalog;
pub mod memory;
pub use memory::{InMemoryRepository, Record, Repository};
pub mod seed;
pub use seed::SampleData;
