pub mod classify;
pub mod fetch;
pub mod store;
pub mod writer;

pub use classify::{Classifier, TripleKind};
pub use fetch::StoredData;
pub use store::{GraphStore, Neo4jStore, NodeLabel, StorageError};
pub use writer::{store_batch, WriteReport};
