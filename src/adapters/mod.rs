pub mod http_schema_client;
pub mod memory_schema_store;

pub use http_schema_client::{HttpSchemaClient, DEFAULT_BASE_URL};
pub use memory_schema_store::InMemorySchemaStore;
