use async_trait::async_trait;

pub mod authoring;
pub mod error;
pub mod record;
pub mod schema;

pub use authoring::{AddFieldRequest, FieldDraft, FieldKindChoice, NewDictionary};
pub use error::{ServiceError, ServiceResult};
pub use record::{Record, RecordCollection, RecordValue};
pub use schema::{PrimitiveKind, PropertySpec, Schema, REF_SUFFIX};

/// The remote schema-management service
#[async_trait]
pub trait SchemaPort: Send + Sync {
    /// Dictionary names, in server order
    async fn list_dictionaries(&self) -> ServiceResult<Vec<String>>;
    async fn create_dictionary(&self, request: &NewDictionary) -> ServiceResult<()>;
    /// Field names of one dictionary
    async fn list_properties(&self, dictionary: &str) -> ServiceResult<Vec<String>>;
    async fn get_schema(&self, dictionary: &str) -> ServiceResult<Schema>;
    async fn add_field(&self, dictionary: &str, request: &AddFieldRequest) -> ServiceResult<()>;
}
