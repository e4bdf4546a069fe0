//! In-memory schema service
//!
//! Behaves like the remote service for offline use and tests: dictionaries
//! are kept in creation order, fields in insertion order. Can be switched
//! offline to simulate an unreachable service, and counts requests.

use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{
    AddFieldRequest, NewDictionary, PropertySpec, Schema, SchemaPort, ServiceError,
    ServiceResult,
};

#[derive(Default)]
pub struct InMemorySchemaStore {
    schemas: Arc<RwLock<IndexMap<String, Schema>>>,
    offline: AtomicBool,
    requests: AtomicUsize,
}

impl InMemorySchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing dictionaries
    pub fn with_schemas<I>(schemas: I) -> Self
    where
        I: IntoIterator<Item = (String, Schema)>,
    {
        Self {
            schemas: Arc::new(RwLock::new(schemas.into_iter().collect())),
            ..Default::default()
        }
    }

    /// While offline every call fails with a transport error
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of calls received so far, failed ones included
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn begin_request(&self) -> ServiceResult<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(ServiceError::Transport("schema service unreachable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SchemaPort for InMemorySchemaStore {
    async fn list_dictionaries(&self) -> ServiceResult<Vec<String>> {
        self.begin_request()?;
        let schemas = self.schemas.read().await;
        Ok(schemas.keys().cloned().collect())
    }

    async fn create_dictionary(&self, request: &NewDictionary) -> ServiceResult<()> {
        self.begin_request()?;
        let mut schemas = self.schemas.write().await;
        schemas.entry(request.name.clone()).or_default();
        Ok(())
    }

    async fn list_properties(&self, dictionary: &str) -> ServiceResult<Vec<String>> {
        self.begin_request()?;
        let schemas = self.schemas.read().await;
        schemas
            .get(dictionary)
            .map(|s| s.properties().map(|(name, _)| name.to_string()).collect())
            .ok_or_else(|| ServiceError::NotFound(dictionary.to_string()))
    }

    async fn get_schema(&self, dictionary: &str) -> ServiceResult<Schema> {
        self.begin_request()?;
        let schemas = self.schemas.read().await;
        schemas
            .get(dictionary)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(dictionary.to_string()))
    }

    async fn add_field(&self, dictionary: &str, request: &AddFieldRequest) -> ServiceResult<()> {
        self.begin_request()?;
        let mut schemas = self.schemas.write().await;
        let schema = schemas
            .get_mut(dictionary)
            .ok_or_else(|| ServiceError::NotFound(dictionary.to_string()))?;

        let spec = match (&request.reference, request.kind) {
            (Some(target), _) => PropertySpec::Reference(target.clone()),
            (None, Some(kind)) => PropertySpec::Primitive(kind),
            (None, None) => PropertySpec::Untyped,
        };
        schema.insert(request.field_name.clone(), spec);
        if request.required {
            schema.mark_required(&request.field_name);
        }
        Ok(())
    }
}
