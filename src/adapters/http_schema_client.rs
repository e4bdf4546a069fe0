//! HTTP client for the schema-management service

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::domain::{
    AddFieldRequest, NewDictionary, Schema, SchemaPort, ServiceError, ServiceResult,
};

/// Default base URL of the schema service
pub const DEFAULT_BASE_URL: &str = "http://localhost:5253/api";

pub struct HttpSchemaClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSchemaClient {
    pub fn new(base_url: &str, timeout: Duration) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/schemas[/{segment}...]` with each segment percent-encoded
    fn schemas_url(&self, segments: &[&str]) -> String {
        let mut url = format!("{}/schemas", self.base_url);
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ServiceResult<T> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }

    /// POST a JSON body; the response body is not used
    async fn post_json<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> ServiceResult<()> {
        debug!(url, "POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        check_status(response).await.map(|_| ())
    }
}

async fn check_status(response: reqwest::Response) -> ServiceResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ServiceError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl SchemaPort for HttpSchemaClient {
    async fn list_dictionaries(&self) -> ServiceResult<Vec<String>> {
        self.get_json(&self.schemas_url(&[])).await
    }

    async fn create_dictionary(&self, request: &NewDictionary) -> ServiceResult<()> {
        self.post_json(&self.schemas_url(&[]), request).await
    }

    async fn list_properties(&self, dictionary: &str) -> ServiceResult<Vec<String>> {
        let value: Value = self
            .get_json(&self.schemas_url(&[dictionary, "properties"]))
            .await?;

        match value {
            Value::Object(map) => Ok(map.keys().cloned().collect()),
            other => Err(ServiceError::Decode(format!(
                "expected an object of properties, got {}",
                other
            ))),
        }
    }

    async fn get_schema(&self, dictionary: &str) -> ServiceResult<Schema> {
        let value: Value = self.get_json(&self.schemas_url(&[dictionary])).await?;
        Ok(Schema::from_value(&value))
    }

    async fn add_field(&self, dictionary: &str, request: &AddFieldRequest) -> ServiceResult<()> {
        self.post_json(&self.schemas_url(&[dictionary, "fields"]), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_encoded() {
        let client = HttpSchemaClient::new("http://svc/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://svc/api");
        assert_eq!(client.schemas_url(&[]), "http://svc/api/schemas");
        assert_eq!(
            client.schemas_url(&["Order Lines", "fields"]),
            "http://svc/api/schemas/Order%20Lines/fields"
        );
    }
}
