//! API client for the schema-management service

use gloo_net::http::{Request, Response};
use lexicon::domain::{AddFieldRequest, NewDictionary, Schema};
use serde_json::Value;

const API_BASE: &str = "http://localhost:5253/api";

/// Fetch dictionary names
pub async fn list_dictionaries() -> Result<Vec<String>, String> {
    let url = format!("{}/schemas", API_BASE);
    fetch_json::<Vec<String>>(&url).await
}

/// Create an empty dictionary
pub async fn create_dictionary(request: &NewDictionary) -> Result<(), String> {
    let url = format!("{}/schemas", API_BASE);
    post_empty(&url, request).await
}

/// Fetch the field names of one dictionary
pub async fn list_properties(dictionary: &str) -> Result<Vec<String>, String> {
    let url = format!(
        "{}/schemas/{}/properties",
        API_BASE,
        urlencoding::encode(dictionary)
    );
    match fetch_json::<Value>(&url).await? {
        Value::Object(map) => Ok(map.keys().cloned().collect()),
        other => Err(format!("Expected a property object, got {}", other)),
    }
}

/// Fetch the full schema document of one dictionary
pub async fn get_schema(dictionary: &str) -> Result<Schema, String> {
    let url = format!("{}/schemas/{}", API_BASE, urlencoding::encode(dictionary));
    let document = fetch_json::<Value>(&url).await?;
    Ok(Schema::from_value(&document))
}

/// Add a field to a dictionary
pub async fn add_field(dictionary: &str, request: &AddFieldRequest) -> Result<(), String> {
    let url = format!(
        "{}/schemas/{}/fields",
        API_BASE,
        urlencoding::encode(dictionary)
    );
    post_empty(&url, request).await
}

// ============================================================================
// Helpers
// ============================================================================

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    check_status(&response).await?;

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn post_empty<T: serde::Serialize>(url: &str, body: &T) -> Result<(), String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize body: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    check_status(&response).await
}

async fn check_status(response: &Response) -> Result<(), String> {
    if response.ok() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(format!("HTTP {}: {}", response.status(), body))
}
