use anyhow::{Context, Error, Result};
use log::*;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{require, FirebaseConfig};
use crate::model::business::BusinessRecord;

pub const BUSINESSES: &str = "businesses";

const FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";

pub trait DocumentSink {
    /// Adds `record` as a new document and returns the id the database assigned
    fn add(&self, collection: &str, record: &BusinessRecord) -> Result<String>;
}

// Firestore REST wire format
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    StringValue(String),
    ArrayValue(ArrayValue),
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ArrayValue {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

fn strings(values: &[String]) -> Value {
    Value::ArrayValue(ArrayValue {
        values: values.iter().cloned().map(Value::StringValue).collect(),
    })
}

impl From<&BusinessRecord> for Document {
    fn from(r: &BusinessRecord) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_owned(), Value::StringValue(r.name.clone()));
        fields.insert("industry".to_owned(), Value::StringValue(r.industry.to_string()));
        fields.insert("tags".to_owned(), strings(&r.tags));
        fields.insert("images".to_owned(), strings(&r.images));
        fields.insert("website".to_owned(), Value::StringValue(r.website.clone()));
        Document { name: None, fields }
    }
}

impl Document {
    /// Last path segment of the resource name, e.g. `projects/p/databases/(default)/documents/businesses/<id>`
    pub fn id(&self) -> Option<&str> {
        self.name.as_deref().and_then(|n| n.rsplit('/').next()).filter(|id| !id.is_empty())
    }
}

pub struct FirestoreClient {
    client: Client,
    config: FirebaseConfig,
    base_url: String,
}

impl FirestoreClient {
    pub fn new(client: Client, config: FirebaseConfig) -> Self {
        FirestoreClient {
            client,
            config,
            base_url: FIRESTORE_URL.to_owned(),
        }
    }

    /// Points at another Firestore REST root, e.g. an emulator's `http://host:port/v1`
    pub fn with_base_url(client: Client, config: FirebaseConfig, base_url: &str) -> Self {
        FirestoreClient {
            base_url: base_url.to_owned(),
            ..FirestoreClient::new(client, config)
        }
    }

    fn collection_url(&self, collection: &str) -> Result<String> {
        let project = require(&self.config.project_id, "FIREBASE_PROJECT_ID")?;
        Ok(format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url, project, collection
        ))
    }
}

impl DocumentSink for FirestoreClient {
    fn add(&self, collection: &str, record: &BusinessRecord) -> Result<String> {
        let url = self.collection_url(collection)?;
        let api_key = require(&self.config.api_key, "FIREBASE_API_KEY")?;
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&Document::from(record))
            .send()
            .with_context(|| format!("Error writing '{}' to {}", record.name, collection))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::msg(format!(
                "Firestore responded with {}: {}",
                status,
                response.text().unwrap_or_default().trim()
            )));
        }
        let created: Document = response
            .json()
            .with_context(|| "Failed to de-serialise created document")?;
        created
            .id()
            .map(str::to_owned)
            .with_context(|| "Created document has no name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::business::Industry;
    use crate::test_server::serve_once;
    use serde_json::json;

    fn record(images: Vec<String>) -> BusinessRecord {
        BusinessRecord {
            name: "Yost LLC".to_owned(),
            industry: Industry::Food,
            tags: vec!["Vegan".to_owned()],
            images,
            website: "https://sunny-pantry.com/".to_owned(),
        }
    }

    #[test]
    fn encodes_typed_fields() {
        let doc = Document::from(&record(vec!["https://img/1".to_owned()]));
        let body = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            body,
            json!({
                "fields": {
                    "name": {"stringValue": "Yost LLC"},
                    "industry": {"stringValue": "Food"},
                    "tags": {"arrayValue": {"values": [{"stringValue": "Vegan"}]}},
                    "images": {"arrayValue": {"values": [{"stringValue": "https://img/1"}]}},
                    "website": {"stringValue": "https://sunny-pantry.com/"}
                }
            })
        );
    }

    #[test]
    fn empty_images_is_an_empty_array() {
        let doc = Document::from(&record(vec![]));
        let body = serde_json::to_value(&doc).unwrap();
        assert_eq!(body["fields"]["images"], json!({"arrayValue": {}}));
    }

    #[test]
    fn id_is_last_segment_of_name() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/sparks/databases/(default)/documents/businesses/AbC123",
            "fields": {},
            "createTime": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(doc.id(), Some("AbC123"));
    }

    #[test]
    fn missing_project_is_an_error_on_write() {
        let client = FirestoreClient::new(Client::new(), FirebaseConfig::default());
        let err = client.add(BUSINESSES, &record(vec![])).unwrap_err();
        assert!(err.to_string().contains("FIREBASE_PROJECT_ID"));
    }

    fn configured() -> FirebaseConfig {
        FirebaseConfig {
            api_key: Some("secret".to_owned()),
            project_id: Some("sparks".to_owned()),
            ..FirebaseConfig::default()
        }
    }

    #[test]
    fn add_posts_document_and_returns_assigned_id() {
        let server = serve_once(
            "200 OK",
            r#"{"name": "projects/sparks/databases/(default)/documents/businesses/Xy9", "fields": {}}"#,
        );
        let client = FirestoreClient::with_base_url(
            Client::new(),
            configured(),
            &format!("{}/v1", server.base),
        );
        let id = client.add(BUSINESSES, &record(vec![])).unwrap();
        assert_eq!(id, "Xy9");

        let request = server.request.join().unwrap();
        assert!(request.starts_with("POST /v1/projects/sparks/databases/"), "{}", request);
        assert!(request.contains("/documents/businesses?key=secret "));
        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let sent: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(sent["fields"]["name"], json!({"stringValue": "Yost LLC"}));
    }

    #[test]
    fn error_status_aborts_with_the_status() {
        let server = serve_once("403 Forbidden", r#"{"error": {"status": "PERMISSION_DENIED"}}"#);
        let client = FirestoreClient::with_base_url(
            Client::new(),
            configured(),
            &format!("{}/v1", server.base),
        );
        let err = client.add(BUSINESSES, &record(vec![])).unwrap_err();
        assert!(err.to_string().contains("403"), "{}", err);
        assert!(err.to_string().contains("PERMISSION_DENIED"));
        server.request.join().unwrap();
    }
}
