// API client module: a small blocking HTTP client that talks to the
// Grafana REST API. It is intentionally synchronous; the tool issues one
// request at a time and each response gates the next call.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;

/// Blocking client for the Grafana HTTP API. Holds a reqwest client with
/// the bearer token baked into its default headers, plus the base URL of
/// the instance.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Folder as returned by the list endpoint. The instance-local numeric id
/// is not exposed here; fetch the folder by uid to obtain it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Folder {
    pub uid: String,
    pub title: String,
}

/// Folder as returned by `GET /api/folders/{uid}`, which does carry the
/// numeric id.
#[derive(Deserialize, Debug)]
pub struct FolderDetail {
    pub id: i64,
    pub uid: String,
    pub title: String,
}

/// One hit from the dashboard search endpoint. Only the uid matters; the
/// full dashboard is fetched separately per uid.
#[derive(Deserialize, Debug)]
pub struct DashboardHit {
    pub uid: String,
}

impl ApiClient {
    /// Build a client from the resolved configuration. TLS verification
    /// stays on unless the configuration explicitly disables it.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", config.grafana_token);
        let mut auth = HeaderValue::from_str(&bearer)
            .context("GRAFANA_TOKEN is not a valid header value")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: config.grafana_url.clone(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", &self.base_url, path);
        let res = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to send GET {}", path))?;
        let status = res.status();
        if !status.is_success() {
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("GET {} failed: {} - {}", path, status, txt);
        }
        res.json()
            .with_context(|| format!("Parsing response json from {}", path))
    }

    fn post_json(&self, path: &str, payload: &Value) -> Result<()> {
        let url = format!("{}{}", &self.base_url, path);
        let res = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .with_context(|| format!("Failed to send POST {}", path))?;
        let status = res.status();
        if !status.is_success() {
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("POST {} failed: {} - {}", path, status, txt);
        }
        Ok(())
    }

    /// List every datasource on the instance.
    pub fn list_datasources(&self) -> Result<Vec<Value>> {
        self.get_json("/api/datasources")
    }

    /// Create a datasource from a previously exported payload.
    pub fn create_datasource(&self, payload: &Value) -> Result<()> {
        self.post_json("/api/datasources", payload)
    }

    /// List every folder on the instance.
    pub fn list_folders(&self) -> Result<Vec<Folder>> {
        self.get_json("/api/folders")
    }

    /// Fetch one folder by uid, including its numeric id.
    pub fn get_folder(&self, uid: &str) -> Result<FolderDetail> {
        self.get_json(&format!("/api/folders/{}", uid))
    }

    /// Create a folder from a previously exported `{uid, title}` record.
    pub fn create_folder(&self, payload: &Value) -> Result<()> {
        self.post_json("/api/folders", payload)
    }

    /// Search for all dashboards on the instance.
    pub fn search_dashboards(&self) -> Result<Vec<DashboardHit>> {
        self.get_json("/api/search/?type=dash-db")
    }

    /// Fetch a full dashboard (the `{dashboard, meta}` envelope) by uid.
    pub fn get_dashboard(&self, uid: &str) -> Result<Value> {
        self.get_json(&format!("/api/dashboards/uid/{}", uid))
    }

    /// Create or overwrite a dashboard from an exported envelope.
    pub fn create_dashboard(&self, payload: &Value) -> Result<()> {
        self.post_json("/api/dashboards/db", payload)
    }
}
