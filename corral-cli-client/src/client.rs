use corral_models::{Error as ApiError, Record, ServiceRegistration, StoredEntry};
use reqwest::blocking as http;
use reqwest::{StatusCode, Url};

use crate::cli::ConnectionOpts;

/// Errors raised while talking to the remote store.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("could not connect to the key/value store")]
    Connect(#[source] reqwest::Error),
    #[error("store responded with {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error(transparent)]
    Http(reqwest::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() || e.is_request() {
            ClientError::Connect(e)
        } else {
            ClientError::Http(e)
        }
    }
}

/// Blocking accessor for the store's HTTP API.
///
/// Every request carries the configured datacenter and ACL token as
/// query parameters when they are set.
pub struct StoreClient {
    http: http::Client,
    base_url: Url,
    datacenter: Option<String>,
    token: Option<String>,
}

impl StoreClient {
    pub fn new(opts: &ConnectionOpts) -> Result<Self, ClientError> {
        let raw = format!(
            "{}://{}:{}/v1/",
            opts.api_scheme, opts.api_host, opts.api_port
        );
        let base_url = Url::parse(&raw).map_err(|_| ClientError::InvalidUrl(raw))?;

        Ok(StoreClient {
            http: http::Client::new(),
            base_url,
            datacenter: opts.datacenter.clone(),
            token: opts.token.clone(),
        })
    }

    /// Fetches the raw value stored under `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let url = self.kv_url(key)?;
        let req = self.http.get(url).query(&[("raw", "1")]);
        let resp = self.common_query(req).send()?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let resp = check_status(resp)?;
        Ok(Some(resp.text()?))
    }

    /// Writes `value` under `key`. An absent value stores a folder marker.
    pub fn set(
        &self,
        key: &str,
        value: Option<&str>,
        flags: &[serde_json::Value],
    ) -> Result<(), ClientError> {
        let url = self.kv_url(key)?;
        let mut req = self
            .http
            .put(url)
            .body(value.unwrap_or_default().to_string());
        if !flags.is_empty() {
            req = req.query(&[("flags", serde_json::to_string(flags)?)]);
        }

        check_status(self.common_query(req).send()?)?;
        Ok(())
    }

    /// Writes a full record. When `replace` is false an existing key is
    /// left untouched; the existence check is not atomic with the write.
    pub fn set_record(&self, record: &Record, replace: bool) -> Result<(), ClientError> {
        if !replace && self.get(&record.path)?.is_some() {
            return Ok(());
        }
        self.set(&record.path, record.value.as_deref(), &record.flags)
    }

    /// Deletes `key`; with `recurse` every key sharing the prefix goes too.
    pub fn delete(&self, key: &str, recurse: bool) -> Result<(), ClientError> {
        let url = self.kv_url(key)?;
        let mut req = self.http.delete(url);
        if recurse {
            req = req.query(&[("recurse", "1")]);
        }

        check_status(self.common_query(req).send()?)?;
        Ok(())
    }

    /// Enumerates every key in the store.
    pub fn keys(&self) -> Result<Vec<String>, ClientError> {
        let url = self.kv_url("")?;
        let req = self.http.get(url).query(&[("keys", "1")]);
        let resp = check_status(self.common_query(req).send()?)?;
        Ok(resp.json()?)
    }

    /// Enumerates every record in the store, in the store's own order.
    pub fn records(&self) -> Result<Vec<Record>, ClientError> {
        let url = self.kv_url("")?;
        let req = self.http.get(url).query(&[("recurse", "1")]);
        let resp = check_status(self.common_query(req).send()?)?;

        let entries: Vec<StoredEntry> = resp.json()?;
        Ok(entries.into_iter().map(Record::from).collect())
    }

    /// Registers a service with the local agent.
    pub fn register(&self, registration: &ServiceRegistration) -> Result<(), ClientError> {
        let url = self
            .base_url
            .join("agent/service/register")
            .map_err(|_| ClientError::InvalidUrl("agent/service/register".to_string()))?;
        let req = self.http.put(url).json(registration);

        check_status(self.common_query(req).send()?)?;
        Ok(())
    }

    fn kv_url(&self, key: &str) -> Result<Url, ClientError> {
        self.base_url
            .join("kv/")
            .and_then(|url| url.join(key))
            .map_err(|_| ClientError::InvalidUrl(key.to_string()))
    }

    fn common_query(&self, mut req: http::RequestBuilder) -> http::RequestBuilder {
        if let Some(dc) = &self.datacenter {
            req = req.query(&[("dc", dc.as_str())]);
        }
        if let Some(token) = &self.token {
            req = req.query(&[("token", token.as_str())]);
        }
        req
    }
}

fn check_status(resp: http::Response) -> Result<http::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .json::<ApiError>()
        .map(|e| e.to_string())
        .unwrap_or_else(|_| status.to_string());
    Err(ClientError::Api { status, message })
}
