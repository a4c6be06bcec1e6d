//! [`Backend`] talking to a repmap server over HTTP.

use async_trait::async_trait;
use repmap_core::{Catalog, SignupRecord, DISTRICT_TO_REP_FILE, STATE_OPTIONS_FILE};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{WidgetError, WidgetResult};
use crate::form::UNKNOWN_ERROR;
use crate::runtime::Backend;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    /// `base` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base: &str) -> WidgetResult<Self> {
        Ok(Self::with_client(Client::new(), Url::parse(base)?))
    }

    pub fn with_client(client: Client, mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { client, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> WidgetResult<Url> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    async fn get_text(&self, path: &str) -> WidgetResult<String> {
        let url = self.url(path)?;
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_catalog(&self) -> WidgetResult<Catalog> {
        let options_path = format!("data/{STATE_OPTIONS_FILE}");
        let districts_path = format!("data/{DISTRICT_TO_REP_FILE}");
        let (options, districts) = tokio::try_join!(
            self.get_text(&options_path),
            self.get_text(&districts_path)
        )?;
        Ok(Catalog::from_json(&options, &districts)?)
    }

    async fn fetch_map(&self, path: &str) -> WidgetResult<String> {
        self.get_text(path).await
    }

    async fn submit(&self, record: &SignupRecord) -> WidgetResult<Option<String>> {
        let url = self.url("api/submit")?;
        debug!(%url, "POST");
        let response = self.client.post(url).json(record).send().await?;
        let status = response.status();
        let body: Value = serde_json::from_str(&response.text().await?)?;
        if status.is_success() {
            return Ok(body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string));
        }
        let error = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR);
        Err(WidgetError::Server(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_gets_trailing_slash() {
        let backend = HttpBackend::new("http://localhost:3000/widget").unwrap();
        assert_eq!(backend.base().as_str(), "http://localhost:3000/widget/");
        assert_eq!(
            backend.url("/states/ohio.svg").unwrap().as_str(),
            "http://localhost:3000/widget/states/ohio.svg"
        );
    }

    #[test]
    fn test_root_base() {
        let backend = HttpBackend::new("http://localhost:3000").unwrap();
        assert_eq!(
            backend.url("api/submit").unwrap().as_str(),
            "http://localhost:3000/api/submit"
        );
    }

    #[test]
    fn test_rejects_bad_base() {
        assert!(matches!(
            HttpBackend::new("not a url"),
            Err(WidgetError::Url(_))
        ));
    }
}
