use crate::{
    error::{
        Error,
        Result,
    },
    types::{
        GetRulesParams,
        Rules,
    },
};
use reqwest::{
    header::ACCEPT,
    StatusCode,
};
use std::time::Duration;
use url::Url;

/// HTTP client bound to one EPGStation API base URL, e.g.
/// `http://localhost:8888/api`.
///
/// Cloning is cheap, the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client without a request timeout.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::build(base_url.as_ref(), reqwest::Client::builder())
    }

    /// Create a client whose requests fail once `timeout` has elapsed.
    pub fn with_timeout(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        Self::build(base_url.as_ref(), reqwest::Client::builder().timeout(timeout))
    }

    fn build(base_url: &str, builder: reqwest::ClientBuilder) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let http = builder.build().map_err(Error::Build)?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET <base_url>/rules`
    #[instrument(level = "debug", skip(self), fields(base_url = %self.base_url))]
    pub async fn get_rules(&self, params: &GetRulesParams) -> Result<Rules> {
        let url = self.endpoint("rules")?;

        let response = self
            .http
            .get(url)
            .query(params)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::Transport)?;
        trace!(%status, len = body.len(), "received rules response");

        parse_get_rules_response(status, &body)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push(path);
        Ok(url)
    }
}

/// Interpret a raw `GET /rules` response. Only `200 OK` carries rules, every
/// other status is an error, with EPGStation's error envelope attached when
/// the body contains one.
pub fn parse_get_rules_response(status: StatusCode, body: &[u8]) -> Result<Rules> {
    if status != StatusCode::OK {
        return Err(Error::UnexpectedStatus {
            status,
            envelope: serde_json::from_slice(body).ok(),
        });
    }
    serde_json::from_slice(body).map_err(Error::Decode)
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let invalid = |reason: String| Error::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("cannot be a base".to_string()));
    }
    Ok(url)
}
