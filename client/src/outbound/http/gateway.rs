//! Reqwest-backed players gateway.
//!
//! This adapter owns transport details only: endpoint building, timeout and
//! HTTP error mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use pagination::PageRequest;
use reqwest::{Client, RequestBuilder, StatusCode};
use thiserror::Error;
use url::Url;

use super::dto::{CountDto, PlayerRecordDto};
use crate::domain::player::{PlayerDraft, PlayerId, PlayerRecord};
use crate::domain::ports::{CountPayload, PlayerGateway, PlayerGatewayError};

const COUNT_SEGMENT: &str = "count";

/// Failure to construct a [`PlayerHttpGateway`].
#[derive(Debug, Error)]
pub enum GatewayBuildError {
    /// The base URL cannot carry path segments (for example `mailto:`).
    #[error("players base URL `{url}` cannot carry path segments")]
    NotABase { url: Url },
    /// The reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Gateway calling the players collection rooted at one base URL.
///
/// With base `http://host/rest/players` the endpoints are
/// `GET {base}/count`, `GET {base}?pageNumber&pageSize`, `POST {base}`,
/// `POST {base}/{id}` and `DELETE {base}/{id}`.
#[derive(Debug, Clone)]
pub struct PlayerHttpGateway {
    client: Client,
    collection: Url,
}

impl PlayerHttpGateway {
    /// Build a gateway. Without `timeout` the transport default applies.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayBuildError`] when the URL cannot be a base or the
    /// reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, GatewayBuildError> {
        let mut collection = base_url;
        if collection.cannot_be_a_base() {
            return Err(GatewayBuildError::NotABase { url: collection });
        }
        if let Ok(mut segments) = collection.path_segments_mut() {
            segments.pop_if_empty();
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            collection,
        })
    }

    /// Collection URL every endpoint is derived from.
    pub const fn collection_url(&self) -> &Url {
        &self.collection
    }

    fn member_url(&self, segment: &str) -> Url {
        let mut url = self.collection.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(segment);
        }
        url
    }

    fn page_request(&self, request: PageRequest) -> RequestBuilder {
        self.client.get(self.collection.clone()).query(&request)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, PlayerGatewayError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl PlayerGateway for PlayerHttpGateway {
    async fn fetch_count(&self) -> Result<CountPayload, PlayerGatewayError> {
        let url = self.member_url(COUNT_SEGMENT);
        let body = self.send(self.client.get(url)).await?;
        Ok(parse_count(&body))
    }

    async fn fetch_page(
        &self,
        request: PageRequest,
    ) -> Result<Vec<PlayerRecord>, PlayerGatewayError> {
        let body = self.send(self.page_request(request)).await?;
        parse_page(&body)
    }

    async fn create(&self, draft: &PlayerDraft) -> Result<(), PlayerGatewayError> {
        let request = self.client.post(self.collection.clone()).json(draft);
        self.send(request).await.map(drop)
    }

    async fn update(&self, id: PlayerId, draft: &PlayerDraft) -> Result<(), PlayerGatewayError> {
        let request = self.client.post(self.member_url(&id.to_string())).json(draft);
        self.send(request).await.map(drop)
    }

    async fn delete(&self, id: PlayerId) -> Result<(), PlayerGatewayError> {
        let request = self.client.delete(self.member_url(&id.to_string()));
        self.send(request).await.map(drop)
    }
}

fn parse_count(body: &[u8]) -> CountPayload {
    match serde_json::from_slice::<CountDto>(body) {
        Ok(count) => CountPayload::Count(count.total()),
        Err(_) => CountPayload::Unrecognised(body_preview(body)),
    }
}

fn parse_page(body: &[u8]) -> Result<Vec<PlayerRecord>, PlayerGatewayError> {
    let decoded: Vec<PlayerRecordDto> = serde_json::from_slice(body).map_err(|error| {
        PlayerGatewayError::decode(format!("expected a sequence of players: {error}"))
    })?;
    Ok(decoded.into_iter().map(PlayerRecordDto::into_domain).collect())
}

fn map_transport_error(error: reqwest::Error) -> PlayerGatewayError {
    if error.is_timeout() {
        PlayerGatewayError::timeout(error.to_string())
    } else {
        PlayerGatewayError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> PlayerGatewayError {
    let message = body_preview(body);
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            PlayerGatewayError::timeout(format!("status {}: {message}", status.as_u16()))
        }
        _ => PlayerGatewayError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
