//! Driven port for the players REST backend.
//!
//! The domain owns the request and response shapes; adapters own transport,
//! status handling and JSON decoding.

use async_trait::async_trait;
use pagination::PageRequest;

use super::define_port_error;
use crate::domain::player::{PlayerDraft, PlayerId, PlayerRecord};

/// Body returned by the count endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountPayload {
    /// A bare number, or an object carrying a `count` field.
    Count(u64),
    /// Any other shape, with a preview of the raw body for logging.
    Unrecognised(String),
}

define_port_error! {
    /// Errors surfaced while calling the players backend.
    pub enum PlayerGatewayError {
        /// The request never produced a response.
        Transport { message: String } =>
            "players backend transport failed: {message}",
        /// The request exceeded the configured timeout.
        Timeout { message: String } =>
            "players backend timed out: {message}",
        /// The backend answered with a non-success status.
        Status { status: u16, message: String } =>
            "players backend responded with status {status}: {message}",
        /// The response body did not have the expected shape.
        Decode { message: String } =>
            "players backend response could not be decoded: {message}",
    }
}

impl PlayerGatewayError {
    /// Whether the failure is a malformed body rather than a failed request.
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Port for the five players endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerGateway: Send + Sync {
    /// `GET /players/count`.
    async fn fetch_count(&self) -> Result<CountPayload, PlayerGatewayError>;

    /// `GET /players?pageNumber=N&pageSize=M`.
    ///
    /// A body that is not a sequence of records is a
    /// [`PlayerGatewayError::Decode`].
    async fn fetch_page(
        &self,
        request: PageRequest,
    ) -> Result<Vec<PlayerRecord>, PlayerGatewayError>;

    /// `POST /players`.
    async fn create(&self, draft: &PlayerDraft) -> Result<(), PlayerGatewayError>;

    /// `POST /players/{id}`, replacing every field.
    async fn update(&self, id: PlayerId, draft: &PlayerDraft) -> Result<(), PlayerGatewayError>;

    /// `DELETE /players/{id}`.
    async fn delete(&self, id: PlayerId) -> Result<(), PlayerGatewayError>;
}
