//! Bacon Oracle - Client for the Oracle of Bacon movie-connection service
//!
//! This crate builds escaped query URLs from a pair of actor names and an
//! API credential, fetches the service's XML reply, and classifies it into
//! a typed response: a connection path, spelling suggestions, a credential
//! rejection, or an unknown payload.

// Core modules
pub mod client;
pub mod error;
pub mod request;
pub mod response;

// Re-export main types for convenience
pub use client::OracleClient;
pub use error::{OracleError, Result};
pub use request::{ConnectionQuery, RequestTarget, ORACLE_ENDPOINT};
pub use response::OracleResponse;

/// Run one full query cycle: validate, build the URL, fetch, classify
///
/// Fails fast on invalid input with [`OracleError::Validation`]; any
/// transport problem surfaces as [`OracleError::Network`]. The classified
/// outcome is a normal return value, including a credential rejection.
pub async fn find_connections(
    query: &ConnectionQuery,
    client: &OracleClient,
) -> Result<OracleResponse> {
    query.validate()?;
    let target = query.request_target()?;
    let payload = client.fetch(&target).await?;

    OracleResponse::from_xml(&payload)
}
