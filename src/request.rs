use crate::error::{OracleError, Result};
use std::fmt;
use url::Url;
use urlencoding::encode;

/// Production endpoint of the oracle service
pub const ORACLE_ENDPOINT: &str = "http://oracleofbacon.org/cgi-bin/xml";

/// A fully escaped URL for a single oracle query
///
/// One target corresponds to one query attempt. Targets are never
/// mutated or reused; changing the query means building a new target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget(Url);

impl RequestTarget {
    /// The target as a string slice, ready to hand to the transport
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The parsed URL backing this target
    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A movie-connection query between two actors
///
/// Fields are mutated freely through the setters; nothing is validated
/// until the caller asks. Both endpoints default to "Kevin Bacon", which
/// deliberately fails validation until at least one of them is changed.
#[derive(Debug, Clone)]
pub struct ConnectionQuery {
    from: String,
    to: String,
    api_key: String,
}

impl Default for ConnectionQuery {
    fn default() -> Self {
        Self {
            from: "Kevin Bacon".to_string(),
            to: "Kevin Bacon".to_string(),
            api_key: String::new(),
        }
    }
}

impl ConnectionQuery {
    /// Create a query with the given API key and default endpoints
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Set the starting actor name
    pub fn set_from<S: Into<String>>(&mut self, name: S) {
        self.from = name.into();
    }

    /// Set the destination actor name
    pub fn set_to<S: Into<String>>(&mut self, name: S) {
        self.to = name.into();
    }

    /// Set the API credential
    pub fn set_api_key<S: Into<String>>(&mut self, key: S) {
        self.api_key = key.into();
    }

    /// The starting actor name
    pub fn from_actor(&self) -> &str {
        &self.from
    }

    /// The destination actor name
    pub fn to_actor(&self) -> &str {
        &self.to
    }

    /// The API credential
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Run every validation rule and collect all violations
    ///
    /// The three presence checks and the from/to cross-field check run
    /// independently, so the caller sees every problem at once rather
    /// than only the first. Pure function of current field state.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if is_blank(&self.from) {
            errors.push("from is required".to_string());
        }
        if is_blank(&self.to) {
            errors.push("to is required".to_string());
        }
        if is_blank(&self.api_key) {
            errors.push("api key is required".to_string());
        }
        if self.from == self.to {
            errors.push("from cannot be the same as to".to_string());
        }

        errors
    }

    /// Whether the query passes every validation rule
    pub fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }

    /// Validate, returning all violated rules in a single error
    pub fn validate(&self) -> Result<()> {
        let messages = self.validation_errors();
        if messages.is_empty() {
            Ok(())
        } else {
            Err(OracleError::validation(messages))
        }
    }

    /// Build the escaped request URL against the production endpoint
    ///
    /// Each value is percent-encoded individually, so names containing
    /// `&`, `=`, spaces, or non-ASCII characters cannot corrupt the
    /// query string. Validity is not enforced here: callers are
    /// expected to validate first, and building from an invalid query is
    /// permitted but not recommended.
    pub fn request_target(&self) -> Result<RequestTarget> {
        self.request_target_at(ORACLE_ENDPOINT)
    }

    /// Build the escaped request URL against a custom endpoint
    ///
    /// Useful for alternate deployments of the service and for pointing
    /// tests at a mock server.
    pub fn request_target_at(&self, endpoint: &str) -> Result<RequestTarget> {
        let query = format!(
            "p={}&a={}&b={}",
            encode(&self.api_key),
            encode(&self.from),
            encode(&self.to)
        );
        let url = Url::parse(&format!("{}?{}", endpoint, query))?;

        Ok(RequestTarget(url))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
