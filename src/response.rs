use crate::error::{OracleError, Result};
use log::debug;
use roxmltree::Document;
use serde::{Deserialize, Serialize};

/// Fixed text for a credential rejection
///
/// The service only ever signals one error condition (a bad credential),
/// so the actual `<error>` element content is not inspected.
const UNAUTHORIZED_MESSAGE: &str = "Unauthorized access";

/// Fixed text for a payload that matches no known shape
const UNKNOWN_MESSAGE: &str = "unknown response type";

/// Typed outcome of one oracle query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleResponse {
    /// Alternating actor/movie chain linking the two queried actors
    Graph { path: Vec<String> },
    /// Candidate corrected names for an unrecognized actor
    Spellcheck { suggestions: Vec<String> },
    /// The service rejected the credential
    Unauthorized { message: String },
    /// The payload matched no known shape
    Unknown { message: String },
}

impl OracleResponse {
    /// Classify a raw XML payload into a typed outcome
    ///
    /// Rules apply in order, first match wins:
    /// 1. an `error` element anywhere → `Unauthorized`
    /// 2. at least one `link` element → `Graph`
    /// 3. a `spellcheck` element → `Spellcheck`
    /// 4. anything else → `Unknown`
    ///
    /// An empty or whitespace-only payload classifies as `Unknown`. Only
    /// a payload that is not well-formed XML at all fails, with
    /// [`OracleError::Parse`].
    pub fn from_xml(payload: &str) -> Result<Self> {
        if payload.trim().is_empty() {
            return Ok(Self::unknown());
        }

        let doc = Document::parse(payload)?;

        if contains_element(&doc, "error") {
            return Ok(Self::Unauthorized {
                message: UNAUTHORIZED_MESSAGE.to_string(),
            });
        }

        if contains_element(&doc, "link") {
            let actors = texts_beneath(&doc, "link", "actor");
            let movies = texts_beneath(&doc, "link", "movie");
            return Ok(Self::Graph {
                path: interleave_path(actors, movies),
            });
        }

        if contains_element(&doc, "spellcheck") {
            return Ok(Self::Spellcheck {
                suggestions: texts_beneath(&doc, "spellcheck", "match"),
            });
        }

        debug!("oracle payload matched no known shape");
        Ok(Self::unknown())
    }

    /// Whether this outcome carries a connection path
    pub fn is_graph(&self) -> bool {
        matches!(self, Self::Graph { .. })
    }

    /// Whether the service rejected the credential
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Escalate a credential rejection into an error
    ///
    /// For callers that treat an `Unauthorized` outcome as exceptional
    /// rather than a normal result. Every other outcome passes through.
    pub fn ensure_authorized(self) -> Result<Self> {
        match self {
            Self::Unauthorized { message } => Err(OracleError::invalid_credential(message)),
            other => Ok(other),
        }
    }

    fn unknown() -> Self {
        Self::Unknown {
            message: UNKNOWN_MESSAGE.to_string(),
        }
    }
}

/// Whether any element with the given name appears in the document
fn contains_element(doc: &Document, name: &str) -> bool {
    doc.descendants().any(|node| node.has_tag_name(name))
}

/// Text of every `inner` element beneath an `outer` element, in document order
///
/// An element with no text content yields an empty string, not an
/// omitted entry.
fn texts_beneath(doc: &Document, outer: &str, inner: &str) -> Vec<String> {
    doc.descendants()
        .filter(|node| {
            node.has_tag_name(inner) && node.ancestors().any(|parent| parent.has_tag_name(outer))
        })
        .map(|node| node.text().unwrap_or_default().to_string())
        .collect()
}

/// Interleave actors and movies pairwise into the connection path
///
/// A trailing unpaired actor is kept; movies beyond the actor count are
/// dropped; empty entries are compacted out.
fn interleave_path(actors: Vec<String>, movies: Vec<String>) -> Vec<String> {
    let mut path = Vec::with_capacity(actors.len() + movies.len());

    for (i, actor) in actors.into_iter().enumerate() {
        path.push(actor);
        if let Some(movie) = movies.get(i) {
            path.push(movie.clone());
        }
    }
    path.retain(|entry| !entry.is_empty());

    path
}
