//! Read-only access to the pull request being evaluated.

use mergesignal_types::PullSnapshotV1;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure reported by a [`PullContext`] while listing labels or comments.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct PullError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl PullError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Accessor the host supplies for one pull request.
///
/// Listing calls may go over the network and may fail; the engine propagates those
/// failures instead of treating them as a non-match. Nothing is cached between calls.
pub trait PullContext {
    fn body(&self) -> &str;

    /// Comment bodies, oldest first.
    fn comments(&self) -> Result<Vec<String>, PullError>;

    fn labels(&self) -> Result<Vec<String>, PullError>;

    /// `(target, source)` branch names.
    fn branches(&self) -> (&str, &str);

    /// Login of the account that opened the pull request.
    fn creator(&self) -> &str;
}

impl PullContext for PullSnapshotV1 {
    fn body(&self) -> &str {
        &self.body
    }

    fn comments(&self) -> Result<Vec<String>, PullError> {
        Ok(self.comments.clone())
    }

    fn labels(&self) -> Result<Vec<String>, PullError> {
        Ok(self.labels.clone())
    }

    fn branches(&self) -> (&str, &str) {
        (&self.base, self.head.as_deref().unwrap_or(""))
    }

    fn creator(&self) -> &str {
        &self.creator
    }
}
