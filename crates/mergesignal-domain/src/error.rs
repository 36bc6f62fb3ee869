use crate::pull::PullError;

const LABELS_REASON: &str = "unable to list pull request labels";
const COMMENTS_REASON: &str = "unable to list pull request comments";

/// An accessor failure that aborted evaluation.
///
/// Distinct from a non-match: no partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("{}", LABELS_REASON)]
    Labels(#[source] PullError),

    #[error("{}", COMMENTS_REASON)]
    Comments(#[source] PullError),
}

impl SignalError {
    /// Human-readable reason, identical to the `Display` output.
    pub fn reason(&self) -> &'static str {
        match self {
            SignalError::Labels(_) => LABELS_REASON,
            SignalError::Comments(_) => COMMENTS_REASON,
        }
    }

    /// The accessor failure behind this error.
    pub fn pull_error(&self) -> &PullError {
        match self {
            SignalError::Labels(e) | SignalError::Comments(e) => e,
        }
    }
}
