use crate::inventory::kind::ObjectKind;
use crate::vsphere::VimError;
use thiserror::Error;

/// Top-level error for a single invocation. Every variant is fatal; the
/// cause text is folded into the message so the diagnostic stays one line.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("invalid connection URL {url:?}: {reason}")]
    Parse { url: String, reason: String },

    #[error("authentication failed: {0}")]
    Auth(VimError),

    #[error("could not create container view: {0}")]
    View(VimError),

    #[error("retrieving {kind} objects failed: {cause}")]
    Fetch { kind: ObjectKind, cause: VimError },

    #[error("{0}")]
    Usage(String),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("interrupted")]
    Interrupted,
}
