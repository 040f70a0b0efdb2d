use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Failure to subscribe an editor to a [`ReleaseSignal`](crate::ReleaseSignal).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttachError {
    #[error("the release signal already has a listener")]
    AlreadyAttached,

    #[error("the editor already listens to a release signal")]
    EditorAttached,
}
