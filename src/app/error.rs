use thiserror::Error;

/// Failures of the profile backend collaborator.
///
/// The page collapses every variant into a generic localized message; nothing
/// here is fatal.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to reach the profile service")]
    Transport(#[from] reqwest::Error),

    #[error("an internal error occurred")]
    Anyhow(#[from] anyhow::Error),
}
