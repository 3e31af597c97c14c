use thiserror::Error;

/// A request that never produced an HTTP response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Ureq(#[from] ureq::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors that stop a batch before or while it runs.
#[derive(Debug, Error)]
pub enum CheckError {
    /// `urls` and the parameter list must line up one-to-one.
    #[error("{urls} urls but {inputs} parameter entries")]
    LengthMismatch { urls: usize, inputs: usize },

    /// Writing the summary failed.
    #[error("writing report: {0}")]
    Report(#[from] std::io::Error),
}
