//! CLI error types and exit code mapping

use restcanary_core::error::CanaryError;

/// Errors surfaced to the user by the restcanary CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A command-specific operation failed.
    #[error("{0}")]
    Command(String),

    /// The target service could not be reached at all.
    #[error("service not reachable: {0}")]
    ServiceUnreachable(String),

    /// The lifecycle run finished with at least one failing scenario.
    #[error("contract failure: {0}")]
    ContractFailure(String),

    /// JSON serialization failed while rendering output.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (file read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped domain error from restcanary-core.
    #[error("{0}")]
    Core(#[from] CanaryError),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                 |
    /// |------|-------------------------|
    /// | 0    | Success                 |
    /// | 1    | General / command error |
    /// | 2    | Configuration error     |
    /// | 3    | Service unreachable     |
    /// | 4    | Contract failure        |
    /// | 10   | IO error                |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::ServiceUnreachable(_) => 3,
            Self::ContractFailure(_) => 4,
            Self::Io(_) => 10,
            Self::Command(_) | Self::JsonSerialize(_) | Self::Core(_) => 1,
        }
    }
}
