//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Runtime(_) => crate::exitcode::OSERR,
                InfraError::Application(ApplicationError::Config { .. }) => {
                    crate::exitcode::CONFIG
                }
                InfraError::Application(ApplicationError::OperationFailed { .. }) => {
                    crate::exitcode::UNAVAILABLE
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::StoreError;

    #[test]
    fn given_query_failure_when_exit_code_then_unavailable() {
        let err: CliError = ApplicationError::OperationFailed {
            context: "get parameters by path: /A".into(),
            source: Box::new(StoreError::MalformedResponse("x".into())),
        }
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::UNAVAILABLE);
        assert_eq!(
            err.to_string(),
            "get parameters by path: /A: malformed response: x"
        );
    }

    #[test]
    fn given_config_error_when_exit_code_then_config() {
        let err: CliError = ApplicationError::Config {
            message: "bad".into(),
        }
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_runtime_failure_when_exit_code_then_oserr() {
        let err: CliError = InfraError::Runtime(std::io::Error::other("no threads")).into();
        assert_eq!(err.exit_code(), crate::exitcode::OSERR);
        assert_eq!(err.to_string(), "cannot create async runtime: no threads");
    }

    #[test]
    fn given_invalid_args_when_exit_code_then_usage() {
        assert_eq!(
            CliError::InvalidArgs("x".into()).exit_code(),
            crate::exitcode::USAGE
        );
    }
}
