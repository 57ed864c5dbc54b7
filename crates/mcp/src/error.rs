// Dispatch errors and their coarse classification

use peakmojo_core::{EncodeError, RegistryError};
use peakmojo_sdk::PeakMojoError;

/// Coarse failure class, used for logging and for telling caller mistakes
/// apart from remote failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    UnknownOperation,
    MissingArgument,
    Transport,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Api(#[from] PeakMojoError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl DispatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::Registry(
                RegistryError::UnknownTool(_)
                | RegistryError::UnknownResource(_)
                | RegistryError::UnsupportedScheme(_),
            ) => ErrorKind::UnknownOperation,
            DispatchError::Registry(
                RegistryError::MissingArgument { .. } | RegistryError::InvalidArgument { .. },
            ) => ErrorKind::MissingArgument,
            DispatchError::Api(PeakMojoError::Config(_) | PeakMojoError::InvalidUrl(_)) => {
                ErrorKind::Config
            }
            DispatchError::Api(_) | DispatchError::Encode(_) => ErrorKind::Transport,
        }
    }
}
