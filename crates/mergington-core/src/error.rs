use thiserror::Error;

/// Core error type for the activity directory.
///
/// The `Display` output of the domain variants is the reason string that
/// clients receive, so it must stay stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No activity with the given name exists in the catalog
    #[error("Activity not found")]
    ActivityNotFound(String),

    /// The email normalized to an empty string
    #[error("Email is required")]
    EmailRequired,

    /// A participant with the same normalized email is already on the roster
    #[error("Student is already signed up")]
    AlreadySignedUp {
        /// Email as supplied by the caller
        email: String,
    },

    /// No roster entry matches the normalized email
    #[error("Participant not found")]
    ParticipantNotFound {
        /// Email as supplied by the caller
        email: String,
    },

    /// State store error
    #[error("State store error: {0}")]
    StateStoreError(String),
}

/// Broad classification of a [`CoreError`], used by transport layers to
/// pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The addressed activity or participant does not exist
    NotFound,
    /// The request was rejected during validation
    InvalidArgument,
    /// The store itself failed
    Internal,
}

impl CoreError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::ActivityNotFound(_) | CoreError::ParticipantNotFound { .. } => {
                ErrorKind::NotFound
            }
            CoreError::EmailRequired | CoreError::AlreadySignedUp { .. } => {
                ErrorKind::InvalidArgument
            }
            CoreError::StateStoreError(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
