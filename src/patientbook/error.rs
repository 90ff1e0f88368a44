use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("The person index provided is invalid")]
    InvalidIndex,

    #[error("Invalid range: {0}")]
    InvalidIndexRange(String),

    #[error("This person already exists in the address book")]
    DuplicatePatient,

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Unknown command")]
    UnknownCommand,

    #[error("Invalid command format! \n{usage}")]
    InvalidArgumentFormat { usage: String },

    #[error("Empty command, type `help` to see what you can do")]
    EmptyCommand,

    #[error("{0}")]
    InvalidField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl BookError {
    pub fn invalid_format(usage: impl Into<String>) -> Self {
        BookError::InvalidArgumentFormat {
            usage: usage.into(),
        }
    }

    /// True for errors the user caused by typing something wrong, as opposed
    /// to failures of the machinery underneath.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            BookError::Io(_)
                | BookError::Serialization(_)
                | BookError::Config(_)
                | BookError::PatientNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
