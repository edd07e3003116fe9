use thiserror::Error;

#[derive(Error, Debug)]
pub enum IapError {
    /// A caller-supplied payment field is missing or does not match the
    /// vendor's record.
    #[error("{message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
    /// A caller-supplied payment field is present but malformed.
    #[error("{message}")]
    InvalidFormat {
        field: &'static str,
        message: String,
    },
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
    /// The App Store answered with a status other than valid or expired.
    #[error("{message}")]
    AppStore { status: i32, message: String },
    /// Google answered with an HTTP status of 400 or above. The message is the
    /// one of the underlying request error.
    #[error("{source}")]
    GooglePlay {
        #[source]
        source: reqwest::Error,
    },
    #[error("{0}")]
    AmazonAppstore(String),
    #[error("{0}")]
    Roku(String),
    #[error("service account key file could not be loaded: {0}")]
    KeyFile(#[source] std::io::Error),
    #[error("service account token could not be signed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected vendor response: {0}")]
    InvalidResponse(String),
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(String),
}

pub type Result<T> = std::result::Result<T, IapError>;

impl IapError {
    pub(crate) fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_format(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending payment field, for input and format errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } | Self::InvalidFormat { field, .. } => Some(field),
            _ => None,
        }
    }
}
