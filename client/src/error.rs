use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a non-success status and an error message.
    #[error("{message}")]
    Application { status: u16, message: String },

    /// No usable response: the request failed or the body was malformed.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ClientError {
    pub fn application(status: u16, message: impl Into<String>) -> Self {
        Self::Application {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("malformed response: {}", err))
    }
}
