use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgetError {
    #[error("Transport error: {0}")]
    Transport(Box<reqwest::Error>),

    #[error("Got response status code {0}")]
    HttpStatus(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Forgettable API error: {0}")]
    Api(String),

    #[error("{0}")]
    Custom(String),
}

impl From<reqwest::Error> for ForgetError {
    fn from(error: reqwest::Error) -> Self {
        ForgetError::Transport(Box::new(error))
    }
}
