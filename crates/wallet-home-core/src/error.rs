#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HomeError {
    #[error("Token fetch failed: {message}")]
    Fetch { message: String },
    #[error("Navigation failed: {message}")]
    Navigation { message: String },
    #[error("Invalid configuration: {message}")]
    Config { message: String },
    #[error("Unknown home tab: {name}")]
    UnknownTab { name: String },
}

impl HomeError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }
}
