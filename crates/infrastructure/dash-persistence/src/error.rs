#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference document is invalid: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceErrorKind {
    NoConfigDir,
    Io,
    Codec,
    Unavailable,
}

impl PreferenceError {
    pub fn kind(&self) -> PreferenceErrorKind {
        match self {
            PreferenceError::NoConfigDir => PreferenceErrorKind::NoConfigDir,
            PreferenceError::Io(_) => PreferenceErrorKind::Io,
            PreferenceError::Serde(_) => PreferenceErrorKind::Codec,
            PreferenceError::Unavailable(_) => PreferenceErrorKind::Unavailable,
        }
    }
}
