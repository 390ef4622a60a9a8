use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokeStudyError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("PokeAPI returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),
}

impl From<std::io::Error> for PokeStudyError {
    fn from(error: std::io::Error) -> Self {
        PokeStudyError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for PokeStudyError {
    fn from(error: reqwest::Error) -> Self {
        PokeStudyError::Reqwest(Box::new(error))
    }
}
