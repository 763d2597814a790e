use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    Network(String),
    Document(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "FetchError::Network: {}", e),
            FetchError::Document(e) => write!(f, "FetchError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}
impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Document(e.to_string())
    }
}
