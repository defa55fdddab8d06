use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("{} is not set. Get an API key at https://aistudio.google.com/", .vars.join(" or "))]
    MissingApiKey { vars: Vec<&'static str> },

    #[error("Reference image not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read reference image {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API Error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Request to Gemini API failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("No image was generated (response has no candidates)")]
    NoCandidates,

    #[error("No image data found in response")]
    NoImageData,

    #[error("Failed to decode image data: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::InvalidResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_echoes_status_and_body() {
        let err = GenError::Api {
            status: 403,
            body: r#"{"error":{"message":"denied"}}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"API Error (403): {"error":{"message":"denied"}}"#
        );
    }

    #[test]
    fn missing_key_names_every_variable() {
        let err = GenError::MissingApiKey {
            vars: vec!["GEMINI_API_KEY", "GOOGLE_API_KEY"],
        };
        assert!(err.to_string().starts_with("GEMINI_API_KEY or GOOGLE_API_KEY is not set"));
    }
}
