//! Profile payload loading (file, stdin or the profile API)

use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::types::{Result, RhythmError};

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Where the profile payload comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// JSON file on disk
    File(PathBuf),
    /// JSON document piped on stdin
    Stdin,
    /// Remote profile API
    Api {
        base_url: String,
        user_id: String,
        /// Fetch `/full-profile` instead of `/review-rhythm`
        full_profile: bool,
    },
}

impl ProfileSource {
    /// Endpoint URL for API sources, None otherwise
    pub fn url(&self) -> Option<String> {
        match self {
            Self::Api {
                base_url,
                user_id,
                full_profile,
            } => {
                let endpoint = if *full_profile {
                    "full-profile"
                } else {
                    "review-rhythm"
                };
                Some(format!(
                    "{}/api/users/{}/{}",
                    base_url.trim_end_matches('/'),
                    user_id,
                    endpoint
                ))
            }
            _ => None,
        }
    }

    /// Short label for headers and logs
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "stdin".to_string(),
            Self::Api { user_id, .. } => format!("user {}", user_id),
        }
    }

    /// Load and parse the payload
    pub fn load(&self) -> Result<Value> {
        match self {
            Self::File(path) => {
                debug!("reading profile from {}", path.display());
                let bytes = std::fs::read(path)?;
                parse_payload(bytes)
            }
            Self::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin().read_to_end(&mut bytes)?;
                parse_payload(bytes)
            }
            Self::Api { .. } => {
                let url = self
                    .url()
                    .ok_or_else(|| RhythmError::Config("missing API url".into()))?;
                fetch_payload(&url)
            }
        }
    }
}

/// Parse raw JSON bytes (SIMD accelerated)
pub fn parse_payload(mut bytes: Vec<u8>) -> Result<Value> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(RhythmError::Parse("empty payload".into()));
    }
    simd_json::from_slice::<Value>(&mut bytes).map_err(|e| RhythmError::Parse(e.to_string()))
}

/// GET the payload from the profile API
fn fetch_payload(url: &str) -> Result<Value> {
    info!("fetching profile from {}", url);
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| RhythmError::Fetch(format!("HTTP client error: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| RhythmError::Fetch(format!("HTTP request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(RhythmError::Fetch(format!("{} returned {}", url, status)));
    }

    response
        .json::<Value>()
        .map_err(|e| RhythmError::Parse(format!("JSON parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_api_url_review_rhythm() {
        let source = ProfileSource::Api {
            base_url: "http://localhost:8000/".into(),
            user_id: "u-abc".into(),
            full_profile: false,
        };
        assert_eq!(
            source.url().unwrap(),
            "http://localhost:8000/api/users/u-abc/review-rhythm"
        );
    }

    #[test]
    fn test_api_url_full_profile() {
        let source = ProfileSource::Api {
            base_url: "https://example.test".into(),
            user_id: "u-xyz".into(),
            full_profile: true,
        };
        assert_eq!(
            source.url().unwrap(),
            "https://example.test/api/users/u-xyz/full-profile"
        );
    }

    #[test]
    fn test_file_source_has_no_url() {
        assert!(ProfileSource::File("a.json".into()).url().is_none());
        assert!(ProfileSource::Stdin.url().is_none());
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"data": {{"1": {{"9": 5}}}}}}"#).unwrap();

        let value = ProfileSource::File(file.path().to_path_buf())
            .load()
            .unwrap();
        assert_eq!(value["data"]["1"]["9"], 5);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ProfileSource::File("/nonexistent/rhythm.json".into())
            .load()
            .unwrap_err();
        assert!(matches!(err, RhythmError::Io(_)));
    }

    #[test]
    fn test_parse_payload_errors() {
        assert!(matches!(
            parse_payload(b"  \n".to_vec()),
            Err(RhythmError::Parse(_))
        ));
        assert!(matches!(
            parse_payload(b"{not json".to_vec()),
            Err(RhythmError::Parse(_))
        ));
    }

    #[test]
    fn test_describe() {
        assert_eq!(ProfileSource::Stdin.describe(), "stdin");
        let api = ProfileSource::Api {
            base_url: "http://x".into(),
            user_id: "u-1".into(),
            full_profile: false,
        };
        assert_eq!(api.describe(), "user u-1");
    }
}
