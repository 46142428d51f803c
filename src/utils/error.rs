use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("could not join venue path '{venue}' to base url: {reason}")]
    UrlConstruction { venue: String, reason: String },

    #[error("could not fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not fetch {url}: server answered {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("malformed check-in count in '{title}': {source}")]
    MalformedCheckInCount {
        title: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown venue: {name}")]
    UnknownVenue { name: String },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ScrapeError {
    /// Network and URL failures; these abort a scrape with no partial result.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            ScrapeError::UrlConstruction { .. }
                | ScrapeError::Fetch { .. }
                | ScrapeError::HttpStatus { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::UnknownVenue { name } => format!("Invalid venue: {}", name),
            ScrapeError::ConfigValidationError { .. }
            | ScrapeError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => "There was a problem processing your request".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScrapeError::UrlConstruction { .. } => "Check the venue path in the registry",
            ScrapeError::Fetch { .. } => "Check network connectivity or raise --timeout",
            ScrapeError::HttpStatus { .. } => "The venue page may have moved; verify the path",
            ScrapeError::UnknownVenue { .. } => "Run the `venues` command to list known venues",
            ScrapeError::ConfigValidationError { .. }
            | ScrapeError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and retry"
            }
            ScrapeError::IoError(_) | ScrapeError::ZipError(_) => {
                "Check that the output directory is writable"
            }
            _ => "Retry with --verbose for more detail",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
