use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartListError {
    #[error("{filename}: unable to parse header line")]
    MalformedHeader { filename: String },

    #[error("{filename}: {message}")]
    LineCountMismatch { filename: String, message: String },

    #[error("{filename}: line {line}: lane entry is missing the `--` separator")]
    LaneFormat { filename: String, line: usize },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("start list catalog contains no events")]
    EmptyCatalog,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value `{value}` for {field}: {reason}")]
    InvalidSetting {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, StartListError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StartListError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StartListError::MalformedHeader { .. }
            | StartListError::LineCountMismatch { .. }
            | StartListError::LaneFormat { .. }
            | StartListError::Serialization(_) => ErrorSeverity::High,
            StartListError::Io { .. } => ErrorSeverity::Critical,
            StartListError::EmptyCatalog
            | StartListError::Config { .. }
            | StartListError::InvalidSetting { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StartListError::MalformedHeader { filename } => {
                format!("Start list {} has an unreadable header line", filename)
            }
            StartListError::LineCountMismatch { filename, message } => {
                format!("Start list {} is incomplete: {}", filename, message)
            }
            StartListError::LaneFormat { filename, line } => {
                format!("Start list {} has a bad lane entry on line {}", filename, line)
            }
            StartListError::Io { path, source } => {
                format!("Could not read {}: {}", path, source)
            }
            StartListError::EmptyCatalog => {
                "No start lists were found, so there is nothing to display".to_string()
            }
            StartListError::Serialization(e) => format!("Could not write catalog output: {}", e),
            StartListError::Config { message } => format!("Settings problem: {}", message),
            StartListError::InvalidSetting {
                field,
                value,
                reason,
            } => {
                format!("Setting {} has invalid value `{}`: {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StartListError::MalformedHeader { .. }
            | StartListError::LineCountMismatch { .. }
            | StartListError::LaneFormat { .. } => {
                "Re-export the start list from the meet management software and try again"
            }
            StartListError::Io { .. } => {
                "Check that the start list directory exists and is readable"
            }
            StartListError::EmptyCatalog => {
                "Point --startlist-dir at a directory containing .scb files"
            }
            StartListError::Serialization(_) => "Re-run with --verbose to see the full error",
            StartListError::Config { .. } | StartListError::InvalidSetting { .. } => {
                "Fix the settings file or pass the value on the command line"
            }
        }
    }
}
