use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CloudsweepError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Fleet enumeration errors (project listing / describe)
    FleetError {
        operation: String,
        reason: String,
    },

    // Persisted artifact errors
    PersistenceError {
        path: String,
        operation: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        reason: String,
        context: Option<String>,
    },

    // Strict-timeout abort: already-dispatched work was completed and
    // persisted before the scan gave up
    ScanAborted {
        completed: usize,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl CloudsweepError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn fleet_error(operation: &str, reason: &str) -> Self {
        Self::FleetError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn persistence_error(path: &str, operation: &str, reason: &str) -> Self {
        Self::PersistenceError {
            path: path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str, context: Option<&str>) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
            context: context.map(|s| s.to_string()),
        }
    }

    pub fn scan_aborted(completed: usize, reason: &str) -> Self {
        Self::ScanAborted {
            completed,
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ConfigurationError { .. } => true,
            Self::FleetError { .. } => true,
            Self::ParseError { .. } => true,
            Self::PersistenceError { .. } => true,
            Self::ScanAborted { .. } => false,
            Self::ConfigurationFileError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ScanAborted { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::FleetError { .. } => ErrorSeverity::High,
            Self::PersistenceError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::FleetError { operation, reason } => {
                format!("Fleet operation '{}' failed: {}\n💡 Make sure you're authenticated: gcloud auth login", operation, reason)
            }
            Self::PersistenceError { path, operation, reason } => {
                format!("Could not {} '{}': {}\n💡 Check disk space and file permissions", operation, path, reason)
            }
            Self::ParseError { content_type, reason, context } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {}", ctx));
                }
                msg
            }
            Self::ScanAborted { completed, reason } => {
                format!("Scan aborted after {} completed project(s): {}\n💡 Re-run without --no-skip-timeout to skip slow projects instead", completed, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }
}

impl fmt::Display for CloudsweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for CloudsweepError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for cloudsweep operations
pub type CloudsweepResult<T> = Result<T, CloudsweepError>;

/// Convert from standard library errors
impl From<std::io::Error> for CloudsweepError {
    fn from(error: std::io::Error) -> Self {
        CloudsweepError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for CloudsweepError {
    fn from(error: serde_json::Error) -> Self {
        CloudsweepError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
            context: Some(format!("line {}", error.line())),
        }
    }
}

impl From<toml::de::Error> for CloudsweepError {
    fn from(error: toml::de::Error) -> Self {
        CloudsweepError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
            context: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ranks_system_errors_highest() {
        let system = CloudsweepError::system_error("spawn", "gcloud not found");
        let config = CloudsweepError::config_error("bad workers", Some("scan.workers"), None);
        assert!(system.severity() > config.severity());
        assert_eq!(system.severity().name(), "CRITICAL");
    }

    #[test]
    fn scan_abort_is_not_recoverable() {
        let err = CloudsweepError::scan_aborted(4, "timeout with --no-skip-timeout");
        assert!(!err.is_recoverable());
        assert!(err.user_message().contains("4 completed"));
    }
}
