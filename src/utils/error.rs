use thiserror::Error;

#[derive(Error, Debug)]
pub enum MulError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] bincode::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required parameter: {field}")]
    MissingConfigError { field: String },

    #[error("Integer overflow: {a} * {b} does not fit in a 64-bit signed integer")]
    OverflowError { a: i64, b: i64 },

    #[error("Invalid saved value file '{path}': {reason}")]
    FormatError { path: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入或設定問題
    Argument,
    /// 檔案系統或編碼問題
    Io,
}

impl MulError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MulError::ConfigError { .. }
            | MulError::MissingConfigError { .. }
            | MulError::OverflowError { .. } => ErrorCategory::Argument,
            MulError::IoError(_)
            | MulError::WriteError { .. }
            | MulError::SerializationError(_)
            | MulError::FormatError { .. } => ErrorCategory::Io,
        }
    }

    /// Argument errors share clap's usage exit code.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Argument => 2,
            ErrorCategory::Io => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MulError::ConfigError { .. } => "Check that the config file exists and is valid TOML",
            MulError::MissingConfigError { .. } => {
                "Pass the missing value on the command line or set it in the config file"
            }
            MulError::OverflowError { .. } => "Use smaller multiplicands",
            MulError::WriteError { .. } | MulError::IoError(_) => {
                "Make sure the target directory exists and is writable"
            }
            MulError::SerializationError(_) | MulError::FormatError { .. } => {
                "The file was not written by mulsave or is corrupted"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MulError::WriteError { path, .. } => format!("Could not save result to '{}'", path),
            MulError::OverflowError { a, b } => format!("The product of {} and {} is too large", a, b),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MulError>;
