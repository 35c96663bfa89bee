use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Report processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::IoError(_) => ErrorCategory::Io,
            ReportError::SerializationError(_) => ErrorCategory::Serialization,
            ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ReportError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReportError::IoError(_) => ErrorSeverity::Critical,
            ReportError::SerializationError(_) => ErrorSeverity::High,
            ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ReportError::ProcessingError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::IoError(e) => format!("無法寫入報告輸出: {}", e),
            ReportError::SerializationError(e) => format!("無法序列化報告內容: {}", e),
            ReportError::ConfigValidationError { field, message } => {
                format!("配置欄位 {} 驗證失敗: {}", field, message)
            }
            ReportError::InvalidConfigValueError { field, value, .. } => {
                format!("配置欄位 {} 的值 '{}' 無效", field, value)
            }
            ReportError::ProcessingError { message } => {
                format!("報告處理失敗: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::IoError(_) => "檢查輸出路徑是否存在且具有寫入權限",
            ReportError::SerializationError(_) => "檢查輸出格式設定，或改用 text 格式",
            ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. } => "檢查命令列參數或 TOML 配置檔的欄位值",
            ReportError::ProcessingError { .. } => "檢查報告計畫是否至少包含一次呼叫",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
