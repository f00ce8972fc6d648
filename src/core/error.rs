// ベンチマークハーネスのエラー型定義
// ホットパス（apply / call / push）はエラーを返さないため、ここに現れるのは設定と出力の失敗のみ

use thiserror::Error;

/// ハーネス全体のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("シリアライズエラー: {source}")]
    SerializationError {
        #[source]
        source: serde_json::Error,
    },

    #[error("内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl BenchError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 内部エラーの作成
    pub fn internal(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }

    /// 設定を直せば再実行できるエラーかどうか
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError { .. } | Self::ValidationError { .. }
        )
    }
}

/// ハーネスの結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// バリデーション専用の結果型
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// バリデーション専用エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("バリデーションエラー: {field} - {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for BenchError {
    fn from(error: ValidationError) -> Self {
        BenchError::ValidationError {
            field: error.field,
            reason: error.reason,
        }
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(error: serde_json::Error) -> Self {
        BenchError::SerializationError { source: error }
    }
}

impl From<anyhow::Error> for BenchError {
    fn from(error: anyhow::Error) -> Self {
        BenchError::InternalError { source: error }
    }
}
