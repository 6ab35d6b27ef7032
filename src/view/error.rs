// ==========================================
// 生产管理控制台 - 视图层错误类型
// ==========================================
// 职责: 转换客户端层错误为用户可读的本地化消息
// ==========================================

use thiserror::Error;

use crate::client::ClientError;
use crate::domain::types::LifecycleAction;
use crate::i18n;

/// 视图层错误类型
#[derive(Debug, Error)]
pub enum ViewError {
    /// 行记录既无 pk 也无 id
    #[error("记录缺少主键, 无法执行操作")]
    MissingRecordKey,

    /// HTTP 2xx 但信封 success=false（后端拒绝该状态转换）
    #[error("操作被后端拒绝: action={action}, message={message}")]
    OperationRejected {
        action: LifecycleAction,
        message: String,
    },

    /// 客户端层错误透传
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ViewError {
    /// 稳定错误码（供外部通知层做样式/埋点区分）
    pub fn code(&self) -> &'static str {
        match self {
            ViewError::MissingRecordKey => "MISSING_RECORD_KEY",
            ViewError::OperationRejected { .. } => "OPERATION_REJECTED",
            ViewError::Client(ClientError::UnsupportedAction { .. }) => "UNSUPPORTED_ACTION",
            ViewError::Client(ClientError::InvalidBaseUrl(_)) => "INVALID_BASE_URL",
            ViewError::Client(ClientError::Network(_)) => "NETWORK_ERROR",
            ViewError::Client(ClientError::Server { .. }) => "SERVER_ERROR",
            ViewError::Client(ClientError::Decode(_)) => "DECODE_ERROR",
        }
    }

    /// 用户可读的本地化消息（交给通知层展示）
    pub fn user_message(&self) -> String {
        match self {
            ViewError::MissingRecordKey => i18n::t("error.missing_record_key"),
            // 后端消息本身面向用户, 原样展示; 为空时回退到通用文案
            ViewError::OperationRejected { message, .. } => {
                if message.trim().is_empty() {
                    i18n::t("operation.rejected")
                } else {
                    message.clone()
                }
            }
            ViewError::Client(ClientError::UnsupportedAction { .. }) => {
                i18n::t("error.unsupported_action")
            }
            ViewError::Client(ClientError::InvalidBaseUrl(_)) => i18n::t("error.invalid_base_url"),
            ViewError::Client(ClientError::Network(_)) => i18n::t("error.network"),
            ViewError::Client(ClientError::Server { status, .. }) => {
                i18n::t_with_args("error.server", &[("status", &status.to_string())])
            }
            ViewError::Client(ClientError::Decode(_)) => i18n::t("error.decode"),
        }
    }
}

/// Result 类型别名
pub type ViewResult<T> = Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ViewError::MissingRecordKey.code(), "MISSING_RECORD_KEY");
        let rejected = ViewError::OperationRejected {
            action: LifecycleAction::Pause,
            message: "x".to_string(),
        };
        assert_eq!(rejected.code(), "OPERATION_REJECTED");
    }

    #[test]
    fn test_rejection_keeps_backend_message() {
        let err = ViewError::OperationRejected {
            action: LifecycleAction::Complete,
            message: "报工已完成".to_string(),
        };
        assert_eq!(err.user_message(), "报工已完成");
    }
}
