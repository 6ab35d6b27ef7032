// ==========================================
// 生产管理控制台 - 客户端层错误类型
// ==========================================
// 职责: 定义传输/协议层错误类型
// 约束: 本层不做重试, 重试策略属于外部请求层
// ==========================================

use thiserror::Error;

use crate::domain::types::LifecycleAction;

/// 客户端层错误类型
#[derive(Debug, Error)]
pub enum ClientError {
    /// 该资源未配置此操作
    #[error("不支持的操作: entity={entity}, action={action}")]
    UnsupportedAction {
        entity: String,
        action: LifecycleAction,
    },

    /// 服务地址为空或格式非法
    #[error("无效的服务地址: {0}")]
    InvalidBaseUrl(String),

    /// 网络/传输失败
    #[error("网络请求失败: {0}")]
    Network(#[from] reqwest::Error),

    /// 后端返回非 2xx
    #[error("后端返回错误: status={status}, message={message}")]
    Server { status: u16, message: String },

    /// 响应体不是合法的结果信封
    #[error("响应解析失败: {0}")]
    Decode(String),
}

/// Result 类型别名
pub type ClientResult<T> = Result<T, ClientError>;
