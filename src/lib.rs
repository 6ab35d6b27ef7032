// ==========================================
// 生产管理控制台 - 视图层接口库
// ==========================================
// 技术栈: Rust + reqwest + tokio
// 系统定位: 生产管理后台的视图层粘合层
// 职责: 资源生命周期操作客户端 + 表格视图挂钩
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 状态派生规则
pub mod engine;

// 客户端层 - 资源 HTTP 客户端
pub mod client;

// 权限层 - 授权上下文
pub mod auth;

// 视图层 - 表格挂钩与操作描述
pub mod view;

// 配置层 - 客户端设置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::record::{RecordId, ResourceRow};
pub use domain::types::{ButtonKind, EntityKind, LifecycleAction, ReportStatus, TagKind};

// 引擎
pub use engine::status::StatusEngine;

// 客户端
pub use client::{BaseResult, ClientError, ClientResult, ResourceClient};

// 权限
pub use auth::{AuthSet, PermissionResolver, StaticPermissions};

// 视图
pub use view::{
    process_hook, process_step_hook, production_order_hook, production_report_hook, workshop_hook,
    ActionButton, ButtonProps, LoadingFlag, Notifier, OperationPanel, PushHook, RefreshHandle,
    ReportHook, StatusTag, TableColumn, TracingNotifier, ViewError, ViewResult,
};

// 配置
pub use config::ClientSettings;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "生产管理控制台";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
