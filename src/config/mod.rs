// ==========================================
// 生产管理控制台 - 配置层
// ==========================================
// 职责: 客户端设置的加载与覆盖
// ==========================================

pub mod client_settings;

pub use client_settings::ClientSettings;
