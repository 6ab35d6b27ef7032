// ==========================================
// 生产管理控制台 - 领域层
// ==========================================
// 职责: 定义实体行记录与核心枚举类型
// ==========================================

pub mod record;
pub mod types;

pub use record::{RecordId, ResourceRow};
pub use types::{ButtonKind, EntityKind, LifecycleAction, ReportStatus, TagKind};
