// ==========================================
// 生产管理控制台 - 领域类型定义
// ==========================================
// 序列化格式: 操作与标签小写, 状态 SCREAMING_SNAKE_CASE (与后端一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 生命周期操作 (Lifecycle Action)
// ==========================================
// push 用于草稿/待发布记录的发布同步;
// complete/pause/resume 仅用于生产报工
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleAction {
    Push,
    Complete,
    Pause,
    Resume,
}

impl LifecycleAction {
    /// URL 路径段（`POST {base}/{id}/{action}` 的最后一段）
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleAction::Push => "push",
            LifecycleAction::Complete => "complete",
            LifecycleAction::Pause => "pause",
            LifecycleAction::Resume => "resume",
        }
    }

    /// 按钮文案的 i18n 键
    pub fn label_key(&self) -> &'static str {
        match self {
            LifecycleAction::Push => "actions.push",
            LifecycleAction::Complete => "actions.complete",
            LifecycleAction::Pause => "actions.pause",
            LifecycleAction::Resume => "actions.resume",
        }
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 报工派生状态 (Report Status)
// ==========================================
// 三个可空时间戳字段的全函数派生结果, 见 StatusEngine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    InProgress, // 进行中
    Paused,     // 已暂停
    Completed,  // 已完成
}

impl ReportStatus {
    /// 状态文案的 i18n 键
    pub fn label_key(&self) -> &'static str {
        match self {
            ReportStatus::InProgress => "status.in_progress",
            ReportStatus::Paused => "status.paused",
            ReportStatus::Completed => "status.completed",
        }
    }

    /// 状态标签的渲染类型
    pub fn tag_kind(&self) -> TagKind {
        match self {
            ReportStatus::InProgress => TagKind::Info,
            ReportStatus::Paused => TagKind::Warning,
            ReportStatus::Completed => TagKind::Success,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStatus::InProgress => write!(f, "IN_PROGRESS"),
            ReportStatus::Paused => write!(f, "PAUSED"),
            ReportStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

// ==========================================
// 标签类型 (Tag Kind)
// ==========================================
// 对应外部表格组件的标签着色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Info,
    Success,
    Warning,
}

// ==========================================
// 按钮类型 (Button Kind)
// ==========================================
// 对应外部表格组件的按钮着色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Primary,
    Success,
    Warning,
}

// ==========================================
// 实体注册表 (Entity Kind)
// ==========================================
// 五个实体的资源基路径与支持的操作子集
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Process,
    ProcessStep,
    ProductionOrder,
    ProductionReport,
    Workshop,
}

impl EntityKind {
    /// 资源名（kebab-case, 与基路径末段一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Process => "process",
            EntityKind::ProcessStep => "process-step",
            EntityKind::ProductionOrder => "production-order",
            EntityKind::ProductionReport => "production-report",
            EntityKind::Workshop => "workshop",
        }
    }

    /// 资源基路径
    pub fn base_path(&self) -> &'static str {
        match self {
            EntityKind::Process => "/api/production/process",
            EntityKind::ProcessStep => "/api/production/process-step",
            EntityKind::ProductionOrder => "/api/production/production-order",
            EntityKind::ProductionReport => "/api/production/production-report",
            EntityKind::Workshop => "/api/production/workshop",
        }
    }

    /// 该实体支持的生命周期操作子集
    pub fn supported_actions(&self) -> &'static [LifecycleAction] {
        match self {
            EntityKind::ProductionReport => &[
                LifecycleAction::Complete,
                LifecycleAction::Pause,
                LifecycleAction::Resume,
            ],
            _ => &[LifecycleAction::Push],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_path_segment() {
        assert_eq!(LifecycleAction::Push.as_str(), "push");
        assert_eq!(LifecycleAction::Resume.as_str(), "resume");
    }

    #[test]
    fn test_entity_base_paths() {
        assert_eq!(EntityKind::Process.base_path(), "/api/production/process");
        assert_eq!(
            EntityKind::ProductionReport.base_path(),
            "/api/production/production-report"
        );
        assert_eq!(EntityKind::Workshop.base_path(), "/api/production/workshop");
    }

    #[test]
    fn test_entity_action_subsets() {
        // 报工支持 complete/pause/resume, 其余实体仅支持 push
        assert_eq!(
            EntityKind::ProductionReport.supported_actions(),
            &[
                LifecycleAction::Complete,
                LifecycleAction::Pause,
                LifecycleAction::Resume
            ]
        );
        for kind in [
            EntityKind::Process,
            EntityKind::ProcessStep,
            EntityKind::ProductionOrder,
            EntityKind::Workshop,
        ] {
            assert_eq!(kind.supported_actions(), &[LifecycleAction::Push]);
        }
    }

    #[test]
    fn test_status_tag_mapping() {
        assert_eq!(ReportStatus::InProgress.tag_kind(), TagKind::Info);
        assert_eq!(ReportStatus::Paused.tag_kind(), TagKind::Warning);
        assert_eq!(ReportStatus::Completed.tag_kind(), TagKind::Success);
    }
}
