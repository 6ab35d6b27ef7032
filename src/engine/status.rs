// ==========================================
// 生产管理控制台 - 报工状态派生引擎
// ==========================================
// 职责: 从行记录的三个可空时间戳派生展示状态,
//       并判定行状态是否允许某个生命周期操作
// 约束: 纯函数, 对 8 种时间戳组合全覆盖且结果唯一
// ==========================================

use crate::domain::record::ResourceRow;
use crate::domain::types::{LifecycleAction, ReportStatus};

// ==========================================
// StatusEngine
// ==========================================
pub struct StatusEngine;

impl StatusEngine {
    /// 派生报工展示状态
    ///
    /// 判定顺序（先命中先生效）:
    /// 1. end_time 已设置 → 已完成（完成态优先于暂停态）
    /// 2. pause_time 已设置且 resume_time 未设置 → 已暂停
    /// 3. 其余 → 进行中（暂停后已恢复的行落入此分支）
    pub fn derive_status(row: &ResourceRow) -> ReportStatus {
        if row.end_time.is_some() {
            ReportStatus::Completed
        } else if row.pause_time.is_some() && row.resume_time.is_none() {
            ReportStatus::Paused
        } else {
            ReportStatus::InProgress
        }
    }

    /// 判定行状态是否允许该操作（不含权限判断）
    ///
    /// - pause: 未完成且未暂停
    /// - resume: 已暂停且未恢复且未完成
    /// - complete: 未完成
    /// - push: 不做行状态限制
    pub fn state_permits(action: LifecycleAction, row: &ResourceRow) -> bool {
        match action {
            LifecycleAction::Pause => row.end_time.is_none() && row.pause_time.is_none(),
            LifecycleAction::Resume => {
                row.pause_time.is_some() && row.resume_time.is_none() && row.end_time.is_none()
            }
            LifecycleAction::Complete => row.end_time.is_none(),
            LifecycleAction::Push => true,
        }
    }
}
