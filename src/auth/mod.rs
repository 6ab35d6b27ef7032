// ==========================================
// 生产管理控制台 - 权限层
// ==========================================
// 职责: 视图操作集的授权判定
// 约束: 授权集在挂钩构造时解析一次, 之后只读;
//       不按行、不按渲染重复解析（权限过期风险由设计接受）
// ==========================================

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::domain::types::LifecycleAction;

// ==========================================
// AuthSet - 已解析的授权集
// ==========================================

/// 某个视图操作集的授权结果: 操作 → 是否授权
///
/// 未解析过的操作一律视为未授权
#[derive(Debug, Clone, Default)]
pub struct AuthSet {
    flags: HashMap<LifecycleAction, bool>,
}

impl AuthSet {
    /// 以显式标志构造授权集
    pub fn from_flags(flags: impl IntoIterator<Item = (LifecycleAction, bool)>) -> Self {
        Self {
            flags: flags.into_iter().collect(),
        }
    }

    /// 全部拒绝（构造期的初始值）
    pub fn deny_all(actions: &[LifecycleAction]) -> Self {
        Self::from_flags(actions.iter().map(|a| (*a, false)))
    }

    /// 该操作是否已授权
    pub fn allows(&self, action: LifecycleAction) -> bool {
        self.flags.get(&action).copied().unwrap_or(false)
    }
}

// ==========================================
// PermissionResolver - 权限解析器
// ==========================================

/// 权限解析器（外部协作方）
///
/// 输入为视图支持的操作名集合, 输出为逐操作的授权标志。
/// 挂钩构造时调用一次。
#[async_trait]
pub trait PermissionResolver: Send + Sync {
    async fn resolve(&self, actions: &[LifecycleAction]) -> AuthSet;
}

// ==========================================
// StaticPermissions - 静态授权
// ==========================================

/// 以固定授权集合实现的解析器
///
/// 用于测试与已在上游完成鉴权的嵌入场景
#[derive(Debug, Clone, Default)]
pub struct StaticPermissions {
    granted: HashSet<LifecycleAction>,
}

impl StaticPermissions {
    pub fn new(granted: impl IntoIterator<Item = LifecycleAction>) -> Self {
        Self {
            granted: granted.into_iter().collect(),
        }
    }

    /// 全部拒绝
    pub fn none() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PermissionResolver for StaticPermissions {
    async fn resolve(&self, actions: &[LifecycleAction]) -> AuthSet {
        AuthSet::from_flags(actions.iter().map(|a| (*a, self.granted.contains(a))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_action_is_denied() {
        let auth = AuthSet::deny_all(&[LifecycleAction::Push]);
        assert!(!auth.allows(LifecycleAction::Push));
        // 从未解析过的操作同样拒绝
        assert!(!auth.allows(LifecycleAction::Pause));
    }

    #[tokio::test]
    async fn test_static_permissions_resolve_subset() {
        let resolver = StaticPermissions::new([LifecycleAction::Pause, LifecycleAction::Resume]);
        let auth = resolver
            .resolve(&[
                LifecycleAction::Complete,
                LifecycleAction::Pause,
                LifecycleAction::Resume,
            ])
            .await;
        assert!(auth.allows(LifecycleAction::Pause));
        assert!(auth.allows(LifecycleAction::Resume));
        assert!(!auth.allows(LifecycleAction::Complete));
    }

    #[tokio::test]
    async fn test_none_denies_everything() {
        let auth = StaticPermissions::none()
            .resolve(&[LifecycleAction::Push])
            .await;
        assert!(!auth.allows(LifecycleAction::Push));
    }
}
