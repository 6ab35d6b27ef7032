// ==========================================
// 生产管理控制台 - 实体挂钩入口
// ==========================================
// 职责: 五个实体视图各自的挂钩构造函数
// 说明: 四个推送类实体共用 PushHook, 报工使用 ReportHook;
//       基路径与操作子集统一由实体注册表分发
// ==========================================

use std::sync::Arc;

use crate::auth::PermissionResolver;
use crate::config::ClientSettings;
use crate::domain::types::EntityKind;
use crate::view::error::ViewResult;
use crate::view::push_hook::PushHook;
use crate::view::report_hook::ReportHook;
use crate::view::state::{Notifier, RefreshHandle};

/// 工序视图挂钩
pub async fn process_hook(
    settings: &ClientSettings,
    resolver: &dyn PermissionResolver,
    table: Arc<dyn RefreshHandle>,
    notifier: Arc<dyn Notifier>,
) -> ViewResult<PushHook> {
    PushHook::bind(EntityKind::Process, settings, resolver, table, notifier).await
}

/// 工步视图挂钩
pub async fn process_step_hook(
    settings: &ClientSettings,
    resolver: &dyn PermissionResolver,
    table: Arc<dyn RefreshHandle>,
    notifier: Arc<dyn Notifier>,
) -> ViewResult<PushHook> {
    PushHook::bind(EntityKind::ProcessStep, settings, resolver, table, notifier).await
}

/// 生产工单视图挂钩
pub async fn production_order_hook(
    settings: &ClientSettings,
    resolver: &dyn PermissionResolver,
    table: Arc<dyn RefreshHandle>,
    notifier: Arc<dyn Notifier>,
) -> ViewResult<PushHook> {
    PushHook::bind(
        EntityKind::ProductionOrder,
        settings,
        resolver,
        table,
        notifier,
    )
    .await
}

/// 车间视图挂钩
pub async fn workshop_hook(
    settings: &ClientSettings,
    resolver: &dyn PermissionResolver,
    table: Arc<dyn RefreshHandle>,
    notifier: Arc<dyn Notifier>,
) -> ViewResult<PushHook> {
    PushHook::bind(EntityKind::Workshop, settings, resolver, table, notifier).await
}

/// 生产报工视图挂钩
pub async fn production_report_hook(
    settings: &ClientSettings,
    resolver: &dyn PermissionResolver,
    table: Arc<dyn RefreshHandle>,
    notifier: Arc<dyn Notifier>,
) -> ViewResult<ReportHook> {
    ReportHook::bind(settings, resolver, table, notifier).await
}
