// ==========================================
// 生产管理控制台 - 报工挂钩
// ==========================================
// 职责: 生产报工视图的完成/暂停/恢复操作与状态列渲染
// 状态机: 进行中 --pause--> 已暂停 --resume--> 进行中;
//         任意状态 --complete--> 已完成（终态, 无按钮可见）
// ==========================================

use std::sync::Arc;

use crate::auth::{AuthSet, PermissionResolver};
use crate::client::{BaseResult, ResourceClient};
use crate::config::ClientSettings;
use crate::domain::record::ResourceRow;
use crate::domain::types::{ButtonKind, EntityKind, LifecycleAction};
use crate::engine::status::StatusEngine;
use crate::i18n;
use crate::view::buttons::{ActionButton, ButtonProps, OperationPanel};
use crate::view::columns::{install_status_renderer, TableColumn};
use crate::view::error::ViewResult;
use crate::view::operation::run_operation;
use crate::view::state::{LoadingFlag, Notifier, RefreshHandle};

// 操作列布局（外部表格组件的版式约定）
const PANEL_WIDTH: u32 = 300;
const PANEL_SHOW_NUMBER: u32 = 4;

// ==========================================
// ReportHook - 报工挂钩
// ==========================================

/// 生产报工视图挂钩
pub struct ReportHook {
    client: Arc<ResourceClient>,
    auth: AuthSet,
    table: Arc<dyn RefreshHandle>,
    notifier: Arc<dyn Notifier>,
}

impl ReportHook {
    /// 绑定生产报工实体
    ///
    /// 构造时对 complete/pause/resume 解析一次授权, 之后不再重估。
    pub async fn bind(
        settings: &ClientSettings,
        resolver: &dyn PermissionResolver,
        table: Arc<dyn RefreshHandle>,
        notifier: Arc<dyn Notifier>,
    ) -> ViewResult<Self> {
        let entity = EntityKind::ProductionReport;
        let client = Arc::new(ResourceClient::for_entity(entity, settings)?);
        let auth = resolver.resolve(entity.supported_actions()).await;
        Ok(Self {
            client,
            auth,
            table,
            notifier,
        })
    }

    /// 已解析的授权集
    pub fn auth(&self) -> &AuthSet {
        &self.auth
    }

    /// 实体客户端
    pub fn client(&self) -> &ResourceClient {
        &self.client
    }

    /// 操作列描述: 暂停、恢复、完成
    ///
    /// 可见性 = 构造时固化的授权标志 AND 行状态允许该转换
    pub fn operation_panel(&self) -> OperationPanel {
        let can_pause = self.auth.allows(LifecycleAction::Pause);
        let can_resume = self.auth.allows(LifecycleAction::Resume);
        let can_complete = self.auth.allows(LifecycleAction::Complete);

        let buttons = vec![
            // 暂停按钮
            ActionButton::new(
                LifecycleAction::Pause,
                i18n::t(LifecycleAction::Pause.label_key()),
                ButtonProps {
                    kind: ButtonKind::Warning,
                    icon: "ep:video-pause",
                    link: true,
                },
                move |row| can_pause && StatusEngine::state_permits(LifecycleAction::Pause, row),
            ),
            // 恢复按钮
            ActionButton::new(
                LifecycleAction::Resume,
                i18n::t(LifecycleAction::Resume.label_key()),
                ButtonProps {
                    kind: ButtonKind::Primary,
                    icon: "ep:video-play",
                    link: true,
                },
                move |row| can_resume && StatusEngine::state_permits(LifecycleAction::Resume, row),
            ),
            // 完成按钮
            ActionButton::new(
                LifecycleAction::Complete,
                i18n::t(LifecycleAction::Complete.label_key()),
                ButtonProps {
                    kind: ButtonKind::Success,
                    icon: "ep:check",
                    link: true,
                },
                move |row| {
                    can_complete && StatusEngine::state_permits(LifecycleAction::Complete, row)
                },
            ),
        ];

        OperationPanel {
            width: PANEL_WIDTH,
            show_number: PANEL_SHOW_NUMBER,
            buttons,
        }
    }

    /// 表格列后处理: 为 `status` 列安装派生状态标签渲染器
    pub fn format_list_columns(&self, columns: &mut [TableColumn]) {
        install_status_renderer(columns);
    }

    /// 触发一次报工操作（complete/pause/resume）
    pub async fn trigger(
        &self,
        action: LifecycleAction,
        row: &ResourceRow,
        loading: &LoadingFlag,
    ) -> ViewResult<BaseResult> {
        run_operation(&self.client, action, row, loading, &self.table, &self.notifier).await
    }
}
