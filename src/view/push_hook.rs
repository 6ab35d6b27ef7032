// ==========================================
// 生产管理控制台 - 推送挂钩（单操作变体）
// ==========================================
// 职责: 仅支持 push 的四个实体共用的视图挂钩:
//       一个授权标志 + 一个按钮/处理器对
// 约束: push 不做行状态限制, 授权即可见
// ==========================================

use std::sync::Arc;

use crate::auth::{AuthSet, PermissionResolver};
use crate::client::{BaseResult, ResourceClient};
use crate::config::ClientSettings;
use crate::domain::record::ResourceRow;
use crate::domain::types::{ButtonKind, EntityKind, LifecycleAction};
use crate::i18n;
use crate::view::buttons::{ActionButton, ButtonProps};
use crate::view::error::ViewResult;
use crate::view::operation::run_operation;
use crate::view::state::{LoadingFlag, Notifier, RefreshHandle};

// ==========================================
// PushHook - 推送挂钩
// ==========================================

/// 推送类实体的视图挂钩
pub struct PushHook {
    client: Arc<ResourceClient>,
    auth: AuthSet,
    table: Arc<dyn RefreshHandle>,
    notifier: Arc<dyn Notifier>,
}

impl PushHook {
    /// 绑定一个推送类实体
    ///
    /// 构造时对 `push` 解析一次授权, 之后不再重估。
    pub async fn bind(
        entity: EntityKind,
        settings: &ClientSettings,
        resolver: &dyn PermissionResolver,
        table: Arc<dyn RefreshHandle>,
        notifier: Arc<dyn Notifier>,
    ) -> ViewResult<Self> {
        let client = Arc::new(ResourceClient::for_entity(entity, settings)?);
        let auth = resolver.resolve(entity.supported_actions()).await;
        Ok(Self {
            client,
            auth,
            table,
            notifier,
        })
    }

    /// 挂钩对应的实体
    pub fn entity(&self) -> EntityKind {
        self.client.entity()
    }

    /// 已解析的授权集
    pub fn auth(&self) -> &AuthSet {
        &self.auth
    }

    /// 实体客户端
    pub fn client(&self) -> &ResourceClient {
        &self.client
    }

    /// 推送按钮描述（授权即可见, 无行状态限制）
    pub fn push_button(&self) -> ActionButton {
        let allowed = self.auth.allows(LifecycleAction::Push);
        ActionButton::new(
            LifecycleAction::Push,
            i18n::t(LifecycleAction::Push.label_key()),
            ButtonProps {
                kind: ButtonKind::Primary,
                icon: "ep:position",
                link: true,
            },
            move |_row| allowed,
        )
    }

    /// 触发推送
    pub async fn trigger_push(
        &self,
        row: &ResourceRow,
        loading: &LoadingFlag,
    ) -> ViewResult<BaseResult> {
        run_operation(
            &self.client,
            LifecycleAction::Push,
            row,
            loading,
            &self.table,
            &self.notifier,
        )
        .await
    }
}
