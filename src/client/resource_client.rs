// ==========================================
// 生产管理控制台 - 通用资源客户端
// ==========================================
// 职责: 一个实体一个实例; 把生命周期操作 + 行主键
//       翻译为 `POST {server}{base}/{id}/{action}`
// 约束: 空请求体、空查询串; 不重试; 不持有本地状态
// ==========================================

use std::collections::BTreeSet;
use std::time::Duration;

use tracing::debug;

use crate::client::envelope::BaseResult;
use crate::client::error::{ClientError, ClientResult};
use crate::config::ClientSettings;
use crate::domain::record::RecordId;
use crate::domain::types::{EntityKind, LifecycleAction};

// ==========================================
// ResourceClient - 通用资源客户端
// ==========================================

/// 单个资源的生命周期操作客户端
///
/// 五个实体共用同一实现, 仅基路径与操作子集不同。
#[derive(Debug)]
pub struct ResourceClient {
    http: reqwest::Client,
    server_url: String,
    base_path: String,
    entity: EntityKind,
    actions: BTreeSet<LifecycleAction>,
}

impl ResourceClient {
    /// 按实体注册表构造客户端
    pub fn for_entity(entity: EntityKind, settings: &ClientSettings) -> ClientResult<Self> {
        Self::new(
            settings,
            entity,
            entity.base_path(),
            entity.supported_actions().iter().copied(),
        )
    }

    /// 以显式基路径与操作子集构造客户端
    ///
    /// # 参数
    /// - settings: 客户端设置（服务地址、超时）
    /// - entity: 实体种类（用于日志与错误消息）
    /// - base_path: 资源基路径, 如 `/api/production/process`
    /// - actions: 该资源支持的操作子集
    pub fn new(
        settings: &ClientSettings,
        entity: EntityKind,
        base_path: &str,
        actions: impl IntoIterator<Item = LifecycleAction>,
    ) -> ClientResult<Self> {
        let server_url = settings.server_url.trim_end_matches('/').to_string();
        if server_url.is_empty() {
            return Err(ClientError::InvalidBaseUrl("服务地址为空".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            server_url,
            base_path: base_path.trim_end_matches('/').to_string(),
            entity,
            actions: actions.into_iter().collect(),
        })
    }

    /// 客户端对应的实体
    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    /// 该客户端是否支持此操作
    pub fn supports(&self, action: LifecycleAction) -> bool {
        self.actions.contains(&action)
    }

    /// 操作 URL: `{server}{base}/{id}/{action}`
    fn action_url(&self, id: &RecordId, action: LifecycleAction) -> String {
        format!(
            "{}{}/{}/{}",
            self.server_url,
            self.base_path,
            id,
            action.as_str()
        )
    }

    /// 执行一次生命周期操作
    ///
    /// # 参数
    /// - action: 生命周期操作（须在配置的子集内）
    /// - id: 行主键（非空）
    ///
    /// # 返回
    /// - Ok(BaseResult): 后端结果信封（success=false 表示业务拒绝）
    /// - Err(ClientError): 不支持的操作 / 网络失败 / 非 2xx / 解析失败
    pub async fn invoke(&self, action: LifecycleAction, id: &RecordId) -> ClientResult<BaseResult> {
        if !self.supports(action) {
            return Err(ClientError::UnsupportedAction {
                entity: self.entity.to_string(),
                action,
            });
        }

        let url = self.action_url(id, action);
        debug!(entity = %self.entity, action = %action, id = %id, url = %url, "发起生命周期操作请求");

        let resp = self.http.post(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<BaseResult>()
            .await
            .map_err(|e| ClientError::Decode(format!("结果信封解析失败: {}", e)))
    }

    // ==========================================
    // 便捷方法
    // ==========================================

    /// 推送（发布/同步）
    pub async fn push(&self, id: &RecordId) -> ClientResult<BaseResult> {
        self.invoke(LifecycleAction::Push, id).await
    }

    /// 标记报工完成
    pub async fn complete(&self, id: &RecordId) -> ClientResult<BaseResult> {
        self.invoke(LifecycleAction::Complete, id).await
    }

    /// 暂停报工
    pub async fn pause(&self, id: &RecordId) -> ClientResult<BaseResult> {
        self.invoke(LifecycleAction::Pause, id).await
    }

    /// 恢复报工
    pub async fn resume(&self, id: &RecordId) -> ClientResult<BaseResult> {
        self.invoke(LifecycleAction::Resume, id).await
    }
}
