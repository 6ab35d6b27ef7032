// ==========================================
// 生产管理控制台 - 操作执行器
// ==========================================
// 职责: 所有按钮点击共用的执行序列:
//       置位加载标志 → 调用客户端 → 成功则刷新表格 →
//       无论成败复位加载标志并通知
// 约束: 失败即终止, 不重试; 复位加载标志在所有分支执行
// ==========================================

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::client::{BaseResult, ResourceClient};
use crate::domain::record::ResourceRow;
use crate::domain::types::LifecycleAction;
use crate::i18n;
use crate::view::error::{ViewError, ViewResult};
use crate::view::state::{LoadingFlag, Notifier, RefreshHandle};

/// 执行一次行操作
///
/// # 参数
/// - client: 实体客户端
/// - action: 生命周期操作
/// - row: 目标行（主键取 `pk` 回退 `id`）
/// - loading: 该行的加载标志
/// - table: 表格刷新句柄
/// - notifier: 消息通知
///
/// # 返回
/// - Ok(BaseResult): 后端确认成功, 已触发一次表格刷新
/// - Err(ViewError): 主键缺失 / 传输失败 / 后端拒绝; 未触发刷新
pub(crate) async fn run_operation(
    client: &ResourceClient,
    action: LifecycleAction,
    row: &ResourceRow,
    loading: &LoadingFlag,
    table: &Arc<dyn RefreshHandle>,
    notifier: &Arc<dyn Notifier>,
) -> ViewResult<BaseResult> {
    // 主键缺失时不置位加载标志, 请求从未发出
    let Some(key) = row.record_key() else {
        let err = ViewError::MissingRecordKey;
        warn!(entity = %client.entity(), action = %action, "行记录缺少主键");
        notifier.failure(&err.user_message());
        return Err(err);
    };

    let op_id = Uuid::new_v4();

    // 异步调用发起前同步置位; UI 层据此禁用控件
    loading.set(true);
    info!(op_id = %op_id, entity = %client.entity(), action = %action, id = %key, "触发生命周期操作");

    let outcome = match client.invoke(action, key).await {
        Ok(body) if body.success => {
            let message = body
                .message
                .clone()
                .unwrap_or_else(|| i18n::t("operation.success"));
            info!(op_id = %op_id, "操作成功, 请求表格刷新");
            notifier.success(&message);
            table.request_refresh().await;
            Ok(body)
        }
        Ok(body) => {
            // HTTP 2xx 但业务拒绝（如服务端判定状态转换非法）
            let err = ViewError::OperationRejected {
                action,
                message: body.message.unwrap_or_default(),
            };
            warn!(op_id = %op_id, code = err.code(), "操作被后端拒绝");
            notifier.failure(&err.user_message());
            Err(err)
        }
        Err(client_err) => {
            let err = ViewError::from(client_err);
            warn!(op_id = %op_id, code = err.code(), error = %err, "操作失败");
            notifier.failure(&err.user_message());
            Err(err)
        }
    };

    // 无论成败复位, 避免行卡死在加载态
    loading.set(false);
    outcome
}
