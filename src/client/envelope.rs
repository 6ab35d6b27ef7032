// ==========================================
// 生产管理控制台 - 通用结果信封
// ==========================================
// 形状由外部 HTTP 层持有, 本库只读取三个字段
// ==========================================

use serde::{Deserialize, Serialize};

/// 后端通用结果信封 `{ success, message?, data? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseResult {
    /// 业务是否成功（HTTP 2xx 但 success=false 表示后端拒绝该状态转换）
    #[serde(default)]
    pub success: bool,

    /// 后端返回的用户可读消息
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// 附加数据, 不做解释
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_envelope() {
        let r: BaseResult = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(r.success);
        assert!(r.message.is_none());
        assert!(r.data.is_none());
    }

    #[test]
    fn test_decode_rejection_envelope() {
        let r: BaseResult =
            serde_json::from_str(r#"{"success": false, "message": "状态不允许该操作"}"#).unwrap();
        assert!(!r.success);
        assert_eq!(r.message.as_deref(), Some("状态不允许该操作"));
    }
}
