// ==========================================
// 生产管理控制台 - 资源行记录
// ==========================================
// 职责: 表格行的最小解释视图
// 约束: 行记录由后端持有, 本库只读取主键与三个时间戳字段,
//       其余字段原样透传 (serde flatten)
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// RecordId - 行主键
// ==========================================
// 后端主键既可能是数字也可能是字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Num(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

// ==========================================
// ResourceRow - 资源行记录
// ==========================================

/// 表格行记录
///
/// 仅解释主键 (`pk` 或 `id`) 与三个可空时间戳:
/// - pause_time: 暂停时刻
/// - resume_time: 恢复时刻
/// - end_time: 完成时刻
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pk: Option<RecordId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// 其余字段不做解释, 原样保留
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ResourceRow {
    /// 以主键构造空行（测试与调用方便利方法）
    pub fn with_pk(pk: impl Into<RecordId>) -> Self {
        Self {
            pk: Some(pk.into()),
            ..Self::default()
        }
    }

    /// 行主键: `pk` 优先, 回退到 `id`
    pub fn record_key(&self) -> Option<&RecordId> {
        self.pk.as_ref().or(self.id.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_key_prefers_pk() {
        let mut row = ResourceRow::with_pk(7);
        row.id = Some(RecordId::from("fallback"));
        assert_eq!(row.record_key(), Some(&RecordId::Num(7)));
    }

    #[test]
    fn test_record_key_falls_back_to_id() {
        let row = ResourceRow {
            id: Some(RecordId::from("wo-2026-001")),
            ..ResourceRow::default()
        };
        assert_eq!(row.record_key().map(|k| k.to_string()), Some("wo-2026-001".to_string()));
    }

    #[test]
    fn test_record_key_missing() {
        assert!(ResourceRow::default().record_key().is_none());
    }

    #[test]
    fn test_deserialize_keeps_unknown_fields() {
        let row: ResourceRow = serde_json::from_str(
            r#"{"pk": 3, "pause_time": "2026-03-01T08:00:00Z", "workshop_name": "一号车间"}"#,
        )
        .unwrap();
        assert_eq!(row.pk, Some(RecordId::Num(3)));
        assert!(row.pause_time.is_some());
        assert_eq!(
            row.extra.get("workshop_name").and_then(|v| v.as_str()),
            Some("一号车间")
        );
    }
}
