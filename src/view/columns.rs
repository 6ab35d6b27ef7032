// ==========================================
// 生产管理控制台 - 表格列后处理
// ==========================================
// 职责: 状态列的派生标签渲染
// ==========================================

use std::fmt;
use std::sync::Arc;

use crate::domain::record::ResourceRow;
use crate::domain::types::TagKind;
use crate::engine::status::StatusEngine;
use crate::i18n;

// ==========================================
// StatusTag - 状态标签
// ==========================================

/// 状态列渲染结果（由外部表格组件着色展示）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTag {
    pub kind: TagKind,
    pub text: String,
}

/// 从行时间戳派生状态标签
pub fn status_tag(row: &ResourceRow) -> StatusTag {
    let status = StatusEngine::derive_status(row);
    StatusTag {
        kind: status.tag_kind(),
        text: i18n::t(status.label_key()),
    }
}

// ==========================================
// TableColumn - 表格列描述
// ==========================================

type CellRenderer = Arc<dyn Fn(&ResourceRow) -> StatusTag + Send + Sync>;

/// 表格列描述
///
/// 列清单由外部表格组件给出, 挂钩只负责为 `status`
/// 列安装单元格渲染器, 其余列原样返回。
#[derive(Clone)]
pub struct TableColumn {
    /// 列键名
    pub key: String,

    /// 单元格渲染器（仅状态列持有）
    pub cell_renderer: Option<CellRenderer>,
}

impl TableColumn {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            cell_renderer: None,
        }
    }

    /// 渲染该行的单元格（未安装渲染器时为 None）
    pub fn render(&self, row: &ResourceRow) -> Option<StatusTag> {
        self.cell_renderer.as_ref().map(|r| r(row))
    }
}

impl fmt::Debug for TableColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("key", &self.key)
            .field("has_renderer", &self.cell_renderer.is_some())
            .finish()
    }
}

/// 为 `status` 列安装状态标签渲染器
pub(crate) fn install_status_renderer(columns: &mut [TableColumn]) {
    for column in columns.iter_mut() {
        if column.key == "status" {
            column.cell_renderer = Some(Arc::new(status_tag));
        }
    }
}
