// ==========================================
// 生产管理控制台 - 操作按钮描述
// ==========================================
// 职责: 供外部表格组件消费的按钮/操作列描述结构
// 约束: 可见性判定是 (授权集, 行状态) 的纯函数
// ==========================================

use std::fmt;
use std::sync::Arc;

use crate::domain::record::ResourceRow;
use crate::domain::types::{ButtonKind, LifecycleAction};

// ==========================================
// ButtonProps - 按钮样式
// ==========================================

/// 按钮样式属性（由外部表格组件解释）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonProps {
    /// 着色类型
    pub kind: ButtonKind,

    /// 图标标识, 如 `ep:video-pause`
    pub icon: &'static str,

    /// 文字链接样式
    pub link: bool,
}

// ==========================================
// ActionButton - 操作按钮
// ==========================================

type VisibilityPredicate = Arc<dyn Fn(&ResourceRow) -> bool + Send + Sync>;

/// 一个生命周期操作按钮
///
/// `visible` 结合构造时固化的授权标志与行的当前时间戳状态;
/// 点击处理不在描述内, 由挂钩的 trigger 方法承担。
#[derive(Clone)]
pub struct ActionButton {
    /// 操作码
    pub code: LifecycleAction,

    /// 本地化文案
    pub text: String,

    /// 样式属性
    pub props: ButtonProps,

    show: VisibilityPredicate,
}

impl ActionButton {
    pub(crate) fn new(
        code: LifecycleAction,
        text: String,
        props: ButtonProps,
        show: impl Fn(&ResourceRow) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            text,
            props,
            show: Arc::new(show),
        }
    }

    /// 该行是否显示此按钮
    pub fn visible(&self, row: &ResourceRow) -> bool {
        (self.show)(row)
    }
}

impl fmt::Debug for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionButton")
            .field("code", &self.code)
            .field("text", &self.text)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

// ==========================================
// OperationPanel - 操作列描述
// ==========================================

/// 表格操作列的布局描述
#[derive(Debug, Clone)]
pub struct OperationPanel {
    /// 操作列宽度（像素）
    pub width: u32,

    /// 行内最多平铺的按钮数
    pub show_number: u32,

    /// 按钮清单（顺序即展示顺序）
    pub buttons: Vec<ActionButton>,
}

impl OperationPanel {
    /// 按操作码查找按钮
    pub fn button(&self, code: LifecycleAction) -> Option<&ActionButton> {
        self.buttons.iter().find(|b| b.code == code)
    }

    /// 该行可见的按钮
    pub fn visible_buttons(&self, row: &ResourceRow) -> Vec<&ActionButton> {
        self.buttons.iter().filter(|b| b.visible(row)).collect()
    }
}
