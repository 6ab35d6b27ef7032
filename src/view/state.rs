// ==========================================
// 生产管理控制台 - 视图状态容器与协作方接口
// ==========================================
// 职责: 行内加载标志（显式状态容器 + 订阅回调）,
//       表格刷新与消息通知的协作方 trait
// 约束: 每行一个加载标志, 行间互不相干; 授权集构造后只读
// ==========================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{info, warn};

// ==========================================
// LoadingFlag - 行内加载标志
// ==========================================

type LoadingObserver = Box<dyn Fn(bool) + Send + Sync>;

struct LoadingInner {
    value: AtomicBool,
    observers: Mutex<Vec<LoadingObserver>>,
}

/// 行内加载标志
///
/// 显式状态容器: 置位/复位时同步通知所有订阅者。
/// 操作处理器在发起异步调用前同步置位, 结束后无论成败复位。
#[derive(Clone)]
pub struct LoadingFlag {
    inner: Arc<LoadingInner>,
}

impl LoadingFlag {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(LoadingInner {
                value: AtomicBool::new(false),
                observers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// 当前是否处于加载中
    pub fn get(&self) -> bool {
        self.inner.value.load(Ordering::SeqCst)
    }

    /// 置位/复位, 并通知订阅者
    pub fn set(&self, value: bool) {
        self.inner.value.store(value, Ordering::SeqCst);
        if let Ok(observers) = self.inner.observers.lock() {
            for observer in observers.iter() {
                observer(value);
            }
        }
    }

    /// 订阅标志变化（UI 层据此禁用/恢复控件）
    pub fn subscribe(&self, observer: impl Fn(bool) + Send + Sync + 'static) {
        if let Ok(mut observers) = self.inner.observers.lock() {
            observers.push(Box::new(observer));
        }
    }
}

impl Default for LoadingFlag {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// RefreshHandle - 表格刷新句柄
// ==========================================

/// 表格刷新句柄（外部协作方）
///
/// 操作成功后由挂钩调用一次, 触发当前页数据重取。
#[async_trait]
pub trait RefreshHandle: Send + Sync {
    async fn request_refresh(&self);
}

// ==========================================
// Notifier - 消息通知
// ==========================================

/// 消息通知（外部协作方）
///
/// 所有成败消息均为本地化后的用户可读文本。
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// 默认通知实现: 写入日志
///
/// 嵌入方未接入通知组件时的兜底。
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(message = %message, "操作成功通知");
    }

    fn failure(&self, message: &str) {
        warn!(message = %message, "操作失败通知");
    }
}
