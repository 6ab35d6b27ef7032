// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 启动本地模拟后端、构造测试行记录
// ==========================================

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde_json::json;

use production_console::{ClientSettings, ResourceRow};

// ==========================================
// 模拟后端
// ==========================================

/// 模拟后端的应答模式
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// HTTP 200 + success=true
    Success,
    /// HTTP 200 + success=false（后端拒绝状态转换）
    Rejected,
    /// HTTP 500
    ServerError,
}

#[derive(Clone)]
struct MockState {
    hits: Arc<Mutex<Vec<String>>>,
    behavior: MockBehavior,
}

/// 正在监听的模拟后端
pub struct MockBackend {
    pub addr: SocketAddr,
    hits: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    /// 指向该后端的客户端设置
    pub fn settings(&self) -> ClientSettings {
        ClientSettings {
            server_url: format!("http://{}", self.addr),
            timeout_secs: 5,
            locale: "zh-CN".to_string(),
        }
    }

    /// 已收到的请求（"METHOD /path" 形式, 按到达顺序）
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

async fn handle(State(state): State<MockState>, req: Request) -> Response {
    let line = format!("{} {}", req.method(), req.uri().path());
    state.hits.lock().unwrap().push(line);

    match state.behavior {
        MockBehavior::Success => Json(json!({
            "success": true,
            "message": "操作成功",
            "data": null
        }))
        .into_response(),
        MockBehavior::Rejected => Json(json!({
            "success": false,
            "message": "状态不允许该操作"
        }))
        .into_response(),
        MockBehavior::ServerError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
    }
}

/// 启动模拟后端（随机端口）
pub async fn spawn_backend(behavior: MockBehavior) -> MockBackend {
    let hits = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        hits: hits.clone(),
        behavior,
    };
    let app = Router::new().fallback(handle).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("绑定本地端口失败");
    let addr = listener.local_addr().expect("获取监听地址失败");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("模拟后端异常退出");
    });

    MockBackend { addr, hits }
}

// ==========================================
// 行记录构造
// ==========================================

fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("测试时间戳格式错误")
        .with_timezone(&Utc)
}

/// 构造报工行记录（时间戳为 RFC3339 字符串）
pub fn report_row(
    pk: i64,
    pause_time: Option<&str>,
    resume_time: Option<&str>,
    end_time: Option<&str>,
) -> ResourceRow {
    let mut row = ResourceRow::with_pk(pk);
    row.pause_time = pause_time.map(ts);
    row.resume_time = resume_time.map(ts);
    row.end_time = end_time.map(ts);
    row
}
