// ==========================================
// 生产管理控制台 - 客户端层
// ==========================================
// 职责: 将生命周期操作 + 行主键翻译为出站 HTTP 请求
// ==========================================

pub mod envelope;
pub mod error;
pub mod resource_client;

// 重导出核心类型
pub use envelope::BaseResult;
pub use error::{ClientError, ClientResult};
pub use resource_client::ResourceClient;
