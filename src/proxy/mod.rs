// proxy 模块 - xgodo 上游转发

pub mod error; // 错误分类
pub mod upstream; // 上游客户端

pub use error::ProxyError;
pub use upstream::{UpstreamClient, UpstreamResponse};
