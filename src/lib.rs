//! xgodo 任务转发代理
//!
//! 对外暴露 /apply /submit /tasks 三个转发端点与 /health 存活探针,
//! 转发时注入 `Authorization: Bearer` 头，上游应答原样透传;
//! 根路径提供同源静态页面，避免浏览器跨域限制。

pub mod api;
pub mod config;
pub mod proxy;
pub mod state;
