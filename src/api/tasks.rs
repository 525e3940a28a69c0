use crate::proxy::error::ProxyError;
use crate::proxy::upstream::{UpstreamResponse, APPLY_PATH, DETAILS_PATH, SUBMIT_PATH};
use crate::state::AppState;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ApplyParams {
    pub job_id: Option<String>,
}

#[derive(Deserialize)]
pub struct SubmitParams {
    pub job_id: Option<String>,
    pub job_proof: Option<String>,
}

#[derive(Deserialize)]
pub struct TaskQueryParams {
    pub job_id: Option<String>,
    pub task_id: Option<String>,
}

/// GET /apply - 领取任务
pub async fn apply_task(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApplyParams>,
) -> Result<UpstreamResponse, ProxyError> {
    let job_id = require(params.job_id, "job_id")?;
    let token = state.bearer_token()?;

    state
        .upstream
        .get(token, APPLY_PATH, &[("job_id", job_id.as_str())])
        .await
}

/// GET /submit - 提交任务凭证
pub async fn submit_task(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SubmitParams>,
) -> Result<UpstreamResponse, ProxyError> {
    let job_id = require(params.job_id, "job_id")?;
    let job_proof = require(params.job_proof, "job_proof")?;
    let token = state.bearer_token()?;

    let body = json!({ "job_id": job_id, "job_proof": job_proof });
    state.upstream.post(token, SUBMIT_PATH, &[], &body).await
}

/// GET /tasks - 查询任务详情，job_id / task_id 至少给一个
pub async fn task_details(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TaskQueryParams>,
) -> Result<UpstreamResponse, ProxyError> {
    let job_id = non_blank(params.job_id);
    let task_id = non_blank(params.task_id);
    if job_id.is_none() && task_id.is_none() {
        return Err(ProxyError::MissingParam("job_id or task_id"));
    }
    let token = state.bearer_token()?;

    let mut query: Vec<(&str, &str)> = Vec::new();
    if let Some(v) = job_id.as_deref() {
        query.push(("job_id", v));
    }
    if let Some(v) = task_id.as_deref() {
        query.push(("task_id", v));
    }

    // 上游的 details 接口是 POST，参数走查询串，请求体为空 JSON
    state
        .upstream
        .post(token, DETAILS_PATH, &query, &json!({}))
        .await
}

fn require(value: Option<String>, name: &'static str) -> Result<String, ProxyError> {
    non_blank(value).ok_or(ProxyError::MissingParam(name))
}

/// 空白参数视同缺失; 非空值原样保留，不做裁剪
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
