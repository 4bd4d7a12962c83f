//! Request handlers. Thin: deserialize, forward into the facade, wrap in
//! the success envelope. All domain failures convert through ApiError.

use crate::application::chat::ChatTurn;
use crate::application::scenario::{RoiParams, TcoParams};
use crate::domain::error::DomainError;
use crate::infrastructure::http::error::ApiError;
use crate::GpuIntel;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

type ApiResult = Result<Json<Value>, ApiError>;

// --- chat + scenarios ---

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub context: Vec<ChatTurn>,
}

pub async fn chat(State(app): State<Arc<GpuIntel>>, Json(req): Json<ChatRequest>) -> ApiResult {
    if req.message.is_empty() {
        return Err(DomainError::InvalidInput("no message provided".into()).into());
    }
    let reply = app.chat(&req.message, &req.context);
    Ok(Json(json!({ "success": true, "response": reply })))
}

#[derive(Debug, Deserialize)]
pub struct ScenarioRequest {
    #[serde(rename = "type")]
    pub scenario_type: String,
    #[serde(default)]
    pub parameters: Option<Value>,
}

pub async fn scenario(
    State(app): State<Arc<GpuIntel>>,
    Json(req): Json<ScenarioRequest>,
) -> ApiResult {
    let parameters = req.parameters.unwrap_or_else(|| json!({}));
    let bad_params =
        |e: serde_json::Error| DomainError::InvalidInput(format!("bad parameters: {e}"));

    let result = match req.scenario_type.as_str() {
        "tco" => {
            let params: TcoParams = serde_json::from_value(parameters).map_err(bad_params)?;
            serde_json::to_value(app.tco_scenario(&params)?)
        }
        "roi" => {
            let params: RoiParams = serde_json::from_value(parameters).map_err(bad_params)?;
            serde_json::to_value(app.roi_scenario(&params)?)
        }
        other => {
            return Err(
                DomainError::InvalidInput(format!("unknown scenario type: {other}")).into(),
            )
        }
    }
    .map_err(|e| DomainError::Feed(e.to_string()))?;

    Ok(Json(json!({ "success": true, "result": result })))
}

pub async fn knowledge(State(app): State<Arc<GpuIntel>>) -> ApiResult {
    Ok(Json(json!({ "success": true, "knowledge": app.knowledge() })))
}

pub async fn gpu_comparison(State(app): State<Arc<GpuIntel>>) -> ApiResult {
    Ok(Json(json!({ "success": true, "data": app.gpu_comparison() })))
}

// --- market data ---

pub async fn market_connect(State(app): State<Arc<GpuIntel>>) -> Json<Value> {
    let success = app.market_connect().await;
    let message = if success {
        "Connected to market data feed"
    } else {
        "Connection failed"
    };
    Json(json!({ "success": success, "message": message }))
}

pub async fn market_disconnect(State(app): State<Arc<GpuIntel>>) -> Json<Value> {
    app.market_disconnect().await;
    Json(json!({ "success": true, "message": "Disconnected from market data feed" }))
}

pub async fn market_status(State(app): State<Arc<GpuIntel>>) -> Json<Value> {
    let status = app.market_status();
    Json(json!({ "connected": status.connected, "feed": status.feed }))
}

fn default_fields() -> Vec<String> {
    vec!["PX_LAST".to_string()]
}

#[derive(Debug, Deserialize)]
pub struct ReferenceDataRequest {
    #[serde(default)]
    pub securities: Vec<String>,
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
}

pub async fn reference_data(
    State(app): State<Arc<GpuIntel>>,
    Json(req): Json<ReferenceDataRequest>,
) -> ApiResult {
    let data = app.reference_data(&req.securities, &req.fields).await?;
    Ok(Json(json!({ "success": true, "data": data })))
}

#[derive(Debug, Deserialize)]
pub struct HistoricalDataRequest {
    pub security: String,
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

pub async fn historical_data(
    State(app): State<Arc<GpuIntel>>,
    Json(req): Json<HistoricalDataRequest>,
) -> ApiResult {
    let data = app
        .historical_data(&req.security, &req.fields, &req.start_date, &req.end_date)
        .await?;
    Ok(Json(json!({ "success": true, "data": data })))
}

pub async fn gpu_market(State(app): State<Arc<GpuIntel>>) -> ApiResult {
    let data = app.gpu_market_data().await?;
    Ok(Json(json!({ "success": true, "data": data })))
}

pub async fn datacenter_reits(State(app): State<Arc<GpuIntel>>) -> ApiResult {
    let data = app.datacenter_reit_data().await?;
    Ok(Json(json!({ "success": true, "data": data })))
}

// --- training ---

pub async fn list_modules(State(app): State<Arc<GpuIntel>>) -> ApiResult {
    Ok(Json(json!({ "success": true, "modules": app.modules() })))
}

pub async fn get_module(
    State(app): State<Arc<GpuIntel>>,
    Path(module_id): Path<String>,
) -> ApiResult {
    let module = app.module(&module_id)?;
    Ok(Json(json!({ "success": true, "module": module })))
}

pub async fn get_lesson(
    State(app): State<Arc<GpuIntel>>,
    Path((module_id, lesson_id)): Path<(String, String)>,
) -> ApiResult {
    let lesson = app.lesson(&module_id, &lesson_id)?;
    Ok(Json(json!({ "success": true, "lesson": lesson })))
}

fn default_user() -> String {
    "default".to_string()
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub answers: Vec<usize>,
    #[serde(default = "default_user")]
    pub user_id: String,
}

pub async fn submit_quiz(
    State(app): State<Arc<GpuIntel>>,
    Path((module_id, lesson_id)): Path<(String, String)>,
    Json(req): Json<QuizRequest>,
) -> ApiResult {
    let result = app.submit_quiz(&module_id, &lesson_id, &req.answers, &req.user_id)?;
    Ok(Json(json!({ "success": true, "result": result })))
}

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    #[serde(default = "default_user")]
    pub user_id: String,
}

pub async fn get_progress(
    State(app): State<Arc<GpuIntel>>,
    Query(query): Query<ProgressQuery>,
) -> Json<Value> {
    let progress = app.user_progress(&query.user_id);
    Json(json!({ "success": true, "progress": progress }))
}

// --- dashboard ---

pub async fn dashboard_overview(State(app): State<Arc<GpuIntel>>) -> ApiResult {
    let market_data = app.gpu_market_data().await?;
    let progress = app.user_progress("default");
    let gpu_names: Vec<&str> = app
        .knowledge()
        .gpus()
        .iter()
        .map(|g| g.name.as_str())
        .collect();

    Ok(Json(json!({
        "success": true,
        "data": {
            "market_data": market_data,
            "training_progress": progress,
            "gpu_architectures": gpu_names,
            "tco_factors": app.knowledge().assumptions(),
        }
    })))
}

pub async fn tco_calculator(
    State(app): State<Arc<GpuIntel>>,
    Json(params): Json<TcoParams>,
) -> ApiResult {
    let result = app.tco_scenario(&params)?;
    Ok(Json(json!({ "success": true, "result": result })))
}

pub async fn roi_calculator(
    State(app): State<Arc<GpuIntel>>,
    Json(params): Json<RoiParams>,
) -> ApiResult {
    let result = app.roi_scenario(&params)?;
    Ok(Json(json!({ "success": true, "result": result })))
}
