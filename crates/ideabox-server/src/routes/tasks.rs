//! The four marketing task routes.
//!
//! Every handler checks that its fields are present and non-empty, runs the
//! matching template (optionally on a pinned `model`) and reports the model
//! that actually answered.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use ideabox_core::{
    ErrorCode,
    model::ProviderId,
    provider::{PromptExecution, TaskOutput},
    template::PromptTemplate,
};
use ideabox_types::templates::{BrandNamePrompt, CreativePromptPrompt, SloganPrompt, TitlePrompt};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    envelope::{ApiError, ApiResponse},
};

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

async fn run<P: PromptTemplate + Send>(
    state: &AppState,
    task: &'static str,
    prompt: P,
    model: Option<String>,
) -> Result<TaskOutput, ApiError> {
    state
        .generator
        .execute(prompt, required(model))
        .await
        .map_err(|err| {
            tracing::error!(task, code = %err.code(), error = %err, "task generation failed");
            ApiError::task_failure(&err)
        })
}

fn missing_fields(task: &'static str, message: &'static str) -> ApiError {
    tracing::debug!(task, "task request missing fields");
    ApiError::bad_request(ErrorCode::InvalidRequest, message)
}

#[derive(Debug, Deserialize)]
pub struct TitleInput {
    #[serde(default)]
    keywords: Option<String>,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TitleData {
    title: String,
    model: String,
    provider: ProviderId,
}

pub async fn title(
    State(state): State<AppState>,
    payload: Result<Json<TitleInput>, JsonRejection>,
) -> Result<ApiResponse<TitleData>, ApiError> {
    let Json(input) = payload?;
    let (Some(keywords), Some(platform), Some(style)) = (
        required(input.keywords),
        required(input.platform),
        required(input.style),
    ) else {
        return Err(missing_fields("title", "关键词、平台和风格都是必需的"));
    };

    let output = run(
        &state,
        "title",
        TitlePrompt::new(keywords, platform, style),
        input.model,
    )
    .await?;
    Ok(ApiResponse(TitleData {
        title: output.text,
        model: output.model,
        provider: output.provider,
    }))
}

#[derive(Debug, Deserialize)]
pub struct BrandNameInput {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandNameData {
    brand_name: String,
    model: String,
    provider: ProviderId,
}

pub async fn brand_name(
    State(state): State<AppState>,
    payload: Result<Json<BrandNameInput>, JsonRejection>,
) -> Result<ApiResponse<BrandNameData>, ApiError> {
    let Json(input) = payload?;
    let (Some(description), Some(style)) = (required(input.description), required(input.style))
    else {
        return Err(missing_fields("brand-name", "产品描述和命名风格都是必需的"));
    };

    let output = run(
        &state,
        "brand-name",
        BrandNamePrompt::new(description, style),
        input.model,
    )
    .await?;
    Ok(ApiResponse(BrandNameData {
        brand_name: output.text,
        model: output.model,
        provider: output.provider,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SloganInput {
    #[serde(default)]
    brand_name: Option<String>,
    #[serde(default)]
    selling_points: Option<String>,
    #[serde(default)]
    tone: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SloganData {
    slogan: String,
    model: String,
    provider: ProviderId,
}

pub async fn slogan(
    State(state): State<AppState>,
    payload: Result<Json<SloganInput>, JsonRejection>,
) -> Result<ApiResponse<SloganData>, ApiError> {
    let Json(input) = payload?;
    let (Some(brand_name), Some(selling_points), Some(tone)) = (
        required(input.brand_name),
        required(input.selling_points),
        required(input.tone),
    ) else {
        return Err(missing_fields("slogan", "品牌名称、卖点和语气风格都是必需的"));
    };

    let output = run(
        &state,
        "slogan",
        SloganPrompt::new(brand_name, selling_points, tone),
        input.model,
    )
    .await?;
    Ok(ApiResponse(SloganData {
        slogan: output.text,
        model: output.model,
        provider: output.provider,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreativePromptInput {
    #[serde(default)]
    scene: Option<String>,
    #[serde(default)]
    audience: Option<String>,
    #[serde(default)]
    angle: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreativePromptData {
    prompt: String,
    model: String,
    provider: ProviderId,
}

pub async fn creative_prompt(
    State(state): State<AppState>,
    payload: Result<Json<CreativePromptInput>, JsonRejection>,
) -> Result<ApiResponse<CreativePromptData>, ApiError> {
    let Json(input) = payload?;
    let (Some(scene), Some(audience), Some(angle)) = (
        required(input.scene),
        required(input.audience),
        required(input.angle),
    ) else {
        return Err(missing_fields("creative-prompt", "场景、受众和角度都是必需的"));
    };

    let output = run(
        &state,
        "creative-prompt",
        CreativePromptPrompt::new(scene, audience, angle),
        input.model,
    )
    .await?;
    Ok(ApiResponse(CreativePromptData {
        prompt: output.text,
        model: output.model,
        provider: output.provider,
    }))
}
