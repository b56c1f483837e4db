use axum::{Json, extract::rejection::JsonRejection};
use ideabox_core::ErrorCode;
use ideabox_types::password::{PasswordValidation, validate_password};
use serde::Deserialize;

use crate::envelope::{ApiError, ApiResponse};

#[derive(Debug, Deserialize)]
pub struct PasswordInput {
    #[serde(default)]
    password: Option<String>,
}

pub async fn password_strength(
    payload: Result<Json<PasswordInput>, JsonRejection>,
) -> Result<ApiResponse<PasswordValidation>, ApiError> {
    let Json(input) = payload?;
    let password = input
        .password
        .ok_or_else(|| ApiError::bad_request(ErrorCode::InvalidRequest, "密码是必需的"))?;
    Ok(ApiResponse(validate_password(&password)))
}
