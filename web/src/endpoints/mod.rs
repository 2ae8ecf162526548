/*
* SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
*
* SPDX-License-Identifier: AGPL-3.0-only
*/

pub mod achievements;
pub mod applicants;
pub mod auth;
pub mod clients;
pub mod jobs;
pub mod projects;
pub mod public;
pub mod services;
pub mod testimonials;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use atelier_core::types::BaseResponse;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}
