/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Typed client for the content API as the website consumes it.
//!
//! Every call is fetched once and resolves to a [`FetchState`]: there is no
//! retry, no shared cache and no de-duplication between callers.

pub mod admin;
pub mod content;
pub mod session;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub asset_url: String,
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type RequestType = reqwest::Method;

/// Result of one fetch as a view renders it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Error(String),
    Success(T),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchState::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Error(message) => FetchState::Error(message),
            FetchState::Success(value) => FetchState::Success(f(value)),
        }
    }
}

impl<T> From<Result<T, String>> for FetchState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => FetchState::Success(value),
            Err(message) => FetchState::Error(message),
        }
    }
}

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, String> {
    let status = res.status();
    let bytes = res
        .bytes()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    if let Ok(parsed) = serde_json::from_slice::<BaseResponse<T>>(&bytes) {
        if status.is_success() && !parsed.error {
            return Ok(parsed.message);
        }
    }

    match serde_json::from_slice::<BaseResponse<String>>(&bytes) {
        Ok(error_res) if error_res.error || !status.is_success() => Err(error_res.message),
        _ if !status.is_success() => Err(format!("Request failed with status {}", status)),
        _ => Err(format!(
            "Unexpected response: {}",
            String::from_utf8_lossy(&bytes)
        )),
    }
}

fn get_client(
    config: &RequestConfig,
    endpoint: &str,
    request_type: RequestType,
    login: bool,
) -> Result<reqwest::RequestBuilder, String> {
    let client = reqwest::Client::new();
    let mut client = client.request(
        request_type,
        format!("{}/{}", config.server_url.trim_end_matches('/'), endpoint),
    );

    client = client.header("Content-Type", "application/json");

    if !login {
        return Ok(client);
    }

    let Some(token) = &config.token else {
        return Err("Not signed in".to_string());
    };

    client = client.header("Authorization", format!("Bearer {}", token));

    Ok(client)
}

async fn fetch<T: DeserializeOwned>(
    client: Result<reqwest::RequestBuilder, String>,
) -> FetchState<T> {
    let client = match client {
        Ok(client) => client,
        Err(e) => return FetchState::Error(e),
    };

    let res = match client.send().await {
        Ok(res) => res,
        Err(e) => {
            tracing::debug!("Request failed: {}", e);
            return FetchState::Error(format!("Failed to reach server: {}", e));
        }
    };

    parse_response(res).await.into()
}

pub async fn health(config: &RequestConfig) -> FetchState<String> {
    fetch(get_client(config, "api/health", RequestType::GET, false)).await
}

/// Resolves a stored image filename against the static asset base URL.
pub fn asset_url(config: &RequestConfig, name: &str) -> Option<String> {
    let base = format!("{}/", config.asset_url.trim_end_matches('/'));
    let base = Url::parse(&base).ok()?;

    base.join(name.trim_start_matches('/'))
        .ok()
        .map(|url| url.to_string())
}
