//! The HTTP boundary.
//!
//! Thin reqwest wrappers over the backend's config/specialty endpoints
//! (fetch-backed on wasm32). The backend upserts config by key; reads come
//! back as arbitrary JSON and are shaped by `amparo-core`'s lenient serde
//! types, so a failed fetch or a weird payload leaves the defaults on
//! screen instead of an error page.

use amparo_core::config::ConfigRecord;
use amparo_core::form::{AboutTexts, Field};
use amparo_core::specialty::Specialty;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub const CONFIG_URL: &str = "/api/admin/config";

/// Which specialty endpoint to hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Public,
    Admin,
}

impl Scope {
    fn specialties_url(self) -> &'static str {
        match self {
            Scope::Public => "/api/specialties",
            Scope::Admin => "/api/admin/specialties",
        }
    }
}

/// Cloneable so resource consumers can hold the error in signals.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("falha de rede: {0}")]
    Network(String),
    #[error("servidor respondeu {status}: {body}")]
    Status { status: u16, body: String },
    #[error("resposta inválida: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// One of the form's write burst failed; earlier writes stay committed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("falha ao salvar {}: {source}", .field.label())]
pub struct SaveError {
    pub field: Field,
    #[source]
    pub source: ApiError,
}

pub type ConfigResource = LocalResource<Result<Vec<ConfigRecord>, ApiError>>;
pub type SpecialtyResource = LocalResource<Result<Vec<Specialty>, ApiError>>;

/// The loaded value of a resource, or `None` while pending or failed -
/// callers render defaults either way (fail-open).
pub fn loaded<T>(resource: LocalResource<Result<T, ApiError>>) -> Option<T>
where
    T: Clone + 'static,
{
    resource.get().and_then(Result::ok)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json::<T>().await?)
}

pub async fn fetch_configs() -> Result<Vec<ConfigRecord>, ApiError> {
    get_json(CONFIG_URL).await
}

pub async fn fetch_specialties(scope: Scope) -> Result<Vec<Specialty>, ApiError> {
    get_json(scope.specialties_url()).await
}

/// `POST /api/admin/config` - the backend upserts by key.
pub async fn save_config(key: &str, value: &Value) -> Result<(), ApiError> {
    let response = reqwest::Client::new()
        .post(CONFIG_URL)
        .json(&serde_json::json!({ "key": key, "value": value }))
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(())
}

/// Runs the form's write plan in order. The writes are independent upserts,
/// not a transaction: on failure, the error names the field that did not
/// make it and everything before it stays committed.
pub async fn save_about_texts(texts: &AboutTexts) -> Result<(), SaveError> {
    for update in texts.updates() {
        save_config(update.key, &update.value)
            .await
            .map_err(|source| SaveError {
                field: update.field,
                source,
            })?;
    }
    Ok(())
}
