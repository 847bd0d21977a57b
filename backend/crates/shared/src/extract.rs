//! Request extractors with unified error responses
//!
//! Axum's built-in [`axum::Json`] rejects malformed bodies with its own
//! plain-text responses. This wrapper routes those rejections through
//! [`AppError`] so parse failures answer in the same `{"error": ...}`
//! shape as every other failure in the API.

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON ボディ抽出器
///
/// [`axum::Json`] と同じ挙動で JSON ボディをデシリアライズしますが、
/// 失敗時は [`AppError`] に変換して API 共通のエラー形式で応答します。
///
/// ## Examples
/// ```rust,ignore
/// use kernel::extract::Json;
///
/// async fn create(Json(payload): Json<CreateRequest>) { /* ... */ }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::from(rejection)),
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
