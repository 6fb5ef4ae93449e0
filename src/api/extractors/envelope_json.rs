//! JSON body extractor whose rejection is a response envelope.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::types::Envelope;

/// Decodes the body as JSON and nothing more.
///
/// Field validation is left to the services, which decide when it runs
/// relative to their other checks. A body that cannot be decoded becomes a
/// 400 envelope with the parser message in `error`.
pub struct EnvelopeJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for EnvelopeJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = Envelope<()>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "request body rejected");
                Envelope::from(AppError::Binding(rejection.body_text()))
            })?;

        Ok(EnvelopeJson(value))
    }
}
