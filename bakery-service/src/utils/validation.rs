use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON body that has been deserialized and validated.
///
/// Malformed JSON, missing fields and rule violations are all rejected with
/// 422 before the handler runs.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Rejected request body: {}", e.body_text());
            AppError::UnprocessableEntity(anyhow::anyhow!(e.body_text()))
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactMessage;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        response::IntoResponse,
    };

    async fn extract(body: &'static str) -> Result<ContactMessage, AppError> {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/contact")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        ValidatedJson::<ContactMessage>::from_request(req, &())
            .await
            .map(|ValidatedJson(v)| v)
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let msg = extract(r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#)
            .await
            .unwrap();
        assert_eq!(msg.name, "Ada");
    }

    #[tokio::test]
    async fn missing_field_is_unprocessable() {
        let err = extract(r#"{"name":"Ada","message":"Hi"}"#).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn rule_violation_is_unprocessable() {
        let err = extract(r#"{"name":"","email":"ada@example.com","message":"Hi"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
