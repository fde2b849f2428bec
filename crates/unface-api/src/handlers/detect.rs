//! Age detection handler.

use axum::async_trait;
use axum::body::HttpBody;
use axum::extract::{FromRequest, Request, State};
use axum::http::header;
use axum::Json;
use serde::Deserialize;
use unface_models::{AgeDecision, ImagePayload};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Age detection request body.
#[derive(Debug, Default, Deserialize)]
pub struct DetectAgeRequest {
    /// Base64 image, optionally prefixed with `data:image/<subtype>;base64,`
    #[serde(default)]
    pub image: Option<String>,
}

/// JSON body extractor that reads an empty body as `{}`.
///
/// Clients posting nothing get "Image is required" rather than a JSON
/// syntax error.
pub struct DetectAgeBody(pub DetectAgeRequest);

#[async_trait]
impl<S> FromRequest<S> for DetectAgeBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_empty_body(&request) {
            return Ok(Self(DetectAgeRequest::default()));
        }

        let Json(body) = Json::<DetectAgeRequest>::from_request(request, state).await?;
        Ok(Self(body))
    }
}

fn is_empty_body(request: &Request) -> bool {
    let zero_length = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0");

    zero_length || request.body().size_hint().exact() == Some(0)
}

/// Classify the first face in the posted image as adult or minor.
pub async fn detect_age(
    State(state): State<AppState>,
    DetectAgeBody(request): DetectAgeBody,
) -> ApiResult<Json<AgeDecision>> {
    let image = request
        .image
        .filter(|image| !image.is_empty())
        .ok_or(ApiError::ImageRequired)?;

    let payload = ImagePayload::decode(&image)?;
    let decision = state.classifier.classify(payload).await?;

    Ok(Json(decision))
}
