//! HTTP request handlers for the student registry

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::{
    error::RegistryError, models::StudentRecord, registry::StudentSubmission, views, AppState,
};

/// API error rendered as a plain-text body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::MissingFields => ApiError {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            other => {
                error!("Request failed: {}", other);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal Server Error".to_string(),
                }
            }
        }
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "student-registry"
    }))
}

/// Entry form plus the table of every stored student
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let records = state.registry.list().await;
    Html(views::render_index(&records))
}

/// Accept a form submission and redirect back to the listing.
///
/// A body that is not a readable form counts as a submission with no
/// fields, so it gets the same 400 as an incomplete form.
pub async fn create_student_handler(
    State(state): State<Arc<AppState>>,
    form: Result<Form<StudentSubmission>, FormRejection>,
) -> Result<Response, ApiError> {
    let submission = match form {
        Ok(Form(submission)) => submission,
        Err(rejection) => {
            debug!("Unreadable form body: {}", rejection.body_text());
            StudentSubmission::default()
        }
    };

    let record = state.registry.submit(submission).await.map_err(|e| {
        if matches!(e, RegistryError::MissingFields) {
            info!("Rejected submission with missing fields");
        }
        ApiError::from(e)
    })?;

    info!("Created student record for {}", record.name);
    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}

/// Raw dump of the stored collection
pub async fn list_students_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<StudentRecord>> {
    Json(state.registry.list().await)
}
