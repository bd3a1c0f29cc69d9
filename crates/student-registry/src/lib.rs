//! Student Registry Service
//!
//! A small web form for recording students (name, roll number,
//! department) into a single JSON data file.
//!
//! ## Endpoints
//!
//! - `GET /` - Entry form and table of all students
//! - `POST /students` - Add a student from form fields, then redirect to `/`
//! - `GET /api/students` - All students as a JSON array
//! - `GET /health` - Health check

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod storage;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{RegistryError, Result};
pub use models::StudentRecord;
pub use registry::{Registry, StudentSubmission};
pub use storage::{JsonFileStore, RecordStore};

/// Application state shared across handlers
pub struct AppState {
    pub registry: Registry,
}

impl AppState {
    /// Build state around any record store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            registry: Registry::new(store),
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/students", post(handlers::create_student_handler))
        .route("/api/students", get(handlers::list_students_handler))
        .route("/health", get(handlers::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
