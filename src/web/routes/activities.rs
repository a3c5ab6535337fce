use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::database::activity_store::ActivityStore;
use crate::models::ActivityCatalog;
use crate::services::activities_service::{self, ActivityMessage, ActivityServiceError, ErrorKind};

type ApiError = (StatusCode, Json<Value>);

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::BAD_REQUEST,
    }
}

fn detail(status: StatusCode, message: String) -> ApiError {
    (status, Json(serde_json::json!({ "detail": message })))
}

fn error_response(err: ActivityServiceError) -> ApiError {
    detail(status_for(err.kind()), err.to_string())
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> Json<ActivityCatalog> {
    Json(activities_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<ActivityMessage>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!(activity = %activity_name, error = %rejection, "signup query rejected");
        detail(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    activities_service::signup_for_activity(&store, &activity_name, &query.email)
        .map(Json)
        .map_err(error_response)
}

pub async fn unregister_handler(
    Path((activity_name, email)): Path<(String, String)>,
    State(store): State<ActivityStore>,
) -> Result<Json<ActivityMessage>, ApiError> {
    activities_service::unregister_from_activity(&store, &activity_name, &email)
        .map(Json)
        .map_err(error_response)
}
