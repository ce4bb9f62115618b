use axum::http::StatusCode;

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, description = "The process is up")
    ),
)]
pub async fn health_live() -> StatusCode {
    StatusCode::OK
}
