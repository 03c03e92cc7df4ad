use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    AssessmentDraft, AssessmentId, AssessmentPatch, CandidateDraft, CandidateId, CandidatePatch,
    JobDraft, JobId, JobPatch,
};
use super::service::TalentService;
use super::snapshot::SnapshotStore;
use super::store::StoreError;

/// Reorder payload. Full job objects deserialize here too; only the ids are
/// consumed.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub jobs: Vec<ReorderEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderEntry {
    pub id: JobId,
}

/// Router builder exposing the REST-shaped hiring surface.
pub fn hiring_router<S>(service: Arc<TalentService<S>>) -> Router
where
    S: SnapshotStore + 'static,
{
    Router::new()
        .route("/api/jobs", get(list_jobs::<S>).post(create_job::<S>))
        .route("/api/jobs/reorder", patch(reorder_jobs::<S>))
        .route(
            "/api/jobs/:id",
            patch(update_job::<S>).delete(delete_job::<S>),
        )
        .route(
            "/api/candidates",
            get(list_candidates::<S>).post(create_candidate::<S>),
        )
        .route(
            "/api/candidates/:id",
            patch(update_candidate::<S>).delete(delete_candidate::<S>),
        )
        .route(
            "/api/assessments",
            get(list_assessments::<S>).post(create_assessment::<S>),
        )
        .route(
            "/api/assessments/:id",
            patch(update_assessment::<S>).delete(delete_assessment::<S>),
        )
        .with_state(service)
}

fn error_response(err: StoreError) -> Response {
    let status = match &err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::ReorderMismatch { .. } | StoreError::ReorderUnknownId { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        StoreError::Snapshot(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}

async fn list_jobs<S: SnapshotStore>(State(service): State<Arc<TalentService<S>>>) -> Response {
    match service.list_jobs().await {
        Ok(jobs) => Json(jobs).into_response(),
        Err(err) => error_response(err),
    }
}

async fn create_job<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
    Json(draft): Json<JobDraft>,
) -> Response {
    match service.create_job(draft).await {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_job<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
    Path(id): Path<String>,
    Json(patch): Json<JobPatch>,
) -> Response {
    match service.update_job(&JobId(id), patch).await {
        Ok(job) => Json(job).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_job<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
    Path(id): Path<String>,
) -> Response {
    match service.delete_job(&JobId(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

async fn reorder_jobs<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
    Json(request): Json<ReorderRequest>,
) -> Response {
    let ordered: Vec<JobId> = request.jobs.into_iter().map(|entry| entry.id).collect();
    match service.reorder_jobs(&ordered).await {
        Ok(_) => Json(json!({ "success": true })).into_response(),
        Err(err) => error_response(err),
    }
}

async fn list_candidates<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
) -> Response {
    match service.list_candidates().await {
        Ok(candidates) => Json(candidates).into_response(),
        Err(err) => error_response(err),
    }
}

async fn create_candidate<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
    Json(draft): Json<CandidateDraft>,
) -> Response {
    match service.create_candidate(draft).await {
        Ok(candidate) => (StatusCode::CREATED, Json(candidate)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_candidate<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
    Path(id): Path<String>,
    Json(patch): Json<CandidatePatch>,
) -> Response {
    match service.update_candidate(&CandidateId(id), patch).await {
        Ok(candidate) => Json(candidate).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_candidate<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
    Path(id): Path<String>,
) -> Response {
    match service.delete_candidate(&CandidateId(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

async fn list_assessments<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
) -> Response {
    match service.list_assessments().await {
        Ok(assessments) => Json(assessments).into_response(),
        Err(err) => error_response(err),
    }
}

async fn create_assessment<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
    Json(draft): Json<AssessmentDraft>,
) -> Response {
    match service.create_assessment(draft).await {
        Ok(assessment) => (StatusCode::CREATED, Json(assessment)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_assessment<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
    Path(id): Path<String>,
    Json(patch): Json<AssessmentPatch>,
) -> Response {
    match service.update_assessment(&AssessmentId(id), patch).await {
        Ok(assessment) => Json(assessment).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_assessment<S: SnapshotStore>(
    State(service): State<Arc<TalentService<S>>>,
    Path(id): Path<String>,
) -> Response {
    match service.delete_assessment(&AssessmentId(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}
