//! HTTP Handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use kernel::id::{ChirpId, UserId};

use crate::application::{
    ChirpConfig, CreateChirpInput, CreateChirpUseCase, GetChirpUseCase, ValidateChirpUseCase,
};
use crate::domain::repository::ChirpRepository;
use crate::error::ChirpResult;
use crate::presentation::dto::{
    ChirpResponse, CreateChirpRequest, ValidateChirpRequest, ValidateChirpResponse,
};

/// Shared state for chirp handlers
#[derive(Clone)]
pub struct ChirpAppState<R>
where
    R: ChirpRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ChirpConfig>,
}

/// POST /api/validate_chirp
pub async fn validate_chirp<R>(
    State(state): State<ChirpAppState<R>>,
    Json(req): Json<ValidateChirpRequest>,
) -> ChirpResult<Json<ValidateChirpResponse>>
where
    R: ChirpRepository + Clone + Send + Sync + 'static,
{
    let use_case = ValidateChirpUseCase::new(state.config.clone());
    let cleaned_body = use_case.execute(&req.body)?;

    Ok(Json(ValidateChirpResponse { cleaned_body }))
}

/// POST /api/chirps
///
/// Requires the authenticated `UserId` in request extensions.
pub async fn create_chirp<R>(
    State(state): State<ChirpAppState<R>>,
    Extension(user_id): Extension<UserId>,
    Json(req): Json<CreateChirpRequest>,
) -> ChirpResult<(StatusCode, Json<ChirpResponse>)>
where
    R: ChirpRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateChirpUseCase::new(state.repo.clone(), state.config.clone());

    let chirp = use_case
        .execute(CreateChirpInput {
            user_id,
            body: req.body,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(chirp.into())))
}

/// GET /api/chirps/{chirp_id}
pub async fn get_chirp<R>(
    State(state): State<ChirpAppState<R>>,
    Path(chirp_id): Path<ChirpId>,
) -> ChirpResult<Json<ChirpResponse>>
where
    R: ChirpRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetChirpUseCase::new(state.repo.clone());
    let chirp = use_case.execute(&chirp_id).await?;

    Ok(Json(chirp.into()))
}
