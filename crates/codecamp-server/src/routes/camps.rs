//! Camp Routes - Camp resource management
//!
//! HTTP handlers that delegate to CampService and map its outcomes to
//! status codes.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::CampError;
use crate::models::CampModel;
use crate::AppState;

/// Optional nested talks
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct IncludeTalksQuery {
    /// Populate each camp's talks and speakers
    #[serde(default)]
    pub include_talks: bool,
}

/// Search by event date
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchCampsQuery {
    /// Event start date (YYYY-MM-DD)
    pub the_date: NaiveDate,
    /// Populate each camp's talks and speakers
    #[serde(default)]
    pub include_talks: bool,
}

impl From<CampError> for (StatusCode, String) {
    fn from(err: CampError) -> Self {
        let status = match &err {
            CampError::NotFound(_) => StatusCode::NOT_FOUND,
            CampError::Conflict(_) | CampError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CampError::ServerFailure(_) => {
                tracing::error!("Camp request failed: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, err.to_string())
    }
}

/// Unwrap a JSON body; an unreadable body is a bad request like any other
/// rejected write
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, (StatusCode, String)> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::warn!("Rejected camp body: {}", rejection.body_text());
        (StatusCode::BAD_REQUEST, rejection.body_text())
    })
}

/// List all camps
#[utoipa::path(
    get,
    path = "/api/camps",
    params(IncludeTalksQuery),
    responses(
        (status = 200, description = "List of all camps", body = Vec<CampModel>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Camps"
)]
pub async fn list_camps(
    State(state): State<AppState>,
    Query(query): Query<IncludeTalksQuery>,
) -> Result<Json<Vec<CampModel>>, (StatusCode, String)> {
    let camps = state.camp_service.list(query.include_talks).await?;

    Ok(Json(camps.into_iter().map(CampModel::from).collect()))
}

/// Get camp by moniker
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}",
    params(
        ("moniker" = String, Path, description = "Camp moniker")
    ),
    responses(
        (status = 200, description = "Camp found", body = CampModel),
        (status = 404, description = "Camp not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Camps"
)]
pub async fn get_camp(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> Result<Json<CampModel>, (StatusCode, String)> {
    let camp = state.camp_service.get(&moniker).await?;

    Ok(Json(camp.into()))
}

/// Search camps by event date
#[utoipa::path(
    get,
    path = "/api/camps/search",
    params(SearchCampsQuery),
    responses(
        (status = 200, description = "Camps starting on the date", body = Vec<CampModel>),
        (status = 404, description = "No camps on the date"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Camps"
)]
pub async fn search_camps(
    State(state): State<AppState>,
    Query(query): Query<SearchCampsQuery>,
) -> Result<Json<Vec<CampModel>>, (StatusCode, String)> {
    let camps = state
        .camp_service
        .search_by_date(query.the_date, query.include_talks)
        .await?;

    Ok(Json(camps.into_iter().map(CampModel::from).collect()))
}

/// Create new camp
#[utoipa::path(
    post,
    path = "/api/camps",
    request_body = CampModel,
    responses(
        (status = 201, description = "Camp created", body = CampModel,
            headers(("Location" = String, description = "URL of the new camp"))),
        (status = 400, description = "Malformed body, moniker in use, unusable moniker, or save failed"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Camps"
)]
pub async fn create_camp(
    State(state): State<AppState>,
    payload: Result<Json<CampModel>, JsonRejection>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (location, camp) = state.camp_service.create(json_body(payload)?).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CampModel::from(camp)),
    ))
}

/// Update camp
#[utoipa::path(
    put,
    path = "/api/camps/{moniker}",
    params(
        ("moniker" = String, Path, description = "Camp moniker")
    ),
    request_body = CampModel,
    responses(
        (status = 200, description = "Camp updated", body = CampModel),
        (status = 400, description = "Malformed body, moniker changed, or save failed"),
        (status = 404, description = "Camp not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Camps"
)]
pub async fn update_camp(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    payload: Result<Json<CampModel>, JsonRejection>,
) -> Result<Json<CampModel>, (StatusCode, String)> {
    let camp = state
        .camp_service
        .update(&moniker, json_body(payload)?)
        .await?;

    Ok(Json(camp.into()))
}

/// Delete camp
#[utoipa::path(
    delete,
    path = "/api/camps/{moniker}",
    params(
        ("moniker" = String, Path, description = "Camp moniker")
    ),
    responses(
        (status = 200, description = "Camp deleted"),
        (status = 400, description = "Failed to delete the camp"),
        (status = 404, description = "Camp not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Camps"
)]
pub async fn delete_camp(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.camp_service.delete(&moniker).await?;

    Ok(StatusCode::OK)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/camps", get(list_camps).post(create_camp))
        .route("/api/camps/search", get(search_camps))
        .route(
            "/api/camps/:moniker",
            get(get_camp).put(update_camp).delete(delete_camp),
        )
}
