//! Resource CRUD handlers: list, read, create, update, delete. Generic over [`Resource`];
//! the router instantiates them once per entity.

use crate::error::AppError;
use crate::extractors::{BaseUrl, Payload};
use crate::model::Resource;
use crate::response::{collection_model, entity_model};
use crate::service::{CrudService, PageRequest};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

fn page_request(
    params: Result<Query<PageParams>, QueryRejection>,
    max_size: u32,
) -> Result<PageRequest, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    PageRequest::new(
        params.page.unwrap_or(PageRequest::DEFAULT_PAGE),
        params.size.unwrap_or(PageRequest::DEFAULT_SIZE),
        max_size,
    )
}

fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

/// GET /{resource}?page=&size=, one page ordered by id.
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    base: BaseUrl,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = page_request(params, state.config.max_page_size)?;
    let page = CrudService::list::<R>(&state.pool, request).await?;
    Ok(Json(collection_model(page, &base)))
}

/// GET /{resource}/{id}
pub async fn read<R: Resource>(
    State(state): State<AppState>,
    base: BaseUrl,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    let row = CrudService::read::<R>(&state.pool, id).await?;
    Ok(Json(entity_model(row, &base, PageRequest::default())))
}

/// POST /{resource}
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    base: BaseUrl,
    Payload(body): Payload<R::Payload>,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::create::<R>(&state.pool, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(entity_model(row, &base, PageRequest::default())),
    ))
}

/// PUT /{resource}/{id}
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    base: BaseUrl,
    id: Result<Path<i64>, PathRejection>,
    Payload(body): Payload<R::Payload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    let row = CrudService::update::<R>(&state.pool, id, &body).await?;
    Ok(Json(entity_model(row, &base, PageRequest::default())))
}

/// DELETE /{resource}/{id}
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    CrudService::delete::<R>(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
