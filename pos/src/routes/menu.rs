use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use store::{
    menu,
    models::{MenuCreate, MenuUpdate},
};

use super::{IdQuery, parse_id, require_id};
use crate::{error::AppError, state::AppState};

pub async fn get_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdQuery>,
) -> Result<Response, AppError> {
    match params.id {
        Some(raw) => {
            let id = parse_id(&raw)?;
            let item = menu::get(&state.pool, id)
                .await?
                .ok_or(AppError::NotFound("Menu item"))?;

            Ok(Json(item).into_response())
        }
        None => Ok(Json(menu::list(&state.pool).await?).into_response()),
    }
}

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MenuCreate>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::MalformedPayload)?;

    let item_type = payload.item_type.ok_or(AppError::MissingField("item_type"))?;
    let name = payload.name.ok_or(AppError::MissingField("name"))?;
    let price = payload.price.ok_or(AppError::MissingField("price"))?;

    let item = menu::create(
        &state.pool,
        item_type,
        &name,
        price,
        payload.premium,
        &payload.ingredients,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MenuUpdate>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::MalformedPayload)?;
    let id = payload.id.ok_or(AppError::MissingField("id"))?;

    let item = menu::update(&state.pool, id, payload)
        .await?
        .ok_or(AppError::NotFound("Menu item"))?;

    Ok(Json(item).into_response())
}

pub async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdQuery>,
) -> Result<Response, AppError> {
    let id = require_id(params)?;

    if !menu::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Menu item"));
    }

    Ok(Json(json!({ "message": format!("Deleted menu item {id}") })).into_response())
}
