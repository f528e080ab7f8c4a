use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde_json::json;
use store::{
    inventory,
    models::{InventoryCreate, InventoryUpdate},
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
            let item = inventory::get(&state.pool, id)
                .await?
                .ok_or(AppError::NotFound("Inventory item"))?;

            Ok(Json(item).into_response())
        }
        None => Ok(Json(inventory::list(&state.pool).await?).into_response()),
    }
}

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InventoryCreate>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::MalformedPayload)?;

    let name = payload.name.ok_or(AppError::MissingField("name"))?;
    let amount = payload.amount.ok_or(AppError::MissingField("amount"))?;
    let unit = payload.unit.ok_or(AppError::MissingField("unit"))?;

    let item = inventory::create(&state.pool, &name, amount, &unit, payload.reorder).await?;

    Ok(Json(item).into_response())
}

pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InventoryUpdate>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::MalformedPayload)?;
    let id = payload.id.ok_or(AppError::MissingField("id"))?;

    let item = inventory::update(&state.pool, id, payload)
        .await?
        .ok_or(AppError::NotFound("Inventory item"))?;

    Ok(Json(item).into_response())
}

pub async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdQuery>,
) -> Result<Response, AppError> {
    let id = require_id(params)?;

    if !inventory::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Inventory item"));
    }

    Ok(Json(json!({ "message": format!("Deleted inventory item {id}") })).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::tests::test_state;
    use axum::http::StatusCode;

    fn create_payload(name: &str) -> InventoryCreate {
        InventoryCreate {
            name: Some(name.to_string()),
            amount: Some(12.0),
            unit: Some("lbs".to_string()),
            reorder: false,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_by_id() {
        let state = test_state().await;

        let response = create_handler(State(state.clone()), Ok(Json(create_payload("flour"))))
            .await
            .expect("Failed to create");
        assert_eq!(response.status(), StatusCode::OK);

        let response = get_handler(
            State(state),
            Query(IdQuery { id: Some("1".to_string()) }),
        )
        .await
        .expect("Failed to get");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_missing_field_is_rejected() {
        let state = test_state().await;

        let mut payload = create_payload("flour");
        payload.unit = None;

        let err = create_handler(State(state), Ok(Json(payload)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingField("unit")));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_404() {
        let state = test_state().await;

        let err = get_handler(
            State(state),
            Query(IdQuery { id: Some("99".to_string()) }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id_is_400() {
        let state = test_state().await;

        let err = delete_handler(
            State(state),
            Query(IdQuery { id: Some("abc".to_string()) }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_404() {
        let state = test_state().await;

        let err = update_handler(
            State(state),
            Ok(Json(InventoryUpdate {
                id: Some(7),
                name: Some("ghost".to_string()),
                amount: None,
                unit: None,
                reorder: None,
            })),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
