use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use store::{
    meal::{MealBuilder, MealSize, Selection},
    menu,
};

use crate::{error::AppError, state::AppState};

#[derive(Deserialize)]
pub struct MealPayload {
    pub size: Option<MealSize>,
    /// Menu item ids in the order they were picked
    #[serde(default)]
    pub items: Vec<i64>,
}

/// Replays a pick sequence through the meal rules. The dashboard enforces
/// the same rules client-side; this is the authoritative check before a
/// meal goes on an order.
pub async fn validate_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MealPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::MalformedPayload)?;
    let size = payload.size.ok_or(AppError::MissingField("size"))?;

    let mut builder = MealBuilder::new(size);
    let mut rejected = Vec::new();

    for id in payload.items {
        let item = menu::get(&state.pool, id)
            .await?
            .ok_or(AppError::NotFound("Menu item"))?;

        if builder.select(&item) == Selection::Rejected {
            rejected.push(id);
        }
    }

    Ok(Json(json!({
        "size": size,
        "sides": builder.sides(),
        "entrees": builder.entrees(),
        "progress": builder.progress(),
        "complete": builder.is_complete(),
        "price": builder.price(),
        "rejected": rejected,
    }))
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::tests::test_state;
    use axum::http::StatusCode;
    use store::models::ItemType;

    async fn seed_menu(state: &AppState) -> Vec<i64> {
        let mut ids = Vec::new();
        for (item_type, name, premium) in [
            (ItemType::Side, "chow mein", false),
            (ItemType::Entree, "orange chicken", false),
            (ItemType::Entree, "honey walnut shrimp", true),
        ] {
            let item = menu::create(&state.pool, item_type, name, 0.0, premium, &[])
                .await
                .expect("Failed to seed menu");
            ids.push(item.id);
        }
        ids
    }

    #[tokio::test]
    async fn test_complete_plate_reports_price() {
        let state = test_state().await;
        let ids = seed_menu(&state).await;

        let response = validate_handler(
            State(state),
            Ok(Json(MealPayload {
                size: Some(MealSize::Plate),
                items: ids,
            })),
        )
        .await
        .expect("Failed to validate");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_size_is_400() {
        let state = test_state().await;

        let err = validate_handler(
            State(state),
            Ok(Json(MealPayload { size: None, items: Vec::new() })),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_menu_item_is_404() {
        let state = test_state().await;

        let err = validate_handler(
            State(state),
            Ok(Json(MealPayload {
                size: Some(MealSize::Bowl),
                items: vec![77],
            })),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
