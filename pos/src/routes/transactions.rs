use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde_json::json;
use store::{
    models::{TransactionCreate, TransactionUpdate},
    transactions,
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
            let transaction = transactions::get(&state.pool, id)
                .await?
                .ok_or(AppError::NotFound("Transaction"))?;

            Ok(Json(transaction).into_response())
        }
        None => Ok(Json(transactions::list(&state.pool).await?).into_response()),
    }
}

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TransactionCreate>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::MalformedPayload)?;

    let customer_name = payload
        .customer_name
        .ok_or(AppError::MissingField("customerName"))?;
    let cashier_name = payload
        .cashier_name
        .ok_or(AppError::MissingField("cashierName"))?;
    let sale_price = payload
        .sale_price
        .ok_or(AppError::MissingField("salePrice"))?;

    let transaction = transactions::create(
        &state.pool,
        &customer_name,
        &cashier_name,
        sale_price,
        payload.items,
        payload.meals,
        payload.appetizers,
        payload.drinks,
    )
    .await?;

    Ok(Json(transaction).into_response())
}

pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TransactionUpdate>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::MalformedPayload)?;
    let id = payload.id.ok_or(AppError::MissingField("id"))?;

    let transaction = transactions::update(&state.pool, id, payload)
        .await?
        .ok_or(AppError::NotFound("Transaction"))?;

    Ok(Json(transaction).into_response())
}

pub async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdQuery>,
) -> Result<Response, AppError> {
    let id = require_id(params)?;

    if !transactions::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Transaction"));
    }

    Ok(Json(json!({ "message": format!("Deleted transaction {id}") })).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::tests::test_state;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_counts_default_to_zero() {
        let state = test_state().await;

        let response = create_handler(
            State(state.clone()),
            Ok(Json(TransactionCreate {
                customer_name: Some("Alice".to_string()),
                cashier_name: Some("Bob".to_string()),
                sale_price: Some(9.80),
                items: 0,
                meals: 0,
                appetizers: 0,
                drinks: 0,
            })),
        )
        .await
        .expect("Failed to create");
        assert_eq!(response.status(), StatusCode::OK);

        let recorded = store::transactions::get(&state.pool, 1)
            .await
            .expect("Failed to get")
            .expect("Transaction not found");
        assert_eq!(recorded.items, 0);
        assert_eq!(recorded.meals, 0);
    }

    #[tokio::test]
    async fn test_create_requires_names_and_price() {
        let state = test_state().await;

        let err = create_handler(
            State(state),
            Ok(Json(TransactionCreate {
                customer_name: Some("Alice".to_string()),
                cashier_name: None,
                sale_price: Some(9.80),
                items: 0,
                meals: 0,
                appetizers: 0,
                drinks: 0,
            })),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::MissingField("cashierName")));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_404() {
        let state = test_state().await;

        let err = delete_handler(
            State(state),
            Query(IdQuery { id: Some("12".to_string()) }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
