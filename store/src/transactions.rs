use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{Transaction, TransactionUpdate};

const COLUMNS: &str =
    "id, customer_name, cashier_name, sale_price, items, meals, appetizers, drinks, recorded_at";

pub async fn list(pool: &SqlitePool) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM transactions ORDER BY id"
    ))
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Transaction>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM transactions WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    pool: &SqlitePool,
    customer_name: &str,
    cashier_name: &str,
    sale_price: f64,
    items: i64,
    meals: i64,
    appetizers: i64,
    drinks: i64,
) -> Result<Transaction, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO transactions \
            (customer_name, cashier_name, sale_price, items, meals, appetizers, drinks, recorded_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING {COLUMNS}"
    ))
    .bind(customer_name)
    .bind(cashier_name)
    .bind(sale_price)
    .bind(items)
    .bind(meals)
    .bind(appetizers)
    .bind(drinks)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    fields: TransactionUpdate,
) -> Result<Option<Transaction>, sqlx::Error> {
    sqlx::query_as(&format!(
        "UPDATE transactions SET \
            customer_name = COALESCE(?, customer_name), \
            cashier_name = COALESCE(?, cashier_name), \
            sale_price = COALESCE(?, sale_price), \
            items = COALESCE(?, items), \
            meals = COALESCE(?, meals), \
            appetizers = COALESCE(?, appetizers), \
            drinks = COALESCE(?, drinks) \
         WHERE id = ? \
         RETURNING {COLUMNS}"
    ))
    .bind(fields.customer_name)
    .bind(fields.cashier_name)
    .bind(fields.sale_price)
    .bind(fields.items)
    .bind(fields.meals)
    .bind(fields.appetizers)
    .bind(fields.drinks)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM transactions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
