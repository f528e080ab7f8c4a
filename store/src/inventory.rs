use sqlx::SqlitePool;

use crate::models::{InventoryItem, InventoryUpdate};

pub async fn list(pool: &SqlitePool) -> Result<Vec<InventoryItem>, sqlx::Error> {
    sqlx::query_as("SELECT id, name, amount, unit, reorder FROM inventory ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<InventoryItem>, sqlx::Error> {
    sqlx::query_as("SELECT id, name, amount, unit, reorder FROM inventory WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    amount: f64,
    unit: &str,
    reorder: bool,
) -> Result<InventoryItem, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO inventory (name, amount, unit, reorder) VALUES (?, ?, ?, ?) \
         RETURNING id, name, amount, unit, reorder",
    )
    .bind(name)
    .bind(amount)
    .bind(unit)
    .bind(reorder)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    fields: InventoryUpdate,
) -> Result<Option<InventoryItem>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE inventory SET \
            name = COALESCE(?, name), \
            amount = COALESCE(?, amount), \
            unit = COALESCE(?, unit), \
            reorder = COALESCE(?, reorder) \
         WHERE id = ? \
         RETURNING id, name, amount, unit, reorder",
    )
    .bind(fields.name)
    .bind(fields.amount)
    .bind(fields.unit)
    .bind(fields.reorder)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM inventory WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
