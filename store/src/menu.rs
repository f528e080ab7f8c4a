use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::models::{ItemType, MenuItem, MenuUpdate};

pub async fn list(pool: &SqlitePool) -> Result<Vec<MenuItem>, sqlx::Error> {
    let mut items: Vec<MenuItem> =
        sqlx::query_as("SELECT id, item_type, name, price, premium FROM menu_items ORDER BY id")
            .fetch_all(pool)
            .await?;

    let rows: Vec<(i64, String)> =
        sqlx::query_as("SELECT menu_id, ingredient FROM menu_ingredients ORDER BY rowid")
            .fetch_all(pool)
            .await?;

    let mut by_item: HashMap<i64, Vec<String>> = HashMap::new();
    for (menu_id, ingredient) in rows {
        by_item.entry(menu_id).or_default().push(ingredient);
    }

    for item in &mut items {
        if let Some(ingredients) = by_item.remove(&item.id) {
            item.ingredients = ingredients;
        }
    }

    Ok(items)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<MenuItem>, sqlx::Error> {
    let item: Option<MenuItem> =
        sqlx::query_as("SELECT id, item_type, name, price, premium FROM menu_items WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    match item {
        Some(mut item) => {
            item.ingredients = ingredients_of(pool, item.id).await?;
            Ok(Some(item))
        }
        None => Ok(None),
    }
}

pub async fn create(
    pool: &SqlitePool,
    item_type: ItemType,
    name: &str,
    price: f64,
    premium: bool,
    ingredients: &[String],
) -> Result<MenuItem, sqlx::Error> {
    let mut item: MenuItem = sqlx::query_as(
        "INSERT INTO menu_items (item_type, name, price, premium) VALUES (?, ?, ?, ?) \
         RETURNING id, item_type, name, price, premium",
    )
    .bind(item_type)
    .bind(name)
    .bind(price)
    .bind(premium)
    .fetch_one(pool)
    .await?;

    // each ingredient is its own statement, same as the item row above
    for ingredient in ingredients {
        sqlx::query("INSERT INTO menu_ingredients (menu_id, ingredient) VALUES (?, ?)")
            .bind(item.id)
            .bind(ingredient)
            .execute(pool)
            .await?;
    }

    item.ingredients = ingredients.to_vec();

    Ok(item)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    fields: MenuUpdate,
) -> Result<Option<MenuItem>, sqlx::Error> {
    let item: Option<MenuItem> = sqlx::query_as(
        "UPDATE menu_items SET \
            item_type = COALESCE(?, item_type), \
            name = COALESCE(?, name), \
            price = COALESCE(?, price), \
            premium = COALESCE(?, premium) \
         WHERE id = ? \
         RETURNING id, item_type, name, price, premium",
    )
    .bind(fields.item_type)
    .bind(fields.name)
    .bind(fields.price)
    .bind(fields.premium)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(mut item) = item else {
        return Ok(None);
    };

    match fields.ingredients {
        Some(ingredients) => {
            sqlx::query("DELETE FROM menu_ingredients WHERE menu_id = ?")
                .bind(item.id)
                .execute(pool)
                .await?;

            for ingredient in &ingredients {
                sqlx::query("INSERT INTO menu_ingredients (menu_id, ingredient) VALUES (?, ?)")
                    .bind(item.id)
                    .bind(ingredient)
                    .execute(pool)
                    .await?;
            }

            item.ingredients = ingredients;
        }
        None => {
            item.ingredients = ingredients_of(pool, item.id).await?;
        }
    }

    Ok(Some(item))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query("DELETE FROM menu_ingredients WHERE menu_id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    let result = sqlx::query("DELETE FROM menu_items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

async fn ingredients_of(pool: &SqlitePool, menu_id: i64) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT ingredient FROM menu_ingredients WHERE menu_id = ? ORDER BY rowid")
        .bind(menu_id)
        .fetch_all(pool)
        .await
}
