//! # SQLite
//!
//! Disk database behind every API resource.
//!
//! ## Requirements
//!
//! - Small relational dataset, one table per resource
//! - Every operation is a single parameterized statement
//! - No cross-statement transactions, each call is its own round trip
//!
//! ## Schema
//!
//! - `inventory`: id, name, amount, unit, reorder (**bool**, manually set)
//! - `menu_items`: id, item_type (**side**/**entree**), name, price, premium (**bool**)
//! - `menu_ingredients`: menu_id, ingredient, one row per ingredient
//! - `transactions`: id, customer/cashier names, sale_price, per-category counts,
//!   recorded_at (**RFC 3339**)
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS inventory (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        amount REAL NOT NULL,
        unit TEXT NOT NULL,
        reorder INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS menu_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        item_type TEXT NOT NULL,
        name TEXT NOT NULL,
        price REAL NOT NULL,
        premium INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS menu_ingredients (
        menu_id INTEGER NOT NULL,
        ingredient TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_menu_ingredients_menu_id
        ON menu_ingredients (menu_id)",
    "CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_name TEXT NOT NULL,
        cashier_name TEXT NOT NULL,
        sale_price REAL NOT NULL,
        items INTEGER NOT NULL DEFAULT 0,
        meals INTEGER NOT NULL DEFAULT 0,
        appetizers INTEGER NOT NULL DEFAULT 0,
        drinks INTEGER NOT NULL DEFAULT 0,
        recorded_at TEXT NOT NULL
    )",
];
