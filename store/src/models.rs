use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stock record, `reorder` is flipped by hand from the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub reorder: bool,
}

/// Create inventory payload
#[derive(Debug, Deserialize)]
pub struct InventoryCreate {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    #[serde(default)]
    pub reorder: bool,
}

/// Update inventory payload, absent fields keep their stored values
#[derive(Debug, Deserialize)]
pub struct InventoryUpdate {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub reorder: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ItemType {
    Side,
    Entree,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub item_type: ItemType,
    pub name: String,
    pub price: f64,
    pub premium: bool,
    /// Ingredient names, stored one row each in `menu_ingredients`
    #[sqlx(skip)]
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Create menu payload
#[derive(Debug, Deserialize)]
pub struct MenuCreate {
    pub item_type: Option<ItemType>,
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Update menu payload, `ingredients: Some` replaces the whole list
#[derive(Debug, Deserialize)]
pub struct MenuUpdate {
    pub id: Option<i64>,
    pub item_type: Option<ItemType>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub premium: Option<bool>,
    pub ingredients: Option<Vec<String>>,
}

/// Sale record as the dashboard consumes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub customer_name: String,
    pub cashier_name: String,
    pub sale_price: f64,
    pub items: i64,
    pub meals: i64,
    pub appetizers: i64,
    pub drinks: i64,
    pub recorded_at: DateTime<Utc>,
}

/// Create transaction payload, counts default to zero
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreate {
    pub customer_name: Option<String>,
    pub cashier_name: Option<String>,
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub items: i64,
    #[serde(default)]
    pub meals: i64,
    #[serde(default)]
    pub appetizers: i64,
    #[serde(default)]
    pub drinks: i64,
}

/// Update transaction payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: Option<i64>,
    pub customer_name: Option<String>,
    pub cashier_name: Option<String>,
    pub sale_price: Option<f64>,
    pub items: Option<i64>,
    pub meals: Option<i64>,
    pub appetizers: Option<i64>,
    pub drinks: Option<i64>,
}
