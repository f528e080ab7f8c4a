use serde::Deserialize;

use store::models::ItemType;

#[derive(Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub inventory: Vec<SeedInventory>,
    #[serde(default)]
    pub menu: Vec<SeedMenuItem>,
}

#[derive(Deserialize)]
pub struct SeedInventory {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    #[serde(default)]
    pub reorder: bool,
}

#[derive(Deserialize)]
pub struct SeedMenuItem {
    pub item_type: ItemType,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub ingredients: Vec<String>,
}
