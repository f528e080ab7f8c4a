use std::env;

use anyhow::Result;
use reqwest::Client;
use serde_json::{Value, json};

/// Smoke-drives a running server: create, fetch, validate, delete.
#[tokio::main]
async fn main() -> Result<()> {
    let base = env::var("POS_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let client = Client::new();

    let res = client
        .post(format!("{base}/api/inventory"))
        .json(&json!({ "name": "smoke test flour", "amount": 10.0, "unit": "lbs" }))
        .send()
        .await?;
    println!("POST /api/inventory -> {}", res.status());
    let created: Value = res.json().await?;
    println!("{created:?}");

    let inventory_id = created["id"].as_i64().unwrap();

    let res = client
        .post(format!("{base}/api/menu"))
        .json(&json!({
            "item_type": "entree",
            "name": "smoke test entree",
            "price": 5.20,
            "ingredients": ["smoke test flour"]
        }))
        .send()
        .await?;
    println!("POST /api/menu -> {}", res.status());
    let menu_item: Value = res.json().await?;

    let menu_id = menu_item["id"].as_i64().unwrap();

    let res = client
        .post(format!("{base}/api/meals/validate"))
        .json(&json!({ "size": "bowl", "items": [menu_id] }))
        .send()
        .await?;
    println!("POST /api/meals/validate -> {}", res.status());
    let meal: Value = res.json().await?;
    println!(
        "progress: {}, complete: {}",
        meal["progress"], meal["complete"]
    );

    let res = client
        .post(format!("{base}/api/transactions"))
        .json(&json!({
            "customerName": "Smoke Test",
            "cashierName": "Tester",
            "salePrice": 8.30,
            "meals": 1
        }))
        .send()
        .await?;
    println!("POST /api/transactions -> {}", res.status());
    let transaction: Value = res.json().await?;

    let transaction_id = transaction["id"].as_i64().unwrap();

    // a non-numeric id has to bounce before the data layer
    let res = client
        .delete(format!("{base}/api/inventory?id=abc"))
        .send()
        .await?;
    println!("DELETE /api/inventory?id=abc -> {}", res.status());

    for (resource, id) in [
        ("inventory", inventory_id),
        ("menu", menu_id),
        ("transactions", transaction_id),
    ] {
        let res = client
            .delete(format!("{base}/api/{resource}?id={id}"))
            .send()
            .await?;
        println!("DELETE /api/{resource}?id={id} -> {}", res.status());
    }

    Ok(())
}
