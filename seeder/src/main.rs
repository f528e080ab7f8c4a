use std::{env, fs};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use store::db::{connect, init_schema};

mod models;
mod utils;

use models::SeedFile;
use utils::sanitize;

#[tokio::main]
async fn main() -> Result<()> {
    let path = env::args().nth(1).unwrap_or_else(|| "seed.json".to_string());
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://pos.db?mode=rwc".to_string());

    let raw = fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    let seed: SeedFile = serde_json::from_str(&raw).context("Malformed seed file")?;

    let pool = connect(&database_url).await?;
    init_schema(&pool).await?;

    println!("Loaded Inventory: {}", seed.inventory.len());
    println!("Loaded Menu Items: {}\n", seed.menu.len());

    let pb = ProgressBar::new((seed.inventory.len() + seed.menu.len()) as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )?
        .progress_chars("=> "),
    );

    let mut skipped = 0;

    for entry in seed.inventory {
        let name = sanitize(&entry.name);
        if name.is_empty() {
            skipped += 1;
            pb.inc(1);
            continue;
        }

        store::inventory::create(&pool, &name, entry.amount, &entry.unit, entry.reorder).await?;
        pb.inc(1);
    }

    for entry in seed.menu {
        let name = sanitize(&entry.name);
        if name.is_empty() {
            skipped += 1;
            pb.inc(1);
            continue;
        }

        let ingredients: Vec<String> = entry
            .ingredients
            .iter()
            .map(|ingredient| sanitize(ingredient))
            .filter(|ingredient| !ingredient.is_empty())
            .collect();

        store::menu::create(
            &pool,
            entry.item_type,
            &name,
            entry.price,
            entry.premium,
            &ingredients,
        )
        .await?;
        pb.inc(1);
    }

    pb.finish_with_message("done");

    if skipped > 0 {
        println!("\nSkipped Entries: {skipped}");
    }

    Ok(())
}
