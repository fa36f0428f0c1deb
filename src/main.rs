use chrono::Local;
use dotenvy::dotenv;
use plant_points::{
    config,
    core::{meal, plant, report, store::ProgressStore},
    errors::Result,
};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Initialize the database
    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!("Database initialized");

    // 4. Seed the plant catalog (if a seed file is present)
    match config::plants::load_default_config() {
        Ok(catalog) => {
            let inserted = plant::seed_plant_catalog(&db, &catalog.plants).await?;
            info!(inserted, "Plant catalog seeded");
        }
        Err(err) => warn!("Skipping catalog seed: {err}"),
    }

    // 5. Print the weekly report for the configured user
    let Ok(user_id) = env::var("PLANT_POINTS_USER") else {
        info!("Set PLANT_POINTS_USER to print a weekly report");
        return Ok(());
    };

    let mut progress_store = ProgressStore::new(db.clone());
    progress_store.sign_in(user_id.clone());
    progress_store.refresh().await?;

    let goal = report::goal_progress(progress_store.progress());
    println!(
        "{}",
        report::format_weekly_summary(progress_store.progress(), &goal)
    );

    let days = report::daily_breakdown(&progress_store.progress().logged_plants, &Local::now());
    println!("{}", report::format_daily_breakdown(&days));

    let meals = meal::fetch_meals_with_plants(&db, &user_id).await?;
    if !meals.is_empty() {
        println!("Meals");
        for entry in &meals {
            println!(
                "  {} {} - {:.1} pts ({} plants)",
                entry.meal.emoji,
                entry.meal.name,
                entry.total_points,
                entry.plants.len()
            );
        }
    }

    Ok(())
}
