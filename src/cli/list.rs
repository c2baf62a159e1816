use crate::api::routes::events::db::find_all_events;
use crate::core::db::async_db;
use anyhow::Result;
use serde_json::json;

pub async fn run(db_path: &str) -> Result<()> {
    let db = async_db(db_path)
        .await
        .expect("Failed to connect to async db");
    let events = find_all_events(&db).await?;
    println!("{}", json!(events));
    Ok(())
}
