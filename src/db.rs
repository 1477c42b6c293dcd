use mongodb::bson::doc;
use mongodb::error::Result;
use mongodb::{Client, Database};

/// Open a client for `uri` and confirm the server answers before returning
/// a handle to `database`.
pub async fn connect(uri: &str, database: &str) -> Result<Database> {
    let client = Client::with_uri_str(uri).await?;
    let db = client.database(database);
    db.run_command(doc! { "ping": 1 }).await?;
    log::info!("Successfully connected to database: {}", db.name());
    Ok(db)
}
