use std::sync::Arc;

use dotenvy::dotenv;
use storefront_api::{
    build_schema, build_server, connect, CatalogStore, Config, MongoOrderRepository, GRAPHQL_PATH,
};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env()?;
    let db = connect(&config.mongodb_uri, &config.database).await?;
    let repo = Arc::new(MongoOrderRepository::new(&db, &config.orders_collection));
    let schema = build_schema(CatalogStore::seeded(), repo);

    log::info!(
        "Server ready at http://{}:{}{}",
        config.host,
        config.port,
        GRAPHQL_PATH
    );

    build_server(schema, &config.host, config.port)?.await?;
    Ok(())
}
