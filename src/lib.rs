pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

pub use config::Config;
pub use db::connect;
pub use infrastructure::catalog::CatalogStore;
pub use infrastructure::memory::InMemoryOrderRepository;
pub use infrastructure::order_repo::MongoOrderRepository;
pub use schema::{build_schema, schema_sdl, AppSchema};

pub const GRAPHQL_PATH: &str = "/graphql";

/// Register the GraphQL endpoint. Expects the `AppSchema` as app data.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(GRAPHQL_PATH)
            .route(web::post().to(handlers::graphql::graphql))
            .route(web::get().to(handlers::graphql::graphiql)),
    );
}

/// Any origin is echoed back and credentials are allowed.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or spawning) the returned
/// server.
pub fn build_server(
    schema: AppSchema,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(schema.clone()))
            .wrap(cors())
            .wrap(Logger::default())
            .configure(routes)
    })
    .bind((host.to_string(), port))?
    .run())
}
