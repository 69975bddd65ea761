use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use taskpad::auth::{IdentityResolver, UsernameResolver};
use taskpad::config::Config;
use taskpad::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // The storage handle is owned here: opened before the server starts,
    // closed after it stops. Startup failures are fatal.
    let pool = db::connect(&config.database_url)
        .await
        .expect("failed to open task database");
    db::init_schema(&pool)
        .await
        .expect("failed to initialize database schema");

    let resolver: Arc<dyn IdentityResolver> = Arc::new(UsernameResolver::new(pool.clone()));

    let pool_data = web::Data::new(pool.clone());
    let resolver_data: web::Data<dyn IdentityResolver> = web::Data::from(resolver);

    log::info!("starting taskpad server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .app_data(resolver_data.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(web::scope("/api").configure(routes::config))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await?;

    pool.close().await;
    Ok(())
}
