use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    error::ApiError,
    routes::{
        create_booking, create_customer, create_dish, create_product, delete_customer, delete_dish,
        delete_product, diagnose_server, find_customers, health_check, list_customers, list_dishes,
        list_products, show_customer, show_dish, show_product, submit_order, update_booking,
        update_customer, update_dish, update_product
    },
    telemetry::spawn_blocking_with_tracing,
    utils::{build_pool, DbPool, PageSize}
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub struct Application{
    pub host: String,
    pub port: u16,
    pub pool: DbPool,
    pub server: Server
}

impl Application {
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = build_pool(&settings.database);
        run_migrations(pool.clone()).await?;

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))
            .context("Failed to bind address")?;
        let port = listener.local_addr()?.port();
        tracing::info!("Listening on {}:{}", settings.application.host, port);

        let server = run(listener, pool.clone(), PageSize(settings.application.page_size))?;

        Ok(Application{
            host: settings.application.host,
            port,
            pool,
            server
        })
    }
}

#[tracing::instrument("Running pending migrations", skip_all)]
async fn run_migrations(pool: DbPool) -> Result<(), anyhow::Error>{
    spawn_blocking_with_tracing(move || {
        let mut conn = pool.get().context("Failed to get connection to run migrations")?;

        let applied = conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!(e))
            .context("Failed to run migrations")?;
        tracing::info!("Migrations applied, count: {}", applied.len());

        Ok(())
    })
    .await
    .context("Failed due to threadpool error")?
}

fn run(listener: TcpListener, pool: DbPool, page_size: PageSize) -> Result<Server, anyhow::Error>{
    let pool = web::Data::new(pool);
    let page_size = web::Data::new(page_size);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, _req| ApiError::invalid("body", err.to_string()).into())
            )
            .app_data(pool.clone())
            .app_data(page_size.clone())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/customer")
                            .route("", web::get().to(list_customers))
                            .route("", web::post().to(create_customer))
                            .route("/findByName", web::post().to(find_customers))
                            .route("/{reference}", web::get().to(show_customer))
                            .route("/{reference}", web::patch().to(update_customer))
                            .route("/{reference}", web::delete().to(delete_customer))
                    )
                    .service(
                        web::scope("/dish")
                            .route("", web::get().to(list_dishes))
                            .route("", web::post().to(create_dish))
                            .route("/{reference}", web::get().to(show_dish))
                            .route("/{reference}", web::patch().to(update_dish))
                            .route("/{reference}", web::delete().to(delete_dish))
                    )
                    .service(
                        web::scope("/product")
                            .route("", web::get().to(list_products))
                            .route("", web::post().to(create_product))
                            .route("/{reference}", web::get().to(show_product))
                            .route("/{reference}", web::patch().to(update_product))
                            .route("/{reference}", web::delete().to(delete_product))
                    )
                    .service(
                        web::scope("/manager")
                            .route("/booking", web::post().to(create_booking))
                            .route("/booking/{reference}", web::patch().to(update_booking))
                            .route("/order/{reference}", web::post().to(submit_order))
                            .route("/diagnose", web::post().to(diagnose_server))
                    )
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
