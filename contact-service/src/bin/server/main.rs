use std::sync::Arc;

use auth::Authenticator;
use auth::TokenIssuer;
use contact_service::config::Config;
use contact_service::domain::address::service::AddressService;
use contact_service::domain::auth::service::AuthService;
use contact_service::domain::contact::service::ContactService;
use contact_service::domain::user::service::UserService;
use contact_service::inbound::http::router::create_router;
use contact_service::outbound::repositories::PostgresAddressRepository;
use contact_service::outbound::repositories::PostgresContactRepository;
use contact_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "contact-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        token_ttl_days = config.session.token_ttl_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_issuer = TokenIssuer::with_ttl_days(config.session.token_ttl_days)?;
    let authenticator = Arc::new(Authenticator::new(token_issuer));
    tracing::info!(
        token_ttl_ms = authenticator.token_ttl_millis(),
        "Session token issuer configured"
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let contact_repository = Arc::new(PostgresContactRepository::new(pg_pool.clone()));
    let address_repository = Arc::new(PostgresAddressRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
    let auth_service = Arc::new(AuthService::new(user_repository, authenticator));
    let contact_service = Arc::new(ContactService::new(Arc::clone(&contact_repository)));
    let address_service = Arc::new(AddressService::new(
        contact_repository,
        address_repository,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application =
        create_router(user_service, auth_service, contact_service, address_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
