pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    system::auth::jwt::initialize(&config.auth)?;

    // backend --issue-token <username>: напечатать токен и выйти
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|a| a == "--issue-token") {
        let username = args
            .get(pos + 1)
            .ok_or_else(|| anyhow::anyhow!("--issue-token requires a username"))?;
        if config.auth.jwt_secret.trim().is_empty() {
            tracing::warn!("auth.jwt_secret is empty: the token is valid only for this process");
        }
        println!("{}", system::initialization::issue_dev_token(username)?);
        return Ok(());
    }

    // Initialize database (path from config.toml)
    let db_path = shared::config::get_database_path(&config);
    shared::data::db::initialize_database(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    if config.seed.demo_data {
        system::initialization::seed_demo_data(shared::data::db::get_connection()).await?;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = routes::configure_routes(&config)
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr = config.server.bind_address();
    tracing::info!(
        "Attempting to bind server to http://{} (auth {})",
        addr,
        if config.auth.enabled { "enabled" } else { "disabled" }
    );
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: {} is already in use. Please ensure no other process is using this port.",
                    addr
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
