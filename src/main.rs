// --- gradeshift: academic planning API ---

use gradeshift::config::{load_dotenv, ServerConfig};
use gradeshift::run_server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // .env first so RUST_LOG from it is honored
    load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gradeshift=info,actix_web=info")))
        .init();

    let config = ServerConfig::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    tracing::info!("planner API listening on http://{}", config.bind);
    run_server(config).await
}
