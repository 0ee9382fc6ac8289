use cookienet::serve::config::ServeConfig;
use cookienet::serve::error::ServeError;
use cookienet::serve::server;

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    tracing_subscriber::fmt::init();

    server::run(ServeConfig::from_env()).await
}
