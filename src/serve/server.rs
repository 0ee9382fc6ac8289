//! Connection loop for the demo service.

use std::convert::Infallible;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::serve::config::ServeConfig;
use crate::serve::error::ServeError;
use crate::serve::routes;

/// Bind the configured address and serve connections until the listener
/// fails or the task is dropped.
pub async fn run(config: ServeConfig) -> Result<(), ServeError> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "demo service listening");

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "accept failed");
                continue;
            }
        };

        let config = config.clone();
        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |request| {
                let response = routes::route(&request, &config);
                async move { Ok::<_, Infallible>(response) }
            });

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                tracing::debug!(peer = %peer, error = %e, "connection error");
            }
        });
    }
}
