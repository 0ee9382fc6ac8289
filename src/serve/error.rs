use thiserror::Error;

/// Errors from the demo service glue. The cookie and user-agent core is
/// infallible; only binding and serving can fail.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("invalid listen address {addr}: {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
