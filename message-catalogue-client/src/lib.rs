//! # message-catalogue-client
//!
//! Persistence client for a message catalogue endpoint. Each operation is one
//! form-encoded HTTP POST against the host page's base path:
//!
//! | Operation | Path suffix | Fields sent |
//! |-----------|-------------|-------------|
//! | `save` | `/admin/catalogue/message/save` | `message-key`, `message-value`, `message-catalogue` |
//! | `add` | `/admin/catalogue/message/add` | `message-key`, `message-value`, `message-catalogue` |
//! | `remove` | `/admin/catalogue/message/remove` | `message-key`, `message-catalogue` |
//!
//! Any 2xx response is success. Response bodies are never interpreted.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use message_catalogue_client::{create_client, CatalogueClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://repo.example.org/xmlui", "6F1ED002AB5595859014EBF0951522D9");
//!     let client = create_client(config)?;
//!
//!     client.add("jsp.layout.header", "Welcome to <i>the repository</i>").await?;
//!     client.save("jsp.layout.header", "Welcome").await?;
//!     client.remove("jsp.layout.header").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<(), ClientError>`](ClientError):
//!
//! - [`ClientError::HttpStatus`]: the endpoint answered with a non-2xx status
//! - [`ClientError::NetworkError`] / [`ClientError::Timeout`]: transport failure
//! - [`ClientError::InvalidConfig`]: the client could not be built
//!
//! Transient failures are retried with exponential backoff when
//! [`ClientConfig::max_retries`] is non-zero.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ClientError, Result};

// Re-export factory function
pub use factory::create_client;

pub use traits::CatalogueClient;

pub use types::{
    ClientConfig, DEFAULT_CONNECT_TIMEOUT_SECS, MessageForm, MessageOperation, RemoveMessageForm,
};

pub use providers::HttpCatalogueClient;

pub use utils::log_sanitizer::summarize_for_log;
