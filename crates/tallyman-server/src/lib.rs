//! Server assembly for Tallyman: runtime configuration plus the traced
//! application router. The binary in `main.rs` wires these to a TCP
//! listener.

use std::{path::PathBuf, sync::Arc};

use axum::Router;
use serde::Deserialize;
use tallyman_core::store::DebtorStore;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` with an
/// environment overlay (prefix `TALLYMAN`).
///
/// Every field has a default so the server starts with no configuration
/// file at all: bind `127.0.0.1:5000`, store file in the working directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".into(),
      port:       5000,
      store_path: PathBuf::from("tallyman.sqlite"),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application router: the JSON API wrapped in per-request
/// tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: DebtorStore + 'static,
{
  tallyman_api::api_router(store).layer(TraceLayer::new_for_http())
}
