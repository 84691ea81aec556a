//! Start the catalog server: load the catalog, bind, serve until Ctrl-C.

use crate::config::Config;
use crate::observer::TracingObserver;
use crate::routes::build_router;
use crate::state::AppState;
use anyhow::{Context, Result};
use shopfront::CatalogStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Load the configured seed file, or the built-in sample when none is set.
pub fn load_catalog(config: &Config) -> Result<CatalogStore> {
    match &config.catalog {
        Some(path) => {
            let store = CatalogStore::from_json_file(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?;
            info!(path = %path.display(), products = store.len(), "catalog loaded from file");
            Ok(store)
        }
        None => {
            let store = CatalogStore::seeded().context("built-in catalog sample is invalid")?;
            info!(products = store.len(), "catalog loaded from built-in sample");
            Ok(store)
        }
    }
}

/// Run the server with the given configuration. Logging must already be
/// initialized.
pub async fn run(config: Config) -> Result<()> {
    info!("starting Shopfront v{}", env!("CARGO_PKG_VERSION"));

    let store = load_catalog(&config)?;
    let state = AppState::new(store, Arc::new(TracingObserver));
    let app = build_router(state, &config.allowed_origins());

    let address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(address = %address, "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server terminated unexpectedly")?;

    info!("Shopfront stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("received shutdown signal");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_load_catalog_default_sample() {
        let config = Config::parse_from(["shopfront"]);
        let config = Config {
            catalog: None,
            ..config
        };
        assert_eq!(load_catalog(&config).unwrap().len(), 12);
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Rain Jacket", "price": 120.0, "description": "",
                 "category": "outerwear", "gender": "women", "image": "", "inStock": true}}]"#
        )
        .unwrap();
        let config = Config::parse_from(["shopfront", "--catalog", file.path().to_str().unwrap()]);
        let store = load_catalog(&config).unwrap();
        assert_eq!(store.all()[0].name, "Rain Jacket");
    }

    #[test]
    fn test_load_catalog_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let config = Config::parse_from(["shopfront", "--catalog", missing.to_str().unwrap()]);
        let err = load_catalog(&config).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load catalog"));
    }
}
