//! HTTP surface for wordcards.
//!
//! `/api/*` exposes the word service as JSON, everything else serves the
//! flashcard page and its embedded assets.

mod api;
mod pages;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::{Error, Result};
use crate::service::WordService;

pub use api::ApiError;
pub use pages::STATIC_PREFIX;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    service: WordService,
    download_name: Arc<str>,
    index_html: Arc<str>,
}

impl AppState {
    /// Build the state for a service.
    ///
    /// `download_name` is the file name suggested to browsers by the
    /// download route. The page template is rendered once here.
    pub fn new(service: WordService, download_name: impl Into<String>) -> Self {
        Self {
            service,
            download_name: Arc::from(download_name.into()),
            index_html: Arc::from(pages::render_index(STATIC_PREFIX)),
        }
    }

    /// The word service behind the API.
    #[must_use]
    pub fn service(&self) -> &WordService {
        &self.service
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/words", get(api::list_words).post(api::add_word))
        .route(
            "/api/words/{index}",
            delete(api::delete_word).put(api::update_word),
        )
        .route("/api/download", get(api::download_words))
        .route("/", get(pages::index))
        .route(&format!("{STATIC_PREFIX}/css/style.css"), get(pages::style))
        .route(&format!("{STATIC_PREFIX}/js/app.js"), get(pages::script))
        .with_state(state)
}

/// Bind a TCP listener.
///
/// # Errors
///
/// Returns [`Error::Bind`] if the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|source| Error::Bind {
        addr: addr.to_string(),
        source,
    })
}

/// Serve the application until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("Listening on http://{addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}
