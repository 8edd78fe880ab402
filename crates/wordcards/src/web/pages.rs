//! The flashcard page and its static assets, compiled into the binary.

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};

use super::AppState;

/// URL prefix under which CSS and JS are served.
pub const STATIC_PREFIX: &str = "/static";

/// Placeholder in the page template replaced by [`STATIC_PREFIX`].
const STATIC_PLACEHOLDER: &str = "{{static}}";

const INDEX_TEMPLATE: &str = include_str!("../../assets/index.html");
const STYLE_CSS: &str = include_str!("../../assets/css/style.css");
const APP_JS: &str = include_str!("../../assets/js/app.js");

/// Render the page shell with asset URLs rooted at `static_prefix`.
pub(super) fn render_index(static_prefix: &str) -> String {
    INDEX_TEMPLATE.replace(STATIC_PLACEHOLDER, static_prefix)
}

pub(super) async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_html.to_string())
}

pub(super) async fn style() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

pub(super) async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        APP_JS,
    )
}
