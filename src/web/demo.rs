//! Greeting and URL-building pages kept from the tutorial.

use axum::{extract::Path, response::Html};
use tracing::info;

use super::urls;

/// GET /user/{name}
pub async fn user_page(Path(name): Path<String>) -> Html<String> {
    Html(format!("<h1>Hello {}!</h1>", html_escape::encode_text(&name)))
}

/// GET /test
pub async fn test_url_for() -> &'static str {
    info!("{}", urls::index());
    info!("{}", urls::user_page("greyli"));
    info!("{}", urls::user_page("peter"));
    info!("{}", urls::test_url_for(&[]));
    info!("{}", urls::test_url_for(&[("num", "2")]));
    "Test page"
}
