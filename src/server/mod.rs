//! HTTP server

use anyhow::Result;
use axum::{
    extract::{OriginalUri, State},
    handler::Handler,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::panic_message;
use crate::routes::Route;
use crate::views::RenderContext;
use crate::{RenderedPage, Site, FALLBACK_ERROR_HTML};

/// Source of the current time for a request
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Server state
#[derive(Clone)]
struct ServerState {
    site: Site,
    clock: Clock,
}

/// Build the application router
pub fn router(site: Site, clock: Clock) -> Router {
    let static_files = ServeDir::new(&site.public_dir);
    let state = ServerState { site, clock };
    let missing_static = not_found_handler.with_state(state.clone());

    Router::new()
        .route("/", get(page_handler))
        .route("/about", get(page_handler))
        .route("/blog", get(page_handler))
        .route("/blog/:slug", get(page_handler))
        .nest_service("/static", static_files.not_found_service(missing_static))
        .fallback(page_handler)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = router(site.clone(), Arc::new(Utc::now));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Route and render any page request
async fn page_handler(
    State(state): State<ServerState>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let page = state.site.respond(uri.path(), (state.clock)()).await;
    into_response(page)
}

/// Not-found page for paths no route or static file answers
async fn not_found_handler(
    State(state): State<ServerState>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let ctx = RenderContext::new(uri.path(), (state.clock)());
    let page = state.site.respond_route(Route::NotFound, ctx).await;
    into_response(page)
}

fn into_response(page: RenderedPage) -> Response {
    (page.status, Html(page.html)).into_response()
}

/// Last-resort answer for a panic outside the page pipeline
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked: {}", panic_message(err.as_ref()));

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        FALLBACK_ERROR_HTML,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_panic_hides_detail() {
        let response = handle_panic(Box::new("secret database password".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
