//! HTTP server over the live content store
//!
//! Every request re-reads the content directory, so edits show up without a
//! restart. Store queries are blocking file reads and run on the blocking
//! thread pool.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::{ContentError, ContentStore, Post};
use crate::templates::TemplateRenderer;
use crate::Folio;

/// Server state
struct ServerState {
    store: ContentStore,
    renderer: TemplateRenderer,
}

/// Build the application router
pub fn router(folio: &Folio) -> Router {
    let state = Arc::new(ServerState {
        store: folio.store(),
        renderer: TemplateRenderer::new(folio.config.clone()),
    });

    Router::new()
        .route("/", get(|| async { Redirect::to("/blog/") }))
        .route("/blog", get(blog_index))
        .route("/blog/", get(blog_index))
        .route("/blog/:slug", get(blog_post))
        .route("/blog/:slug/", get(blog_post))
        .route("/api/posts", get(api_posts))
        .route("/api/posts/:slug", get(api_post))
        .fallback_service(ServeDir::new(&folio.public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server; the content directory is seeded before binding
pub async fn start(folio: &Folio, ip: &str, port: u16, open: bool) -> Result<()> {
    folio.ensure_seeded()?;

    let app = router(folio);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}/blog/", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run a store query off the async runtime
async fn query<T, F>(state: &Arc<ServerState>, f: F) -> Result<T, ContentError>
where
    T: Send + 'static,
    F: FnOnce(&ContentStore) -> Result<T, ContentError> + Send + 'static,
{
    let store = state.store.clone();
    match tokio::task::spawn_blocking(move || f(&store)).await {
        Ok(result) => result,
        Err(e) => Err(ContentError::io(
            store_dir(state),
            std::io::Error::new(std::io::ErrorKind::Other, e),
        )),
    }
}

fn store_dir(state: &ServerState) -> std::path::PathBuf {
    state.store.dir().to_path_buf()
}

fn server_error(state: &ServerState, err: &ContentError) -> Response {
    tracing::error!("Content query failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(state.renderer.error_page()),
    )
        .into_response()
}

async fn blog_index(State(state): State<Arc<ServerState>>) -> Response {
    match query(&state, |store| store.list_all()).await {
        Ok(posts) => Html(state.renderer.blog_index(&posts)).into_response(),
        Err(e) => server_error(&state, &e),
    }
}

async fn blog_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    match query(&state, move |store| store.get_by_slug(&slug)).await {
        Ok(Some(post)) => Html(state.renderer.post_page(&post)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Html(state.renderer.not_found())).into_response(),
        Err(e) => server_error(&state, &e),
    }
}

async fn api_posts(State(state): State<Arc<ServerState>>) -> Response {
    match query(&state, |store| store.list_all()).await {
        Ok(posts) => Json(posts).into_response(),
        Err(e) => api_error(&e),
    }
}

async fn api_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    let result: Result<Option<Post>, ContentError> =
        query(&state, move |store| store.get_by_slug(&slug)).await;
    match result {
        Ok(Some(post)) => Json(post).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "not found" })),
        )
            .into_response(),
        Err(e) => api_error(&e),
    }
}

fn api_error(err: &ContentError) -> Response {
    tracing::error!("Content query failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "internal error" })),
    )
        .into_response()
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
