//! HTTP surface of IdeaBox.
//!
//! | Route | Method |
//! |---|---|
//! | `/api/ai/generate` | `POST` generate, `GET` model catalog |
//! | `/api/ai/title` | `POST` |
//! | `/api/ai/brand-name` | `POST` |
//! | `/api/ai/slogan` | `POST` |
//! | `/api/ai/creative-prompt` | `POST` |
//! | `/api/auth/password-strength` | `POST` |
//! | `/api/health` | `GET` |

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use ideabox_core::provider::TextGeneration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod envelope;
mod routes;


pub use config::ServerArgs;

/// Shared by every handler. The generator is built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGeneration>,
    pub environment: Arc<str>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGeneration>, environment: impl Into<Arc<str>>) -> Self {
        Self {
            generator,
            environment: environment.into(),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/ai/generate",
            post(routes::generate::generate).get(routes::generate::list_models),
        )
        .route("/api/ai/title", post(routes::tasks::title))
        .route("/api/ai/brand-name", post(routes::tasks::brand_name))
        .route("/api/ai/slogan", post(routes::tasks::slogan))
        .route("/api/ai/creative-prompt", post(routes::tasks::creative_prompt))
        .route(
            "/api/auth/password-strength",
            post(routes::password::password_strength),
        )
        .route("/api/health", get(routes::health::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = app_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "ideabox-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        })
        .await?;
    tracing::info!("ideabox-server stopped");
    Ok(())
}
