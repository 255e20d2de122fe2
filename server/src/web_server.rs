use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use snake_engine::{Direction, GameSnapshot, SnakeGame, log, log_warn};

use crate::server_config::ArenaConfig;
use crate::shutdown::ShutdownSignal;
use crate::sse_handler::updates_handler;

#[derive(Clone)]
pub struct WebServerState {
    pub game: SnakeGame,
    pub arena: ArenaConfig,
    pub shutdown: ShutdownSignal,
}

pub fn build_router(state: WebServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/state", get(state_handler))
        .route("/updates", get(updates_handler))
        .route("/reset", post(reset_handler))
        .route("/inputs/{direction}", post(input_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server(state: WebServerState, listen_address: &str) -> std::io::Result<()> {
    let shutdown = state.shutdown.clone();
    let app = build_router(state);

    let listener = TcpListener::bind(listen_address).await?;
    log!("Web server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.wait())
        .await?;

    log!("Web server stopped");
    Ok(())
}

async fn state_handler(State(state): State<WebServerState>) -> Json<GameSnapshot> {
    Json(state.game.snapshot().await)
}

async fn reset_handler(State(state): State<WebServerState>) -> StatusCode {
    let arena = state.arena;
    state
        .game
        .restart(arena.width, arena.height, arena.food_count)
        .await;
    StatusCode::NO_CONTENT
}

async fn input_handler(
    State(state): State<WebServerState>,
    Path(direction): Path<String>,
) -> Response {
    match direction.parse::<Direction>() {
        Ok(direction) => {
            state.game.set_direction(direction).await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            log_warn!("Rejected input: {}", e);
            (StatusCode::BAD_REQUEST, "Invalid direction").into_response()
        }
    }
}
