//! Restaurant point-of-sale backend.
//!
//! JSON web API behind the manager dashboard: inventory tracking, menu item
//! management, transaction recording, and server-side meal validation.
//!
//!
//!
//! # API
//!
//! Uniform CRUD surface across `inventory`, `menu`, and `transactions`:
//!
//! - `GET /api/{resource}` lists every record, `?id=` fetches one (404 if
//!   unknown, 400 if not numeric)
//! - `POST /api/{resource}` creates from a JSON body (201 for menu, 200
//!   otherwise; missing required fields are 400)
//! - `PUT /api/{resource}` takes `{id, ...fields}`, absent fields keep their
//!   stored values (404 if unknown)
//! - `DELETE /api/{resource}?id=` removes one record (400 for a bad id, 404
//!   when nothing was deleted)
//!
//! `POST /api/meals/validate` replays a pick sequence through the meal
//! rules and reports slots, progress, completion, and price.
//!
//!
//!
//! # Environment
//!
//! - `POS_PORT`: listen port, default 3000
//! - `DATABASE_URL`: SQLite url, default `sqlite://pos.db?mode=rwc`
//! - `CORS_ORIGIN`: dashboard origin, default `http://localhost:5173`
//! - `RUST_LOG`: tracing filter, e.g. `pos=debug,tower_http=info`
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use routes::{inventory, meals, menu, transactions};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("CORS origin misconfigured!"),
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route(
            "/api/inventory",
            get(inventory::get_handler)
                .post(inventory::create_handler)
                .put(inventory::update_handler)
                .delete(inventory::delete_handler),
        )
        .route(
            "/api/menu",
            get(menu::get_handler)
                .post(menu::create_handler)
                .put(menu::update_handler)
                .delete(menu::delete_handler),
        )
        .route(
            "/api/transactions",
            get(transactions::get_handler)
                .post(transactions::create_handler)
                .put(transactions::update_handler)
                .delete(transactions::delete_handler),
        )
        .route("/api/meals/validate", post(meals::validate_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
