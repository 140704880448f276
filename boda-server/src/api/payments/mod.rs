//! Payment API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pagos", get(handler::list).post(handler::create))
        .route(
            "/api/pagos/regenerar-recibo",
            post(handler::regenerate_receipt),
        )
        .route("/api/recibos/{file_name}", get(handler::download_receipt))
}
