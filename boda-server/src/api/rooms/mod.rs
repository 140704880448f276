//! Room API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/habitaciones",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/habitaciones/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
}
