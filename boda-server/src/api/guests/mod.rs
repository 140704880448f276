//! Guest API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/invitados", get(handler::list).post(handler::create))
        .route(
            "/api/invitados/{id}",
            put(handler::update).delete(handler::delete),
        )
        .route("/api/invitados/{id}/pagos", get(handler::payments))
}
