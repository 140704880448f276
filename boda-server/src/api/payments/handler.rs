//! Payment Handlers
//!
//! Recording a payment chains: insert → audit → reconcile → receipt →
//! respond. The payment row is committed before the receipt renders; a
//! receipt failure aborts the response but never rolls the payment back.

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::audit::AuditAction;
use crate::auth::CurrentUser;
use crate::billing::Reconciler;
use crate::core::ServerState;
use crate::db::models::{GuestWithBalance, Hotel, Payment, PaymentCreate, PaymentWithGuest, WeddingConfig};
use crate::db::repository::{
    GuestRepository, HotelRepository, PaymentRepository, WeddingConfigRepository,
};
use crate::receipt::ReceiptInfo;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct RegenerateReceiptRequest {
    #[serde(rename = "pagoId")]
    pub pago_id: i64,
}

/// GET /api/pagos - all payments with guest name and live pending balance
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PaymentWithGuest>>> {
    let repo = PaymentRepository::new(state.pool.clone());
    Ok(Json(repo.list_all_with_guests().await?))
}

/// POST /api/pagos - record a payment
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<Json<Value>> {
    if payload.monto <= 0.0 {
        return Err(AppError::validation("El monto debe ser mayor a cero"));
    }

    let guests = GuestRepository::new(state.pool.clone());
    let payments = PaymentRepository::new(state.pool.clone());
    let reconciler = Reconciler::new(state.pool.clone());

    let guest = guests
        .find_by_id(payload.invitado_id)
        .await?
        .ok_or_else(|| AppError::not_found("Invitado no encontrado"))?;

    // Snapshot of the balance that will remain once this payment lands
    let saldo_snapshot = reconciler
        .snapshot_after_payment(payload.invitado_id, payload.monto)
        .await?;

    let id = payments.create(&payload, saldo_snapshot).await?;

    state.audit.record(
        "pagos",
        AuditAction::Create,
        format!(
            "Pago registrado para {} - Monto: ${} - Método: {}",
            guest.nombre, payload.monto, payload.metodo_pago
        ),
        &user,
    );

    // Persist the recomputed status; the payment row above is already
    // committed, so a failure past this point surfaces as an error without
    // undoing it.
    reconciler.reconcile(payload.invitado_id).await?;

    let pago = Payment {
        id,
        invitado_id: payload.invitado_id,
        monto: payload.monto,
        metodo_pago: payload.metodo_pago,
        fecha_pago: payload.fecha_pago,
        saldo_pendiente: saldo_snapshot,
    };

    let recibo = render_receipt(&state, &pago).await?;

    Ok(Json(json!({ "id": id, "recibo": recibo })))
}

/// POST /api/pagos/regenerar-recibo - re-render the receipt for a payment
pub async fn regenerate_receipt(
    State(state): State<ServerState>,
    Json(req): Json<RegenerateReceiptRequest>,
) -> AppResult<Json<Value>> {
    let payments = PaymentRepository::new(state.pool.clone());
    let pago = payments
        .find_by_id(req.pago_id)
        .await?
        .ok_or_else(|| AppError::not_found("Pago no encontrado"))?;

    // Single-payment reads still re-aggregate the guest before rendering
    Reconciler::new(state.pool.clone())
        .reconcile(pago.invitado_id)
        .await?;

    let recibo = render_receipt(&state, &pago).await?;
    Ok(Json(json!({ "recibo": recibo })))
}

/// GET /api/recibos/{file_name} - download a generated receipt
pub async fn download_receipt(
    State(state): State<ServerState>,
    Path(file_name): Path<String>,
) -> AppResult<Response> {
    let path = state.receipts.receipt_path(&file_name)?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::not_found("Recibo no encontrado"))?;

    let content_type = mime_guess::from_path(&path)
        .first_or_octet_stream()
        .to_string();

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// Gather the joined data a receipt needs and render it
async fn render_receipt(state: &ServerState, pago: &Payment) -> AppResult<ReceiptInfo> {
    let guests = GuestRepository::new(state.pool.clone());

    let invitado: GuestWithBalance = guests
        .find_with_balance(pago.invitado_id)
        .await?
        .ok_or_else(|| AppError::not_found("Invitado no encontrado"))?;

    let config: Option<WeddingConfig> = WeddingConfigRepository::new(state.pool.clone())
        .current()
        .await?;
    let hotel: Option<Hotel> = HotelRepository::new(state.pool.clone()).current().await?;

    state
        .receipts
        .render(pago, &invitado, config.as_ref(), hotel.as_ref())
        .await
}
