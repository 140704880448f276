//! Receipt rendering
//!
//! Formats a fixed-layout payment receipt from payment, guest, wedding and
//! hotel data and writes it to the receipts directory. The route serving
//! `/recibos` exposes the generated files for download; the response of the
//! payment endpoint only carries the file metadata.

mod builder;

pub use builder::ReceiptBuilder;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::db::models::{GuestWithBalance, Hotel, Payment, WeddingConfig};
use crate::utils::AppError;

/// Receipt page width in characters
const RECEIPT_WIDTH: usize = 72;

/// Metadata returned to the client after rendering
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptInfo {
    pub file_name: String,
    pub file_path: String,
    pub relative_path: String,
}

/// Renders receipts into a directory under the work dir
#[derive(Debug, Clone)]
pub struct ReceiptRenderer {
    dir: PathBuf,
}

impl ReceiptRenderer {
    /// Create the renderer, ensuring the output directory exists
    pub fn new(dir: PathBuf) -> Result<Self, AppError> {
        std::fs::create_dir_all(&dir)
            .map_err(|e| AppError::internal(format!("Failed to create receipts dir: {e}")))?;
        Ok(Self { dir })
    }

    /// Absolute path for a stored receipt file. Rejects names with path
    /// separators so the download route cannot escape the directory.
    pub fn receipt_path(&self, file_name: &str) -> Result<PathBuf, AppError> {
        if file_name.contains('/') || file_name.contains('\\') || file_name.contains("..") {
            return Err(AppError::not_found("Recibo no encontrado"));
        }
        Ok(self.dir.join(file_name))
    }

    /// Render the receipt for a payment and write it to disk
    pub async fn render(
        &self,
        pago: &Payment,
        invitado: &GuestWithBalance,
        config: Option<&WeddingConfig>,
        hotel: Option<&Hotel>,
    ) -> Result<ReceiptInfo, AppError> {
        let file_name = format!(
            "recibo_{}_{}.txt",
            invitado.nombre.replace(char::is_whitespace, "_"),
            chrono::Utc::now().timestamp_millis()
        );
        let path = self.dir.join(&file_name);

        let text = render_text(pago, invitado, config, hotel);

        tokio::fs::write(&path, text)
            .await
            .map_err(|e| AppError::internal(format!("Failed to write receipt: {e}")))?;

        tracing::info!(file = %file_name, pago_id = pago.id, "Receipt generated");

        Ok(ReceiptInfo {
            file_name: file_name.clone(),
            file_path: path.to_string_lossy().into_owned(),
            relative_path: format!("/recibos/{file_name}"),
        })
    }
}

fn format_money(value: f64) -> String {
    format!("${value:.2}")
}

fn render_text(
    pago: &Payment,
    invitado: &GuestWithBalance,
    config: Option<&WeddingConfig>,
    hotel: Option<&Hotel>,
) -> String {
    let mut b = ReceiptBuilder::new(RECEIPT_WIDTH);

    b.rule();
    b.center("RECIBO DE PAGO");
    b.center("Boda Suite");
    b.rule();

    if let Some(config) = config {
        b.section("INFORMACIÓN DE LA BODA");
        b.kv(
            "Novios",
            &format!("{} & {}", config.nombre_novio, config.nombre_novia),
        );
        b.kv("Fecha", &config.fecha_boda);
        b.kv("Hora", &config.hora_boda);
        b.kv("Lugar", &config.lugar_boda);
    }

    if let Some(hotel) = hotel {
        b.section("INFORMACIÓN DEL HOTEL");
        b.kv("Hotel", &hotel.nombre);
        b.kv("Dirección", &hotel.direccion);
        if !hotel.servicios_incluidos.is_empty() {
            b.kv("Servicios", &hotel.servicios_incluidos.join(", "));
        }
    }

    b.section("INFORMACIÓN DEL INVITADO");
    b.kv("Nombre", &invitado.nombre);
    b.kv("Contacto", &invitado.contacto);
    if let Some(habitacion) = &invitado.habitacion_nombre {
        b.kv("Habitación", habitacion);
    }

    b.section("DETALLES DEL PAGO");
    b.kv("Fecha de Pago", &pago.fecha_pago);
    b.kv("Método de Pago", &pago.metodo_pago);
    b.kv("Monto Pagado", &format_money(pago.monto));
    b.kv("Saldo Pendiente", &format_money(invitado.saldo_pendiente));

    b.section("RESUMEN FINANCIERO");
    b.kv(
        "Total a Pagar",
        &format_money(invitado.habitacion_precio.unwrap_or(0.0)),
    );
    b.kv("Total Pagado", &format_money(invitado.total_pagado));
    b.kv("Saldo Pendiente", &format_money(invitado.saldo_pendiente));

    b.blank();
    b.rule();
    b.center(&format!(
        "Recibo generado el {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    b.center("Este documento es un comprobante oficial de pago");

    b.build()
}
