//! Cover Image Upload Handler
//!
//! Accepts a multipart upload of the wedding cover image, validates it is a
//! real image and stores it under the uploads directory. The stored path is
//! later referenced by the wedding configuration (`imagen_portada`).

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    pub message: String,
}

/// Validate the upload is a parseable image within the size cap
fn validate_image(data: &[u8]) -> Result<(), AppError> {
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::validation(
            "La imagen supera el tamaño máximo de 5MB",
        ));
    }

    if image::load_from_memory(data).is_err() {
        return Err(AppError::validation("Solo se permiten archivos de imagen"));
    }

    Ok(())
}

/// POST /api/upload-portada - store the cover image
pub async fn upload_portada(
    State(state): State<ServerState>,
    _user: CurrentUser,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let uploads_dir = state.uploads_dir();
    std::fs::create_dir_all(&uploads_dir)
        .map_err(|e| AppError::internal(format!("Failed to create uploads dir: {e}")))?;

    let mut field_data: Option<Vec<u8>> = None;
    let mut original_filename: Option<String> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("imagen") {
            original_filename = field.file_name().map(|s| s.to_string());
            content_type = field.content_type().map(|s| s.to_string());
            field_data = Some(field.bytes().await?.to_vec());
            break;
        }
    }

    let data = field_data
        .ok_or_else(|| AppError::validation("No se ha subido ningún archivo"))?;

    if data.is_empty() {
        return Err(AppError::validation("No se ha subido ningún archivo"));
    }

    if let Some(ct) = &content_type
        && !ct.starts_with("image/")
    {
        return Err(AppError::validation("Solo se permiten archivos de imagen"));
    }

    validate_image(&data)?;

    let ext = original_filename
        .as_deref()
        .and_then(|name| PathBuf::from(name).extension().map(|e| e.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "jpg".to_string());

    let file_name = format!("portada-{}.{}", Uuid::new_v4(), ext);
    let file_path = uploads_dir.join(&file_name);

    tokio::fs::write(&file_path, &data)
        .await
        .map_err(|e| AppError::internal(format!("Failed to save file: {e}")))?;

    tracing::info!(
        file = %file_name,
        size = data.len(),
        "Cover image uploaded"
    );

    Ok(Json(UploadResponse {
        success: true,
        file_name: file_name.clone(),
        file_path: format!("/uploads/{file_name}"),
        message: "Imagen subida exitosamente".to_string(),
    }))
}
