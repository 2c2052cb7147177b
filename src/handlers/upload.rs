//! Photo upload handler

use base64::{engine::general_purpose::STANDARD, Engine as _};
use lambda_runtime::{Error, LambdaEvent};
use tracing::{info, instrument, warn};

use crate::{
    media_storage::MediaStorage,
    types::{InvocationEvent, ObjectKey, UploadResponse},
};

/// Handles one upload invocation
///
/// Decodes the base64 request body, stores it as a publicly readable
/// JPEG object under a fresh UUID key and returns the object's public
/// URL. Invalid base64 yields a 400 response before any storage call;
/// storage failures propagate to the runtime as function errors.
///
/// # Errors
///
/// Returns an error when the S3 upload fails
#[instrument(skip(event, storage))]
pub async fn upload_photo(
    event: LambdaEvent<InvocationEvent>,
    storage: &MediaStorage,
) -> Result<UploadResponse, Error> {
    let bytes = match STANDARD.decode(&event.payload.body) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Request body is not valid base64: {e}");
            return Ok(UploadResponse::client_error(
                "invalid_base64",
                "Request body is not valid base64",
            ));
        }
    };

    let key = ObjectKey::generate();
    info!("Uploading {} bytes under key {key}", bytes.len());

    storage.upload_photo(&key, bytes).await?;

    let file_url = storage.public_url(&key);
    info!("Upload complete: {file_url}");

    Ok(UploadResponse::success(&file_url))
}
