//! Attachment uploads: local file reads encoded as inline data URLs.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use entities::AttachmentFile;
use futures::future::try_join_all;

use crate::{StoreError, StoreResult};

/// Reads one file into a named attachment holding a base64 data URL.
pub async fn load_attachment(path: &Path) -> StoreResult<AttachmentFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        StoreError::Attachment {
            name: name.clone(),
            source,
        }
    })?;
    let url = format!("data:{};base64,{}", mime_for(&name), STANDARD.encode(&bytes));
    Ok(AttachmentFile { name, url })
}

/// Reads every file concurrently and collects the attachments in input
/// order.
///
/// The reads are independent; the fan-in waits for all of them, and any
/// single failed read fails the whole batch. No partial result is ever
/// returned.
pub async fn load_attachments(paths: &[PathBuf]) -> StoreResult<Vec<AttachmentFile>> {
    try_join_all(paths.iter().map(|path| load_attachment(path))).await
}

fn mime_for(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
