//! Self-signed certificate provisioning for `PROTOCOL=https`.

use std::path::{Path, PathBuf};

/// Subject alternative names of a generated certificate.
const SELF_SIGNED_NAMES: [&str; 2] = ["localhost", "127.0.0.1"];

#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("Failed to generate self-signed certificate: {0}")]
    Generate(#[from] rcgen::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Make sure a PEM certificate and key exist at the given paths.
///
/// Existing material is left untouched. If either file is missing, a new
/// self-signed pair for `localhost`/`127.0.0.1` replaces both. Returns
/// whether a certificate was generated.
pub async fn ensure_self_signed_certificate(
    cert_path: &Path,
    key_path: &Path,
) -> Result<bool, TlsError> {
    if cert_path.exists() && key_path.exists() {
        tracing::debug!(cert = %cert_path.display(), "Using existing TLS certificate");
        return Ok(false);
    }

    tracing::info!(cert = %cert_path.display(), "Generating self-signed TLS certificate");

    let names: Vec<String> = SELF_SIGNED_NAMES.iter().map(|n| n.to_string()).collect();
    let certified = rcgen::generate_simple_self_signed(names)?;

    write_pem(cert_path, certified.cert.pem()).await?;
    write_pem(key_path, certified.key_pair.serialize_pem()).await?;

    Ok(true)
}

async fn write_pem(path: &Path, pem: String) -> Result<(), TlsError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| TlsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    tokio::fs::write(path, pem)
        .await
        .map_err(|source| TlsError::Write {
            path: path.to_path_buf(),
            source,
        })
}
