//! Gzip-compressed JSON responses for the read endpoints.
//!
//! Read handlers return [`GzipJson`] instead of `axum::Json`: the payload is
//! serialized, compressed and sent with `Content-Encoding: gzip` regardless
//! of the request's `Accept-Encoding`, which the journal pages rely on.

use std::io::Write;

use axum::http::header::{CONTENT_ENCODING, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;

use crate::error::AppError;

/// A `200 OK` JSON body, gzip-compressed.
///
/// # Example
///
/// ```ignore
/// Ok(GzipJson(concerts))
/// ```
#[derive(Debug)]
pub struct GzipJson<T>(pub T);

impl<T: Serialize> IntoResponse for GzipJson<T> {
    fn into_response(self) -> Response {
        match gzip_json(&self.0) {
            Ok(body) => (
                [
                    (CONTENT_TYPE, HeaderValue::from_static("application/json")),
                    (CONTENT_ENCODING, HeaderValue::from_static("gzip")),
                ],
                body,
            )
                .into_response(),
            Err(e) => {
                AppError::InternalError(format!("Failed to encode response: {e}")).into_response()
            }
        }
    }
}

/// Serialize `value` as JSON and gzip the bytes.
pub fn gzip_json<T: Serialize>(value: &T) -> std::io::Result<Vec<u8>> {
    let json = serde_json::to_vec(value)?;
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use axum::http::StatusCode;
    use flate2::read::GzDecoder;

    use super::*;

    fn gunzip(bytes: &[u8]) -> String {
        let mut out = String::new();
        GzDecoder::new(bytes).read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn compressed_bytes_decode_to_json() {
        let body = gzip_json(&vec!["a", "b"]).unwrap();
        assert_eq!(&body[..2], &[0x1f, 0x8b], "gzip magic header");
        assert_eq!(gunzip(&body), r#"["a","b"]"#);
    }

    #[test]
    fn empty_list_is_still_an_array() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(gunzip(&gzip_json(&empty).unwrap()), "[]");
    }

    #[test]
    fn response_sets_encoding_headers() {
        let response = GzipJson(vec![1, 2, 3]).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_ENCODING], "gzip");
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }
}
