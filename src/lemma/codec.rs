//! Decompression of gzip dictionary assets.

use std::io::Read;

use flate2::read::GzDecoder;
use log::trace;

use super::error::{LemmaError, Result};

/// Magic bytes opening every gzip member (RFC 1952).
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Inflates a gzip-compressed dictionary asset into UTF-8 text.
///
/// The container magic is checked before inflating, so a blob that was never
/// gzip fails with a distinct reason instead of a generic inflate error.
/// `path` is the asset's virtual path, used only for error context.
///
/// # Errors
/// Returns [`LemmaError::AssetCorrupt`] if:
/// - The gzip magic is missing
/// - Inflation fails (truncated or bit-flipped stream)
/// - The inflated bytes are not valid UTF-8
pub fn decompress(path: &str, bytes: &[u8]) -> Result<String> {
    if bytes.len() < GZIP_MAGIC.len() || bytes[..2] != GZIP_MAGIC {
        return Err(LemmaError::AssetCorrupt {
            path: path.to_string(),
            reason: "not a gzip stream (bad magic)".to_string(),
        });
    }

    trace!("Inflating {} ({} compressed bytes)", path, bytes.len());
    let mut decoder = GzDecoder::new(bytes);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(|e| LemmaError::AssetCorrupt {
            path: path.to_string(),
            reason: format!("inflate failed: {}", e),
        })?;
    trace!("Inflated {}: {} bytes of text", path, inflated.len());

    String::from_utf8(inflated).map_err(|e| LemmaError::AssetCorrupt {
        path: path.to_string(),
        reason: format!("not UTF-8 text: {}", e),
    })
}
