//! Chunked transfer-encoding reassembly.

use crate::error_handling::DecodeError;

/// Reassembles a chunked body into contiguous bytes.
///
/// Reads `<hex size>[;ext]` lines followed by that many bytes until a zero
/// size chunk. The trailer section after the last chunk is ignored. A body
/// that ends early (no zero chunk, or a short final chunk) yields whatever was
/// received.
///
/// # Errors
///
/// `DecodeError::MalformedChunk` when a size line is not hexadecimal.
pub fn decode_chunked(body: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(body.len());
    let mut pos = 0;

    while pos < body.len() {
        let (line, next) = read_line(body, pos);
        pos = next;

        let line = String::from_utf8_lossy(line);
        let size_field = line.split(';').next().unwrap_or_default().trim();
        let size = parse_chunk_size(size_field)?;
        if size == 0 {
            break;
        }

        let end = pos.saturating_add(size).min(body.len());
        out.extend_from_slice(&body[pos..end]);
        if end - pos < size {
            log::debug!("Chunked body truncated: expected {} bytes, got {}", size, end - pos);
            break;
        }
        pos = end;

        if body[pos..].starts_with(b"\r\n") {
            pos += 2;
        } else if body[pos..].starts_with(b"\n") {
            pos += 1;
        }
    }

    Ok(out)
}

/// Returns the line starting at `pos` without its terminator, and the offset
/// just past the terminator.
fn read_line(body: &[u8], pos: usize) -> (&[u8], usize) {
    match body[pos..].iter().position(|&b| b == b'\n') {
        Some(offset) => {
            let line = &body[pos..pos + offset];
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            (line, pos + offset + 1)
        }
        None => (&body[pos..], body.len()),
    }
}

fn parse_chunk_size(field: &str) -> Result<usize, DecodeError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DecodeError::MalformedChunk(field.to_string()));
    }
    usize::from_str_radix(field, 16).map_err(|_| DecodeError::MalformedChunk(field.to_string()))
}
