use crate::error::ScrapeError;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use lazy_regex::regex;
use tracing::debug;

/// How far into the body a `<meta>` charset declaration is looked for.
const SNIFF_LEN: usize = 1024;

/// Decodes a fetched page into text.
///
/// The encoding comes from, in order: a byte order mark, the `Content-Type`
/// header, a `<meta>` declaration near the top of the document. Without any
/// declaration valid UTF-8 is taken as is and anything else is read as
/// windows-1252.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> Result<String, ScrapeError> {
    let encoding = detect_encoding(body, content_type)?;
    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        debug!(encoding = used.name(), "Replaced malformed sequences while decoding");
    }
    Ok(text.into_owned())
}

pub fn detect_encoding(
    body: &[u8],
    content_type: Option<&str>,
) -> Result<&'static Encoding, ScrapeError> {
    if let Some((encoding, _)) = Encoding::for_bom(body) {
        return Ok(encoding);
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(SNIFF_LEN)]);
    let label = content_type
        .and_then(header_charset)
        .or_else(|| meta_charset(&head));

    match label {
        Some(label) => {
            let encoding = Encoding::for_label(label.as_bytes())
                .ok_or_else(|| ScrapeError::Decode(format!("unknown charset `{}`", label)))?;
            // A declared UTF-16 without BOM cannot be right for an ASCII-compatible document.
            if encoding == UTF_16LE || encoding == UTF_16BE {
                Ok(UTF_8)
            } else {
                Ok(encoding)
            }
        }
        None if std::str::from_utf8(body).is_ok() => Ok(UTF_8),
        None => Ok(WINDOWS_1252),
    }
}

fn header_charset(content_type: &str) -> Option<String> {
    regex!(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#)
        .captures(content_type)
        .map(|c| c[1].to_string())
}

fn meta_charset(head: &str) -> Option<String> {
    regex!(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#)
        .captures(head)
        .map(|c| c[1].to_string())
}
