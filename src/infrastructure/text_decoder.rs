use encoding_rs::UTF_8;

/// Decode bytes the way a browser text read does: UTF-8, a leading BOM
/// removed, malformed sequences replaced with U+FFFD.
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        tracing::debug!("Replaced malformed UTF-8 sequences while decoding upload");
    }
    text.into_owned()
}
