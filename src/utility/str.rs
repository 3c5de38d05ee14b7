use anyhow::{ensure, Result};

// UTF-8 text, with or without BOM
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    ensure!(!had_errors, "Invalid UTF-8 byte sequence");
    Ok(text.into_owned())
}
