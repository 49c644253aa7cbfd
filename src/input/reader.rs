use anyhow::{Context, Result, anyhow, bail};
use std::fs::File;
use std::io::{self, Read};

use crate::tokenizer::contains_bengali;

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Reads Bengali source text from a file or stdin.
///
/// Input must be UTF-8, at most 1 MB and contain some Bengali script. A
/// leading byte-order mark is dropped.
pub struct InputReader;

impl InputReader {
    pub fn read(file_path: Option<&str>) -> Result<String> {
        let text = match file_path {
            Some(path) => {
                let file =
                    File::open(path).with_context(|| format!("Failed to open file: {path}"))?;
                read_limited(file, path)?
            }
            None => read_limited(io::stdin().lock(), "stdin")?,
        };
        check_source(text)
    }
}

/// Reads at most one byte past the limit, so oversized input fails without
/// being buffered whole.
fn read_limited(reader: impl Read, origin: &str) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .take(MAX_INPUT_SIZE as u64 + 1)
        .read_to_end(&mut buffer)
        .with_context(|| format!("Failed to read from {origin}"))?;

    if buffer.len() > MAX_INPUT_SIZE {
        bail!(
            "Error: Input from {origin} exceeds maximum allowed size (1 MB).\n\n\
             Lines are translated independently, so the text can be split at any line break."
        );
    }

    String::from_utf8(buffer).map_err(|err| {
        anyhow!(
            "Error: Input from {origin} is not valid UTF-8 (invalid byte at offset {}).\n\n\
             Save the text as UTF-8 and try again.",
            err.utf8_error().valid_up_to()
        )
    })
}

fn check_source(text: String) -> Result<String> {
    let text = match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) => rest.to_string(),
        None => text,
    };

    if text.trim().is_empty() {
        bail!("Error: Input is empty");
    }
    if !contains_bengali(&text) {
        bail!(
            "Error: Input contains no Bengali text.\n\n\
             bn2hi translates from Bengali script (U+0980 to U+09FF)."
        );
    }
    Ok(text)
}
