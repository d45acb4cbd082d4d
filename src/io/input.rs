use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read a transcript file into decoded text.
///
/// SRT files in the wild are not reliably UTF-8; on invalid UTF-8 the raw
/// bytes are reinterpreted as Latin-1 rather than failing the whole
/// conversion.
pub fn read_transcript_file(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    Ok(decode_transcript(bytes))
}

/// Decode transcript bytes: UTF-8 first, Latin-1 fallback.
pub fn decode_transcript(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!("input is not valid UTF-8, falling back to Latin-1");
            // Latin-1 maps every byte to the same code point
            err.into_bytes().iter().map(|&b| b as char).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_transcript("héllo".as_bytes().to_vec()), "héllo");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // 0xE9 is 'é' in Latin-1 but invalid as a standalone UTF-8 byte
        let bytes = vec![b'h', 0xE9, b'l', b'l', b'o'];
        assert_eq!(decode_transcript(bytes), "héllo");
    }

    #[test]
    fn test_read_transcript_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1\n00:00:01,000 --> 00:00:02,000\nTYLER: Hi").unwrap();

        let content = read_transcript_file(file.path()).unwrap();
        assert!(content.contains("TYLER: Hi"));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_transcript_file(Path::new("/no/such/file.srt")).is_err());
    }
}
