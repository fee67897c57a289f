use crate::dictionary::Dictionary;
use crate::error::DecompressionError;
use crate::unpack::{Codes, WINDOW_SIZE, parse};
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, DecompressionError>;

/// Byte the reference format places after the last code group.
pub(crate) const DELIMITER: u8 = b'\n';

/// How the end of a packed-code stream is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    /// Bare code stream. An odd code count ends in a 2-byte group; a single
    /// byte left after the last full group is ignored.
    #[default]
    Raw,
    /// Reference format: the code stream is followed by one line-feed byte,
    /// so an odd code count ends in a 3-byte group whose low nibble and last
    /// byte are padding.
    LineTerminated,
}

impl Framing {
    /// Number of delimiter bytes the decoder supplies itself after `stream_len`
    /// bytes of input.
    #[inline]
    pub(crate) const fn implied_delimiter(self, stream_len: usize) -> usize {
        match self {
            Self::Raw if stream_len > 0 => 1,
            _ => 0,
        }
    }
}

/// Window-at-a-time LZW decoder owning its dictionary.
///
/// Feed consecutive 3-byte windows to [`Decoder::decode_window`] together with
/// the number of bytes that follow each one, until it reports the stream is
/// finished.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    dict: Dictionary,
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            dict: Dictionary::new(),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Decodes the codes packed in `window`, handing every entry to `emit` in
    /// stream order.
    ///
    /// Returns `Ok(true)` when more windows are expected.
    pub fn decode_window<E, F>(
        &mut self,
        window: &[u8; WINDOW_SIZE],
        trailing: usize,
        mut emit: F,
    ) -> core::result::Result<bool, E>
    where
        E: From<DecompressionError>,
        F: FnMut(&[u8]) -> core::result::Result<(), E>,
    {
        match parse(window, trailing)? {
            Codes::Last(code) => {
                self.decode_code(code, &mut emit)?;
                tracing::debug!(code, "LZW stream ended on an odd code");
                Ok(false)
            }
            Codes::LastPair(code1, code2) => {
                self.decode_code(code1, &mut emit)?;
                self.decode_code(code2, &mut emit)?;
                tracing::debug!(code1, code2, "LZW stream ended on a code pair");
                Ok(false)
            }
            Codes::Pair(code1, code2) => {
                // code2 may name the entry appended while handling code1.
                self.decode_code(code1, &mut emit)?;
                self.decode_code(code2, &mut emit)?;
                Ok(true)
            }
        }
    }

    #[inline]
    fn decode_code<E, F>(&mut self, code: u16, emit: &mut F) -> core::result::Result<(), E>
    where
        E: From<DecompressionError>,
        F: FnMut(&[u8]) -> core::result::Result<(), E>,
    {
        let entry = self.dict.lookup(code)?;
        tracing::trace!(code, len = entry.len(), "LZW code");
        emit(entry)?;
        self.dict.update(code)?;
        Ok(())
    }
}

/// Decompresses a raw 12-bit LZW code stream, appending to `output`.
pub fn decompress(input: &[u8], output: &mut Vec<u8>) -> Result<()> {
    decompress_with(input, output, Framing::Raw)
}

/// Decompresses a 12-bit LZW code stream laid out according to `framing`.
///
/// On error, `output` keeps whatever was decoded before the failing code.
pub fn decompress_with(input: &[u8], output: &mut Vec<u8>, framing: Framing) -> Result<()> {
    let total = input.len() + framing.implied_delimiter(input.len());
    let byte_at = |pos: usize| input.get(pos).copied().unwrap_or(DELIMITER);

    // A short first window holds no complete code.
    if total < WINDOW_SIZE {
        return Ok(());
    }

    let start_len = output.len();
    let mut decoder = Decoder::new();
    let mut pos = 0;

    loop {
        let window = [byte_at(pos), byte_at(pos + 1), byte_at(pos + 2)];
        pos += WINDOW_SIZE;
        let trailing = total.saturating_sub(pos).min(WINDOW_SIZE);

        let more = decoder.decode_window(&window, trailing, |entry| {
            output.extend_from_slice(entry);
            Ok::<(), DecompressionError>(())
        })?;

        if !more || trailing < WINDOW_SIZE {
            break;
        }
    }

    tracing::debug!(
        consumed = pos.min(input.len()),
        produced = output.len() - start_len,
        "LZW decompression finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut out = Vec::new();
        decompress(&[], &mut out).unwrap();
        assert!(out.is_empty());

        decompress_with(&[], &mut out, Framing::LineTerminated).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_pair() {
        // 'H' = 0x048, 'i' = 0x069
        let mut out = Vec::new();
        decompress(&[0x04, 0x80, 0x69], &mut out).unwrap();
        assert_eq!(out, b"Hi");
    }

    #[test]
    fn test_single_code_raw() {
        let mut out = Vec::new();
        decompress(&[0x04, 0x80], &mut out).unwrap();
        assert_eq!(out, b"H");
    }

    #[test]
    fn test_single_code_line_terminated() {
        let mut out = Vec::new();
        decompress_with(&[0x04, 0x80, b'\n'], &mut out, Framing::LineTerminated).unwrap();
        assert_eq!(out, b"H");
    }

    #[test]
    fn test_lone_byte_is_ignored() {
        let mut out = Vec::new();
        decompress(&[0x04], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_appends_to_existing_output() {
        let mut out = b"> ".to_vec();
        decompress(&[0x04, 0x80, 0x69], &mut out).unwrap();
        assert_eq!(out, b"> Hi");
    }

    #[test]
    fn test_decoder_reports_continuation() {
        let mut decoder = Decoder::new();
        let mut out = Vec::new();
        let more = decoder
            .decode_window(&[0x04, 0x80, 0x69], 3, |e: &[u8]| {
                out.extend_from_slice(e);
                Ok::<(), DecompressionError>(())
            })
            .unwrap();
        assert!(more);
        assert_eq!(decoder.dictionary().len(), 258);

        let err = decoder
            .decode_window(&[0x04, 0x80, 0x69], 7, |_: &[u8]| Ok::<(), DecompressionError>(()))
            .unwrap_err();
        assert_eq!(err, DecompressionError::InvalidFraming { trailing: 7 });
    }
}
