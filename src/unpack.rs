use crate::error::DecompressionError;

type Result<T> = core::result::Result<T, DecompressionError>;

/// Number of input bytes that pack two 12-bit codes.
pub const WINDOW_SIZE: usize = 3;

/// Codes carried by one 3-byte window, and whether decoding stops after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codes {
    /// Final window on an odd code count: only the high 12 bits are a code.
    Last(u16),
    /// Final window holding a full pair.
    LastPair(u16, u16),
    /// A full pair with at least one more window behind it.
    Pair(u16, u16),
}

/// Splits `window` into its codes.
///
/// `trailing` is the number of stream bytes that follow the window: 0 and 1
/// mark the end of the stream, 2 and 3 mean decoding continues.
pub const fn parse(window: &[u8; WINDOW_SIZE], trailing: usize) -> Result<Codes> {
    let code1 = ((window[0] as u16) << 4) | ((window[1] as u16) >> 4);
    let code2 = (((window[1] & 0x0F) as u16) << 8) | window[2] as u16;

    match trailing {
        0 => Ok(Codes::Last(code1)),
        1 => Ok(Codes::LastPair(code1, code2)),
        2 | 3 => Ok(Codes::Pair(code1, code2)),
        _ => Err(DecompressionError::InvalidFraming { trailing }),
    }
}
