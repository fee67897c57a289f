//! Decompression over `std::io` readers and writers, and between files.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use crate::decompress::{DELIMITER, Decoder, Framing};
use crate::error::StreamError;
use crate::unpack::WINDOW_SIZE;

type Result<T> = core::result::Result<T, StreamError>;

/// Forward-only source of 3-byte windows that supplies the implied delimiter
/// of [`Framing::Raw`] once the underlying reader is exhausted.
struct WindowReader<R> {
    inner: R,
    framing: Framing,
    consumed: u64,
    eof: bool,
    delimiter_sent: bool,
}

impl<R: Read> WindowReader<R> {
    fn new(inner: R, framing: Framing) -> Self {
        Self {
            inner,
            framing,
            consumed: 0,
            eof: false,
            delimiter_sent: false,
        }
    }

    /// Fills `window` as far as the stream allows and returns the byte count.
    /// Unfilled positions are zeroed.
    fn fill(&mut self, window: &mut [u8; WINDOW_SIZE]) -> io::Result<usize> {
        *window = [0; WINDOW_SIZE];
        let mut filled = 0;

        while filled < WINDOW_SIZE && !self.eof {
            match self.inner.read(&mut window[filled..]) {
                Ok(0) => self.eof = true,
                Ok(n) => {
                    filled += n;
                    self.consumed += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }

        if filled < WINDOW_SIZE && self.eof && !self.delimiter_sent {
            self.delimiter_sent = true;
            let stream_len = usize::try_from(self.consumed).unwrap_or(usize::MAX);
            if self.framing.implied_delimiter(stream_len) > 0 {
                window[filled] = DELIMITER;
                filled += 1;
            }
        }

        Ok(filled)
    }
}

/// Decompresses a 12-bit LZW code stream from `reader` into `writer`.
///
/// Input is consumed strictly forward in 3-byte windows; every decoded entry
/// is written as soon as its code is known. The writer is flushed before
/// returning. Returns the number of bytes written.
pub fn decompress_stream<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    framing: Framing,
) -> Result<u64> {
    let mut windows = WindowReader::new(reader, framing);
    let mut produced = 0u64;

    let mut window = [0u8; WINDOW_SIZE];
    let mut next = [0u8; WINDOW_SIZE];

    // A short first window holds no complete code.
    if windows.fill(&mut window)? == WINDOW_SIZE {
        let mut decoder = Decoder::new();

        loop {
            let trailing = windows.fill(&mut next)?;

            let more = decoder.decode_window(&window, trailing, |entry| {
                writer.write_all(entry)?;
                produced += entry.len() as u64;
                Ok::<(), StreamError>(())
            })?;

            if !more || trailing < WINDOW_SIZE {
                break;
            }
            window = next;
        }
    }

    writer.flush()?;
    tracing::debug!(
        consumed = windows.consumed,
        produced,
        "LZW stream decompression finished"
    );
    Ok(produced)
}

/// Decompresses the file at `input` into `output`, creating or truncating it.
///
/// Both files are opened before any decoding starts.
pub fn decompress_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    framing: Framing,
) -> Result<u64> {
    let input = input.as_ref();
    let output = output.as_ref();

    let reader = File::open(input).map_err(|source| StreamError::ResourceUnavailable {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| StreamError::ResourceUnavailable {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::debug!(input = %input.display(), output = %output.display(), ?framing, "decompressing file");
    decompress_stream(BufReader::new(reader), BufWriter::new(writer), framing)
}
