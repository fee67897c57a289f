use crate::error::DecompressionError;
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, DecompressionError>;

// --- Constants ---

/// Width of every code in the stream.
pub const CODE_BITS: u32 = 12;

/// Total number of codes addressable with `CODE_BITS` (4096).
pub const DICT_SIZE: usize = 1 << CODE_BITS;

/// Number of literal single-byte entries present after initialization.
pub const DICT_SIZE_INIT: usize = 256;

/// Adaptive code-to-bytes table rebuilt by the decoder as codes arrive.
///
/// Entries `0..256` are the literal bytes and never change. Every later entry
/// is an earlier entry plus one byte. The most recently added entry is
/// provisional: its last byte is a copy of its own first byte until the next
/// call to [`Dictionary::update`] overwrites it with the first byte of the
/// entry decoded after it.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Exactly `len()` populated entries, indexed by code.
    entries: Vec<Vec<u8>>,
}

impl Dictionary {
    /// Creates a dictionary holding the 256 literal entries.
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(DICT_SIZE);
        entries.extend((0..=u8::MAX).map(|byte| alloc::vec![byte]));
        Self { entries }
    }

    /// Number of currently valid entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the literal entries are never removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every dynamically added entry, keeping the 256 literals.
    pub fn reset(&mut self) {
        tracing::debug!(size = self.len(), "LZW dictionary reset");
        self.entries.truncate(DICT_SIZE_INIT);
    }

    /// Returns the byte sequence for `code`.
    #[inline]
    pub fn lookup(&self, code: u16) -> Result<&[u8]> {
        self.entries
            .get(code as usize)
            .map(Vec::as_slice)
            .ok_or(DecompressionError::InvalidCode {
                code,
                size: self.len(),
            })
    }

    /// Records that `code` was just decoded.
    ///
    /// Patches the provisional entry with the first byte of `code`, resets the
    /// table if it is full, then appends `lookup(code)` followed by a
    /// placeholder copy of its first byte.
    pub fn update(&mut self, code: u16) -> Result<()> {
        let first = self.lookup(code)?[0];

        let last = self.len() - 1;
        if last >= DICT_SIZE_INIT {
            if let Some(byte) = self.entries[last].last_mut() {
                *byte = first;
            }
        }

        // The source entry must be copied before a reset can discard it.
        let mut entry = Vec::with_capacity(self.entries[code as usize].len() + 1);
        entry.extend_from_slice(&self.entries[code as usize]);
        entry.push(first);

        if self.len() == DICT_SIZE {
            self.reset();
        }

        self.entries.push(entry);
        Ok(())
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_literals() {
        let dict = Dictionary::new();
        assert_eq!(dict.len(), DICT_SIZE_INIT);
        for code in 0..=255u16 {
            assert_eq!(dict.lookup(code).unwrap(), &[code as u8]);
        }
        assert_eq!(
            dict.lookup(256),
            Err(DecompressionError::InvalidCode {
                code: 256,
                size: 256
            })
        );
    }

    #[test]
    fn test_update_appends_placeholder() {
        let mut dict = Dictionary::new();
        dict.update(u16::from(b'a')).unwrap();

        assert_eq!(dict.len(), 257);
        assert_eq!(dict.lookup(256).unwrap(), b"aa");
    }

    #[test]
    fn test_update_patches_provisional_entry() {
        let mut dict = Dictionary::new();
        dict.update(u16::from(b'a')).unwrap();
        dict.update(u16::from(b'b')).unwrap();

        // 256 = "a" + first byte of "b"; 257 is still provisional.
        assert_eq!(dict.lookup(256).unwrap(), b"ab");
        assert_eq!(dict.lookup(257).unwrap(), b"bb");

        dict.update(256).unwrap();
        assert_eq!(dict.lookup(257).unwrap(), b"ba");
        assert_eq!(dict.lookup(258).unwrap(), b"aba");
    }

    #[test]
    fn test_update_growth_length() {
        let mut dict = Dictionary::new();
        dict.update(65).unwrap();
        dict.update(256).unwrap();
        let before = dict.lookup(257).unwrap().len();
        let size = dict.len();

        dict.update(257).unwrap();
        assert_eq!(dict.len(), size + 1);
        assert_eq!(dict.lookup(size as u16).unwrap().len(), before + 1);
    }

    #[test]
    fn test_update_rejects_unknown_code() {
        let mut dict = Dictionary::new();
        assert_eq!(
            dict.update(300),
            Err(DecompressionError::InvalidCode {
                code: 300,
                size: 256
            })
        );
        assert_eq!(dict.len(), DICT_SIZE_INIT);
    }

    #[test]
    fn test_reset_when_full() {
        let mut dict = Dictionary::new();
        while dict.len() < DICT_SIZE {
            dict.update(7).unwrap();
        }
        assert_eq!(dict.len(), DICT_SIZE);

        dict.update(4095).unwrap();
        assert_eq!(dict.len(), DICT_SIZE_INIT + 1);
        for code in 0..=255u16 {
            assert_eq!(dict.lookup(code).unwrap(), &[code as u8]);
        }
        // Old entry 4095 ([7, 7]) survives the reset as the source of entry 256.
        assert_eq!(dict.lookup(256).unwrap(), &[7, 7, 7]);
    }

    #[test]
    fn test_explicit_reset_keeps_literals() {
        let mut dict = Dictionary::new();
        dict.update(1).unwrap();
        dict.update(2).unwrap();
        dict.reset();
        assert_eq!(dict.len(), DICT_SIZE_INIT);
        assert_eq!(dict.lookup(2).unwrap(), &[2]);
        assert!(dict.lookup(256).is_err());
    }
}
