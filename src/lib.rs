//! # 12-bit LZW Decompression
//!
//! `unlzw` is a safe, pure-Rust decompressor for fixed-width LZW streams: every
//! code is 12 bits wide, two codes are packed into three bytes, and the
//! 4096-entry dictionary is cleared back to its 256 literal entries whenever it
//! fills up. This is the code layout used by early Unix `compress`-style tools.
//!
//! ## Example
//!
//! ```rust
//! extern crate alloc;
//! use unlzw::decompress;
//! use alloc::vec::Vec;
//!
//! // Codes: 'A' (0x041), 'B' (0x042), 256 ("AB"), 'A' (0x041)
//! let compressed_data = [
//!     0x04, 0x10, 0x42,
//!     0x10, 0x00, 0x41,
//! ];
//!
//! let mut buffer = Vec::new();
//! decompress(&compressed_data, &mut buffer).expect("Decompression failed");
//! assert_eq!(buffer, b"ABABA");
//! ```
//!
//! With the `std` feature (on by default), [`decompress_stream`] decodes from
//! any [`std::io::Read`] into any [`std::io::Write`], and [`decompress_file`]
//! works on paths.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod decompress;
pub mod dictionary;
pub mod error;
#[cfg(feature = "std")]
pub mod stream;
pub mod unpack;

pub use decompress::{Decoder, Framing, decompress, decompress_with};
pub use dictionary::Dictionary;
pub use error::DecompressionError;
#[cfg(feature = "std")]
pub use error::StreamError;
#[cfg(feature = "std")]
pub use stream::{decompress_file, decompress_stream};
