#![no_main]

use libfuzzer_sys::fuzz_target;
use unlzw::{Framing, decompress_stream, decompress_with};

/// Verifies that the decompressor safely handles arbitrary, potentially malformed input.
///
/// # Invariant
/// Decompression returns either `Ok(_)` or `Err(_)` and never panics, whatever
/// codes the input carries.
fn verify_decompression_robustness(data: &[u8], framing: Framing) {
    let mut output = Vec::new();
    let _ = decompress_with(data, &mut output, framing);
}

/// Verifies that the streaming decoder agrees with the in-memory decoder,
/// including the partial output produced before an error.
///
/// # Panics
/// Panics if the two decoders disagree on the result or on the bytes written.
fn verify_stream_agreement(data: &[u8], framing: Framing) {
    let mut in_memory = Vec::new();
    let slice_result = decompress_with(data, &mut in_memory, framing);

    let mut streamed = Vec::new();
    let stream_result = decompress_stream(data, &mut streamed, framing);

    assert_eq!(slice_result.is_ok(), stream_result.is_ok(), "result mismatch");
    assert_eq!(in_memory, streamed, "output mismatch");
}

fuzz_target!(|data: &[u8]| {
    for framing in [Framing::Raw, Framing::LineTerminated] {
        verify_decompression_robustness(data, framing);
        verify_stream_agreement(data, framing);
    }
});
