//! Little-endian conversions between byte strings and 64-bit limbs
//!
//! RFC 8032 encodes every integer (field elements, scalars, hash outputs
//! interpreted as integers) little-endian. All arithmetic types in the
//! workspace store integers as `[u64; N]` with the least significant limb
//! first, and go through the two functions below to cross that boundary.

/// Convert a u64 from little-endian byte order to native byte order
///
/// `bytes` may be shorter than eight bytes; missing high bytes read as zero.
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

/// Convert a u64 from native byte order to little-endian bytes
pub fn u64_to_le_bytes(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Interpret `bytes` as a little-endian integer and split it into `N` limbs.
///
/// Shorter inputs are zero-extended. `bytes` must not exceed `8 * N` bytes.
pub fn le_bytes_to_limbs<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert!(bytes.len() <= 8 * N, "integer wider than {} limbs", N);

    let mut limbs = [0u64; N];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks(8)) {
        *limb = u64_from_le_bytes(chunk);
    }
    limbs
}

/// Write `limbs` into `out` as a fixed-width little-endian integer.
///
/// `out` is filled completely: positions past `8 * N` are zeroed, and limb
/// bytes past `out.len()` are dropped, so callers pick the encoding width.
pub fn limbs_to_le_bytes<const N: usize>(limbs: &[u64; N], out: &mut [u8]) {
    out.fill(0);
    for (chunk, limb) in out.chunks_mut(8).zip(limbs.iter()) {
        let bytes = u64_to_le_bytes(*limb);
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}
