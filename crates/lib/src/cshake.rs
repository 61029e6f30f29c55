//! SP 800-185 string framing for cSHAKE.
//!
//! Holds the three framing primitives — `left_encode`, `encode_string` and
//! `bytepad` — expressed over the regular absorb path, so the preamble goes
//! through exactly the same state transitions as user data.

use crate::{Error, sponge::Sha3};

/// Room for one `left_encode`: a length byte plus up to eight value bytes.
type Scratch = [u8; 9];

/// Minimal big-endian encoding of `val`, preceded by one byte holding the
/// count of value bytes. Zero encodes as `[0x01, 0x00]`.
fn left_encode(scratch: &mut Scratch, val: u64) -> &[u8] {
    let bytes = val.to_be_bytes();
    // At least one value byte is always kept.
    let len = 8 - bytes.iter().take(7).take_while(|&&b| b == 0).count();
    scratch[0] = len as u8;
    scratch[1..1 + len].copy_from_slice(&bytes[8 - len..]);
    &scratch[..1 + len]
}

/// Bit length of a framing string as used by `encode_string`.
///
/// # Errors
///
/// [`Error::BadInputData`] when the bit count overflows, i.e. the string is
/// 2^61 bytes or longer.
pub(crate) fn bit_length(s: &[u8]) -> Result<u64, Error> {
    (s.len() as u64).checked_mul(8).ok_or(Error::BadInputData)
}

/// Absorb `bytepad(encode_string(name) || encode_string(custom), rate)`.
///
/// The total is rounded up to a whole number of rate blocks, so the sponge
/// is left freshly permuted and block-aligned for user data.
pub(crate) fn absorb_preamble(
    ctx: &mut Sha3,
    rate: usize,
    name: &[u8],
    name_bits: u64,
    custom: &[u8],
    custom_bits: u64,
) {
    let mut scratch = [0u8; 9];
    ctx.absorb(rate, left_encode(&mut scratch, rate as u64));
    ctx.absorb(rate, left_encode(&mut scratch, name_bits));
    ctx.absorb(rate, name);
    ctx.absorb(rate, left_encode(&mut scratch, custom_bits));
    ctx.absorb(rate, custom);
    ctx.fill_block(rate);
}
