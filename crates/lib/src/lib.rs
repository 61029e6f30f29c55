//! `sha3-rs` — a streaming SHA-3 / SHAKE / cSHAKE sponge engine.
//!
//! Implements the FIPS 202 fixed-digest hashes (SHA3-224/256/384/512) and
//! XOFs (SHAKE128/256), plus the SP 800-185 cSHAKE128/cSHAKE256
//! extendable-output functions with function-name and customization strings.
//! The permutation lives in the sibling `sha3-keccak` crate; everything here
//! is rate handling, padding, framing and the streaming API.
//!
//! # Design principles
//!
//! - **No `unsafe`** — enforced by `#![deny(unsafe_code)]`.
//! - **No heap** — a context is a plain value of 200 state bytes plus a
//!   block buffer; the crate is `no_std`.
//! - **RAII zeroization** of hash state via the `zeroize` crate.
//! - **Constant control flow** — branches and memory addressing depend on
//!   input lengths only, never on message bytes.
//!
//! # Example
//!
//! ```
//! use sha3_rs::{Family, Sha3};
//!
//! // Streaming.
//! let mut ctx = Sha3::new();
//! ctx.starts(Family::Shake256);
//! ctx.update(b"some ").unwrap();
//! ctx.update(b"message").unwrap();
//! let mut out = [0u8; 64];
//! ctx.finish(&mut out).unwrap();
//!
//! // One-shot.
//! assert_eq!(sha3_rs::sha3_256(b"abc")[..4], [0x3a, 0x98, 0x5d, 0xa7]);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod cshake;
mod error;
mod params;
mod sponge;

pub use error::Error;
pub use params::Family;
pub use sponge::Sha3;

/// One-shot hash over a transient context: `starts`, one `update`, `finish`.
///
/// The context lives on the stack and is zeroized on every exit path,
/// including errors.
///
/// # Errors
///
/// [`Error::BadInputData`] if `output.len()` does not match a fixed-digest
/// family's mandated length.
pub fn sha3(id: Family, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
    let mut ctx = Sha3::new();
    ctx.starts(id);
    ctx.update(input)?;
    ctx.finish(output)
}

/// One-shot cSHAKE with function-name and customization strings.
///
/// With both strings empty this equals [`sha3`] with the same id.
///
/// # Errors
///
/// [`Error::BadInputData`] if `id` is not a cSHAKE family or a string is too
/// long to frame.
pub fn sha3_cshake(
    id: Family,
    name: &[u8],
    custom: &[u8],
    input: &[u8],
    output: &mut [u8],
) -> Result<(), Error> {
    let mut ctx = Sha3::new();
    ctx.starts_cshake(id, name, custom)?;
    ctx.update(input)?;
    ctx.finish(output)
}

/// SHA3-224(input) → 28 bytes.
#[must_use]
pub fn sha3_224(input: &[u8]) -> [u8; 28] {
    let mut out = [0u8; 28];
    sha3(Family::Sha3_224, input, &mut out).expect("infallible: mandated digest length");
    out
}

/// SHA3-256(input) → 32 bytes.
#[must_use]
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    sha3(Family::Sha3_256, input, &mut out).expect("infallible: mandated digest length");
    out
}

/// SHA3-384(input) → 48 bytes.
#[must_use]
pub fn sha3_384(input: &[u8]) -> [u8; 48] {
    let mut out = [0u8; 48];
    sha3(Family::Sha3_384, input, &mut out).expect("infallible: mandated digest length");
    out
}

/// SHA3-512(input) → 64 bytes.
#[must_use]
pub fn sha3_512(input: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    sha3(Family::Sha3_512, input, &mut out).expect("infallible: mandated digest length");
    out
}

/// SHAKE128(input), squeezed to fill `output`.
pub fn shake128(input: &[u8], output: &mut [u8]) {
    sha3(Family::Shake128, input, output).expect("infallible: XOF takes any output length");
}

/// SHAKE256(input), squeezed to fill `output`.
pub fn shake256(input: &[u8], output: &mut [u8]) {
    sha3(Family::Shake256, input, output).expect("infallible: XOF takes any output length");
}

/// cSHAKE128(input, name, custom), squeezed to fill `output`.
///
/// # Errors
///
/// [`Error::BadInputData`] if a framing string is 2^61 bytes or longer.
pub fn cshake128(
    name: &[u8],
    custom: &[u8],
    input: &[u8],
    output: &mut [u8],
) -> Result<(), Error> {
    sha3_cshake(Family::CShake128, name, custom, input, output)
}

/// cSHAKE256(input, name, custom), squeezed to fill `output`.
///
/// # Errors
///
/// [`Error::BadInputData`] if a framing string is 2^61 bytes or longer.
pub fn cshake256(
    name: &[u8],
    custom: &[u8],
    input: &[u8],
    output: &mut [u8],
) -> Result<(), Error> {
    sha3_cshake(Family::CShake256, name, custom, input, output)
}
