//! Sponge absorb/squeeze state machine over Keccak-f[1600].
//!
//! Absorption is block-buffered: partial input accumulates in a rate-sized
//! buffer, full blocks are XOR-folded into the state as little-endian lanes
//! and permuted immediately. The effect is byte-granular: feeding a message
//! in any partition yields the same state as feeding it whole.

use zeroize::Zeroize;

use crate::{
    Error,
    cshake,
    params::{CSHAKE_SUFFIX, Family, MAX_RATE, Params},
};

/// Streaming SHA-3 / SHAKE / cSHAKE context.
///
/// A plain value: the 25-lane permutation state, a rate-sized block buffer
/// and the started parameters. Cloning forks the hashing session; dropping
/// wipes the state.
///
/// # Example
///
/// ```
/// use sha3_rs::{Family, Sha3};
///
/// let mut ctx = Sha3::new();
/// ctx.starts(Family::Sha3_256);
/// ctx.update(b"abc").unwrap();
/// let mut digest = [0u8; 32];
/// ctx.finish(&mut digest).unwrap();
/// ```
#[derive(Clone)]
pub struct Sha3 {
    state: [u64; 25],
    /// Pending input; only the first `rate` bytes are ever in use.
    buf: [u8; MAX_RATE],
    /// Fill level of `buf`; always below the started rate.
    buf_len: usize,
    phase: Phase,
}

/// Lifecycle tag. Parameters travel inside the started variants so an
/// un-started context carries none.
#[derive(Clone, Copy)]
enum Phase {
    Uninit,
    Absorbing(Params),
    Finalized(Params),
}

impl Sha3 {
    /// Create an uninitialized context. [`starts`](Self::starts) or
    /// [`starts_cshake`](Self::starts_cshake) must run before any data is
    /// fed; until then [`update`](Self::update) and [`finish`](Self::finish)
    /// fail with [`Error::BadInputData`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: [0; 25],
            buf: [0; MAX_RATE],
            buf_len: 0,
            phase: Phase::Uninit,
        }
    }

    /// Start a hash computation, discarding any previous session.
    ///
    /// Every [`Family`] is accepted; the cSHAKE families behave as the SHAKE
    /// of the same strength until [`starts_cshake`](Self::starts_cshake)
    /// supplies framing strings.
    pub fn starts(&mut self, id: Family) {
        self.reset(id.params());
    }

    /// Start a cSHAKE computation with a function-name string `name` and a
    /// customization string `custom`, either of which may be empty. With
    /// both empty this is exactly the corresponding SHAKE.
    ///
    /// # Errors
    ///
    /// [`Error::BadInputData`] if `id` is not [`Family::CShake128`] or
    /// [`Family::CShake256`], or if a string is too long to frame
    /// (2^61 bytes or more). On error the context is left untouched.
    pub fn starts_cshake(
        &mut self,
        id: Family,
        name: &[u8],
        custom: &[u8],
    ) -> Result<(), Error> {
        if !id.is_cshake() {
            return Err(Error::BadInputData);
        }
        let mut params = id.params();
        if name.is_empty() && custom.is_empty() {
            self.reset(params);
            return Ok(());
        }

        // Validate the framed bit lengths before mutating the context.
        let name_bits = cshake::bit_length(name)?;
        let custom_bits = cshake::bit_length(custom)?;

        params.suffix = CSHAKE_SUFFIX;
        self.reset(params);
        cshake::absorb_preamble(self, params.rate, name, name_bits, custom, custom_bits);
        Ok(())
    }

    /// Absorb `input` into the ongoing computation. A zero-length input is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// [`Error::BadInputData`] unless the context is between a `starts` and
    /// a `finish`.
    pub fn update(&mut self, input: &[u8]) -> Result<(), Error> {
        let Phase::Absorbing(params) = self.phase else {
            return Err(Error::BadInputData);
        };
        self.absorb(params.rate, input);
        Ok(())
    }

    /// Pad, apply the final permutation and squeeze `output.len()` bytes.
    ///
    /// For the fixed-digest families the output must be exactly the mandated
    /// digest length (28, 32, 48 or 64 bytes); the XOF families fill any
    /// buffer, including an empty one. Afterwards the context is finalized:
    /// further `update`/`finish` calls fail until a new `starts`.
    ///
    /// # Errors
    ///
    /// [`Error::BadInputData`] on a digest-length mismatch or if the context
    /// is not absorbing.
    pub fn finish(&mut self, output: &mut [u8]) -> Result<(), Error> {
        let Phase::Absorbing(params) = self.phase else {
            return Err(Error::BadInputData);
        };
        if params.digest_len != 0 && output.len() != params.digest_len {
            return Err(Error::BadInputData);
        }

        // Suffix and pad10*1 share the final block: the suffix lands on the
        // byte after the last message byte, 0x80 on the last rate byte.
        self.buf[self.buf_len..params.rate].fill(0);
        self.buf[self.buf_len] ^= params.suffix;
        self.buf[params.rate - 1] ^= 0x80;
        absorb_block(&mut self.state, &self.buf[..params.rate]);
        self.buf_len = 0;

        let mut offset = 0;
        while offset < output.len() {
            if offset != 0 {
                sha3_keccak::f1600(&mut self.state);
            }
            let take = (output.len() - offset).min(params.rate);
            squeeze_block(&self.state, &mut output[offset..offset + take]);
            offset += take;
        }

        self.phase = Phase::Finalized(params);
        Ok(())
    }

    fn reset(&mut self, params: Params) {
        self.state = [0; 25];
        self.buf = [0; MAX_RATE];
        self.buf_len = 0;
        self.phase = Phase::Absorbing(params);
    }

    /// Fold `input` into the sponge at `rate`. Callers guarantee the context
    /// is absorbing at that rate.
    pub(crate) fn absorb(&mut self, rate: usize, mut input: &[u8]) {
        if self.buf_len != 0 {
            let take = (rate - self.buf_len).min(input.len());
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&input[..take]);
            self.buf_len += take;
            input = &input[take..];
            if self.buf_len == rate {
                absorb_block(&mut self.state, &self.buf[..rate]);
                self.buf_len = 0;
            }
        }

        while input.len() >= rate {
            let (block, rest) = input.split_at(rate);
            absorb_block(&mut self.state, block);
            input = rest;
        }

        if !input.is_empty() {
            self.buf[..input.len()].copy_from_slice(input);
            self.buf_len = input.len();
        }
    }

    /// Zero-fill the pending block up to the rate boundary and permute,
    /// leaving the absorber freshly aligned. No-op when already aligned.
    pub(crate) fn fill_block(&mut self, rate: usize) {
        if self.buf_len == 0 {
            return;
        }
        self.buf[self.buf_len..rate].fill(0);
        absorb_block(&mut self.state, &self.buf[..rate]);
        self.buf_len = 0;
    }
}

impl Default for Sha3 {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Sha3 {
    /// Redacted: never shows state or buffered input.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut d = f.debug_struct("Sha3");
        match self.phase {
            Phase::Uninit => {
                d.field("phase", &"uninit");
            }
            Phase::Absorbing(p) => {
                d.field("phase", &"absorbing").field("family", &p.id);
            }
            Phase::Finalized(p) => {
                d.field("phase", &"finalized").field("family", &p.id);
            }
        }
        d.finish_non_exhaustive()
    }
}

impl Zeroize for Sha3 {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buf.zeroize();
        self.buf_len = 0;
        self.phase = Phase::Uninit;
    }
}

impl Drop for Sha3 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl zeroize::ZeroizeOnDrop for Sha3 {}

/// XOR a full rate block into the state as little-endian lanes and permute.
fn absorb_block(state: &mut [u64; 25], block: &[u8]) {
    debug_assert!(block.len().is_multiple_of(8));
    for (lane, bytes) in state.iter_mut().zip(block.as_chunks().0) {
        *lane ^= u64::from_le_bytes(*bytes);
    }
    sha3_keccak::f1600(state);
}

/// Copy `out.len()` bytes (at most one rate block) from the little-endian
/// state view.
fn squeeze_block(state: &[u64; 25], out: &mut [u8]) {
    let (chunks, tail) = out.as_chunks_mut();
    for (bytes, lane) in chunks.iter_mut().zip(state.iter()) {
        *bytes = lane.to_le_bytes();
    }
    if !tail.is_empty() {
        let last = state[chunks.len()].to_le_bytes();
        tail.copy_from_slice(&last[..tail.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_and_finish_require_starts() {
        let mut ctx = Sha3::new();
        assert_eq!(ctx.update(b"x"), Err(Error::BadInputData));
        assert_eq!(ctx.finish(&mut [0u8; 32]), Err(Error::BadInputData));
    }

    #[test]
    fn finalized_context_rejects_further_use() {
        let mut ctx = Sha3::new();
        ctx.starts(Family::Sha3_256);
        let mut digest = [0u8; 32];
        ctx.finish(&mut digest).unwrap();
        assert_eq!(ctx.update(b"x"), Err(Error::BadInputData));
        assert_eq!(ctx.finish(&mut digest), Err(Error::BadInputData));
    }

    #[test]
    fn starts_recovers_finalized_context() {
        let mut ctx = Sha3::new();
        ctx.starts(Family::Shake128);
        ctx.finish(&mut []).unwrap();
        ctx.starts(Family::Sha3_256);
        ctx.update(b"abc").unwrap();
        assert!(ctx.finish(&mut [0u8; 32]).is_ok());
    }

    #[test]
    fn zeroize_returns_to_uninit() {
        let mut ctx = Sha3::new();
        ctx.starts(Family::Sha3_256);
        ctx.update(b"secret").unwrap();
        ctx.zeroize();
        assert_eq!(ctx.update(b"x"), Err(Error::BadInputData));
    }

    #[test]
    fn debug_output_is_redacted() {
        let mut ctx = Sha3::new();
        ctx.starts(Family::CShake256);
        ctx.update(b"secret message").unwrap();
        let rendered = format!("{ctx:?}");
        assert!(rendered.contains("absorbing"));
        assert!(!rendered.contains("secret"));
    }
}
