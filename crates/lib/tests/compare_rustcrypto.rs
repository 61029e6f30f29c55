//! Byte-for-byte comparison against the RustCrypto `sha3` crate.
//! Both implement FIPS 202 / SP 800-185 — deterministic operations must
//! produce identical output for every family, length and framing string.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{CShake128, CShake128Core, CShake256, CShake256Core, Digest, Shake128, Shake256};

/// Message lengths straddling every family's rate boundary.
const LENS: [usize; 17] = [
    0, 1, 8, 71, 72, 73, 103, 104, 105, 135, 136, 137, 143, 144, 145, 168, 1000,
];

fn pattern(len: usize, tag: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_add(tag.wrapping_mul(37)))
        .collect()
}

macro_rules! fixed_compare_tests {
    ($name:ident, $ours:path, $theirs:ty) => {
        #[test]
        fn $name() {
            for (tag, len) in LENS.iter().enumerate() {
                let msg = pattern(*len, tag as u8);
                let theirs = <$theirs>::digest(&msg);
                assert_eq!($ours(&msg)[..], theirs[..], "len={len}");
            }
        }
    };
}

fixed_compare_tests!(sha3_224_matches, sha3_rs::sha3_224, sha3::Sha3_224);
fixed_compare_tests!(sha3_256_matches, sha3_rs::sha3_256, sha3::Sha3_256);
fixed_compare_tests!(sha3_384_matches, sha3_rs::sha3_384, sha3::Sha3_384);
fixed_compare_tests!(sha3_512_matches, sha3_rs::sha3_512, sha3::Sha3_512);

fn rustcrypto_xof<H: Default + Update + ExtendableOutput>(msg: &[u8], out: &mut [u8]) {
    let mut h = H::default();
    h.update(msg);
    h.finalize_xof().read(out);
}

#[test]
fn shake128_matches() {
    for (tag, len) in LENS.iter().enumerate() {
        let msg = pattern(*len, tag as u8);
        for olen in [0, 1, 32, 167, 168, 169, 400] {
            let mut ours = vec![0u8; olen];
            sha3_rs::shake128(&msg, &mut ours);
            let mut theirs = vec![0u8; olen];
            rustcrypto_xof::<Shake128>(&msg, &mut theirs);
            assert_eq!(ours, theirs, "len={len} olen={olen}");
        }
    }
}

#[test]
fn shake256_matches() {
    for (tag, len) in LENS.iter().enumerate() {
        let msg = pattern(*len, tag as u8);
        for olen in [0, 1, 64, 135, 136, 137, 400] {
            let mut ours = vec![0u8; olen];
            sha3_rs::shake256(&msg, &mut ours);
            let mut theirs = vec![0u8; olen];
            rustcrypto_xof::<Shake256>(&msg, &mut theirs);
            assert_eq!(ours, theirs, "len={len} olen={olen}");
        }
    }
}

/// Name/customization pairs, including ones whose framing spans multiple
/// rate blocks.
fn framing_pairs() -> Vec<(Vec<u8>, Vec<u8>)> {
    vec![
        (b"".to_vec(), b"".to_vec()),
        (b"".to_vec(), b"Email Signature".to_vec()),
        (b"KMAC".to_vec(), b"".to_vec()),
        (b"My Function".to_vec(), b"My Customization".to_vec()),
        (pattern(166, 3), pattern(2, 4)),
        (pattern(200, 5), pattern(400, 6)),
    ]
}

#[test]
fn cshake128_matches() {
    for (name, custom) in framing_pairs() {
        for len in [0, 3, 168, 200] {
            let msg = pattern(len, 9);
            let mut ours = vec![0u8; 32];
            sha3_rs::cshake128(&name, &custom, &msg, &mut ours).unwrap();

            let mut h = CShake128::from_core(CShake128Core::new_with_function_name(&name, &custom));
            h.update(&msg);
            let mut theirs = vec![0u8; 32];
            h.finalize_xof().read(&mut theirs);

            assert_eq!(ours, theirs, "name={} custom={} len={len}", name.len(), custom.len());
        }
    }
}

#[test]
fn cshake256_matches() {
    for (name, custom) in framing_pairs() {
        for len in [0, 3, 136, 200] {
            let msg = pattern(len, 9);
            let mut ours = vec![0u8; 64];
            sha3_rs::cshake256(&name, &custom, &msg, &mut ours).unwrap();

            let mut h = CShake256::from_core(CShake256Core::new_with_function_name(&name, &custom));
            h.update(&msg);
            let mut theirs = vec![0u8; 64];
            h.finalize_xof().read(&mut theirs);

            assert_eq!(ours, theirs, "name={} custom={} len={len}", name.len(), custom.len());
        }
    }
}

#[test]
fn streaming_matches_rustcrypto_streaming() {
    // Same message fed in mismatched chunk sizes to both implementations.
    let msg = pattern(1000, 13);

    let mut ours = sha3_rs::Sha3::new();
    ours.starts(sha3_rs::Family::Sha3_512);
    for chunk in msg.chunks(61) {
        ours.update(chunk).unwrap();
    }
    let mut our_digest = [0u8; 64];
    ours.finish(&mut our_digest).unwrap();

    let mut theirs = sha3::Sha3_512::new();
    for chunk in msg.chunks(173) {
        Digest::update(&mut theirs, chunk);
    }
    assert_eq!(our_digest[..], theirs.finalize()[..]);
}
