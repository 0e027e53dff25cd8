//! Scalar SipHash
//! ==============
//! A **keyed 64‑bit pseudo‑random function** (SipHash‑2‑4) in portable,
//! branch‑free Rust. Useful for:
//!
//! * hash tables holding attacker‑controlled data: multi‑collisions are
//!   infeasible to compute while the key stays secret, so hash flooding
//!   does not work;
//! * deterministic "random" choices derived from content, e.g. picking a
//!   subset of items based on their bytes.
//!
//! ## Construction
//! * State  : 4 × 64‑bit words (256 bit), initialised from a 128‑bit key
//! * Packet : 8 bytes, little‑endian
//! * Rounds : 2 per packet, 4 at finalisation
//! * Output : 64 bit
//!
//! Memory accesses are sequential and the round function is straight‑line
//! add/rotate/xor, so run time depends only on the input length.
//!
//! ## Entry points
//! * [`sip_hash`] — zero‑padded final packet, `ceil(len / 8) * 8` bytes
//!   absorbed.
//! * [`sip_hash24`] — standard SipHash‑2‑4 message encoding (length byte in
//!   the final packet); matches the published reference vectors.
//! * [`reduce_sip_tree_hash`] — folds `N` lane hashes into one digest.
//! * [`SipHashState`] + [`driver`] for callers driving packets themselves.
//!
//! The core is `no_std` & heap‑free. The feature‑gated **Rayon batch API**
//! lives outside it.

#![no_std]

#[cfg(feature = "std")]
extern crate std;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::vec::Vec;

pub mod driver;
mod error;
mod state;

pub use error::{Error, Result};
pub use state::{Key, Packet, SipHashState, PACKET_SIZE};

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Bytes in a serialised [`Key`].
pub const KEY_BYTES: usize = 16;

/// Parse a 16‑byte key: `k0` from bytes `0..8`, `k1` from bytes `8..16`,
/// both little‑endian.
pub fn key_from_bytes(bytes: &[u8]) -> Result<Key> {
    let bytes: &[u8; KEY_BYTES] = bytes.try_into().map_err(|_| Error::InvalidKeyLength {
        expected: KEY_BYTES,
        actual: bytes.len(),
    })?;

    let mut k0 = [0u8; 8];
    let mut k1 = [0u8; 8];
    k0.copy_from_slice(&bytes[..8]);
    k1.copy_from_slice(&bytes[8..]);
    Ok([u64::from_le_bytes(k0), u64::from_le_bytes(k1)])
}

// ---------------------------------------------------------------------------
// Public hashing API
// ---------------------------------------------------------------------------

/// 64‑bit hash of `bytes` under the secret `key`.
///
/// The final partial packet is zero‑padded, so `ceil(len / 8) * 8` bytes are
/// absorbed and an empty input absorbs nothing.
#[inline]
pub fn sip_hash(key: &Key, bytes: &[u8]) -> u64 {
    driver::compute_hash::<SipHashState>(key, bytes)
}

/// Standard SipHash‑2‑4 of `bytes`: the final packet carries `len mod 256` in
/// its last byte and is always absorbed.
#[inline]
pub fn sip_hash24(key: &Key, bytes: &[u8]) -> u64 {
    driver::compute_hash_length_tagged::<SipHashState>(key, bytes)
}

/// Fold `N` independently computed lane hashes into one digest.
///
/// Each lane is absorbed as one little‑endian packet, in order. Swapping
/// lanes changes the result.
pub fn reduce_sip_tree_hash<const N: usize>(key: &Key, lanes: &[u64; N]) -> u64 {
    let mut state = SipHashState::new(key);
    for lane in lanes {
        state.update(&lane.to_le_bytes());
    }
    state.finalize()
}

/// Hash many independent messages in **parallel** using Rayon (feature `parallel`).
///
/// Every message gets its own state; only the key is shared.
#[cfg(feature = "parallel")]
pub fn sip_hash_batch(key: &Key, messages: &[&[u8]]) -> Vec<u64> {
    log::trace!("sip_hash_batch: {} messages", messages.len());
    messages.par_iter().map(|m| sip_hash(key, m)).collect()
}
