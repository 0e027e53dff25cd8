//! SipHash mixing state
//! ====================
//! 4 × 64‑bit words absorbing one 8‑byte packet per [`SipHashState::update`],
//! mixed by the SipHash ARX round. Absorption runs 2 rounds, finalisation 4.
//!
//! Paper: <https://www.131002.net/siphash/siphash.pdf>

use core::fmt;

use crate::driver::PacketState;

/// Secret 128‑bit key as `(k0, k1)`. Order matters: swapping the words
/// changes every digest.
pub type Key = [u64; 2];

/// One absorbed unit of input.
pub type Packet = [u8; PACKET_SIZE];

/// Bytes consumed by a single [`SipHashState::update`].
pub const PACKET_SIZE: usize = 8;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// "somepseudorandomlygeneratedbytes", split across the four state words.
const IV: [u64; 4] = [
    0x736f_6d65_7073_6575,
    0x646f_7261_6e64_6f6d,
    0x6c79_6765_6e65_7261,
    0x7465_6462_7974_6573,
];

const ABSORB_ROUNDS: usize = 2;
const FINAL_ROUNDS: usize = 4;

/// XORed into `v2` before the final rounds so an all‑zero input stream does
/// not expose key‑derived state.
const FINAL_MASK: u64 = 0xFF;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Scalar SipHash‑2‑4 state.
///
/// Lifecycle is enforced by ownership: construct with [`SipHashState::new`],
/// absorb any number of packets, then [`SipHashState::finalize`] consumes the
/// state. A state is never reused for a second input.
#[derive(Clone)]
pub struct SipHashState {
    v0: u64,
    v1: u64,
    v2: u64,
    v3: u64,
}

// State words are key‑derived; keep them out of logs and panic messages.
impl fmt::Debug for SipHashState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SipHashState").finish_non_exhaustive()
    }
}

impl SipHashState {
    /// Initialise the four words from `key`. The key is not retained.
    #[inline(always)]
    pub fn new(key: &Key) -> Self {
        Self {
            v0: IV[0] ^ key[0],
            v1: IV[1] ^ key[1],
            v2: IV[2] ^ key[0],
            v3: IV[3] ^ key[1],
        }
    }

    /// Absorb one 8‑byte packet. Short trailing input must already be
    /// zero‑padded by the caller.
    #[inline(always)]
    pub fn update(&mut self, packet: &Packet) {
        let m = u64::from_le_bytes(*packet);

        self.v3 ^= m;
        self.compress::<ABSORB_ROUNDS>();
        self.v0 ^= m;
    }

    /// Run the final rounds and return the 64‑bit digest.
    #[inline(always)]
    pub fn finalize(mut self) -> u64 {
        self.v2 ^= FINAL_MASK;
        self.compress::<FINAL_ROUNDS>();

        (self.v0 ^ self.v1) ^ (self.v2 ^ self.v3)
    }

    /// `ROUNDS` SipRounds. Straight‑line ARX with a constant trip count.
    #[inline(always)]
    fn compress<const ROUNDS: usize>(&mut self) {
        for _ in 0..ROUNDS {
            self.v0 = self.v0.wrapping_add(self.v1);
            self.v2 = self.v2.wrapping_add(self.v3);
            self.v1 = self.v1.rotate_left(13);
            self.v3 = self.v3.rotate_left(16);
            self.v1 ^= self.v0;
            self.v3 ^= self.v2;

            self.v0 = self.v0.rotate_left(32);

            self.v2 = self.v2.wrapping_add(self.v1);
            self.v0 = self.v0.wrapping_add(self.v3);
            self.v1 = self.v1.rotate_left(17);
            self.v3 = self.v3.rotate_left(21);
            self.v1 ^= self.v2;
            self.v3 ^= self.v0;

            self.v2 = self.v2.rotate_left(32);
        }
    }
}

impl PacketState for SipHashState {
    type Key = Key;
    type Packet = Packet;
    const PACKET_SIZE: usize = PACKET_SIZE;

    #[inline(always)]
    fn new(key: &Key) -> Self {
        SipHashState::new(key)
    }

    #[inline(always)]
    fn update(&mut self, packet: &Packet) {
        SipHashState::update(self, packet)
    }

    #[inline(always)]
    fn finalize(self) -> u64 {
        SipHashState::finalize(self)
    }
}
