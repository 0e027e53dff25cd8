//! Generic packet driver
//! =====================
//! Feeds an arbitrary byte slice through any [`PacketState`]: full packets
//! first, then the zero‑padded remainder, then a single `finalize`.
//!
//! Two final‑packet encodings are supported:
//!
//! * [`compute_hash`] zero‑pads the remainder and absorbs it only if it is
//!   non‑empty, so exactly `ceil(len / P) * P` bytes are absorbed.
//! * [`compute_hash_length_tagged`] always absorbs a final packet whose last
//!   byte holds `len mod 256` (standard SipHash message encoding).

/// A hash state that absorbs fixed‑size packets and yields a 64‑bit digest.
pub trait PacketState: Sized {
    /// Key material borrowed during construction.
    type Key: ?Sized;

    /// Fixed‑size packet buffer, `PACKET_SIZE` bytes long.
    type Packet: Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Bytes per packet.
    const PACKET_SIZE: usize;

    fn new(key: &Self::Key) -> Self;

    fn update(&mut self, packet: &Self::Packet);

    fn finalize(self) -> u64;
}

/// Copy `bytes` (at most one packet) into a fresh zeroed packet.
#[inline(always)]
fn padded<S: PacketState>(bytes: &[u8]) -> S::Packet {
    debug_assert!(bytes.len() <= S::PACKET_SIZE);
    let mut packet = S::Packet::default();
    packet.as_mut()[..bytes.len()].copy_from_slice(bytes);
    packet
}

/// Absorb every full packet of `bytes` and return the trailing remainder.
#[inline(always)]
fn absorb_full_packets<'a, S: PacketState>(state: &mut S, bytes: &'a [u8]) -> &'a [u8] {
    let chunks = bytes.chunks_exact(S::PACKET_SIZE);
    let remainder = chunks.remainder();
    for chunk in chunks {
        state.update(&padded::<S>(chunk));
    }
    remainder
}

/// Hash `bytes` with state type `S`, zero‑padding a short final packet.
///
/// Never reads past the end of `bytes`; the padding lives in a stack buffer.
pub fn compute_hash<S: PacketState>(key: &S::Key, bytes: &[u8]) -> u64 {
    let mut state = S::new(key);
    let remainder = absorb_full_packets(&mut state, bytes);
    if !remainder.is_empty() {
        state.update(&padded::<S>(remainder));
    }
    state.finalize()
}

/// Hash `bytes` with state type `S`, always absorbing a final packet whose
/// last byte is the input length modulo 256.
pub fn compute_hash_length_tagged<S: PacketState>(key: &S::Key, bytes: &[u8]) -> u64 {
    let mut state = S::new(key);
    let remainder = absorb_full_packets(&mut state, bytes);

    let mut last = padded::<S>(remainder);
    let buf = last.as_mut();
    buf[S::PACKET_SIZE - 1] = bytes.len() as u8;
    state.update(&last);

    state.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::vec::Vec;

    /// Records every absorbed packet so the driver's framing can be checked.
    struct Recorder {
        packets: Vec<[u8; 4]>,
    }

    impl PacketState for Recorder {
        type Key = ();
        type Packet = [u8; 4];
        const PACKET_SIZE: usize = 4;

        fn new(_: &()) -> Self {
            Recorder {
                packets: Vec::new(),
            }
        }

        fn update(&mut self, packet: &[u8; 4]) {
            self.packets.push(*packet);
        }

        fn finalize(self) -> u64 {
            let mut out = 0u64;
            for p in &self.packets {
                out = out.rotate_left(32) ^ u32::from_le_bytes(*p) as u64;
            }
            out ^ ((self.packets.len() as u64) << 56)
        }
    }

    fn framing(bytes: &[u8], tagged: bool) -> Vec<[u8; 4]> {
        let mut state = Recorder::new(&());
        let rem = absorb_full_packets(&mut state, bytes);
        if tagged {
            let mut last = padded::<Recorder>(rem);
            last[3] = bytes.len() as u8;
            state.update(&last);
        } else if !rem.is_empty() {
            state.update(&padded::<Recorder>(rem));
        }
        state.packets
    }

    #[test]
    fn empty_input_absorbs_nothing() {
        assert!(framing(&[], false).is_empty());
        assert_eq!(
            compute_hash::<Recorder>(&(), &[]),
            Recorder::new(&()).finalize()
        );
    }

    #[test]
    fn short_tail_is_zero_padded() {
        assert_eq!(
            framing(&[1, 2, 3, 4, 5, 6], false),
            [[1, 2, 3, 4], [5, 6, 0, 0]]
        );
    }

    #[test]
    fn exact_multiple_has_no_extra_packet() {
        assert_eq!(framing(&[9; 8], false).len(), 2);
    }

    #[test]
    fn length_tag_always_adds_final_packet() {
        assert_eq!(framing(&[], true), [[0, 0, 0, 0]]);
        assert_eq!(framing(&[7; 4], true), [[7; 4], [0, 0, 0, 4]]);
        assert_eq!(framing(&[1, 2], true), [[1, 2, 0, 2]]);
    }

    #[test]
    fn drivers_agree_with_manual_framing() {
        let data: Vec<u8> = (0..23).collect();
        let manual = |packets: Vec<[u8; 4]>| {
            let mut s = Recorder::new(&());
            for p in &packets {
                s.update(p);
            }
            s.finalize()
        };
        assert_eq!(
            compute_hash::<Recorder>(&(), &data),
            manual(framing(&data, false))
        );
        assert_eq!(
            compute_hash_length_tagged::<Recorder>(&(), &data),
            manual(framing(&data, true))
        );
    }
}
