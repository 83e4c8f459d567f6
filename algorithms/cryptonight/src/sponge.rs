//! Keccak sponge front end.
//!
//! Original Keccak padding (`0x01 .. 0x80`, not the SHA-3 `0x06` domain byte)
//! at rate 136, squeezed as the whole 200-byte state rather than a digest.

use crate::context::HashState;
use crate::kernels::constants::STATE_SIZE;
use sha3::Digest;

/// Incremental absorber producing the initial `HashState`.
pub type Sponge = sha3::Keccak256Full;

/// Pad, absorb the final block and return the permuted state.
#[must_use]
pub fn squeeze(sponge: Sponge) -> HashState {
    let mut bytes = [0u8; STATE_SIZE];
    bytes.copy_from_slice(&sponge.finalize());
    HashState::from_bytes(&bytes)
}

/// Absorb `input` in one call.
#[must_use]
pub fn absorb(input: &[u8]) -> HashState {
    squeeze(Sponge::new_with_prefix(input))
}

/// Apply Keccak-f\[1600\] in place.
pub fn permute(state: &mut HashState) {
    keccak::f1600(state.words_mut());
}
