//! CryptoNight Kernel Constants
//!
//! Layout of the 200-byte Keccak state as seen by the memory-hard core:
//!
//! ```text
//! bytes   0..32   explode key material    (blocks 0-1)
//! bytes  32..64   implode key material    (blocks 2-3)
//! bytes  64..192  text window             (blocks 4-11)
//! bytes 192..200  untouched by the core
//! ```

// =============================================================================
// BLOCKS & WINDOWS
// =============================================================================

/// One AES block (scratchpad cell) in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Blocks encrypted per explode/implode step.
pub const WINDOW_BLOCKS: usize = 8;

/// Bytes per explode/implode step.
pub const WINDOW_SIZE: usize = BLOCK_SIZE * WINDOW_BLOCKS;

/// Round keys applied to every text block (no final-round variant).
pub const ROUND_KEYS: usize = 10;

/// Round constants for the four `keygenassist` steps of the key schedule.
pub const KEY_SCHEDULE_RCON: [u8; 4] = [0x01, 0x02, 0x04, 0x08];

// =============================================================================
// KECCAK STATE
// =============================================================================

/// Keccak-f\[1600\] state size in bytes.
pub const STATE_SIZE: usize = 200;

/// Keccak-f\[1600\] state size in 64-bit lanes.
pub const STATE_WORDS: usize = 25;

/// Sponge rate of the absorb step (bytes per permutation).
pub const SPONGE_RATE: usize = 136;

/// Final digest size.
pub const HASH_SIZE: usize = 32;

/// First block of the explode key (bytes 0..32).
pub const EXPLODE_KEY_BLOCK: usize = 0;

/// First block of the implode key (bytes 32..64).
pub const IMPLODE_KEY_BLOCK: usize = 2;

/// First block of the text window (bytes 64..192).
pub const TEXT_BLOCK: usize = 4;

// =============================================================================
// PARAMETER PRESETS
// =============================================================================

/// Standard scratchpad: 2 MiB.
pub const CN_MEMORY: usize = 1 << 21;

/// Standard mixing-loop length.
pub const CN_ITERATIONS: usize = 1 << 19;

/// Lite scratchpad: 1 MiB.
pub const LITE_MEMORY: usize = 1 << 20;

/// Lite mixing-loop length.
pub const LITE_ITERATIONS: usize = 1 << 18;

// =============================================================================
// GF(2^8)
// =============================================================================

/// AES field reduction polynomial (x^8 + x^4 + x^3 + x + 1, low byte).
pub const GF_POLY: u8 = 0x1b;
