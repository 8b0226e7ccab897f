//! Random source used for card and winner selection.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Minimal randomness capability needed by the engine.
///
/// The game only ever asks for a uniformly random index, so tests can swap in a
/// fake that forces specific draws or round winners.
pub trait RandomSource {
    /// Returns an index in `0..len`.
    ///
    /// Callers never pass `len == 0`. The engine clamps answers past the end
    /// to `len - 1`.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl RandomSource for ChaCha8Rng {
    fn choose_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Asks `rng` for an index in `0..len`, clamping out-of-range answers to the
/// last index.
pub(crate) fn pick_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    let index = rng.choose_index(len);
    if index < len {
        index
    } else {
        log::warn!("random source returned {index} for {len} choices, using {}", len - 1);
        len - 1
    }
}
