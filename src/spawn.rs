//! Obstacle generator.
//!
//! Every frame tick the rightmost column receives new content from a uniform
//! draw over `{0, 1, 2, 3}`:
//!
//! | Draw | Top row | Bottom row |
//! |------|---------|------------|
//! | 0 | obstacle | empty |
//! | 1 | empty | obstacle |
//! | 2, 3 | empty | empty |
//!
//! Half of all columns stay empty. This is deliberately not a three-way split.

/// Content of the next spawned column.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Spawn {
    /// Obstacle in the top row.
    Top,
    /// Obstacle in the bottom row.
    Bottom,
    /// No obstacle.
    Clear,
}

impl Spawn {
    /// Number of distinct draw values.
    pub const DRAW_RANGE: u32 = 4;

    /// Map a draw in `0..4` to column content. Values above 3 count as clear.
    #[inline]
    pub const fn from_draw(draw: u8) -> Self {
        match draw {
            0 => Self::Top,
            1 => Self::Bottom,
            _ => Self::Clear,
        }
    }
}

/// Source of spawn decisions.
pub trait SpawnSource {
    /// Decide the content of the next rightmost column.
    fn next_spawn(&mut self) -> Spawn;

    /// Reseed from an entropy value (the start gesture timestamp).
    fn reseed(
        &mut self,
        _seed: u32,
    ) {
    }
}

/// xorshift32 PRNG.
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator. A zero seed would lock the generator at zero, so
    /// it is replaced with 1.
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Generate the next `u32`.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl SpawnSource for XorShift32 {
    fn next_spawn(&mut self) -> Spawn { Spawn::from_draw((self.next_u32() % Spawn::DRAW_RANGE) as u8) }

    fn reseed(
        &mut self,
        seed: u32,
    ) {
        *self = Self::new(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_mapping() {
        assert_eq!(Spawn::from_draw(0), Spawn::Top);
        assert_eq!(Spawn::from_draw(1), Spawn::Bottom);
        assert_eq!(Spawn::from_draw(2), Spawn::Clear);
        assert_eq!(Spawn::from_draw(3), Spawn::Clear);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0, "zero state would repeat forever");
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = XorShift32::new(1234);
        let mut b = XorShift32::new(1234);
        for _ in 0..32 {
            assert_eq!(a.next_spawn(), b.next_spawn());
        }
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut a = XorShift32::new(99);
        let first: [Spawn; 8] = core::array::from_fn(|_| a.next_spawn());
        a.reseed(99);
        let again: [Spawn; 8] = core::array::from_fn(|_| a.next_spawn());
        assert_eq!(first, again);
    }

    #[test]
    fn test_distribution_is_half_clear() {
        let mut rng = XorShift32::new(0xDEAD_BEEF);
        let (mut top, mut bottom, mut clear) = (0u32, 0u32, 0u32);
        for _ in 0..40_000 {
            match rng.next_spawn() {
                Spawn::Top => top += 1,
                Spawn::Bottom => bottom += 1,
                Spawn::Clear => clear += 1,
            }
        }
        // Expected 10k / 10k / 20k; allow a few percent of slack
        assert!((9_000..11_000).contains(&top), "top: {top}");
        assert!((9_000..11_000).contains(&bottom), "bottom: {bottom}");
        assert!((19_000..21_000).contains(&clear), "clear: {clear}");
    }
}
