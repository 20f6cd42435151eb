use alloy_primitives::{Address, Bytes, FixedBytes, I256, U256};
use rand::Rng;
use rand::distributions::Alphanumeric;

/// Bounds applied while randomizing variable-length fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Upper bound (inclusive) on sequence, byte-string and string lengths.
    pub max_sequence_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_sequence_len: 255,
        }
    }
}

impl Limits {
    fn len<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..=self.max_sequence_len)
    }
}

/// Overwrite every field of `self` with a random, structurally valid value.
///
/// `self` acts as the shape template: records keep their layout, scalars get
/// a uniform value over their full width, and sequences are rebuilt with a
/// random length.
pub trait Randomize {
    fn randomize<R: Rng>(&mut self, rng: &mut R, limits: &Limits);
}

macro_rules! impl_randomize_uniform {
    ($($ty:ty),+) => {$(
        impl Randomize for $ty {
            fn randomize<R: Rng>(&mut self, rng: &mut R, _limits: &Limits) {
                *self = rng.r#gen();
            }
        }
    )+};
}

impl_randomize_uniform!(bool, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Randomize for U256 {
    fn randomize<R: Rng>(&mut self, rng: &mut R, _limits: &Limits) {
        *self = U256::from_be_bytes(rng.r#gen::<[u8; 32]>());
    }
}

impl Randomize for I256 {
    fn randomize<R: Rng>(&mut self, rng: &mut R, _limits: &Limits) {
        *self = I256::from_raw(U256::from_be_bytes(rng.r#gen::<[u8; 32]>()));
    }
}

impl Randomize for Address {
    fn randomize<R: Rng>(&mut self, rng: &mut R, _limits: &Limits) {
        *self = Address::from(rng.r#gen::<[u8; 20]>());
    }
}

impl<const N: usize> Randomize for FixedBytes<N> {
    fn randomize<R: Rng>(&mut self, rng: &mut R, _limits: &Limits) {
        rng.fill(&mut self.0[..]);
    }
}

impl Randomize for Bytes {
    fn randomize<R: Rng>(&mut self, rng: &mut R, limits: &Limits) {
        let mut data = vec![0u8; limits.len(rng)];
        rng.fill(&mut data[..]);
        *self = Bytes::from(data);
    }
}

impl Randomize for String {
    fn randomize<R: Rng>(&mut self, rng: &mut R, limits: &Limits) {
        let len = limits.len(rng);
        *self = rng
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
    }
}

impl<T: Randomize + Default> Randomize for Vec<T> {
    fn randomize<R: Rng>(&mut self, rng: &mut R, limits: &Limits) {
        let len = limits.len(rng);
        self.clear();
        self.reserve(len);
        for _ in 0..len {
            let mut element = T::default();
            element.randomize(rng, limits);
            self.push(element);
        }
    }
}

#[cfg(test)]
#[path = "randomize_tests.rs"]
mod tests;
