use num_traits::Zero;

/// Shift register holding the `N` most recent samples, newest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DelayLine<T, const N: usize> {
    x: [T; N],
}

impl<T: Copy + Zero, const N: usize> Default for DelayLine<T, N> {
    fn default() -> Self {
        Self { x: [T::zero(); N] }
    }
}

impl<T: Copy + Zero, const N: usize> DelayLine<T, N> {
    /// Shift in a new sample, discarding the oldest.
    pub fn push(&mut self, x0: T) {
        // This unrolls better than rotate_right(1)
        self.x.copy_within(0..N - 1, 1);
        self.x[0] = x0;
    }

    /// Clear to all-zero.
    pub fn clear(&mut self) {
        self.x = [T::zero(); N];
    }
}

impl<T, const N: usize> DelayLine<T, N> {
    /// The current contents, newest first.
    pub const fn get(&self) -> &[T; N] {
        &self.x
    }
}
