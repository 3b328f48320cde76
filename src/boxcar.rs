use crate::DelayLine;

/// Fixed moving-average filter, the non-configurable predecessor of
/// [`Fir4`](crate::Fir4)
///
/// No command decode and no coefficient registers: every cycle shifts in a
/// sample and latches `(x0 + x1 + x2 + x3) >> 2` into the output register.
/// Same one-cycle pipeline latency as the configurable core; the sum
/// includes the sample shifted in this cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Boxcar {
    x: DelayLine<u8, 4>,
    y: u8,
}

impl Boxcar {
    /// Advance one clock cycle with a new sample.
    pub fn tick(&mut self, x0: u8) {
        self.x.push(x0);
        let sum = self.x.get().iter().map(|x| *x as u16).sum::<u16>();
        self.y = (sum >> 2) as u8;
    }

    /// The averaged output as latched at the end of the last cycle.
    pub const fn output(&self) -> u8 {
        self.y
    }

    /// Force all state to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{Fir4, testing::sample};

    #[test]
    fn regression_trace() {
        let mut b = Boxcar::default();
        for (x, y) in [(4, 1), (8, 3), (12, 6), (16, 10), (0, 9), (0, 7)] {
            b.tick(x);
            assert_eq!(b.output(), y);
        }
    }

    #[test]
    fn reset_clears() {
        let mut b = Boxcar::default();
        b.tick(200);
        b.reset();
        assert_eq!(b, Boxcar::default());
    }

    #[quickcheck]
    fn matches_configurable_core(xs: Vec<u8>) -> bool {
        let mut b = Boxcar::default();
        // Fir4 comes up in moving-average mode; its accumulator is the
        // unscaled sum.
        let mut f = Fir4::default();
        xs.iter().all(|x| {
            let x = x & 0x3f;
            b.tick(x);
            f.tick(sample(x));
            b.output() as i16 == f.acc() >> 2
        })
    }
}
