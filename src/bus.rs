use serde::{Deserialize, Serialize};

use crate::Fir4;

/// Direction mask of the shared status/select bus: bits `[7:2]` are driven
/// by the core, bits `[1:0]` by the host (the readback select channel).
/// Any embedding must preserve this split.
pub const STATUS_DIR: u8 = 0xfc;

/// Input pins, sampled once per cycle
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusIn {
    /// Command word
    pub cmd: u8,
    /// Readback select channel. Only the low two bits are used.
    pub select: u8,
    /// Accepted but must not affect any computed value
    pub enable: bool,
    /// Active-low synchronous reset
    pub reset_n: bool,
}

impl Default for BusIn {
    fn default() -> Self {
        Self {
            cmd: 0,
            select: 0,
            enable: true,
            reset_n: true,
        }
    }
}

/// Output pins, driven once per cycle
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusOut {
    /// Pipelined, truncated filter result
    pub filtered: u8,
    /// Packed status/readback byte. Bits `[1:0]` carry the update pulse
    /// and valid flag but are masked off the physical bus by
    /// [`STATUS_DIR`].
    pub status: u8,
    /// Direction mask, always [`STATUS_DIR`]
    pub dir: u8,
}

/// Pin-level embedding of [`Fir4`]
///
/// One [`Fir4Bus::step`] call per clock cycle. While `reset_n` is low the
/// cycle initializes all state instead of decoding the command; outputs are
/// valid from the first cycle after release.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Fir4Bus {
    core: Fir4,
}

impl Fir4Bus {
    /// Advance one clock cycle and drive the output pins.
    pub fn step(&mut self, pins: BusIn) -> BusOut {
        if pins.reset_n {
            self.core.tick(pins.cmd);
        } else {
            self.core.reset();
        }
        BusOut {
            filtered: self.core.output(),
            status: self.core.status(pins.select),
            dir: STATUS_DIR,
        }
    }

    /// The embedded core
    pub const fn core(&self) -> &Fir4 {
        &self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample, write_h0};

    #[test]
    fn reset_overrides_command() {
        let mut b = Fir4Bus::default();
        b.step(BusIn {
            cmd: sample(63),
            ..Default::default()
        });
        let out = b.step(BusIn {
            cmd: write_h0(9),
            reset_n: false,
            ..Default::default()
        });
        assert_eq!(out.filtered, 0);
        // Coefficients are back at the moving-average preset
        assert_eq!(out.status, 1 << 2);
        assert_eq!(b.core().delay(), &[0; 4]);
        assert_eq!(b.core().readback(0), 1);
    }

    #[test]
    fn enable_has_no_effect() {
        let mut a = Fir4Bus::default();
        let mut b = Fir4Bus::default();
        for cmd in [sample(16), write_h0(3), sample(40), sample(2)] {
            let x = a.step(BusIn {
                cmd,
                enable: true,
                ..Default::default()
            });
            let y = b.step(BusIn {
                cmd,
                enable: false,
                ..Default::default()
            });
            assert_eq!(x, y);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn select_upper_bits_ignored() {
        let mut b = Fir4Bus::default();
        b.step(BusIn {
            cmd: write_h0(21),
            ..Default::default()
        });
        let lo = b.step(BusIn {
            select: 0,
            ..Default::default()
        });
        let hi = b.step(BusIn {
            select: 0xfc,
            ..Default::default()
        });
        assert_eq!(lo.status >> 2, 21);
        assert_eq!(lo.status, hi.status);
    }

    #[test]
    fn direction_mask_is_fixed() {
        let mut b = Fir4Bus::default();
        for cmd in 0..=u8::MAX {
            let out = b.step(BusIn {
                cmd,
                ..Default::default()
            });
            assert_eq!(out.dir, STATUS_DIR);
        }
    }
}
