use crate::{Command, DelayLine, Mode, Taps};

/// Multiply-accumulate of signed coefficients and unsigned samples.
///
/// Wraps at 16 bits like the hardware accumulator. No saturation: the
/// raw sum is latched and truncation happens at the output byte.
fn macc(h: &[i8; 4], x: &[u8; 4]) -> i16 {
    h.iter()
        .zip(x)
        .fold(0i32, |y, (h, x)| y + *h as i32 * *x as i32) as i16
}

/// Register-mapped 4-tap FIR filter core
///
/// One synchronous sequential machine: [`Fir4::tick`] consumes one command
/// word per clock cycle and commits the entire next state atomically. All
/// transitions are computed from start-of-cycle register values, classic
/// nonblocking-assignment semantics. There is no partially updated state
/// observable between cycles.
///
/// Cycle-exact behavior:
///
/// * The output register latches every cycle regardless of command type and
///   is observed with one cycle of latency. On a sampling cycle the sum
///   includes the sample that was just shifted in.
/// * A coefficient written this cycle reaches the accumulator only on the
///   next cycle, and the readback multiplexer shows it only after the
///   cycle's commit (read-old semantics for a same-cycle write/readback of
///   the same register).
/// * The valid flag lags the warm-up counter by one cycle: after reset it is
///   false through the first three sampling cycles and latches true on the
///   fourth, or on whatever cycle follows the third sample.
/// * The externally exposed byte is the upper byte of the 16-bit accumulator
///   (arithmetic shift). The low byte of precision, and for some magnitudes
///   the sign, is discarded by design.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Fir4 {
    x: DelayLine<u8, 4>,
    taps: Taps,
    y: i16,
    warmup: u8,
    valid: bool,
    updated: bool,
}

impl Fir4 {
    /// Number of taps
    pub const DEPTH: usize = 4;
    /// The output byte is the accumulator scaled down by this many bits.
    pub const SHIFT: u32 = 8;
    /// Warm-up count at which the valid flag latches true
    const WARM: u8 = 3;

    /// Force all state to its reset values.
    ///
    /// The delay line, accumulator, warm-up counter and flags clear; the
    /// coefficients come up as the moving-average preset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the core by one clock cycle.
    ///
    /// # Args
    /// * `word`: Command word, `[7:6]` opcode and `[5:0]` payload, decoded
    ///   per [`Command::decode`].
    pub fn tick(&mut self, word: u8) {
        let cmd = Command::decode(word);
        // Start-of-cycle coefficients: a write this cycle must not reach
        // this cycle's accumulator.
        let h = self.taps.get();
        // Start-of-cycle counter: the flag lags by one cycle.
        self.valid = self.warmup >= Self::WARM;
        self.updated = cmd.writes();
        match cmd {
            Command::Sample(x0) => {
                self.x.push(x0);
                self.warmup = (self.warmup + 1).min(Self::DEPTH as u8);
            }
            Command::WriteH0(h0) => self.taps.write(0, h0 as i8),
            Command::WriteH1(h1) => self.taps.write(1, h1 as i8),
            Command::Load(mode) => self.taps.load(mode),
            Command::Split { h2, h3 } => {
                self.taps.write(2, h2);
                self.taps.write(3, h3);
            }
        }
        self.y = macc(&h, self.x.get());
    }

    /// The accumulator as latched at the end of the last cycle.
    pub const fn acc(&self) -> i16 {
        self.y
    }

    /// The external output byte: upper byte of the accumulator.
    pub const fn output(&self) -> u8 {
        (self.y >> Self::SHIFT) as u8
    }

    /// Whether the delay line has absorbed a full window of samples.
    pub const fn valid(&self) -> bool {
        self.valid
    }

    /// True for exactly the one cycle following a coefficient or mode write.
    pub const fn updated(&self) -> bool {
        self.updated
    }

    /// Readback multiplexer: live value of the selected coefficient.
    /// Upper select bits are ignored.
    pub const fn readback(&self, select: u8) -> i8 {
        self.taps.readback(select)
    }

    /// Status byte: bit 0 update pulse, bit 1 valid flag, bits `[7:2]`
    /// the low six bits of the selected coefficient.
    pub const fn status(&self, select: u8) -> u8 {
        ((self.readback(select) as u8) << 2)
            | ((self.valid as u8) << 1)
            | self.updated as u8
    }

    /// The last applied preset label
    pub const fn mode(&self) -> Mode {
        self.taps.mode()
    }

    /// Current coefficients, newest tap first
    pub const fn taps(&self) -> [i8; 4] {
        self.taps.get()
    }

    /// Delay line contents, newest first
    pub const fn delay(&self) -> &[u8; 4] {
        self.x.get()
    }
}
