use miniconf::{Leaf, Tree};
use serde::{Deserialize, Serialize};

/// Coefficient preset label
///
/// The wire encoding is the 2-bit mode field of a mode-load command.
/// Loading a preset replaces all four coefficients atomically; individually
/// written coefficients afterwards do not change the label back (see
/// [`Taps`]).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::FromRepr,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[repr(u8)]
pub enum Mode {
    /// Pass the newest sample through unchanged
    Bypass = 0,
    /// Unweighted average of the last four samples
    #[default]
    MovingAverage = 1,
    /// Weighted lowpass
    Lowpass = 2,
    /// First difference highpass/edge detector
    Highpass = 3,
}

impl Mode {
    /// Decode a 2-bit mode field. Upper bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 3 {
            0 => Self::Bypass,
            1 => Self::MovingAverage,
            2 => Self::Lowpass,
            _ => Self::Highpass,
        }
    }

    /// The preset coefficients, newest tap first.
    pub const fn taps(&self) -> [i8; 4] {
        match self {
            Self::Bypass => [1, 0, 0, 0],
            Self::MovingAverage => [1, 1, 1, 1],
            Self::Lowpass => [4, 2, 1, 1],
            Self::Highpass => [1, -1, 0, 0],
        }
    }
}

/// Mode index out of range
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid mode index {0}")]
pub struct InvalidMode(pub u8);

impl TryFrom<u8> for Mode {
    type Error = InvalidMode;

    /// Strict conversion: unlike [`Mode::from_bits`] this rejects
    /// out-of-range indices instead of masking them.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or(InvalidMode(value))
    }
}

/// Coefficient/mode register file
///
/// Four individually writable signed coefficients plus the label of the last
/// applied preset. The label is not re-validated: writing a coefficient after
/// a preset load leaves label and contents diverged. Downstream users rely on
/// being able to do exactly that.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taps {
    h: [i8; 4],
    mode: Mode,
}

impl Default for Taps {
    /// Comes up as the moving-average preset.
    fn default() -> Self {
        let mode = Mode::default();
        Self {
            h: mode.taps(),
            mode,
        }
    }
}

impl Taps {
    /// Current coefficients, newest tap first.
    pub const fn get(&self) -> [i8; 4] {
        self.h
    }

    /// The last applied preset label.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Write one coefficient. The index is taken modulo four.
    /// The mode label is left untouched.
    pub fn write(&mut self, i: usize, h: i8) {
        self.h[i & 3] = h;
    }

    /// Load a preset: all four coefficients and the label, in one cycle.
    pub fn load(&mut self, mode: Mode) {
        self.mode = mode;
        self.h = mode.taps();
    }

    /// Readback multiplexer: the selected coefficient's live value.
    /// Upper select bits are ignored.
    pub const fn readback(&self, select: u8) -> i8 {
        self.h[(select & 3) as usize]
    }
}

/// Runtime representation of a tap configuration
///
/// Settings-tree analog of the wire commands: either a preset by name or a
/// raw coefficient array.
#[derive(
    Debug,
    Clone,
    Tree,
    strum::EnumString,
    strum::AsRefStr,
    strum::FromRepr,
    strum::IntoStaticStr,
)]
pub enum TapsRepr {
    /// A named preset
    Preset(Leaf<Mode>),
    /// Raw signed coefficients, newest tap first
    Raw(Leaf<[i8; 4]>),
}

impl Default for TapsRepr {
    fn default() -> Self {
        Self::Preset(Leaf(Mode::default()))
    }
}

impl TapsRepr {
    /// Build the coefficient array.
    pub fn build(&self) -> [i8; 4] {
        match self {
            Self::Preset(Leaf(mode)) => mode.taps(),
            Self::Raw(Leaf(raw)) => *raw,
        }
    }
}
