use serde::{Deserialize, Serialize};

use crate::Mode;

/// Decoded command word
///
/// The wire format is `[7:6]` opcode, `[5:0]` payload:
///
/// | Opcode | Action |
/// |---|---|
/// | `00` | shift the zero-extended payload into the delay line |
/// | `01` | write the zero-extended payload to h0 |
/// | `10` | write the zero-extended payload to h1 |
/// | `11`, payload bit 3 set | load the preset in payload bits `[5:4]` |
/// | `11`, payload bit 3 clear | split write to h2/h3 (see [`Command::Split`]) |
///
/// The decode is total: every word maps to a defined action and is performed
/// freshly each cycle. There is no armed state carried between words.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Shift a new sample into the delay line
    Sample(u8),
    /// Write h0. Unsigned-valued: negative coefficients for the first
    /// two taps are only reachable through presets.
    WriteH0(u8),
    /// Write h1, unsigned-valued like [`Command::WriteH0`]
    WriteH1(u8),
    /// Load a preset and update the mode label
    Load(Mode),
    /// Legacy split write: payload bits `[5:3]` land in h2 bits `[7:5]`,
    /// payload bits `[2:0]` in h3 bits `[2:0]`, all other bits forced
    /// to zero. Bit 3 doubles as the sub-opcode, so h2 bit 5 is always
    /// clear on this path.
    Split {
        /// New h2 value
        h2: i8,
        /// New h3 value
        h3: i8,
    },
}

impl Command {
    /// Decode a command word.
    pub const fn decode(word: u8) -> Self {
        let payload = word & 0x3f;
        match word >> 6 {
            0 => Self::Sample(payload),
            1 => Self::WriteH0(payload),
            2 => Self::WriteH1(payload),
            _ => {
                if payload & 0x08 != 0 {
                    Self::Load(Mode::from_bits(payload >> 4))
                } else {
                    Self::Split {
                        h2: ((payload & 0x38) << 2) as i8,
                        h3: (payload & 0x07) as i8,
                    }
                }
            }
        }
    }

    /// Whether this command commits a coefficient or mode write.
    pub const fn writes(&self) -> bool {
        !matches!(self, Self::Sample(_))
    }
}
