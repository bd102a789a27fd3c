use crate::consts::{BLACK_PAWN_PAD, WHITE_PAWN_LED, WHITE_PAWN_PAD};
use crate::error::FlashError;
use rppal::pwm;
use std::fmt;
use std::str::FromStr;

#[cfg(all(feature = "black_pawn", feature = "white_pawn"))]
compile_error!("features `black_pawn` and `white_pawn` are mutually exclusive");

#[cfg(not(any(feature = "black_pawn", feature = "white_pawn")))]
compile_error!("enable one of the `black_pawn` or `white_pawn` features");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrumId {
    BlackPawn,
    WhitePawn,
}

/// Where a drum's LED is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedWiring {
    Pwm(pwm::Channel),
    Gpio(u8),
}

impl DrumId {
    #[cfg(feature = "black_pawn")]
    pub const CURRENT: Self = Self::BlackPawn;
    #[cfg(all(feature = "white_pawn", not(feature = "black_pawn")))]
    pub const CURRENT: Self = Self::WhitePawn;

    pub const ALL: [Self; 2] = [Self::BlackPawn, Self::WhitePawn];

    pub fn name(self) -> &'static str {
        match self {
            Self::BlackPawn => "black_pawn",
            Self::WhitePawn => "white_pawn",
        }
    }

    /// BCM pin of the pad's hit sensor.
    pub fn pad_pin(self) -> u8 {
        match self {
            Self::BlackPawn => BLACK_PAWN_PAD,
            Self::WhitePawn => WHITE_PAWN_PAD,
        }
    }

    pub fn led_wiring(self) -> LedWiring {
        match self {
            Self::BlackPawn => LedWiring::Pwm(pwm::Channel::Pwm0),
            Self::WhitePawn => LedWiring::Gpio(WHITE_PAWN_LED),
        }
    }
}

impl fmt::Display for DrumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrumId {
    type Err = FlashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|drum| drum.name() == s)
            .ok_or_else(|| FlashError::UnknownDrum(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawns_are_distinct() {
        assert_ne!(DrumId::BlackPawn, DrumId::WhitePawn);
        assert_ne!(DrumId::BlackPawn.pad_pin(), DrumId::WhitePawn.pad_pin());
    }

    #[test]
    fn names_parse_back() {
        for drum in DrumId::ALL {
            assert_eq!(drum.to_string().parse::<DrumId>(), Ok(drum));
        }
        assert_eq!(
            "rook".parse::<DrumId>(),
            Err(FlashError::UnknownDrum("rook".to_string()))
        );
    }

    #[test]
    fn black_pawn_uses_hardware_pwm() {
        assert_eq!(
            DrumId::BlackPawn.led_wiring(),
            LedWiring::Pwm(pwm::Channel::Pwm0)
        );
        assert_eq!(
            DrumId::WhitePawn.led_wiring(),
            LedWiring::Gpio(WHITE_PAWN_LED)
        );
    }

    #[cfg(feature = "black_pawn")]
    #[test]
    fn default_build_is_black_pawn() {
        assert_eq!(DrumId::CURRENT, DrumId::BlackPawn);
    }
}
