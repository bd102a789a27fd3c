// Flash timings, all in milliseconds
pub const SHORT_FLASH_ON_MS: u16 = 100;
pub const SHORT_FLASH_OFF_MS: u16 = 25;
pub const MEDIUM_FLASH_ON_MS: u16 = 300;
pub const MEDIUM_FLASH_OFF_MS: u16 = 25;
pub const LONG_FLASH_ON_MS: u16 = 500;
pub const LONG_FLASH_OFF_MS: u16 = 50;

pub const BLACK_PAWN_PAD: u8 = 17; // Pin 11
pub const WHITE_PAWN_PAD: u8 = 27; // Pin 13
pub const WHITE_PAWN_LED: u8 = 12; // Pin 32

pub const LED_PWM_FREQUENCY: f64 = 50.0; // Hz
pub const LED_FULL_BRIGHTNESS: f64 = 1.0;

pub const PAD_DEBOUNCE_MS: u64 = 5;
pub const FLASH_CHANNEL_DEPTH: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timings_match_declared_values() {
        assert_eq!(SHORT_FLASH_ON_MS, 100);
        assert_eq!(SHORT_FLASH_OFF_MS, 25);
        assert_eq!(MEDIUM_FLASH_ON_MS, 300);
        assert_eq!(MEDIUM_FLASH_OFF_MS, 25);
        assert_eq!(LONG_FLASH_ON_MS, 500);
        assert_eq!(LONG_FLASH_OFF_MS, 50);
    }

    #[test]
    fn pads_use_different_pins() {
        assert_ne!(BLACK_PAWN_PAD, WHITE_PAWN_PAD);
        assert_ne!(WHITE_PAWN_PAD, WHITE_PAWN_LED);
    }
}
