//! Battery reading to display word
//!
//! Decimal digits are extracted with real `/ 10` and `% 10`; right shifts
//! only divide by powers of two, so the shift trick used for the percent
//! conversion does not apply here.

use super::word::{DigitPosition, DisplayWord, DECIMAL_POINT, PERCENT_SIGN, VOLTS_UNIT};
use crate::battery::{BatteryReading, DisplayMode};

/// Lowest percentage that lights each bar, bar 1 first
pub const BAR_THRESHOLDS: [u8; 5] = [5, 30, 50, 70, 90];

/// Encode a reading into the display register word
///
/// Total: every reading maps to a word, and every interpreted bit of the
/// word is set or cleared by this function.
pub fn encode(reading: BatteryReading) -> DisplayWord {
    let word = match reading.mode() {
        DisplayMode::Voltage => encode_voltage(reading.millivolts()),
        DisplayMode::Percent => encode_percent(reading.percent()),
    };
    word.with_bars(bar_bits(reading.percent()))
}

/// Cumulative bar bits for a percentage, bar 1 in bit 0
pub fn bar_bits(percent: u8) -> u8 {
    let lit = BAR_THRESHOLDS
        .iter()
        .filter(|&&threshold| percent >= threshold)
        .count();
    ((1u16 << lit) - 1) as u8
}

/// Show volts with two decimals, e.g. 3087 mV as `3.09`
///
/// The dropped millivolt digit rounds half up; a carry out of the
/// hundredths digit ripples into the higher digits.
fn encode_voltage(millivolts: u32) -> DisplayWord {
    let extra = millivolts % 10;
    let mut centivolts = millivolts / 10;
    if extra >= 5 {
        centivolts += 1;
    }

    DisplayWord::BLANK
        .with_indicator(VOLTS_UNIT | DECIMAL_POINT)
        .with_digit(DigitPosition::Right, (centivolts % 10) as u8)
        .with_digit(DigitPosition::Middle, (centivolts / 10 % 10) as u8)
        .with_digit(DigitPosition::Left, (centivolts / 100 % 10) as u8)
}

/// Show the percentage with leading zeros blanked
fn encode_percent(percent: u8) -> DisplayWord {
    let word = DisplayWord::BLANK
        .with_indicator(PERCENT_SIGN)
        .with_digit(DigitPosition::Right, percent % 10);

    match percent {
        100..=u8::MAX => word
            .with_digit(DigitPosition::Middle, percent / 10 % 10)
            .with_digit(DigitPosition::Left, percent / 100 % 10),
        10..=99 => word.with_digit(DigitPosition::Middle, percent / 10),
        _ => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::segments::segments_for;
    use proptest::prelude::*;

    fn percent_reading(millivolts: u32) -> BatteryReading {
        BatteryReading::from_millivolts(millivolts, DisplayMode::Percent)
    }

    fn voltage_reading(millivolts: u32) -> BatteryReading {
        BatteryReading::from_millivolts(millivolts, DisplayMode::Voltage)
    }

    fn digits(word: DisplayWord) -> [Option<u8>; 3] {
        DigitPosition::ALL.map(|position| word.digit(position))
    }

    #[test]
    fn test_percent_single_digit() {
        // 3056 mV -> 7%
        let reading = percent_reading(3056);
        assert_eq!(reading.percent(), 7);

        let word = encode(reading);
        assert_eq!(digits(word), [None, None, Some(7)]);
        assert_eq!(word.segments(DigitPosition::Left), 0);
        assert_eq!(word.segments(DigitPosition::Middle), 0);
        assert_eq!(word.indicator(), PERCENT_SIGN);
    }

    #[test]
    fn test_percent_two_digits() {
        // 3336 mV -> 42%
        let reading = percent_reading(3336);
        assert_eq!(reading.percent(), 42);

        let word = encode(reading);
        assert_eq!(digits(word), [None, Some(4), Some(2)]);
        assert_eq!(word.segments(DigitPosition::Left), 0);
    }

    #[test]
    fn test_percent_full() {
        let word = encode(percent_reading(4200));
        assert_eq!(digits(word), [Some(1), Some(0), Some(0)]);
        assert_eq!(word.render().as_str(), "100% [#####]");
    }

    #[test]
    fn test_percent_zero_shows_single_zero() {
        let word = encode(percent_reading(2500));
        assert_eq!(digits(word), [None, None, Some(0)]);
        assert_eq!(word.bars(), 0);
    }

    #[test]
    fn test_voltage_rounds_up() {
        let word = encode(voltage_reading(3087));

        // Unrounded hundredths digit would be 8
        assert_eq!(word.digit(DigitPosition::Right), Some(9));
        assert_eq!(digits(word), [Some(3), Some(0), Some(9)]);
        assert_eq!(word.indicator(), VOLTS_UNIT | DECIMAL_POINT);
        assert_eq!(word.render().as_str(), "3.09V [#    ]");
    }

    #[test]
    fn test_voltage_rounds_down() {
        let word = encode(voltage_reading(3084));
        assert_eq!(digits(word), [Some(3), Some(0), Some(8)]);
    }

    #[test]
    fn test_voltage_rounding_carries() {
        let word = encode(voltage_reading(3097));
        assert_eq!(digits(word), [Some(3), Some(1), Some(0)]);

        let word = encode(voltage_reading(3995));
        assert_eq!(digits(word), [Some(4), Some(0), Some(0)]);
    }

    #[test]
    fn test_voltage_mode_bars_follow_percent() {
        // 3900 mV -> 100%
        let word = encode(voltage_reading(3900));
        assert_eq!(word.bar_count(), 5);

        let word = encode(voltage_reading(3100));
        assert_eq!(word.bar_count(), 1);
    }

    #[test]
    fn test_bar_thresholds() {
        assert_eq!(bar_bits(0), 0b00000);
        assert_eq!(bar_bits(4), 0b00000);
        assert_eq!(bar_bits(5), 0b00001);
        assert_eq!(bar_bits(29), 0b00001);
        assert_eq!(bar_bits(30), 0b00011);
        assert_eq!(bar_bits(49), 0b00011);
        assert_eq!(bar_bits(50), 0b00111);
        assert_eq!(bar_bits(69), 0b00111);
        assert_eq!(bar_bits(70), 0b01111);
        assert_eq!(bar_bits(89), 0b01111);
        assert_eq!(bar_bits(90), 0b11111);
        assert_eq!(bar_bits(100), 0b11111);
    }

    #[test]
    fn test_end_to_end_word() {
        // Port value 6200 -> 3100 mV -> 12%
        let reading = BatteryReading::from_raw(6200, 0).unwrap();
        let word = encode(reading);

        let expected = u32::from(PERCENT_SIGN)
            | u32::from(segments_for(2)) << DigitPosition::Right.shift()
            | u32::from(segments_for(1)) << DigitPosition::Middle.shift()
            | 0b00001 << 24;
        assert_eq!(word.bits(), expected);
        assert_eq!(word.bits(), 0x0100_1AD9);
    }

    #[test]
    fn test_encoder_is_total() {
        for millivolts in [0, 9, 10, 9_995, 99_999, u32::MAX / 2, u32::MAX] {
            for reading in [percent_reading(millivolts), voltage_reading(millivolts)] {
                let word = encode(reading);
                assert_eq!(word.bits() >> 29, 0);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_bars_are_cumulative(percent in 0u8..100) {
            let here = bar_bits(percent);
            let next = bar_bits(percent + 1);
            prop_assert_eq!(here & next, here);
            // Contiguous from bar 1
            prop_assert_eq!(here & (here + 1), 0);
        }

        #[test]
        fn prop_percent_digits_match_value(millivolts in 0u32..10_000) {
            let reading = percent_reading(millivolts);
            let word = encode(reading);
            let value = digits(word)
                .iter()
                .flatten()
                .fold(0u32, |acc, &d| acc * 10 + u32::from(d));
            prop_assert_eq!(value, u32::from(reading.percent()));
            prop_assert_eq!(word.indicator(), PERCENT_SIGN);
        }

        #[test]
        fn prop_voltage_digits_are_rounded_centivolts(millivolts in 0u32..10_000) {
            let word = encode(voltage_reading(millivolts));
            let shown = digits(word)
                .iter()
                .map(|d| d.map(u32::from))
                .collect::<Option<Vec<_>>>();
            prop_assert!(shown.is_some());
            let shown = shown.unwrap_or_default();
            let value = shown[0] * 100 + shown[1] * 10 + shown[2];
            prop_assert_eq!(value, (millivolts + 5) / 10 % 1000);
        }

        #[test]
        fn prop_word_only_uses_defined_bits(millivolts in any::<u32>(), charging in any::<bool>()) {
            let mode = if charging { DisplayMode::Voltage } else { DisplayMode::Percent };
            let word = encode(BatteryReading::from_millivolts(millivolts, mode));
            prop_assert_eq!(word.bits() >> 29, 0);
        }
    }
}
