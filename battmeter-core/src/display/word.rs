//! Packed display register word

use heapless::String;

use super::segments::{digit_for, segments_for, BLANK, SEGMENT_MASK};

/// Indicator bit: percent sign
pub const PERCENT_SIGN: u8 = 0b001;

/// Indicator bit: volts unit
pub const VOLTS_UNIT: u8 = 0b010;

/// Indicator bit: decimal point after the left digit
pub const DECIMAL_POINT: u8 = 0b100;

const INDICATOR_MASK: u32 = 0b111;
const BARS_SHIFT: u32 = 24;
const BARS_MASK: u32 = 0b1_1111;

/// Number of level bars
pub const BAR_COUNT: u8 = 5;

/// Capacity of [`DisplayWord::render`] output
pub const RENDER_LEN: usize = 16;

/// One of the three seven-segment digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    /// Most significant digit
    Left,
    Middle,
    /// Least significant digit
    Right,
}

impl DigitPosition {
    /// Digits in display order, left to right
    pub const ALL: [DigitPosition; 3] = [
        DigitPosition::Left,
        DigitPosition::Middle,
        DigitPosition::Right,
    ];

    /// Bit offset of the digit group
    pub const fn shift(self) -> u32 {
        match self {
            DigitPosition::Right => 3,
            DigitPosition::Middle => 10,
            DigitPosition::Left => 17,
        }
    }
}

/// Value written to the display register
///
/// Bits above the bar group are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct DisplayWord(u32);

impl DisplayWord {
    /// Everything off
    pub const BLANK: Self = Self(0);

    /// Wrap a raw register value
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw register value
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub(crate) fn with_indicator(self, indicator: u8) -> Self {
        Self(self.0 | (u32::from(indicator) & INDICATOR_MASK))
    }

    pub(crate) fn with_digit(self, position: DigitPosition, digit: u8) -> Self {
        self.with_segments(position, segments_for(digit))
    }

    pub(crate) fn with_segments(self, position: DigitPosition, segments: u8) -> Self {
        Self(self.0 | (u32::from(segments & SEGMENT_MASK) << position.shift()))
    }

    pub(crate) fn with_bars(self, bars: u8) -> Self {
        Self(self.0 | ((u32::from(bars) & BARS_MASK) << BARS_SHIFT))
    }

    /// Indicator group (see [`PERCENT_SIGN`], [`VOLTS_UNIT`], [`DECIMAL_POINT`])
    pub fn indicator(self) -> u8 {
        (self.0 & INDICATOR_MASK) as u8
    }

    /// Raw segment pattern of one digit
    pub fn segments(self, position: DigitPosition) -> u8 {
        ((self.0 >> position.shift()) as u8) & SEGMENT_MASK
    }

    /// Decoded digit, `None` if the group is blank or not a digit glyph
    pub fn digit(self, position: DigitPosition) -> Option<u8> {
        digit_for(self.segments(position))
    }

    /// Bar group, bar 1 in bit 0
    pub fn bars(self) -> u8 {
        ((self.0 >> BARS_SHIFT) & BARS_MASK) as u8
    }

    /// Number of lit bars
    pub fn bar_count(self) -> u8 {
        self.bars().count_ones() as u8
    }

    /// Human-readable rendering for logs, e.g. `"3.09V [#####]"`
    ///
    /// Blank digits render as spaces, unknown glyphs as `?`.
    pub fn render(self) -> String<RENDER_LEN> {
        let mut text = String::new();
        let indicator = self.indicator();

        for position in DigitPosition::ALL {
            let segments = self.segments(position);
            let c = match digit_for(segments) {
                Some(digit) => char::from(b'0' + digit),
                None if segments == BLANK => ' ',
                None => '?',
            };
            push(&mut text, c);
            if position == DigitPosition::Left && indicator & DECIMAL_POINT != 0 {
                push(&mut text, '.');
            }
        }
        if indicator & VOLTS_UNIT != 0 {
            push(&mut text, 'V');
        }
        if indicator & PERCENT_SIGN != 0 {
            push(&mut text, '%');
        }

        push(&mut text, ' ');
        push(&mut text, '[');
        let bars = self.bars();
        for bar in 0..BAR_COUNT {
            push(&mut text, if bars & (1 << bar) != 0 { '#' } else { ' ' });
        }
        push(&mut text, ']');

        text
    }
}

impl From<DisplayWord> for u32 {
    fn from(word: DisplayWord) -> u32 {
        word.0
    }
}

// Longest output is 14 chars, so this never drops anything
fn push(text: &mut String<RENDER_LEN>, c: char) {
    let _ = text.push(c);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_do_not_overlap() {
        let word = DisplayWord::BLANK
            .with_indicator(0xFF)
            .with_segments(DigitPosition::Right, 0xFF)
            .with_segments(DigitPosition::Middle, 0xFF)
            .with_segments(DigitPosition::Left, 0xFF)
            .with_bars(0xFF);

        // Every field saturated fills exactly bits 0..=28
        assert_eq!(word.bits(), (1 << 29) - 1);
    }

    #[test]
    fn test_accessors() {
        let word = DisplayWord::BLANK
            .with_indicator(PERCENT_SIGN)
            .with_digit(DigitPosition::Right, 2)
            .with_digit(DigitPosition::Middle, 4)
            .with_bars(0b00011);

        assert_eq!(word.indicator(), PERCENT_SIGN);
        assert_eq!(word.digit(DigitPosition::Right), Some(2));
        assert_eq!(word.digit(DigitPosition::Middle), Some(4));
        assert_eq!(word.digit(DigitPosition::Left), None);
        assert_eq!(word.segments(DigitPosition::Left), 0);
        assert_eq!(word.bars(), 0b00011);
        assert_eq!(word.bar_count(), 2);
    }

    #[test]
    fn test_render_voltage() {
        let word = DisplayWord::BLANK
            .with_indicator(VOLTS_UNIT | DECIMAL_POINT)
            .with_digit(DigitPosition::Left, 3)
            .with_digit(DigitPosition::Middle, 0)
            .with_digit(DigitPosition::Right, 9)
            .with_bars(0b11111);

        assert_eq!(word.render().as_str(), "3.09V [#####]");
    }

    #[test]
    fn test_render_percent() {
        let word = DisplayWord::BLANK
            .with_indicator(PERCENT_SIGN)
            .with_digit(DigitPosition::Middle, 4)
            .with_digit(DigitPosition::Right, 2)
            .with_bars(0b00011);

        assert_eq!(word.render().as_str(), " 42% [##   ]");
    }

    #[test]
    fn test_render_unknown_glyph() {
        let word = DisplayWord::from_bits(0b100_0000 << DigitPosition::Right.shift());
        assert_eq!(word.render().as_str(), "  ? [     ]");
    }

    #[test]
    fn test_decode_raw_register_value() {
        // 12%, bar 1
        let word = DisplayWord::from_bits(0x0100_1AD9);
        assert_eq!(word.render().as_str(), " 12% [#    ]");
        assert_eq!(u32::from(word), 0x0100_1AD9);
    }
}
