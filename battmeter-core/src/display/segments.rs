//! Seven-segment glyph table
//!
//! Segment order, bit 0 first:
//!
//! ```text
//!  aaa
//! f   b
//!  ggg
//! e   c
//!  ddd
//! ```

/// Segment patterns for the digits 0-9 (bit 0 = a ... bit 6 = g)
pub const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// All segments off
pub const BLANK: u8 = 0;

/// Bits used by one digit
pub const SEGMENT_MASK: u8 = 0x7F;

/// Segment pattern for the last decimal digit of `digit`
pub fn segments_for(digit: u8) -> u8 {
    DIGIT_SEGMENTS[usize::from(digit % 10)]
}

/// Digit shown by a segment pattern, if it is one of the table entries
pub fn digit_for(segments: u8) -> Option<u8> {
    DIGIT_SEGMENTS
        .iter()
        .position(|&pattern| pattern == segments)
        .map(|digit| digit as u8)
}
