//! Helvetica text metrics for centered lines
//!
//! Advance widths for the printable ASCII range of the standard-14
//! Helvetica face, in 1/1000 em units.

const FIRST_CHAR: u32 = 0x20;

#[rustfmt::skip]
const WIDTHS: [u16; 95] = [
    // 0x20 ' ' .. 0x2F '/'
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0x30 '0' .. 0x3F '?'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // 0x40 '@' .. 0x4F 'O'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 0x50 'P' .. 0x5F '_'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // 0x60 '`' .. 0x6F 'o'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 0x70 'p' .. 0x7E '~'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const DEFAULT_WIDTH: u16 = 556;

/// Rendered width of a line at the given font size, in points
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as u32;
            if (FIRST_CHAR..FIRST_CHAR + WIDTHS.len() as u32).contains(&code) {
                WIDTHS[(code - FIRST_CHAR) as usize] as u32
            } else {
                DEFAULT_WIDTH as u32
            }
        })
        .sum();
    units as f32 * font_size / 1000.0
}

/// Left edge that centers a line on the page
pub fn centered_x(text: &str, font_size: f32, page_width: f32) -> f32 {
    (page_width - text_width(text, font_size)) / 2.0
}
