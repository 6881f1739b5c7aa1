// Copyright (c) 2026 glyphrain developers

use crossterm::style::Color;

use crate::runtime::{ColorMode, ColorScheme};

fn dist2(a: (u8, u8, u8), b: (u8, u8, u8)) -> i32 {
    let dr = (a.0 as i32) - (b.0 as i32);
    let dg = (a.1 as i32) - (b.1 as i32);
    let db = (a.2 as i32) - (b.2 as i32);
    (dr * dr) + (dg * dg) + (db * db)
}

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn nearest_cube_level(v: u8) -> usize {
    (((v as u16) * 5 + 127) / 255) as usize
}

fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    let (ri, gi, bi) = (
        nearest_cube_level(r),
        nearest_cube_level(g),
        nearest_cube_level(b),
    );
    let cube_idx = (16 + 36 * ri + 6 * gi + bi) as u8;
    let cube_rgb = (CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);

    // Grayscale ramp: indices 232..=255 cover values 8..=238 in steps of 10,
    // with pure black/white snapping to the cube corners.
    let avg = ((r as u16 + g as u16 + b as u16) / 3) as u8;
    let (gray_idx, gray_rgb) = if avg < 8 {
        (16, (0, 0, 0))
    } else if avg > 238 {
        (231, (255, 255, 255))
    } else {
        let step = (avg - 8) / 10;
        let v = 8 + 10 * step;
        (232 + step, (v, v, v))
    };

    let target = (r, g, b);
    if dist2(target, gray_rgb) < dist2(target, cube_rgb) {
        gray_idx
    } else {
        cube_idx
    }
}

fn rgb_to_color16(r: u8, g: u8, b: u8) -> Color {
    const TABLE: [(Color, (u8, u8, u8)); 16] = [
        (Color::Black, (0, 0, 0)),
        (Color::DarkGrey, (128, 128, 128)),
        (Color::Grey, (192, 192, 192)),
        (Color::White, (255, 255, 255)),
        (Color::DarkRed, (128, 0, 0)),
        (Color::Red, (255, 0, 0)),
        (Color::DarkGreen, (0, 128, 0)),
        (Color::Green, (0, 255, 0)),
        (Color::DarkBlue, (0, 0, 128)),
        (Color::Blue, (0, 0, 255)),
        (Color::DarkCyan, (0, 128, 128)),
        (Color::Cyan, (0, 255, 255)),
        (Color::DarkMagenta, (128, 0, 128)),
        (Color::Magenta, (255, 0, 255)),
        (Color::DarkYellow, (128, 128, 0)),
        (Color::Yellow, (255, 255, 0)),
    ];

    TABLE
        .iter()
        .min_by_key(|&&(_, rgb)| dist2((r, g, b), rgb))
        .map(|&(c, _)| c)
        .unwrap_or(Color::White)
}

/// Cell brightness mapped through the scheme's channel mix. Green puts the
/// raw brightness on the green channel, matching the classic effect.
fn scheme_rgb(scheme: ColorScheme, brightness: u8) -> (u8, u8, u8) {
    let b = brightness;
    match scheme {
        ColorScheme::Green => (0, b, 0),
        ColorScheme::Amber => (b, (b as u16 * 3 / 4) as u8, 0),
        ColorScheme::Red => (b, 0, 0),
        ColorScheme::Blue => (0, (b as u16 / 3) as u8, b),
        ColorScheme::Cyan => (0, b, b),
        ColorScheme::Purple => ((b as u16 * 2 / 3) as u8, 0, b),
        ColorScheme::White => (b, b, b),
    }
}

pub fn color_for(mode: ColorMode, scheme: ColorScheme, brightness: u8) -> Option<Color> {
    let (r, g, b) = scheme_rgb(scheme, brightness);
    match mode {
        ColorMode::Mono => None,
        ColorMode::TrueColor => Some(Color::Rgb { r, g, b }),
        ColorMode::Color256 => Some(Color::AnsiValue(rgb_to_ansi256(r, g, b))),
        ColorMode::Color16 => Some(rgb_to_color16(r, g, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn green_truecolor_tracks_brightness() {
        assert_eq!(
            color_for(ColorMode::TrueColor, ColorScheme::Green, 200),
            Some(Color::Rgb { r: 0, g: 200, b: 0 })
        );
    }

    #[test]
    fn mono_has_no_color() {
        assert_eq!(color_for(ColorMode::Mono, ColorScheme::Green, 255), None);
    }

    #[test]
    fn full_green_quantizes_to_cube_green() {
        assert_eq!(
            color_for(ColorMode::Color256, ColorScheme::Green, 255),
            Some(Color::AnsiValue(46))
        );
    }

    #[test]
    fn dark_cells_quantize_toward_black() {
        assert_eq!(
            color_for(ColorMode::Color16, ColorScheme::Green, 0),
            Some(Color::Black)
        );
    }
}
