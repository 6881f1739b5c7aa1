// Copyright (c) 2026 glyphrain developers

use std::char;

/// 80 common kanji mixed into the default preset alongside the kana ranges.
const COMMON_KANJI: &str = "一右雨円王音下火花学気九休金空月犬見五口校左三山子四糸字耳七車手十出女小上森人水\
正生青夕石赤千川先早足村大男中虫町天田土二日入年白八百文木本名目立力林六引雲遠何";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Kana,
    Katakana,
    Ascii,
    Digits,
    Binary,
    Hex,
    Greek,
    Cyrillic,
}

/// The fixed glyph pool plus the terminal pitch its glyphs render at.
/// Fullwidth CJK glyphs occupy two terminal columns, everything else one.
#[derive(Clone, Debug)]
pub struct Alphabet {
    chars: Vec<char>,
    pitch: u16,
}

impl Alphabet {
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn pitch(&self) -> u16 {
        self.pitch
    }
}

pub fn preset_from_str(spec: &str, default_to_ascii: bool) -> Result<Preset, String> {
    let spec = spec.trim().to_ascii_lowercase();
    match spec.as_str() {
        "auto" => Ok(if default_to_ascii {
            Preset::Ascii
        } else {
            Preset::Kana
        }),
        "kana" | "matrix" => Ok(Preset::Kana),
        "katakana" => Ok(Preset::Katakana),
        "ascii" => Ok(Preset::Ascii),
        "digits" | "dec" | "decimal" => Ok(Preset::Digits),
        "bin" | "binary" | "01" => Ok(Preset::Binary),
        "hex" | "hexadecimal" => Ok(Preset::Hex),
        "greek" => Ok(Preset::Greek),
        "cyrillic" => Ok(Preset::Cyrillic),
        _ => Err(format!(
            "unsupported charset: {} (see --list-charsets)",
            spec
        )),
    }
}

fn push_range(out: &mut Vec<char>, start: u32, end: u32) {
    for v in start..=end {
        if let Some(ch) = char::from_u32(v) {
            out.push(ch);
        }
    }
}

pub fn build_alphabet(preset: Preset) -> Alphabet {
    let mut chars: Vec<char> = Vec::new();
    let mut pitch = 1;

    match preset {
        Preset::Kana => {
            // Hiragana and Katakana blocks plus the curated kanji.
            push_range(&mut chars, 0x3041, 0x3096);
            push_range(&mut chars, 0x30A1, 0x30FA);
            chars.extend(COMMON_KANJI.chars());
            pitch = 2;
        }
        Preset::Katakana => {
            // Halfwidth katakana, single terminal column.
            push_range(&mut chars, 0xFF66, 0xFF9D);
        }
        Preset::Ascii => {
            push_range(&mut chars, 0x41, 0x5A);
            push_range(&mut chars, 0x61, 0x7A);
            push_range(&mut chars, 0x30, 0x39);
            push_range(&mut chars, 0x21, 0x2F);
        }
        Preset::Digits => {
            push_range(&mut chars, 0x30, 0x39);
        }
        Preset::Binary => {
            push_range(&mut chars, 0x30, 0x31);
        }
        Preset::Hex => {
            push_range(&mut chars, 0x30, 0x39);
            push_range(&mut chars, 0x41, 0x46);
        }
        Preset::Greek => {
            push_range(&mut chars, 0x0391, 0x03A9);
            push_range(&mut chars, 0x03B1, 0x03C9);
        }
        Preset::Cyrillic => {
            push_range(&mut chars, 0x0410, 0x044F);
        }
    }

    if chars.is_empty() {
        chars.push('0');
        chars.push('1');
    }

    Alphabet { chars, pitch }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_has_only_0_and_1() {
        let a = build_alphabet(Preset::Binary);
        assert_eq!(a.chars(), &['0', '1']);
        assert_eq!(a.pitch(), 1);
    }

    #[test]
    fn kana_is_fullwidth_and_includes_kanji() {
        let a = build_alphabet(Preset::Kana);
        assert_eq!(a.pitch(), 2);
        assert!(a.chars().contains(&'雨'));
        assert!(a.chars().contains(&'ア'));
        assert!(a.chars().contains(&'あ'));
    }

    #[test]
    fn auto_selects_ascii_when_non_utf() {
        assert_eq!(preset_from_str("auto", true).unwrap(), Preset::Ascii);
        assert_eq!(preset_from_str("auto", false).unwrap(), Preset::Kana);
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(preset_from_str("klingon", false).is_err());
    }
}
