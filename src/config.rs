// Copyright (c) 2026 glyphrain developers

use std::io::IsTerminal;

use clap::Parser;

pub const DEFAULT_PARAMS_USAGE: &str = "DEFAULT PARAMS USAGE:\n  glyphrain --charset auto --color green --color-bg black --fps 60 --decay 6 --flip-rate 0.001 --fill-rate 0.05 --fill-start 100";

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBg {
    #[value(name = "black")]
    Black,
    #[value(name = "transparent")]
    Transparent,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "glyphrain", version, disable_version_flag = true)]
pub struct Args {
    #[arg(
        short = 'c',
        long = "color",
        default_value = "green",
        help_heading = "APPEARANCE",
        help = "Color scheme (see --list-colors)"
    )]
    pub color: String,

    #[arg(
        long = "color-bg",
        default_value_t = ColorBg::Black,
        value_enum,
        help_heading = "APPEARANCE",
        help = "Background mode (black, transparent)"
    )]
    pub color_bg: ColorBg,

    #[arg(
        long = "colormode",
        help_heading = "APPEARANCE",
        help = "Force color mode (allowed: 0,16,8,24). Default: 24-bit if supported (COLORTERM), else 8-bit"
    )]
    pub colormode: Option<u16>,

    #[arg(
        long = "charset",
        default_value = "auto",
        help_heading = "CHARSET",
        help = "Glyph alphabet preset (see --list-charsets)"
    )]
    pub charset: String,

    #[arg(
        short = 'f',
        long = "fps",
        default_value_t = 60.0,
        help_heading = "PERFORMANCE",
        help = "Target FPS (min 1 max 240)"
    )]
    pub fps: f64,

    #[arg(
        long = "duration",
        help_heading = "GENERAL",
        help = "Stop after N seconds (min 0.1 max 86400; <=0 disables)"
    )]
    pub duration: Option<f64>,

    #[arg(
        short = 's',
        long = "screensaver",
        help_heading = "GENERAL",
        help = "Screensaver mode (exit on keypress)"
    )]
    pub screensaver: bool,

    #[arg(
        long = "decay",
        default_value_t = 6,
        help_heading = "SIMULATION",
        help = "Brightness lost per frame (min 1 max 255)"
    )]
    pub decay: u8,

    #[arg(
        long = "flip-rate",
        default_value_t = 0.001,
        help_heading = "SIMULATION",
        help = "Per-frame chance a bright cell swaps its glyph (min 0 max 1)"
    )]
    pub flip_rate: f32,

    #[arg(
        long = "fill-rate",
        default_value_t = 0.05,
        help_heading = "SIMULATION",
        help = "Per-frame chance a faded top-row cell starts a streak (min 0 max 1)"
    )]
    pub fill_rate: f32,

    #[arg(
        long = "fill-start",
        default_value_t = 100,
        help_heading = "SIMULATION",
        help = "Top-row brightness at or below which a new streak may start"
    )]
    pub fill_start: u8,

    #[arg(
        long = "seed",
        help_heading = "SIMULATION",
        help = "RNG seed for a reproducible rain (default: random)"
    )]
    pub seed: Option<u64>,

    #[arg(
        long = "check-bitcolor",
        help_heading = "HELP",
        help = "Print detected terminal color capability and exit"
    )]
    pub check_bitcolor: bool,

    #[arg(
        long = "list-charsets",
        help_heading = "HELP",
        help = "List available charset presets and exit"
    )]
    pub list_charsets: bool,

    #[arg(
        long = "list-colors",
        help_heading = "HELP",
        help = "List available color schemes and exit"
    )]
    pub list_colors: bool,

    #[arg(
        long = "info",
        short = 'i',
        help_heading = "HELP",
        help = "Print version info and exit"
    )]
    pub info: bool,

    #[arg(
        long = "version",
        short = 'v',
        help_heading = "HELP",
        help = "Print version and exit"
    )]
    pub version: bool,
}

pub fn print_list_charsets() {
    if color_enabled_stdout() {
        println!("\x1b[1;36mAVAILABLE CHARSET PRESETS:\x1b[0m");
    } else {
        println!("AVAILABLE CHARSET PRESETS:");
    }
    println!();
    println!("VALUE        DESCRIPTION");
    println!("auto         Auto-select (ascii when LANG is non-UTF, otherwise kana)");
    println!("kana         Hiragana + katakana + common kanji (alias: matrix)");
    println!("katakana     Halfwidth katakana");
    println!("ascii        Letters + digits + punctuation");
    println!("digits       Digits only (aliases: dec, decimal)");
    println!("binary       0 and 1 (aliases: bin, 01)");
    println!("hex          0-9 and A-F (alias: hexadecimal)");
    println!("greek        Greek");
    println!("cyrillic     Cyrillic");
}

pub fn print_list_colors() {
    if color_enabled_stdout() {
        println!("\x1b[1;36mAVAILABLE COLOR SCHEMES:\x1b[0m");
    } else {
        println!("AVAILABLE COLOR SCHEMES:");
    }
    println!();
    println!("VALUE        DESCRIPTION");
    println!("green        Classic green rain");
    println!("amber        Amber phosphor (alias: gold)");
    println!("red          Red");
    println!("blue         Blue");
    println!("cyan         Cyan");
    println!("purple       Purple (alias: violet)");
    println!("white        White (alias: snow)");
}
