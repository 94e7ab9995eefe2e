//! Platform-neutral color model for severity decoration

use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 8-bit RGB triple. How a destination encodes this (ANSI escape, text
/// attribute, nothing at all) is the destination's own business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const LIGHT_GRAY: Rgb = Rgb::new(211, 211, 211);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const DARK_GRAY: Rgb = Rgb::new(85, 85, 85);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
}

/// Foreground and optional background color for one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub foreground: Rgb,
    pub background: Option<Rgb>,
}

impl ColorPair {
    pub const fn new(foreground: Rgb) -> Self {
        Self {
            foreground,
            background: None,
        }
    }

    #[must_use]
    pub const fn with_background(mut self, background: Rgb) -> Self {
        self.background = Some(background);
        self
    }
}

/// The default per-severity palette.
pub fn default_palette() -> HashMap<Severity, ColorPair> {
    let mut palette = HashMap::new();
    palette.insert(Severity::All, ColorPair::new(Rgb::WHITE));
    palette.insert(Severity::MessageOnly, ColorPair::new(Rgb::LIGHT_GRAY));
    palette.insert(Severity::Comment, ColorPair::new(Rgb::GRAY));
    palette.insert(Severity::Verbose, ColorPair::new(Rgb::DARK_GRAY));
    palette.insert(Severity::Info, ColorPair::new(Rgb::BLUE));
    palette.insert(Severity::Debug, ColorPair::new(Rgb::GREEN));
    palette.insert(Severity::Warning, ColorPair::new(Rgb::ORANGE));
    palette.insert(Severity::Error, ColorPair::new(Rgb::RED));
    palette.insert(Severity::Severe, ColorPair::new(Rgb::MAGENTA));
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_covers_every_severity() {
        let palette = default_palette();
        for level in Severity::iter() {
            assert!(palette.contains_key(&level), "missing color for {}", level);
        }
    }

    #[test]
    fn test_with_background() {
        let pair = ColorPair::new(Rgb::RED).with_background(Rgb::WHITE);
        assert_eq!(pair.foreground, Rgb::RED);
        assert_eq!(pair.background, Some(Rgb::WHITE));
    }
}
