//! Percept palette for CLI output.
//!
//! Truecolor terminals get the exact RGB values; everything else falls back
//! to the nearest of the 16 ANSI colors.
//!
//! - Primary: Blue (#0D6EFD) - RGB(13, 110, 253)
//! - Muted: Gray (#6C757D) - RGB(108, 117, 125)
//! - Success: Green (#198754) - RGB(25, 135, 84)
//! - Warning: Yellow (#FFC107) - RGB(255, 193, 7)

use colored::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Truecolor,
    Color16,
}

impl ColorSupport {
    /// Reads `COLORTERM`, the de facto truecolor advertisement.
    pub fn detect() -> Self {
        match std::env::var("COLORTERM") {
            Ok(value) if value.contains("truecolor") || value.contains("24bit") => Self::Truecolor,
            _ => Self::Color16,
        }
    }
}

pub struct PerceptColors {
    color_support: ColorSupport,
}

impl PerceptColors {
    pub const PRIMARY_RGB: (u8, u8, u8) = (13, 110, 253);
    pub const MUTED_RGB: (u8, u8, u8) = (108, 117, 125);
    pub const SUCCESS_RGB: (u8, u8, u8) = (25, 135, 84);
    pub const WARNING_RGB: (u8, u8, u8) = (255, 193, 7);

    pub fn new() -> Self {
        Self::with_support(ColorSupport::detect())
    }

    pub fn with_support(support: ColorSupport) -> Self {
        Self { color_support: support }
    }

    fn pick(&self, rgb: (u8, u8, u8), fallback: Color) -> Color {
        match self.color_support {
            ColorSupport::Truecolor => Color::TrueColor { r: rgb.0, g: rgb.1, b: rgb.2 },
            ColorSupport::Color16 => fallback,
        }
    }

    pub fn primary(&self) -> Color {
        self.pick(Self::PRIMARY_RGB, Color::Blue)
    }

    pub fn muted(&self) -> Color {
        self.pick(Self::MUTED_RGB, Color::BrightBlack)
    }

    pub fn success(&self) -> Color {
        self.pick(Self::SUCCESS_RGB, Color::Green)
    }

    pub fn warning(&self) -> Color {
        self.pick(Self::WARNING_RGB, Color::Yellow)
    }
}

impl Default for PerceptColors {
    fn default() -> Self {
        Self::new()
    }
}
