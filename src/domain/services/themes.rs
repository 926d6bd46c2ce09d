use anyhow::bail;
use anyhow::Result;
use ratatui::style::Color;

/// Color tokens for the chat surface. Cosmetic only; nothing behavioral
/// hangs off these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub assistant: Color,
    pub dim: Color,
    pub text: Color,
    pub user: Color,
}

// The product palette: charged lime on near-black, sage for the user.
const CHARGED: Theme = Theme {
    accent: Color::Rgb(199, 255, 27),
    assistant: Color::Rgb(199, 255, 27),
    dim: Color::DarkGray,
    text: Color::Rgb(254, 254, 254),
    user: Color::Rgb(211, 224, 211),
};

const MONO: Theme = Theme {
    accent: Color::White,
    assistant: Color::Gray,
    dim: Color::DarkGray,
    text: Color::White,
    user: Color::Gray,
};

pub struct Themes {}

impl Themes {
    pub fn list() -> Vec<&'static str> {
        return vec!["charged", "mono"];
    }

    pub fn get(name: &str) -> Result<Theme> {
        match name {
            "charged" => return Ok(CHARGED),
            "mono" => return Ok(MONO),
            _ => bail!(format!("{name} is not a valid theme")),
        }
    }
}
