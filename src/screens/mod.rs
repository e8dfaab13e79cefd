//! Screens as pure functions from view state to text placements.
//!
//! Nothing here knows about the terminal: the interactive driver paints the
//! placements with ratatui, and [`compose`] flattens them into plain lines.

pub mod bitcoin;
pub mod deposit;
pub mod menu;
pub mod monitor;
pub mod transfer;
pub mod vpn;

pub use bitcoin::BitcoinView;
pub use deposit::DepositView;
pub use menu::MenuView;
pub use monitor::MonitorView;
pub use transfer::TransferView;
pub use vpn::VpnIndicator;

pub const BACK_HINT: &str = "Press any key to go back";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Cyan, bold
    Title,
    /// Green, bold
    Online,
    /// Red, bold
    Offline,
}

/// A string anchored at a cell of the character grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub row: u16,
    pub col: u16,
    pub text: String,
    pub tone: Tone,
    pub blink: bool,
}

impl Placement {
    pub fn new(row: u16, col: u16, text: impl Into<String>) -> Self {
        Self {
            row,
            col,
            text: text.into(),
            tone: Tone::Plain,
            blink: false,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn blinking(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Column that centers `text`, or 0 when it does not fit.
    pub fn centered(&self, text: &str) -> u16 {
        self.centered_width(text.chars().count())
    }

    /// Column that centers a block `width` characters wide.
    pub fn centered_width(&self, width: usize) -> u16 {
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        (self.width / 2).saturating_sub(width / 2)
    }

    /// `offset` columns left of the middle.
    pub fn left_of_middle(&self, offset: u16) -> u16 {
        (self.width / 2).saturating_sub(offset)
    }

    pub fn footer_row(&self) -> u16 {
        self.height.saturating_sub(2)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

pub trait Screen {
    fn layout(&self, viewport: Viewport) -> Vec<Placement>;
}

pub(crate) fn back_hint(viewport: Viewport) -> Placement {
    Placement::new(viewport.footer_row(), 2, BACK_HINT)
}

/// Paint placements onto a blank grid, later placements on top, clipping at
/// the viewport edges. Trailing blanks are trimmed from each line.
pub fn compose(placements: &[Placement], viewport: Viewport) -> Vec<String> {
    let width = viewport.width as usize;
    let mut grid = vec![vec![' '; width]; viewport.height as usize];

    for placement in placements {
        let Some(line) = grid.get_mut(placement.row as usize) else {
            continue;
        };
        let start = placement.col as usize;
        for (cell, ch) in line.iter_mut().skip(start).zip(placement.text.chars()) {
            *cell = ch;
        }
    }

    grid.into_iter()
        .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centering_saturates() {
        let viewport = Viewport::new(20, 10);
        assert_eq!(viewport.centered("abcd"), 8);
        assert_eq!(viewport.centered(&"x".repeat(30)), 0);
        assert_eq!(viewport.centered_width(4), 8);
        assert_eq!(viewport.centered_width(70_000), 0);
        assert_eq!(viewport.left_of_middle(4), 6);
        assert_eq!(viewport.left_of_middle(25), 0);
        assert_eq!(Viewport::new(20, 1).footer_row(), 0);
    }

    #[test]
    fn test_compose_places_and_clips() {
        let viewport = Viewport::new(8, 3);
        let lines = compose(
            &[
                Placement::new(0, 2, "hello"),
                Placement::new(1, 5, "clipped"),
                Placement::new(7, 0, "off screen"),
                Placement::new(2, 20, "too far right"),
            ],
            viewport,
        );
        assert_eq!(lines, vec!["  hello", "     cli", ""]);
    }

    #[test]
    fn test_compose_later_placements_overwrite() {
        let lines = compose(
            &[Placement::new(0, 0, "aaaa"), Placement::new(0, 1, "bb")],
            Viewport::new(4, 1),
        );
        assert_eq!(lines, vec!["abba"]);
    }
}
