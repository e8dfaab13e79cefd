use crate::screens::{Placement, Screen, Tone, Viewport, VpnIndicator};

pub const MENU_TITLE: &str = "Encrypted Bank";
pub const MENU_OPTIONS: [&str; 5] = [
    "1. Bank-to-Bank Transfer",
    "2. Cash to Bitcoin",
    "3. Deposit",
    "4. Dirty to Clean",
    "Q. Quit",
];
const FIRST_OPTION_ROW: u16 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub vpn: VpnIndicator,
}

impl Screen for MenuView {
    fn layout(&self, viewport: Viewport) -> Vec<Placement> {
        let mut placements = vec![
            Placement::new(2, viewport.centered(MENU_TITLE), MENU_TITLE).tone(Tone::Title),
        ];
        placements.extend(MENU_OPTIONS.iter().zip(FIRST_OPTION_ROW..).map(|(option, row)| {
            Placement::new(row, viewport.centered(option), *option)
        }));
        placements.push(self.vpn.placement());
        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::compose;

    #[test]
    fn test_menu_layout() {
        let menu = MenuView {
            vpn: VpnIndicator {
                connected: true,
                blink: false,
            },
        };
        let placements = menu.layout(Viewport::new(80, 24));

        assert_eq!(
            placements[0],
            Placement::new(2, 33, "Encrypted Bank").tone(Tone::Title)
        );
        assert_eq!(placements[1], Placement::new(6, 28, "1. Bank-to-Bank Transfer"));
        assert_eq!(placements[5], Placement::new(10, 37, "Q. Quit"));
        assert_eq!(placements.last().unwrap().text, "VPN");

        let lines = compose(&placements, Viewport::new(80, 24));
        assert_eq!(lines[0], "  VPN");
        assert_eq!(lines[7].trim(), "2. Cash to Bitcoin");
    }
}
