use crate::screens::{back_hint, Placement, Screen, Tone, Viewport};

pub const DEPOSIT_TITLE: &str = "Deposit";
pub const DEPOSIT_PROMPT: &str = "Choose deposit method:";
pub const DEPOSIT_METHODS: [&str; 3] = ["Cash", "Bank Transfer", "Crypto"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositView;

impl Screen for DepositView {
    fn layout(&self, viewport: Viewport) -> Vec<Placement> {
        let mut placements = vec![
            Placement::new(2, viewport.left_of_middle(6), DEPOSIT_TITLE).tone(Tone::Title),
            Placement::new(5, 2, DEPOSIT_PROMPT),
        ];
        placements.extend(
            DEPOSIT_METHODS
                .iter()
                .zip(7..)
                .map(|(method, row)| Placement::new(row, 4, format!("- {}", method))),
        );
        placements.push(back_hint(viewport));
        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::compose;

    #[test]
    fn test_deposit_snapshot() {
        let lines = compose(&DepositView.layout(Viewport::new(40, 12)), Viewport::new(40, 12));
        assert_eq!(lines[2], "              Deposit");
        assert_eq!(lines[5], "  Choose deposit method:");
        assert_eq!(lines[7], "    - Cash");
        assert_eq!(lines[8], "    - Bank Transfer");
        assert_eq!(lines[9], "    - Crypto");
        assert_eq!(lines[10], "  Press any key to go back");
    }
}
