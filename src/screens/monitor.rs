use crate::{
    bank::Amount,
    screens::{back_hint, Placement, Screen, Tone, Viewport},
};

pub const MONITOR_TITLE: &str = "Dirty → Clean Monitor";
const FIRST_TX_ROW: u16 = 5;

/// Transactions appear one per tick; the way back opens once all are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorView {
    amounts: Vec<Amount>,
    revealed: usize,
}

impl MonitorView {
    pub fn new(amounts: Vec<Amount>) -> Self {
        Self {
            amounts,
            revealed: 0,
        }
    }

    /// Reveal the next row. Returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn reveal_all(&mut self) {
        self.revealed = self.amounts.len();
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.amounts.len()
    }

    pub fn revealed(&self) -> &[Amount] {
        &self.amounts[..self.revealed]
    }
}

impl Screen for MonitorView {
    fn layout(&self, viewport: Viewport) -> Vec<Placement> {
        let mut placements = vec![
            Placement::new(2, viewport.left_of_middle(10), MONITOR_TITLE).tone(Tone::Title),
        ];
        placements.extend(
            self.revealed()
                .iter()
                .zip(FIRST_TX_ROW..)
                .enumerate()
                .map(|(i, (amount, row))| {
                    Placement::new(row, 4, format!("TX {}: {} → CLEAN ✔", i + 1, amount))
                }),
        );
        if self.is_complete() {
            placements.push(back_hint(viewport));
        }
        placements
    }
}
