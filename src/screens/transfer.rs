use crate::{
    bank::Amount,
    screens::{back_hint, Placement, Screen, Tone, Viewport},
};

pub const TRANSFER_TITLE: &str = "Bank-to-Bank Transfer";
pub const TRANSFER_PROMPT: &str = "Connect your bank to continue securely 🔒";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferView {
    pub amount: Amount,
}

impl Screen for TransferView {
    fn layout(&self, viewport: Viewport) -> Vec<Placement> {
        vec![
            Placement::new(2, viewport.left_of_middle(12), TRANSFER_TITLE).tone(Tone::Title),
            Placement::new(
                6,
                viewport.left_of_middle(15),
                format!("Amount: {}", self.amount),
            ),
            Placement::new(8, viewport.left_of_middle(25), TRANSFER_PROMPT),
            back_hint(viewport),
        ]
    }
}
