use barcode_art::{BarcodeRenderer, Rendered};

use crate::{
    bank::{Amount, PaymentCode},
    screens::{back_hint, Placement, Screen, Tone, Viewport},
};

pub const BITCOIN_TITLE: &str = "Cash to Bitcoin";
const BARCODE_ROW: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitcoinView {
    pub amount: Amount,
    pub code: PaymentCode,
    pub barcode: Rendered,
}

impl BitcoinView {
    /// Renders the barcode once, up front, so redraws only re-place the rows.
    pub fn new(amount: Amount, code: PaymentCode, renderer: &BarcodeRenderer) -> Self {
        let barcode = renderer.render(code.as_str());
        Self {
            amount,
            code,
            barcode,
        }
    }
}

impl Screen for BitcoinView {
    fn layout(&self, viewport: Viewport) -> Vec<Placement> {
        let mut placements = vec![
            Placement::new(2, viewport.left_of_middle(10), BITCOIN_TITLE).tone(Tone::Title),
            Placement::new(4, 2, format!("Amount: {}", self.amount)),
            Placement::new(6, 2, format!("Payment Code: {}", self.code)),
        ];
        // All rows share one column so the bars stay aligned.
        let col = viewport.centered_width(self.barcode.grid().width());
        placements.extend(
            self.barcode
                .rows()
                .iter()
                .zip(BARCODE_ROW..)
                .map(|(line, row)| Placement::new(row, col, line.as_str())),
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
    fn test_bitcoin_layout_centers_barcode() {
        let code = PaymentCode::numbered(482193);
        let view = BitcoinView::new(Amount::new(2500), code, &BarcodeRenderer::default());
        assert!(!view.barcode.is_placeholder());

        let viewport = Viewport::new(80, 24);
        let placements = view.layout(viewport);
        assert_eq!(placements[0].col, 30);
        assert_eq!(placements[1], Placement::new(4, 2, "Amount: $2,500"));
        assert_eq!(placements[2], Placement::new(6, 2, "Payment Code: CB-482193"));

        let barcode: Vec<_> = placements[3..13].iter().collect();
        for (placement, row) in barcode.iter().zip(8..) {
            assert_eq!(placement.row, row);
            assert_eq!(placement.col, 20);
            assert_eq!(placement.text.chars().count(), 40);
        }
        assert_eq!(placements[13].text, "Press any key to go back");

        let lines = compose(&placements, viewport);
        assert_eq!(lines[6], "  Payment Code: CB-482193");
    }

    #[test]
    fn test_bitcoin_layout_keeps_placeholder_space() {
        let code = PaymentCode::numbered(100000);
        let renderer = BarcodeRenderer::with_options(barcode_art::RenderOptions::with_grid(0, 2));
        let view = BitcoinView::new(Amount::new(75), code, &renderer);
        assert!(view.barcode.is_placeholder());

        let placements = view.layout(Viewport::new(80, 24));
        // title, amount, code, two placeholder rows, hint
        assert_eq!(placements.len(), 6);
        assert_eq!(placements[3].row, 8);
        assert_eq!(placements[4].row, 9);
        // one placeholder column wide, centered on the 80 column screen
        assert_eq!(placements[3].col, 40);
        assert_eq!(placements[3].text, "|");
    }
}
