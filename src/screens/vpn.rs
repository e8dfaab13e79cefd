use crate::screens::{Placement, Tone};

pub const VPN_LABEL: &str = "VPN";
pub const VPN_ROW: u16 = 0;
pub const VPN_COL: u16 = 2;

/// Decorative connection light. Nothing is actually tunnelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VpnIndicator {
    pub connected: bool,
    pub blink: bool,
}

impl VpnIndicator {
    pub fn placement(&self) -> Placement {
        let tone = if self.connected {
            Tone::Online
        } else {
            Tone::Offline
        };
        Placement::new(VPN_ROW, VPN_COL, VPN_LABEL)
            .tone(tone)
            .blinking(self.blink)
    }
}
