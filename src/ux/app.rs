use barcode_art::BarcodeRenderer;
use clap::ValueEnum;
use tracing::{debug, info};

use crate::{
    bank::DataSource,
    screens::{
        BitcoinView, DepositView, MenuView, MonitorView, Placement, Screen, TransferView,
        Viewport, VpnIndicator,
    },
    settings::Settings,
};

/// Key presses the application cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Ctrl-C
    Interrupt,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Screens reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScreenKind {
    Menu,
    Transfer,
    Bitcoin,
    Deposit,
    Monitor,
}

impl ScreenKind {
    /// Menu shortcut, e.g. `'2'` for the cash to bitcoin screen.
    pub fn from_menu_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(ScreenKind::Transfer),
            '2' => Some(ScreenKind::Bitcoin),
            '3' => Some(ScreenKind::Deposit),
            '4' => Some(ScreenKind::Monitor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Menu(MenuView),
    Transfer(TransferView),
    Bitcoin(BitcoinView),
    Deposit(DepositView),
    Monitor(MonitorView),
}

impl View {
    pub fn kind(&self) -> ScreenKind {
        match self {
            View::Menu(_) => ScreenKind::Menu,
            View::Transfer(_) => ScreenKind::Transfer,
            View::Bitcoin(_) => ScreenKind::Bitcoin,
            View::Deposit(_) => ScreenKind::Deposit,
            View::Monitor(_) => ScreenKind::Monitor,
        }
    }

    fn screen(&self) -> &dyn Screen {
        match self {
            View::Menu(view) => view,
            View::Transfer(view) => view,
            View::Bitcoin(view) => view,
            View::Deposit(view) => view,
            View::Monitor(view) => view,
        }
    }
}

/// Menu navigation. Every screen gets fresh figures each time it is opened.
pub struct App<S: DataSource> {
    source: S,
    renderer: BarcodeRenderer,
    vpn: VpnIndicator,
    monitor_rows: usize,
    view: View,
}

impl<S: DataSource> App<S> {
    pub fn new(source: S, settings: &Settings) -> Self {
        let vpn = VpnIndicator {
            connected: settings.vpn_connected,
            blink: settings.blink_indicator,
        };
        Self {
            source,
            renderer: BarcodeRenderer::with_options(settings.render_options()),
            vpn,
            monitor_rows: settings.monitor_rows,
            view: View::Menu(MenuView { vpn }),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn open(&mut self, kind: ScreenKind) {
        debug!(screen = ?kind, "Opening screen");
        self.view = match kind {
            ScreenKind::Menu => View::Menu(MenuView { vpn: self.vpn }),
            ScreenKind::Transfer => View::Transfer(TransferView {
                amount: self.source.amount(),
            }),
            ScreenKind::Bitcoin => {
                let amount = self.source.amount();
                let code = self.source.payment_code();
                View::Bitcoin(BitcoinView::new(amount, code, &self.renderer))
            }
            ScreenKind::Deposit => View::Deposit(DepositView),
            ScreenKind::Monitor => {
                let mut monitor = MonitorView::new(self.source.amounts(self.monitor_rows));
                // The first transaction shows as soon as the screen opens.
                monitor.tick();
                View::Monitor(monitor)
            }
        };
    }

    pub fn handle_key(&mut self, key: Key) -> Flow {
        if key == Key::Interrupt {
            info!("Interrupted");
            return Flow::Quit;
        }

        let animating = matches!(&self.view, View::Monitor(monitor) if !monitor.is_complete());
        if self.view.kind() != ScreenKind::Menu {
            if !animating {
                self.open(ScreenKind::Menu);
            }
            return Flow::Continue;
        }

        match key {
            Key::Char('q') | Key::Char('Q') => return Flow::Quit,
            Key::Char(c) => {
                if let Some(kind) = ScreenKind::from_menu_key(c) {
                    self.open(kind);
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Advance animations by one step.
    pub fn tick(&mut self) {
        if let View::Monitor(monitor) = &mut self.view {
            monitor.tick();
        }
    }

    /// Finish any running animation at once.
    pub fn settle(&mut self) {
        if let View::Monitor(monitor) = &mut self.view {
            monitor.reveal_all();
        }
    }

    pub fn layout(&self, viewport: Viewport) -> Vec<Placement> {
        self.view.screen().layout(viewport)
    }
}
