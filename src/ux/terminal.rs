use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    DefaultTerminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tracing::{info, warn};

use crate::{
    bank::DataSource,
    screens::{Placement, Tone, Viewport},
    ux::app::{App, Flow, Key},
};

/// Take over the terminal and run the menu loop until the user quits.
///
/// `tick` paces animations; the keyboard is polled in between.
#[cfg(not(tarpaulin_include))]
pub fn run_app<S: DataSource>(app: &mut App<S>, tick: Duration) -> Result<()> {
    run_app_with(app, tick, ratatui::try_init, ratatui::try_restore)
}

fn run_app_with<S, I, R>(app: &mut App<S>, tick: Duration, init: I, restore: R) -> Result<()>
where
    S: DataSource,
    I: FnOnce() -> io::Result<DefaultTerminal>,
    R: FnOnce() -> io::Result<()>,
{
    let mut terminal = match init() {
        Ok(terminal) => terminal,
        Err(err) => {
            // Raw mode may already be on when the alternate screen fails.
            if let Err(restore_err) = restore() {
                warn!(%restore_err, "Could not restore terminal");
            }
            return Err(err).context("Failed to initialize terminal (is stdout a TTY?)");
        }
    };
    info!("Terminal initialised");
    let result = event_loop(&mut terminal, app, tick);
    let restored = restore().context("Failed to restore terminal");
    info!("Terminal restored");
    result.and(restored)
}

/// Animation clock. Restarted whenever another screen opens so a fresh screen
/// gets a full tick before its next step.
#[derive(Debug, Clone, Copy)]
struct Pacer {
    tick: Duration,
    last: Instant,
}

impl Pacer {
    fn new(tick: Duration, now: Instant) -> Self {
        Self { tick, last: now }
    }

    /// How long to wait for a key before the next tick is due.
    fn timeout(&self, now: Instant) -> Duration {
        self.tick.saturating_sub(now.saturating_duration_since(self.last))
    }

    fn due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last) >= self.tick
    }

    fn restart(&mut self, now: Instant) {
        self.last = now;
    }
}

fn event_loop<S: DataSource>(
    terminal: &mut DefaultTerminal,
    app: &mut App<S>,
    tick: Duration,
) -> Result<()> {
    let mut pacer = Pacer::new(tick, Instant::now());
    loop {
        terminal
            .draw(|frame| {
                let area = frame.area();
                let placements = app.layout(Viewport::new(area.width, area.height));
                paint(frame.buffer_mut(), area, &placements);
            })
            .context("Failed to draw screen")?;

        if event::poll(pacer.timeout(Instant::now())).context("Failed to poll keyboard")? {
            if let Event::Key(key) = event::read().context("Failed to read keyboard")? {
                if key.kind == KeyEventKind::Press {
                    let before = app.view().kind();
                    if app.handle_key(map_key(key)) == Flow::Quit {
                        return Ok(());
                    }
                    if app.view().kind() != before {
                        pacer.restart(Instant::now());
                    }
                }
            }
        }
        let now = Instant::now();
        if pacer.due(now) {
            app.tick();
            pacer.restart(now);
        }
    }
}

fn map_key(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

fn style(placement: &Placement) -> Style {
    let style = match placement.tone {
        Tone::Plain => Style::default(),
        Tone::Title => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Tone::Online => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Tone::Offline => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if placement.blink {
        style.add_modifier(Modifier::SLOW_BLINK)
    } else {
        style
    }
}

/// Write placements into `buf`, dropping whatever falls outside `area`.
fn paint(buf: &mut Buffer, area: Rect, placements: &[Placement]) {
    for placement in placements {
        if placement.row >= area.height || placement.col >= area.width {
            continue;
        }
        buf.set_stringn(
            area.x + placement.col,
            area.y + placement.row,
            &placement.text,
            (area.width - placement.col) as usize,
            style(placement),
        );
    }
}
