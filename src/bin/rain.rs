//! Terminal rain - the page's binary rain and headline reveal, drawn in a terminal
//!
//! Usage:
//!   cargo run --bin rain                        # English headline
//!   cargo run --bin rain -- --lang ru           # Russian headline
//!   cargo run --bin rain -- --reduced-motion    # Headline without the scramble
//!
//! Press q, Esc or Ctrl-C to exit.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use portfolio_site::cli::arg_value;
use portfolio_site::effects::{Cell, CellKind, Glyph, RainConfig, RainField, Reveal, RevealConfig, RevealFrame};
use portfolio_site::i18n::{translate, Language};
use portfolio_site::profile::SiteProfile;
use portfolio_site::theme::Theme;
use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(33);
const HEAD_COLOR: Color = Color::Rgb {
    r: 0xcc,
    g: 0xff,
    b: 0xcc,
};

/// Raw mode + alternate screen for the lifetime of the value.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))
            .context("Failed to prepare terminal")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Glyphs still on screen and how many frames each has left before it is
/// erased. Stands in for the canvas' translucent fade.
struct Trails {
    cols: u16,
    rows: u16,
    life: u8,
    cells: Vec<Option<(char, u8)>>,
}

impl Trails {
    fn new(cols: u16, rows: u16, life: u8) -> Self {
        Self {
            cols,
            rows,
            life: life.max(2),
            cells: vec![None; usize::from(cols) * usize::from(rows)],
        }
    }

    fn paint(&mut self, cell: &Cell) {
        let (x, y) = (cell.x.floor(), cell.y.floor());
        if x < 0.0 || y < 0.0 || x >= f64::from(self.cols) || y >= f64::from(self.rows) {
            return;
        }

        let idx = y as usize * usize::from(self.cols) + x as usize;
        let life = match cell.kind {
            CellKind::Head => self.life,
            CellKind::Tail => self.life - 1,
        };
        self.cells[idx] = Some((cell.glyph, life));
    }

    /// Queue every live glyph, then age them by one frame.
    fn render<W: Write>(&mut self, out: &mut W, accent: (u8, u8, u8)) -> io::Result<()> {
        let cols = usize::from(self.cols);
        let full = self.life;

        for (idx, slot) in self.cells.iter_mut().enumerate() {
            let Some((glyph, life)) = *slot else {
                continue;
            };
            queue!(out, MoveTo((idx % cols) as u16, (idx / cols) as u16))?;

            if life == 0 {
                queue!(out, Print(' '))?;
                *slot = None;
                continue;
            }

            let color = if life == full {
                HEAD_COLOR
            } else {
                shade(accent, life, full)
            };
            queue!(out, SetForegroundColor(color), Print(glyph))?;
            *slot = Some((glyph, life - 1));
        }
        Ok(())
    }
}

fn shade((r, g, b): (u8, u8, u8), life: u8, full: u8) -> Color {
    let k = f64::from(life) / f64::from(full);
    let scale = |c: u8| (f64::from(c) * k).round() as u8;
    Color::Rgb {
        r: scale(r),
        g: scale(g),
        b: scale(b),
    }
}

/// `#rrggbb` to an RGB triple.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn draw_headline<W: Write>(
    out: &mut W,
    frame: &RevealFrame,
    cols: u16,
    rows: u16,
    accent: (u8, u8, u8),
) -> io::Result<()> {
    let visible = frame.glyphs.len().min(usize::from(cols));
    let x = (usize::from(cols) - visible) / 2;
    queue!(out, MoveTo(x as u16, rows / 2))?;

    for glyph in &frame.glyphs[..visible] {
        let color = match glyph {
            Glyph::Scrambled(_) => shade(accent, 1, 1),
            _ => Color::White,
        };
        queue!(out, SetForegroundColor(color), Print(glyph.as_char()))?;
    }
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let language = Language::from_preference(arg_value(&args, "--lang").as_deref());
    let reduced_motion = args.iter().any(|arg| arg == "--reduced-motion");

    let site = SiteProfile::get();
    let accent = parse_hex(site.colors.accent).unwrap_or((0x23, 0xd5, 0xab));
    let trail_len = (1.0 / Theme::Dark.trail_alpha()).round() as u8;
    let title = format!(
        "{} - {}",
        site.display_name,
        translate("hero.title", language)
    );

    let mut rng = rand::thread_rng();
    let (mut cols, mut rows) = terminal::size().context("Failed to read terminal size")?;
    let mut field = RainField::new(
        f64::from(cols),
        f64::from(rows),
        RainConfig::terminal(),
        &mut rng,
    );
    let mut trails = Trails::new(cols, rows, trail_len);
    let mut headline = Reveal::new(&title, &RevealConfig::heading(), reduced_motion);

    let _guard = TerminalGuard::enter()?;
    let mut out = BufWriter::new(io::stdout());

    loop {
        let started = Instant::now();

        for cell in field.step(&mut rng) {
            trails.paint(&cell);
        }
        trails.render(&mut out, accent)?;
        let frame = headline.tick(&mut rng);
        draw_headline(&mut out, &frame, cols, rows, accent)?;
        out.flush()?;

        if event::poll(FRAME.saturating_sub(started.elapsed()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && is_quit(&key) => break,
                Event::Resize(width, height) => {
                    cols = width;
                    rows = height;
                    field.resize(f64::from(cols), f64::from(rows), &mut rng);
                    trails = Trails::new(cols, rows, trail_len);
                    queue!(out, Clear(ClearType::All))?;
                }
                _ => {}
            }
        }
    }

    Ok(())
}
