//! Rotating color palettes for the terminal UI.
//!
//! All colors used by compdeck resolve through this module. One palette is
//! chosen per process start by [`rotate_on_startup`]: the previously
//! persisted palette advances one step in a fixed cyclic order, or a random
//! palette is picked when nothing valid was persisted. The chosen identifier
//! is then written back so the next visit rotates again.

use crate::store::ThemeStore;
use crossterm::style::Color;
use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::{OnceLock, RwLock};
use tracing::debug;

// ---------------------------------------------------------------------------
// Palettes
// ---------------------------------------------------------------------------

/// Named color palette applied as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Soft,
    Warm,
    Cool,
}

/// Fixed rotation order. `next_after` wraps from the last back to the first.
pub const PALETTE_ORDER: [Palette; 3] = [Palette::Soft, Palette::Warm, Palette::Cool];

/// Palette applied when persistence is unavailable.
pub const DEFAULT_PALETTE: Palette = Palette::Soft;

impl Palette {
    /// Stable identifier used as the persisted value.
    pub fn id(self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Warm => "warm",
            Self::Cool => "cool",
        }
    }

    /// Parse a persisted identifier. Unknown values yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        PALETTE_ORDER.iter().copied().find(|p| p.id() == id)
    }

    /// The palette immediately following this one in rotation order.
    pub fn next(self) -> Self {
        let idx = PALETTE_ORDER
            .iter()
            .position(|p| *p == self)
            .unwrap_or_default();
        PALETTE_ORDER[(idx + 1) % PALETTE_ORDER.len()]
    }
}

/// Style slot resolved against the active palette.
///
/// Every palette defines every slot; resolution is an exhaustive match so
/// the full-key-set invariant holds at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVar {
    /// Primary accent (panel titles, the run banner).
    Accent,
    /// Secondary/dimmed text (status line, separators).
    Muted,
    /// Panel border glyphs.
    Border,
    /// Pass badge in the validation panel.
    BadgePass,
    /// Fail badge in the validation panel.
    BadgeFail,
    /// Inline error text in the tokens panel.
    ErrorText,
}

/// Resolve one style variable for a specific palette.
pub fn palette_color(palette: Palette, var: ThemeVar) -> Color {
    match palette {
        Palette::Soft => match var {
            ThemeVar::Accent => rgb(0x25, 0x63, 0xeb),
            ThemeVar::Muted => rgb(0x6b, 0x72, 0x80),
            ThemeVar::Border => rgb(0x47, 0x55, 0x69),
            ThemeVar::BadgePass => Color::Green,
            ThemeVar::BadgeFail => Color::Red,
            ThemeVar::ErrorText => Color::Red,
        },
        Palette::Warm => match var {
            ThemeVar::Accent => rgb(0xd9, 0x77, 0x06),
            ThemeVar::Muted => rgb(0x6b, 0x4b, 0x3b),
            ThemeVar::Border => rgb(0x92, 0x6b, 0x52),
            ThemeVar::BadgePass => Color::DarkGreen,
            ThemeVar::BadgeFail => Color::DarkRed,
            ThemeVar::ErrorText => Color::Red,
        },
        Palette::Cool => match var {
            ThemeVar::Accent => rgb(0x0e, 0xa5, 0xe9),
            ThemeVar::Muted => rgb(0x4b, 0x6b, 0x7a),
            ThemeVar::Border => rgb(0x3b, 0x5a, 0x6b),
            ThemeVar::BadgePass => Color::Cyan,
            ThemeVar::BadgeFail => Color::Red,
            ThemeVar::ErrorText => Color::Red,
        },
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

// ---------------------------------------------------------------------------
// Process-wide theme state
// ---------------------------------------------------------------------------

fn theme_state() -> &'static RwLock<Palette> {
    static STATE: OnceLock<RwLock<Palette>> = OnceLock::new();
    STATE.get_or_init(|| RwLock::new(DEFAULT_PALETTE))
}

/// Apply a palette process-wide. Applying the same palette twice is a no-op
/// beyond the first application.
pub fn apply_palette(palette: Palette) {
    if let Ok(mut active) = theme_state().write() {
        *active = palette;
    }
}

/// Currently active palette.
pub fn active_palette() -> Palette {
    theme_state()
        .read()
        .map(|active| *active)
        .unwrap_or(DEFAULT_PALETTE)
}

/// Resolve one style variable from the active palette.
pub fn color(var: ThemeVar) -> Color {
    palette_color(active_palette(), var)
}

// ---------------------------------------------------------------------------
// Startup rotation
// ---------------------------------------------------------------------------

/// Compute the palette for this session from the persisted identifier.
///
/// A recognized identifier advances one step in [`PALETTE_ORDER`]; anything
/// else (absent, unknown) picks uniformly at random.
pub fn next_palette(saved: Option<&str>) -> Palette {
    match saved.and_then(Palette::from_id) {
        Some(prev) => prev.next(),
        None => {
            let idx = OsRng.next_u32() as usize % PALETTE_ORDER.len();
            PALETTE_ORDER[idx]
        }
    }
}

/// Pick, apply, and persist this session's palette.
///
/// Purely effectful; at most one store write is attempted. Persistence
/// failures are never propagated: whether the store fails on read or on
/// write, the session ends up on [`DEFAULT_PALETTE`] with nothing
/// persisted.
pub fn rotate_on_startup(store: &ThemeStore) {
    let saved = match store.read() {
        Ok(saved) => saved,
        Err(err) => {
            debug!(error = %err, "theme store unreadable, using default palette");
            apply_palette(DEFAULT_PALETTE);
            return;
        }
    };

    let chosen = next_palette(saved.as_deref());
    apply_palette(chosen);
    if let Err(err) = store.write(chosen.id()) {
        debug!(error = %err, palette = chosen.id(), "failed persisting palette, using default");
        apply_palette(DEFAULT_PALETTE);
    }
}
