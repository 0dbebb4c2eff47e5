//! Theme system for billform.
//!
//! The palette is read from `theme.conf` in the config directory using the
//! `key = value` format (`#RRGGBB` or `R,G,B` values). A skeleton file is
//! written on first run; parse problems fall back to the built-in palette so
//! a broken config never blocks startup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, RwLock};

use ratatui::style::Color;

use crate::notify::Severity;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle border color for unfocused components.
    pub surface2: Color,
    /// Muted line/label color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for focused interactive elements.
    pub sapphire: Color,
    /// Accent color for the primary action.
    pub lavender: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
}

impl Theme {
    /// What: Return the accent color for a toast severity.
    ///
    /// Inputs:
    /// - `severity`: Presentation category of the toast.
    ///
    /// Output:
    /// - The palette color used for the toast's border and title.
    #[must_use]
    pub const fn severity_accent(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.sapphire,
            Severity::Success => self.green,
            Severity::Warning => self.yellow,
            Severity::Error => self.red,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
        }
    }
}

/// Default `theme.conf` contents written on first run.
const THEME_SKELETON_CONTENT: &str = "\
# billform theme
# Values are colors as #RRGGBB or R,G,B.
base = #1e1e2e
mantle = #181825
surface2 = #585b70
overlay1 = #7f849c
text = #cdd6f4
subtext0 = #a6adc8
sapphire = #74c7ec
lavender = #b4befe
green = #a6e3a1
yellow = #f9e2af
red = #f38ba8
";

/// What: Resolve (and create) the application's config directory.
///
/// Inputs:
/// - None (reads `XDG_CONFIG_HOME` / `HOME`).
///
/// Output:
/// - `$XDG_CONFIG_HOME/billform` when set, otherwise `~/.config/billform`;
///   the directory is created best-effort.
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME").ok().map_or_else(
        || {
            env::var("HOME")
                .ok()
                .map_or_else(|| PathBuf::from("."), |h| Path::new(&h).join(".config"))
        },
        PathBuf::from,
    );
    let dir = base.join("billform");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// What: Resolve (and create) the log directory under the config directory.
///
/// Inputs:
/// - None.
///
/// Output:
/// - `config_dir()/logs`, created best-effort.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// What: Parse a color value in `#RRGGBB` or `R,G,B` notation.
///
/// Inputs:
/// - `value`: Trimmed value text from a config line.
///
/// Output:
/// - `Some(Color)` on success, `None` for malformed values.
fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let mut parts = v.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::Rgb(r, g, b))
}

/// What: Apply one `key = value` line onto a palette.
///
/// Inputs:
/// - `theme`: Palette being built up from the defaults.
/// - `key`: Lowercased color name.
/// - `value`: Color value text.
///
/// Output:
/// - `true` when the key named a palette slot and the value parsed.
fn apply_color(theme: &mut Theme, key: &str, value: &str) -> bool {
    let Some(color) = parse_color(value) else {
        return false;
    };
    let slot = match key {
        "base" => &mut theme.base,
        "mantle" => &mut theme.mantle,
        "surface2" => &mut theme.surface2,
        "overlay1" => &mut theme.overlay1,
        "text" => &mut theme.text,
        "subtext0" => &mut theme.subtext0,
        "sapphire" => &mut theme.sapphire,
        "lavender" => &mut theme.lavender,
        "green" => &mut theme.green,
        "yellow" => &mut theme.yellow,
        "red" => &mut theme.red,
        _ => return false,
    };
    *slot = color;
    true
}

/// What: Load a palette from a config file, starting from the defaults.
///
/// Inputs:
/// - `path`: Location of `theme.conf`.
///
/// Output:
/// - `Ok(Theme)` with recognized keys applied; `Err` with a description when
///   the file cannot be read or a line is malformed.
fn load_theme_from_file(path: &Path) -> Result<Theme, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut theme = Theme::default();
    for (idx, line) in raw.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(format!("line {}: expected `key = value`", idx + 1));
        };
        if !apply_color(&mut theme, key.trim().to_lowercase().as_str(), value) {
            return Err(format!("line {}: unknown key or bad color", idx + 1));
        }
    }
    Ok(theme)
}

/// Global theme store with live-reload capability.
static THEME_STORE: OnceLock<RwLock<Theme>> = OnceLock::new();

/// What: Load the initial palette, writing the skeleton on first run.
///
/// Inputs:
/// - None.
///
/// Output:
/// - The configured palette, or the built-in default when the config is
///   missing or malformed (logged, never fatal).
fn load_initial_theme() -> Theme {
    let path = config_dir().join("theme.conf");
    if !path.exists() {
        let _ = fs::write(&path, THEME_SKELETON_CONTENT);
        tracing::info!(path = %path.display(), "wrote default theme skeleton");
    }
    match load_theme_from_file(&path) {
        Ok(t) => {
            tracing::info!(path = %path.display(), "loaded theme configuration");
            t
        }
        Err(msg) => {
            tracing::warn!(path = %path.display(), error = %msg, "falling back to built-in theme");
            Theme::default()
        }
    }
}

/// Return the application's theme palette, loading from config if available.
///
/// The config file lives at `config_dir()/theme.conf`; format is
/// `key = value`, one per line, with colors as `#RRGGBB` or `R,G,B`.
#[must_use]
pub fn theme() -> Theme {
    let lock = THEME_STORE.get_or_init(|| RwLock::new(load_initial_theme()));
    *lock.read().expect("theme store poisoned")
}

/// Reload the theme from disk without restarting the app.
///
/// Returns `Ok(())` on success; `Err(msg)` when the config is missing or
/// malformed (the previous palette stays active).
pub fn reload_theme() -> Result<(), String> {
    let path = config_dir().join("theme.conf");
    let new_theme = load_theme_from_file(&path)?;
    let lock = THEME_STORE.get_or_init(|| RwLock::new(load_initial_theme()));
    lock.write().map_or_else(
        |_| Err("failed to acquire theme store for writing".to_string()),
        |mut guard| {
            *guard = new_theme;
            Ok(())
        },
    )
}
