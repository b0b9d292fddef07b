//! Theme system
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/ranklist/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/ranklist/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Stable identifier (e.g., "default-dark", "my-custom-theme")
    pub id: String,
    /// Display name from YAML (e.g., "Default Dark")
    pub name: String,
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    match crate::config_paths::themes_dir() {
        Some(dir) => load_theme_from(&dir, id),
        None => Theme::from_builtin(id),
    }
}

/// Load theme by id, looking in `user_dir` before the builtins
pub fn load_theme_from(user_dir: &Path, id: &str) -> Result<Theme, String> {
    let user_path = user_dir.join(format!("{}.yaml", id));
    if user_path.exists() {
        tracing::info!("Loading user theme from {}", user_path.display());
        return from_file(&user_path);
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// List all available themes from all sources
///
/// User themes override builtins with the same id.
pub fn list_available_themes() -> Vec<ThemeInfo> {
    match crate::config_paths::themes_dir() {
        Some(dir) => list_themes_in(&dir),
        None => list_themes_in(Path::new("")),
    }
}

/// List user themes in `user_dir` followed by the builtins they don't shadow
pub fn list_themes_in(user_dir: &Path) -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Ok(entries) = std::fs::read_dir(user_dir) {
        let mut paths: Vec<_> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "yaml" || ext == "yml"))
            .collect();
        paths.sort();

        for path in paths {
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if seen_ids.insert(id.to_string()) {
                let name = from_file(&path)
                    .map(|t| t.name)
                    .unwrap_or_else(|_| id.to_string());
                themes.push(ThemeInfo {
                    id: id.to_string(),
                    name,
                    source: ThemeSource::User,
                });
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| format!("Invalid color {}: {}", s, e))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

fn parse_optional(value: &Option<String>, fallback: Color) -> Result<Color, String> {
    value
        .as_deref()
        .map(Color::from_hex)
        .transpose()
        .map(|c| c.unwrap_or(fallback))
}

// ============================================================================
// Raw theme data (as parsed from YAML)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub window: WindowThemeData,
    pub row: RowThemeData,
    pub status_bar: StatusBarThemeData,
    #[serde(default)]
    pub toolbar: ToolbarThemeData,
    #[serde(default)]
    pub form: FormThemeData,
    #[serde(default)]
    pub button: ButtonThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowThemeData {
    pub background: String,
    pub foreground: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RowThemeData {
    pub background: String,
    pub border: String,
    pub label_foreground: String,
    pub field_foreground: String,
    #[serde(default)]
    pub background_dragging: Option<String>,
    #[serde(default)]
    pub field_background: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub remove_foreground: Option<String>,
    #[serde(default)]
    pub drop_indicator: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarThemeData {
    pub background: String,
    pub foreground: String,
}

/// Toolbar colors (optional, derived from the window colors when missing)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ToolbarThemeData {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
}

/// Form panel colors (all optional)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FormThemeData {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub input_background: Option<String>,
    #[serde(default)]
    pub input_border_focused: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Button colors (all optional)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ButtonThemeData {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub background_hover: Option<String>,
    #[serde(default)]
    pub background_pressed: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub focus_ring: Option<String>,
}

// ============================================================================
// Resolved theme
// ============================================================================

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub window: WindowTheme,
    pub toolbar: ToolbarTheme,
    pub row: RowTheme,
    pub form: FormTheme,
    pub button: ButtonTheme,
    pub status_bar: StatusBarTheme,
}

#[derive(Debug, Clone)]
pub struct WindowTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct ToolbarTheme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct RowTheme {
    pub background: Color,
    /// Background of the row currently being dragged
    pub background_dragging: Color,
    pub border: Color,
    pub label_foreground: Color,
    pub field_foreground: Color,
    pub field_background: Color,
    pub handle: Color,
    pub remove_foreground: Color,
    /// Outline drawn around the dragged row
    pub drop_indicator: Color,
}

#[derive(Debug, Clone)]
pub struct FormTheme {
    pub background: Color,
    /// Optional border color (None = no border)
    pub border: Option<Color>,
    pub foreground: Color,
    pub input_background: Color,
    pub input_border_focused: Color,
    pub placeholder: Color,
    pub cursor: Color,
}

#[derive(Debug, Clone)]
pub struct ButtonTheme {
    pub background: Color,
    pub background_hover: Color,
    pub background_pressed: Color,
    pub border: Color,
    pub foreground: Color,
    pub focus_ring: Color,
}

#[derive(Debug, Clone)]
pub struct StatusBarTheme {
    pub background: Color,
    pub foreground: Color,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    ///
    /// Optional sections fall back to colors derived from the required ones.
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let ui = &data.ui;

        let window = WindowTheme {
            background: Color::from_hex(&ui.window.background)?,
            foreground: Color::from_hex(&ui.window.foreground)?,
        };

        let row_background = Color::from_hex(&ui.row.background)?;
        let row_border = Color::from_hex(&ui.row.border)?;
        let label_foreground = Color::from_hex(&ui.row.label_foreground)?;
        let field_foreground = Color::from_hex(&ui.row.field_foreground)?;
        let accent = Color::rgb(0x35, 0x74, 0xF0);

        let row = RowTheme {
            background: row_background,
            background_dragging: parse_optional(&ui.row.background_dragging, row_border)?,
            border: row_border,
            label_foreground,
            field_foreground,
            field_background: parse_optional(&ui.row.field_background, row_background)?,
            handle: parse_optional(&ui.row.handle, label_foreground)?,
            remove_foreground: parse_optional(&ui.row.remove_foreground, field_foreground)?,
            drop_indicator: parse_optional(&ui.row.drop_indicator, accent)?,
        };

        let toolbar = ToolbarTheme {
            background: parse_optional(&ui.toolbar.background, row_background)?,
            foreground: parse_optional(&ui.toolbar.foreground, window.foreground)?,
            border: parse_optional(&ui.toolbar.border, row_border)?,
        };

        let form = FormTheme {
            background: parse_optional(&ui.form.background, row_background)?,
            border: ui.form.border.as_deref().map(Color::from_hex).transpose()?,
            foreground: parse_optional(&ui.form.foreground, window.foreground)?,
            input_background: parse_optional(&ui.form.input_background, window.background)?,
            input_border_focused: parse_optional(&ui.form.input_border_focused, accent)?,
            placeholder: parse_optional(&ui.form.placeholder, label_foreground)?,
            cursor: parse_optional(&ui.form.cursor, window.foreground)?,
        };

        let button = ButtonTheme {
            background: parse_optional(&ui.button.background, row_border)?,
            background_hover: parse_optional(&ui.button.background_hover, row_border)?,
            background_pressed: parse_optional(&ui.button.background_pressed, accent)?,
            border: parse_optional(&ui.button.border, row_border)?,
            foreground: parse_optional(&ui.button.foreground, window.foreground)?,
            focus_ring: parse_optional(&ui.button.focus_ring, accent)?,
        };

        let status_bar = StatusBarTheme {
            background: Color::from_hex(&ui.status_bar.background)?,
            foreground: Color::from_hex(&ui.status_bar.foreground)?,
        };

        Ok(Theme {
            name: data.name,
            window,
            toolbar,
            row,
            form,
            button,
            status_bar,
        })
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        Theme::from_yaml(DEFAULT_DARK_YAML).unwrap_or_else(|_| Self::fallback())
    }

    /// Hardcoded colors used if the embedded YAML ever fails to parse
    fn fallback() -> Self {
        let bg = Color::rgb(0x1E, 0x1F, 0x22);
        let panel = Color::rgb(0x2B, 0x2D, 0x30);
        let border = Color::rgb(0x39, 0x3B, 0x40);
        let fg = Color::rgb(0xDF, 0xE1, 0xE5);
        let muted = Color::rgb(0x6F, 0x73, 0x7A);
        let accent = Color::rgb(0x35, 0x74, 0xF0);
        Theme {
            name: "Default Dark".to_string(),
            window: WindowTheme {
                background: bg,
                foreground: fg,
            },
            toolbar: ToolbarTheme {
                background: panel,
                foreground: fg,
                border,
            },
            row: RowTheme {
                background: panel,
                background_dragging: Color::rgb(0x2E, 0x43, 0x6E),
                border,
                label_foreground: muted,
                field_foreground: fg,
                field_background: Color::rgb(0x31, 0x34, 0x38),
                handle: muted,
                remove_foreground: Color::rgb(0xE0, 0x6C, 0x75),
                drop_indicator: accent,
            },
            form: FormTheme {
                background: panel,
                border: Some(border),
                foreground: fg,
                input_background: bg,
                input_border_focused: accent,
                placeholder: muted,
                cursor: fg,
            },
            button: ButtonTheme {
                background: border,
                background_hover: Color::rgb(0x43, 0x45, 0x4A),
                background_pressed: accent,
                border: Color::rgb(0x4E, 0x51, 0x57),
                foreground: fg,
                focus_ring: accent,
            },
            status_bar: StatusBarTheme {
                background: panel,
                foreground: Color::rgb(0x9D, 0xA0, 0xA8),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = Theme::from_yaml(builtin.yaml);
            assert!(theme.is_ok(), "{} failed: {:?}", builtin.id, theme.err());
        }
    }

    #[test]
    fn test_fallback_matches_embedded_dark_background() {
        let embedded = Theme::default_dark();
        assert_eq!(embedded.window.background, Theme::fallback().window.background);
    }

    #[test]
    fn test_from_hex_rejects_non_ascii() {
        assert!(Color::from_hex("#ééé").is_err());
    }
}
