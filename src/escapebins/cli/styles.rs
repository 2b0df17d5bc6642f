//! Styles for the escapebins CLI.
//!
//! Renderers and templates only ever name a style (`title`, `note`, `sh-string`, ...). What a
//! name looks like is decided here, once, by the active [`Theme`]. There are two palettes, one
//! for light and one for dark terminals, picked at startup with `dark-light`.
//!
//! A [`StyleConfig`] bundles the theme with the decision whether to emit ANSI codes at all.
//! It is passed by value into every render function, so nothing about styling is global and
//! tests render plain text with [`StyleConfig::plain`].
//!
//! Unknown style names are rendered with a `(!?)` prefix so typos in templates show up in
//! the output instead of silently losing their style.

use console::{Style, Term};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prefix shown when a template asks for a style the theme does not define.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const FRAME: &str = "frame";
    pub const MARK_OK: &str = "mark-ok";
    pub const MARK_FAIL: &str = "mark-fail";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
    pub const TITLE: &str = "title";
    pub const NOTE: &str = "note";
    pub const DIVIDER: &str = "divider";
    pub const GROUP: &str = "group";
    pub const COUNT: &str = "count";
    pub const BANNER: &str = "banner";
    pub const BANNER_ACCENT: &str = "banner-accent";
    // Shell highlighting
    pub const SH_TEXT: &str = "sh-text";
    pub const SH_COMMAND: &str = "sh-command";
    pub const SH_KEYWORD: &str = "sh-keyword";
    pub const SH_OPTION: &str = "sh-option";
    pub const SH_STRING: &str = "sh-string";
    pub const SH_VARIABLE: &str = "sh-variable";
    pub const SH_OPERATOR: &str = "sh-operator";
    pub const SH_COMMENT: &str = "sh-comment";
    pub const SH_PATH: &str = "sh-path";
    pub const SH_ESCAPE: &str = "sh-escape";
}

/// A named collection of styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    #[cfg(test)]
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

/// Theme plus the color on/off decision, handed to every renderer.
#[derive(Clone)]
pub struct StyleConfig {
    theme: Theme,
    use_color: bool,
}

impl StyleConfig {
    pub fn new(theme: Theme, use_color: bool) -> Self {
        Self { theme, use_color }
    }

    /// No ANSI codes, dark palette names (only the names matter without color).
    pub fn plain() -> Self {
        Self::new(DARK_THEME.clone(), false)
    }

    /// Resolves the palette from the terminal background and enables color when stdout
    /// supports it, unless `no_color` is set or `CLICOLOR`/`NO_COLOR` turn it off.
    pub fn detect(no_color: bool) -> Self {
        let use_color =
            !no_color && console::colors_enabled() && Term::stdout().features().colors_supported();
        Self::new(resolved_theme(), use_color)
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Applies a named style to text.
    pub fn paint(&self, name: &str, text: &str) -> String {
        match self.theme.get(name) {
            Some(style) if self.use_color => {
                style.clone().force_styling(true).apply_to(text).to_string()
            }
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

static LIGHT_THEME: Lazy<Theme> = Lazy::new(build_light_theme);
static DARK_THEME: Lazy<Theme> = Lazy::new(build_dark_theme);

/// Returns the theme matching the terminal's light or dark mode.
pub fn resolved_theme() -> Theme {
    match dark_light::detect() {
        dark_light::Mode::Light => LIGHT_THEME.clone(),
        dark_light::Mode::Dark => DARK_THEME.clone(),
    }
}

/// Nearest ANSI 256-color index for an RGB triplet.
pub fn ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((r as u16 - 8) * 24 / 247) as u8,
        };
    }
    let cube = |v: u8| (v as u16 * 5 / 255) as u8;
    16 + 36 * cube(r) + 6 * cube(g) + cube(b)
}

fn rgb(color: (u8, u8, u8)) -> Style {
    Style::new().color256(ansi256(color))
}

fn with_shared(theme: Theme, muted: Style, accent: Style) -> Theme {
    theme
        .add(names::FRAME, muted.clone().bold())
        .add(names::MARK_OK, Style::new().green().bold())
        .add(names::MARK_FAIL, Style::new().red().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
        .add(names::TITLE, accent.clone().bold())
        .add(names::NOTE, Style::new().dim())
        .add(names::DIVIDER, Style::new().bold())
        .add(names::GROUP, accent.clone().bold())
        .add(names::COUNT, accent.clone().bold())
        .add(names::BANNER, accent.bold())
        .add(names::BANNER_ACCENT, muted.bold())
}

fn build_light_theme() -> Theme {
    let regular = Style::new().black();
    let muted = rgb((115, 115, 115));
    let accent = rgb((186, 33, 45));

    let theme = Theme::new()
        .add(names::INFO, regular.clone())
        .add(names::SH_TEXT, regular.clone())
        .add(names::SH_COMMAND, rgb((0, 95, 175)).bold())
        .add(names::SH_KEYWORD, rgb((135, 0, 135)).bold())
        .add(names::SH_OPTION, rgb((0, 128, 128)))
        .add(names::SH_STRING, rgb((0, 128, 0)))
        .add(names::SH_VARIABLE, rgb((175, 95, 0)))
        .add(names::SH_OPERATOR, rgb((186, 33, 45)))
        .add(names::SH_COMMENT, muted.clone().italic())
        .add(names::SH_PATH, regular.underlined())
        .add(names::SH_ESCAPE, rgb((175, 95, 0)).bold());
    with_shared(theme, muted, accent)
}

fn build_dark_theme() -> Theme {
    let regular = Style::new().white();
    let muted = rgb((140, 140, 140));
    let accent = rgb((255, 95, 95));

    let theme = Theme::new()
        .add(names::INFO, regular.clone())
        .add(names::SH_TEXT, regular.clone())
        .add(names::SH_COMMAND, rgb((95, 175, 255)).bold())
        .add(names::SH_KEYWORD, rgb((215, 135, 255)).bold())
        .add(names::SH_OPTION, rgb((95, 215, 215)))
        .add(names::SH_STRING, rgb((135, 215, 135)))
        .add(names::SH_VARIABLE, rgb((255, 175, 95)))
        .add(names::SH_OPERATOR, rgb((255, 95, 95)))
        .add(names::SH_COMMENT, muted.clone().italic())
        .add(names::SH_PATH, regular.underlined())
        .add(names::SH_ESCAPE, rgb((255, 175, 95)).bold());
    with_shared(theme, muted, accent)
}
