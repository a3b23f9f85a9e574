//! Construction-time configuration and the ambient probes that fill it.
//!
//! A [`Config`] carries the two facts about the environment a table cares
//! about: whether UTF-8 box-drawing glyphs may be used, and how many
//! columns the terminal has. Tables read it once, when they are built.
//!
//! # Defaults
//!
//! [`Table::new`](crate::Table::new) uses the process-wide default config.
//! It starts as [`Config::detect`] (terminal width probed, UTF-8 off) and
//! can be changed with [`enable_utf8`], [`enable_utf8_per_locale`] or
//! [`set_default_config`]. Changes only affect tables built afterwards.
//!
//! ```rust
//! use termtables::{Config, Table};
//!
//! // Or bypass the process default entirely:
//! let table = Table::with_config(Config { utf8: true, max_columns: 120 });
//! assert_eq!(table.config().max_columns, 120);
//! ```
//!
//! # Probes
//!
//! - [`terminal_width`]: size of the terminal on stdout, else `$COLUMNS`.
//! - [`locale_charmap`]: the charmap of the first non-empty of `LC_ALL`,
//!   `LC_CTYPE` and `LANG`.

use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Terminal width assumed when none can be detected.
pub const DEFAULT_MAX_COLUMNS: usize = 80;

/// Configuration read when a table is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Draw borders with UTF-8 box-drawing glyphs instead of ASCII.
    pub utf8: bool,
    /// Width of the terminal in columns.
    ///
    /// Advisory only: tables never clamp or wrap to it. Compare it with
    /// [`Table::width`](crate::Table::width) to apply a policy of your own.
    pub max_columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            utf8: false,
            max_columns: DEFAULT_MAX_COLUMNS,
        }
    }
}

impl Config {
    /// Probes the terminal width. UTF-8 stays off: enabling it from the
    /// locale is opt-in through [`Config::detect_with_locale`].
    pub fn detect() -> Self {
        let max_columns = terminal_width().unwrap_or(DEFAULT_MAX_COLUMNS);
        log::debug!("detected terminal width: {} columns", max_columns);
        Config {
            utf8: false,
            max_columns,
        }
    }

    /// Like [`Config::detect`], but also enables UTF-8 when the locale's
    /// charmap is UTF-8.
    pub fn detect_with_locale() -> Self {
        Config::detect().with_locale_utf8()
    }

    /// Enables UTF-8 if the locale's charmap is UTF-8; otherwise returns
    /// `self` unchanged.
    pub fn with_locale_utf8(mut self) -> Self {
        if locale_is_utf8() {
            self.utf8 = true;
        }
        self
    }

    /// Sets the UTF-8 flag.
    pub fn utf8(mut self, utf8: bool) -> Self {
        self.utf8 = utf8;
        self
    }

    /// Sets the advisory terminal width.
    pub fn max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }

    /// Parses a config from YAML. Missing keys take their defaults, and an
    /// empty document yields [`Config::default`].
    ///
    /// ```rust
    /// use termtables::Config;
    ///
    /// let config = Config::from_yaml("utf8: true").unwrap();
    /// assert!(config.utf8);
    /// assert_eq!(config.max_columns, 80);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

static DEFAULT_CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::detect()));

/// Returns a copy of the process-wide default config.
pub fn default_config() -> Config {
    *DEFAULT_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the process-wide default config.
pub fn set_default_config(config: Config) {
    *DEFAULT_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner) = config;
}

/// Unconditionally use UTF-8 box-drawing glyphs for tables built from now on.
pub fn enable_utf8() {
    update_default(|config| config.utf8 = true);
}

/// Use UTF-8 box-drawing glyphs for tables built from now on, if the
/// locale's charmap is UTF-8.
pub fn enable_utf8_per_locale() {
    if locale_is_utf8() {
        update_default(|config| config.utf8 = true);
    }
}

fn update_default(f: impl FnOnce(&mut Config)) {
    let mut guard = DEFAULT_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}

/// Width of the terminal attached to stdout, falling back to a positive
/// integer in `$COLUMNS`.
pub fn terminal_width() -> Option<usize> {
    if let Some((width, _)) = terminal_size::terminal_size() {
        if width.0 > 0 {
            return Some(width.0 as usize);
        }
    }
    columns_from_env(std::env::var("COLUMNS").ok().as_deref())
}

fn columns_from_env(value: Option<&str>) -> Option<usize> {
    let value = value?;
    match value.trim().parse::<usize>() {
        Ok(0) => None,
        Ok(columns) => Some(columns),
        Err(_) => {
            log::debug!("ignoring non-numeric COLUMNS value {:?}", value);
            None
        }
    }
}

/// Charmap of the current locale, from the first non-empty of `LC_ALL`,
/// `LC_CTYPE` and `LANG`.
///
/// `C` and `POSIX` report `ANSI_X3.4-1968` (ASCII). A locale without an
/// explicit charmap (`en_US`) reports nothing.
pub fn locale_charmap() -> Option<String> {
    charmap_from(|key| std::env::var(key).ok())
}

fn charmap_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|key| lookup(*key))
        .find(|value| !value.is_empty())?;
    parse_charmap(&locale)
}

/// Extracts the charmap from `language_TERRITORY.CHARMAP@modifier`.
fn parse_charmap(locale: &str) -> Option<String> {
    if locale == "C" || locale == "POSIX" {
        return Some("ANSI_X3.4-1968".to_string());
    }
    let (_, rest) = locale.split_once('.')?;
    let charmap = rest.split('@').next().unwrap_or(rest);
    if charmap.is_empty() {
        None
    } else {
        Some(charmap.to_string())
    }
}

/// Whether a charmap name denotes UTF-8 (`UTF-8`, `utf8`, any case).
pub fn is_utf8_charmap(charmap: &str) -> bool {
    charmap.eq_ignore_ascii_case("UTF-8") || charmap.eq_ignore_ascii_case("UTF8")
}

fn locale_is_utf8() -> bool {
    let charmap = locale_charmap();
    log::debug!("locale charmap: {:?}", charmap);
    charmap.as_deref().is_some_and(is_utf8_charmap)
}
