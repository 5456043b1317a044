//! Semantic coloring for color-reference tables.
//!
//! Lessons about turtle graphics and similar topics carry tables whose first
//! column names a color. When the first header cell mentions "color", each
//! row's first cell is matched against the fixed color-name map and tagged
//! with a display color for the presentation layer.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::text::normalize;

/// Display-color identifier for a recognized color name.
///
/// The presentation layer maps these to actual styling; unmatched cells get
/// no palette entry and render in the default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Palette {
    Black,
    Orange,
    Blue,
    Purple,
    DarkRed,
    LightRed,
    Green,
}

/// Spanish color names as they appear in authored tables, keyed by their
/// normalized form.
static COLOR_NAMES: Lazy<HashMap<&'static str, Palette>> = Lazy::new(|| {
    HashMap::from([
        ("negro", Palette::Black),
        ("naranja", Palette::Orange),
        ("azul", Palette::Blue),
        ("morado", Palette::Purple),
        ("rojo oscuro", Palette::DarkRed),
        ("rojo claro", Palette::LightRed),
        ("verde", Palette::Green),
    ])
});

/// Whether a table's headers mark it as a color-reference table: the first
/// header cell, normalized, contains the substring "color".
pub fn is_color_table(headers: &[String]) -> bool {
    headers
        .first()
        .is_some_and(|h| normalize(h).contains("color"))
}

/// Look up the display color for a first-column cell. Case- and
/// diacritic-insensitive; spacing must match the authored names.
pub fn color_for_cell(text: &str) -> Option<Palette> {
    COLOR_NAMES.get(normalize(text).as_str()).copied()
}
