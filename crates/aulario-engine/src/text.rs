use unicode_normalization::UnicodeNormalization;

/// Normalize a string for accent-insensitive comparison.
///
/// Lowercases, applies Unicode canonical decomposition (NFD) and strips the
/// combining diacritical marks block (U+0300..=U+036F), so "Canción" and
/// "cancion" compare equal. Internal whitespace is left as authored.
///
/// Shared by the color-table lookup in the renderer and by the catalog
/// search filter.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036F}').contains(c))
        .collect()
}
