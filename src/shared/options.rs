//! Zentrale Konfiguration für den Map-Editor-Kern.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Highlight ───────────────────────────────────────────────────────

/// Highlight-Radius für Vertices in Screen-Pixeln.
pub const VERTEX_HIGHLIGHT_RANGE_PX: f32 = 10.0;
/// Highlight-Radius für Linedefs in Screen-Pixeln.
pub const LINEDEF_HIGHLIGHT_RANGE_PX: f32 = 20.0;
/// Highlight-Radius für Sektoren in Screen-Pixeln (über die nächste Linedef).
pub const SECTOR_HIGHLIGHT_RANGE_PX: f32 = 20.0;
/// Highlight-Radius für Things in Screen-Pixeln.
pub const THING_HIGHLIGHT_RANGE_PX: f32 = 10.0;

// ── Undo ────────────────────────────────────────────────────────────

/// Maximale Anzahl protokollierter Undo-Transaktionen.
pub const UNDO_MAX_TRANSACTIONS: usize = 1000;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `wad_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Highlight-Radius für Vertices (Screen-Pixel)
    pub vertex_highlight_range_px: f32,
    /// Highlight-Radius für Linedefs (Screen-Pixel)
    pub linedef_highlight_range_px: f32,
    /// Highlight-Radius für Sektoren (Screen-Pixel)
    pub sector_highlight_range_px: f32,
    /// Highlight-Radius für Things (Screen-Pixel)
    pub thing_highlight_range_px: f32,
    /// Maximale Anzahl protokollierter Undo-Transaktionen
    #[serde(default = "default_undo_max_transactions")]
    pub undo_max_transactions: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            vertex_highlight_range_px: VERTEX_HIGHLIGHT_RANGE_PX,
            linedef_highlight_range_px: LINEDEF_HIGHLIGHT_RANGE_PX,
            sector_highlight_range_px: SECTOR_HIGHLIGHT_RANGE_PX,
            thing_highlight_range_px: THING_HIGHLIGHT_RANGE_PX,
            undo_max_transactions: UNDO_MAX_TRANSACTIONS,
        }
    }
}

/// Serde-Default für `undo_max_transactions` (Abwärtskompatibilität).
fn default_undo_max_transactions() -> usize {
    UNDO_MAX_TRANSACTIONS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let opts = EditorOptions::default();

        assert_eq!(opts.linedef_highlight_range_px, LINEDEF_HIGHLIGHT_RANGE_PX);
        assert_eq!(opts.vertex_highlight_range_px, VERTEX_HIGHLIGHT_RANGE_PX);
        assert_eq!(opts.undo_max_transactions, UNDO_MAX_TRANSACTIONS);
    }

    #[test]
    fn toml_roundtrip_preserves_values() {
        let mut opts = EditorOptions::default();
        opts.linedef_highlight_range_px = 32.0;

        let text = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let parsed: EditorOptions = toml::from_str(&text).expect("Deserialisierung erwartet");

        assert_eq!(parsed, opts);
    }

    #[test]
    fn missing_undo_field_falls_back_to_default() {
        let text = "vertex_highlight_range_px = 8.0\n\
                    linedef_highlight_range_px = 16.0\n\
                    sector_highlight_range_px = 16.0\n\
                    thing_highlight_range_px = 8.0\n";
        let parsed: EditorOptions = toml::from_str(text).expect("Deserialisierung erwartet");

        assert_eq!(parsed.undo_max_transactions, UNDO_MAX_TRANSACTIONS);
        assert_eq!(parsed.vertex_highlight_range_px, 8.0);
    }
}
