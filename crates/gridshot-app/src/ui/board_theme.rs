use eframe::egui::{Color32, Visuals};

/// Color palette for board rendering.
///
/// This is intentionally independent from `egui::Visuals` so board-specific
/// semantics (selection, givens, solver digits) can be tuned without being
/// constrained by the global UI theme.
#[derive(Debug, Clone)]
pub(crate) struct BoardPalette {
    pub(crate) cell_bg_default: Color32,
    pub(crate) cell_bg_selected: Color32,

    pub(crate) border_inactive: Color32,
    pub(crate) border_selected: Color32,

    /// Digits confirmed by the user before solving.
    pub(crate) text_given: Color32,
    /// Digits the user is still editing.
    pub(crate) text_entered: Color32,
    /// Digits placed by the solver during playback.
    pub(crate) text_solver: Color32,
}

impl BoardPalette {
    /// Initialize the palette using the current visuals.
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_selected: visuals.selection.bg_fill,

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_selected: visuals.selection.stroke.color,

            text_given: visuals.strong_text_color(),
            text_entered: visuals.text_color(),
            text_solver: visuals.hyperlink_color,
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub(crate) struct BoardTheme {
    pub(crate) light: BoardPalette,
    pub(crate) dark: BoardPalette,
}

impl BoardTheme {
    /// Create a theme using the current visuals for both palettes.
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        let palette = BoardPalette::from_visuals(visuals);
        Self {
            light: palette.clone(),
            dark: palette,
        }
    }

    pub(crate) fn palette_for(&self, visuals: &Visuals) -> &BoardPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}
