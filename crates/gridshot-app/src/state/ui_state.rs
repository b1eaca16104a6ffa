use std::fmt;

use gridshot_core::{Corner, Position};

use crate::{
    action::ModalKind, media::MediaSlot, playback::SolvePlayback, work::Dispatcher,
};

// UiState holds ephemeral UI-only state (status, textures, the corner
// editor, playback). None of it is persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalKind>,
    pub(crate) status: StatusMessage,
    pub(crate) selected_cell: Option<Position>,
    pub(crate) source: MediaSlot,
    pub(crate) preview: MediaSlot,
    pub(crate) source_file: Option<SourceFile>,
    pub(crate) corner_editor: CornerEditorState,
    pub(crate) playback: Option<SolvePlayback>,
    pub(crate) dispatcher: Dispatcher,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self {
            active_modal: None,
            status: StatusMessage::initial(),
            selected_cell: None,
            source: MediaSlot::default(),
            preview: MediaSlot::default(),
            source_file: None,
            corner_editor: CornerEditorState::default(),
            playback: None,
            dispatcher,
        }
    }
}

/// Severity of the status line, mapped to a theme color when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Success,
    Error,
}

/// The one-line message under the workflow screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusMessage {
    pub(crate) kind: StatusKind,
    pub(crate) text: String,
}

impl StatusMessage {
    #[must_use]
    pub(crate) fn initial() -> Self {
        Self::info("Upload a photo of a Sudoku puzzle to begin.")
    }

    #[must_use]
    pub(crate) fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub(crate) fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// The original file bytes, kept so a Submit can upload them.
#[derive(Clone)]
pub(crate) struct SourceFile {
    pub(crate) file_name: String,
    pub(crate) bytes: Vec<u8>,
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Open/drag state of the corner editor overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CornerEditorState {
    pub(crate) open: bool,
    pub(crate) dragging: Option<Corner>,
}
