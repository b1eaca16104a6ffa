//! Boundary to the external grid-vision service.
//!
//! The service stores each uploaded photo under a session id and exposes
//! grid detection, manual re-warping, and digit recognition for it. All
//! calls in this module block; they are only ever made from the background
//! worker thread.

use std::fmt;

pub(crate) use self::http::HttpGridService;

pub(crate) mod dto;
mod http;

/// Opaque id correlating service calls with the image stored server-side.
///
/// Handles survive app restarts: the current one is persisted and offered
/// for resumption on the next launch.
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, derive_more::Display,
)]
pub struct SessionHandle(String);

impl SessionHandle {
    #[must_use]
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

/// Errors crossing the service boundary.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum ServiceError {
    /// The request never completed: connection refused, timeout, and so on.
    #[display("service unreachable: {_0}")]
    #[from]
    Transport(reqwest::Error),
    /// The service answered with an error payload.
    #[display("{message}")]
    Rejected {
        /// Message from the service's `error` field.
        message: String,
    },
    /// The service answered 2xx but the body was not what we expect.
    #[display("malformed service response: {reason}")]
    Malformed { reason: String },
}

/// Result of automatic grid detection.
#[derive(Clone, PartialEq)]
pub(crate) struct DetectedGrid {
    /// Encoded PNG of the warped, top-down grid.
    pub(crate) preview_png: Vec<u8>,
    /// Detected corners in native pixel coordinates, TL, TR, BR, BL.
    pub(crate) corners: [[f32; 2]; 4],
}

impl fmt::Debug for DetectedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectedGrid")
            .field("preview_png", &self.preview_png.len())
            .field("corners", &self.corners)
            .finish()
    }
}

/// Result of a manual re-warp.
#[derive(Clone, PartialEq)]
pub(crate) struct RewarpedGrid {
    /// Encoded PNG of the re-warped grid.
    pub(crate) preview_png: Vec<u8>,
    /// Confirmation message from the service, if it sent one.
    pub(crate) message: Option<String>,
}

impl fmt::Debug for RewarpedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewarpedGrid")
            .field("preview_png", &self.preview_png.len())
            .field("message", &self.message)
            .finish()
    }
}

/// The operations the grid-vision service offers.
///
/// Implementations may block; the worker thread is the only caller.
pub(crate) trait GridService: Send {
    /// Registers the image bytes with the service and returns the session
    /// correlating all later calls.
    fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<SessionHandle, ServiceError>;

    /// Runs automatic grid detection on the session's image.
    fn detect_grid(&self, session: &SessionHandle) -> Result<DetectedGrid, ServiceError>;

    /// Re-warps the session's image using user-supplied corners, in native
    /// pixel coordinates.
    fn manual_warp(
        &self,
        session: &SessionHandle,
        corners: [[f32; 2]; 4],
    ) -> Result<RewarpedGrid, ServiceError>;

    /// Runs digit recognition on the warped grid. `0` means an empty cell.
    fn recognize(&self, session: &SessionHandle) -> Result<[[u8; 9]; 9], ServiceError>;
}
