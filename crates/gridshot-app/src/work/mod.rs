//! Background work offloaded from the UI thread.
//!
//! Every service call and the traced solve run as one-shot request/response
//! jobs on a worker thread, so the frame loop never blocks. Each job is
//! stamped with the workflow [`Epoch`] it was enqueued under; responses from
//! an older epoch are dropped when polled, which is how a restart discards
//! work that is still in flight.

use std::{fmt, path::PathBuf};

use gridshot_core::Board;
use gridshot_solver::{SolveOutcome, solve_with_trace};

use crate::{
    media::{self, AttachedImage, MediaError},
    service::{GridService, ServiceError, SessionHandle},
};

pub(crate) use self::dispatcher::Dispatcher;

mod dispatcher;

/// Generation counter invalidating in-flight work after a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub(crate) struct Epoch(u64);

impl Epoch {
    pub(crate) fn next(&mut self) {
        self.0 += 1;
    }
}

/// What the modal progress overlay reports while a job runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpinnerKind {
    LoadImage,
    DetectGrid,
    ManualWarp,
    RecognizeDigits,
    Solve,
}

/// Raw encoded file bytes plus the name sent to the service.
pub(crate) struct FilePayload {
    pub(crate) file_name: String,
    pub(crate) bytes: Vec<u8>,
}

impl fmt::Debug for FilePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePayload")
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// A request that can be offloaded to the worker thread.
#[derive(Debug)]
pub(crate) enum WorkRequest {
    /// Read and decode an image file from disk.
    AttachImage { path: PathBuf },
    /// Upload an attached image, then run automatic grid detection on it.
    UploadAndDetect(FilePayload),
    /// Re-run automatic grid detection for an already uploaded session.
    DetectGrid { session: SessionHandle },
    /// Re-warp the session's image with manually placed corners, given in
    /// native pixel coordinates.
    ManualWarp {
        session: SessionHandle,
        corners: [[f32; 2]; 4],
    },
    /// Run digit recognition on the session's warped grid.
    RecognizeDigits { session: SessionHandle },
    /// Run the traced solver over a confirmed board.
    Solve { board: Board },
}

/// Payload of a successful upload + automatic detection.
pub(crate) struct GridDetection {
    pub(crate) session: SessionHandle,
    pub(crate) preview: eframe::egui::ColorImage,
    /// Detected corners in native pixel coordinates, TL, TR, BR, BL.
    pub(crate) corners: [[f32; 2]; 4],
}

impl fmt::Debug for GridDetection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridDetection")
            .field("session", &self.session)
            .field("preview", &self.preview.size)
            .field("corners", &self.corners)
            .finish()
    }
}

/// Payload of a successful manual re-warp.
pub(crate) struct Rewarp {
    pub(crate) preview: eframe::egui::ColorImage,
    pub(crate) message: Option<String>,
}

impl fmt::Debug for Rewarp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rewarp")
            .field("preview", &self.preview.size)
            .field("message", &self.message)
            .finish()
    }
}

/// A response produced by background work.
#[derive(Debug)]
pub(crate) enum WorkResponse {
    /// The attached image was read and decoded.
    ImageAttached(Box<AttachedImage>),
    /// Upload and automatic detection both succeeded.
    GridDetected(Box<GridDetection>),
    /// The upload succeeded but detection did not; the session is still
    /// usable for the manual-corner path.
    GridNotFound {
        session: SessionHandle,
        error: ServiceError,
    },
    /// A manual re-warp produced a fresh preview.
    PreviewRewarped(Box<Rewarp>),
    /// A manual re-warp failed; the previous preview stays valid.
    WarpFailed { error: ServiceError },
    /// Digit recognition produced a candidate board.
    DigitsRecognized { board: Board },
    /// Digit recognition failed; the warped preview stays valid.
    RecognitionFailed { error: ServiceError },
    /// The traced solve finished, successfully or not.
    SolveFinished(Box<SolveOutcome>),
    /// A request failed before reaching its stage-specific outcome.
    Error(WorkError),
}

/// Errors that can occur while running or receiving background work.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum WorkError {
    /// The service boundary failed.
    #[display("{_0}")]
    Service(#[from] ServiceError),
    /// The attached image could not be read or decoded.
    #[display("{_0}")]
    Media(#[from] MediaError),
    /// A job was enqueued while another was still in flight.
    #[display("background work already in flight")]
    Busy,
    /// The worker thread is gone.
    #[display("background worker disconnected")]
    WorkerDisconnected,
}

impl WorkRequest {
    /// Progress overlay shown while this request is in flight.
    #[must_use]
    pub(crate) fn spinner_kind(&self) -> SpinnerKind {
        match self {
            WorkRequest::AttachImage { .. } => SpinnerKind::LoadImage,
            WorkRequest::UploadAndDetect(_) | WorkRequest::DetectGrid { .. } => {
                SpinnerKind::DetectGrid
            }
            WorkRequest::ManualWarp { .. } => SpinnerKind::ManualWarp,
            WorkRequest::RecognizeDigits { .. } => SpinnerKind::RecognizeDigits,
            WorkRequest::Solve { .. } => SpinnerKind::Solve,
        }
    }

    /// Handles a request and produces the corresponding response.
    ///
    /// The request-to-response mapping lives here so the dispatcher stays a
    /// plain channel pump.
    #[must_use]
    pub(crate) fn handle(self, service: &dyn GridService) -> WorkResponse {
        match self {
            WorkRequest::AttachImage { path } => match media::load_attached_image(&path) {
                Ok(image) => WorkResponse::ImageAttached(Box::new(image)),
                Err(err) => WorkResponse::Error(err.into()),
            },
            WorkRequest::UploadAndDetect(payload) => {
                let session = match service.upload(&payload.file_name, payload.bytes) {
                    Ok(session) => session,
                    Err(err) => return WorkResponse::Error(WorkError::Service(err)),
                };
                detect(service, session)
            }
            WorkRequest::DetectGrid { session } => detect(service, session),
            WorkRequest::ManualWarp { session, corners } => {
                match service.manual_warp(&session, corners) {
                    Ok(rewarped) => match media::decode_color_image(&rewarped.preview_png) {
                        Ok(preview) => WorkResponse::PreviewRewarped(Box::new(Rewarp {
                            preview,
                            message: rewarped.message,
                        })),
                        Err(err) => WorkResponse::WarpFailed {
                            error: ServiceError::Malformed {
                                reason: err.to_string(),
                            },
                        },
                    },
                    Err(error) => WorkResponse::WarpFailed { error },
                }
            }
            WorkRequest::RecognizeDigits { session } => match service.recognize(&session) {
                Ok(rows) => WorkResponse::DigitsRecognized {
                    board: Board::from_rows(rows),
                },
                Err(error) => WorkResponse::RecognitionFailed { error },
            },
            WorkRequest::Solve { board } => {
                WorkResponse::SolveFinished(Box::new(solve_with_trace(&board)))
            }
        }
    }
}

/// Runs detection and bundles the preview; detection failures keep the
/// session so the manual-corner path stays reachable.
fn detect(service: &dyn GridService, session: SessionHandle) -> WorkResponse {
    let detected = match service.detect_grid(&session) {
        Ok(detected) => detected,
        Err(error) => return WorkResponse::GridNotFound { session, error },
    };
    match media::decode_color_image(&detected.preview_png) {
        Ok(preview) => WorkResponse::GridDetected(Box::new(GridDetection {
            session,
            preview,
            corners: detected.corners,
        })),
        Err(err) => WorkResponse::GridNotFound {
            session,
            error: ServiceError::Malformed {
                reason: err.to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use gridshot_core::{Digit, Position};

    use super::*;
    use crate::service::{DetectedGrid, RewarpedGrid};

    const DETECTED_CORNERS: [[f32; 2]; 4] =
        [[10.0, 12.0], [400.0, 14.0], [398.0, 402.0], [11.0, 399.0]];

    const CLASSIC_PUZZLE: &str = "
        53..7....
        6..195...
        .98....6.
        8...6...3
        4..8.3..1
        7...2...6
        .6....28.
        ...419..5
        ....8..79";

    fn tiny_png() -> Vec<u8> {
        let buffer = image::RgbaImage::new(2, 2);
        let mut bytes = Vec::new();
        buffer
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        bytes
    }

    #[derive(Debug, Default)]
    struct StubService {
        fail_detect: bool,
        fail_warp: bool,
        fail_recognize: bool,
        rows: [[u8; 9]; 9],
    }

    impl GridService for StubService {
        fn upload(
            &self,
            _file_name: &str,
            _bytes: Vec<u8>,
        ) -> Result<SessionHandle, ServiceError> {
            Ok(SessionHandle::new("stub-session"))
        }

        fn detect_grid(&self, _session: &SessionHandle) -> Result<DetectedGrid, ServiceError> {
            if self.fail_detect {
                return Err(ServiceError::Rejected {
                    message: "Detection failed: no contour".to_owned(),
                });
            }
            Ok(DetectedGrid {
                preview_png: tiny_png(),
                corners: DETECTED_CORNERS,
            })
        }

        fn manual_warp(
            &self,
            _session: &SessionHandle,
            _corners: [[f32; 2]; 4],
        ) -> Result<RewarpedGrid, ServiceError> {
            if self.fail_warp {
                return Err(ServiceError::Rejected {
                    message: "Manual warp failed: bad corners".to_owned(),
                });
            }
            Ok(RewarpedGrid {
                preview_png: tiny_png(),
                message: Some("Manual warp successful".to_owned()),
            })
        }

        fn recognize(&self, _session: &SessionHandle) -> Result<[[u8; 9]; 9], ServiceError> {
            if self.fail_recognize {
                return Err(ServiceError::Rejected {
                    message: "OCR failed: no model".to_owned(),
                });
            }
            Ok(self.rows)
        }
    }

    #[test]
    fn upload_and_detect_returns_detection_with_session() {
        let service = StubService::default();
        let request = WorkRequest::UploadAndDetect(FilePayload {
            file_name: "puzzle.png".to_owned(),
            bytes: tiny_png(),
        });

        match request.handle(&service) {
            WorkResponse::GridDetected(detection) => {
                assert_eq!(detection.session, SessionHandle::new("stub-session"));
                assert_eq!(detection.corners, DETECTED_CORNERS);
                assert_eq!(detection.preview.size, [2, 2]);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn failed_detection_keeps_session_for_manual_path() {
        let service = StubService {
            fail_detect: true,
            ..StubService::default()
        };
        let request = WorkRequest::UploadAndDetect(FilePayload {
            file_name: "puzzle.png".to_owned(),
            bytes: tiny_png(),
        });

        match request.handle(&service) {
            WorkResponse::GridNotFound { session, error } => {
                assert_eq!(session, SessionHandle::new("stub-session"));
                assert!(matches!(error, ServiceError::Rejected { .. }));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn recognition_sanitizes_digit_grid() {
        let mut rows = [[0_u8; 9]; 9];
        rows[0][0] = 5;
        rows[0][1] = 77; // out of range, must come through as empty
        let service = StubService {
            rows,
            ..StubService::default()
        };

        match (WorkRequest::RecognizeDigits {
            session: SessionHandle::new("stub-session"),
        })
        .handle(&service)
        {
            WorkResponse::DigitsRecognized { board } => {
                assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
                assert_eq!(board.get(Position::new(0, 1)), None);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn recognition_failure_is_reported() {
        let service = StubService {
            fail_recognize: true,
            ..StubService::default()
        };

        match (WorkRequest::RecognizeDigits {
            session: SessionHandle::new("stub-session"),
        })
        .handle(&service)
        {
            WorkResponse::RecognitionFailed { error } => {
                assert!(matches!(error, ServiceError::Rejected { .. }));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn warp_failure_is_reported() {
        let service = StubService {
            fail_warp: true,
            ..StubService::default()
        };

        match (WorkRequest::ManualWarp {
            session: SessionHandle::new("stub-session"),
            corners: DETECTED_CORNERS,
        })
        .handle(&service)
        {
            WorkResponse::WarpFailed { error } => {
                assert!(matches!(error, ServiceError::Rejected { .. }));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn solve_request_traces_classic_puzzle() {
        let board: Board = CLASSIC_PUZZLE.parse().unwrap();
        let service = StubService::default();

        match (WorkRequest::Solve { board }).handle(&service) {
            WorkResponse::SolveFinished(outcome) => {
                assert!(outcome.solved);
                assert!(outcome.final_board.is_full());
                assert!(!outcome.steps.is_empty());
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn attach_image_reports_missing_file() {
        let service = StubService::default();
        let request = WorkRequest::AttachImage {
            path: "/nonexistent/sudoku.png".into(),
        };

        assert!(matches!(
            request.handle(&service),
            WorkResponse::Error(WorkError::Media(MediaError::Io(_)))
        ));
    }
}
