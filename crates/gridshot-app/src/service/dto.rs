//! Wire types for the grid-vision service's JSON responses.

use serde::Deserialize;

/// Response of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct UploadDto {
    pub(crate) session_id: String,
}

/// Response of `POST /detect_grid`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct DetectGridDto {
    /// Where to fetch the warped preview; usually relative to the base URL.
    pub(crate) warped_url: String,
    /// Detected corners in native pixel coordinates, TL, TR, BR, BL.
    pub(crate) corners: [[f32; 2]; 4],
}

/// Response of `POST /manual_warp`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ManualWarpDto {
    pub(crate) warped_url: String,
    #[serde(default)]
    pub(crate) message: Option<String>,
}

/// Response of `POST /ocr`.
///
/// The grid arrives as nested arrays; anything that is not exactly 9×9 is
/// rejected before it can reach the board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct OcrDto {
    pub(crate) input: Vec<Vec<u8>>,
}

impl OcrDto {
    /// Returns the digit grid as a fixed 9×9 array, or `None` if the shape
    /// is off.
    #[must_use]
    pub(crate) fn to_rows(&self) -> Option<[[u8; 9]; 9]> {
        if self.input.len() != 9 {
            return None;
        }
        let mut rows = [[0_u8; 9]; 9];
        for (row, values) in rows.iter_mut().zip(&self.input) {
            *row = <[u8; 9]>::try_from(values.as_slice()).ok()?;
        }
        Some(rows)
    }
}

/// Error payload the service sends with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ErrorDto {
    pub(crate) error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_parses() {
        let dto: UploadDto =
            serde_json::from_str(r#"{"session_id": "3fa1c-77"}"#).unwrap();
        assert_eq!(dto.session_id, "3fa1c-77");
    }

    #[test]
    fn detect_grid_response_parses_corners_in_order() {
        let json = r#"{
            "warped_url": "/sessions/3fa1c-77/warped_board.png",
            "corners": [[12.0, 8.5], [980.0, 10.0], [975.5, 990.0], [15.0, 985.0]]
        }"#;
        let dto: DetectGridDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.warped_url, "/sessions/3fa1c-77/warped_board.png");
        assert_eq!(dto.corners[0], [12.0, 8.5]);
        assert_eq!(dto.corners[3], [15.0, 985.0]);
    }

    #[test]
    fn detect_grid_rejects_wrong_corner_count() {
        let json = r#"{"warped_url": "/x.png", "corners": [[0.0, 0.0], [1.0, 1.0]]}"#;
        assert!(serde_json::from_str::<DetectGridDto>(json).is_err());
    }

    #[test]
    fn manual_warp_message_is_optional() {
        let with: ManualWarpDto = serde_json::from_str(
            r#"{"warped_url": "/x.png", "message": "Manual warp successful"}"#,
        )
        .unwrap();
        assert_eq!(with.message.as_deref(), Some("Manual warp successful"));

        let without: ManualWarpDto =
            serde_json::from_str(r#"{"warped_url": "/x.png"}"#).unwrap();
        assert_eq!(without.message, None);
    }

    #[test]
    fn ocr_grid_converts_to_rows() {
        let mut input = vec![vec![0_u8; 9]; 9];
        input[0][0] = 5;
        input[8][8] = 9;
        let dto = OcrDto { input };

        let rows = dto.to_rows().unwrap();
        assert_eq!(rows[0][0], 5);
        assert_eq!(rows[8][8], 9);
        assert_eq!(rows[4][4], 0);
    }

    #[test]
    fn ocr_grid_rejects_short_rows() {
        let dto = OcrDto {
            input: vec![vec![0_u8; 8]; 9],
        };
        assert_eq!(dto.to_rows(), None);

        let dto = OcrDto {
            input: vec![vec![0_u8; 9]; 8],
        };
        assert_eq!(dto.to_rows(), None);
    }

    #[test]
    fn error_payload_parses() {
        let dto: ErrorDto =
            serde_json::from_str(r#"{"error": "Detection failed: no contour"}"#).unwrap();
        assert_eq!(dto.error, "Detection failed: no contour");
    }
}
