//! `reqwest::blocking` client for the grid-vision service.

use std::time::Duration;

use reqwest::blocking::{Client, Response, multipart};
use serde::de::DeserializeOwned;

use super::{
    DetectedGrid, GridService, RewarpedGrid, ServiceError, SessionHandle,
    dto::{DetectGridDto, ErrorDto, ManualWarpDto, OcrDto, UploadDto},
};

const USER_AGENT: &str = concat!("gridshot/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP implementation of [`GridService`].
///
/// Detection and recognition can take a while server-side, so the request
/// timeout is generous; the UI stays responsive because calls run on the
/// worker thread.
#[derive(Debug, Clone)]
pub(crate) struct HttpGridService {
    client: Client,
    base_url: String,
}

impl HttpGridService {
    /// Creates a client for the service at `base_url`.
    pub(crate) fn new(base_url: &str) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Resolves a URL from a response body, which is usually relative.
    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_owned()
        } else {
            format!("{}/{}", self.base_url, url.trim_start_matches('/'))
        }
    }

    fn fetch_preview(&self, url: &str) -> Result<Vec<u8>, ServiceError> {
        let response = self.client.get(self.resolve(url)).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Rejected {
                message: format!("preview fetch returned {status}"),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}

/// Decodes a 2xx body as `T`, or surfaces the service's `error` field.
fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return response.json().map_err(|err| ServiceError::Malformed {
            reason: err.to_string(),
        });
    }
    let message = response
        .json::<ErrorDto>()
        .map(|dto| dto.error)
        .unwrap_or_else(|_| format!("service returned {status}"));
    Err(ServiceError::Rejected { message })
}

impl GridService for HttpGridService {
    fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<SessionHandle, ServiceError> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_owned());
        let form = multipart::Form::new().part("image", part);
        let response = self
            .client
            .post(self.endpoint("/upload"))
            .multipart(form)
            .send()?;
        let dto: UploadDto = parse(response)?;
        Ok(SessionHandle::new(dto.session_id))
    }

    fn detect_grid(&self, session: &SessionHandle) -> Result<DetectedGrid, ServiceError> {
        let response = self
            .client
            .post(self.endpoint("/detect_grid"))
            .form(&[("session_id", session.as_str())])
            .send()?;
        let dto: DetectGridDto = parse(response)?;
        let preview_png = self.fetch_preview(&dto.warped_url)?;
        Ok(DetectedGrid {
            preview_png,
            corners: dto.corners,
        })
    }

    fn manual_warp(
        &self,
        session: &SessionHandle,
        corners: [[f32; 2]; 4],
    ) -> Result<RewarpedGrid, ServiceError> {
        let corners_json =
            serde_json::to_string(&corners).map_err(|err| ServiceError::Malformed {
                reason: err.to_string(),
            })?;
        let response = self
            .client
            .post(self.endpoint("/manual_warp"))
            .form(&[
                ("session_id", session.as_str()),
                ("corners", corners_json.as_str()),
            ])
            .send()?;
        let dto: ManualWarpDto = parse(response)?;
        let preview_png = self.fetch_preview(&dto.warped_url)?;
        Ok(RewarpedGrid {
            preview_png,
            message: dto.message,
        })
    }

    fn recognize(&self, session: &SessionHandle) -> Result<[[u8; 9]; 9], ServiceError> {
        let response = self
            .client
            .post(self.endpoint("/ocr"))
            .form(&[("session_id", session.as_str())])
            .send()?;
        let dto: OcrDto = parse(response)?;
        dto.to_rows().ok_or_else(|| ServiceError::Malformed {
            reason: "digit grid is not 9x9".to_owned(),
        })
    }
}
