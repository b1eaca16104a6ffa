//! Image decoding and texture management.
//!
//! Decoding happens on the worker thread; the UI thread only uploads the
//! resulting [`ColorImage`] to the GPU, lazily and at most once per image.

use std::{fmt, path::Path};

use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};

/// Errors while reading or decoding an attached image.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum MediaError {
    /// The file could not be read.
    #[display("could not read image file: {_0}")]
    Io(#[from] std::io::Error),
    /// The bytes were not a decodable image.
    #[display("could not decode image: {_0}")]
    Decode(#[from] image::ImageError),
}

/// Decodes encoded image bytes (PNG, JPEG, ...) into an egui color image.
pub(crate) fn decode_color_image(bytes: &[u8]) -> Result<ColorImage, MediaError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// An image read from disk, decoded and ready for upload and display.
pub(crate) struct AttachedImage {
    /// File name sent to the service.
    pub(crate) file_name: String,
    /// The raw encoded bytes, kept for upload.
    pub(crate) bytes: Vec<u8>,
    /// The decoded pixels, kept for display and the corner editor.
    pub(crate) color: ColorImage,
}

impl fmt::Debug for AttachedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedImage")
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .field("size", &self.color.size)
            .finish()
    }
}

/// Reads and decodes an image file from disk.
pub(crate) fn load_attached_image(path: &Path) -> Result<AttachedImage, MediaError> {
    let bytes = std::fs::read(path)?;
    let color = decode_color_image(&bytes)?;
    let file_name = path.file_name().map_or_else(
        || "image".to_owned(),
        |name| name.to_string_lossy().into_owned(),
    );
    Ok(AttachedImage {
        file_name,
        bytes,
        color,
    })
}

/// A decoded image plus its lazily allocated texture.
///
/// Setting a new image bumps a version counter; the texture is reallocated
/// on the next access, so state code never touches the GPU.
#[derive(Default)]
pub(crate) struct MediaSlot {
    image: Option<ColorImage>,
    version: u64,
    texture: Option<(u64, TextureHandle)>,
}

impl MediaSlot {
    pub(crate) fn set(&mut self, image: ColorImage) {
        self.image = Some(image);
        self.version += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.image = None;
        self.texture = None;
        self.version += 1;
    }

    #[must_use]
    pub(crate) fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Native pixel size of the held image, if any.
    #[must_use]
    pub(crate) fn size(&self) -> Option<[usize; 2]> {
        self.image.as_ref().map(|image| image.size)
    }

    /// Returns the texture for the current image, allocating it on first
    /// access after a [`set`](Self::set).
    pub(crate) fn texture(&mut self, ctx: &Context, name: &str) -> Option<TextureHandle> {
        let image = self.image.as_ref()?;
        let stale = self
            .texture
            .as_ref()
            .is_none_or(|(version, _)| *version != self.version);
        if stale {
            let handle = ctx.load_texture(name, image.clone(), TextureOptions::LINEAR);
            self.texture = Some((self.version, handle));
        }
        self.texture.as_ref().map(|(_, handle)| handle.clone())
    }
}

impl fmt::Debug for MediaSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaSlot")
            .field("size", &self.size())
            .field("version", &self.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::Color32;

    use super::*;

    fn tiny_png() -> Vec<u8> {
        let mut buffer = image::RgbaImage::new(2, 2);
        buffer.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        buffer
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        bytes
    }

    #[test]
    fn decode_reads_generated_png() {
        let decoded = decode_color_image(&tiny_png()).unwrap();
        assert_eq!(decoded.size, [2, 2]);
        assert_eq!(decoded.pixels[0], Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn decode_rejects_non_image_bytes() {
        assert!(matches!(
            decode_color_image(b"definitely not an image"),
            Err(MediaError::Decode(_))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = load_attached_image(Path::new("/nonexistent/sudoku.png"));
        assert!(matches!(result, Err(MediaError::Io(_))));
    }

    #[test]
    fn slot_tracks_image_and_version() {
        let mut slot = MediaSlot::default();
        assert!(!slot.has_image());
        assert_eq!(slot.size(), None);

        slot.set(decode_color_image(&tiny_png()).unwrap());
        assert!(slot.has_image());
        assert_eq!(slot.size(), Some([2, 2]));

        slot.clear();
        assert!(!slot.has_image());
    }
}
