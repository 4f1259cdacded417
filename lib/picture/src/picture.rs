//! In-memory RGB raster addressed by `(x, y)` with file load/save.

use crate::{Color, PictureError, PictureResult};
use image::{
    ImageError, ImageFormat, ImageReader, RgbImage,
    error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind},
};
use std::{fmt, fs, io::Cursor, path::Path};

#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    image: RgbImage,
}

impl Picture {
    /// Blank picture, every pixel black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    /// Decode the file at `path`. The format is sniffed from the file content,
    /// falling back to the extension.
    pub fn load(path: impl AsRef<Path>) -> PictureResult<Self> {
        let path = path.as_ref();
        let decode_err = |source: ImageError| PictureError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_err(ImageError::IoError(e)))?
            .decode()
            .map_err(decode_err)?
            .to_rgb8();

        log::debug!(
            "loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(Self { image })
    }

    /// Encode to `path`, picking the format from its extension. The whole file is
    /// encoded in memory first, so an unsupported format never touches the disk.
    pub fn save(&self, path: impl AsRef<Path>) -> PictureResult<()> {
        let path = path.as_ref();
        let encode_err = |source: ImageError| PictureError::Encode {
            path: path.to_path_buf(),
            source,
        };

        let format = ImageFormat::from_path(path).map_err(encode_err)?;
        if !format.writing_enabled() {
            return Err(encode_err(ImageError::Unsupported(
                UnsupportedError::from_format_and_kind(
                    ImageFormatHint::Exact(format),
                    UnsupportedErrorKind::Format(ImageFormatHint::Exact(format)),
                ),
            )));
        }

        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), format)
            .map_err(encode_err)?;
        fs::write(path, bytes).map_err(|e| encode_err(ImageError::IoError(e)))?;

        log::debug!(
            "saved {} ({}x{}, {:?})",
            path.display(),
            self.width(),
            self.height(),
            format
        );

        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }

    pub fn get_pixel(&self, x: i64, y: i64) -> PictureResult<Color> {
        self.check_bounds(x, y)?;
        Ok(Color::from(*self.image.get_pixel(x as u32, y as u32)))
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, color: Color) -> PictureResult<()> {
        self.check_bounds(x, y)?;
        self.image.put_pixel(x as u32, y as u32, color.into());
        Ok(())
    }

    pub(crate) fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub(crate) fn image(&self) -> &RgbImage {
        &self.image
    }

    fn check_bounds(&self, x: i64, y: i64) -> PictureResult<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(PictureError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.image.rows() {
            for pixel in row {
                write!(f, "{}", Color::from(*pixel))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
