pub mod base_effect;
pub mod color;
pub mod picture;
pub mod processor;
pub mod transform_effect;

pub use color::Color;
pub use picture::Picture;

use std::path::PathBuf;

pub type PictureResult<T> = Result<T, PictureError>;

#[derive(thiserror::Error, Debug)]
pub enum PictureError {
    #[error("Decode error {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Encode error {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Pixel ({x}, {y}) is outside a {width}x{height} picture")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
    #[error("Operation `{0}` is not implemented")]
    NotImplemented(&'static str),
}

pub trait Effect {
    fn apply(&self, picture: &Picture) -> PictureResult<Picture>;
}

#[derive(Debug, Clone)]
pub enum ImageEffect {
    Invert,
    Grayscale,
    Rotate(transform_effect::RotateConfig),
}

impl Effect for ImageEffect {
    fn apply(&self, picture: &Picture) -> PictureResult<Picture> {
        match self {
            ImageEffect::Invert => base_effect::invert(picture),
            ImageEffect::Grayscale => base_effect::grayscale(picture),
            ImageEffect::Rotate(config) => config.apply(picture),
        }
    }
}
