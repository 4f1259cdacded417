use crate::{Effect, Picture, PictureResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage, imageops};

/// Clockwise rotation by `degrees`, taken modulo 360 so `-90` equals `270`.
///
/// Quarter turns are exact. Any other angle grows the canvas to the rotated
/// bounding box, `round(|w cos| + |h sin|) x round(|w sin| + |h cos|)`, samples
/// the nearest source pixel and leaves uncovered corners black.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct RotateConfig {
    #[derivative(Default(value = "90"))]
    degrees: i32,
}

impl RotateConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for RotateConfig {
    fn apply(&self, picture: &Picture) -> PictureResult<Picture> {
        let image = picture.image();
        let rotated = match self.degrees.rem_euclid(360) {
            0 => image.clone(),
            90 => imageops::rotate90(image),
            180 => imageops::rotate180(image),
            270 => imageops::rotate270(image),
            degrees => rotate_any(image, degrees),
        };

        Ok(Picture::from_image(rotated))
    }
}

fn rotate_any(image: &RgbImage, degrees: i32) -> RgbImage {
    let (sin, cos) = f64::from(degrees).to_radians().sin_cos();
    let (width, height) = (f64::from(image.width()), f64::from(image.height()));

    let new_width = (width * cos.abs() + height * sin.abs()).round() as u32;
    let new_height = (width * sin.abs() + height * cos.abs()).round() as u32;
    let mut rotated = RgbImage::from_pixel(new_width, new_height, Rgb([0, 0, 0]));

    let (src_cx, src_cy) = (width / 2.0, height / 2.0);
    let (dst_cx, dst_cy) = (f64::from(new_width) / 2.0, f64::from(new_height) / 2.0);

    // Inverse mapping from each destination pixel centre, so no holes appear.
    for (x, y, pixel) in rotated.enumerate_pixels_mut() {
        let dx = f64::from(x) + 0.5 - dst_cx;
        let dy = f64::from(y) + 0.5 - dst_cy;
        let sx = (dx * cos + dy * sin + src_cx).floor();
        let sy = (dy * cos - dx * sin + src_cy).floor();

        if sx >= 0.0 && sy >= 0.0 && sx < width && sy < height {
            *pixel = *image.get_pixel(sx as u32, sy as u32);
        }
    }

    rotated
}
