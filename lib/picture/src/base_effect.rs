use crate::{Color, Picture, PictureResult};
use image::{Rgb, RgbImage};

/// Invert the colors of a picture into a freshly allocated one
pub fn invert(picture: &Picture) -> PictureResult<Picture> {
    let source = picture.image();
    let mut inverted = RgbImage::new(source.width(), source.height());

    for (x, y, pixel) in source.enumerate_pixels() {
        inverted.put_pixel(x, y, Color::from(*pixel).inverted().into());
    }

    Ok(Picture::from_image(inverted))
}

/// Desaturate into a freshly allocated picture: every channel becomes the
/// integer mean `(r + g + b) / 3`
pub fn grayscale(picture: &Picture) -> PictureResult<Picture> {
    let source = picture.image();
    let mut gray_image = RgbImage::new(source.width(), source.height());

    for (x, y, pixel) in source.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let gray = ((r as u32 + g as u32 + b as u32) / 3) as u8;
        gray_image.put_pixel(x, y, Rgb([gray, gray, gray]));
    }

    Ok(Picture::from_image(gray_image))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Picture {
        let mut picture = Picture::new(width, height);
        for y in 0..height as i64 {
            for x in 0..width as i64 {
                let color = Color::new((x * 37 % 256) as u8, (y * 91 % 256) as u8, ((x + y) * 13 % 256) as u8);
                picture.set_pixel(x, y, color).unwrap();
            }
        }
        picture
    }

    #[test]
    fn test_invert_complements_every_channel() {
        let source = gradient(9, 7);
        let inverted = invert(&source).unwrap();

        assert_eq!((inverted.width(), inverted.height()), (9, 7));
        for y in 0..7 {
            for x in 0..9 {
                let before = source.get_pixel(x, y).unwrap();
                let after = inverted.get_pixel(x, y).unwrap();
                assert_eq!(after.red(), 255 - before.red());
                assert_eq!(after.green(), 255 - before.green());
                assert_eq!(after.blue(), 255 - before.blue());
            }
        }
    }

    #[test]
    fn test_invert_is_involution() {
        let source = gradient(5, 11);
        let twice = invert(&invert(&source).unwrap()).unwrap();
        assert_eq!(twice, source);
    }

    #[test]
    fn test_invert_extremes() {
        let mut picture = Picture::new(2, 1);
        picture.set_pixel(1, 0, Color::new(255, 255, 255)).unwrap();

        let inverted = invert(&picture).unwrap();
        assert_eq!(inverted.get_pixel(0, 0).unwrap(), Color::new(255, 255, 255));
        assert_eq!(inverted.get_pixel(1, 0).unwrap(), Color::new(0, 0, 0));
    }

    #[test]
    fn test_invert_empty_picture() {
        let inverted = invert(&Picture::new(0, 0)).unwrap();
        assert_eq!((inverted.width(), inverted.height()), (0, 0));
    }

    #[test]
    fn test_grayscale_average() {
        let mut picture = Picture::new(1, 1);
        picture.set_pixel(0, 0, Color::new(10, 20, 32)).unwrap();

        let gray = grayscale(&picture).unwrap();
        assert_eq!(gray.get_pixel(0, 0).unwrap(), Color::new(20, 20, 20));
    }

    #[test]
    fn test_grayscale_rounds_down() {
        let mut picture = Picture::new(2, 1);
        picture.set_pixel(0, 0, Color::new(255, 0, 0)).unwrap();
        picture.set_pixel(1, 0, Color::new(255, 255, 254)).unwrap();

        let gray = grayscale(&picture).unwrap();
        assert_eq!(gray.get_pixel(0, 0).unwrap(), Color::new(85, 85, 85));
        assert_eq!(gray.get_pixel(1, 0).unwrap(), Color::new(254, 254, 254));
    }

    #[test]
    fn test_grayscale_keeps_source() {
        let source = gradient(4, 4);
        let gray = grayscale(&source).unwrap();

        assert_eq!(source, gradient(4, 4));
        assert_eq!((gray.width(), gray.height()), (4, 4));
    }
}
