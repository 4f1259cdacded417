use image::Rgb;
use std::fmt;

/// An RGB colour with 8-bit channels. Alpha is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Channel-wise complement: `255 - c` for red, green and blue.
    pub fn inverted(&self) -> Self {
        Self::new(255 - self.red, 255 - self.green, 255 - self.blue)
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        let [red, green, blue] = pixel.0;
        Self::new(red, green, blue)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.red, color.green, color.blue])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted() {
        assert_eq!(Color::new(0, 128, 255).inverted(), Color::new(255, 127, 0));
        assert_eq!(Color::new(10, 20, 30).inverted().inverted(), Color::new(10, 20, 30));
    }

    #[test]
    fn test_rgb_conversion() {
        let color = Color::from(Rgb([1, 2, 3]));
        assert_eq!((color.red(), color.green(), color.blue()), (1, 2, 3));
        assert_eq!(Rgb::<u8>::from(color), Rgb([1, 2, 3]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::new(255, 0, 7).to_string(), "(255,0,7)");
    }
}
