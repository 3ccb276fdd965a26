//! Generated sprite images
//!
//! Each game object owns a square RGBA image with a centered filled circle of
//! its palette color. The image is generated at construction and lives exactly
//! as long as the owning entity.

use image::{Rgba, RgbaImage};

/// A generated sprite image owned by one game object
#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    /// Pixel buffer of the sprite
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Side length of the square image in pixels
    pub fn resolution(&self) -> u32 {
        self.image.width()
    }
}

/// Generate a filled-circle sprite of the given color
///
/// The circle is centered and spans the full image; pixels outside it stay
/// fully transparent. `rgb` components are expected in [0, 1].
pub fn filled_circle(resolution: u32, rgb: [f32; 3]) -> Sprite {
    let mut image = RgbaImage::new(resolution, resolution);
    let center = resolution as f32 / 2.0;
    let radius_sq = center * center;
    let color = Rgba([to_channel(rgb[0]), to_channel(rgb[1]), to_channel(rgb[2]), 255]);

    for y in 0..resolution {
        for x in 0..resolution {
            // Sample at the pixel center
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            if dx * dx + dy * dy <= radius_sq {
                image.put_pixel(x, y, color);
            }
        }
    }

    Sprite { image }
}

fn to_channel(component: f32) -> u8 {
    (component * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pixel_is_colored() {
        let sprite = filled_circle(64, [1.0, 0.0, 0.5]);
        let px = sprite.image().get_pixel(32, 32);
        assert_eq!(px.0, [255, 0, 128, 255]);
    }

    #[test]
    fn test_corners_are_transparent() {
        let sprite = filled_circle(64, [1.0, 1.0, 1.0]);
        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(sprite.image().get_pixel(x, y).0[3], 0, "corner ({x},{y})");
        }
    }

    #[test]
    fn test_resolution_matches_request() {
        let sprite = filled_circle(300, [0.0, 1.0, 0.0]);
        assert_eq!(sprite.resolution(), 300);
        assert_eq!(sprite.image().height(), 300);
    }
}
