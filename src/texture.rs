use std::path::Path;
use image::{DynamicImage, GenericImageView};

/// Decoded texture image. Loaded alongside the mesh, but the flat-shaded
/// pipeline never samples it; `sample` is kept for when shading grows a
/// texturing path.
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Texture {
    pub fn load<P: AsRef<Path>>(path: P) -> image::ImageResult<Self> {
        let img: DynamicImage = image::open(path)?;
        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8().into_raw();
        Ok(Self { width, height, rgba })
    }

    /// Nearest-neighbor lookup with coordinates wrapped into [0, 1).
    pub fn sample(&self, u: f32, v: f32) -> (u8, u8, u8, u8) {
        let u = u.rem_euclid(1.0);
        let v = v.rem_euclid(1.0);
        let x = (u * (self.width as f32 - 1.0)).round() as u32;
        let y = (v * (self.height as f32 - 1.0)).round() as u32;
        let idx = ((y * self.width + x) * 4) as usize;
        (
            self.rgba[idx],
            self.rgba[idx + 1],
            self.rgba[idx + 2],
            self.rgba[idx + 3],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Texture {
        // 2x2: red, green / blue, white
        Texture {
            width: 2,
            height: 2,
            rgba: vec![
                255, 0, 0, 255, 0, 255, 0, 255,
                0, 0, 255, 255, 255, 255, 255, 255,
            ],
        }
    }

    #[test]
    fn samples_nearest_texel() {
        let tex = checker();
        assert_eq!(tex.sample(0.0, 0.0), (255, 0, 0, 255));
        assert_eq!(tex.sample(0.9, 0.0), (0, 255, 0, 255));
        assert_eq!(tex.sample(0.9, 0.9), (255, 255, 255, 255));
    }

    #[test]
    fn coordinates_wrap() {
        let tex = checker();
        assert_eq!(tex.sample(1.0, 1.0), tex.sample(0.0, 0.0));
        assert_eq!(tex.sample(-0.1, 0.0), tex.sample(0.9, 0.0));
    }
}
