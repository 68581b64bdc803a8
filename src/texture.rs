use anyhow::{bail, Context};
use std::path::Path;

use crate::config::{
    LAYER_SCALE, LAYER_TEXTURES, LAYER_VELOCITIES, OBSTACLE_SHEET_COLUMNS, OBSTACLE_SHEET_ROWS,
    OBSTACLE_TEXTURE, PLAYER_FRAMES, PLAYER_TEXTURE,
};
use crate::game::Layout;
use crate::sprites::FrameSize;

/// Decoded RGBA8 image kept in CPU memory for software blitting.
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl Texture {
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> anyhow::Result<Self> {
        if width == 0 || height == 0 {
            bail!("texture has zero size ({width}x{height})");
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            bail!(
                "texture buffer holds {} bytes, expected {expected} for {width}x{height}",
                pixels.len()
            );
        }
        Ok(Self { width, height, pixels })
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("failed to load texture {}", path.display()))?
            .to_rgba8();
        let (width, height) = image.dimensions();
        log::debug!("Loaded texture {} ({}x{})", path.display(), width, height);
        Self::from_rgba(width, height, image.into_raw())
            .with_context(|| format!("invalid texture {}", path.display()))
    }

    /// RGBA of the texel at (x, y). Caller keeps coordinates in bounds.
    pub fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Size of one cell when the texture is cut into a `columns` x `rows` grid.
    pub fn frame_size(&self, columns: u32, rows: u32) -> anyhow::Result<FrameSize> {
        if columns == 0 || rows == 0 || self.width < columns || self.height < rows {
            bail!(
                "{}x{} texture cannot hold a {columns}x{rows} frame grid",
                self.width,
                self.height
            );
        }
        Ok(FrameSize {
            width: (self.width / columns) as f32,
            height: (self.height / rows) as f32,
        })
    }
}

/// Every texture the game draws, loaded once at startup.
pub struct Assets {
    pub player: Texture,
    pub obstacle: Texture,
    pub layers: [Texture; 3],
}

impl Assets {
    pub fn load() -> anyhow::Result<Self> {
        let [far, middle, fore] = LAYER_TEXTURES;
        Ok(Self {
            player: Texture::load(PLAYER_TEXTURE)?,
            obstacle: Texture::load(OBSTACLE_TEXTURE)?,
            layers: [Texture::load(far)?, Texture::load(middle)?, Texture::load(fore)?],
        })
    }

    /// Frame and layer geometry the simulation needs, derived from texture sizes.
    pub fn layout(&self) -> anyhow::Result<Layout> {
        let player_frame = self
            .player
            .frame_size(PLAYER_FRAMES as u32, 1)
            .context("player sprite sheet")?;
        let obstacle_frame = self
            .obstacle
            .frame_size(OBSTACLE_SHEET_COLUMNS, OBSTACLE_SHEET_ROWS)
            .context("obstacle sprite sheet")?;
        let layer_widths = std::array::from_fn(|i| self.layers[i].width as f32);
        log::debug!(
            "Player frame {:?}, obstacle frame {:?}, layer widths {:?}",
            player_frame,
            obstacle_frame,
            layer_widths
        );
        Ok(Layout {
            player_frame,
            obstacle_frame,
            layer_widths,
            layer_scale: LAYER_SCALE,
            layer_velocities: LAYER_VELOCITIES,
        })
    }
}

#[cfg(test)]
pub(crate) fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Texture {
    let pixels = rgba.repeat(width as usize * height as usize);
    Texture::from_rgba(width, height, pixels).expect("valid solid texture")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_sized_texture() {
        let err = Texture::from_rgba(0, 4, Vec::new()).err().expect("zero width fails");
        assert!(err.to_string().contains("zero size"));
    }

    #[test]
    fn rejects_short_buffer() {
        assert!(Texture::from_rgba(2, 2, vec![0; 15]).is_err());
    }

    #[test]
    fn reads_texels_row_major() {
        let mut pixels = vec![0u8; 2 * 2 * 4];
        pixels[12..16].copy_from_slice(&[1, 2, 3, 4]);
        let tex = Texture::from_rgba(2, 2, pixels).unwrap();
        assert_eq!(tex.texel(1, 1), [1, 2, 3, 4]);
        assert_eq!(tex.texel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn splits_sheet_into_frames() {
        let sheet = solid(768, 128, [0; 4]);
        let frame = sheet.frame_size(6, 1).unwrap();
        assert_eq!(frame, FrameSize { width: 128.0, height: 128.0 });

        let nebula = solid(800, 800, [0; 4]);
        let frame = nebula.frame_size(8, 8).unwrap();
        assert_eq!(frame, FrameSize { width: 100.0, height: 100.0 });
    }

    #[test]
    fn rejects_sheet_smaller_than_grid() {
        let tiny = solid(4, 1, [0; 4]);
        assert!(tiny.frame_size(6, 1).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Texture::load("textures/does-not-exist.png").err().expect("missing file fails");
        assert!(format!("{err:#}").contains("does-not-exist.png"));
    }
}
