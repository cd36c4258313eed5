//! Software canvas: antialiased rasterization of signed distance fields.
//!
//! Shapes are described in [`WorldSpace`] (logical canvas units), and drawn into a
//! [`Framebuffer`], which knows its device pixel ratio.

use {
  crate::{
    geometry::{BoundingBox, PixelSpace, WorldSpace, world_size},
    sdf::SDF
  },
  euclid::{Box2D, Point2D, Size2D},
  image::{Rgba, RgbaImage},
};

mod canvas;
mod impl_draw_framebuffer;
#[cfg(test)] mod tests;
pub use {
  canvas::Canvas,
  impl_draw_framebuffer::Mask,
};

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF<f32> for Texture<S, T> where S: SDF<f32> {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox<f32, WorldSpace> for Texture<S, T> where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> { self.shape.bounding_box() } }

/// RGBA pixels plus the ratio between device pixels and logical units.
#[derive(Debug, Clone)]
pub struct Framebuffer {
  pub image: RgbaImage,
  pub dpr: f32
}

impl Framebuffer {
  pub fn new(resolution: Size2D<u32, PixelSpace>, dpr: f32) -> Self {
    Self {
      image: RgbaImage::new(resolution.width.max(1), resolution.height.max(1)),
      dpr
    }
  }

  pub fn resolution(&self) -> Size2D<u32, PixelSpace> {
    self.image.dimensions().into()
  }

  pub fn world_size(&self) -> Size2D<f32, WorldSpace> {
    world_size(self.resolution(), self.dpr)
  }

  /// Device pixels covered by `bounding_box`, widened by one pixel for antialiasing and
  /// clipped to the image. `None` if there is no intersection with the image at all.
  pub fn pixel_bounds(&self, bounding_box: Box2D<f32, WorldSpace>) -> Option<Box2D<u32, PixelSpace>> {
    bounding_box
      .scale(self.dpr, self.dpr).cast_unit()
      .inflate(1.0, 1.0)
      .round_out()
      .intersection(&Box2D::from_size(self.resolution().to_f32()))
      .filter(|b| !b.is_empty())
      .map(|b| b.to_u32())
  }
}

/// Scale the alpha channel of a color.
pub fn with_alpha(color: Rgba<u8>, alpha: f32) -> Rgba<u8> {
  let mut color = color;
  color.0[3] = (color.0[3] as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
  color
}

/// Black with the given opacity, the ink of every sketch.
pub fn ink(alpha: f32) -> Rgba<u8> {
  with_alpha(Rgba([0, 0, 0, 255]), alpha)
}

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
