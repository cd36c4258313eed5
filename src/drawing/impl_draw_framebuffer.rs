#![allow(non_snake_case)]
use {
  euclid::{Box2D, Point2D},
  image::{Pixel, Rgba},
  crate::{
    drawing::{Draw, Framebuffer, Texture},
    geometry::{BoundingBox, PixelSpace, Shape, to_world_space},
    sdf::SDF,
  }
};

impl <Cutie> Draw<Framebuffer> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, fb: &mut Framebuffer) {
    if self.texture.0[3] == 0 { return }
    let bounding_box = match fb.pixel_bounds(self.bounding_box()) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };
    let Δp = 1.0 / fb.dpr;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::new(x, y))
      .for_each(|pixel| {
        let sdf = self.sdf(to_world_space(pixel, fb.dpr));
        let alpha = coverage(sdf, Δp);
        if alpha > 0.0 {
          let pixel = fb.image.get_pixel_mut(pixel.x, pixel.y);
          *pixel = overlay(*pixel, self.texture, alpha);
        }
      });
  }
}

/// Fraction of a pixel of size `Δp` covered by the inside of a distance field.
fn coverage(sdf: f32, Δp: f32) -> f32 {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  Δf / Δp
}

// overlay blending with premultiplied alpha
fn overlay(mut col1: Rgba<u8>, mut col2: Rgba<u8>, alpha: f32) -> Rgba<u8> {
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}

/// Coverage of several shapes, merged before blending, so the overlapping joints of
/// a stroked path are painted once.
#[derive(Debug, Clone)]
pub struct Mask {
  bounds: Box2D<u32, PixelSpace>,
  dpr: f32,
  alpha: Vec<f32>
}

impl Mask {
  /// `None` if `bounding_box` lies outside of the framebuffer.
  pub fn new(fb: &Framebuffer, bounding_box: Box2D<f32, crate::geometry::WorldSpace>) -> Option<Self> {
    let bounds = fb.pixel_bounds(bounding_box)?;
    let size = bounds.size();
    Some(Self {
      bounds,
      dpr: fb.dpr,
      alpha: vec![0.0; (size.width * size.height) as usize]
    })
  }

  pub fn add(&mut self, shape: &impl Shape) {
    let bounding_box = shape.bounding_box()
      .scale(self.dpr, self.dpr).cast_unit()
      .inflate(1.0, 1.0)
      .round_out()
      .intersection(&self.bounds.to_f32())
      .filter(|b| !b.is_empty())
      .map(|b| b.to_u32());
    let bounding_box = match bounding_box {
      Some(x) => x,
      None => return
    };
    let Δp = 1.0 / self.dpr;
    let width = self.bounds.width();

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| {
        let a = coverage(shape.sdf(to_world_space(Point2D::new(x, y), self.dpr)), Δp);
        let i = ((y - self.bounds.min.y) * width + (x - self.bounds.min.x)) as usize;
        if a > self.alpha[i] { self.alpha[i] = a; }
      });
  }

  pub fn fill(&self, fb: &mut Framebuffer, color: Rgba<u8>) {
    if color.0[3] == 0 { return }
    let width = self.bounds.width();
    itertools::iproduct!(self.bounds.y_range(), self.bounds.x_range())
      .for_each(|(y, x)| {
        let a = self.alpha[((y - self.bounds.min.y) * width + (x - self.bounds.min.x)) as usize];
        if a > 0.0 {
          let pixel = fb.image.get_pixel_mut(x, y);
          *pixel = overlay(*pixel, color, a);
        }
      });
  }

  /// Covered fraction of the device pixel, zero outside of the mask.
  pub fn get(&self, pixel: Point2D<u32, PixelSpace>) -> f32 {
    if !self.bounds.contains(pixel) { return 0.0 }
    let width = self.bounds.width();
    self.alpha[((pixel.y - self.bounds.min.y) * width + (pixel.x - self.bounds.min.x)) as usize]
  }
}
