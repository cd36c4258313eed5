//! .
//!
//! The origin of the coordinate system is in the top-left corner, y pointing down.
//! Sketches work in [`WorldSpace`], the logical units of a canvas; the canvas maps them
//! to [`PixelSpace`] through its device pixel ratio.

use {
  euclid::{Point2D, Box2D, Vector2D as V2, Size2D, Rotation2D, Angle},
  crate::sdf::{SDF, Union}
};

pub mod shapes;
pub use shapes::*;

/// Device pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Logical canvas coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub type P2 = Point2D<f32, WorldSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f32> + BoundingBox<f32, WorldSpace> {
  fn translate(self, offset: V2<f32, WorldSpace>) -> Translation<Self, f32> where Self: Sized {
    Translation { shape: self, offset }
  }
  /// Rotate around the center of shape's bounding box
  fn rotate(self, angle: Angle<f32>) -> Rotation<Self, f32> where Self: Sized {
    Rotation { shape: self, angle }
  }
  /// Scale around the center of shape's bounding box
  fn scale(self, scale: V2<f32, WorldSpace>) -> Scale<Self, f32> where Self: Sized {
    Scale { shape: self, scale }
  }
  /// Union of two SDFs.
  fn union<U>(self, other: U) -> Union<Self, U> where Self: Sized {
    Union { s1: self, s2: other }
  }
  /// A band of `width` centered on the boundary, i.e. a stroke.
  fn outline(self, width: f32) -> Outline<Self> where Self: Sized {
    Outline { shape: self, width }
  }
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, WorldSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Translation<S, T> {
  pub shape: S,
  pub offset: V2<T, WorldSpace>
}
impl <S> BoundingBox<f32, WorldSpace> for Translation<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    self.shape.bounding_box().translate(self.offset)
  }
}

/// Rotate around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Rotation<S, T> {
  pub shape: S,
  pub angle: Angle<T>
}
impl <S> BoundingBox<f32, WorldSpace> for Rotation<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    let bounding = self.shape.bounding_box();
    let pivot = bounding.center();
    let rot = |point: P2| Rotation2D::new(self.angle)
      .transform_point((point - pivot).to_point())
      + pivot.to_vector();
    update_bounding_box(bounding, rot)
  }
}

/// Scale around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Scale<S, T> {
  pub shape: S,
  pub scale: V2<T, WorldSpace>
}
impl <S> BoundingBox<f32, WorldSpace> for Scale<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    let c = self.shape.bounding_box().center().to_vector();
    self.shape.bounding_box()
      .translate(-c)
      .scale(self.scale.x.abs(), self.scale.y.abs())
      .translate(c)
  }
}

/// Band of `width` around the zero level set of `shape`.
#[derive(Debug, Copy, Clone)]
pub struct Outline<S> {
  pub shape: S,
  pub width: f32
}
impl <S> BoundingBox<f32, WorldSpace> for Outline<S>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    self.shape.bounding_box().inflate(self.width / 2.0, self.width / 2.0)
  }
}

pub fn to_world_space(point: Point2D<u32, PixelSpace>, dpr: f32) -> P2 {
  // sample at the pixel center
  ((point.to_f32().to_vector() + V2::splat(0.5)) / dpr)
    .cast_unit()
    .to_point()
}

pub fn to_pixel_space(point: P2, dpr: f32) -> Point2D<f32, PixelSpace> {
  (point.to_vector() * dpr)
    .cast_unit()
    .to_point()
}

/// Logical size of an image with the given device pixel ratio.
pub fn world_size(resolution: Size2D<u32, PixelSpace>, dpr: f32) -> Size2D<f32, WorldSpace> {
  (resolution.to_f32() / dpr).cast_unit()
}

fn update_bounding_box(
  bounding: Box2D<f32, WorldSpace>,
  morphism: impl Fn(P2) -> P2
) -> Box2D<f32, WorldSpace> {
  let pts = [
    [bounding.min.x, bounding.min.y],
    [bounding.max.x, bounding.min.y],
    [bounding.max.x, bounding.max.y],
    [bounding.min.x, bounding.max.y],
  ];
  let pts = pts.iter().cloned()
    .map(|p| morphism(p.into()));
  Box2D::from_points(pts)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn pixel_world_roundtrip_is_centered() {
    let p = to_world_space(Point2D::new(3, 5), 2.0);
    assert_eq!(p, Point2D::new(1.75, 2.75));
    let back = to_pixel_space(p, 2.0);
    assert_eq!(back, Point2D::new(3.5, 5.5));
  }

  #[test] fn rotated_square_bounding_box_grows() {
    let bb = Square.rotate(Angle::degrees(45.0)).bounding_box();
    let half_diag = std::f32::consts::SQRT_2;
    assert!((bb.max.x - half_diag).abs() < 1e-5);
    assert!((bb.min.y + half_diag).abs() < 1e-5);
  }

  #[test] fn outline_inflates_bounding_box() {
    let bb = Circle
      .scale(V2::splat(10.0))
      .outline(2.0)
      .bounding_box();
    assert_eq!(bb.min, Point2D::splat(-11.0));
    assert_eq!(bb.max, Point2D::splat(11.0));
  }
}
