use {
  super::{BoundingBox, WorldSpace, P2},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D, Vector2D as V2}
};

/// Unit circle
#[derive(Debug, Copy, Clone)]
pub struct Circle;

#[derive(Debug, Copy, Clone)]
pub struct Square;

/// Axis-aligned rectangle centered in the origin.
///
/// Unlike a non-uniformly scaled [`Square`], the distance field is exact, which keeps
/// antialiasing crisp on thin bars.
#[derive(Debug, Copy, Clone)]
pub struct Rectangle {
  pub half_extents: V2<f32, WorldSpace>
}

/// Capsule around the line segment `a..b`.
#[derive(Debug, Copy, Clone)]
pub struct Segment {
  pub a: P2,
  pub b: P2,
  pub radius: f32
}

impl<S> BoundingBox<f32, S> for Circle {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl<S> BoundingBox<f32, S> for Square {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl BoundingBox<f32, WorldSpace> for Rectangle {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    Box2D::new(
      (-self.half_extents).to_point(),
      self.half_extents.to_point()
    )}}

impl BoundingBox<f32, WorldSpace> for Segment {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    Box2D::from_points([self.a, self.b])
      .inflate(self.radius, self.radius)
  }}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: P2) -> f32 {
    pixel.to_vector().length() - 1.0
  }
}

fn box_sdf(pixel: P2, half_extents: V2<f32, WorldSpace>) -> f32 {
  let dist = pixel.to_vector().abs() - half_extents;
  let outside_dist = dist
    .max(V2::splat(0.0))
    .length();
  let inside_dist = dist.x
    .max(dist.y)
    .min(0.0);
  outside_dist + inside_dist
}

impl SDF<f32> for Square {
  fn sdf(&self, pixel: P2) -> f32 {
    box_sdf(pixel, V2::splat(1.0))
  }
}

impl SDF<f32> for Rectangle {
  fn sdf(&self, pixel: P2) -> f32 {
    box_sdf(pixel, self.half_extents)
  }
}

impl SDF<f32> for Segment {
  fn sdf(&self, pixel: P2) -> f32 {
    let pa = pixel - self.a;
    let ba = self.b - self.a;
    let len2 = ba.square_length();
    let h = if len2 > 0.0 {
      (pa.dot(ba) / len2).clamp(0.0, 1.0)
    } else {
      0.0
    };
    (pa - ba * h).length() - self.radius
  }
}
