use {
  euclid::{Point2D, Rotation2D, Box2D},
  crate::geometry::{WorldSpace, Shape, Rotation, Scale, Translation, Outline, BoundingBox},
  num_traits::Float
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T;
}

impl <S> SDF<f32> for Translation<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    self.shape.sdf(pixel - self.offset)
  }
}

impl <S> SDF<f32> for Rotation<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let pivot = self.shape.bounding_box().center();
    // inverse rotation of the sample point
    let pixel = Rotation2D::new(-self.angle)
      .transform_point((pixel - pivot).to_point())
      + pivot.to_vector();

    self.shape.sdf(pixel)
  }
}

impl <S> SDF<f32> for Scale<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let c = self.shape.bounding_box().center();
    let pixel = ((pixel - c)
      .component_div(self.scale) + c.to_vector())
      .to_point();
    self.shape.sdf(pixel) * self.scale.x.abs().min(self.scale.y.abs())
  }
}

impl <S> SDF<f32> for Outline<S>
  where S: SDF<f32> {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    self.shape.sdf(pixel).abs() - self.width / 2.0
  }
}

/// Union of two SDFs.
#[derive(Clone, Copy, Debug)]
pub struct Union<S1, S2> {
  pub s1: S1,
  pub s2: S2,
}

impl<T, S1, S2> SDF<T> for Union<S1, S2>
  where T: Float,
        S1: SDF<T>,
        S2: SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T {
    self.s1.sdf(pixel).min(self.s2.sdf(pixel))
  }}

impl<T, S1, S2> BoundingBox<T, WorldSpace> for Union<S1, S2>
  where T: Copy + PartialOrd,
        S1: BoundingBox<T, WorldSpace>,
        S2: BoundingBox<T, WorldSpace> {
  fn bounding_box(&self) -> Box2D<T, WorldSpace> {
    self.s1.bounding_box().union(&self.s2.bounding_box())
  }}
