use {
  crate::{
    drawing::{Draw, Framebuffer, Mask, with_alpha},
    geometry::{BoundingBox, Circle, PixelSpace, Rectangle, Segment, Shape, WorldSpace, P2},
  },
  euclid::{Angle, Box2D, Size2D, Transform2D, Vector2D as V2},
  image::{Pixel, Rgba, RgbaImage},
  rayon::prelude::*,
};

type Transform = Transform2D<f32, WorldSpace, WorldSpace>;

#[derive(Debug, Copy, Clone)]
struct State {
  transform: Transform,
  alpha: f32
}

impl Default for State {
  fn default() -> Self {
    Self { transform: Transform::identity(), alpha: 1.0 }
  }
}

/// Immediate mode 2D drawing context over a [`Framebuffer`].
///
/// Mirrors the subset of the HTML canvas API the sketches need: a transform and
/// global alpha stack, stroked paths and circles, filled circles and rectangles,
/// translucent full-frame fades, and direct pixel writes.
#[derive(Debug, Clone)]
pub struct Canvas {
  fb: Framebuffer,
  state: State,
  stack: Vec<State>
}

impl Canvas {
  /// A transparent canvas of `width × height` logical units, backed by
  /// `round(width * dpr) × round(height * dpr)` pixels.
  pub fn new(width: f32, height: f32, dpr: f32) -> Self {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let resolution = Size2D::<_, PixelSpace>::new(
      (width.max(1.0) * dpr).round() as u32,
      (height.max(1.0) * dpr).round() as u32
    );
    Self {
      fb: Framebuffer::new(resolution, dpr),
      state: State::default(),
      stack: vec![]
    }
  }

  pub fn size(&self) -> Size2D<f32, WorldSpace> { self.fb.world_size() }
  pub fn width(&self) -> f32 { self.size().width }
  pub fn height(&self) -> f32 { self.size().height }
  pub fn center(&self) -> P2 { (self.size().to_vector() / 2.0).to_point() }
  pub fn dpr(&self) -> f32 { self.fb.dpr }
  pub fn image(&self) -> &RgbaImage { &self.fb.image }
  pub fn into_image(self) -> RgbaImage { self.fb.image }

  pub fn save(&mut self) {
    self.stack.push(self.state);
  }

  /// Pops the state pushed by the matching [`save`](Self::save); unbalanced calls are ignored.
  pub fn restore(&mut self) {
    if let Some(state) = self.stack.pop() {
      self.state = state;
    }
  }

  pub fn translate(&mut self, x: f32, y: f32) {
    self.state.transform = Transform::translation(x, y).then(&self.state.transform);
  }

  pub fn rotate(&mut self, radians: f32) {
    self.state.transform = Transform::rotation(Angle::radians(radians)).then(&self.state.transform);
  }

  pub fn scale(&mut self, x: f32, y: f32) {
    self.state.transform = Transform::scale(x, y).then(&self.state.transform);
  }

  /// Global alpha, multiplied into every color drawn afterwards.
  pub fn set_alpha(&mut self, alpha: f32) {
    self.state.alpha = alpha.clamp(0.0, 1.0);
  }

  /// Clear everything to transparent. Ignores the transform.
  pub fn clear(&mut self) {
    self.fb.image.pixels_mut().for_each(|p| *p = Rgba([0, 0, 0, 0]));
  }

  /// Blend a color over the whole canvas, leaving fading trails of previous frames.
  pub fn fade(&mut self, color: Rgba<u8>) {
    let color = self.ink(color);
    if color.0[3] == 0 { return }
    (*self.fb.image)
      .par_chunks_mut(4)
      .for_each(|px| Rgba::from_slice_mut(px).blend(&color));
  }

  /// Overwrite one logical pixel, ignoring transform and alpha, like `putImageData`.
  pub fn put_pixel(&mut self, point: P2, color: Rgba<u8>) {
    let dpr = self.fb.dpr;
    let block = Box2D::<f32, PixelSpace>::new(
      (point.to_vector() * dpr).floor().cast_unit().to_point(),
      ((point.to_vector() + V2::splat(1.0)) * dpr).floor().cast_unit().to_point()
    ).intersection(&Box2D::from_size(self.fb.resolution().to_f32()));
    if let Some(block) = block {
      let block = block.to_u32();
      itertools::iproduct!(block.y_range(), block.x_range())
        .for_each(|(y, x)| self.fb.image.put_pixel(x, y, color));
    }
  }

  pub fn stroke_line(&mut self, a: P2, b: P2, width: f32, color: Rgba<u8>) {
    self.stroke_polyline(&[a, b], width, color);
  }

  /// Stroke an open path through `points`.
  pub fn stroke_polyline(&mut self, points: &[P2], width: f32, color: Rgba<u8>) {
    let segments = self.segments(points.windows(2).map(|w| (w[0], w[1])), width);
    self.stroke_segments(&segments, color);
  }

  /// Stroke a closed path through `points`.
  pub fn stroke_polygon(&mut self, points: &[P2], width: f32, color: Rgba<u8>) {
    if points.len() < 2 { return }
    let closing = std::iter::once((points[points.len() - 1], points[0]));
    let segments = self.segments(
      points.windows(2).map(|w| (w[0], w[1])).chain(closing),
      width
    );
    self.stroke_segments(&segments, color);
  }

  pub fn stroke_rect(&mut self, rect: Box2D<f32, WorldSpace>, width: f32, color: Rgba<u8>) {
    let corners = [
      rect.min,
      P2::new(rect.max.x, rect.min.y),
      rect.max,
      P2::new(rect.min.x, rect.max.y)
    ];
    self.stroke_polygon(&corners, width, color);
  }

  pub fn fill_circle(&mut self, center: P2, radius: f32, color: Rgba<u8>) {
    let radius = radius * self.linear_scale();
    if radius <= 0.0 { return }
    let center = self.state.transform.transform_point(center);
    let color = self.ink(color);
    Circle
      .scale(V2::splat(radius))
      .translate(center.to_vector())
      .texture(color)
      .draw(&mut self.fb);
  }

  pub fn stroke_circle(&mut self, center: P2, radius: f32, width: f32, color: Rgba<u8>) {
    let k = self.linear_scale();
    let (radius, width) = (radius * k, width * k);
    if radius <= 0.0 || width <= 0.0 { return }
    let center = self.state.transform.transform_point(center);
    let color = self.ink(color);
    Circle
      .scale(V2::splat(radius))
      .translate(center.to_vector())
      .outline(width)
      .texture(color)
      .draw(&mut self.fb);
  }

  /// Fill an axis-aligned rectangle. Only the translation and scale of the
  /// current transform apply.
  pub fn fill_rect(&mut self, rect: Box2D<f32, WorldSpace>, color: Rgba<u8>) {
    let rect = self.state.transform.outer_transformed_box(&rect);
    if rect.is_empty() { return }
    let color = self.ink(color);
    Rectangle { half_extents: rect.size().to_vector() / 2.0 }
      .translate(rect.center().to_vector())
      .texture(color)
      .draw(&mut self.fb);
  }

  /// Fill any shape given in already transformed world coordinates.
  pub fn fill_shape(&mut self, shape: impl Shape, color: Rgba<u8>) {
    let color = self.ink(color);
    shape.texture(color).draw(&mut self.fb);
  }

  /// Composite the canvas over an opaque background.
  pub fn flatten(&self, background: Rgba<u8>) -> RgbaImage {
    let (w, h) = self.fb.image.dimensions();
    let mut out = RgbaImage::from_pixel(w, h, background);
    image::imageops::overlay(&mut out, &self.fb.image, 0, 0);
    out
  }

  fn ink(&self, color: Rgba<u8>) -> Rgba<u8> {
    with_alpha(color, self.state.alpha)
  }

  /// Uniform scale factor of the current transform, applied to widths and radii.
  fn linear_scale(&self) -> f32 {
    self.state.transform.determinant().abs().sqrt()
  }

  fn segments(&self, pairs: impl Iterator<Item = (P2, P2)>, width: f32) -> Vec<Segment> {
    let radius = width * self.linear_scale() / 2.0;
    if radius <= 0.0 { return vec![] }
    let t = &self.state.transform;
    pairs
      .map(|(a, b)| Segment {
        a: t.transform_point(a),
        b: t.transform_point(b),
        radius
      })
      .collect()
  }

  fn stroke_segments(&mut self, segments: &[Segment], color: Rgba<u8>) {
    let bounding_box = match segments.iter()
      .map(|s| s.bounding_box())
      .reduce(|a, b| a.union(&b)) {
      Some(x) => x,
      None => return
    };
    if let Some(mut mask) = Mask::new(&self.fb, bounding_box) {
      let color = self.ink(color);
      segments.iter().for_each(|s| mask.add(s));
      mask.fill(&mut self.fb, color);
    }
  }
}
