use {
  crate::{
    drawing::{Canvas, ink},
    geometry::P2,
    params::{ParamSet, ParamSpec},
    sketch::Sketch
  },
  euclid::Vector2D as V2,
  std::f32::consts::PI
};

const SIDES: usize = 0;
const LAYERS: usize = 1;
const SCALE: usize = 2;
const ANIMATION_SPEED: usize = 3;

const PARAMS: &[ParamSpec] = &[
  ParamSpec::int("sides", "sides", 3.0, 12.0, 1.0, 6.0),
  ParamSpec::int("layers", "layers", 3.0, 15.0, 1.0, 8.0),
  ParamSpec::float("scale", "scale", 0.5, 2.0, 0.1, 1.0),
  ParamSpec::float("animation_speed", "anim. speed", 0.001, 0.05, 0.001, 0.01),
];

/// Concentric regular polygons, each layer turned a little further, joined by spokes.
#[derive(Debug, Clone)]
pub struct GeometricPattern {
  params: ParamSet,
  time: f32
}

/// Vertices of a regular polygon.
fn polygon(center: P2, radius: f32, sides: usize, rotation: f32) -> Vec<P2> {
  (0..sides)
    .map(|i| {
      let angle = i as f32 / sides as f32 * PI * 2.0 + rotation;
      center + V2::new(angle.cos(), angle.sin()) * radius
    })
    .collect()
}

impl GeometricPattern {
  pub const TITLE: &'static str = "geometric";

  pub fn new() -> Self {
    Self { params: ParamSet::new(Self::TITLE, PARAMS), time: 0.0 }
  }

  /// Radius and rotation of every layer, innermost first.
  pub fn layers(&self, max_radius: f32) -> Vec<(f32, f32)> {
    let layers = self.params.count(LAYERS);
    (0..layers)
      .map(|layer| (
        max_radius / layers as f32 * (layer + 1) as f32 * self.params[SCALE],
        self.time + layer as f32 * PI / layers as f32
      ))
      .collect()
  }
}

impl Default for GeometricPattern {
  fn default() -> Self { Self::new() }
}

impl Sketch for GeometricPattern {
  fn title(&self) -> &'static str { Self::TITLE }
  fn params(&self) -> &ParamSet { &self.params }
  fn params_mut(&mut self) -> &mut ParamSet { &mut self.params }
  fn time(&self) -> f32 { self.time }
  fn restart(&mut self) { self.time = 0.0; }

  fn render(&mut self, canvas: &mut Canvas) {
    canvas.clear();
    let center = canvas.center();
    let max_radius = canvas.width().min(canvas.height()) * 0.4;
    let sides = self.params.count(SIDES);
    let layers = self.layers(max_radius);
    let count = layers.len() as f32;

    let mut inner: Option<f32> = None;
    for (layer, (radius, rotation)) in layers.into_iter().enumerate() {
      let opacity = 1.0 - layer as f32 / count * 0.7;
      let outline = polygon(center, radius, sides, rotation);
      canvas.stroke_polygon(&outline, 1.0, ink(opacity));

      // spokes from the previous radius, at this layer's rotation
      if let Some(prev_radius) = inner {
        polygon(center, prev_radius, sides, rotation).into_iter()
          .zip(outline.iter())
          .for_each(|(a, b)| canvas.stroke_line(a, *b, 1.0, ink(opacity * 0.3)));
      }
      inner = Some(radius);
    }

    self.time += self.params[ANIMATION_SPEED];
  }
}
