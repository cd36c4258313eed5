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

const SYMMETRY: usize = 0;
const RADIUS: usize = 1;
const COMPLEXITY: usize = 2;
const MIRROR: usize = 3;
const ANIMATION_SPEED: usize = 4;

const PARAMS: &[ParamSpec] = &[
  ParamSpec::int("symmetry", "symmetry", 3.0, 16.0, 1.0, 8.0),
  ParamSpec::int("radius", "radius", 40.0, 120.0, 5.0, 80.0),
  ParamSpec::int("complexity", "complexity", 2.0, 8.0, 1.0, 3.0),
  ParamSpec::toggle("mirror", "mirror", true),
  ParamSpec::float("animation_speed", "anim. speed", 0.001, 0.05, 0.001, 0.01),
];

const SATELLITES: usize = 4;

/// Rings arranged with n-fold rotational symmetry, orbited by four smaller copies.
#[derive(Debug, Clone)]
pub struct SymmetryPattern {
  params: ParamSet,
  time: f32
}

impl SymmetryPattern {
  pub const TITLE: &'static str = "symmetry";

  pub fn new() -> Self {
    Self { params: ParamSet::new(Self::TITLE, PARAMS), time: 0.0 }
  }

  /// Ring centers of one wedge, before the wedge rotation.
  pub fn wedge(&self, time: f32) -> Vec<P2> {
    let complexity = self.params.count(COMPLEXITY);
    let radius = self.params[RADIUS];
    (0..complexity)
      .map(|j| {
        let r = radius / complexity as f32 * (j + 1) as f32;
        let angle = time + j as f32 * 0.5;
        P2::new(angle.cos() * r, angle.sin() * r)
      })
      .collect()
  }

  fn draw_pattern(&self, canvas: &mut Canvas, center: P2, time: f32) {
    let symmetry = self.params.count(SYMMETRY);
    let step = PI * 2.0 / symmetry as f32;
    let wedge = self.wedge(time);

    for i in 0..symmetry {
      canvas.save();
      canvas.translate(center.x, center.y);
      canvas.rotate(i as f32 * step);
      if self.params.flag(MIRROR) && i % 2 == 1 {
        canvas.scale(-1.0, 1.0);
      }
      let color = ink(0.8 - i as f32 / symmetry as f32 * 0.3);
      wedge.iter()
        .for_each(|p| canvas.stroke_circle(*p, 2.0, 1.0, color));
      // the outermost ring is stroked twice
      if let Some(last) = wedge.last() {
        canvas.stroke_circle(*last, 2.0, 1.0, color);
      }
      canvas.restore();
    }
  }
}

impl Default for SymmetryPattern {
  fn default() -> Self { Self::new() }
}

impl Sketch for SymmetryPattern {
  fn title(&self) -> &'static str { Self::TITLE }
  fn params(&self) -> &ParamSet { &self.params }
  fn params_mut(&mut self) -> &mut ParamSet { &mut self.params }
  fn time(&self) -> f32 { self.time }
  fn restart(&mut self) { self.time = 0.0; }

  fn render(&mut self, canvas: &mut Canvas) {
    canvas.clear();
    let center = canvas.center();
    let radius = self.params[RADIUS];
    self.draw_pattern(canvas, center, self.time);

    for i in 0..SATELLITES {
      let angle = i as f32 / SATELLITES as f32 * PI * 2.0 + self.time * 0.5;
      let p = center + V2::new(angle.cos(), angle.sin()) * radius * 1.5;
      canvas.save();
      canvas.set_alpha(0.3);
      canvas.scale(0.5, 0.5);
      self.draw_pattern(canvas, (p.to_vector() * 2.0).to_point(), self.time * 0.8 + i as f32);
      canvas.restore();
    }

    canvas.stroke_circle(center, 5.0, 2.0, ink(1.0));

    self.time += self.params[ANIMATION_SPEED];
  }
}
