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

const A: usize = 0;
const B: usize = 1;
const DENSITY: usize = 2;
const ANIMATION_SPEED: usize = 3;

const PARAMS: &[ParamSpec] = &[
  ParamSpec::float("a", "a", 0.5, 5.0, 0.1, 2.0),
  ParamSpec::float("b", "b", 0.1, 2.0, 0.1, 0.5),
  ParamSpec::int("density", "density", 100.0, 500.0, 10.0, 300.0),
  ParamSpec::float("animation_speed", "anim. speed", 0.001, 0.1, 0.001, 0.02),
];

/// Archimedean spiral `r = a + b·t` over three turns, rotating with time.
#[derive(Debug, Clone)]
pub struct ParametricSpiral {
  params: ParamSet,
  time: f32
}

impl ParametricSpiral {
  pub const TITLE: &'static str = "parametric";

  pub fn new() -> Self {
    Self { params: ParamSet::new(Self::TITLE, PARAMS), time: 0.0 }
  }

  pub fn points(&self, center: P2) -> Vec<P2> {
    let density = self.params.count(DENSITY);
    (0..density)
      .map(|i| {
        let t = i as f32 / density as f32 * PI * 6.0 + self.time;
        let r = self.params[A] + self.params[B] * t;
        center + V2::new(t.cos(), t.sin()) * r * 3.0
      })
      .collect()
  }
}

impl Default for ParametricSpiral {
  fn default() -> Self { Self::new() }
}

impl Sketch for ParametricSpiral {
  fn title(&self) -> &'static str { Self::TITLE }
  fn params(&self) -> &ParamSet { &self.params }
  fn params_mut(&mut self) -> &mut ParamSet { &mut self.params }
  fn time(&self) -> f32 { self.time }
  fn restart(&mut self) { self.time = 0.0; }

  fn render(&mut self, canvas: &mut Canvas) {
    canvas.clear();
    let points = self.points(canvas.center());
    canvas.stroke_polyline(&points, 0.5, ink(1.0));
    points.iter()
      .step_by(10)
      .for_each(|p| canvas.fill_circle(*p, 1.0, ink(1.0)));

    self.time += self.params[ANIMATION_SPEED];
  }
}
