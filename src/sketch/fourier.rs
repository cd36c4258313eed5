use {
  crate::{
    drawing::{Canvas, ink},
    geometry::P2,
    params::{ParamSet, ParamSpec},
    sketch::{Sketch, lattice}
  },
  std::f32::consts::PI
};

const FREQUENCY1: usize = 0;
const FREQUENCY2: usize = 1;
const AMPLITUDE1: usize = 2;
const AMPLITUDE2: usize = 3;
const ANIMATION_SPEED: usize = 4;

const PARAMS: &[ParamSpec] = &[
  ParamSpec::float("frequency1", "freq1", 0.5, 5.0, 0.1, 1.0),
  ParamSpec::float("frequency2", "freq2", 0.5, 5.0, 0.1, 2.0),
  ParamSpec::float("amplitude1", "amp1", 10.0, 100.0, 5.0, 50.0),
  ParamSpec::float("amplitude2", "amp2", 10.0, 100.0, 5.0, 30.0),
  ParamSpec::float("animation_speed", "anim. speed", 0.01, 0.2, 0.01, 0.05),
];

const LAYERS: usize = 3;

/// Three stacked sums of sines, over a dotted interference lattice.
#[derive(Debug, Clone)]
pub struct FourierWaves {
  params: ParamSet,
  time: f32
}

impl FourierWaves {
  pub const TITLE: &'static str = "fourier";

  pub fn new() -> Self {
    Self { params: ParamSet::new(Self::TITLE, PARAMS), time: 0.0 }
  }

  /// Height of wave `layer` at column `x` of a canvas `width` wide.
  pub fn wave(&self, x: f32, width: f32, center_y: f32, layer: usize) -> f32 {
    let (time, layer) = (self.time, layer as f32);
    let t = x / width * PI * 4.0;
    let wave1 = (t * self.params[FREQUENCY1] + time + layer).sin() * self.params[AMPLITUDE1];
    let wave2 = (t * self.params[FREQUENCY2] + time * 1.5 + layer).sin() * self.params[AMPLITUDE2];
    let wave3 = (t * 3.0 + time * 0.5 + layer).sin() * 20.0;
    center_y + wave1 + wave2 + wave3 + layer * 10.0
  }

  pub fn interference(&self, p: P2, width: f32, height: f32) -> f32 {
    let t1 = p.x / width * PI * 2.0;
    let t2 = p.y / height * PI * 2.0;
    (t1 * self.params[FREQUENCY1] + self.time).sin() * (t2 * self.params[FREQUENCY2] + self.time).sin()
  }
}

impl Default for FourierWaves {
  fn default() -> Self { Self::new() }
}

impl Sketch for FourierWaves {
  fn title(&self) -> &'static str { Self::TITLE }
  fn params(&self) -> &ParamSet { &self.params }
  fn params_mut(&mut self) -> &mut ParamSet { &mut self.params }
  fn time(&self) -> f32 { self.time }
  fn restart(&mut self) { self.time = 0.0; }

  fn render(&mut self, canvas: &mut Canvas) {
    canvas.clear();
    let (width, height) = (canvas.width(), canvas.height());
    let center_y = height / 2.0;

    for layer in 0..LAYERS {
      let points = lattice(width, 2.0)
        .map(|x| P2::new(x, self.wave(x, width, center_y, layer)))
        .collect::<Vec<_>>();
      let k = layer as f32;
      canvas.stroke_polyline(&points, 2.0 - k * 0.5, ink(0.8 - k * 0.2));
    }

    itertools::iproduct!(lattice(width, 8.0), lattice(height, 8.0))
      .map(|(x, y)| P2::new(x, y))
      .filter(|p| self.interference(*p, width, height) > 0.5)
      .collect::<Vec<_>>()
      .into_iter()
      .for_each(|p| canvas.fill_circle(p, 1.0, ink(0.1)));

    self.time += self.params[ANIMATION_SPEED];
  }
}
