use {
  crate::{
    drawing::{Canvas, ink},
    geometry::P2,
    params::{ParamSet, ParamSpec},
    sketch::{Sketch, lattice}
  },
  euclid::Vector2D as V2,
  image::Rgba,
  rayon::prelude::*,
  std::f64::consts::PI
};

const SCALE: usize = 0;
const OCTAVES: usize = 1;
const PERSISTENCE: usize = 2;
const THRESHOLD: usize = 3;
const ANIMATION_SPEED: usize = 4;

const PARAMS: &[ParamSpec] = &[
  ParamSpec::float("scale", "scale", 0.005, 0.05, 0.001, 0.01),
  ParamSpec::int("octaves", "octaves", 1.0, 8.0, 1.0, 4.0),
  ParamSpec::float("persistence", "persistence", 0.1, 0.9, 0.05, 0.5),
  ParamSpec::float("threshold", "threshold", 0.0, 1.0, 0.1, 0.3),
  ParamSpec::float("animation_speed", "anim. speed", 0.001, 0.02, 0.001, 0.005),
];

/// Hash noise in `[-1, 1)`.
pub fn noise(x: f64, y: f64, z: f64) -> f64 {
  let n = (x * 12.9898 + y * 78.233 + z * 37.719).sin() * 43758.5453;
  (n - n.floor()) * 2.0 - 1.0
}

/// Fractal sum of `octaves` noise layers, each at double frequency and
/// `persistence` times the amplitude of the previous one.
pub fn fbm(x: f64, y: f64, z: f64, octaves: usize, persistence: f64) -> f64 {
  (0..octaves)
    .fold((0.0, 1.0, 1.0), |(value, amplitude, frequency), _| (
      value + noise(x * frequency, y * frequency, z * frequency) * amplitude,
      amplitude * persistence,
      frequency * 2.0
    )).0
}

/// Dot opacity for a noise value. Sums of several octaves may exceed 1.
pub(crate) fn intensity(value: f64) -> u8 {
  ((value + 1.0) * 127.0).floor().clamp(0.0, 255.0) as u8
}

/// Thresholded fractal noise, with a lattice of flow strokes on top.
#[derive(Debug, Clone)]
pub struct AlgorithmicNoise {
  params: ParamSet,
  time: f32
}

impl AlgorithmicNoise {
  pub const TITLE: &'static str = "algorithmic";

  pub fn new() -> Self {
    Self { params: ParamSet::new(Self::TITLE, PARAMS), time: 0.0 }
  }

  /// Noise value at a canvas point, for the current time.
  pub fn sample(&self, p: P2) -> f64 {
    let scale = self.params[SCALE] as f64;
    fbm(
      p.x as f64 * scale,
      p.y as f64 * scale,
      self.time as f64,
      self.params.count(OCTAVES),
      self.params[PERSISTENCE] as f64
    )
  }

  pub fn flow_angle(&self, p: P2) -> f32 {
    let scale = self.params[SCALE] as f64 * 2.0;
    (fbm(p.x as f64 * scale, p.y as f64 * scale, self.time as f64 * 2.0, 2, 0.5) * PI) as f32
  }
}

impl Default for AlgorithmicNoise {
  fn default() -> Self { Self::new() }
}

impl Sketch for AlgorithmicNoise {
  fn title(&self) -> &'static str { Self::TITLE }
  fn params(&self) -> &ParamSet { &self.params }
  fn params_mut(&mut self) -> &mut ParamSet { &mut self.params }
  fn time(&self) -> f32 { self.time }
  fn restart(&mut self) { self.time = 0.0; }

  fn render(&mut self, canvas: &mut Canvas) {
    canvas.clear();
    let (width, height) = (canvas.width(), canvas.height());
    let threshold = self.params[THRESHOLD] as f64;

    let this = &*self;
    let dots = lattice(width, 2.0)
      .collect::<Vec<_>>()
      .into_par_iter()
      .flat_map_iter(move |x| lattice(height, 2.0)
        .map(move |y| P2::new(x, y))
        .filter_map(move |p| {
          let value = this.sample(p);
          (value > threshold).then(|| (p, intensity(value)))
        }))
      .collect::<Vec<_>>();
    dots.into_iter()
      .for_each(|(p, intensity)| canvas.put_pixel(p, Rgba([0, 0, 0, intensity])));

    itertools::iproduct!(lattice(width, 20.0), lattice(height, 20.0))
      .map(|(x, y)| {
        let p = P2::new(x, y);
        let angle = self.flow_angle(p);
        (p, p + V2::new(angle.cos(), angle.sin()) * 10.0)
      })
      .collect::<Vec<_>>()
      .into_iter()
      .for_each(|(a, b)| canvas.stroke_line(a, b, 0.5, ink(0.3)));

    self.time += self.params[ANIMATION_SPEED];
  }
}
