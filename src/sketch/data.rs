use {
  crate::{
    drawing::{Canvas, ink},
    geometry::P2,
    params::{ParamSet, ParamSpec},
    sketch::Sketch
  },
  euclid::Box2D,
  rand::prelude::*,
  rand_pcg::Pcg64,
};

const DATA_POINTS: usize = 0;
const BAR_HEIGHT: usize = 1;
const SMOOTHING: usize = 2;
const SHOW_CONNECTIONS: usize = 3;
const ANIMATION_SPEED: usize = 4;

const PARAMS: &[ParamSpec] = &[
  ParamSpec::int("data_points", "points", 20.0, 100.0, 5.0, 50.0),
  ParamSpec::int("bar_height", "height", 50.0, 200.0, 10.0, 100.0),
  ParamSpec::float("smoothing", "smooth", 0.01, 0.3, 0.01, 0.1),
  ParamSpec::toggle("show_connections", "connections", true),
  ParamSpec::float("animation_speed", "anim. speed", 0.005, 0.1, 0.005, 0.03),
];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DataStats {
  pub avg: f32,
  pub max: f32,
  pub min: f32
}

impl DataStats {
  pub fn of(values: &[f32]) -> Option<Self> {
    if values.is_empty() { return None }
    let sum: f32 = values.iter().sum();
    Some(Self {
      avg: sum / values.len() as f32,
      max: values.iter().cloned().fold(f32::MIN, f32::max),
      min: values.iter().cloned().fold(f32::MAX, f32::min)
    })
  }
}

/// Bar chart of random values easing towards a travelling sine.
#[derive(Debug, Clone)]
pub struct DataVisualization {
  params: ParamSet,
  time: f32,
  values: Vec<f32>,
  rng: Pcg64
}

impl DataVisualization {
  pub const TITLE: &'static str = "data-driven";

  pub fn new(seed: u64) -> Self {
    let mut this = Self {
      params: ParamSet::new(Self::TITLE, PARAMS),
      time: 0.0,
      values: vec![],
      rng: Pcg64::seed_from_u64(seed)
    };
    this.restart();
    this
  }

  pub fn values(&self) -> &[f32] { &self.values }

  pub fn stats(&self) -> Option<DataStats> { DataStats::of(&self.values) }

  /// Ease every value towards `(sin(time + 0.2 i) + 1) / 2`.
  pub fn step(&mut self) {
    let (time, smoothing) = (self.time, self.params[SMOOTHING]);
    self.values.iter_mut()
      .enumerate()
      .for_each(|(i, value)| {
        let target = ((time + i as f32 * 0.2).sin() + 1.0) * 0.5;
        *value += (target - *value) * smoothing;
      });
  }
}

impl Sketch for DataVisualization {
  fn title(&self) -> &'static str { Self::TITLE }
  fn params(&self) -> &ParamSet { &self.params }
  fn params_mut(&mut self) -> &mut ParamSet { &mut self.params }
  fn time(&self) -> f32 { self.time }

  fn restart(&mut self) {
    self.time = 0.0;
    let n = self.params.count(DATA_POINTS);
    let rng = &mut self.rng;
    self.values = (0..n).map(|_| rng.gen::<f32>()).collect();
  }

  fn render(&mut self, canvas: &mut Canvas) {
    canvas.clear();
    self.step();

    let width = canvas.width();
    let n = self.values.len().max(1);
    let bar_width = width / n as f32;
    let base_y = canvas.height() * 0.8;
    let bar_height = self.params[BAR_HEIGHT];
    let tops = self.values.iter()
      .enumerate()
      .map(|(i, v)| P2::new(i as f32 * bar_width + bar_width / 2.0, base_y - v * bar_height))
      .collect::<Vec<_>>();

    tops.iter().enumerate().for_each(|(i, top)| {
      let x = i as f32 * bar_width;
      canvas.fill_rect(
        Box2D::new(P2::new(x, top.y), P2::new(x + bar_width - 1.0, base_y)),
        ink(0.8)
      );
    });

    if self.params.flag(SHOW_CONNECTIONS) {
      canvas.stroke_polyline(&tops, 2.0, ink(0.6));
    }

    tops.iter().for_each(|top| canvas.fill_circle(*top, 2.0, ink(1.0)));

    (0..=5).for_each(|i| {
      let y = base_y - i as f32 / 5.0 * bar_height;
      canvas.stroke_line(P2::new(0.0, y), P2::new(width, y), 0.5, ink(0.1));
    });

    self.time += self.params[ANIMATION_SPEED];
  }

  fn caption(&self) -> Option<String> {
    self.stats().map(|s| format!("avg: {:.2} max: {:.2} min: {:.2}", s.avg, s.max, s.min))
  }
}
