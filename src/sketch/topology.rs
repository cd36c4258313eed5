use {
  crate::{
    drawing::{Canvas, ink},
    geometry::P2,
    params::{ParamSet, ParamSpec},
    sketch::Sketch
  },
};

const GRID_SIZE: usize = 0;
const AMPLITUDE: usize = 1;
const FREQUENCY: usize = 2;
const CONNECTIONS: usize = 3;
const ANIMATION_SPEED: usize = 4;

const PARAMS: &[ParamSpec] = &[
  ParamSpec::int("grid_size", "grid", 10.0, 40.0, 2.0, 20.0),
  ParamSpec::int("amplitude", "amplitude", 10.0, 60.0, 5.0, 30.0),
  ParamSpec::float("frequency", "frequency", 0.01, 0.05, 0.001, 0.02),
  ParamSpec::toggle("connections", "connections", true),
  ParamSpec::float("animation_speed", "anim. speed", 0.005, 0.1, 0.005, 0.02),
];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshPoint {
  pub position: P2,
  /// Height of the surface, drives the dot size.
  pub z: f32
}

/// A regular grid displaced by two travelling waves.
#[derive(Debug, Clone)]
pub struct TopologyMesh {
  params: ParamSet,
  time: f32
}

impl TopologyMesh {
  pub const TITLE: &'static str = "topology";

  pub fn new() -> Self {
    Self { params: ParamSet::new(Self::TITLE, PARAMS), time: 0.0 }
  }

  /// `(cols + 1) × (rows + 1)` mesh vertices, indexed `[column][row]`.
  pub fn mesh(&self, width: f32, height: f32) -> Vec<Vec<MeshPoint>> {
    let grid = self.params[GRID_SIZE];
    let (amplitude, frequency) = (self.params[AMPLITUDE], self.params[FREQUENCY]);
    let cols = (width / grid).floor() as usize;
    let rows = (height / grid).floor() as usize;

    (0..=cols).map(|i| (0..=rows).map(|j| {
      let (x, y) = (i as f32 * grid, j as f32 * grid);
      let wave1 = ((x + self.time * 50.0) * frequency).sin() * amplitude;
      let wave2 = ((y + self.time * 30.0) * frequency).cos() * amplitude * 0.5;
      MeshPoint {
        position: P2::new(x + wave1 * 0.3, y + wave2 * 0.3),
        z: wave1 + wave2
      }
    }).collect()).collect()
  }

  pub fn dot_radius(&self, z: f32) -> f32 {
    let amplitude = self.params[AMPLITUDE];
    ((z + amplitude) / (amplitude * 2.0) * 3.0).max(0.5)
  }
}

impl Default for TopologyMesh {
  fn default() -> Self { Self::new() }
}

impl Sketch for TopologyMesh {
  fn title(&self) -> &'static str { Self::TITLE }
  fn params(&self) -> &ParamSet { &self.params }
  fn params_mut(&mut self) -> &mut ParamSet { &mut self.params }
  fn time(&self) -> f32 { self.time }
  fn restart(&mut self) { self.time = 0.0; }

  fn render(&mut self, canvas: &mut Canvas) {
    canvas.clear();
    let mesh = self.mesh(canvas.width(), canvas.height());
    let cols = mesh.len() - 1;
    let rows = mesh[0].len() - 1;

    if self.params.flag(CONNECTIONS) {
      itertools::iproduct!(0..cols, 0..rows).for_each(|(i, j)| {
        let current = mesh[i][j].position;
        canvas.stroke_line(current, mesh[i + 1][j].position, 0.5, ink(0.3));
        canvas.stroke_line(current, mesh[i][j + 1].position, 0.5, ink(0.3));
      });
    }

    mesh.iter()
      .flatten()
      .for_each(|p| canvas.fill_circle(p.position, self.dot_radius(p.z), ink(1.0)));

    self.time += self.params[ANIMATION_SPEED];
  }
}
