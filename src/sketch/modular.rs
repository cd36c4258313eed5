use {
  crate::{
    drawing::{Canvas, ink},
    geometry::P2,
    params::{ParamSet, ParamSpec},
    sketch::Sketch
  },
  euclid::Box2D,
};

const MODULES: usize = 0;
const SPACING: usize = 1;
const SCALE: usize = 2;
const ANIMATION_SPEED: usize = 3;

const PARAMS: &[ParamSpec] = &[
  ParamSpec::int("modules", "modules", 4.0, 12.0, 1.0, 8.0),
  ParamSpec::int("spacing", "spacing", 2.0, 20.0, 1.0, 10.0),
  ParamSpec::float("scale", "scale", 0.5, 2.0, 0.1, 1.0),
  ParamSpec::float("animation_speed", "anim. speed", 0.005, 0.1, 0.005, 0.02),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ModuleKind {
  Square,
  Circle,
  Triangle,
  Cross
}

impl ModuleKind {
  /// Kinds cycle along the diagonals, shifting twice per unit of time.
  pub fn at(i: usize, j: usize, time: f32) -> Self {
    let shift = (time * 2.0).floor() as i64;
    match (i as i64 + j as i64 + shift).rem_euclid(4) {
      0 => ModuleKind::Square,
      1 => ModuleKind::Circle,
      2 => ModuleKind::Triangle,
      _ => ModuleKind::Cross
    }
  }
}

/// A square grid of outlined modules, rotating in waves from the center.
#[derive(Debug, Clone)]
pub struct ModularGrid {
  params: ParamSet,
  time: f32
}

impl ModularGrid {
  pub const TITLE: &'static str = "modular";

  pub fn new() -> Self {
    Self { params: ParamSet::new(Self::TITLE, PARAMS), time: 0.0 }
  }

  /// Side of one module and the center of the first one.
  fn layout(&self, width: f32, height: f32) -> (f32, P2) {
    let modules = self.params[MODULES];
    let spacing = self.params[SPACING];
    let module_size = width.min(height) / modules - spacing;
    let span = modules * (module_size + spacing);
    let start = P2::new(
      (width - span) / 2.0 + module_size / 2.0,
      (height - span) / 2.0 + module_size / 2.0
    );
    (module_size, start)
  }

  fn draw_module(&self, canvas: &mut Canvas, center: P2, size: f32, rotation: f32, kind: ModuleKind) {
    if size <= 0.0 { return }
    let h = size / 2.0;
    canvas.save();
    canvas.translate(center.x, center.y);
    canvas.rotate(rotation);
    canvas.scale(self.params[SCALE], self.params[SCALE]);
    match kind {
      ModuleKind::Square =>
        canvas.stroke_rect(Box2D::new(P2::new(-h, -h), P2::new(h, h)), 1.0, ink(1.0)),
      ModuleKind::Circle =>
        canvas.stroke_circle(P2::origin(), h, 1.0, ink(1.0)),
      ModuleKind::Triangle =>
        canvas.stroke_polygon(&[P2::new(0.0, -h), P2::new(-h, h), P2::new(h, h)], 1.0, ink(1.0)),
      ModuleKind::Cross => {
        canvas.stroke_line(P2::new(-h, 0.0), P2::new(h, 0.0), 1.0, ink(1.0));
        canvas.stroke_line(P2::new(0.0, -h), P2::new(0.0, h), 1.0, ink(1.0));
      }
    }
    canvas.restore();
  }
}

impl Default for ModularGrid {
  fn default() -> Self { Self::new() }
}

impl Sketch for ModularGrid {
  fn title(&self) -> &'static str { Self::TITLE }
  fn params(&self) -> &ParamSet { &self.params }
  fn params_mut(&mut self) -> &mut ParamSet { &mut self.params }
  fn time(&self) -> f32 { self.time }
  fn restart(&mut self) { self.time = 0.0; }

  fn render(&mut self, canvas: &mut Canvas) {
    canvas.clear();
    let modules = self.params.count(MODULES);
    let (module_size, start) = self.layout(canvas.width(), canvas.height());
    let pitch = module_size + self.params[SPACING];
    let half = modules as f32 / 2.0;
    let time = self.time;
    let at = |i: usize, j: usize| P2::new(start.x + i as f32 * pitch, start.y + j as f32 * pitch);

    itertools::iproduct!(0..modules, 0..modules).for_each(|(i, j)| {
      let distance = ((i as f32 - half).powi(2) + (j as f32 - half).powi(2)).sqrt();
      let rotation = time + distance * 0.3;
      let size = module_size * (0.8 + 0.2 * (time + distance).sin());
      self.draw_module(canvas, at(i, j), size, rotation, ModuleKind::at(i, j, time));
    });

    itertools::iproduct!(0..modules - 1, 0..modules - 1)
      .filter(|(i, j)| (time + *i as f32 + *j as f32).sin() > 0.0)
      .for_each(|(i, j)| canvas.stroke_line(at(i, j), at(i + 1, j + 1), 0.5, ink(0.2)));

    self.time += self.params[ANIMATION_SPEED];
  }
}
