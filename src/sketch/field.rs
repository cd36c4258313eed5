use {
  crate::{
    drawing::{Canvas, WHITE, ink, with_alpha},
    geometry::{P2, Segment, WorldSpace, Shape},
    params::{ParamSet, ParamSpec},
    sketch::{Sketch, lattice}
  },
  euclid::{Size2D, Vector2D as V2},
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::collections::VecDeque,
};

const RESOLUTION: usize = 0;
const FIELD_STRENGTH: usize = 1;
const PARTICLE_COUNT: usize = 2;
const DECAY: usize = 3;
const ANIMATION_SPEED: usize = 4;

const PARAMS: &[ParamSpec] = &[
  ParamSpec::int("resolution", "resolution", 10.0, 30.0, 2.0, 15.0),
  ParamSpec::float("field_strength", "strength", 0.5, 5.0, 0.1, 2.0),
  ParamSpec::int("particle_count", "particles", 50.0, 200.0, 10.0, 100.0),
  ParamSpec::float("decay", "decay", 0.9, 0.999, 0.001, 0.98),
  ParamSpec::float("animation_speed", "anim. speed", 0.001, 0.05, 0.001, 0.02),
];

const TRAIL: usize = 20;
const ARROW_HEAD: f32 = 3.0;
const ARROW_HEAD_ANGLE: f32 = 0.3;

#[derive(Debug, Clone)]
pub struct Particle {
  pub position: P2,
  pub velocity: V2<f32, WorldSpace>,
  /// Fades from 1, the particle respawns below 0.1
  pub life: f32,
  pub trail: VecDeque<P2>
}

impl Particle {
  fn spawn(rng: &mut Pcg64, size: Size2D<f32, WorldSpace>) -> Self {
    Self {
      position: P2::new(rng.gen::<f32>() * size.width, rng.gen::<f32>() * size.height),
      velocity: V2::zero(),
      life: 1.0,
      trail: VecDeque::with_capacity(TRAIL + 1)
    }
  }
}

/// Particles drifting through an analytic vector field, drawn over its arrows.
#[derive(Debug, Clone)]
pub struct ComputationalField {
  params: ParamSet,
  time: f32,
  particles: Vec<Particle>,
  bounds: Option<Size2D<f32, WorldSpace>>,
  rng: Pcg64
}

impl ComputationalField {
  pub const TITLE: &'static str = "computational";

  pub fn new(seed: u64) -> Self {
    Self {
      params: ParamSet::new(Self::TITLE, PARAMS),
      time: 0.0,
      particles: vec![],
      bounds: None,
      rng: Pcg64::seed_from_u64(seed)
    }
  }

  pub fn particles(&self) -> &[Particle] { &self.particles }

  pub fn force(&self, p: P2, time: f32) -> V2<f32, WorldSpace> {
    let fx = (p.x * 0.01 + time).sin() * (p.y * 0.01 + time * 0.7).cos();
    let fy = (p.x * 0.01 + time * 0.5).cos() * (p.y * 0.01 + time).sin();
    V2::new(fx, fy) * self.params[FIELD_STRENGTH]
  }

  fn spawn(&mut self, size: Size2D<f32, WorldSpace>) {
    let rng = &mut self.rng;
    self.particles = (0..self.params.count(PARTICLE_COUNT))
      .map(|_| Particle::spawn(rng, size))
      .collect();
    self.bounds = Some(size);
  }

  pub fn step(&mut self, size: Size2D<f32, WorldSpace>) {
    let (time, decay) = (self.time, self.params[DECAY]);
    for i in 0..self.particles.len() {
      let force = self.force(self.particles[i].position, time);
      let particle = &mut self.particles[i];
      particle.velocity = (particle.velocity + force * 0.1) * decay;
      let mut p = particle.position + particle.velocity;
      // wrap around the edges
      if p.x < 0.0 { p.x = size.width; }
      if p.x > size.width { p.x = 0.0; }
      if p.y < 0.0 { p.y = size.height; }
      if p.y > size.height { p.y = 0.0; }
      particle.position = p;

      particle.trail.push_back(p);
      if particle.trail.len() > TRAIL {
        particle.trail.pop_front();
      }
      particle.life *= 0.999;
      if particle.life < 0.1 {
        *particle = Particle::spawn(&mut self.rng, size);
      }
    }
  }

  fn draw_field(&self, canvas: &mut Canvas) {
    let (width, height) = (canvas.width(), canvas.height());
    let resolution = self.params[RESOLUTION];
    itertools::iproduct!(lattice(width, resolution), lattice(height, resolution))
      .for_each(|(x, y)| {
        let start = P2::new(x, y);
        let force = self.force(start, self.time);
        let length = force.length() * 10.0;
        if length <= 1.0 { return }

        let angle = force.y.atan2(force.x);
        let end = start + V2::new(angle.cos(), angle.sin()) * length;
        let barb = |a: f32| Segment {
          a: end,
          b: end - V2::new(a.cos(), a.sin()) * ARROW_HEAD,
          radius: 0.25
        };
        canvas.stroke_line(start, end, 0.5, ink(0.1));
        canvas.fill_shape(
          barb(angle - ARROW_HEAD_ANGLE).union(barb(angle + ARROW_HEAD_ANGLE)),
          ink(0.1)
        );
      });
  }
}

impl Sketch for ComputationalField {
  fn title(&self) -> &'static str { Self::TITLE }
  fn params(&self) -> &ParamSet { &self.params }
  fn params_mut(&mut self) -> &mut ParamSet { &mut self.params }
  fn time(&self) -> f32 { self.time }

  fn restart(&mut self) {
    self.time = 0.0;
    self.particles.clear();
    self.bounds = None;
  }

  fn render(&mut self, canvas: &mut Canvas) {
    let size = canvas.size();
    if self.bounds != Some(size) {
      // fresh simulation, fresh canvas
      canvas.clear();
      self.spawn(size);
    }
    canvas.fade(with_alpha(WHITE, 0.1));
    self.draw_field(canvas);
    self.step(size);

    self.particles.iter()
      .filter(|p| p.trail.len() > 1)
      .for_each(|p| {
        let trail = p.trail.iter().cloned().collect::<Vec<_>>();
        canvas.stroke_polyline(&trail, 1.0, ink(p.life * 0.5));
      });

    canvas.save();
    self.particles.iter().for_each(|p| {
      canvas.set_alpha(p.life);
      canvas.fill_circle(p.position, 2.0, ink(1.0));
    });
    canvas.restore();

    self.time += self.params[ANIMATION_SPEED];
  }
}
