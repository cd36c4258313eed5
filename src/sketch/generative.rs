use {
  crate::{
    drawing::{Canvas, WHITE, ink, with_alpha},
    geometry::{P2, WorldSpace},
    params::{ParamSet, ParamSpec},
    sketch::Sketch
  },
  euclid::{Size2D, Vector2D as V2},
  itertools::Itertools,
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::collections::VecDeque,
};

const TRAIL: usize = 0;
const ATTRACTION: usize = 1;
const ANIMATION_SPEED: usize = 2;

const PARAMS: &[ParamSpec] = &[
  ParamSpec::int("trail", "trail", 100.0, 1000.0, 50.0, 500.0),
  ParamSpec::float("attraction", "attraction", 0.01, 0.2, 0.01, 0.05),
  ParamSpec::float("animation_speed", "anim. speed", 0.001, 0.05, 0.001, 0.01),
];

const AGENTS: usize = 5;
const REPULSION_RADIUS: f32 = 50.0;
const LINK_RADIUS: f32 = 100.0;

#[derive(Debug, Clone)]
pub struct Agent {
  pub position: P2,
  pub velocity: V2<f32, WorldSpace>,
  pub trail: VecDeque<P2>,
  pub age: u64
}

/// A handful of agents pulled towards the center and pushing each other away,
/// drawing fading trails.
#[derive(Debug, Clone)]
pub struct GenerativeForm {
  params: ParamSet,
  time: f32,
  agents: Vec<Agent>,
  /// Canvas size the agents were spawned for
  bounds: Option<Size2D<f32, WorldSpace>>,
  rng: Pcg64
}

impl GenerativeForm {
  pub const TITLE: &'static str = "generative";

  pub fn new(seed: u64) -> Self {
    Self {
      params: ParamSet::new(Self::TITLE, PARAMS),
      time: 0.0,
      agents: vec![],
      bounds: None,
      rng: Pcg64::seed_from_u64(seed)
    }
  }

  pub fn agents(&self) -> &[Agent] { &self.agents }

  fn spawn(&mut self, size: Size2D<f32, WorldSpace>) {
    let center = (size.to_vector() / 2.0).to_point();
    let rng = &mut self.rng;
    self.agents = (0..AGENTS)
      .map(|_| Agent {
        position: center + V2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * 100.0,
        velocity: V2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * 2.0,
        trail: VecDeque::new(),
        age: 0
      })
      .collect();
    self.bounds = Some(size);
  }

  /// Advance every agent by one frame. Agents are updated in order, each one
  /// seeing the already moved positions of those before it.
  pub fn step(&mut self, size: Size2D<f32, WorldSpace>) {
    let center = (size.to_vector() / 2.0).to_point();
    let attraction = self.params[ATTRACTION];
    let trail_len = self.params.count(TRAIL);

    for index in 0..self.agents.len() {
      let mut velocity = self.agents[index].velocity;
      let position = self.agents[index].position;

      let to_center = center - position;
      let distance = to_center.length();
      if distance > 0.0 {
        velocity += to_center / distance * attraction;
      }
      velocity += V2::new(self.rng.gen::<f32>() - 0.5, self.rng.gen::<f32>() - 0.5) * 0.1;

      self.agents.iter()
        .enumerate()
        .filter(|(other, _)| *other != index)
        .for_each(|(_, other)| {
          let d = other.position - position;
          let dist = d.length();
          if dist < REPULSION_RADIUS && dist > 0.0 {
            velocity -= d / dist * 0.02;
          }
        });

      velocity *= 0.99;
      let mut position = position + velocity;
      if position.x < 0.0 || position.x > size.width { velocity.x *= -1.0; }
      if position.y < 0.0 || position.y > size.height { velocity.y *= -1.0; }
      position.x = position.x.clamp(0.0, size.width);
      position.y = position.y.clamp(0.0, size.height);

      let agent = &mut self.agents[index];
      agent.velocity = velocity;
      agent.position = position;
      agent.trail.push_back(position);
      while agent.trail.len() > trail_len {
        agent.trail.pop_front();
      }
      agent.age += 1;
    }
  }
}

impl Sketch for GenerativeForm {
  fn title(&self) -> &'static str { Self::TITLE }
  fn params(&self) -> &ParamSet { &self.params }
  fn params_mut(&mut self) -> &mut ParamSet { &mut self.params }
  fn time(&self) -> f32 { self.time }

  fn restart(&mut self) {
    self.time = 0.0;
    self.agents.clear();
    self.bounds = None;
  }

  fn render(&mut self, canvas: &mut Canvas) {
    let size = canvas.size();
    if self.bounds != Some(size) {
      // fresh simulation, fresh canvas
      canvas.clear();
      self.spawn(size);
    }
    canvas.fade(with_alpha(WHITE, 0.05));
    self.step(size);

    self.agents.iter()
      .enumerate()
      .filter(|(_, agent)| agent.trail.len() > 1)
      .for_each(|(index, agent)| {
        let trail = agent.trail.iter().cloned().collect::<Vec<_>>();
        canvas.stroke_polyline(&trail, 1.0, ink(0.8 - index as f32 * 0.1));
      });

    self.agents.iter()
      .for_each(|agent| canvas.fill_circle(agent.position, 3.0, ink(1.0)));

    self.agents.iter()
      .tuple_combinations()
      .filter(|(a, b)| (b.position - a.position).length() < LINK_RADIUS)
      .for_each(|(a, b)| canvas.stroke_line(a.position, b.position, 0.5, ink(0.2)));

    self.time += self.params[ANIMATION_SPEED];
  }
}
