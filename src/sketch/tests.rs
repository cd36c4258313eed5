use {
  super::*,
  crate::{drawing::Canvas, error::Error, geometry::P2},
  euclid::Size2D,
};

fn all(seed: u64) -> Vec<Box<dyn Sketch>> {
  vec![
    Box::new(ParametricSpiral::new()),
    Box::new(FourierWaves::new()),
    Box::new(GeometricPattern::new()),
    Box::new(AlgorithmicNoise::new()),
    Box::new(TopologyMesh::new()),
    Box::new(DataVisualization::new(seed)),
    Box::new(ModularGrid::new()),
    Box::new(SymmetryPattern::new()),
    Box::new(GenerativeForm::new(seed)),
    Box::new(ComputationalField::new(seed)),
  ]
}

fn painted(canvas: &Canvas) -> usize {
  canvas.image().pixels().filter(|p| p.0[3] > 0).count()
}

#[test] fn every_sketch_draws_and_advances() {
  for mut sketch in all(0) {
    let mut canvas = Canvas::new(120.0, 120.0, 1.0);
    sketch.render(&mut canvas);
    sketch.render(&mut canvas);
    assert!(painted(&canvas) > 0, "{} drew nothing", sketch.title());
    let speed = sketch.params().get("animation_speed").unwrap();
    assert!((sketch.time() - speed * 2.0).abs() < 1e-5, "{}: {}", sketch.title(), sketch.time());
  }
}

#[test] fn titles_in_section_order() {
  let titles = all(0).iter().map(|s| s.title()).collect::<Vec<_>>();
  assert_eq!(titles, [
    "parametric", "fourier", "geometric", "algorithmic", "topology",
    "data-driven", "modular", "symmetry", "generative", "computational"
  ]);
}

#[test] fn set_param_restarts() -> anyhow::Result<()> {
  let mut spiral = ParametricSpiral::new();
  let mut canvas = Canvas::new(64.0, 64.0, 1.0);
  spiral.render(&mut canvas);
  assert!(spiral.time() > 0.0);
  assert_eq!(spiral.set_param("a", 3.0)?, 3.0);
  assert_eq!(spiral.time(), 0.0);
  assert_eq!(spiral.params().get("a"), Some(3.0));
  Ok(())
}

#[test] fn set_param_rejects_unknown_names() {
  let mut spiral = ParametricSpiral::new();
  assert!(matches!(spiral.set_param("c", 1.0), Err(Error::UnknownParam { .. })));
}

#[test] fn spiral_starts_at_radius_a() -> anyhow::Result<()> {
  let mut spiral = ParametricSpiral::new();
  let center = P2::new(50.0, 50.0);
  let points = spiral.points(center);
  assert_eq!(points.len(), 300);
  assert!((points[0] - P2::new(56.0, 50.0)).length() < 1e-4);

  spiral.set_param("density", 100.0)?;
  assert_eq!(spiral.points(center).len(), 100);
  Ok(())
}

#[test] fn noise_stays_in_range() {
  for i in 0..1000 {
    let v = noise(i as f64 * 0.37, i as f64 * 1.13, 0.5);
    assert!((-1.0..1.0).contains(&v), "{}", v);
  }
  assert_eq!(fbm(0.3, 0.7, 0.1, 1, 0.5), noise(0.3, 0.7, 0.1));
  let two = fbm(0.3, 0.7, 0.1, 2, 0.5);
  assert!((two - noise(0.3, 0.7, 0.1) - 0.5 * noise(0.3 * 2.0, 0.7 * 2.0, 0.1 * 2.0)).abs() < 1e-12);
}

#[test] fn data_stats() {
  assert_eq!(DataStats::of(&[]), None);
  let stats = DataStats::of(&[1.0, 2.0, 3.0]).unwrap();
  assert_eq!(stats, DataStats { avg: 2.0, max: 3.0, min: 1.0 });
}

#[test] fn data_values_ease_towards_the_wave() {
  let mut data = DataVisualization::new(3);
  assert_eq!(data.values().len(), 50);
  assert!(data.values().iter().all(|v| (0.0..1.0).contains(v)));
  assert_eq!(data.caption().map(|c| c.starts_with("avg: ")), Some(true));

  // at time 0 the target of value 0 is exactly 0.5
  let before = (data.values()[0] - 0.5).abs();
  data.step();
  let after = (data.values()[0] - 0.5).abs();
  assert!(after < before || before == 0.0);
}

#[test] fn seeds_are_reproducible() {
  assert_eq!(DataVisualization::new(9).values(), DataVisualization::new(9).values());
  assert_ne!(DataVisualization::new(9).values(), DataVisualization::new(10).values());

  let frame = |seed| {
    let mut sketch = GenerativeForm::new(seed);
    let mut canvas = Canvas::new(80.0, 80.0, 1.0);
    (0..3).for_each(|_| sketch.render(&mut canvas));
    canvas.into_image()
  };
  assert_eq!(frame(1), frame(1));
}

#[test] fn module_kinds_cycle() {
  assert_eq!(ModuleKind::at(0, 0, 0.0), ModuleKind::Square);
  assert_eq!(ModuleKind::at(1, 0, 0.0), ModuleKind::Circle);
  assert_eq!(ModuleKind::at(1, 1, 0.0), ModuleKind::Triangle);
  assert_eq!(ModuleKind::at(3, 0, 0.0), ModuleKind::Cross);
  assert_eq!(ModuleKind::at(4, 0, 0.0), ModuleKind::Square);
  assert_eq!(ModuleKind::at(0, 0, 0.5), ModuleKind::Circle);
}

#[test] fn topology_mesh_dimensions() {
  let mesh = TopologyMesh::new().mesh(100.0, 60.0);
  assert_eq!(mesh.len(), 6);
  assert!(mesh.iter().all(|column| column.len() == 4));
  // the first vertex only moves vertically at time 0
  assert_eq!(mesh[0][0].position.x, 0.0);
}

#[test] fn geometric_layers_grow_outwards() {
  let layers = GeometricPattern::new().layers(100.0);
  assert_eq!(layers.len(), 8);
  assert!(layers.windows(2).all(|w| w[0].0 < w[1].0));
  assert!((layers[7].0 - 100.0).abs() < 1e-4);
}

#[test] fn symmetry_wedge_reaches_the_radius() {
  let wedge = SymmetryPattern::new().wedge(0.0);
  assert_eq!(wedge.len(), 3);
  assert!((wedge[2].to_vector().length() - 80.0).abs() < 1e-3);
}

#[test] fn generative_agents_stay_in_bounds() -> anyhow::Result<()> {
  let mut sketch = GenerativeForm::new(5);
  sketch.set_param("trail", 100.0)?;
  let mut canvas = Canvas::new(100.0, 80.0, 1.0);
  sketch.render(&mut canvas);
  let size = canvas.size();
  assert_eq!(sketch.agents().len(), 5);

  (0..500).for_each(|_| sketch.step(size));
  for agent in sketch.agents() {
    assert!((0.0..=size.width).contains(&agent.position.x));
    assert!((0.0..=size.height).contains(&agent.position.y));
    assert_eq!(agent.trail.len(), 100);
    assert_eq!(agent.age, 501);
  }
  Ok(())
}

#[test] fn field_particles_wrap_and_respawn() {
  let mut field = ComputationalField::new(11);
  let mut canvas = Canvas::new(90.0, 70.0, 1.0);
  field.render(&mut canvas);
  assert_eq!(field.particles().len(), 100);

  let size = Size2D::new(90.0, 70.0);
  // 0.999^2400 < 0.1, so every particle has been reborn at least once
  (0..2400).for_each(|_| field.step(size));
  for p in field.particles() {
    assert!((0.0..=size.width).contains(&p.position.x));
    assert!((0.0..=size.height).contains(&p.position.y));
    assert!(p.life >= 0.1 && p.life <= 1.0);
    assert!(p.trail.len() <= 20);
  }
}

#[test] fn field_force_scales_with_strength() -> anyhow::Result<()> {
  let mut field = ComputationalField::new(0);
  assert_eq!(field.force(P2::origin(), 0.0).length(), 0.0);
  let p = P2::new(40.0, 120.0);
  let weak = field.force(p, 0.3);
  field.set_param("field_strength", 4.0)?;
  let strong = field.force(p, 0.3);
  assert!((strong - weak * 2.0).length() < 1e-5);
  Ok(())
}

#[test] fn restart_clears_simulations() {
  let mut field = ComputationalField::new(2);
  let mut canvas = Canvas::new(50.0, 50.0, 1.0);
  field.render(&mut canvas);
  field.restart();
  assert!(field.particles().is_empty());
  assert_eq!(field.time(), 0.0);
  field.render(&mut canvas);
  assert_eq!(field.particles().len(), 100);
}

#[test] fn set_param_applies_on_the_next_frame() -> anyhow::Result<()> {
  let mut field = ComputationalField::new(4);
  let mut canvas = Canvas::new(80.0, 80.0, 1.0);
  field.render(&mut canvas);
  assert_eq!(field.particles().len(), 100);
  assert_eq!(field.set_param("particle_count", 50.0)?, 50.0);
  field.render(&mut canvas);
  assert_eq!(field.particles().len(), 50);
  Ok(())
}

fn mean_alpha(canvas: &Canvas) -> f32 {
  let image = canvas.image();
  image.pixels().map(|p| p.0[3] as f32).sum::<f32>() / (image.width() * image.height()) as f32
}

#[test] fn respawned_simulations_start_on_a_clear_canvas() -> anyhow::Result<()> {
  let sketches: Vec<(Box<dyn Sketch>, &str, f32)> = vec![
    (Box::new(GenerativeForm::new(1)), "attraction", 0.1),
    (Box::new(ComputationalField::new(1)), "particle_count", 50.0),
  ];
  for (mut sketch, name, value) in sketches {
    let mut canvas = Canvas::new(200.0, 150.0, 1.0);
    (0..60).for_each(|_| sketch.render(&mut canvas));
    assert!(mean_alpha(&canvas) > 200.0, "{}: {}", sketch.title(), mean_alpha(&canvas));
    sketch.set_param(name, value)?;
    sketch.render(&mut canvas);
    assert!(mean_alpha(&canvas) < 128.0, "{}: {}", sketch.title(), mean_alpha(&canvas));
  }
  Ok(())
}

#[test] fn noise_intensity_saturates() {
  use super::noise::intensity;
  assert_eq!(intensity(-1.0), 0);
  assert_eq!(intensity(0.5), 190);
  assert_eq!(intensity(1.0), 254);
  assert_eq!(intensity(2.0), 255);
  assert_eq!(intensity(-3.0), 0);
}

#[test] fn noise_dots_are_written_pixels() {
  let mut sketch = AlgorithmicNoise::new();
  let before = sketch.clone();
  let mut canvas = Canvas::new(60.0, 60.0, 1.0);
  sketch.render(&mut canvas);

  let threshold = sketch.params().get("threshold").unwrap() as f64;
  let (mut dots, mut exact) = (0, 0);
  for (x, y) in itertools::iproduct!((0..30).map(|i| i * 2), (0..30).map(|j| j * 2)) {
    let value = before.sample(P2::new(x as f32, y as f32));
    if value <= threshold { continue }
    dots += 1;
    // flow strokes may blend over a few of the dots
    if *canvas.image().get_pixel(x, y) == image::Rgba([0, 0, 0, super::noise::intensity(value)]) {
      exact += 1;
    }
  }
  assert!(dots > 0);
  assert!(exact * 5 >= dots * 4, "{} of {}", exact, dots);
}
