//! The hero rotation and the grid of all experiments.
//!
//! The hero shows one section at a time and moves on to the next one every
//! `interval`; every change re-creates the sketch, so the new section always
//! starts from time zero. The contact sheet renders all ten sections side by side.

use {
  crate::{
    config::Config,
    drawing::Canvas,
    error::{Error, Result},
    sketch::{self, Sketch},
  },
  image::{Rgba, RgbaImage, imageops},
  rayon::prelude::*,
  std::{fmt, time::Duration},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Section {
  Parametric,
  Fourier,
  Geometric,
  Algorithmic,
  Topology,
  DataDriven,
  Modular,
  Symmetry,
  Generative,
  Computational,
}

impl Section {
  pub const ALL: [Section; 10] = [
    Section::Parametric,
    Section::Fourier,
    Section::Geometric,
    Section::Algorithmic,
    Section::Topology,
    Section::DataDriven,
    Section::Modular,
    Section::Symmetry,
    Section::Generative,
    Section::Computational,
  ];

  pub fn title(self) -> &'static str {
    use sketch::*;
    match self {
      Section::Parametric => ParametricSpiral::TITLE,
      Section::Fourier => FourierWaves::TITLE,
      Section::Geometric => GeometricPattern::TITLE,
      Section::Algorithmic => AlgorithmicNoise::TITLE,
      Section::Topology => TopologyMesh::TITLE,
      Section::DataDriven => DataVisualization::TITLE,
      Section::Modular => ModularGrid::TITLE,
      Section::Symmetry => SymmetryPattern::TITLE,
      Section::Generative => GenerativeForm::TITLE,
      Section::Computational => ComputationalField::TITLE,
    }
  }

  /// Zero-based position in [`Section::ALL`].
  pub fn index(self) -> usize { self as usize }

  pub fn from_title(title: &str) -> Result<Self> {
    Self::ALL.iter()
      .find(|s| s.title() == title)
      .copied()
      .ok_or_else(|| Error::UnknownSection(title.to_string()))
  }

  pub fn next(self) -> Self {
    Self::ALL[(self.index() + 1) % Self::ALL.len()]
  }

  /// A fresh sketch with default parameters. `seed` drives the random state of
  /// the stochastic sections and is ignored by the others.
  pub fn build(self, seed: u64) -> Box<dyn Sketch> {
    use sketch::*;
    match self {
      Section::Parametric => Box::new(ParametricSpiral::new()),
      Section::Fourier => Box::new(FourierWaves::new()),
      Section::Geometric => Box::new(GeometricPattern::new()),
      Section::Algorithmic => Box::new(AlgorithmicNoise::new()),
      Section::Topology => Box::new(TopologyMesh::new()),
      Section::DataDriven => Box::new(DataVisualization::new(seed)),
      Section::Modular => Box::new(ModularGrid::new()),
      Section::Symmetry => Box::new(SymmetryPattern::new()),
      Section::Generative => Box::new(GenerativeForm::new(seed)),
      Section::Computational => Box::new(ComputationalField::new(seed)),
    }
  }
}

impl fmt::Display for Section {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.title())
  }
}

impl std::str::FromStr for Section {
  type Err = Error;
  fn from_str(s: &str) -> Result<Self> { Self::from_title(s) }
}

/// Rotating hero section.
pub struct Gallery {
  current: Section,
  hero: Box<dyn Sketch>,
  interval: Duration,
  /// Time since the last automatic advance
  elapsed: Duration,
  seed: u64,
  /// Number of sketches created so far, mixed into the seed of the next one
  mounts: u64,
  config: Config,
}

impl Gallery {
  pub fn new(interval: Duration, seed: u64) -> Self {
    let mut config = Config::default();
    config.gallery.seed = seed;
    Self::with_config(config, interval)
  }

  /// Uses the seed and slider values of `config`.
  pub fn from_config(config: &Config) -> Result<Self> {
    config.validate()?;
    Ok(Self::with_config(config.clone(), config.interval()))
  }

  fn with_config(config: Config, interval: Duration) -> Self {
    let seed = config.gallery.seed;
    let current = Section::Parametric;
    Self {
      current,
      hero: build_hero(&config, current, seed),
      interval,
      elapsed: Duration::ZERO,
      seed,
      mounts: 1,
      config
    }
  }

  fn mount(&mut self) {
    let seed = self.seed.wrapping_add(self.mounts);
    self.mounts += 1;
    self.hero = build_hero(&self.config, self.current, seed);
  }

  pub fn current(&self) -> Section { self.current }
  pub fn hero(&self) -> &dyn Sketch { self.hero.as_ref() }
  pub fn hero_mut(&mut self) -> &mut dyn Sketch { self.hero.as_mut() }
  pub fn interval(&self) -> Duration { self.interval }

  /// Advance the rotation clock by `dt`. Returns true if the section changed.
  /// A zero interval never rotates.
  pub fn tick(&mut self, dt: Duration) -> bool {
    if self.interval.is_zero() { return false }
    self.elapsed += dt;
    let (elapsed, interval) = (self.elapsed.as_nanos(), self.interval.as_nanos());
    let advances = elapsed / interval;
    if advances == 0 { return false }

    // the remainder is below the interval, which fits in u64 nanoseconds
    self.elapsed = Duration::from_nanos((elapsed % interval) as u64);
    let steps = (advances % Section::ALL.len() as u128) as usize;
    self.current = Section::ALL[(self.current.index() + steps) % Section::ALL.len()];
    log::info!("hero: {}", self.caption());
    self.mount();
    true
  }

  /// Jump to `section`, like clicking its tile. The rotation clock keeps running.
  pub fn select(&mut self, section: Section) {
    self.current = section;
    log::info!("hero: {} (selected)", self.caption());
    self.mount();
  }

  /// `"<title> NN/10"`.
  pub fn caption(&self) -> String {
    format!("{} {:02}/{}", self.current.title(), self.current.index() + 1, Section::ALL.len())
  }

  pub fn render(&mut self, canvas: &mut Canvas) {
    self.hero.render(canvas);
  }
}

fn build_hero(config: &Config, section: Section, seed: u64) -> Box<dyn Sketch> {
  match config.build(section, seed) {
    Ok(sketch) => sketch,
    Err(e) => {
      log::warn!("{}: {}, using defaults", section, e);
      section.build(seed)
    }
  }
}

impl fmt::Debug for Gallery {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Gallery")
      .field("current", &self.current)
      .field("time", &self.hero.time())
      .field("elapsed", &self.elapsed)
      .field("interval", &self.interval)
      .finish()
  }
}

pub const COLUMNS: u32 = 3;
/// Gap between tiles and around the sheet, in logical units
pub const GAP: u32 = 32;

#[derive(Debug, Clone)]
pub struct ContactSheet {
  pub image: RgbaImage,
  /// `(title, "NN")` per tile, in grid order
  pub captions: Vec<(&'static str, String)>,
}

/// Render every section for `frames` frames on its own square tile and lay the
/// tiles out in a grid, in section order.
pub fn contact_sheet(config: &Config, frames: usize) -> Result<ContactSheet> {
  let background = config.canvas.background()?;
  let tile = config.gallery.tile.max(1) as f32;
  let dpr = config.canvas.dpr;
  let seed = config.gallery.seed;

  let tiles = Section::ALL[..]
    .par_iter()
    .map(|section| -> Result<RgbaImage> {
      let mut sketch = config.build(*section, seed.wrapping_add(section.index() as u64))?;
      let mut canvas = Canvas::new(tile, tile, dpr);
      (0..frames.max(1)).for_each(|_| sketch.render(&mut canvas));
      log::debug!("tile {} at t = {:.3}", section, sketch.time());
      Ok(canvas.flatten(background))
    })
    .collect::<Result<Vec<_>>>()?;

  let (tile_w, tile_h) = tiles.first()
    .map(|t| t.dimensions())
    .unwrap_or((1, 1));
  let gap = (GAP as f32 * tile_w as f32 / tile).round() as u32;
  let rows = (tiles.len() as u32 + COLUMNS - 1) / COLUMNS;
  let mut image = RgbaImage::from_pixel(
    COLUMNS * (tile_w + gap) + gap,
    rows * (tile_h + gap) + gap,
    Rgba([255, 255, 255, 255])
  );
  tiles.iter().enumerate().for_each(|(i, tile)| {
    let (col, row) = (i as u32 % COLUMNS, i as u32 / COLUMNS);
    imageops::overlay(
      &mut image,
      tile,
      (gap + col * (tile_w + gap)) as i64,
      (gap + row * (tile_h + gap)) as i64
    );
  });

  let captions = Section::ALL.iter()
    .map(|s| (s.title(), format!("{:02}", s.index() + 1)))
    .collect();
  Ok(ContactSheet { image, captions })
}
