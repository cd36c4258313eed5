//! Settings of the offline renderer, read from `explorations.toml`.
//!
//! ```toml
//! [canvas]
//! width = 576
//! height = 384
//! dpr = 2
//!
//! [gallery]
//! interval_seconds = 8
//! seed = 42
//!
//! [params.parametric]
//! a = 3.5
//! density = 400
//! ```

use {
  crate::{
    error::{Error, Result},
    gallery::Section,
    sketch::Sketch,
  },
  image::Rgba,
  serde::{Deserialize, Serialize},
  std::{collections::BTreeMap, path::{Path, PathBuf}, time::Duration},
};

pub const DEFAULT_PATH: &str = "explorations.toml";

/// Slider values per section title.
pub type ParamOverrides = BTreeMap<String, BTreeMap<String, f32>>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  pub canvas: CanvasConfig,
  pub gallery: GalleryConfig,
  pub params: ParamOverrides,
  pub logo: LogoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
  /// Logical size of the hero canvas
  pub width: f32,
  pub height: f32,
  /// Device pixel ratio
  pub dpr: f32,
  /// `#rrggbb` or `#rrggbbaa`, painted under every frame
  pub background: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
  pub interval_seconds: f32,
  pub fps: u32,
  pub seed: u64,
  /// Side of a contact sheet tile, in logical units
  pub tile: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
  /// SVG rendered when the `logo` command gets no file
  pub path: Option<PathBuf>,
  pub color: String,
  /// Rendered height in pixels
  pub height: u32,
}

impl Default for CanvasConfig {
  fn default() -> Self {
    Self { width: 576.0, height: 384.0, dpr: 1.0, background: "#f9fafb".into() }
  }
}

impl Default for GalleryConfig {
  fn default() -> Self {
    Self { interval_seconds: 8.0, fps: 60, seed: 0, tile: 240 }
  }
}

impl Default for LogoConfig {
  fn default() -> Self {
    Self { path: None, color: "#000000".into(), height: 32 }
  }
}

impl Config {
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let config: Self = toml::from_str(&content)?;
    config.validate()?;
    log::debug!("loaded {}", path.as_ref().display());
    Ok(config)
  }

  /// `explorations.toml` from the working directory, or the defaults if there is none.
  pub fn load_or_default() -> Self {
    Self::load_or_default_from(DEFAULT_PATH)
  }

  /// The file at `path`, or the defaults if it is missing. An invalid file is
  /// reported with a warning and ignored as a whole.
  pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
    match Self::load_from_file(path.as_ref()) {
      Ok(config) => config,
      Err(Error::Io(_)) => Self::default(),
      Err(e) => {
        log::warn!("ignoring {}: {}", path.as_ref().display(), e);
        Self::default()
      }
    }
  }

  /// Reject colours, sections and slider names that could never apply.
  pub fn validate(&self) -> Result<()> {
    self.canvas.background()?;
    parse_color(&self.logo.color)?;
    for title in self.params.keys() {
      self.build(Section::from_title(title)?, 0)?;
    }
    Ok(())
  }

  /// A fresh sketch with the configured slider values applied.
  pub fn build(&self, section: Section, seed: u64) -> Result<Box<dyn Sketch>> {
    let mut sketch = section.build(seed);
    self.apply_params(sketch.as_mut())?;
    Ok(sketch)
  }

  pub fn apply_params(&self, sketch: &mut dyn Sketch) -> Result<()> {
    if let Some(values) = self.params.get(sketch.title()) {
      for (name, value) in values {
        sketch.set_param(name, *value)?;
      }
    }
    Ok(())
  }

  pub fn interval(&self) -> Duration {
    match self.gallery.interval_seconds {
      s if s.is_finite() && s > 0.0 => Duration::from_secs_f32(s.min(86400.0)),
      _ => Duration::ZERO
    }
  }
}

impl CanvasConfig {
  pub fn background(&self) -> Result<Rgba<u8>> {
    parse_color(&self.background)
  }
}

impl LogoConfig {
  pub fn color(&self) -> Result<Rgba<u8>> {
    parse_color(&self.color)
  }
}

/// `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(text: &str) -> Result<Rgba<u8>> {
  let invalid = || Error::InvalidColor(text.to_string());
  let hex = text.trim().strip_prefix('#').ok_or_else(invalid)?;
  if !hex.chars().all(|c| c.is_ascii_hexdigit()) { return Err(invalid()) }
  let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
  match hex.len() {
    3 => {
      let mut rgba = [255; 4];
      for (i, c) in hex.chars().enumerate() {
        rgba[i] = channel(&c.to_string())? * 17;
      }
      Ok(Rgba(rgba))
    }
    6 | 8 => {
      let mut rgba = [255; 4];
      for i in 0..hex.len() / 2 {
        rgba[i] = channel(&hex[i * 2..i * 2 + 2])?;
      }
      Ok(Rgba(rgba))
    }
    _ => Err(invalid())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn defaults_match_the_page() -> anyhow::Result<()> {
    let config = Config::default();
    assert_eq!(config.canvas.background()?, Rgba([0xf9, 0xfa, 0xfb, 255]));
    assert_eq!(config.interval(), Duration::from_secs(8));
    assert_eq!(config.gallery.tile, 240);
    assert!(config.params.is_empty());
    Ok(())
  }

  #[test] fn partial_file() -> anyhow::Result<()> {
    let config: Config = toml::from_str(r#"
      [canvas]
      dpr = 2.0

      [params.parametric]
      a = 3.5
      density = 1000
    "#)?;
    config.validate()?;
    assert_eq!(config.canvas.dpr, 2.0);
    assert_eq!(config.canvas.width, 576.0);
    assert_eq!(config.gallery.seed, 0);

    let sketch = config.build(Section::Parametric, 0)?;
    assert_eq!(sketch.params().get("a"), Some(3.5));
    // clamped to the slider range
    assert_eq!(sketch.params().get("density"), Some(500.0));
    Ok(())
  }

  #[test] fn unknown_names_are_rejected() -> anyhow::Result<()> {
    let config: Config = toml::from_str("[params.spirograph]\na = 1.0")?;
    assert!(matches!(config.validate(), Err(Error::UnknownSection(_))));

    let config: Config = toml::from_str("[params.fourier]\nphase = 1.0")?;
    assert!(matches!(config.validate(), Err(Error::UnknownParam { .. })));
    Ok(())
  }

  #[test] fn load_from_file_roundtrip() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join("creative_explorations_config.toml");
    std::fs::write(&path, "[gallery]\nseed = 7\ninterval_seconds = 2.5\n")?;
    let config = Config::load_from_file(&path)?;
    std::fs::remove_file(&path)?;
    assert_eq!(config.gallery.seed, 7);
    assert_eq!(config.interval(), Duration::from_millis(2500));
    assert!(matches!(Config::load_from_file(&path), Err(Error::Io(_))));
    Ok(())
  }

  #[test] fn colors() -> anyhow::Result<()> {
    assert_eq!(parse_color("#000")?, Rgba([0, 0, 0, 255]));
    assert_eq!(parse_color("#fff")?, Rgba([255, 255, 255, 255]));
    assert_eq!(parse_color("#11223380")?, Rgba([0x11, 0x22, 0x33, 0x80]));
    assert!(matches!(parse_color("f9fafb"), Err(Error::InvalidColor(_))));
    assert!(matches!(parse_color("#f9fa"), Err(Error::InvalidColor(_))));
    assert!(matches!(parse_color("#gg0000"), Err(Error::InvalidColor(_))));
    assert!(matches!(parse_color("#+f+f+f"), Err(Error::InvalidColor(_))));
    assert!(matches!(parse_color("#+ff"), Err(Error::InvalidColor(_))));
    Ok(())
  }

  #[test] fn missing_or_invalid_files_fall_back() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join("creative_explorations_fallback");
    std::fs::create_dir_all(&dir)?;

    let config = Config::load_or_default_from(dir.join("missing.toml"));
    assert_eq!(config.gallery.seed, 0);

    let broken = dir.join("broken.toml");
    std::fs::write(&broken, "[gallery]\nseed = \"seven\"\n")?;
    assert!(matches!(Config::load_from_file(&broken), Err(Error::Config(_))));
    assert_eq!(Config::load_or_default_from(&broken).gallery.seed, 0);

    // parses, but names a section that does not exist
    let unknown = dir.join("unknown.toml");
    std::fs::write(&unknown, "[gallery]\nseed = 3\n\n[params.spirograph]\na = 1.0\n")?;
    assert_eq!(Config::load_or_default_from(&unknown).gallery.seed, 0);

    let valid = dir.join("valid.toml");
    std::fs::write(&valid, "[gallery]\nseed = 3\n")?;
    assert_eq!(Config::load_or_default_from(&valid).gallery.seed, 3);
    Ok(())
  }
}
