//! .
//!
//! Library errors. Binaries and tests wrap them into [`anyhow::Error`].

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("unknown parameter `{name}` for section `{section}`")]
  UnknownParam { section: &'static str, name: String },
  #[error("parameter `{name}` must be a finite number, got {value}")]
  InvalidValue { name: String, value: f32 },
  #[error("unknown section `{0}`")]
  UnknownSection(String),
  #[error("invalid colour `{0}`, expected #rrggbb")]
  InvalidColor(String),
  #[error("document root is `<{0}>`, not `<svg>`")]
  NotSvg(String),
  #[error("svg: {0}")]
  Svg(String),
  #[error("config: {0}")]
  Config(#[from] toml::de::Error),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
