use {
  creative_explorations::{
    config::Config,
    drawing::Canvas,
    gallery::{self, Gallery, Section},
    profile,
    util::file_size,
  },
  anyhow::{anyhow, bail, Context, Result},
  image::RgbaImage,
  std::{path::{Path, PathBuf}, time::Duration},
};

const USAGE: &str = "\
usage: explorations [--config <file>] <command>

commands:
  render <section> <frames> <out_dir>   frames of one section
  hero <seconds> <out_dir>              the rotating hero, at the configured fps
  sheet <frames> <out.png>              every section in a grid
  logo [<svg>] <out.png>                the restyled logo, fully drawn;
                                        without <svg>, the configured [logo] path

sections: parametric fourier geometric algorithmic topology
          data-driven modular symmetry generative computational";

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let mut args = std::env::args().skip(1).collect::<Vec<_>>();
  let config = match args.iter().position(|a| a == "--config") {
    Some(i) => {
      let path = args.get(i + 1).cloned().ok_or_else(|| anyhow!(USAGE))?;
      args.drain(i..=i + 1);
      Config::load_from_file(&path).with_context(|| format!("loading {}", path))?
    }
    None => Config::load_or_default()
  };

  let args = args.iter().map(String::as_str).collect::<Vec<_>>();
  match args.as_slice() {
    ["render", section, frames, out_dir] => {
      let section = section.parse::<Section>()?;
      let frames = frames.parse().context("frames must be a number")?;
      render_section(&config, section, frames, Path::new(out_dir))?;
    }
    ["hero", seconds, out_dir] => {
      let seconds = seconds.parse().context("seconds must be a number")?;
      render_hero(&config, seconds, Path::new(out_dir))?;
    }
    ["sheet", frames, out] => {
      let frames = frames.parse().context("frames must be a number")?;
      render_sheet(&config, frames, Path::new(out))?;
    }
    #[cfg(feature = "logo")]
    ["logo", svg, out] => render_logo(&config, Path::new(svg), Path::new(out))?,
    #[cfg(feature = "logo")]
    ["logo", out] => render_logo(&config, configured_logo(&config)?, Path::new(out))?,
    _ => bail!(USAGE)
  }
  Ok(())
}

fn new_canvas(config: &Config) -> Canvas {
  Canvas::new(config.canvas.width, config.canvas.height, config.canvas.dpr)
}

/// Save as PNG, returning the file size.
fn save(image: &RgbaImage, path: &Path) -> Result<u64> {
  image.save(path).with_context(|| format!("writing {}", path.display()))?;
  Ok(std::fs::metadata(path)?.len())
}

fn render_section(config: &Config, section: Section, frames: usize, out_dir: &Path) -> Result<Vec<PathBuf>> {
  std::fs::create_dir_all(out_dir)?;
  let background = config.canvas.background()?;
  let mut sketch = config.build(section, config.gallery.seed)?;
  let mut canvas = new_canvas(config);
  let mut paths = vec![];
  let mut total = 0;

  profile!(section, {
    for frame in 0..frames {
      sketch.render(&mut canvas);
      let path = out_dir.join(format!("{}_{:04}.png", section, frame));
      total += save(&canvas.flatten(background), &path)?;
      paths.push(path);
    }
  });
  if let Some(caption) = sketch.caption() {
    log::info!("{}: {}", section, caption);
  }
  log::info!("{}: {} frames, {}", section, paths.len(), file_size(total));
  Ok(paths)
}

fn render_hero(config: &Config, seconds: f32, out_dir: &Path) -> Result<Vec<PathBuf>> {
  std::fs::create_dir_all(out_dir)?;
  let background = config.canvas.background()?;
  let fps = config.gallery.fps.max(1);
  let frames = (seconds.max(0.0) * fps as f32).round() as usize;
  let dt = Duration::from_secs(1) / fps;
  let mut gallery = Gallery::from_config(config)?;
  let mut canvas = new_canvas(config);
  let mut paths = vec![];
  let mut total = 0;

  profile!("hero", {
    for frame in 0..frames {
      gallery.render(&mut canvas);
      let path = out_dir.join(format!("hero_{:05}.png", frame));
      total += save(&canvas.flatten(background), &path)?;
      paths.push(path);
      if gallery.tick(dt) {
        // a remounted section starts from an empty canvas
        canvas = new_canvas(config);
      }
    }
  });
  log::info!("hero: {} frames, {}, ends on {}", paths.len(), file_size(total), gallery.caption());
  Ok(paths)
}

fn render_sheet(config: &Config, frames: usize, out: &Path) -> Result<()> {
  let mut sheet = None;
  profile!("sheet", sheet = Some(gallery::contact_sheet(config, frames)?));
  let sheet = sheet.ok_or_else(|| anyhow!("no contact sheet"))?;
  for (title, number) in &sheet.captions {
    log::debug!("{} {}", number, title);
  }
  let size = save(&sheet.image, out)?;
  log::info!("{}: {}", out.display(), file_size(size));
  Ok(())
}

#[cfg(feature = "logo")]
fn configured_logo(config: &Config) -> Result<&Path> {
  config.logo.path.as_deref().context("no logo given and no [logo] path configured")
}

#[cfg(feature = "logo")]
fn render_logo(config: &Config, svg: &Path, out: &Path) -> Result<()> {
  use creative_explorations::logo::Logo;

  let logo = Logo::load(svg).context("Loading Logo...")?;
  let image = logo.render(config.logo.color()?, config.logo.height, logo.duration())?;
  let size = save(&image, out)?;
  log::info!("{}: {} elements, {}", out.display(), logo.elements(), file_size(size));
  Ok(())
}
