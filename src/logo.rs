//! Line-art logo: any SVG turned into outlines, revealed one element after another.

use {
  crate::error::{Error, Result},
  image::{Rgba, RgbaImage},
  regex::{Captures, Regex},
  std::path::Path,
};

const SHAPES: &str = "path|circle|rect|line|polyline|polygon";
/// Delay between two consecutive elements, in seconds
pub const STAGGER: f32 = 0.1;
/// Reveal duration of one element, in seconds
pub const DURATION: f32 = 1.5;

fn regex(pattern: &str) -> Result<Regex> {
  Regex::new(pattern).map_err(|e| Error::Svg(e.to_string()))
}

/// Strip the fill of every drawable element and stroke it with `currentColor`,
/// keeping its own `stroke-width` or using 1.
pub fn restyle_svg(text: &str) -> Result<String> {
  let root = regex(r"(?s)^\s*(?:(?:<\?.*?\?>|<!--.*?-->|<!DOCTYPE[^>]*>)\s*)*<([A-Za-z_][\w:.-]*)")?;
  match root.captures(text) {
    Some(caps) if caps[1].eq_ignore_ascii_case("svg") => (),
    Some(caps) => return Err(Error::NotSvg(caps[1].to_string())),
    None => return Err(Error::Svg("no root element".into()))
  }

  let element = regex(&format!(r"<({})(\s[^>]*?)?(/?)>", SHAPES))?;
  let paint = regex(r#"\s(?:fill|stroke)\s*=\s*(?:"[^"]*"|'[^']*')"#)?;
  let stroke_width = regex(r#"\sstroke-width\s*=\s*(?:"([^"]*)"|'([^']*)')"#)?;

  Ok(element.replace_all(text, |caps: &Captures| {
    let attributes = caps.get(2).map_or("", |m| m.as_str());
    let width = stroke_width.captures(attributes)
      .and_then(|c| c.get(1).or_else(|| c.get(2)))
      .map(|m| m.as_str().trim())
      .filter(|w| !w.is_empty())
      .unwrap_or("1")
      .to_string();
    let attributes = paint.replace_all(attributes, "");
    let attributes = stroke_width.replace_all(&attributes, "");
    format!(r#"<{}{} fill="none" stroke="currentColor" stroke-width="{}"{}>"#,
      &caps[1], attributes, width, &caps[3])
  }).into_owned())
}

/// Progress of the reveal of element `index`, eased, in `[0, 1]`.
pub fn reveal(index: usize, elapsed: f32) -> f32 {
  let t = ((elapsed - index as f32 * STAGGER) / DURATION).clamp(0.0, 1.0);
  1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone)]
pub struct Logo {
  svg: String,
  elements: usize,
}

impl Logo {
  /// Read and restyle a logo. Errors are logged here too, the caller only has to
  /// decide what to show instead.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
      .map_err(Error::from)
      .and_then(|text| Self::from_svg(&text))
      .map_err(|e| {
        log::error!("failed to load logo {}: {}", path.display(), e);
        e
      })
  }

  pub fn from_svg(text: &str) -> Result<Self> {
    let svg = restyle_svg(text)?;
    parse(&svg)?;
    let elements = regex(&format!(r"<(?:{})[\s/>]", SHAPES))?.find_iter(&svg).count();
    log::debug!("logo: {} elements", elements);
    Ok(Self { svg, elements })
  }

  /// The restyled document, still using `currentColor`.
  pub fn svg(&self) -> &str { &self.svg }

  pub fn elements(&self) -> usize { self.elements }

  /// Seconds until the last element is fully drawn.
  pub fn duration(&self) -> f32 {
    self.elements.saturating_sub(1) as f32 * STAGGER + DURATION
  }

  /// The document at `elapsed` seconds into the reveal, with `currentColor` resolved.
  pub fn frame(&self, color: Rgba<u8>, elapsed: f32) -> Result<String> {
    let [r, g, b, a] = color.0;
    let alpha = a as f32 / 255.0;
    let svg = self.svg.replace("currentColor", &format!("#{:02x}{:02x}{:02x}", r, g, b));
    let own = regex(r#"\sopacity\s*=\s*(?:"([^"]*)"|'([^']*)')"#)?;
    let mut index = 0;
    Ok(regex(&format!(r"<({})(\s[^>]*?)?(/?)>", SHAPES))?
      .replace_all(&svg, |caps: &Captures| {
        let attributes = caps.get(2).map_or("", |m| m.as_str());
        let opacity = own.captures(attributes)
          .and_then(|c| c.get(1).or_else(|| c.get(2)))
          .map_or(1.0, |m| parse_opacity(m.as_str()));
        let opacity = opacity * reveal(index, elapsed) * alpha;
        index += 1;
        format!(r#"<{}{} opacity="{:.3}"{}>"#,
          &caps[1], own.replace_all(attributes, ""), opacity, &caps[3])
      })
      .into_owned())
  }

  /// Rasterize the logo `height` pixels tall, keeping its aspect ratio.
  pub fn render(&self, color: Rgba<u8>, height: u32, elapsed: f32) -> Result<RgbaImage> {
    let tree = parse(&self.frame(color, elapsed)?)?;
    let size = tree.size();
    let scale = height.max(1) as f32 / size.height();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height.max(1))
      .ok_or_else(|| Error::Svg(format!("cannot allocate {}x{} pixmap", width, height)))?;
    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let pixels = pixmap.pixels().iter()
      .flat_map(|p| {
        let c = p.demultiply();
        [c.red(), c.green(), c.blue(), c.alpha()]
      })
      .collect::<Vec<_>>();
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), pixels)
      .ok_or_else(|| Error::Svg("pixmap size mismatch".into()))
  }
}

/// An SVG opacity, a number or a percentage, clamped to `[0, 1]`. Unparsable values
/// count as opaque.
fn parse_opacity(value: &str) -> f32 {
  let value = value.trim();
  let parsed = match value.strip_suffix('%') {
    Some(percent) => percent.trim().parse::<f32>().map(|p| p / 100.0),
    None => value.parse::<f32>()
  };
  match parsed {
    Ok(x) if x.is_finite() => x.clamp(0.0, 1.0),
    _ => 1.0
  }
}

fn parse(svg: &str) -> Result<usvg::Tree> {
  usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default())
    .map_err(|e| Error::Svg(e.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  const BOX: &str = r#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 20 10">
  <rect x="1" y="1" width="18" height="8" fill="red"/>
  <path d="M 5 5 L 15 5" stroke="blue" stroke-width="2"></path>
</svg>"#;

  #[test] fn restyles_shapes() -> anyhow::Result<()> {
    let svg = restyle_svg(BOX)?;
    assert!(svg.contains(r#"<rect x="1" y="1" width="18" height="8" fill="none" stroke="currentColor" stroke-width="1"/>"#), "{}", svg);
    assert!(svg.contains(r#"<path d="M 5 5 L 15 5" fill="none" stroke="currentColor" stroke-width="2">"#), "{}", svg);
    assert!(!svg.contains("red") && !svg.contains("blue"));
    // the root element is left alone
    assert!(svg.contains(r#"<svg xmlns="http://www.w3.org/2000/svg" width="20""#));
    Ok(())
  }

  #[test] fn empty_stroke_width_falls_back() -> anyhow::Result<()> {
    let svg = restyle_svg(r#"<svg><line x1="0" y1="0" x2="1" y2="1" stroke-width=""/></svg>"#)?;
    assert!(svg.contains(r#"<line x1="0" y1="0" x2="1" y2="1" fill="none" stroke="currentColor" stroke-width="1"/>"#), "{}", svg);
    Ok(())
  }

  #[test] fn rejects_other_documents() {
    assert!(matches!(restyle_svg("<html><body/></html>"), Err(Error::NotSvg(root)) if root == "html"));
    assert!(matches!(restyle_svg("not xml at all"), Err(Error::Svg(_))));
  }

  #[test] fn reveal_is_staggered() {
    assert_eq!(reveal(0, 0.0), 0.0);
    assert_eq!(reveal(3, 0.3), 0.0);
    assert!(reveal(0, 0.75) > 0.5);
    assert!(reveal(0, 0.75) > reveal(1, 0.75));
    assert_eq!(reveal(2, 0.2 + DURATION), 1.0);
  }

  #[test] fn renders_outlines() -> anyhow::Result<()> {
    let logo = Logo::from_svg(BOX)?;
    assert_eq!(logo.elements(), 2);
    assert!((logo.duration() - 1.6).abs() < 1e-6);

    let black = Rgba([0, 0, 0, 255]);
    let hidden = logo.render(black, 20, 0.0)?;
    assert_eq!(hidden.dimensions(), (40, 20));
    assert!(hidden.pixels().all(|p| p.0[3] == 0));

    let drawn = logo.render(black, 20, logo.duration())?;
    assert!(drawn.get_pixel(2, 6).0[3] > 0);
    // fill is gone
    assert_eq!(drawn.get_pixel(6, 6).0[3], 0);
    Ok(())
  }

  #[test] fn own_opacity_is_kept_once() -> anyhow::Result<()> {
    let logo = Logo::from_svg(r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
  <path d="M 5 5 L 15 5" opacity="0.5" stroke-width="4"/>
  <circle cx="5" cy="5" r="2" opacity='50%'></circle>
</svg>"#)?;
    let frame = logo.frame(Rgba([0, 0, 0, 255]), logo.duration())?;
    assert_eq!(frame.matches("opacity=").count(), 2, "{}", frame);
    assert!(frame.contains(r#"stroke-width="4" opacity="0.500"/>"#), "{}", frame);
    assert!(frame.contains(r#"opacity="0.500"></circle>"#), "{}", frame);

    let drawn = logo.render(Rgba([0, 0, 0, 255]), 10, logo.duration())?;
    let a = drawn.get_pixel(10, 5).0[3];
    assert!(a > 100 && a < 160, "{}", a);
    Ok(())
  }

  #[test] fn opacity_values() {
    assert_eq!(parse_opacity("0.25"), 0.25);
    assert_eq!(parse_opacity(" 40% "), 0.4);
    assert_eq!(parse_opacity("2"), 1.0);
    assert_eq!(parse_opacity("none"), 1.0);
  }

  #[test] fn load_reports_missing_files() {
    let path = std::env::temp_dir().join("creative_explorations_missing_logo.svg");
    assert!(matches!(Logo::load(&path), Err(Error::Io(_))));
  }
}
