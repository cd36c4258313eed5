//! Slider parameters of a sketch.
//!
//! A [`ParamSet`] behaves like a row of `<input type="range">` controls: values written
//! through [`ParamSet::set`] are clamped to the slider range and snapped to its step.

use {
  crate::error::{Error, Result},
  std::ops::Index
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParamSpec {
  pub name: &'static str,
  /// Control panel label
  pub label: &'static str,
  pub min: f32,
  pub max: f32,
  pub step: f32,
  pub default: f32,
  pub integer: bool
}

impl ParamSpec {
  pub const fn float(name: &'static str, label: &'static str, min: f32, max: f32, step: f32, default: f32) -> Self {
    Self { name, label, min, max, step, default, integer: false }
  }

  pub const fn int(name: &'static str, label: &'static str, min: f32, max: f32, step: f32, default: f32) -> Self {
    Self { name, label, min, max, step, default, integer: true }
  }

  /// On/off switch, stored as 0 or 1.
  pub const fn toggle(name: &'static str, label: &'static str, default: bool) -> Self {
    Self { name, label, min: 0.0, max: 1.0, step: 1.0, default: if default { 1.0 } else { 0.0 }, integer: true }
  }

  /// The value a range input would settle on.
  pub fn apply(&self, value: f32) -> f32 {
    let value = value.clamp(self.min, self.max);
    let value = if self.step > 0.0 {
      let steps = ((value - self.min) / self.step).round();
      (self.min + steps * self.step).min(self.max)
    } else {
      value
    };
    if self.integer { value.round() } else { value }
  }
}

#[derive(Debug, Clone)]
pub struct ParamSet {
  section: &'static str,
  specs: &'static [ParamSpec],
  values: Vec<f32>
}

impl ParamSet {
  pub fn new(section: &'static str, specs: &'static [ParamSpec]) -> Self {
    Self {
      section,
      specs,
      values: specs.iter().map(|s| s.default).collect()
    }
  }

  pub fn get(&self, name: &str) -> Option<f32> {
    self.position(name).map(|i| self.values[i])
  }

  /// Store `value` under `name`, returning the value actually applied.
  pub fn set(&mut self, name: &str, value: f32) -> Result<f32> {
    let i = self.position(name)
      .ok_or_else(|| Error::UnknownParam { section: self.section, name: name.to_string() })?;
    if !value.is_finite() {
      return Err(Error::InvalidValue { name: name.to_string(), value });
    }
    let spec = &self.specs[i];
    let applied = spec.apply(value);
    if (applied - value).abs() > spec.step / 2.0 {
      log::warn!("{}.{} = {} is out of range [{}, {}], using {}",
        self.section, name, value, spec.min, spec.max, applied);
    }
    self.values[i] = applied;
    Ok(applied)
  }

  pub fn reset(&mut self) {
    self.values = self.specs.iter().map(|s| s.default).collect();
  }

  pub fn specs(&self) -> impl Iterator<Item = (&ParamSpec, f32)> + '_ {
    self.specs.iter().zip(self.values.iter().cloned())
  }

  pub fn flag(&self, index: usize) -> bool {
    self.values[index] >= 0.5
  }

  /// Integer value of a slider declared with [`ParamSpec::int`].
  pub fn count(&self, index: usize) -> usize {
    self.values[index].max(0.0) as usize
  }

  fn position(&self, name: &str) -> Option<usize> {
    self.specs.iter().position(|s| s.name == name)
  }
}

impl Index<usize> for ParamSet {
  type Output = f32;
  fn index(&self, index: usize) -> &f32 { &self.values[index] }
}
