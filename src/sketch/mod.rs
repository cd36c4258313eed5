//! The ten animations.
//!
//! Every sketch owns its parameters and whatever per-frame state it needs, draws one
//! frame per [`Sketch::render`] call and then advances its own clock by the
//! `animation_speed` parameter. Sketches never talk to each other.

use crate::{
  drawing::Canvas,
  error::Result,
  params::ParamSet,
};

mod spiral;
mod fourier;
mod geometric;
mod noise;
mod topology;
mod data;
mod modular;
mod symmetry;
mod generative;
mod field;
#[cfg(test)] mod tests;

pub use {
  spiral::ParametricSpiral,
  fourier::FourierWaves,
  geometric::GeometricPattern,
  noise::{AlgorithmicNoise, noise, fbm},
  topology::{TopologyMesh, MeshPoint},
  data::{DataVisualization, DataStats},
  modular::{ModularGrid, ModuleKind},
  symmetry::SymmetryPattern,
  generative::{GenerativeForm, Agent},
  field::{ComputationalField, Particle},
};

pub trait Sketch: Send {
  /// Section title, e.g. `"parametric"`.
  fn title(&self) -> &'static str;
  fn params(&self) -> &ParamSet;
  fn params_mut(&mut self) -> &mut ParamSet;
  /// Elapsed animation time, in `animation_speed` units per frame.
  fn time(&self) -> f32;
  /// Back to time zero, simulations are re-seeded on the next frame.
  fn restart(&mut self);
  /// Draw one frame, then advance the animation.
  fn render(&mut self, canvas: &mut Canvas);

  /// Change a slider. Like remounting the component, this restarts the animation;
  /// the new value is used from the next frame on. Simulations clear the canvas
  /// when they respawn, so no trails of the old values remain.
  fn set_param(&mut self, name: &str, value: f32) -> Result<f32> {
    let applied = self.params_mut().set(name, value)?;
    self.restart();
    Ok(applied)
  }

  /// Text overlay of the last frame, if the sketch has one.
  fn caption(&self) -> Option<String> { None }
}

/// `0, step, 2 * step, ...` while below `limit`.
pub(crate) fn lattice(limit: f32, step: f32) -> impl Iterator<Item = f32> + Clone {
  let step = step.max(f32::EPSILON);
  (0..)
    .map(move |i| i as f32 * step)
    .take_while(move |x| *x < limit)
}
