//! Ten parameter-driven generative animations, rendered offline.
//!
//! Every animation ("sketch") owns a handful of sliders ([`params::ParamSet`]), draws one
//! frame per call onto a software [`Canvas`](drawing::Canvas), and advances its own clock.
//! The [`gallery`] rotates through them the way the hero section of the page does, and
//! lays all of them out as a contact sheet.
//!
//! # Basic usage
//! ```no_run
//! # use creative_explorations::{
//! #   drawing::Canvas,
//! #   error::Result,
//! #   sketch::{ParametricSpiral, Sketch},
//! # };
//! # use image::Rgba;
//! # fn main() -> Result<()> {
//! let mut spiral = ParametricSpiral::new();
//! spiral.set_param("b", 1.2)?; // clamped and snapped like a range input
//!
//! // 400×300 logical units, at a device pixel ratio of 2
//! let mut canvas = Canvas::new(400.0, 300.0, 2.0);
//! for frame in 0..60 {
//!   spiral.render(&mut canvas);
//!   canvas
//!     .flatten(Rgba([0xf9, 0xfa, 0xfb, 255]))
//!     .save(format!("spiral_{:02}.png", frame))?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Drawing
//! Shapes are signed distance fields ([`sdf::SDF`]) with a bounding box
//! ([`geometry::BoundingBox`]); together they make a [`geometry::Shape`], which composes:
//! ```
//! # use creative_explorations::geometry::{Circle, Shape};
//! # use euclid::Vector2D as V2;
//! let ring = Circle
//!   .scale(V2::splat(10.0))
//!   .translate(V2::new(50.0, 40.0))
//!   .outline(2.0);
//! ```
//! The canvas keeps a transform and alpha stack, and rasterizes strokes through a coverage
//! mask, so overlapping segments of one path are painted once.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod sdf;
pub mod geometry;
pub mod drawing;
pub mod params;
pub mod sketch;
pub mod gallery;
pub mod config;
#[cfg(feature = "logo")]
#[cfg_attr(docsrs, doc(cfg(feature = "logo")))]
pub mod logo;
pub mod util;
