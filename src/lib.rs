//! tariff-chart: headless engine for an hourly electricity tariff step chart.
//!
//! The crate turns a raw hourly tariff feed into render-ready geometry:
//! composite prices from toggleable cost components, a trailing time window,
//! time/price scales, a step-curve path, and a highlight marker driven either
//! by pointer scrubbing or by a live wall clock. Drawing is left to a
//! [`render::Renderer`] supplied by the host.

pub mod api;
pub mod clock;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
