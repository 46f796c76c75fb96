mod clock_controller;
mod data_controller;
mod derived;
mod engine;
mod engine_config;
mod interaction_controller;
mod json_contract;
mod layout_controller;
mod query_controller;
mod readout;
mod render_frame_builder;
mod window_preset;

pub use derived::{ChartInputs, ChartLayout, DerivedChart, derive_chart};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use json_contract::{ENGINE_CONFIG_JSON_SCHEMA_V1, EngineConfigJsonContractV1};
pub use readout::{Readout, format_time_label, round_for_display, validate_time_label_format};
pub use render_frame_builder::{
    ChartStyle, ExtremeLabel, QueryMarker, build_render_frame, clamp_label_x,
};
pub use window_preset::WindowPreset;
