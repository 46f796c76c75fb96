pub mod compositor;
pub mod lookup;
pub mod price_scale;
pub mod primitives;
pub mod scale;
pub mod step_path;
pub mod time_scale;
pub mod types;
pub mod windowing;

pub use compositor::{CostComponent, ToggleSet, compose_prices};
pub use lookup::{find_point_at, find_price_at};
pub use price_scale::{PriceScale, PriceScaleTuning};
pub use scale::LinearScale;
pub use step_path::{PathCommand, StepPath, build_step_path};
pub use time_scale::TimeScale;
pub use types::{BoundingBox, ChartDimensions, ChartMargins, CompositeDataPoint, RawDataPoint};
pub use windowing::{PriceExtremes, WindowSelection, select_window};
