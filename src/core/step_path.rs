use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::primitives::add_hours;
use crate::core::{CompositeDataPoint, PriceScale, TimeScale};
use crate::error::{ChartError, ChartResult};

/// One drawing command of a stroked path, in bound-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    HorizontalTo { x: f64 },
}

impl PathCommand {
    #[must_use]
    pub fn x(self) -> f64 {
        match self {
            Self::MoveTo { x, .. } | Self::LineTo { x, .. } | Self::HorizontalTo { x } => x,
        }
    }
}

/// Staircase polyline holding each hourly price flat across its bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepPath {
    commands: Vec<PathCommand>,
}

impl StepPath {
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Leftmost and rightmost x reached by the path.
    #[must_use]
    pub fn horizontal_extent(&self) -> Option<(f64, f64)> {
        let mut iter = self.commands.iter().map(|command| command.x());
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), x| (min.min(x), max.max(x))))
    }

    /// SVG `d` attribute, e.g. `M 0 10 H 5 L 0 10 H 5`.
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 16);
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            // Writing into a `String` cannot fail.
            let _ = match *command {
                PathCommand::MoveTo { x, y } => write!(out, "M {x} {y}"),
                PathCommand::LineTo { x, y } => write!(out, "L {x} {y}"),
                PathCommand::HorizontalTo { x } => write!(out, "H {x}"),
            };
        }
        out
    }
}

/// Builds the step curve for a chronological visible window.
///
/// Starts with a move to the first point and its bucket-wide horizontal run,
/// then for every point (the first included) a line to the bucket start at the
/// point's price followed by a horizontal run to the bucket end.
pub fn build_step_path(
    visible: &[CompositeDataPoint],
    time_scale: TimeScale,
    price_scale: PriceScale,
) -> ChartResult<StepPath> {
    let Some(head) = visible.first() else {
        return Err(ChartError::EmptySeries);
    };

    let mut commands = Vec::with_capacity(visible.len() * 2 + 2);
    commands.push(PathCommand::MoveTo {
        x: time_scale.time_to_pixel(head.date)?,
        y: price_scale.price_to_pixel(head.price)?,
    });
    commands.push(PathCommand::HorizontalTo {
        x: time_scale.time_to_pixel(add_hours(head.date, 1)?)?,
    });

    for point in visible {
        commands.push(PathCommand::LineTo {
            x: time_scale.time_to_pixel(point.date)?,
            y: price_scale.price_to_pixel(point.price)?,
        });
        commands.push(PathCommand::HorizontalTo {
            x: time_scale.time_to_pixel(add_hours(point.date, 1)?)?,
        });
    }

    Ok(StepPath { commands })
}
