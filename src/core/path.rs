use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ScreenPoint;

/// One drawing instruction in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(ScreenPoint),
    LineTo(ScreenPoint),
    CubicTo {
        control1: ScreenPoint,
        control2: ScreenPoint,
        to: ScreenPoint,
    },
    Close,
}

impl PathCommand {
    /// Every point carried by the command, end point last.
    #[must_use]
    pub fn points(self) -> SmallVec<[ScreenPoint; 3]> {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => SmallVec::from_slice(&[point]),
            Self::CubicTo {
                control1,
                control2,
                to,
            } => SmallVec::from_slice(&[control1, control2, to]),
            Self::Close => SmallVec::new(),
        }
    }

    #[must_use]
    pub fn end_point(self) -> Option<ScreenPoint> {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) | Self::CubicTo { to: point, .. } => {
                Some(point)
            }
            Self::Close => None,
        }
    }

    fn same_kind(self, other: Self) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }

    fn lerp(self, target: Self, t: f64) -> Self {
        match (self, target) {
            (Self::MoveTo(a), Self::MoveTo(b)) => Self::MoveTo(a.lerp(b, t)),
            (Self::LineTo(a), Self::LineTo(b)) => Self::LineTo(a.lerp(b, t)),
            (
                Self::CubicTo {
                    control1: a1,
                    control2: a2,
                    to: a3,
                },
                Self::CubicTo {
                    control1: b1,
                    control2: b2,
                    to: b3,
                },
            ) => Self::CubicTo {
                control1: a1.lerp(b1, t),
                control2: a2.lerp(b2, t),
                to: a3.lerp(b3, t),
            },
            _ => target,
        }
    }
}

/// Ordered drawing instructions for one plot line or fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotPath {
    commands: Vec<PathCommand>,
}

impl PlotPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of drawn segments (`LineTo` and `CubicTo`).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| {
                matches!(command, PathCommand::LineTo(_) | PathCommand::CubicTo { .. })
            })
            .count()
    }

    #[must_use]
    pub fn is_smooth(&self) -> bool {
        self.commands
            .iter()
            .any(|command| matches!(command, PathCommand::CubicTo { .. }))
    }

    /// Points the path passes through (segment end points, controls excluded).
    #[must_use]
    pub fn anchor_points(&self) -> Vec<ScreenPoint> {
        self.commands
            .iter()
            .filter_map(|command| command.end_point())
            .collect()
    }

    /// Every coordinate in the path, controls included.
    pub fn points(&self) -> impl Iterator<Item = ScreenPoint> + '_ {
        self.commands.iter().flat_map(|command| command.points())
    }

    /// Straight polyline through `points` in the given order.
    #[must_use]
    pub fn polyline(points: &[ScreenPoint]) -> Self {
        let mut path = Self::with_capacity(points.len());
        let mut iter = points.iter().copied();
        if let Some(first) = iter.next() {
            path.push(PathCommand::MoveTo(first));
            path.extend(iter.map(PathCommand::LineTo));
        }
        path
    }

    /// Whether `self` can be interpolated into `other` command-by-command.
    #[must_use]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.commands.len() == other.commands.len()
            && self
                .commands
                .iter()
                .zip(&other.commands)
                .all(|(left, right)| left.same_kind(*right))
    }

    /// Interpolated path, or `None` when the structures differ.
    #[must_use]
    pub fn lerp(&self, target: &Self, t: f64) -> Option<Self> {
        if !self.is_compatible_with(target) {
            return None;
        }
        Some(Self {
            commands: self
                .commands
                .iter()
                .zip(&target.commands)
                .map(|(from, to)| from.lerp(*to, t))
                .collect(),
        })
    }
}

impl Extend<PathCommand> for PlotPath {
    fn extend<I: IntoIterator<Item = PathCommand>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}
