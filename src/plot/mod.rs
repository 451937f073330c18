//! The compiled, device-space form of a scene.

pub mod compile;
pub mod cost;

use crate::geom::Point;
use cost::PlotCost;
use geo::BoundingRect;
use geo_types::{Coord, LineString, MultiLineString, Rect};
use serde::{Deserialize, Serialize};

/// A single pen instruction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Lift the pen and start a new subpath here.
    MoveTo(Point),
    /// Draw a straight line from the current position.
    LineTo(Point),
    /// Draw back to the start of the current subpath.
    ClosePath,
}

impl DrawCommand {
    /// The target point, `None` for [`DrawCommand::ClosePath`].
    pub fn point(&self) -> Option<Point> {
        match self {
            DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => Some(*p),
            DrawCommand::ClosePath => None,
        }
    }
}

/// # Plot
///
/// An immutable, flattened sequence of [`DrawCommand`]s with every transform
/// already applied. Each scene entry becomes one `MoveTo .. ClosePath`
/// subpath, in scene order, tagged with the entry's pen. A plot holds no
/// reference to the scene it came from, so it can be cloned, cached, and
/// shared across threads freely.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Plot {
    commands: Vec<DrawCommand>,
    /// One per subpath.
    pens: Vec<Option<usize>>,
}

impl Plot {
    pub(crate) fn new(commands: Vec<DrawCommand>, pens: Vec<Option<usize>>) -> Plot {
        Plot { commands, pens }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// Every vertex in drawing order, ignoring the command tags.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(DrawCommand::point)
    }

    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::MoveTo(_)))
            .count()
    }

    /// The pen of every subpath, in drawing order.
    pub fn pens(&self) -> &[Option<usize>] {
        &self.pens
    }

    /// Each `MoveTo .. ClosePath` run with its pen.
    pub fn subpaths(&self) -> impl Iterator<Item = (Option<usize>, &[DrawCommand])> + '_ {
        self.commands
            .split_inclusive(|c| matches!(c, DrawCommand::ClosePath))
            .zip(self.pens.iter().copied())
            .map(|(commands, pen)| (pen, commands))
    }

    /// The subpaths drawn with `pen`, in their original order. Passing `None`
    /// selects the untagged ones.
    pub fn layer(&self, pen: Option<usize>) -> Plot {
        let mut commands = Vec::new();
        let mut pens = Vec::new();
        for (subpath_pen, subpath) in self.subpaths() {
            if subpath_pen == pen {
                commands.extend_from_slice(subpath);
                pens.push(subpath_pen);
            }
        }
        Plot::new(commands, pens)
    }

    /// Distinct pens in order of first use.
    pub fn distinct_pens(&self) -> Vec<Option<usize>> {
        let mut seen = Vec::new();
        for pen in &self.pens {
            if !seen.contains(pen) {
                seen.push(*pen);
            }
        }
        seen
    }

    /// One closed LineString per subpath (the first vertex is repeated at the
    /// end), for handing the plot to the wider geo ecosystem.
    pub fn to_multi_line_string(&self) -> MultiLineString<f64> {
        let mut lines: Vec<LineString<f64>> = Vec::new();
        let mut current: Vec<Coord<f64>> = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::MoveTo(p) => {
                    if current.len() > 1 {
                        lines.push(LineString::new(std::mem::take(&mut current)));
                    }
                    current.clear();
                    current.push((*p).into());
                }
                DrawCommand::LineTo(p) => current.push((*p).into()),
                DrawCommand::ClosePath => {
                    if let Some(&first) = current.first() {
                        current.push(first);
                    }
                    lines.push(LineString::new(std::mem::take(&mut current)));
                }
            }
        }
        if current.len() > 1 {
            lines.push(LineString::new(current));
        }
        MultiLineString::new(lines)
    }

    /// Axis aligned bounds of every vertex, `None` for an empty plot.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.to_multi_line_string().bounding_rect()
    }

    /// Pen travel metrics for drawing this plot starting and finishing at
    /// `origin`.
    pub fn cost(&self, origin: Point) -> PlotCost {
        PlotCost::of(self, origin)
    }
}

impl<'a> IntoIterator for &'a Plot {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
