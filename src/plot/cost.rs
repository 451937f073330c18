use crate::geom::Point;
use crate::plot::{DrawCommand, Plot};

/// How much work a plotter does to draw a [`Plot`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotCost {
    /// Pen-up travel distance, including the return to the origin.
    pub move_cost: f64,
    /// Pen-down drawing distance, closing edges included.
    pub line_cost: f64,
    /// Number of drawn segments.
    pub segments: usize,
    /// Number of pen-up moves that actually went somewhere.
    pub moves: usize,
}

impl PlotCost {
    pub(crate) fn of(plot: &Plot, origin: Point) -> PlotCost {
        let mut cost = PlotCost::default();
        let mut cursor = origin;
        let mut start = origin;

        for command in plot {
            match *command {
                DrawCommand::MoveTo(p) => {
                    if p != cursor {
                        cost.move_cost += cursor.distance(&p);
                        cost.moves += 1;
                    }
                    cursor = p;
                    start = p;
                }
                DrawCommand::LineTo(p) => {
                    cost.line_cost += cursor.distance(&p);
                    cost.segments += 1;
                    cursor = p;
                }
                DrawCommand::ClosePath => {
                    if cursor != start {
                        cost.line_cost += cursor.distance(&start);
                        cost.segments += 1;
                    }
                    cursor = start;
                }
            }
        }

        cost.move_cost += cursor.distance(&origin);
        cost
    }
}
