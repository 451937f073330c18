//! Scene → Plot compilation. This is the only place transforms get applied.

use crate::errors::GeometryError;
use crate::geom::{Point, Transform};
use crate::plot::{DrawCommand, Plot};
use crate::scene::SceneEntry;
use log::debug;

/// Flatten `entries`, in order, into one plot. Each vertex goes through its
/// entry's transform and then `scene_transform`. No rounding happens here;
/// that's left to serialization.
///
/// An N vertex polygon yields `MoveTo`, N-1 `LineTo`s and a `ClosePath`. The
/// closing edge is never written as a `LineTo` back to the start.
pub fn compile(entries: &[SceneEntry], scene_transform: &Transform) -> Result<Plot, GeometryError> {
    let vertex_count: usize = entries.iter().map(|e| e.polygon().len()).sum();
    let mut commands = Vec::with_capacity(vertex_count + entries.len());
    let mut pens = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        for (i, vertex) in entry.polygon().points().iter().enumerate() {
            let point = place(vertex, entry.transform(), scene_transform)
                .map_err(|_| GeometryError::NonFiniteResult { entry: index })?;
            commands.push(if i == 0 {
                DrawCommand::MoveTo(point)
            } else {
                DrawCommand::LineTo(point)
            });
        }
        commands.push(DrawCommand::ClosePath);
        pens.push(entry.pen());
    }

    debug!(
        "Compiled {} scene entries into {} draw commands",
        entries.len(),
        commands.len()
    );
    Ok(Plot::new(commands, pens))
}

fn place(vertex: &Point, local: &Transform, scene: &Transform) -> Result<Point, GeometryError> {
    let (x, y) = local.apply_xy(vertex.x(), vertex.y());
    let (x, y) = scene.apply_xy(x, y);
    Point::new(x, y)
}
