//! Polygon scenes, compiled into plots, written out as SVG path data.
//!
//! The pipeline runs one way only: shape builders make [`geom::Polygon`]s,
//! a [`scene::Scene`] collects them with their transforms, the scene compiles
//! into an immutable [`plot::Plot`] of move/line/close commands, and
//! [`export::to_svg_path`] turns that into a path string any SVG renderer
//! can read.
//!
//! ```rust
//! use scenelib::prelude::*;
//!
//! let mut scene = Scene::new();
//! scene.add_poly(unit_square())?;
//! let plot = scene.to_plot()?;
//! assert_eq!(to_svg_path(&plot, &PathOptions::default()), "M0,0 L1,0 L1,1 L0,1 Z");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Points, polygons, transforms and the shape builders.
pub mod geom;

/// The mutable, ordered authoring model.
pub mod scene;

/// Compiled draw command sequences and their metrics.
pub mod plot;

/// SVG path data and document output, plus a parser for reading path data back.
pub mod export;

/// Error types shared across the crate.
pub mod errors;

/// Make your life easy! Just import prelude::* and go.
pub mod prelude {
    pub use crate::errors::{GeometryError, TransformError};
    pub use crate::export::{parse_svg_path, to_svg_document, to_svg_path, DocumentOptions, PathOptions};
    pub use crate::geom::shapes::{circle, rect, regular_poly, square, unit_square};
    pub use crate::geom::{pt, Point, Polygon, Transform};
    pub use crate::plot::{DrawCommand, Plot};
    pub use crate::scene::Scene;
}
