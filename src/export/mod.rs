//! Tools for exporting plots: SVG path data strings and whole SVG documents.
//!
//! Coordinates are formatted here from the full `f64` values. The `svg`
//! crate's own path `Data` stores `f32`, so it is never used for the `d`
//! attribute.

use crate::plot::{DrawCommand, Plot};
use log::{trace, warn};
use serde::{Deserialize, Serialize};

/// Number formatting for path data.
pub mod format;

/// Reading M/L/Z path data back into draw commands.
pub mod parse;

/// Wrapping a plot in an `svg::Document`.
pub mod document;

pub use document::{to_svg_document, DocumentOptions};
pub use format::{format_number, MAX_PRECISION};
pub use parse::parse_svg_path;

/// Knobs for [`to_svg_path`]. Deserializes with defaults for missing fields,
/// so a partial config such as the RON `(compact: true)` is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    /// Maximum fractional digits per coordinate, capped at [`MAX_PRECISION`].
    pub precision: usize,
    /// Drop the leading zero of magnitudes below one.
    pub compact: bool,
    /// Write the `L` letter only on the first of consecutive line-tos.
    pub elide_repeated_commands: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        PathOptions {
            precision: 6,
            compact: false,
            elide_repeated_commands: false,
        }
    }
}

impl PathOptions {
    pub fn compact() -> PathOptions {
        PathOptions {
            compact: true,
            elide_repeated_commands: true,
            ..PathOptions::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> PathOptions {
        self.precision = precision;
        self
    }
}

/// Serialize a plot as SVG path data: `M{x},{y}`, `L{x},{y}` and `Z`, joined
/// by single spaces. With default options the unit square reads
/// `M0,0 L1,0 L1,1 L0,1 Z`.
///
/// `M` letters are always written, even with
/// [`PathOptions::elide_repeated_commands`], since a bare pair after a move
/// means line-to to any SVG reader.
pub fn to_svg_path(plot: &Plot, options: &PathOptions) -> String {
    let mut out = String::with_capacity(plot.len() * 8);
    let mut after_line = false;
    if options.precision > MAX_PRECISION {
        warn!(
            "Path precision {} exceeds {}, capping",
            options.precision, MAX_PRECISION
        );
    }

    for command in plot {
        if !out.is_empty() {
            out.push(' ');
        }
        match command {
            DrawCommand::MoveTo(p) => {
                out.push('M');
                write_pair(&mut out, p.x(), p.y(), options);
                after_line = false;
            }
            DrawCommand::LineTo(p) => {
                if !(options.elide_repeated_commands && after_line) {
                    out.push('L');
                }
                write_pair(&mut out, p.x(), p.y(), options);
                after_line = true;
            }
            DrawCommand::ClosePath => {
                out.push('Z');
                after_line = false;
            }
        }
    }

    trace!("Serialized {} draw commands into {} bytes", plot.len(), out.len());
    out
}

fn write_pair(out: &mut String, x: f64, y: f64, options: &PathOptions) {
    out.push_str(&format_number(x, options.precision, options.compact));
    out.push(',');
    out.push_str(&format_number(y, options.precision, options.compact));
}
