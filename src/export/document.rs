use crate::errors::SvgCreationError;
use crate::export::{format_number, to_svg_path, PathOptions};
use crate::plot::Plot;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use svg::node::element::{Group, Path};
use svg::Document;

const INKSCAPE_NAMESPACE: &str = "http://www.inkscape.org/namespaces/inkscape";

fn default_pen_strokes() -> BTreeMap<usize, String> {
    [(0, "black"), (1, "red"), (2, "blue")]
        .into_iter()
        .map(|(pen, colour)| (pen, String::from(colour)))
        .collect()
}

/// How [`to_svg_document`] dresses up the path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Stroke colour, any SVG paint value. Used for untagged subpaths and for
    /// pens missing from `pen_strokes`.
    pub stroke: String,
    /// Display colour per pen number.
    pub pen_strokes: BTreeMap<usize, String>,
    pub stroke_width: f64,
    /// Space added around the plot bounds on every side, in plot units.
    pub margin: f64,
    /// Formatting of the `d` attribute and the viewBox numbers.
    pub path: PathOptions,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        DocumentOptions {
            stroke: String::from("black"),
            pen_strokes: default_pen_strokes(),
            stroke_width: 1.0,
            margin: 0.0,
            path: PathOptions::default(),
        }
    }
}

/// Wrap a plot in an SVG document with a viewBox fitted to the plot bounds
/// plus the margin. Nothing is written to disk; callers can `to_string()` the
/// document or hand it to `svg::save`.
///
/// A plot with no pens becomes a single unfilled `<path>`. Otherwise each pen
/// gets an Inkscape layer (`<g inkscape:groupmode="layer">`) holding one path
/// in that pen's colour, layers ordered by first use.
///
/// Plots whose bounds plus margin have no width or no height fail with
/// [`SvgCreationError::NullGeometry`], as does an empty plot.
pub fn to_svg_document(plot: &Plot, options: &DocumentOptions) -> Result<Document, SvgCreationError> {
    let bounds = plot.bounds().ok_or(SvgCreationError::NullGeometry)?;
    let num = |v: f64| format_number(v, options.path.precision, false);
    let margin = options.margin.max(0.0);
    let width = bounds.width() + 2.0 * margin;
    let height = bounds.height() + 2.0 * margin;
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        debug!("Refusing to build a document with a {} x {} viewBox", width, height);
        return Err(SvgCreationError::NullGeometry);
    }

    let viewbox = format!(
        "{} {} {} {}",
        num(bounds.min().x - margin),
        num(bounds.min().y - margin),
        num(width),
        num(height)
    );
    let doc = Document::new().set("viewBox", viewbox);

    let path = |plot: &Plot, stroke: &str| {
        Path::new()
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", num(options.stroke_width))
            .set("d", to_svg_path(plot, &options.path))
    };

    let pens = plot.distinct_pens();
    if pens.iter().all(Option::is_none) {
        return Ok(doc.add(path(plot, options.stroke.as_str())));
    }

    let mut doc = doc.set("xmlns:inkscape", INKSCAPE_NAMESPACE);
    for pen in pens {
        let (label, stroke) = match pen {
            Some(pen) => (
                pen.to_string(),
                options.pen_strokes.get(&pen).unwrap_or(&options.stroke),
            ),
            None => (String::from("default"), &options.stroke),
        };
        let group = Group::new()
            .set("inkscape:groupmode", "layer")
            .set("inkscape:label", label)
            .add(path(&plot.layer(pen), stroke.as_str()));
        doc = doc.add(group);
    }
    Ok(doc)
}
