//! Representation of a 2D scene: an ordered list of polygons, each with its
//! own transform, under one scene-wide transform.

use crate::errors::GeometryError;
use crate::geom::{Polygon, Transform};
use crate::plot::compile::compile;
use crate::plot::Plot;
use log::{debug, trace};

/// A polygon, the transform placing it in the scene, and optionally the pen
/// that draws it.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneEntry {
    polygon: Polygon,
    transform: Transform,
    pen: Option<usize>,
}

impl SceneEntry {
    pub fn new(polygon: Polygon, transform: Transform) -> SceneEntry {
        SceneEntry {
            polygon,
            transform,
            pen: None,
        }
    }

    pub fn with_pen(mut self, pen: usize) -> SceneEntry {
        self.pen = Some(pen);
        self
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn pen(&self) -> Option<usize> {
        self.pen
    }
}

/// # Scene
///
/// The authoring-time model. Entries are kept in the order they were added,
/// which is also the order they are drawn in. Scenes start empty and only
/// ever grow; compiling one with [`Scene::to_plot`] leaves it untouched, so it
/// can be extended and compiled again.
///
/// ```rust
/// use scenelib::prelude::*;
///
/// let mut scene = Scene::new();
/// scene.add_poly(square(1.0)?)?;
/// let path = to_svg_path(&scene.to_plot()?, &PathOptions::default());
/// assert_eq!(path, "M0,0 L1,0 L1,1 L0,1 Z");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scene {
    entries: Vec<SceneEntry>,
    transform: Transform,
}

impl Scene {
    /// Constructs an empty scene.
    pub fn new() -> Scene {
        Scene {
            entries: Vec::new(),
            transform: Transform::identity(),
        }
    }

    /// Append a polygon with the identity transform. Accepts a built
    /// [`Polygon`] or anything that converts into one (point or coordinate
    /// vectors, a closed `geo_types::Polygon`). If the conversion fails the
    /// scene is left as it was.
    pub fn add_poly<P>(&mut self, polygon: P) -> Result<(), GeometryError>
    where
        P: TryInto<Polygon>,
        GeometryError: From<P::Error>,
    {
        self.add_poly_with_transform(polygon, Transform::identity())
    }

    /// Append a polygon placed by `transform`.
    pub fn add_poly_with_transform<P>(&mut self, polygon: P, transform: Transform) -> Result<(), GeometryError>
    where
        P: TryInto<Polygon>,
        GeometryError: From<P::Error>,
    {
        self.push(polygon, transform, None)
    }

    /// Append a polygon placed by `transform` and drawn with `pen`. Pens
    /// only tag subpaths; drawing order is still insertion order.
    pub fn add_poly_with_pen<P>(&mut self, polygon: P, transform: Transform, pen: usize) -> Result<(), GeometryError>
    where
        P: TryInto<Polygon>,
        GeometryError: From<P::Error>,
    {
        self.push(polygon, transform, Some(pen))
    }

    fn push<P>(&mut self, polygon: P, transform: Transform, pen: Option<usize>) -> Result<(), GeometryError>
    where
        P: TryInto<Polygon>,
        GeometryError: From<P::Error>,
    {
        let polygon = polygon.try_into().map_err(GeometryError::from).map_err(|err| {
            debug!("Rejected polygon for scene entry {}: {}", self.entries.len(), err);
            err
        })?;
        trace!(
            "Adding scene entry {} with {} vertices, pen {:?}",
            self.entries.len(),
            polygon.len(),
            pen
        );
        self.entries.push(SceneEntry {
            polygon,
            transform,
            pen,
        });
        Ok(())
    }

    /// The scene-wide transform, applied after each entry's own.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn entries(&self) -> &[SceneEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compile the current contents into a [`Plot`]. Fails only if a
    /// transform pushes a vertex out of the finite range.
    pub fn to_plot(&self) -> Result<Plot, GeometryError> {
        compile(&self.entries, &self.transform)
    }
}
