use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use scenelib::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A star-ish polygon: random radii at evenly spaced angles, so neighbours
/// never coincide.
fn random_polygon(rng: &mut SmallRng) -> anyhow::Result<Polygon> {
    let sides = rng.gen_range(3..40);
    let cx = rng.gen_range(-500.0..500.0);
    let cy = rng.gen_range(-500.0..500.0);
    let points = (0..sides)
        .map(|i| {
            let angle = i as f64 / sides as f64 * std::f64::consts::TAU;
            let radius = rng.gen_range(0.5..50.0);
            pt(cx + angle.cos() * radius, cy + angle.sin() * radius)
        })
        .collect::<Result<Vec<Point>, GeometryError>>()?;
    Ok(Polygon::new(points)?)
}

#[test]
fn unit_square_end_to_end() -> anyhow::Result<()> {
    init_logging();
    let mut scene = Scene::new();
    scene.add_poly(square(1.0)?)?;
    let plot = scene.to_plot()?;
    assert_eq!(to_svg_path(&plot, &PathOptions::default()), "M0,0 L1,0 L1,1 L0,1 Z");
    Ok(())
}

#[test]
fn identity_compile_reproduces_vertices() -> anyhow::Result<()> {
    init_logging();
    let mut rng = SmallRng::seed_from_u64(0x5ce7e);
    for _ in 0..50 {
        let poly = random_polygon(&mut rng)?;
        let mut scene = Scene::new();
        scene.add_poly(poly.clone())?;
        let plot = scene.to_plot()?;
        assert_eq!(plot.len(), poly.len() + 1);
        let compiled: Vec<Point> = plot.points().collect();
        assert_eq!(compiled, poly.points());
        assert_eq!(plot.commands().last(), Some(&DrawCommand::ClosePath));
    }
    Ok(())
}

#[test]
fn scene_order_is_preserved() -> anyhow::Result<()> {
    let mut scene = Scene::new();
    let a = regular_poly(6, 2.0, 0.0)?;
    let b = rect(3.0, 1.0)?;
    scene.add_poly(a.clone())?;
    scene.add_poly_with_transform(b.clone(), Transform::translate(10.0, 10.0)?)?;
    let plot = scene.to_plot()?;

    let (first, second) = plot.commands().split_at(a.len() + 1);
    assert_eq!(first.last(), Some(&DrawCommand::ClosePath));
    assert_eq!(first[0], DrawCommand::MoveTo(a.points()[0]));
    assert_eq!(second.len(), b.len() + 1);
    assert_eq!(second[0], DrawCommand::MoveTo(pt(10.0, 10.0)?));
    Ok(())
}

#[test]
fn to_plot_is_idempotent() -> anyhow::Result<()> {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut scene = Scene::new();
    for _ in 0..10 {
        scene.add_poly_with_transform(random_polygon(&mut rng)?, Transform::rotate(rng.gen_range(0.0..6.0))?)?;
    }
    assert_eq!(scene.to_plot()?, scene.to_plot()?);
    Ok(())
}

#[test]
fn compaction_keeps_geometry() -> anyhow::Result<()> {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut scene = Scene::new();
    for _ in 0..20 {
        let transform = Transform::scale(0.01, 0.01)?.then(&Transform::rotate(rng.gen_range(-3.0..3.0))?)?;
        scene.add_poly_with_transform(random_polygon(&mut rng)?, transform)?;
    }
    let plot = scene.to_plot()?;

    let verbose = to_svg_path(&plot, &PathOptions::default());
    let compact = to_svg_path(&plot, &PathOptions::compact());
    assert!(compact.len() < verbose.len());

    let from_verbose = parse_svg_path(&verbose)?;
    let from_compact = parse_svg_path(&compact)?;
    assert_eq!(from_verbose, from_compact);

    // And both sit within the configured precision of the plot itself.
    assert_eq!(from_verbose.len(), plot.len());
    for (parsed, original) in from_verbose.iter().zip(plot.iter()) {
        match (parsed.point(), original.point()) {
            (Some(a), Some(b)) => {
                assert!((a.x() - b.x()).abs() <= 1e-6 && (a.y() - b.y()).abs() <= 1e-6);
            }
            (None, None) => {}
            _ => panic!("Command kinds differ: {:?} vs {:?}", parsed, original),
        }
    }
    Ok(())
}

#[test]
fn square_is_deterministic() -> anyhow::Result<()> {
    assert_eq!(square(1.0)?.points(), square(1.0)?.points());
    Ok(())
}

#[test]
fn two_point_polygon_is_rejected() {
    let mut scene = Scene::new();
    let err = scene
        .add_poly(vec![pt(0.0, 0.0).unwrap(), pt(1.0, 0.0).unwrap()])
        .unwrap_err();
    assert_eq!(err, GeometryError::TooFewPoints(2));
    assert_eq!(scene.len(), 0);
}

#[test]
fn overflowing_transform_fails_whole_compile() -> anyhow::Result<()> {
    let mut scene = Scene::new();
    scene.add_poly(unit_square())?;
    scene.add_poly(square(1e300)?)?;
    scene.set_transform(Transform::scale(1e10, 1e10)?);
    assert_eq!(scene.to_plot(), Err(GeometryError::NonFiniteResult { entry: 1 }));
    Ok(())
}

#[test]
fn plots_serialize_concurrently() -> anyhow::Result<()> {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut scene = Scene::new();
    for _ in 0..25 {
        scene.add_poly(random_polygon(&mut rng)?)?;
    }
    let plot = scene.to_plot()?;
    let expected = to_svg_path(&plot, &PathOptions::default());

    let results = crossbeam::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|_| to_svg_path(&plot, &PathOptions::default())))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("Serializer thread panicked"))
            .collect::<Vec<String>>()
    })
    .expect("Scope failed");

    assert!(results.iter().all(|r| *r == expected));
    Ok(())
}
