use scenelib::prelude::*;

fn main() -> Result<(), GeometryError> {
    let mut scene = Scene::new();
    scene.add_poly(unit_square())?;

    let plot = scene.to_plot()?;

    let path = to_svg_path(&plot, &PathOptions::default());
    println!("{}", path);
    Ok(())
}
