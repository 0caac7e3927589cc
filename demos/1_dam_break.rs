//! block of fluid collapsing in the unit box
//!
//! usage: cargo run --example 1_dam_break -- [params.json]

type Real = f64;
type Vector = nalgebra::Vector2<Real>;

fn main() -> pbf2::Result<()> {
    env_logger::init();
    let params = match std::env::args().nth(1) {
        Some(path) => pbf2::Params::<Real>::from_path(std::path::Path::new(&path))?,
        None => pbf2::Params::<Real>::default(),
    };
    dbg!(&params);

    let mut sim = pbf2::Simulation::new(params, 0)?;
    pbf2::particle::add_block(
        &mut sim.particles,
        Vector::new(0.05, 0.05), Vector::new(0.4, 0.6),
        0.025);
    dbg!(sim.particles.len());

    const SKIP_FRAME: usize = 2;
    let mut canvas = del_canvas::canvas_gif::CanvasGif::new(
        std::path::Path::new("target/1_dam_break.gif"), (600, 600),
        &vec!(0x112F41, 0x068587, 0xF2B134));
    let transform_to_scr = nalgebra::Matrix3::<Real>::new(
        canvas.width as Real, 0., 0.,
        0., -(canvas.height as Real), canvas.height as Real,
        0., 0., 1.);

    let mut e_solve = time::Duration::ZERO;
    for i_step in 0..600 {
        let now = time::Instant::now();
        sim.step()?;
        e_solve += now.elapsed();
        if i_step % SKIP_FRAME == 0 {
            canvas.clear(0);
            for p in sim.particles.iter() {
                let color = if p.density > sim.params.rest_density { 2 } else { 1 };
                canvas.paint_point(p.x.x, p.x.y, &transform_to_scr, 3., color);
            }
            canvas.write();
        }
    }
    println!("solve {:?} for {} steps", e_solve, sim.num_steps());
    Ok(())
}
