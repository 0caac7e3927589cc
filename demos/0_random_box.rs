//! 50 particles dropped at random into the unit box, one GIF frame per step

type Real = f64;

fn main() -> pbf2::Result<()> {
    env_logger::init();
    const NUM_PARTICLES: usize = 50;
    const NUM_STEPS: usize = 300;

    let mut sim = pbf2::Simulation::<Real>::new(pbf2::Params::default(), 13)?;
    sim.add_random(NUM_PARTICLES);

    let mut canvas = del_canvas::canvas_gif::CanvasGif::new(
        std::path::Path::new("target/0_random_box.gif"), (500, 500),
        &vec!(0xffffff, 0x000000, 0x0000FF));
    let transform_to_scr = nalgebra::Matrix3::<Real>::new(
        canvas.width as Real, 0., 0.,
        0., -(canvas.height as Real), canvas.height as Real,
        0., 0., 1.);
    let now = time::Instant::now();
    for i_step in 0..=NUM_STEPS {
        if i_step > 0 {
            sim.step()?;
        }
        canvas.clear(0);
        canvas.paint_polyloop(
            &[0., 0., 1., 0., 1., 1., 0., 1.], &transform_to_scr,
            1., 2);
        for x in sim.positions() {
            canvas.paint_point(x.x, x.y, &transform_to_scr, 2., 1);
        }
        canvas.write();
        if i_step % 50 == 0 {
            dbg!(i_step);
        }
    }
    println!("{} steps {:?}", sim.num_steps(), now.elapsed());
    Ok(())
}
