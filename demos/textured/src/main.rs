//! 27000 cuboids textured with `clouds.ppm`. Run from this directory so the
//! shaders and the texture are found.

use instanced_cubes::{DemoConfig, run};

fn main() {
    let demo = DemoConfig::textured();
    if let Err(e) = run(demo) {
        log::error!("{e:#}");
        eprintln!("textured: {e:#}");
        std::process::exit(1);
    }
}
