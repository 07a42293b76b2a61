//! 64000 colored cuboids. Run from this directory so `./shaders` is found.

use instanced_cubes::{DemoConfig, run};

fn main() {
    if let Err(e) = run(DemoConfig::instanced()) {
        log::error!("{e:#}");
        eprintln!("instanced: {e:#}");
        std::process::exit(1);
    }
}
