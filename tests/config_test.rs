use std::path::PathBuf;

use instanced_cubes::config::{DemoConfig, Geometry};

#[test]
fn instanced_preset() {
    let demo = DemoConfig::instanced();
    assert_eq!(demo.grid.range, -20..20);
    assert_eq!(demo.grid.spacing, 5.0);
    assert_eq!(demo.grid.instance_count(), 64_000);
    assert_eq!(demo.geometry, Geometry::Colored);
    assert_eq!((demo.width, demo.height), (1024, 750));
    assert_eq!(demo.camera_speed, 0.5);
}

#[test]
fn textured_preset() {
    let demo = DemoConfig::textured();
    assert_eq!(demo.grid.range, -15..15);
    assert_eq!(demo.grid.instance_count(), 27_000);
    assert_eq!(
        demo.geometry,
        Geometry::Textured {
            texture: PathBuf::from("./clouds.ppm"),
            flip: true,
        }
    );
}

#[test]
fn presets_share_projection_and_shader_paths() {
    let a = DemoConfig::instanced();
    let b = DemoConfig::textured();
    assert_eq!(a.fovy, b.fovy);
    assert_eq!(a.znear, 0.1);
    assert_eq!(a.zfar, 1024.0);
    assert_eq!(a.vertex_shader, b.vertex_shader);
    assert_eq!(a.fragment_shader, b.fragment_shader);
    assert_ne!(a.title, b.title);
}
