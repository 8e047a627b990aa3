// Host-side tests for the hero scene: camera, resize handling and geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
#[path = "../src/core/scene.rs"]
mod scene;
mod geometry {
    include!("../src/core/geometry.rs");
}

use glam::Vec3;
use scene::*;

fn make_scene() -> HeroScene {
    HeroScene::new(
        HeroConfig::default(),
        Viewport {
            css_width: 1200.0,
            css_height: 600.0,
            pixel_ratio: 2.0,
        },
    )
}

#[test]
fn camera_starts_at_container_aspect() {
    let s = make_scene();
    assert!((s.camera.aspect - 2.0).abs() < 1e-6);
    assert!((s.camera.fovy_radians - 75.0_f32.to_radians()).abs() < 1e-6);
    assert_eq!(s.camera.eye, Vec3::new(0.0, 0.0, 3.0));
    assert_eq!(s.viewport.backing_size(), (2400, 1200));
}

#[test]
fn resize_updates_camera_and_viewport() {
    let mut s = make_scene();
    assert!(s.resize(800.0, 800.0, 1.5));
    assert!((s.camera.aspect - 1.0).abs() < 1e-6);
    assert_eq!(s.viewport.backing_size(), (1200, 1200));
}

#[test]
fn resize_with_zero_dimension_changes_nothing() {
    let mut s = make_scene();
    let camera_before = s.camera.clone();
    let viewport_before = s.viewport;

    assert!(!s.resize(0.0, 600.0, 2.0));
    assert!(!s.resize(1200.0, 0.0, 2.0));
    assert!(!s.resize(0.0, 0.0, 1.0));

    assert_eq!(s.camera, camera_before);
    assert_eq!(s.viewport, viewport_before);
    assert!(s.camera.projection_matrix().is_finite());
}

#[test]
fn zero_sized_viewport_still_has_a_valid_backing_store() {
    let v = Viewport {
        css_width: 0.0,
        css_height: 0.0,
        pixel_ratio: 1.0,
    };
    assert_eq!(v.backing_size(), (1, 1));
    assert!(v.aspect().is_finite());
}

#[test]
fn sub_pixel_heights_keep_camera_and_viewport_aspect_equal() {
    let v = Viewport {
        css_width: 1.0,
        css_height: 0.5,
        pixel_ratio: 1.0,
    };
    assert!((v.aspect() - 2.0).abs() < 1e-6);

    let mut s = make_scene();
    assert!(s.resize(1.0, 0.5, 1.0));
    assert_eq!(s.camera.aspect, s.viewport.aspect());
    assert!((s.camera.aspect - 2.0).abs() < 1e-6);

    let fresh = HeroScene::new(HeroConfig::default(), v);
    assert_eq!(fresh.camera.aspect, v.aspect());
}

#[test]
fn origin_projects_to_screen_center() {
    let s = make_scene();
    let clip = s.camera.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn pointer_moves_feed_the_animator_and_bad_ones_are_ignored() {
    let mut s = make_scene();
    s.pointer_moved(Some(motion::PointerTarget {
        pitch: -0.5,
        yaw: -0.5,
    }));
    s.pointer_moved(None);
    assert_eq!(s.animator.target.pitch, -0.5);
    assert_eq!(s.animator.target.yaw, -0.5);

    for i in 0..300 {
        s.advance(i as f32 / 60.0);
    }
    assert!((s.animator.orientation.pitch + 0.5).abs() < 1e-3);
}

#[test]
fn srgb_hex_converts_to_linear() {
    assert_eq!(srgb_hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    let white = srgb_hex_to_linear(0xffffff);
    assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
    // Mid grey is darker in linear space
    let grey = srgb_hex_to_linear(0x808080);
    assert!((grey[0] - 0.2158).abs() < 1e-3);
}

#[test]
fn default_lighting_matches_the_hero_palette() {
    let cfg = HeroConfig::default();
    assert_eq!(cfg.lighting.ambient.color, 0xffffff);
    assert_eq!(cfg.lighting.points[0].position, Vec3::new(5.0, 5.0, 5.0));
    assert_eq!(cfg.lighting.points[1].position, Vec3::new(-5.0, -3.0, 2.0));
    assert_eq!(cfg.material.emissive, 0x38d6e1);
    assert!(cfg.material.metalness < cfg.material.roughness);
}

#[test]
fn icosahedron_has_twenty_flat_faces() {
    let verts = geometry::flat_icosahedron(1.0);
    assert_eq!(verts.len(), 60);
    for face in verts.chunks(3) {
        // one normal per face
        assert_eq!(face[0].normal, face[1].normal);
        assert_eq!(face[1].normal, face[2].normal);
    }
}

#[test]
fn icosahedron_vertices_lie_on_radius() {
    for radius in [1.0_f32, 2.5] {
        for v in geometry::flat_icosahedron(radius) {
            let len = Vec3::from_array(v.position).length();
            assert!((len - radius).abs() < 1e-5, "vertex at {len}");
        }
    }
}

#[test]
fn icosahedron_faces_wind_counter_clockwise_outward() {
    let verts = geometry::flat_icosahedron(1.0);
    for face in verts.chunks(3) {
        let [a, b, c] = [0, 1, 2].map(|i| Vec3::from_array(face[i].position));
        let n = Vec3::from_array(face[0].normal);
        let centroid = (a + b + c) / 3.0;
        assert!(n.dot(centroid) > 0.0, "normal points inward");
        let winding = (b - a).cross(c - a).normalize();
        assert!(winding.abs_diff_eq(n, 1e-5), "winding disagrees with normal");
        assert!((n.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn icosahedron_vertex_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<geometry::Vertex>(), 24);
}

#[test]
fn unlaid_out_container_gets_square_projection() {
    let s = HeroScene::new(
        HeroConfig::default(),
        Viewport {
            css_width: 0.0,
            css_height: 0.0,
            pixel_ratio: 1.0,
        },
    );
    assert_eq!(s.camera.aspect, 1.0);
    assert!(s.camera.projection_matrix().is_finite());
}
