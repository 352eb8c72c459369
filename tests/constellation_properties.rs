//! Behavioural properties of the constellation effect
//!
//! Tests cover:
//! - Segment cap under arbitrary pointer paths
//! - Monotonic fade of every live segment
//! - No self-links and endpoint fidelity
//! - Last-active persistence across empty space
//! - Eventual emptying once the pointer stops linking

use std::collections::HashMap;

use glam::{Vec2, Vec3};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfolio::core::segments::SegmentId;
use starfolio::core::{Constellation, ConstellationConfig, PointField, Selection, Viewport};

/// NDC maps to world by a factor of 10
fn square_viewport() -> Viewport {
    Viewport::new(20.0, 20.0)
}

fn random_constellation(seed: u64, selection: Selection, cap: usize) -> Constellation {
    let config = ConstellationConfig {
        seed: Some(seed),
        selection,
        max_segments: cap,
        // Denser than the page default so random paths link often
        spread: Vec3::new(16.0, 16.0, 2.0),
        ..ConstellationConfig::default()
    };
    let mut rng = config.rng();
    Constellation::generate(&config, square_viewport(), &mut rng)
}

fn fixed_constellation(positions: &[Vec3]) -> Constellation {
    let mut rng = StdRng::seed_from_u64(9);
    let field = PointField::from_positions(positions.iter().copied(), &mut rng);
    Constellation::new(field, &ConstellationConfig::default(), square_viewport())
}

fn selection() -> impl Strategy<Value = Selection> {
    prop_oneof![
        Just(Selection::FirstMatch),
        Just(Selection::LastMatch),
        Just(Selection::Nearest),
    ]
}

fn pointer_path(max_len: usize) -> impl Strategy<Value = Vec<Vec2>> {
    proptest::collection::vec((-1.0f32..1.0, -1.0f32..1.0), 1..max_len)
        .prop_map(|v| v.into_iter().map(|(x, y)| Vec2::new(x, y)).collect())
}

/// Far outside any generated field
const NOWHERE: Vec2 = Vec2::new(100.0, 100.0);

proptest! {
    #[test]
    fn prop_segment_count_never_exceeds_cap(
        seed in any::<u64>(),
        selection in selection(),
        cap in 1usize..24,
        path in pointer_path(300),
    ) {
        let mut c = random_constellation(seed, selection, cap);
        for pointer in path {
            c.tick(pointer);
            prop_assert!(c.segment_count() <= cap);
        }
    }

    #[test]
    fn prop_opacity_never_increases(
        seed in any::<u64>(),
        selection in selection(),
        path in pointer_path(300),
    ) {
        let mut c = random_constellation(seed, selection, 16);
        let mut seen: HashMap<SegmentId, f32> = HashMap::new();
        for pointer in path {
            c.tick(pointer);
            for s in c.segments() {
                prop_assert!(s.opacity > 0.0 && s.opacity <= 1.0);
                if let Some(&before) = seen.get(&s.id) {
                    prop_assert!(s.opacity < before);
                }
                seen.insert(s.id, s.opacity);
            }
        }
    }

    #[test]
    fn prop_segments_link_distinct_points(
        seed in any::<u64>(),
        path in pointer_path(300),
    ) {
        let mut c = random_constellation(seed, Selection::FirstMatch, 16);
        for pointer in path {
            c.tick(pointer);
        }
        let positions: HashMap<_, _> = c
            .field()
            .points()
            .iter()
            .map(|p| (p.id, p.position))
            .collect();
        for s in c.segments() {
            prop_assert_ne!(s.from, s.to);
            prop_assert_eq!(positions[&s.from], s.start);
            prop_assert_eq!(positions[&s.to], s.end);
        }
    }

    #[test]
    fn prop_dwelling_on_one_point_never_links(
        z in -0.5f32..0.5,
        jitter in proptest::collection::vec((-0.1f32..0.1, -0.1f32..0.1), 1..200),
    ) {
        let mut c = fixed_constellation(&[Vec3::new(0.0, 0.0, z)]);
        for (x, y) in jitter {
            let out = c.tick(Vec2::new(x, y));
            prop_assert!(out.created.is_none());
        }
        prop_assert_eq!(c.segment_count(), 0);
    }

    #[test]
    fn prop_empty_space_keeps_last_active(
        gap in proptest::collection::vec((-0.3f32..0.3, -1.0f32..1.0), 1..100),
    ) {
        let mut c = fixed_constellation(&[Vec3::new(-5.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)]);
        c.tick(Vec2::new(-0.5, 0.0));
        let first = c.field().points()[0].id;
        for (x, y) in gap {
            let out = c.tick(Vec2::new(x, y));
            prop_assert!(out.activated.is_none());
            prop_assert_eq!(c.last_active(), Some(first));
        }
        // The chain resumes from the remembered point
        prop_assert!(c.tick(Vec2::new(0.5, 0.0)).created.is_some());
    }

    #[test]
    fn prop_a_then_b_yields_one_segment(
        a in (-9.0f32..9.0, -9.0f32..9.0, -0.5f32..0.5),
        b in (-9.0f32..9.0, -9.0f32..9.0, -0.5f32..0.5),
    ) {
        let a = Vec3::new(a.0, a.1, a.2);
        let b = Vec3::new(b.0, b.1, b.2);
        prop_assume!(a.distance(b) > 3.0);

        let mut c = fixed_constellation(&[a, b]);
        c.tick(a.truncate() / 10.0);
        c.tick(b.truncate() / 10.0);

        prop_assert_eq!(c.segment_count(), 1);
        let s = c.segments().next().unwrap();
        prop_assert_eq!(s.start, a);
        prop_assert_eq!(s.end, b);
    }

    #[test]
    fn prop_buffer_empties_when_idle(
        seed in any::<u64>(),
        path in pointer_path(200),
    ) {
        let mut c = random_constellation(seed, Selection::FirstMatch, 16);
        for pointer in path {
            c.tick(pointer);
        }
        for _ in 0..60 {
            c.tick(NOWHERE);
        }
        prop_assert_eq!(c.segment_count(), 0);
    }
}

#[test]
fn test_zigzag_keeps_newest_segments() {
    let mut c = fixed_constellation(&[Vec3::new(0.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)]);
    let mut last = None;
    for i in 0..40 {
        let x = if i % 2 == 0 { 0.0 } else { 0.5 };
        if let Some(id) = c.tick(Vec2::new(x, 0.0)).created {
            last = Some(id);
        }
    }
    assert_eq!(c.segment_count(), 16);
    let ids: Vec<_> = c.segments().map(|s| s.id).collect();
    assert_eq!(ids.last().copied(), last);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ids[0], SegmentId(39 - 16));
}

#[test]
fn test_segment_survives_about_fifty_frames() {
    let mut c = fixed_constellation(&[Vec3::new(0.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)]);
    c.tick(Vec2::ZERO);
    c.tick(Vec2::new(0.5, 0.0));
    let mut frames = 1;
    while c.segment_count() > 0 {
        c.tick(NOWHERE);
        frames += 1;
        assert!(frames <= 52);
    }
    assert!(frames >= 49);
}

#[test]
fn test_render_frame_json_shape() {
    let mut c = fixed_constellation(&[Vec3::new(0.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)]);
    c.tick(Vec2::ZERO);
    c.tick(Vec2::new(0.5, 0.0));
    let json = serde_json::to_value(c.render_frame()).unwrap();

    assert_eq!(json["points"]["positions"].as_array().unwrap().len(), 6);
    assert_eq!(json["points"]["color"], "#00f0ff");
    assert_eq!(json["lines"].as_array().unwrap().len(), 1);
    assert_eq!(json["lines"][0]["width"], 2.0);
}
