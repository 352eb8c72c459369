//! Point field and background star shell
//!
//! - PointField: the fixed interactive points the pointer can activate
//! - StarShell: distant decorative stars, never interactive

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

// ============================================================================
// PointField - interactive points
// ============================================================================

/// Opaque, unique point identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointId(Uuid);

impl PointId {
    /// Draw a random (v4-layout) id from `rng`, so seeded fields get stable ids
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(uuid::Builder::from_random_bytes(rng.gen()).into_uuid())
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A fixed point in world space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub position: Vec3,
}

/// Immutable set of points, generated once per session
#[derive(Clone, Debug, Default)]
pub struct PointField {
    points: Vec<Point>,
}

impl PointField {
    /// Generate `count` points uniformly inside a box of size `spread`
    /// centred on the origin.
    pub fn generate<R: Rng + ?Sized>(count: usize, spread: Vec3, rng: &mut R) -> Self {
        let points = (0..count)
            .map(|_| {
                let jitter = Vec3::new(
                    rng.gen::<f32>() - 0.5,
                    rng.gen::<f32>() - 0.5,
                    rng.gen::<f32>() - 0.5,
                );
                Point {
                    id: PointId::random(rng),
                    position: jitter * spread,
                }
            })
            .collect();
        debug!(count, spread = ?spread, "Point field generated");
        Self { points }
    }

    /// Build a field from explicit positions (ids are drawn from `rng`)
    pub fn from_positions<R: Rng + ?Sized>(
        positions: impl IntoIterator<Item = Vec3>,
        rng: &mut R,
    ) -> Self {
        Self {
            points: positions
                .into_iter()
                .map(|position| Point {
                    id: PointId::random(rng),
                    position,
                })
                .collect(),
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positions flattened to `[x0, y0, z0, x1, ...]` for a vertex buffer
    pub fn flat_positions(&self) -> Vec<f32> {
        self.points
            .iter()
            .flat_map(|p| p.position.to_array())
            .collect()
    }
}

// ============================================================================
// StarShell - decorative background stars
// ============================================================================

/// One background star
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundStar {
    pub position: Vec3,
    pub size: f32,
}

/// Stars scattered over nested spherical shells between
/// `radius` and `radius + depth`.
#[derive(Clone, Debug, Default)]
pub struct StarShell {
    stars: Vec<BackgroundStar>,
    twinkle_speed: f32,
}

impl StarShell {
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        radius: f32,
        depth: f32,
        factor: f32,
        twinkle_speed: f32,
        rng: &mut R,
    ) -> Self {
        let mut r = radius + depth;
        let increment = if count > 0 { depth / count as f32 } else { 0.0 };
        let stars = (0..count)
            .map(|_| {
                r -= increment * rng.gen::<f32>();
                let polar = (1.0 - 2.0 * rng.gen::<f32>()).acos();
                let azimuth = rng.gen::<f32>() * TAU;
                BackgroundStar {
                    position: spherical_to_cartesian(r, polar, azimuth),
                    size: (0.5 + 0.5 * rng.gen::<f32>()) * factor,
                }
            })
            .collect();
        Self {
            stars,
            twinkle_speed,
        }
    }

    pub fn stars(&self) -> &[BackgroundStar] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Brightness multiplier in [0, 1] for a star at time `t` (seconds)
    pub fn twinkle(&self, star: &BackgroundStar, t: f32) -> f32 {
        if self.twinkle_speed == 0.0 {
            return 1.0;
        }
        0.5 + 0.5 * (t * self.twinkle_speed + 100.0 * star.position.x).sin()
    }
}

/// Three.js-style spherical coordinates: polar from +Y, azimuth around Y from +Z
pub(crate) fn spherical_to_cartesian(radius: f32, polar: f32, azimuth: f32) -> Vec3 {
    let sin_polar = polar.sin();
    Vec3::new(
        radius * sin_polar * azimuth.sin(),
        radius * polar.cos(),
        radius * sin_polar * azimuth.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_within_spread() {
        let mut rng = StdRng::seed_from_u64(7);
        let spread = Vec3::new(25.0, 20.0, 10.0);
        let field = PointField::generate(50, spread, &mut rng);
        assert_eq!(field.len(), 50);
        for p in field.points() {
            assert!(p.position.abs().cmple(spread * 0.5).all(), "{:?}", p.position);
        }
    }

    #[test]
    fn test_ids_unique() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = PointField::generate(200, Vec3::splat(10.0), &mut rng);
        let ids: std::collections::HashSet<_> = field.points().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = PointField::generate(10, Vec3::ONE, &mut StdRng::seed_from_u64(42));
        let b = PointField::generate(10, Vec3::ONE, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_flat_positions() {
        let mut rng = StdRng::seed_from_u64(0);
        let field = PointField::from_positions(
            [Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 0.5)],
            &mut rng,
        );
        assert_eq!(field.flat_positions(), vec![1.0, 2.0, 3.0, -1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_star_shell_radius_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let shell = StarShell::generate(3000, 50.0, 50.0, 4.0, 1.0, &mut rng);
        assert_eq!(shell.len(), 3000);
        for star in shell.stars() {
            let r = star.position.length();
            assert!(r >= 50.0 - 1e-3 && r <= 100.0 + 1e-3, "radius {r}");
            assert!(star.size >= 2.0 && star.size <= 4.0);
        }
    }

    #[test]
    fn test_twinkle_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let shell = StarShell::generate(20, 10.0, 5.0, 1.0, 1.0, &mut rng);
        for star in shell.stars() {
            for t in [0.0, 0.7, 12.5] {
                let b = shell.twinkle(star, t);
                assert!((0.0..=1.0).contains(&b));
            }
        }
        let still = StarShell::generate(5, 10.0, 5.0, 1.0, 0.0, &mut rng);
        assert_eq!(still.twinkle(&still.stars()[0], 3.0), 1.0);
    }

    #[test]
    fn test_spherical_front() {
        let v = spherical_to_cartesian(15.0, std::f32::consts::FRAC_PI_2, 0.0);
        assert!((v - Vec3::new(0.0, 0.0, 15.0)).length() < 1e-4);
    }
}
