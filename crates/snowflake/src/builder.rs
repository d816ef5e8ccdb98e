//! Parametric snowflake construction.
//!
//! A snowflake is built from one "spiky arm": a half-profile of zig-zag
//! spikes running along the +x axis, mirrored across the x axis and capped
//! with a pointed tip. The complete arm is then copied around the origin
//! `num_arms` times.

use rand::rngs::StdRng;
use rand::SeedableRng;
use snowflake_geom::{radians, Point, Polyline};
use tracing::{debug, warn};

use crate::error::Result;
use crate::options::{SnowflakeOptions, MAX_RANDOM_SPIKES, MIN_RANDOM_SPIKES};
use crate::snowflake::Snowflake;
use crate::source::RangeSource;

/// Angle between the arm axis and each spike (degrees).
pub const SPIKE_ANGLE_DEGREES: f64 = 31.0;

/// Tip position as a multiple of the arm length.
pub const TIP_EXTENSION: f64 = 1.1;

/// Builds [`Snowflake`]s from [`SnowflakeOptions`].
///
/// ```
/// use snowflake::{Sequence, SnowflakeBuilder};
///
/// let flake = SnowflakeBuilder::new()
///     .num_arms(4)
///     .num_spikes(3)
///     .build_with(&mut Sequence::new(vec![20]))
///     .unwrap();
///
/// assert_eq!(flake.path().len(), 4 * 23);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnowflakeBuilder {
    options: SnowflakeOptions,
}

impl SnowflakeBuilder {
    /// Builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder starting from existing options.
    pub fn from_options(options: SnowflakeOptions) -> Self {
        Self { options }
    }

    /// Set the number of arms.
    pub fn num_arms(mut self, num_arms: u32) -> Self {
        self.options.num_arms = num_arms;
        self
    }

    /// Set the arm length.
    pub fn arm_length(mut self, arm_length: f64) -> Self {
        self.options.arm_length = arm_length;
        self
    }

    /// Set the arm thickness.
    pub fn arm_thickness(mut self, arm_thickness: f64) -> Self {
        self.options.arm_thickness = arm_thickness;
        self
    }

    /// Fix the number of spikes per half-arm.
    pub fn num_spikes(mut self, num_spikes: u32) -> Self {
        self.options.num_spikes = Some(num_spikes);
        self
    }

    /// Set the spacer offset.
    pub fn spacer(mut self, spacer: f64) -> Self {
        self.options.spacer = spacer;
        self
    }

    /// Options the next build will use.
    pub fn options(&self) -> &SnowflakeOptions {
        &self.options
    }

    /// Build using the thread-local random generator.
    pub fn build(&self) -> Result<Snowflake> {
        self.build_with(&mut rand::rng())
    }

    /// Build reproducibly from a seed.
    pub fn build_seeded(&self, seed: u64) -> Result<Snowflake> {
        self.build_with(&mut StdRng::seed_from_u64(seed))
    }

    /// Build drawing all random values from `source`.
    pub fn build_with<S: RangeSource + ?Sized>(&self, source: &mut S) -> Result<Snowflake> {
        let options = &self.options;
        options.validate()?;

        for key in options.extra.keys() {
            warn!(key = %key, "ignoring unrecognized snowflake option");
        }

        let num_spikes = match options.num_spikes {
            Some(n) => n,
            None => source.int_in_range(
                i64::from(MIN_RANDOM_SPIKES),
                i64::from(MAX_RANDOM_SPIKES),
            ) as u32,
        };
        let gap_size = options.gap_size(num_spikes);
        let (min_spike, max_spike) = options.spike_length_range()?;

        debug!(
            num_arms = options.num_arms,
            num_spikes,
            gap_size,
            "building snowflake"
        );

        let mut arm = spiky_arm(options, num_spikes, gap_size, |n| {
            let length = source.int_in_range(min_spike, max_spike);
            debug!(spike = n, length, "spike");
            length as f64
        });
        close_arm(&mut arm, options);
        let path = replicate_arm(arm, options.num_arms);

        debug!(points = path.len(), "snowflake built");

        let mut resolved = options.clone();
        resolved.num_spikes = Some(num_spikes);
        Ok(Snowflake::from_parts(resolved, num_spikes, gap_size, path))
    }
}

/// Build one half-arm: base point, three points per spike, end point.
fn spiky_arm(
    options: &SnowflakeOptions,
    num_spikes: u32,
    gap_size: f64,
    mut spike_length: impl FnMut(u32) -> f64,
) -> Polyline {
    let half_thickness = options.arm_thickness / 2.0;
    let angle = radians(SPIKE_ANGLE_DEGREES);
    let (sin_a, cos_a) = angle.sin_cos();

    let mut arm = Polyline::new();
    arm.append(Point::new(options.arm_thickness, half_thickness));

    for n in 0..num_spikes {
        let length = spike_length(n);
        let x1 = options.spacer + gap_size * f64::from(n * 2);
        let x2 = options.spacer + x1 + length * cos_a;
        let x3 = options.spacer + x1 + gap_size;

        arm.append(Point::new(x1, half_thickness));
        arm.append(Point::new(x2, length * sin_a));
        arm.append(Point::new(x3, half_thickness));
    }

    arm.append(Point::new(options.arm_length, half_thickness));
    arm
}

/// Mirror the half-arm, cap it with the tip and join the halves.
fn close_arm(half: &mut Polyline, options: &SnowflakeOptions) {
    // Mirrored half runs tip to base so the outline stays continuous.
    let mut other_half = half.clone();
    other_half.reflect();
    other_half.reverse();

    half.append(Point::new(options.arm_length * TIP_EXTENSION, 0.0));
    half.extend(&other_half);
}

/// Concatenate `num_arms` copies of `arm`, each turned a further
/// `-(360 / num_arms)` degrees from the previous one.
fn replicate_arm(mut arm: Polyline, num_arms: u32) -> Polyline {
    let step = radians(-(360.0 / f64::from(num_arms)));
    let mut path = Polyline::new();
    for _ in 0..num_arms {
        path.extend(&arm);
        arm.rotate(step);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Sequence;
    use crate::SnowflakeError;
    use approx::assert_relative_eq;

    fn contains_near(path: &Polyline, target: &Point, tol: f64) -> bool {
        path.iter().any(|p| p.distance(target) < tol)
    }

    #[test]
    fn test_spiky_arm_layout() {
        let options = SnowflakeOptions {
            arm_length: 100.0,
            arm_thickness: 3.0,
            spacer: 0.5,
            ..Default::default()
        };
        let gap = options.gap_size(2);
        let arm = spiky_arm(&options, 2, gap, |_| 10.0);

        assert_eq!(arm.len(), 3 * 2 + 2);
        assert_eq!(arm.first(), Some(&Point::new(3.0, 1.5)));
        assert_eq!(arm.last(), Some(&Point::new(100.0, 1.5)));

        let pts = arm.points();
        let (sin_a, cos_a) = radians(31.0).sin_cos();
        // First spike: base, peak, close.
        assert_relative_eq!(pts[1].x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(pts[1].y, 1.5, epsilon = 1e-12);
        assert_relative_eq!(pts[2].x, 1.0 + 10.0 * cos_a, epsilon = 1e-12);
        assert_relative_eq!(pts[2].y, 10.0 * sin_a, epsilon = 1e-12);
        assert_relative_eq!(pts[3].x, 1.0 + 25.0, epsilon = 1e-12);
        // Second spike starts two gaps further along.
        assert_relative_eq!(pts[4].x, 0.5 + 50.0, epsilon = 1e-12);
        assert_relative_eq!(pts[6].x, 0.5 + 50.5 + 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_close_arm_mirrors_and_tips() {
        let options = SnowflakeOptions::default();
        let mut arm = spiky_arm(&options, 3, options.gap_size(3), |_| 20.0);
        let half = arm.clone();
        close_arm(&mut arm, &options);

        assert_eq!(arm.len(), 2 * half.len() + 1);
        assert_eq!(arm.points()[half.len()], Point::new(110.0, 0.0));

        // Second half is the first reflected and reversed.
        for (i, p) in half.iter().enumerate() {
            let mirrored = arm.points()[arm.len() - 1 - i];
            assert_eq!(mirrored, Point::new(p.x, -p.y));
        }
    }

    #[test]
    fn test_replicate_arm_compounds_rotation() {
        let arm = Polyline::from_points(vec![Point::new(1.0, 0.0)]);
        let path = replicate_arm(arm, 4);
        let expected = [(1.0, 0.0), (0.0, -1.0), (-1.0, 0.0), (0.0, 1.0)];
        assert_eq!(path.len(), 4);
        for (p, (x, y)) in path.iter().zip(expected) {
            assert!((p.x - x).abs() < 1e-12, "{p:?}");
            assert!((p.y - y).abs() < 1e-12, "{p:?}");
        }
    }

    #[test]
    fn test_point_count_per_arm() {
        for spikes in 1..=5 {
            let flake = SnowflakeBuilder::new()
                .num_spikes(spikes)
                .build_seeded(3)
                .unwrap();
            let per_arm = 6 * spikes as usize + 5;
            assert_eq!(flake.points_per_arm(), per_arm);
            assert_eq!(flake.path().len(), 6 * per_arm);
        }
    }

    #[test]
    fn test_six_fold_symmetry() {
        let flake = SnowflakeBuilder::new().build_seeded(42).unwrap();
        let path = flake.path();
        for theta in [60.0_f64, -60.0, 120.0] {
            let mut turned = path.clone();
            turned.rotate(theta.to_radians());
            for p in turned.iter() {
                assert!(contains_near(path, p, 1e-6), "no match for {p:?}");
            }
        }
    }

    #[test]
    fn test_not_symmetric_under_odd_angle() {
        let flake = SnowflakeBuilder::new().build_seeded(42).unwrap();
        let mut turned = flake.path().clone();
        turned.rotate(30.0_f64.to_radians());
        assert!(!turned
            .iter()
            .all(|p| contains_near(flake.path(), p, 1e-6)));
    }

    #[test]
    fn test_four_arm_scenario() {
        let flake = SnowflakeBuilder::new()
            .num_arms(4)
            .arm_length(100.0)
            .arm_thickness(3.0)
            .num_spikes(3)
            .spacer(0.5)
            .build_seeded(11)
            .unwrap();

        let gcode = flake.to_gcode();
        let lines: Vec<&str> = gcode.lines().collect();
        assert_eq!(lines[0], "G1 X3.00 Y1.50");
        assert_eq!(lines.len(), flake.path().len());
        assert_eq!(lines.len(), 4 * (6 * 3 + 5));
    }

    #[test]
    fn test_random_spike_count_in_range() {
        for seed in 0..50 {
            let flake = SnowflakeBuilder::new().build_seeded(seed).unwrap();
            assert!((MIN_RANDOM_SPIKES..=MAX_RANDOM_SPIKES).contains(&flake.num_spikes()));
            assert_eq!(flake.options().num_spikes, Some(flake.num_spikes()));
        }
    }

    #[test]
    fn test_seeded_builds_are_reproducible() {
        let builder = SnowflakeBuilder::new();
        let a = builder.build_seeded(99).unwrap();
        let b = builder.build_seeded(99).unwrap();
        assert_eq!(a.path(), b.path());
    }

    #[test]
    fn test_spike_lengths_from_source() {
        // First draw picks the spike count, the rest are spike lengths.
        let mut source = Sequence::new(vec![2, 10, 40]);
        let flake = SnowflakeBuilder::new()
            .num_arms(1)
            .build_with(&mut source)
            .unwrap();
        assert_eq!(flake.num_spikes(), 2);

        let (sin_a, _) = radians(SPIKE_ANGLE_DEGREES).sin_cos();
        let pts = flake.path().points();
        assert_relative_eq!(pts[2].y, 10.0 * sin_a, epsilon = 1e-9);
        assert_relative_eq!(pts[5].y, 40.0 * sin_a, epsilon = 1e-9);
    }

    #[test]
    fn test_spike_lengths_clamped_to_range() {
        let flake = SnowflakeBuilder::new()
            .num_arms(1)
            .num_spikes(2)
            .build_with(&mut Sequence::new(vec![0, 1000]))
            .unwrap();

        let (sin_a, _) = radians(SPIKE_ANGLE_DEGREES).sin_cos();
        let pts = flake.path().points();
        assert_relative_eq!(pts[2].y, 3.0 * sin_a, epsilon = 1e-9);
        assert_relative_eq!(pts[5].y, 50.0 * sin_a, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_options_fail_fast() {
        let err = SnowflakeBuilder::new()
            .num_spikes(0)
            .build_seeded(1)
            .unwrap_err();
        assert!(matches!(err, SnowflakeError::InvalidOptions(_)));

        let err = SnowflakeBuilder::new()
            .arm_length(f64::NAN)
            .build_seeded(1)
            .unwrap_err();
        assert!(matches!(err, SnowflakeError::InvalidOptions(_)));
    }

    #[test]
    fn test_unknown_keys_have_no_effect() {
        let plain = SnowflakeBuilder::new().build_seeded(5).unwrap();
        let mut options = SnowflakeOptions::default();
        options
            .extra
            .insert("color".into(), serde_json::json!("white"));
        let tagged = SnowflakeBuilder::from_options(options)
            .build_seeded(5)
            .unwrap();
        assert_eq!(plain.path(), tagged.path());
    }
}
