//! Segment layout: partitioning the wheel into equal prize arcs
//!
//! The wheel is an annulus split into `segment_count` equal angular slices.
//! A segment is defined by:
//! - start_deg, end_deg: angular extent in wheel space (0° at 12 o'clock,
//!   increasing clockwise), an exact partition of the full turn
//! - inner/outer radius: radial extent of the annulus
//! - pad_deg: visual gap applied only when sampling edges, never to the
//!   logical extent used for winner resolution

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{Prize, SpinTuning, WheelConfig};
use crate::consts::FULL_TURN;
use crate::error::WheelError;
use crate::{normalize_deg, wheel_point};

/// Angular width of one segment: 360 / segment_count
#[inline]
pub fn angle_per_segment(segment_count: usize) -> f32 {
    FULL_TURN / segment_count as f32
}

/// Fixed knob offset: half a segment, so the pointer sits over segment
/// midpoints rather than boundaries. Presentational; renderers pre-rotate
/// the wheel by this amount.
#[inline]
pub fn angle_offset(segment_count: usize) -> f32 {
    angle_per_segment(segment_count) / 2.0
}

/// One prize arc of the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Position in the wheel, in [0, segment_count)
    pub index: usize,
    /// Start of the logical angular extent (degrees)
    pub start_deg: f32,
    /// End of the logical angular extent (degrees)
    pub end_deg: f32,
    /// Visual half-gap trimmed from each side when sampling edges (degrees)
    pub pad_deg: f32,
    /// Inner radius of the annulus band
    pub inner_radius: f32,
    /// Outer radius of the annulus band
    pub outer_radius: f32,
    /// Label/image anchor: mid-angle at mid-radius of the sector
    pub centroid: Vec2,
    /// Fill color, cycled from the palette
    pub color: String,
    /// Prize assigned to this segment
    pub prize: Prize,
}

impl Segment {
    /// Angular span of the logical extent (degrees)
    #[inline]
    pub fn span_deg(&self) -> f32 {
        self.end_deg - self.start_deg
    }

    /// Mid-angle of the segment (degrees)
    #[inline]
    pub fn midpoint_deg(&self) -> f32 {
        self.start_deg + self.span_deg() / 2.0
    }

    /// Check if a wheel-space angle falls inside this segment's logical
    /// extent. The extent is half-open `[start, end)` so adjacent segments
    /// never both claim a boundary.
    pub fn contains_angle(&self, deg: f32) -> bool {
        let deg = normalize_deg(deg);
        deg >= self.start_deg && deg < self.end_deg
    }

    /// Sample points along the outer edge, pad applied (for rendering)
    pub fn sample_outer_edge(&self, num_points: usize) -> Vec<Vec2> {
        self.sample_edge(self.outer_radius, num_points)
    }

    /// Sample points along the inner edge, pad applied
    pub fn sample_inner_edge(&self, num_points: usize) -> Vec<Vec2> {
        self.sample_edge(self.inner_radius, num_points)
    }

    fn sample_edge(&self, radius: f32, num_points: usize) -> Vec<Vec2> {
        let start = self.start_deg + self.pad_deg / 2.0;
        let end = self.end_deg - self.pad_deg / 2.0;
        let span = (end - start).max(0.0);

        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                wheel_point(radius, start + t * span)
            })
            .collect()
    }
}

/// Partition the full turn into `config.segment_count` equal arcs and assign
/// each one a color and prize.
///
/// Arc `i` spans `[i * angle_per_segment, (i+1) * angle_per_segment)` in
/// index order; colors cycle through the palette; the centroid sits at the
/// sector's mid-angle and mid-radius for label placement.
pub fn build_segments(
    config: &WheelConfig,
    tuning: &SpinTuning,
) -> Result<Vec<Segment>, WheelError> {
    config.validate()?;
    tuning.validate()?;

    let step = angle_per_segment(config.segment_count);
    let mid_radius = (tuning.inner_radius + tuning.outer_radius) / 2.0;

    let segments = config
        .prizes
        .iter()
        .enumerate()
        .map(|(i, prize)| {
            let start_deg = i as f32 * step;
            // Pin the final arc to exactly one full turn so the partition
            // closes even when `count * step` rounds short in f32.
            let end_deg = if i + 1 == config.segment_count {
                FULL_TURN
            } else {
                (i + 1) as f32 * step
            };
            Segment {
                index: i,
                start_deg,
                end_deg,
                pad_deg: tuning.pad_deg,
                inner_radius: tuning.inner_radius,
                outer_radius: tuning.outer_radius,
                centroid: wheel_point(mid_radius, start_deg + step / 2.0),
                color: config.palette[i % config.palette.len()].clone(),
                prize: prize.clone(),
            }
        })
        .collect();

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WheelConfig;
    use proptest::prelude::*;

    fn config_with_count(segment_count: usize) -> WheelConfig {
        WheelConfig::from_prizes(
            (0..segment_count)
                .map(|i| Prize::new(format!("prize-{i}")))
                .collect(),
            vec!["red".into(), "green".into(), "blue".into()],
        )
    }

    #[test]
    fn test_segments_tile_full_turn() {
        for count in 2..=20 {
            let segments = build_segments(&config_with_count(count), &SpinTuning::default())
                .unwrap_or_else(|e| panic!("count {count}: {e}"));
            assert_eq!(segments.len(), count);

            let total: f32 = segments.iter().map(|s| s.span_deg()).sum();
            assert!((total - 360.0).abs() < 1e-3, "count {count}: sum {total}");

            // Contiguous, ordered, no gaps or overlaps
            assert_eq!(segments[0].start_deg, 0.0);
            for pair in segments.windows(2) {
                assert_eq!(pair[0].end_deg, pair[1].start_deg);
                assert_eq!(pair[0].index + 1, pair[1].index);
            }
        }
    }

    #[test]
    fn test_colors_cycle_through_palette() {
        let segments = build_segments(&config_with_count(7), &SpinTuning::default()).unwrap();
        assert_eq!(segments[0].color, "red");
        assert_eq!(segments[2].color, "blue");
        assert_eq!(segments[3].color, "red"); // wrapped
        assert_eq!(segments[6].color, "red");
    }

    #[test]
    fn test_prizes_assigned_in_order() {
        let segments = build_segments(&config_with_count(5), &SpinTuning::default()).unwrap();
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(segment.prize.label, format!("prize-{i}"));
        }
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let tuning = SpinTuning::default();
        assert!(matches!(
            build_segments(&config_with_count(1), &tuning),
            Err(WheelError::InvalidConfig(_))
        ));

        let mut config = config_with_count(4);
        config.prizes.pop();
        assert!(matches!(
            build_segments(&config, &tuning),
            Err(WheelError::InvalidConfig(_))
        ));

        let mut config = config_with_count(4);
        config.palette.clear();
        assert!(matches!(
            build_segments(&config, &tuning),
            Err(WheelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_centroid_at_sector_middle() {
        let tuning = SpinTuning {
            inner_radius: 20.0,
            outer_radius: 180.0,
            ..Default::default()
        };
        let segments = build_segments(&config_with_count(4), &tuning).unwrap();

        // First quadrant segment: mid-angle 45°, mid-radius 100
        let centroid = segments[0].centroid;
        let expected = wheel_point(100.0, 45.0);
        assert!((centroid - expected).length() < 1e-3);
        assert!(centroid.x > 0.0 && centroid.y < 0.0); // upper-right in screen space
    }

    #[test]
    fn test_contains_angle_half_open() {
        let segments = build_segments(&config_with_count(4), &SpinTuning::default()).unwrap();
        assert!(segments[0].contains_angle(0.0));
        assert!(segments[0].contains_angle(89.9));
        assert!(!segments[0].contains_angle(90.0));
        assert!(segments[1].contains_angle(90.0));
        // Wraps: 360° is the start of segment 0 again
        assert!(segments[0].contains_angle(360.0));
        assert!(segments[3].contains_angle(-10.0));
    }

    #[test]
    fn test_edge_sampling_respects_pad() {
        let tuning = SpinTuning {
            pad_deg: 2.0,
            ..Default::default()
        };
        let segments = build_segments(&config_with_count(4), &tuning).unwrap();
        let edge = segments[0].sample_outer_edge(16);
        assert_eq!(edge.len(), 16);

        // First sample sits half a pad inside the segment start
        let first = edge[0];
        let expected = wheel_point(tuning.outer_radius, 1.0);
        assert!((first - expected).length() < 1e-3);

        // All samples stay on the outer radius
        for p in &edge {
            assert!((p.length() - tuning.outer_radius).abs() < 1e-3);
        }
    }

    proptest! {
        #[test]
        fn prop_every_angle_belongs_to_exactly_one_segment(
            count in 2usize..=20,
            deg in -720.0f32..720.0,
        ) {
            let segments = build_segments(&config_with_count(count), &SpinTuning::default())
                .unwrap();
            let owners = segments.iter().filter(|s| s.contains_angle(deg)).count();
            prop_assert_eq!(owners, 1);
        }

        #[test]
        fn prop_centroids_inside_annulus(count in 2usize..=20) {
            let tuning = SpinTuning::default();
            let segments = build_segments(&config_with_count(count), &tuning).unwrap();
            for segment in &segments {
                let r = segment.centroid.length();
                prop_assert!(r > tuning.inner_radius && r < tuning.outer_radius);
            }
        }
    }
}
