//! Display-side range policy
//!
//! Classifies distance samples for rendering. The sensor is only rated
//! to a few meters, so anything beyond [`MAX_RANGE_CM`] is shown as out
//! of range rather than treated as an error. A missing sample (no
//! trigger signal or no distance within the wait budget) is the
//! disconnected state.

use crate::system::measure::DistanceSample;

/// Largest distance rendered as a numeric reading (boundary inclusive)
pub const MAX_RANGE_CM: f32 = 300.0;

/// Rightmost pixel column of the proportional bar (128 px wide panel)
pub const BAR_MAX_X: i32 = 127;

/// What the display should show for one refresh cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// A measurable distance in centimeters
    InRange(f32),
    /// The sensor answered, but the object is beyond [`MAX_RANGE_CM`]
    OutOfRange,
    /// No measurement arrived within the wait budget
    SensorDisconnected,
}

impl Reading {
    /// Applies the range policy to a delivered sample.
    pub fn classify(sample: DistanceSample) -> Self {
        if sample.centimeters <= MAX_RANGE_CM {
            Self::InRange(sample.centimeters)
        } else {
            Self::OutOfRange
        }
    }

    /// End column of the proportional bar, mapping 0..=300 cm linearly
    /// onto the panel width. Only in-range readings draw a bar.
    pub fn bar_end(&self) -> Option<i32> {
        match self {
            Self::InRange(cm) => Some((cm * BAR_MAX_X as f32 / MAX_RANGE_CM) as i32),
            Self::OutOfRange | Self::SensorDisconnected => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(centimeters: f32) -> DistanceSample {
        DistanceSample { centimeters }
    }

    #[test]
    fn range_boundary_is_inclusive() {
        assert_eq!(Reading::classify(sample(300.0)), Reading::InRange(300.0));
        assert_eq!(Reading::classify(sample(300.01)), Reading::OutOfRange);
        assert_eq!(Reading::classify(sample(0.0)), Reading::InRange(0.0));
    }

    #[test]
    fn bar_spans_the_panel_linearly() {
        assert_eq!(Reading::InRange(0.0).bar_end(), Some(0));
        assert_eq!(Reading::InRange(300.0).bar_end(), Some(BAR_MAX_X));
        assert_eq!(Reading::InRange(150.0).bar_end(), Some(63));
    }

    #[test]
    fn only_in_range_readings_draw_a_bar() {
        assert_eq!(Reading::OutOfRange.bar_end(), None);
        assert_eq!(Reading::SensorDisconnected.bar_end(), None);
    }
}
