//! Edge events and distance computation
//!
//! The HC-SR04 answers a trigger pulse with an echo pulse whose width is
//! the round-trip flight time of the sound burst. The interrupt side
//! timestamps both edges of that pulse; this module pairs the timestamps
//! and converts the difference into a distance.
//!
//! # Edge Pairing
//! Each captured edge carries its polarity, and [`EchoPairing`] matches a
//! rising edge to the next falling edge explicitly. Interrupts can get
//! dropped when the edge queue is full, so the state machine must stay
//! consistent with missing events: a repeated rising edge replaces the
//! pending one, and a falling edge without a pending rise is discarded.
//! A lost edge therefore costs at most one sample and can never wedge
//! the pipeline.

/// Microseconds-to-centimeters calibration constant for sound in air.
/// The division by two in the conversion accounts for the round trip.
pub const SOUND_SPEED_CM_PER_US: f32 = 0.0343;

/// Direction of a transition on the echo line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolarity {
    /// Low-to-high, start of the echo pulse
    Rising,
    /// High-to-low, end of the echo pulse
    Falling,
}

/// A timestamped transition of the echo line, produced in interrupt context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEvent {
    /// Monotonic microseconds since boot at the time of the transition
    pub timestamp_us: u64,
    /// Captured level after the transition
    pub polarity: EdgePolarity,
}

/// A single computed distance reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSample {
    /// Distance to the reflecting object in centimeters
    pub centimeters: f32,
}

/// Converts an echo pulse width into a distance.
pub fn distance_from_flight_time(flight_time_us: u64) -> DistanceSample {
    DistanceSample {
        centimeters: flight_time_us as f32 * SOUND_SPEED_CM_PER_US / 2.0,
    }
}

/// Pairs successive echo edges into distance samples.
///
/// Holds at most the timestamp of the last unmatched rising edge.
#[derive(Debug)]
pub struct EchoPairing {
    pending_rise_us: Option<u64>,
}

impl EchoPairing {
    pub const fn new() -> Self {
        Self {
            pending_rise_us: None,
        }
    }

    /// Feeds one captured edge into the state machine.
    ///
    /// Returns a sample when the edge completes a rise/fall pair. Edges
    /// that do not fit the expected alternation (repeated polarity, a
    /// falling edge with nothing pending, timestamps out of order) are
    /// absorbed without producing output.
    pub fn record(&mut self, event: EdgeEvent) -> Option<DistanceSample> {
        match event.polarity {
            EdgePolarity::Rising => {
                self.pending_rise_us = Some(event.timestamp_us);
                None
            }
            EdgePolarity::Falling => self.pending_rise_us.take().and_then(|rise_us| {
                event
                    .timestamp_us
                    .checked_sub(rise_us)
                    .map(distance_from_flight_time)
            }),
        }
    }
}

impl Default for EchoPairing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rise(timestamp_us: u64) -> EdgeEvent {
        EdgeEvent {
            timestamp_us,
            polarity: EdgePolarity::Rising,
        }
    }

    fn fall(timestamp_us: u64) -> EdgeEvent {
        EdgeEvent {
            timestamp_us,
            polarity: EdgePolarity::Falling,
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn converts_known_flight_times() {
        assert_close(distance_from_flight_time(1000).centimeters, 17.15);
        assert_close(distance_from_flight_time(0).centimeters, 0.0);
    }

    #[test]
    fn pairs_rise_and_fall_into_a_sample() {
        let mut pairing = EchoPairing::new();
        assert_eq!(pairing.record(rise(1000)), None);
        let sample = pairing.record(fall(3000)).unwrap();
        assert_close(sample.centimeters, 34.3);
    }

    #[test]
    fn emits_one_sample_per_pair() {
        let mut pairing = EchoPairing::new();
        let mut samples = 0;
        for (rise_us, fall_us) in [(100, 600), (50_100, 51_100), (100_100, 100_900)] {
            assert_eq!(pairing.record(rise(rise_us)), None);
            assert!(pairing.record(fall(fall_us)).is_some());
            samples += 1;
        }
        assert_eq!(samples, 3);
    }

    #[test]
    fn falling_edge_without_pending_rise_is_discarded() {
        let mut pairing = EchoPairing::new();
        assert_eq!(pairing.record(fall(2000)), None);
        // The discard must not poison the next cycle.
        pairing.record(rise(3000));
        assert!(pairing.record(fall(3500)).is_some());
    }

    #[test]
    fn repeated_rising_edge_keeps_the_newer_timestamp() {
        // A dropped falling edge leaves a stale rise behind; the next
        // cycle's rise must replace it.
        let mut pairing = EchoPairing::new();
        pairing.record(rise(1000));
        pairing.record(rise(50_000));
        let sample = pairing.record(fall(51_000)).unwrap();
        assert_close(sample.centimeters, 17.15);
    }

    #[test]
    fn out_of_order_timestamps_are_discarded() {
        let mut pairing = EchoPairing::new();
        pairing.record(rise(5000));
        assert_eq!(pairing.record(fall(4000)), None);
        // Pending rise is consumed either way; a lone fall stays silent.
        assert_eq!(pairing.record(fall(6000)), None);
    }
}
