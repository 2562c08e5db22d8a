//! Measurement pipeline channels
//!
//! Defines the only state shared across execution contexts: two bounded
//! FIFO channels and the cycle-start signal. The edge channel is the
//! sole bridge out of the interrupt executor, so its producer side must
//! never block; everything else synchronizes through receive/send with
//! timeouts at the call sites.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use crate::system::measure::{DistanceSample, EdgeEvent};

/// Capacity of both pipeline queues. Bounds memory if a consumer stalls;
/// overflow drops the newest item instead of blocking the producer.
pub const QUEUE_DEPTH: usize = 32;

/// Timestamped echo edges, pushed from the interrupt executor and
/// drained by the echo processing task
pub static EDGE_EVENTS: Channel<CriticalSectionRawMutex, EdgeEvent, QUEUE_DEPTH> = Channel::new();

/// Computed distance samples, handed from the echo processing task to
/// the display
pub static DISTANCE_SAMPLES: Channel<CriticalSectionRawMutex, DistanceSample, QUEUE_DEPTH> =
    Channel::new();

/// Raised once per measurement cycle right after the trigger pulse.
/// A signal holds at most one token, so raises collapse until the
/// display consumes it.
pub static CYCLE_STARTED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Records a captured edge without blocking.
///
/// Safe to call from the interrupt executor: a full queue drops the
/// event and returns `false`, which the pairing logic tolerates.
pub fn capture_edge(event: EdgeEvent) -> bool {
    EDGE_EVENTS.try_send(event).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::measure::EdgePolarity;

    fn edge(timestamp_us: u64) -> EdgeEvent {
        EdgeEvent {
            timestamp_us,
            polarity: EdgePolarity::Rising,
        }
    }

    #[test]
    fn edge_channel_preserves_fifo_order() {
        let channel: Channel<CriticalSectionRawMutex, EdgeEvent, QUEUE_DEPTH> = Channel::new();
        for timestamp_us in [1, 2, 3] {
            channel.try_send(edge(timestamp_us)).unwrap();
        }
        for timestamp_us in [1, 2, 3] {
            assert_eq!(channel.try_receive().unwrap(), edge(timestamp_us));
        }
    }

    #[test]
    fn full_channel_rejects_without_blocking() {
        let channel: Channel<CriticalSectionRawMutex, EdgeEvent, QUEUE_DEPTH> = Channel::new();
        for timestamp_us in 0..QUEUE_DEPTH as u64 {
            channel.try_send(edge(timestamp_us)).unwrap();
        }
        assert!(channel.try_send(edge(99)).is_err());
        // The queued events survive the overflow untouched.
        assert_eq!(channel.try_receive().unwrap(), edge(0));
    }

    #[test]
    fn signal_collapses_repeated_raises() {
        let signal: Signal<CriticalSectionRawMutex, ()> = Signal::new();
        signal.signal(());
        signal.signal(());
        assert!(signal.try_take().is_some());
        assert!(signal.try_take().is_none());
    }
}
