//! Echo edge capture
//!
//! Timestamps every transition of the echo line. This task is spawned
//! on the high-priority interrupt executor, so it preempts the ordinary
//! tasks and must stay short and non-blocking: read the clock, read the
//! level, try to enqueue. If the edge queue is full the event is lost,
//! which the pairing logic downstream is built to tolerate.

use embassy_rp::gpio::{Input, Pull};
use embassy_time::Instant;

use crate::system::{
    channels,
    measure::{EdgeEvent, EdgePolarity},
    resources::EchoResources,
};

/// Captures echo line edges into the edge channel
#[embassy_executor::task]
pub async fn echo_capture(r: EchoResources) {
    let mut echo = Input::new(r.pin, Pull::None);

    loop {
        echo.wait_for_any_edge().await;
        let timestamp_us = Instant::now().as_micros();
        let polarity = if echo.is_high() {
            EdgePolarity::Rising
        } else {
            EdgePolarity::Falling
        };
        channels::capture_edge(EdgeEvent {
            timestamp_us,
            polarity,
        });
    }
}
