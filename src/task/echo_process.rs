//! Echo processing
//!
//! Drains the edge channel, pairs rising and falling timestamps into
//! flight times and publishes the resulting distance samples. A sensor
//! that never answers shows up here as receive timeouts, which just
//! loop back into the next wait; the display detects the silence
//! through its own timeout on the distance channel.

use defmt::info;
use embassy_time::{with_timeout, Duration};

use crate::system::{channels, measure::EchoPairing};

/// How long to wait for an edge before checking back in. Plain retry,
/// so a disconnected sensor idles this task instead of crashing it.
const EDGE_RECEIVE_TIMEOUT: Duration = Duration::from_millis(100);

/// Budget for handing a sample to the display. The measurement is
/// periodic, so a sample the stalled display cannot take is dropped.
const SAMPLE_SEND_TIMEOUT: Duration = Duration::from_millis(10);

/// Converts captured edges into distance samples
#[embassy_executor::task]
pub async fn echo_process() {
    let mut pairing = EchoPairing::new();
    info!("echo processing started");

    loop {
        let event = match with_timeout(EDGE_RECEIVE_TIMEOUT, channels::EDGE_EVENTS.receive()).await
        {
            Ok(event) => event,
            Err(_) => continue,
        };

        if let Some(sample) = pairing.record(event) {
            info!("{} cm", sample.centimeters);
            let _ = with_timeout(
                SAMPLE_SEND_TIMEOUT,
                channels::DISTANCE_SAMPLES.send(sample),
            )
            .await;
        }
    }
}
