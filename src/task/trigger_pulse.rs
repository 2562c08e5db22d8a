//! Measurement cycle trigger
//!
//! Fires the HC-SR04 by holding its trigger input high for a fixed
//! pulse width, once per cycle. Right after each pulse the task raises
//! the cycle-started signal so the display knows a measurement is under
//! way even if no echo ever comes back.

use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Timer};

use crate::system::{channels, resources::TriggerResources};

/// Width of the trigger pulse the sensor expects
const PULSE_WIDTH: Duration = Duration::from_millis(1);

/// Pause between measurement cycles (50ms keeps well clear of the
/// previous echo while still refreshing ~20 times per second)
const CYCLE_PERIOD: Duration = Duration::from_millis(50);

/// Drives the trigger pin and announces each new measurement cycle
#[embassy_executor::task]
pub async fn trigger_pulse(r: TriggerResources) {
    let mut trigger = Output::new(r.pin, Level::Low);

    loop {
        trigger.set_high();
        Timer::after(PULSE_WIDTH).await;
        trigger.set_low();

        // Non-blocking; an unconsumed token from the previous cycle is
        // simply replaced.
        channels::CYCLE_STARTED.signal(());

        Timer::after(CYCLE_PERIOD).await;
    }
}
