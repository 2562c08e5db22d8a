//! Ultrasonic range monitor for the Raspberry Pi Pico 2.
//!
//! Measures distance with an HC-SR04 sensor and shows the result on an
//! SSD1306 display. The measurement pipeline:
//!
//! 1. [`task::trigger_pulse`] periodically fires the sensor and raises a
//!    cycle-started signal for the display.
//! 2. [`task::echo_capture`] runs on a high-priority interrupt executor and
//!    timestamps every edge on the echo line into a bounded channel.
//! 3. [`task::echo_process`] pairs rising and falling edges into flight
//!    times and converts them to centimeters.
//! 4. [`task::display`] waits on the trigger signal and the distance
//!    channel together, so a silent sensor shows up as "disconnected"
//!    instead of a stale reading.
//!
//! The pure measurement logic in [`system`] builds for the host as well,
//! so `cargo test` runs without a target board attached.

#![cfg_attr(not(test), no_std)]

/// Measurement logic, channels and hardware resource assignment
pub mod system;
/// Task implementations
#[cfg(target_os = "none")]
pub mod task;
