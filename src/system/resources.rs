//! Hardware Resource Management
//!
//! Assigns pins and peripherals to the tasks that own them. Each task
//! receives its own resource group; nothing here is shared, so no
//! locking is needed beyond the pipeline channels.
//!
//! # Wiring
//! - HC-SR04: trigger on GPIO 17, echo on GPIO 16
//! - SSD1306 128x32: I2C0 with SDA on GPIO 12, SCL on GPIO 13

use assign_resources::assign_resources;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::InterruptHandler as I2cInterruptHandler;
use embassy_rp::peripherals::{self, I2C0};

assign_resources! {
    /// Sensor trigger output
    trigger: TriggerResources {
        pin: PIN_17,
    },
    /// Sensor echo input, edge-interrupt capable
    echo: EchoResources {
        pin: PIN_16,
    },
    /// Status display bus
    display: DisplayResources {
        i2c: I2C0,
        sda_pin: PIN_12,
        scl_pin: PIN_13,
    },
}

bind_interrupts!(pub struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});
