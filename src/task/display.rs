//! Status display
//!
//! Renders the latest reading on an SSD1306 128x32 panel. Each refresh
//! waits for the cycle-started signal and then for a distance sample,
//! both with a generous timeout; if either wait runs out the sensor is
//! presumed disconnected and the display says so instead of holding a
//! stale value.

use core::fmt::Write;

use defmt::{warn, Debug2Format};
use embassy_time::{with_timeout, Duration, Timer};
use embedded_graphics::{
    mono_font::{ascii::FONT_9X18_BOLD, MonoTextStyleBuilder},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::{Baseline, Text},
};
use heapless::String;
use ssd1306::{prelude::*, I2CDisplayInterface, Ssd1306Async};

use crate::system::{
    channels,
    range::Reading,
    resources::{DisplayResources, Irqs},
};

/// Wait budget for the trigger signal and again for the sample. Twenty
/// cycles fit in here, so only a genuinely silent sensor trips it.
const READING_TIMEOUT: Duration = Duration::from_millis(1000);

/// Vertical position of the proportional bar
const BAR_Y: i32 = 27;

/// Waits out one measurement cycle and classifies the result.
async fn next_reading() -> Reading {
    if with_timeout(READING_TIMEOUT, channels::CYCLE_STARTED.wait())
        .await
        .is_err()
    {
        return Reading::SensorDisconnected;
    }
    match with_timeout(READING_TIMEOUT, channels::DISTANCE_SAMPLES.receive()).await {
        Ok(sample) => Reading::classify(sample),
        Err(_) => Reading::SensorDisconnected,
    }
}

/// Shows the current distance reading on the OLED
#[embassy_executor::task]
pub async fn display(r: DisplayResources) {
    let i2c = embassy_rp::i2c::I2c::new_async(
        r.i2c,
        r.scl_pin,
        r.sda_pin,
        Irqs,
        embassy_rp::i2c::Config::default(),
    );
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306Async::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();

    // Report init failures and keep trying rather than going dark
    // silently; the panel may simply not be powered yet.
    while let Err(e) = display.init().await {
        warn!("display init failed: {}", Debug2Format(&e));
        Timer::after(Duration::from_secs(1)).await;
    }

    let text_style = MonoTextStyleBuilder::new()
        .font(&FONT_9X18_BOLD)
        .text_color(BinaryColor::On)
        .build();

    loop {
        let reading = next_reading().await;

        let mut line: String<20> = String::new();
        let _ = match reading {
            Reading::InRange(cm) => write!(line, "{cm:.2} cm"),
            Reading::OutOfRange => write!(line, "Out of range"),
            Reading::SensorDisconnected => write!(line, "Disconnected"),
        };

        display.clear_buffer();
        Text::with_baseline(&line, Point::zero(), text_style, Baseline::Top)
            .draw(&mut display)
            .unwrap();
        if let Some(bar_end) = reading.bar_end() {
            Line::new(Point::new(0, BAR_Y), Point::new(bar_end, BAR_Y))
                .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
                .draw(&mut display)
                .unwrap();
        }

        if let Err(e) = display.flush().await {
            warn!("display flush failed: {}", Debug2Format(&e));
        }
    }
}
