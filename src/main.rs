//! Firmware entry point
//!
//! Initializes the RP2350, starts the high-priority interrupt executor
//! for edge capture and spawns the measurement tasks.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use embassy_executor::{InterruptExecutor, Spawner};
    use embassy_rp::block::ImageDef;
    use embassy_rp::config::Config;
    use embassy_rp::interrupt;
    use embassy_rp::interrupt::{InterruptExt, Priority};
    use pico_ranger::split_resources;
    use pico_ranger::system::resources::{
        AssignedResources, DisplayResources, EchoResources, TriggerResources,
    };
    use pico_ranger::task::{
        display::display, echo_capture::echo_capture, echo_process::echo_process,
        trigger_pulse::trigger_pulse,
    };
    use {defmt_rtt as _, panic_probe as _};

    /// Firmware image type for bootloader
    #[link_section = ".start_block"]
    #[used]
    pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

    /// Hosts the edge capture task; preempts the thread-mode executor
    /// so edges are timestamped with minimal latency.
    static EDGE_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

    #[interrupt]
    unsafe fn SWI_IRQ_1() {
        EDGE_EXECUTOR.on_interrupt()
    }

    /// Firmware entry point
    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        let p = embassy_rp::init(Config::default());

        // Split the resources into separate groups, one per task.
        let r = split_resources!(p);

        // Edge capture goes on the interrupt executor so it wins over
        // every other task the moment the echo line moves.
        interrupt::SWI_IRQ_1.set_priority(Priority::P2);
        let edge_spawner = EDGE_EXECUTOR.start(interrupt::SWI_IRQ_1);
        edge_spawner.spawn(echo_capture(r.echo)).unwrap();

        spawner.spawn(trigger_pulse(r.trigger)).unwrap();
        spawner.spawn(echo_process()).unwrap();
        spawner.spawn(display(r.display)).unwrap();
    }
}

// The binary only does something useful on the target; building it for
// the host keeps `cargo test` runnable there.
#[cfg(not(target_os = "none"))]
fn main() {}
