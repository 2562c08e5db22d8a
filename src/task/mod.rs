pub mod display;
pub mod echo_capture;
pub mod echo_process;
pub mod trigger_pulse;
