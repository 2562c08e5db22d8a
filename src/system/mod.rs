//! Core measurement components shared across tasks
pub mod channels;
pub mod measure;
pub mod range;
#[cfg(target_os = "none")]
pub mod resources;
