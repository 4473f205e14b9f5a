//! Infraestrutura central da crate: logging e contador de ticks.

pub mod debug;
pub mod time;
