//! Tempo do sistema.

pub mod jiffies;
