//! Utilitários internos do escalonador.

pub mod random;

pub use random::Xorshift64;
