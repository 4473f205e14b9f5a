//! Gerador pseudo-aleatório para o sorteio de tickets.
//!
//! Xorshift de 64 bits: rápido, sem estado compartilhado e bom o suficiente
//! para distribuir a massa de tickets uniformemente. O sorteio NÃO é uma
//! fronteira de segurança; o que importa é a qualidade estatística e a
//! reprodutibilidade sob seed fixa nos testes.
//!
//! Cada CPU carrega sua própria instância dentro do `CpuScheduler`, então
//! não há corrida no estado do gerador.

/// PRNG xorshift64. Estado nunca é zero.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Cria um gerador a partir da seed.
    ///
    /// Seed zero degeneraria o xorshift (ficaria preso em zero), então é
    /// remapeada para uma constante de mistura fixa.
    pub const fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    /// Próximo valor de 64 bits.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Valor uniforme em `[0, bound)`.
    ///
    /// Redução por módulo: o viés para bounds pequenos frente a 2^64 é
    /// desprezível para o sorteio de tickets.
    #[inline]
    pub fn next_below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "next_below com bound zero");
        self.next_u64() % bound
    }
}
