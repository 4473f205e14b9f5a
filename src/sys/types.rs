//! Tipos fundamentais do sistema

/// Process ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Pid(pub u32);

impl Pid {
    /// PID reservado para a idle task do kernel (nunca entra no sorteio).
    pub const IDLE: Pid = Pid(0);
    /// Primeiro processo de usuário.
    pub const INIT: Pid = Pid(1);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for Pid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
