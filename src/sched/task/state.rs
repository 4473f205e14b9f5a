//! Estados de task

/// Estado de uma task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Recém criada, não executou ainda
    Created,
    /// Pronta para executar (participa do sorteio)
    Ready,
    /// Executando em alguma CPU
    Running,
    /// Bloqueada esperando algo (sleep, I/O)
    Blocked,
    /// Terminada, esperando cleanup
    Zombie,
    /// Morta, pode ser liberada
    Dead,
}

impl TaskState {
    /// Verifica se entra no sorteio da loteria.
    ///
    /// Running fica de fora: quem está com a CPU não concorre por ela; volta
    /// ao conjunto quando for desescalonada.
    pub const fn in_draw(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Verifica se a task ainda ocupa (ou pode ocupar) CPU
    pub const fn is_runnable(self) -> bool {
        matches!(self, Self::Ready | Self::Running)
    }
}
