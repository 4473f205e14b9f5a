//! Constantes de configuração do Scheduler

/// Mínimo de tickets de um processo vivo. Nunca zero: garante que a soma de
/// pesos do conjunto pronto é positiva sempre que ele não está vazio.
pub const MIN_TICKETS: u32 = 1;

/// Teto de tickets por processo. Limita o peso que um único processo pode
/// reivindicar no sorteio. Potência de dois acima de 10^6 para aceitar os
/// valores grandes usados pelas cargas de benchmark.
pub const MAX_TICKETS: u32 = 1 << 20;

/// Tickets de um processo raiz recém-criado (filhos herdam do pai).
pub const DEFAULT_TICKETS: u32 = 1;

/// Quantum padrão (Timeslice) em ticks do timer
pub const DEFAULT_QUANTUM: u64 = 10;

// ---------------------------------------------------------------------------
// PALS - compensação de wakeup em ponto fixo
// ---------------------------------------------------------------------------
// O boost é um multiplicador em ponto fixo com 8 bits fracionários:
// BOOST_ONE representa 1.0. Peso efetivo = (tickets * boost) >> BOOST_SHIFT.

/// Bits fracionários do boost.
pub const BOOST_SHIFT: u32 = 8;

/// Multiplicador 1.0 (sem compensação).
pub const BOOST_ONE: u32 = 1 << BOOST_SHIFT;

/// Teto do multiplicador (4.0). Nenhum wake isolado domina o sorteio.
pub const BOOST_MAX: u32 = 4 * BOOST_ONE;

/// Acréscimo de boost por tick bloqueado (1/16 por tick).
pub const BOOST_STEP: u32 = 16;

/// Janela de espera (em ticks) em que o boost satura no teto.
pub const BOOST_WINDOW: u64 = ((BOOST_MAX - BOOST_ONE) / BOOST_STEP) as u64;

/// Abaixo deste excesso sobre 1.0, o decay encerra e o boost volta a exato
/// BOOST_ONE (evita cauda infinita da divisão por dois).
pub const BOOST_SNAP: u32 = 4;
