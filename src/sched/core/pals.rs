//! PALS - Compensação de wakeup
//!
//! Loteria pura tem um viés estrutural: um processo que bloqueia com
//! frequência para esperas curtas de I/O não acumula nenhuma vantagem
//! enquanto dorme, então ao acordar espera, em média, bem mais do que sua
//! fatia de tickets sugere. O PALS corrige isso com um boost temporário de
//! peso concedido no wake, proporcional ao tempo bloqueado e limitado por um
//! teto.
//!
//! Regras:
//! - O boost é função monótona não-decrescente da espera, saturando em
//!   `BOOST_MAX`. Espera zero (re-wake imediato) dá exatamente 1.0.
//! - Cada wake SOBRESCREVE o boost anterior; ciclos rápidos de block/wake
//!   nunca acumulam.
//! - O boost é consumido: a cada vez que a task perde a CPU depois de ter
//!   rodado de fato, o excesso sobre 1.0 cai pela metade até voltar a 1.0.
//!   É compensação única pela oportunidade perdida, não privilégio
//!   permanente.

use crate::sched::config::{BOOST_MAX, BOOST_ONE, BOOST_SNAP, BOOST_STEP, BOOST_WINDOW};
use crate::sched::task::{Task, TaskFlags};

/// Boost para uma espera de `wait_ticks` bloqueado.
///
/// Linear na espera com saturação: `1.0 + wait × BOOST_STEP/BOOST_ONE`,
/// limitado a `BOOST_MAX`. A inclinação e o teto são calibrados pelos testes
/// estatísticos, não derivados de uma fórmula fechada.
#[inline]
pub fn boost_for_wait(wait_ticks: u64) -> u32 {
    let capped = wait_ticks.min(BOOST_WINDOW) as u32;
    let boost = BOOST_ONE + capped * BOOST_STEP;
    debug_assert!(boost <= BOOST_MAX);
    boost
}

/// Transição para Blocked: registra o instante do bloqueio.
pub fn on_block(task: &mut Task, now: u64) {
    task.last_block_time = now;
}

/// Transição Blocked → Ready (wake): calcula a espera e arma o boost.
///
/// Sobrescreve qualquer boost anterior. Marca `FRESH_WAKE` para o loop do
/// scheduler reconhecer o primeiro despacho pós-wake.
pub fn on_wake(task: &mut Task, now: u64) {
    let wait_ticks = now.saturating_sub(task.last_block_time);
    task.boost = boost_for_wait(wait_ticks);
    task.last_wake_time = now;
    task.flags.insert(TaskFlags::FRESH_WAKE);

    if task.boost > BOOST_ONE {
        crate::ktrace!("(PALS) Boost armado apos espera de ticks:", wait_ticks);
    }
}

/// Decaimento pós-execução: chamado quando a task perde a CPU depois de ter
/// rodado. Metade do excesso some a cada rodada; abaixo de `BOOST_SNAP`
/// volta a exatamente 1.0.
pub fn on_descheduled(task: &mut Task) {
    let excess = task.boost - BOOST_ONE;
    if excess == 0 {
        return;
    }
    let half = excess / 2;
    task.boost = if half < BOOST_SNAP { BOOST_ONE } else { BOOST_ONE + half };
}
