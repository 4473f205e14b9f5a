//! Varredura da fila de sono
//!
//! Não há fila física: os dormentes são os registros Blocked com `wake_at`
//! preenchido, e o caminho do timer varre a tabela acordando os vencidos.
//! Com dezenas de processos a varredura linear é mais barata que manter uma
//! heap de deadlines coerente entre CPUs.

use super::scheduler::CpuScheduler;
use super::table::ProcessTable;
use crate::core::time::jiffies;

/// Acorda todos os dormentes com deadline vencida.
///
/// Chamado a cada tick, depois de `inc_jiffies`. Se alguém acordou, arma
/// `need_resched` na CPU chamadora: o recém-acordado chega com boost PALS e
/// deve disputar um sorteio o quanto antes, não daqui a um quantum inteiro.
///
/// Roda em contexto de interrupção: a varredura só acontece se o lock da
/// tabela está livre. Travar aqui enquanto esta própria CPU segura o lock
/// dentro de um sorteio seria deadlock; um tick de atraso no wake não é.
pub fn check_sleep_queue(table: &ProcessTable, cpu: &CpuScheduler<'_>) {
    let now = jiffies::get_jiffies();
    let Some(woken) = table.try_wake_expired(now) else {
        return;
    };
    if woken > 0 {
        crate::ktrace!("(Sched) Dormentes acordados pelo timer:", woken as u64);
        cpu.set_need_resched();
    }
}
