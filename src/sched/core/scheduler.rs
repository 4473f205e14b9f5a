//! Loop do Scheduler (uma instância por CPU)
//!
//! Máquina de estados por CPU: `IDLE → SELECTING → RUNNING →
//! (PREEMPTED|BLOCKED|EXITED) → SELECTING → ...`. O estado é implícito:
//! `current == None` é IDLE, `Some(pid)` é RUNNING; SELECTING é o interior
//! de [`CpuScheduler::schedule`].
//!
//! Em cada ponto de escalonamento (quantum expirado, yield voluntário,
//! block ou exit do processo corrente) o loop: (a) faz o bookkeeping do
//! processo de saída, inclusive timestamp de bloqueio via PALS; (b) invoca o
//! seletor de loteria; (c) despacha o vencedor com quantum novo; (d) se não
//! há vencedor, a CPU fica ociosa até a próxima interrupção.
//!
//! Esta crate decide QUEM roda; o context switch em si é executado pela
//! camada de arquitetura do kernel com o `Pid` retornado.

use core::sync::atomic::{AtomicBool, Ordering};

use super::{lottery, pals, sleep_queue, table::ProcessTable};
use crate::core::time::jiffies;
use crate::klib::Xorshift64;
use crate::sched::task::{TaskFlags, TaskState};
use crate::sys::types::Pid;

/// Seed de boot do sorteio. Cada CPU mistura seu id por cima, então os
/// sorteios das CPUs são descorrelacionados mesmo sem fonte de entropia.
const BOOT_SEED: u64 = 0x5DEE_CE66_D121_CC05;

/// Loop de escalonamento de uma CPU sobre a tabela compartilhada.
pub struct CpuScheduler<'t> {
    cpu_id: u32,
    table: &'t ProcessTable,
    rng: Xorshift64,
    current: Option<Pid>,
    need_resched: AtomicBool,
}

impl<'t> CpuScheduler<'t> {
    /// Cria o loop desta CPU. A tabela é dependência explícita: nada de
    /// estado global ambiente.
    pub fn new(cpu_id: u32, table: &'t ProcessTable) -> Self {
        Self::with_seed(cpu_id, table, BOOT_SEED)
    }

    /// Variante com seed fixa, para sorteios reproduzíveis em teste.
    pub fn with_seed(cpu_id: u32, table: &'t ProcessTable, seed: u64) -> Self {
        let mixed = seed ^ ((cpu_id as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            cpu_id,
            table,
            rng: Xorshift64::new(mixed),
            current: None,
            need_resched: AtomicBool::new(false),
        }
    }

    pub fn cpu_id(&self) -> u32 {
        self.cpu_id
    }

    /// Processo atualmente despachado nesta CPU.
    pub fn current(&self) -> Option<Pid> {
        self.current
    }

    /// Flag de preempção pendente.
    pub fn need_resched(&self) -> bool {
        self.need_resched.load(Ordering::Acquire)
    }

    /// Sinaliza que esta CPU precisa reescalonar no próximo ponto seguro.
    pub fn set_need_resched(&self) {
        self.need_resched.store(true, Ordering::Release);
    }

    // ------------------------------------------------------------------
    // Pontos de escalonamento
    // ------------------------------------------------------------------

    /// Chamado a cada tick do relógio de hardware, depois de `inc_jiffies`.
    ///
    /// Acorda dormentes com deadline vencida e contabiliza o quantum do
    /// processo corrente; quando o quantum acaba, arma `need_resched`.
    pub fn timer_tick(&self) {
        sleep_queue::check_sleep_queue(self.table, self);

        let Some(pid) = self.current else { return };

        // try_lock: em contexto de interrupção não podemos travar se outra
        // CPU está no meio de um sorteio. Perder um tick de contabilidade é
        // inofensivo.
        let Some(mut inner) = self.table.try_lock() else {
            return;
        };
        let expired = match inner.task_mut(pid) {
            Some(task) if task.state == TaskState::Running => {
                if task.accounting.quantum_left > 0 {
                    task.accounting.quantum_left -= 1;
                }
                task.accounting.quantum_left == 0
            }
            _ => false,
        };
        drop(inner);

        if expired {
            self.set_need_resched();
        }
    }

    /// Preempção: decisão de escalonamento no fim do quantum (ou em qualquer
    /// ponto em que `need_resched` foi armado).
    pub fn schedule(&mut self) -> Option<Pid> {
        self.reschedule(false)
    }

    /// Yield: o processo corrente cede a CPU voluntariamente e volta ao
    /// conjunto pronto.
    pub fn yield_now(&mut self) -> Option<Pid> {
        crate::ktrace!("(Sched) yield_now() chamado");
        self.reschedule(true)
    }

    /// Bloqueia o processo corrente sem deadline (espera por evento externo;
    /// quem acorda é `ProcessTable::wake`).
    pub fn block_current(&mut self) -> Option<Pid> {
        let now = jiffies::get_jiffies();
        if let Some(pid) = self.current {
            // Transição observada pelo PALS: registra o instante do bloqueio.
            let _ = self.table.block(pid, None, now);
        }
        self.reschedule(true)
    }

    /// Sleep voluntário por `ticks`. O caminho do timer acorda o processo
    /// quando a deadline vence.
    pub fn sleep_current(&mut self, ticks: u64) -> Option<Pid> {
        if ticks == 0 {
            return self.yield_now();
        }

        let now = jiffies::get_jiffies();
        if let Some(pid) = self.current {
            let _ = self.table.block(pid, Some(now + ticks), now);
            crate::kdebug!("(Sched) Processo dormindo, ticks:", ticks);
        }
        self.reschedule(true)
    }

    /// Termina o processo corrente: vira Zombie e a CPU sorteia o próximo.
    pub fn exit_current(&mut self, code: i32) -> Option<Pid> {
        if let Some(pid) = self.current {
            let _ = self.table.exit(pid, code);
        }
        self.reschedule(true)
    }

    // ------------------------------------------------------------------
    // Núcleo da decisão
    // ------------------------------------------------------------------

    fn reschedule(&mut self, voluntary: bool) -> Option<Pid> {
        self.need_resched.store(false, Ordering::Release);
        let now = jiffies::get_jiffies();
        let mut inner = self.table.lock();

        // (a) Bookkeeping do processo de saída
        if let Some(prev) = self.current.take() {
            if let Some(task) = inner.task_mut(prev) {
                match task.state {
                    TaskState::Running => {
                        // Preemptado ou yield: volta ao conjunto pronto.
                        task.accounting.end_exec(now);
                        task.accounting.account_switch(voluntary);
                        pals::on_descheduled(task);
                        task.set_ready();
                    }
                    TaskState::Blocked => {
                        // Bloqueio já registrado por block/sleep_current.
                        task.accounting.end_exec(now);
                        task.accounting.account_switch(true);
                        pals::on_descheduled(task);
                    }
                    _ => {
                        // Zombie: só fecha a contabilidade.
                        task.accounting.end_exec(now);
                    }
                }
            }
        }

        // (b) Sorteio sobre o snapshot, ainda sob o mesmo lock
        let next = lottery::select(&inner.tasks, &mut self.rng);

        // (c) Despacho do vencedor
        if let Some(pid) = next {
            if let Some(task) = inner.task_mut(pid) {
                task.state = TaskState::Running;
                if task.flags.contains(TaskFlags::FRESH_WAKE) {
                    // Primeiro despacho desde o wake: a compensação cumpriu
                    // o papel dela; daqui em diante ela só decai.
                    task.flags.remove(TaskFlags::FRESH_WAKE);
                    let latency = now.saturating_sub(task.last_wake_time);
                    crate::ktrace!("(Sched) Latencia wakeup-to-run em ticks:", latency);
                }
                task.accounting.start_exec(now);
            }
            self.current = Some(pid);
        } else {
            // (d) Conjunto pronto vazio: CPU ociosa até a próxima
            // interrupção. Não é erro.
            crate::ktrace!("(Sched) Sem tasks prontas, CPU ociosa");
        }

        next
    }
}
