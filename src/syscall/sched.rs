//! Syscalls de escalonamento
//!
//! Os argumentos chegam como inteiros crus do trap de syscall; tudo aqui é
//! validado antes de tocar a tabela. A tabela é passada explicitamente pelo
//! dispatcher, junto com o PID do chamador resolvido pelo trap.

use crate::core::time::jiffies;
use crate::sched::config::MAX_TICKETS;
use crate::sched::core::scheduler::CpuScheduler;
use crate::sched::core::table::ProcessTable;
use crate::sys::error::Errno;
use crate::sys::types::Pid;

/// Substitui a contagem de tickets do chamador.
///
/// `n` chega como inteiro com sinal do userspace: negativos e zero são
/// rejeitados com `-EINVAL` antes de qualquer conversão, sem alterar o
/// ledger.
pub fn sys_settickets(table: &ProcessTable, caller: Pid, n: i64) -> isize {
    if n < 1 || n > MAX_TICKETS as i64 {
        crate::kwarn!("(Syscall) settickets rejeitado, PID:", caller.as_u32());
        return Errno::EINVAL.as_isize();
    }

    match table.set_tickets(caller, n as u32) {
        Ok(()) => 0,
        Err(e) => e.as_errno().as_isize(),
    }
}

/// Lê a contagem de tickets de um processo qualquer.
pub fn sys_gettickets(table: &ProcessTable, pid: Pid) -> isize {
    match table.get_tickets(pid) {
        Ok(n) => n as isize,
        Err(e) => e.as_errno().as_isize(),
    }
}

/// Lê a contagem de tickets do próprio chamador.
pub fn sys_getpid_tickets(table: &ProcessTable, caller: Pid) -> isize {
    sys_gettickets(table, caller)
}

/// Cria um filho do chamador. O filho herda a contagem ATUAL de tickets do
/// pai; dali em diante os dois são independentes.
pub fn sys_fork(table: &ProcessTable, caller: Pid) -> isize {
    match table.fork(caller) {
        Ok(child) => child.as_u32() as isize,
        Err(e) => e.as_errno().as_isize(),
    }
}

/// Ticks de relógio desde o boot.
pub fn sys_uptime() -> isize {
    jiffies::get_jiffies() as isize
}

/// Dorme por `ticks` ticks de relógio.
///
/// `ticks` negativo é `-EINVAL`; zero degenera em yield. Retorna o PID do
/// próximo processo a rodar nesta CPU (o trap usa isso para o switch), ou 0
/// quando a CPU fica ociosa.
pub fn sys_sleep(cpu: &mut CpuScheduler<'_>, ticks: i64) -> isize {
    if ticks < 0 {
        return Errno::EINVAL.as_isize();
    }
    match cpu.sleep_current(ticks as u64) {
        Some(next) => next.as_u32() as isize,
        None => 0,
    }
}

/// Cede a CPU voluntariamente. Mesmo contrato de retorno de [`sys_sleep`].
pub fn sys_yield(cpu: &mut CpuScheduler<'_>) -> isize {
    match cpu.yield_now() {
        Some(next) => next.as_u32() as isize,
        None => 0,
    }
}
