//! Tabela de Processos (dona do ledger de tickets)
//!
//! Estado mutável compartilhado entre todas as CPUs, protegido por um único
//! `spin::Mutex`. O lock é segurado pela duração inteira de: uma mutação de
//! tickets, uma transição block/wake e a iteração do seletor durante um
//! sorteio. As seções críticas são curtas e nunca bloqueiam: o sorteio roda
//! em toda fronteira de time-slice e não pode virar gargalo.
//!
//! A tabela é passada como dependência explícita para o `CpuScheduler` e
//! para a camada de syscalls. Nada de singleton global: quem embute o
//! escalonador decide onde ela vive.

use alloc::vec::Vec;
use spin::{Mutex, MutexGuard};

use super::pals;
use crate::sched::config::{DEFAULT_TICKETS, MAX_TICKETS, MIN_TICKETS};
use crate::sched::error::{SchedError, SchedResult};
use crate::sched::task::{Task, TaskState};
use crate::sys::types::Pid;

/// Estado interno da tabela. Acessível apenas sob o lock.
pub(crate) struct TableInner {
    /// Registros vivos, em ordem de criação. A ordem é a enumeração
    /// determinística usada pelo seletor.
    pub(crate) tasks: Vec<Task>,
    next_pid: u32,
}

impl TableInner {
    pub(crate) fn task(&self, pid: Pid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.pid == pid)
    }

    pub(crate) fn task_mut(&mut self, pid: Pid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.pid == pid)
    }

    fn wake_due(&mut self, now: u64) -> usize {
        let mut woken = 0;
        for task in self.tasks.iter_mut() {
            let due = matches!(task.wake_at, Some(at) if now >= at);
            if task.state == TaskState::Blocked && due {
                task.wake_at = None;
                pals::on_wake(task, now);
                task.set_ready();
                woken += 1;
            }
        }
        woken
    }
}

/// Tabela de processos compartilhada
pub struct ProcessTable {
    inner: Mutex<TableInner>,
}

impl ProcessTable {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(TableInner {
                tasks: Vec::new(),
                next_pid: Pid::INIT.as_u32(),
            }),
        }
    }

    /// Acesso interno para o loop do scheduler (sorteio + bookkeeping sob um
    /// único lock).
    pub(crate) fn lock(&self) -> MutexGuard<'_, TableInner> {
        self.inner.lock()
    }

    /// Versão não-bloqueante, para o caminho do timer: em contexto de
    /// interrupção nunca giramos esperando outra CPU.
    pub(crate) fn try_lock(&self) -> Option<MutexGuard<'_, TableInner>> {
        self.inner.try_lock()
    }

    // ------------------------------------------------------------------
    // Ciclo de vida dos registros
    // ------------------------------------------------------------------

    /// Cria um processo raiz com `DEFAULT_TICKETS` e o marca pronto.
    pub fn spawn(&self, name: &str) -> Pid {
        let mut inner = self.inner.lock();
        let pid = Pid::new(inner.next_pid);
        inner.next_pid += 1;

        let mut task = Task::new(pid, None, DEFAULT_TICKETS, name);
        task.set_ready();
        inner.tasks.push(task);

        crate::kdebug!("(Table) Novo processo raiz PID:", pid.as_u32());
        pid
    }

    /// Cria um filho herdando a contagem ATUAL de tickets do pai.
    ///
    /// Pai e filho são independentes dali em diante: mutar os tickets de um
    /// jamais afeta o outro (registros nunca são compartilhados).
    pub fn fork(&self, parent: Pid) -> SchedResult<Pid> {
        let mut inner = self.inner.lock();
        let (tickets, name) = {
            let parent_task = inner.task(parent).ok_or(SchedError::NoSuchProcess)?;
            (parent_task.tickets, parent_task.name)
        };

        let pid = Pid::new(inner.next_pid);
        inner.next_pid += 1;

        let mut task = Task::new(pid, Some(parent), tickets, "");
        task.name = name;
        task.set_ready();
        inner.tasks.push(task);

        crate::kdebug!("(Table) Fork: filho criado PID:", pid.as_u32());
        Ok(pid)
    }

    /// Termina um processo: vira Zombie até o reaper passar.
    pub fn exit(&self, pid: Pid, code: i32) -> SchedResult<()> {
        let mut inner = self.inner.lock();
        let task = inner.task_mut(pid).ok_or(SchedError::NoSuchProcess)?;
        task.state = TaskState::Zombie;
        task.exit_code = Some(code);
        task.wake_at = None;
        crate::kdebug!("(Table) Processo terminou PID:", pid.as_u32());
        Ok(())
    }

    /// Remove o registro de um Zombie (destruição do ledger).
    pub fn reap(&self, pid: Pid) -> SchedResult<i32> {
        let mut inner = self.inner.lock();
        let pos = inner
            .tasks
            .iter()
            .position(|t| t.pid == pid && t.state == TaskState::Zombie)
            .ok_or(SchedError::NoSuchProcess)?;
        let task = inner.tasks.remove(pos);
        crate::kdebug!("(Table) Reap do PID:", pid.as_u32());
        Ok(task.exit_code.unwrap_or(0))
    }

    // ------------------------------------------------------------------
    // Ledger de tickets
    // ------------------------------------------------------------------

    /// Substitui a contagem de tickets de um processo.
    ///
    /// Rejeita valores fora de `[MIN_TICKETS, MAX_TICKETS]` sem alterar
    /// nada. A troca é atômica do ponto de vista dos sorteios: acontece sob
    /// o mesmo lock que o seletor segura.
    pub fn set_tickets(&self, pid: Pid, n: u32) -> SchedResult<()> {
        if !(MIN_TICKETS..=MAX_TICKETS).contains(&n) {
            return Err(SchedError::InvalidTicketCount);
        }
        let mut inner = self.inner.lock();
        let task = inner.task_mut(pid).ok_or(SchedError::NoSuchProcess)?;
        task.tickets = n;
        crate::ktrace!("(Table) set_tickets PID:", pid.as_u32());
        Ok(())
    }

    /// Leitura pura da contagem de tickets.
    pub fn get_tickets(&self, pid: Pid) -> SchedResult<u32> {
        let inner = self.inner.lock();
        inner
            .task(pid)
            .map(|t| t.tickets)
            .ok_or(SchedError::NoSuchProcess)
    }

    // ------------------------------------------------------------------
    // Transições block/wake (observadas pelo PALS)
    // ------------------------------------------------------------------

    /// Bloqueia um processo, com deadline de wake opcional (sleep).
    pub fn block(&self, pid: Pid, wake_at: Option<u64>, now: u64) -> SchedResult<()> {
        let mut inner = self.inner.lock();
        let task = inner.task_mut(pid).ok_or(SchedError::NoSuchProcess)?;
        task.set_blocked();
        task.wake_at = wake_at;
        pals::on_block(task, now);
        Ok(())
    }

    /// Acorda um processo bloqueado: volta ao conjunto pronto com o boost
    /// PALS armado. No-op para quem não está bloqueado.
    pub fn wake(&self, pid: Pid, now: u64) -> SchedResult<()> {
        let mut inner = self.inner.lock();
        let task = inner.task_mut(pid).ok_or(SchedError::NoSuchProcess)?;
        if task.state == TaskState::Blocked {
            task.wake_at = None;
            pals::on_wake(task, now);
            task.set_ready();
        }
        Ok(())
    }

    /// Acorda todos os bloqueados com deadline vencida.
    pub fn wake_expired(&self, now: u64) -> usize {
        self.inner.lock().wake_due(now)
    }

    /// Variante não-bloqueante de [`wake_expired`](Self::wake_expired), para
    /// o caminho do timer: se a tabela está travada (esta própria CPU pode
    /// estar no meio de um sorteio), a varredura fica para o próximo tick.
    /// `None` quando contendido.
    pub fn try_wake_expired(&self, now: u64) -> Option<usize> {
        let mut inner = self.inner.try_lock()?;
        Some(inner.wake_due(now))
    }

    // ------------------------------------------------------------------
    // Consultas
    // ------------------------------------------------------------------

    /// Estado atual de um processo.
    pub fn state_of(&self, pid: Pid) -> SchedResult<TaskState> {
        let inner = self.inner.lock();
        inner
            .task(pid)
            .map(|t| t.state)
            .ok_or(SchedError::NoSuchProcess)
    }

    /// Boost atual (ponto fixo, BOOST_ONE = 1.0).
    pub fn boost_of(&self, pid: Pid) -> SchedResult<u32> {
        let inner = self.inner.lock();
        inner
            .task(pid)
            .map(|t| t.boost)
            .ok_or(SchedError::NoSuchProcess)
    }

    /// Sorteios vencidos por um processo.
    pub fn wins_of(&self, pid: Pid) -> SchedResult<u64> {
        let inner = self.inner.lock();
        inner
            .task(pid)
            .map(|t| t.accounting.wins)
            .ok_or(SchedError::NoSuchProcess)
    }

    /// Número de registros vivos.
    pub fn len(&self) -> usize {
        self.inner.lock().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().tasks.is_empty()
    }

    /// Quantos processos participariam de um sorteio agora.
    pub fn runnable_count(&self) -> usize {
        let inner = self.inner.lock();
        inner.tasks.iter().filter(|t| t.state.in_draw()).count()
    }
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}
