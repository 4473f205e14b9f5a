//! Fronteira de syscalls do escalonador
//!
//! Convenção de retorno no estilo POSIX: valor não-negativo em sucesso,
//! `-errno` em falha (ver [`crate::sys::Errno::as_isize`]). A validação de
//! argumentos crus do userspace acontece AQUI; as camadas internas só
//! recebem valores já saneados.

pub mod sched;

pub use sched::{
    sys_fork, sys_getpid_tickets, sys_gettickets, sys_settickets, sys_sleep, sys_uptime,
    sys_yield,
};
