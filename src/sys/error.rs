//! # Standard Error Codes (Errno)
//!
//! Códigos de erro retornados pelas syscalls do escalonador.
//! Segue a numeração POSIX/Linux para facilitar compatibilidade e porting.
//! Valores negativos são usados em retornos de syscalls (isize).

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errno {
    Success = 0,
    EPERM = 1,   // Operation not permitted
    ESRCH = 3,   // No such process
    EINTR = 4,   // Interrupted system call
    ECHILD = 10, // No child processes
    EAGAIN = 11, // Try again
    ENOMEM = 12, // Out of memory
    EINVAL = 22, // Invalid argument
    ENOSYS = 38, // Function not implemented
}

impl Errno {
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// Valor negativo para o registrador de retorno da syscall.
    pub fn as_isize(self) -> isize {
        -(self as i32) as isize
    }
}
