//! Sistema de logging do escalonador
//!
//! Esta crate não possui driver serial próprio: o kernel registra um sink
//! via [`set_sink`] e todas as mensagens passam por ele. Sem sink registrado
//! os logs são descartados silenciosamente (útil em testes de host).
//!
//! Os níveis são filtrados em tempo de compilação pelas features
//! `no_logs` / `log_error` / `log_info` / `log_debug` / `log_trace`,
//! espelhando o esquema zero-overhead do Cargo.toml.

use spin::Mutex;

/// Nível de log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

/// Destino das mensagens (ex: serial do kernel). Recebe fragmentos de texto;
/// o terminador de linha é emitido pelo próprio klog.
pub type LogSink = fn(&str);

static SINK: Mutex<Option<LogSink>> = Mutex::new(None);

/// Registra o sink de saída. Chamado uma vez pelo kernel durante o boot.
pub fn set_sink(sink: LogSink) {
    *SINK.lock() = Some(sink);
}

/// Verifica se o nível está habilitado pelas features de compilação.
#[inline]
pub fn enabled(level: LogLevel) -> bool {
    if cfg!(feature = "no_logs") {
        return false;
    }
    let min = if cfg!(feature = "log_error") {
        LogLevel::Warn
    } else if cfg!(feature = "log_info") {
        LogLevel::Info
    } else if cfg!(feature = "log_debug") {
        LogLevel::Debug
    } else {
        LogLevel::Trace
    };
    level as u8 >= min as u8
}

fn prefix(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "[TRACE] ",
        LogLevel::Debug => "[DEBUG] ",
        LogLevel::Info => "[INFO]  ",
        LogLevel::Warn => "[WARN]  ",
        LogLevel::Error => "[ERROR] ",
    }
}

fn emit(parts: &[&str]) {
    if let Some(sink) = *SINK.lock() {
        for part in parts {
            sink(part);
        }
        sink("\n");
    }
}

/// Emite uma linha de log
pub fn log(level: LogLevel, message: &str) {
    if !enabled(level) {
        return;
    }
    emit(&[prefix(level), message]);
}

/// Emite log com um valor decimal anexado.
///
/// Formatação manual em buffer de stack: sem alocação, seguro em qualquer
/// contexto (inclusive dentro do lock da tabela de processos).
pub fn log_val(level: LogLevel, message: &str, value: u64) {
    if !enabled(level) {
        return;
    }

    // u64::MAX tem 20 dígitos
    let mut buf = [0u8; 20];
    let mut n = value;
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }

    let digits = core::str::from_utf8(&buf[i..]).unwrap_or("?");
    emit(&[prefix(level), message, digits]);
}

// Macros de conveniência
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {
        $crate::core::debug::klog::log($crate::core::debug::klog::LogLevel::Info, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::core::debug::klog::log_val(
            $crate::core::debug::klog::LogLevel::Info,
            $msg,
            $val as u64,
        )
    };
}

#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {
        $crate::core::debug::klog::log($crate::core::debug::klog::LogLevel::Warn, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::core::debug::klog::log_val(
            $crate::core::debug::klog::LogLevel::Warn,
            $msg,
            $val as u64,
        )
    };
}

#[macro_export]
macro_rules! kerror {
    ($msg:expr) => {
        $crate::core::debug::klog::log($crate::core::debug::klog::LogLevel::Error, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::core::debug::klog::log_val(
            $crate::core::debug::klog::LogLevel::Error,
            $msg,
            $val as u64,
        )
    };
}

#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {
        $crate::core::debug::klog::log($crate::core::debug::klog::LogLevel::Debug, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::core::debug::klog::log_val(
            $crate::core::debug::klog::LogLevel::Debug,
            $msg,
            $val as u64,
        )
    };
}

#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {
        $crate::core::debug::klog::log($crate::core::debug::klog::LogLevel::Trace, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::core::debug::klog::log_val(
            $crate::core::debug::klog::LogLevel::Trace,
            $msg,
            $val as u64,
        )
    };
}
