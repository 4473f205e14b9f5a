//! Contabilidade de Recursos (Accounting)
//!
//! Rastreia o consumo de CPU e o histórico de sorteios de cada task. As
//! cargas de benchmark inferem a fatia de CPU a partir de `wins`, então o
//! contador é mantido aqui como dado de primeira classe.

use crate::sched::config::DEFAULT_QUANTUM;

/// Estatísticas de uso de recursos de uma task
#[derive(Debug, Clone, Copy, Default)]
pub struct Accounting {
    /// Tempo total de CPU consumido (em ticks do sistema)
    pub total_cpu_time: u64,

    /// Timestamp (em ticks) da última vez que a task ganhou a CPU.
    /// Usado para calcular o delta quando ela perde a CPU.
    pub last_start_time: u64,

    /// Número de sorteios vencidos (= despachos)
    pub wins: u64,

    /// Trocas de contexto voluntárias (yield, sleep, block)
    pub voluntary_switches: u64,

    /// Trocas involuntárias (preempção por quantum expirado)
    pub involuntary_switches: u64,

    /// Quantum restante nesta fatia de tempo (em ticks)
    pub quantum_left: u64,
}

impl Accounting {
    /// Cria uma nova estrutura de contabilidade zerada
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra o início da execução (chamado quando a task ganha a CPU)
    pub fn start_exec(&mut self, now: u64) {
        self.last_start_time = now;
        self.wins += 1;
        self.reset_quantum();
    }

    /// Reinicia o quantum da task.
    ///
    /// O quantum é fixo e idêntico para todas: justiça vem só do peso do
    /// sorteio, nunca do tamanho da fatia.
    pub fn reset_quantum(&mut self) {
        self.quantum_left = DEFAULT_QUANTUM;
    }

    /// Registra o fim da execução (chamado quando a task perde a CPU).
    /// Retorna o tempo executado nesta fatia.
    pub fn end_exec(&mut self, now: u64) -> u64 {
        if now >= self.last_start_time {
            let delta = now - self.last_start_time;
            self.total_cpu_time += delta;
            delta
        } else {
            // Relógio voltou no tempo? Ignora.
            0
        }
    }

    /// Incrementa contadores de troca de contexto
    pub fn account_switch(&mut self, voluntary: bool) {
        if voluntary {
            self.voluntary_switches += 1;
        } else {
            self.involuntary_switches += 1;
        }
    }
}
