//! Seletor de Loteria
//!
//! O sorteio: soma os pesos efetivos do conjunto pronto, tira um valor
//! uniforme `r` em `[0, total)` e percorre as tasks em ordem de tabela
//! (ordem determinística, importa só para reprodutibilidade sob seed fixa;
//! a distribuição é uniforme sobre a massa de pesos em qualquer ordem)
//! acumulando pesos até ultrapassar `r`.
//!
//! Sem estado entre sorteios: cada chamada é função pura do snapshot da
//! tabela e do estado do RNG.

use crate::klib::Xorshift64;
use crate::sched::task::Task;
use crate::sys::types::Pid;

/// Sorteia a próxima task entre as prontas. `None` quando não há nenhuma
/// (caso idle do escalonador, não é erro).
pub fn select(tasks: &[Task], rng: &mut Xorshift64) -> Option<Pid> {
    let total: u64 = tasks
        .iter()
        .filter(|t| t.state.in_draw())
        .map(|t| t.effective_weight())
        .sum();

    if total == 0 {
        // Peso por task pronta é sempre >= 1, então total zero com conjunto
        // pronto não-vazio só acontece se a disciplina de lock foi violada.
        // Defeito de programação: fatal, nunca tolerado em silêncio.
        assert!(
            tasks.iter().all(|t| !t.state.in_draw()),
            "loteria: soma de pesos zero com tasks prontas na fila"
        );
        return None;
    }

    let mut r = rng.next_below(total);
    for task in tasks.iter().filter(|t| t.state.in_draw()) {
        let weight = task.effective_weight();
        if r < weight {
            return Some(task.pid);
        }
        r -= weight;
    }

    // A soma acumulada cobre [0, total): inalcançável com o lock segurado.
    unreachable!("loteria: massa de pesos mudou durante o sorteio");
}
