//! Testes da Compensação de Wakeup (PALS)

#![cfg(test)]

use super::ready_task;
use crate::sched::config::{BOOST_MAX, BOOST_ONE, BOOST_STEP, BOOST_WINDOW};
use crate::sched::core::pals;
use crate::sched::core::table::ProcessTable;
use crate::sched::task::{TaskFlags, TaskState};

#[test]
fn test_zero_wait_gives_no_boost() {
    assert_eq!(pals::boost_for_wait(0), BOOST_ONE);
}

#[test]
fn test_boost_is_monotone_nondecreasing() {
    let mut previous = 0;
    for wait in 0..=(BOOST_WINDOW + 10) {
        let boost = pals::boost_for_wait(wait);
        assert!(boost >= previous, "boost caiu em wait={}", wait);
        previous = boost;
    }
}

#[test]
fn test_boost_saturates_at_cap() {
    assert_eq!(pals::boost_for_wait(BOOST_WINDOW), BOOST_MAX);
    assert_eq!(pals::boost_for_wait(BOOST_WINDOW + 1), BOOST_MAX);
    assert_eq!(pals::boost_for_wait(u64::MAX), BOOST_MAX);
}

#[test]
fn test_wake_arms_boost_and_flag() {
    let mut task = ready_task(1, 10);
    pals::on_block(&mut task, 100);
    pals::on_wake(&mut task, 110);

    assert_eq!(task.boost, BOOST_ONE + 10 * BOOST_STEP);
    assert_eq!(task.last_wake_time, 110);
    assert!(task.flags.contains(TaskFlags::FRESH_WAKE));
}

#[test]
fn test_wake_overwrites_never_accumulates() {
    let mut task = ready_task(1, 10);

    // Espera longa arma um boost grande...
    pals::on_block(&mut task, 0);
    pals::on_wake(&mut task, 1_000);
    assert_eq!(task.boost, BOOST_MAX);

    // ...mas o ciclo rápido seguinte SOBRESCREVE com um boost pequeno.
    pals::on_block(&mut task, 1_000);
    pals::on_wake(&mut task, 1_001);
    assert_eq!(task.boost, BOOST_ONE + BOOST_STEP);
}

#[test]
fn test_decay_reaches_exactly_one() {
    let mut task = ready_task(1, 10);
    task.boost = BOOST_MAX;

    let mut previous = task.boost;
    let mut rounds = 0;
    while task.boost > BOOST_ONE {
        pals::on_descheduled(&mut task);
        assert!(task.boost < previous, "decaimento estagnou");
        previous = task.boost;
        rounds += 1;
        assert!(rounds < 32, "decaimento não converge");
    }
    assert_eq!(task.boost, BOOST_ONE);

    // Em 1.0 o decaimento é no-op.
    pals::on_descheduled(&mut task);
    assert_eq!(task.boost, BOOST_ONE);
}

#[test]
fn test_effective_weight_scales_with_boost() {
    let mut task = ready_task(1, 100);
    assert_eq!(task.effective_weight(), 100);

    task.boost = BOOST_ONE * 2;
    assert_eq!(task.effective_weight(), 200);

    task.boost = BOOST_MAX;
    assert_eq!(task.effective_weight(), 400);
}

#[test]
fn test_immediate_rewake_through_table() {
    // Ciclo block/wake no mesmo tick, via tabela: sem compensação nenhuma.
    let table = ProcessTable::new();
    let pid = table.spawn("ping");

    table.block(pid, None, 500).unwrap();
    table.wake(pid, 500).unwrap();

    assert_eq!(table.boost_of(pid), Ok(BOOST_ONE));
    assert_eq!(table.state_of(pid), Ok(TaskState::Ready));
}

#[test]
fn test_wake_is_noop_for_ready_process() {
    let table = ProcessTable::new();
    let pid = table.spawn("acordado");

    // Nunca bloqueou; wake não deve inventar boost.
    table.wake(pid, 1_000).unwrap();
    assert_eq!(table.boost_of(pid), Ok(BOOST_ONE));
    assert_eq!(table.state_of(pid), Ok(TaskState::Ready));
}

#[test]
fn test_blocked_wait_boost_through_table() {
    let table = ProcessTable::new();
    let pid = table.spawn("dorminhoco");

    table.block(pid, None, 100).unwrap();
    assert_eq!(table.state_of(pid), Ok(TaskState::Blocked));

    table.wake(pid, 120).unwrap();
    assert_eq!(table.boost_of(pid), Ok(BOOST_ONE + 20 * BOOST_STEP));
}
