//! Simulator Driver Tests.
//!
//! Exercises the clock-owner interface end to end: reset state, program
//! loading, the PC update law, stall injection, and the guarantee that a
//! failing cycle commits nothing.

use pipe3_core::Simulator;
use pipe3_core::common::error::{DecodeError, SimError};
use pipe3_core::config::{Config, IllegalOpcodePolicy};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::builder::instruction::{add, jump, nop, sub};
use crate::common::harness::TestContext;

fn config_with(f: impl FnOnce(&mut Config)) -> Config {
    let mut config = Config::default();
    f(&mut config);
    config
}

#[test]
fn reset_state() {
    let sim = Simulator::default();
    assert_eq!(sim.read_pc(), 0);
    for r in 0..16 {
        assert_eq!(sim.read_register(r), 0);
    }
    assert_eq!(sim.stats().cycles, 0);
    assert!(sim.cpu.if_id.entry.is_none());
    assert!(sim.cpu.id_ex.entry.is_none());
}

#[test]
fn config_sets_initial_registers_and_start_pc() {
    let config = config_with(|c| {
        c.general.start_pc = 4;
        c.registers.initial = vec![1, 2, 3];
    });
    let sim = Simulator::try_new(&config).unwrap();
    assert_eq!(sim.read_pc(), 4);
    assert_eq!(sim.read_register(2), 3);
    assert_eq!(sim.read_register(3), 0);
}

#[test]
fn try_new_rejects_invalid_config() {
    let config = config_with(|c| c.memory.imem_size = 0);
    assert!(matches!(
        Simulator::try_new(&config),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn oversized_program_is_rejected() {
    let mut sim = Simulator::new(&config_with(|c| c.memory.imem_size = 2));
    assert_eq!(
        sim.load_program(&[nop(), nop(), nop()]),
        Err(SimError::OutOfRangeAddress { addr: 2, size: 2 })
    );
}

#[test]
fn add_result_visible_three_cycles_after_fetch() {
    let mut ctx = TestContext::new().load_program(&[add(3, 2, 1)]);
    ctx.set_reg(1, 0xFFFF);
    ctx.set_reg(2, 2);
    ctx.run(2);
    assert_eq!(ctx.get_reg(3), 0);
    ctx.run(1);
    assert_eq!(ctx.get_reg(3), 1);
}

#[test]
fn pc_wraps_at_top_of_address_space() {
    let mut sim = Simulator::new(&config_with(|c| c.general.start_pc = 0xFFFF));
    sim.step().unwrap();
    assert_eq!(sim.read_pc(), 0);
}

#[test]
fn stall_holds_pc() {
    let mut sim = Simulator::default();
    sim.run(3).unwrap();
    sim.set_stall(true);
    sim.run(5).unwrap();
    assert_eq!(sim.read_pc(), 3);
    sim.set_stall(false);
    sim.step().unwrap();
    assert_eq!(sim.read_pc(), 4);
    assert_eq!(sim.stats().stall_cycles, 5);
}

#[test]
fn stalled_instruction_executes_once() {
    let mut ctx = TestContext::new().load_program(&[add(1, 1, 2), add(3, 3, 2)]);
    ctx.set_reg(2, 1);
    ctx.run(1);
    ctx.sim.set_stall(true);
    ctx.run(3);
    ctx.sim.set_stall(false);
    ctx.run(10);
    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.get_reg(3), 1);
}

#[test]
fn stall_during_jump_drops_the_redirect() {
    let mut ctx =
        TestContext::new().load_program(&[jump(3), add(1, 0, 0), add(2, 0, 0), add(3, 0, 0)]);
    ctx.set_reg(0, 5);
    ctx.run(2);

    ctx.sim.set_stall(true);
    let out = ctx.step();
    assert!(out.execute.branch_taken);
    assert_eq!(ctx.pc(), 2);

    ctx.sim.set_stall(false);
    ctx.run(5);
    assert_eq!(ctx.get_reg(1), 10);
    assert_eq!(ctx.get_reg(2), 10);
    assert_eq!(ctx.get_reg(3), 10);
}

#[test]
fn decode_fault_commits_nothing() {
    let mut ctx = TestContext::new().load_program(&[sub(1, 1, 2), 0x7000]);
    ctx.set_reg(2, 1);
    ctx.run(2);
    let before = ctx.cpu().clone();

    let expected = SimError::Decode {
        pc: 1,
        source: DecodeError::UnrecognizedOpcode {
            opcode: 7,
            word: 0x7000,
        },
    };
    assert_eq!(ctx.sim.step(), Err(expected.clone()));
    assert_eq!(ctx.get_reg(1), 0, "SUB in Execute must not commit");
    assert_eq!(ctx.pc(), before.arch.pc);
    assert_eq!(ctx.cpu().stats, before.stats);
    assert_eq!(ctx.cpu().if_id, before.if_id);

    // The fault is sticky: the same word is still in Decode.
    assert_eq!(ctx.sim.run(4), Err(expected));
}

#[test]
fn nop_policy_skips_reserved_opcodes() {
    let config = config_with(|c| c.pipeline.illegal_opcode = IllegalOpcodePolicy::Nop);
    let mut ctx = TestContext::with_config(&config).load_program(&[0xF123, add(1, 2, 2)]);
    ctx.set_reg(2, 4);
    ctx.run(4);
    assert_eq!(ctx.get_reg(1), 8);
    assert_eq!(ctx.get_reg(0xF), 0);
    assert_eq!(ctx.sim.stats().illegal_as_nop, 1);
}

#[test]
fn fetch_past_end_of_memory_fails_cleanly() {
    let config = config_with(|c| c.memory.imem_size = 2);
    let mut ctx = TestContext::with_config(&config).load_program(&[add(1, 2, 2), nop()]);
    ctx.set_reg(2, 1);
    ctx.run(2);
    assert_eq!(
        ctx.sim.step(),
        Err(SimError::OutOfRangeAddress { addr: 2, size: 2 })
    );
    assert_eq!(ctx.pc(), 2);
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn trace_does_not_change_results() {
    let program = [add(1, 0, 0), jump(2), add(2, 1, 1), add(3, 2, 2), add(4, 3, 3)];
    let run = |trace: bool| {
        let mut ctx = TestContext::new().load_program(&program);
        ctx.sim.set_trace(trace);
        ctx.set_reg(0, 1);
        ctx.run(10);
        (ctx.cpu().arch.gpr.snapshot(), ctx.sim.stats().clone())
    };
    assert_eq!(run(false), run(true));
}

#[test]
fn dump_registers_lists_every_register() {
    let mut ctx = TestContext::new();
    ctx.set_reg(10, 0xabcd);
    let dump = ctx.sim.dump_registers();
    assert_eq!(dump.lines().count(), 4);
    assert!(dump.contains("r10=0xabcd"), "{dump}");
}

proptest! {
    #[test]
    fn pc_law_without_branches(stalls in proptest::collection::vec(any::<bool>(), 1..64)) {
        let mut sim = Simulator::default();
        for stall in stalls {
            let pc = sim.read_pc();
            sim.set_stall(stall);
            sim.step().unwrap();
            let expected = if stall { pc } else { pc.wrapping_add(1) };
            prop_assert_eq!(sim.read_pc(), expected);
        }
    }

    #[test]
    fn add_and_sub_wrap(a in any::<u16>(), b in any::<u16>()) {
        let mut ctx = TestContext::new().load_program(&[add(3, 1, 2), sub(4, 1, 2)]);
        ctx.set_reg(1, a);
        ctx.set_reg(2, b);
        ctx.run(4);
        prop_assert_eq!(ctx.get_reg(3), a.wrapping_add(b));
        prop_assert_eq!(ctx.get_reg(4), a.wrapping_sub(b));
    }
}
