//! Fetch Stage Tests.
//!
//! Verifies the PC update priority (stall, then redirect, then increment),
//! squashing on a taken jump, and that only latched words are read from memory.

use pipe3_core::common::error::SimError;
use pipe3_core::core::arch::InstructionMemory;
use pipe3_core::core::pipeline::latches::IfIdEntry;
use pipe3_core::core::pipeline::stages::execute::ExecuteOutput;
use pipe3_core::core::pipeline::stages::fetch::{PcUpdate, fetch_stage};
use pipe3_core::core::pipeline::traits::PipelineLatch;
use rstest::rstest;

fn imem(words: &[u16]) -> InstructionMemory {
    let mut m = InstructionMemory::new(words.len().max(1));
    m.load(words).unwrap();
    m
}

fn taken(target: u16) -> ExecuteOutput {
    ExecuteOutput {
        branch_taken: true,
        branch_target: target,
        ..ExecuteOutput::default()
    }
}

#[test]
fn sequential_fetch_latches_word_and_increments() {
    let mem = imem(&[0x1111, 0x2222]);
    let out = fetch_stage(1, &mem, &ExecuteOutput::default(), false, false).unwrap();
    assert_eq!(out.next_pc, 2);
    assert_eq!(out.update, PcUpdate::Increment);
    assert_eq!(out.if_id.entry, Some(IfIdEntry { pc: 1, inst: 0x2222 }));
    assert!(!out.squashed);
}

#[test]
fn taken_branch_squashes_and_redirects() {
    let mem = imem(&[0x1111, 0x2222, 0x3333]);
    let out = fetch_stage(2, &mem, &taken(0), false, false).unwrap();
    assert_eq!(out.next_pc, 0);
    assert_eq!(out.update, PcUpdate::Jump);
    assert!(out.if_id.is_empty());
    assert!(out.squashed);
}

#[test]
fn stall_holds_pc_and_latches_bubble() {
    let mem = imem(&[0x1111, 0x2222]);
    let out = fetch_stage(1, &mem, &ExecuteOutput::default(), true, false).unwrap();
    assert_eq!(out.next_pc, 1);
    assert_eq!(out.update, PcUpdate::Hold);
    assert!(out.if_id.is_empty());
}

#[test]
fn stall_has_priority_over_redirect() {
    let mem = imem(&[0x1111, 0x2222]);
    let out = fetch_stage(1, &mem, &taken(0), true, false).unwrap();
    assert_eq!(out.next_pc, 1);
    assert_eq!(out.update, PcUpdate::Hold);
    assert!(out.if_id.is_empty());
}

#[rstest]
#[case(0, 1)]
#[case(0x7FFF, 0x8000)]
#[case(0xFFFF, 0)]
fn pc_increment_wraps(#[case] pc: u16, #[case] next: u16) {
    let mem = InstructionMemory::new(usize::MAX);
    let out = fetch_stage(pc, &mem, &ExecuteOutput::default(), false, false).unwrap();
    assert_eq!(out.next_pc, next);
}

#[test]
fn out_of_range_fetch_is_an_error() {
    let mem = imem(&[0x1111, 0x2222]);
    let err = fetch_stage(2, &mem, &ExecuteOutput::default(), false, false).unwrap_err();
    assert_eq!(err, SimError::OutOfRangeAddress { addr: 2, size: 2 });
}

#[test]
fn squashed_or_stalled_fetch_never_reads_memory() {
    let mem = imem(&[0x1111, 0x2222]);
    assert!(fetch_stage(9, &mem, &taken(0), false, false).is_ok());
    assert!(fetch_stage(9, &mem, &ExecuteOutput::default(), true, false).is_ok());
}

#[test]
fn trace_does_not_change_outputs() {
    let mem = imem(&[0x1111, 0x2222]);
    let quiet = fetch_stage(0, &mem, &taken(1), false, false).unwrap();
    let traced = fetch_stage(0, &mem, &taken(1), false, true).unwrap();
    assert_eq!(quiet, traced);
}
