//! Instruction Decode Properties.
//!
//! Verifies that `decode()` extracts the opcode and register fields, sign-extends
//! the jump immediate, and rejects every reserved opcode. Properties run over the
//! full 16-bit word space.

use pipe3_core::common::error::DecodeError;
use pipe3_core::core::pipeline::signals::AluOp;
use pipe3_core::isa::decode::decode;
use pipe3_core::isa::instruction::{Instruction, InstructionBits};
use pipe3_core::isa::opcodes::*;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder;

#[test]
fn field_extraction() {
    let word: u16 = 0x2A5C;
    assert_eq!(word.opcode(), 0x2);
    assert_eq!(word.rd(), 0xA);
    assert_eq!(word.rs2(), 0x5);
    assert_eq!(word.rs1(), 0xC);
    assert_eq!(word.imm12(), -1444); // 0xA5C sign-extended
}

#[rstest]
#[case(OP_ADD, AluOp::Add)]
#[case(OP_SUB, AluOp::Sub)]
#[case(OP_XOR, AluOp::Xor)]
#[case(OP_AND, AluOp::And)]
#[case(OP_OR, AluOp::Or)]
fn reg_ops_decode(#[case] opcode: u8, #[case] op: AluOp) {
    let word = InstructionBuilder::new()
        .opcode(opcode)
        .rd(3)
        .rs1(2)
        .rs2(1)
        .build();
    assert_eq!(
        decode(word),
        Ok(Instruction::RegOp {
            op,
            rd: 3,
            rs1: 2,
            rs2: 1,
        })
    );
}

#[rstest]
#[case(0x000, 0)]
#[case(0x003, 3)]
#[case(0x7FF, 2047)]
#[case(0x800, -2048)]
#[case(0xFFE, -2)]
#[case(0xFFF, -1)]
fn jump_immediate_sign_extension(#[case] field: u16, #[case] imm: i16) {
    let word = u16::from(OP_JUMP) << 12 | field;
    assert_eq!(decode(word), Ok(Instruction::Jump { imm }));
}

#[test]
fn nop_ignores_low_bits() {
    assert_eq!(decode(0x0000), Ok(Instruction::Nop));
    assert_eq!(decode(0x0FFF), Ok(Instruction::Nop));
}

#[test]
fn every_reserved_opcode_is_rejected() {
    for opcode in 7u8..=15 {
        let word = u16::from(opcode) << 12 | 0x123;
        assert_eq!(
            decode(word),
            Err(DecodeError::UnrecognizedOpcode { opcode, word }),
            "opcode {opcode:#x}"
        );
    }
}

#[test]
fn instruction_classification() {
    let add = decode(0x1321).unwrap();
    assert!(add.writes_register() && !add.is_branch());
    assert_eq!(add.dest(), Some(3));

    let jump = decode(0x6001).unwrap();
    assert!(jump.is_branch() && !jump.writes_register());
    assert_eq!(jump.dest(), None);

    assert_eq!(Instruction::Nop.dest(), None);
}

proptest! {
    #[test]
    fn decode_is_deterministic(word in any::<u16>()) {
        prop_assert_eq!(decode(word), decode(word));
    }

    #[test]
    fn accepted_words_reencode_exactly(word in 0x1000u16..0x7000) {
        let inst = decode(word).unwrap();
        prop_assert_eq!(inst.encode(), word);
    }

    #[test]
    fn reserved_opcodes_always_fail(word in 0x7000u16..=0xFFFF) {
        prop_assert!(decode(word).is_err());
    }

    #[test]
    fn builder_and_encoder_agree(rd in 0u8..16, rs1 in 0u8..16, rs2 in 0u8..16, op in 0usize..5) {
        let alu = AluOp::ALL[op];
        let inst = Instruction::RegOp { op: alu, rd, rs1, rs2 };
        let built = InstructionBuilder::new()
            .opcode(alu.opcode())
            .rd(rd)
            .rs1(rs1)
            .rs2(rs2)
            .build();
        prop_assert_eq!(inst.encode(), built);
        prop_assert_eq!(decode(built), Ok(inst));
    }
}
