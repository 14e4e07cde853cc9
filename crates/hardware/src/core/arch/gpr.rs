//! General-Purpose Register File.
//!
//! This module implements the 16-entry register file of the core. It performs
//! the following:
//! 1. **Storage:** Maintains sixteen 16-bit registers (`r0`-`r15`).
//! 2. **Zero Register:** Optionally hardwires `r0` to zero (off by default, `r0` is ordinary).
//! 3. **Debugging:** Renders the complete register state for dumps and traces.

use std::fmt;

use crate::common::constants::NUM_REGS;

/// General-Purpose Register file.
///
/// One synchronous write port (driven by Execute/Write-back) and two read ports
/// (used by Decode). Indices must be below [`NUM_REGS`]; anything else is a
/// construction bug and panics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u16; NUM_REGS],
    hardwired_zero: bool,
}

impl Gpr {
    /// Creates a register file with all registers initialized to zero.
    ///
    /// # Arguments
    ///
    /// * `hardwired_zero` - If true, `r0` reads as zero and ignores writes.
    pub const fn new(hardwired_zero: bool) -> Self {
        Self {
            regs: [0; NUM_REGS],
            hardwired_zero,
        }
    }

    /// Creates a register file preloaded with `initial` (missing entries are zero).
    pub fn with_values(initial: &[u16], hardwired_zero: bool) -> Self {
        let mut gpr = Self::new(hardwired_zero);
        for (idx, &val) in initial.iter().take(NUM_REGS).enumerate() {
            gpr.write(idx, val);
        }
        gpr
    }

    /// Returns whether `r0` is reserved as a constant zero.
    pub const fn hardwired_zero(&self) -> bool {
        self.hardwired_zero
    }

    /// Reads a register value.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid register index.
    pub fn read(&self, idx: usize) -> u16 {
        check_index(idx);
        if self.hardwired_zero && idx == 0 {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a register value.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid register index.
    pub fn write(&mut self, idx: usize, val: u16) {
        check_index(idx);
        if !(self.hardwired_zero && idx == 0) {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all sixteen register values.
    pub const fn snapshot(&self) -> [u16; NUM_REGS] {
        let mut out = self.regs;
        if self.hardwired_zero {
            out[0] = 0;
        }
        out
    }
}

fn check_index(idx: usize) {
    assert!(
        idx < NUM_REGS,
        "RegisterIndexOutOfRange: r{idx} (register file has {NUM_REGS} entries)"
    );
}

impl fmt::Display for Gpr {
    /// Displays registers four per row with hexadecimal formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let regs = self.snapshot();
        for row in (0..NUM_REGS).step_by(4) {
            for col in row..row + 4 {
                if col != row {
                    f.write_str("  ")?;
                }
                write!(f, "r{col:<2}={:#06x}", regs[col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
