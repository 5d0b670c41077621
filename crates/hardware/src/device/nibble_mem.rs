//! Nibble Memory behavioral model.
//!
//! A small synchronous memory of 4-bit cells with a single address register,
//! operated from a front panel of switches and buttons.
//!
//! # Ports
//!
//! * `clk`: all state changes on the rising edge.
//! * `rst_n`: synchronous, active low. Clears the address register and every cell.
//! * `din[3:0]`: value written by `store`.
//! * `store`: writes `din` at `addr`, then advances `addr`.
//! * `next` / `prev`: step `addr` forward or backward, wrapping at the depth.
//! * `addr`: current address register.
//! * `dout[3:0]`: combinational read of the cell at `addr`.
//!
//! When several controls are asserted on the same edge the priority is
//! `rst_n`, `store`, `next`, `prev`.

use tracing::trace;

use crate::common::constants::MAX_DEPTH;

use crate::common::constants::{DATA_MASK, DEFAULT_DEPTH};
use crate::common::error::SimError;
use crate::device::Device;

/// Latched input pin levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Inputs {
    clk: bool,
    rst_n: bool,
    din: u8,
    store: bool,
    next: bool,
    prev: bool,
}

/// 4-bit wide memory with store/next/prev navigation.
#[derive(Debug, Clone)]
pub struct NibbleMem {
    inputs: Inputs,
    /// Clock level seen by the previous `eval`, for edge detection.
    last_clk: bool,
    cells: Vec<u8>,
    addr: usize,
    dout: u8,
}

impl NibbleMem {
    /// Creates a memory with `depth` cells, all zero, address at 0.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidDepth` if `depth` is zero or above `MAX_DEPTH`.
    pub fn new(depth: usize) -> Result<Self, SimError> {
        if !(1..=MAX_DEPTH).contains(&depth) {
            return Err(SimError::InvalidDepth(depth));
        }
        Ok(Self {
            inputs: Inputs::default(),
            last_clk: false,
            cells: vec![0; depth],
            addr: 0,
            dout: 0,
        })
    }

    /// Number of cells in the memory.
    pub fn depth(&self) -> usize {
        self.cells.len()
    }

    /// Reads a cell directly, bypassing the pins. Out-of-range reads return `None`.
    pub fn peek(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    /// Applies one rising clock edge to the registers.
    fn posedge(&mut self) {
        let depth = self.cells.len();
        let inputs = self.inputs;

        if !inputs.rst_n {
            self.addr = 0;
            self.cells.fill(0);
            return;
        }

        if inputs.store {
            let value = inputs.din & DATA_MASK;
            self.cells[self.addr] = value;
            trace!(addr = self.addr, value, "store");
            self.addr = (self.addr + 1) % depth;
        } else if inputs.next {
            self.addr = (self.addr + 1) % depth;
        } else if inputs.prev {
            self.addr = (self.addr + depth - 1) % depth;
        }
    }
}

impl Default for NibbleMem {
    fn default() -> Self {
        Self {
            inputs: Inputs::default(),
            last_clk: false,
            cells: vec![0; DEFAULT_DEPTH],
            addr: 0,
            dout: 0,
        }
    }
}

impl Device for NibbleMem {
    fn name(&self) -> &str {
        "nibble_mem"
    }

    fn set_clk(&mut self, level: bool) {
        self.inputs.clk = level;
    }

    fn set_rst_n(&mut self, level: bool) {
        self.inputs.rst_n = level;
    }

    fn set_din(&mut self, value: u8) {
        self.inputs.din = value & DATA_MASK;
    }

    fn set_store(&mut self, level: bool) {
        self.inputs.store = level;
    }

    fn set_next(&mut self, level: bool) {
        self.inputs.next = level;
    }

    fn set_prev(&mut self, level: bool) {
        self.inputs.prev = level;
    }

    fn addr(&self) -> u32 {
        self.addr as u32
    }

    fn dout(&self) -> u8 {
        self.dout
    }

    fn eval(&mut self) {
        if self.inputs.clk && !self.last_clk {
            self.posedge();
        }
        self.last_clk = self.inputs.clk;
        self.dout = self.cells[self.addr];
    }
}
