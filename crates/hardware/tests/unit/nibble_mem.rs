//! # Nibble Memory Model Tests
//!
//! Pin-level behavior of `NibbleMem` without the driver: edge detection,
//! store/next/prev priority, wrap-around, and synchronous reset.

use nibblesim_core::common::SimError;
use nibblesim_core::common::constants::MAX_DEPTH;
use nibblesim_core::device::{Device, NibbleMem};
use rstest::rstest;

/// One low-high-low clock cycle.
fn clock(mem: &mut NibbleMem) {
    for level in [false, true, false] {
        mem.set_clk(level);
        mem.eval();
    }
}

/// A memory out of reset with every control low.
fn ready(depth: usize) -> NibbleMem {
    let mut mem = NibbleMem::new(depth).unwrap();
    mem.set_rst_n(true);
    mem
}

fn pulse(mem: &mut NibbleMem, store: bool, next: bool, prev: bool) {
    mem.set_store(store);
    mem.set_next(next);
    mem.set_prev(prev);
    clock(mem);
    mem.set_store(false);
    mem.set_next(false);
    mem.set_prev(false);
}

#[test]
fn default_geometry() {
    let mem = NibbleMem::default();
    assert_eq!(mem.depth(), 64);
    assert_eq!(mem.name(), "nibble_mem");
    assert_eq!(mem.peek(63), Some(0));
    assert_eq!(mem.peek(64), None);
}

#[test]
fn zero_depth_is_an_error() {
    assert!(matches!(NibbleMem::new(0), Err(SimError::InvalidDepth(0))));
}

#[test]
fn depth_beyond_address_range_is_an_error() {
    assert!(matches!(
        NibbleMem::new(MAX_DEPTH + 1),
        Err(SimError::InvalidDepth(d)) if d == MAX_DEPTH + 1
    ));
    assert!(matches!(
        NibbleMem::new(usize::MAX),
        Err(SimError::InvalidDepth(usize::MAX))
    ));
    let mem = NibbleMem::new(MAX_DEPTH).unwrap();
    assert_eq!(mem.depth(), MAX_DEPTH);
}

#[test]
fn inputs_do_nothing_without_eval() {
    let mut mem = ready(64);
    mem.set_next(true);
    mem.set_clk(true);
    assert_eq!(mem.addr(), 0);
    mem.eval();
    assert_eq!(mem.addr(), 1);
}

#[test]
fn falling_edge_does_not_clock() {
    let mut mem = ready(64);
    mem.set_clk(true);
    mem.eval();
    mem.set_next(true);
    mem.set_clk(false);
    mem.eval();
    assert_eq!(mem.addr(), 0);
}

#[rstest]
#[case::store_beats_next(true, true, false, 1, Some(0x6))]
#[case::store_beats_prev(true, false, true, 1, Some(0x6))]
#[case::next_beats_prev(false, true, true, 1, Some(0))]
#[case::prev_alone(false, false, true, 7, Some(0))]
fn pulse_priority(
    #[case] store: bool,
    #[case] next: bool,
    #[case] prev: bool,
    #[case] addr: u32,
    #[case] cell0: Option<u8>,
) {
    let mut mem = ready(8);
    mem.set_din(0x6);
    pulse(&mut mem, store, next, prev);
    assert_eq!(mem.addr(), addr);
    assert_eq!(mem.peek(0), cell0);
}

#[test]
fn din_keeps_only_low_nibble() {
    let mut mem = ready(4);
    mem.set_din(0xF5);
    pulse(&mut mem, true, false, false);
    assert_eq!(mem.peek(0), Some(0x5));
}

#[test]
fn dout_follows_address_combinationally() {
    let mut mem = ready(4);
    for value in [0x1, 0x2, 0x3, 0x4] {
        mem.set_din(value);
        pulse(&mut mem, true, false, false);
    }
    // Four stores wrapped the address back to cell 0.
    assert_eq!(mem.addr(), 0);
    assert_eq!(mem.dout(), 0x1);
    pulse(&mut mem, false, false, true);
    assert_eq!(mem.dout(), 0x4);
}

#[test]
fn reset_clears_every_cell_and_address() {
    let mut mem = ready(4);
    mem.set_din(0xE);
    pulse(&mut mem, true, false, false);
    pulse(&mut mem, true, false, false);
    mem.set_rst_n(false);
    clock(&mut mem);
    assert_eq!(mem.addr(), 0);
    assert!((0..4).all(|i| mem.peek(i) == Some(0)));
}

#[test]
fn reset_only_acts_on_a_clock_edge() {
    let mut mem = ready(4);
    mem.set_din(0xE);
    pulse(&mut mem, true, false, false);
    mem.set_rst_n(false);
    mem.eval();
    assert_eq!(mem.addr(), 1);
    assert_eq!(mem.peek(0), Some(0xE));
}
