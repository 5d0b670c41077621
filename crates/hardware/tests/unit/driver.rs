//! # Cycle Driver Tests
//!
//! Drives `MockRegisterDevice`, which counts rising edges and latches `din`
//! on store, so every pin write and evaluation the driver performs can be
//! inspected.

use crate::common::mocks::memory::{MockRegisterDevice, PinEvent};
use nibblesim_core::config::DriverConfig;
use nibblesim_core::sim::{CommandLine, CycleDriver, LineOutcome, Status};

const TICK: [PinEvent; 6] = [
    PinEvent::Clk(false),
    PinEvent::Eval,
    PinEvent::Clk(true),
    PinEvent::Eval,
    PinEvent::Clk(false),
    PinEvent::Eval,
];

fn driver() -> CycleDriver<MockRegisterDevice> {
    CycleDriver::new(MockRegisterDevice::new(), &DriverConfig::default())
}

/// Events logged since `mark`.
fn events_since(driver: &CycleDriver<MockRegisterDevice>, mark: usize) -> Vec<PinEvent> {
    driver.device().events[mark..].to_vec()
}

// ══════════════════════════════════════════════════════════
// Startup
// ══════════════════════════════════════════════════════════

#[test]
fn startup_holds_reset_for_two_cycles_then_releases() {
    let driver = driver();
    let mut expected = vec![
        PinEvent::RstN(false),
        PinEvent::Din(0),
        PinEvent::Store(false),
        PinEvent::Next(false),
        PinEvent::Prev(false),
    ];
    expected.extend(TICK);
    expected.extend(TICK);
    expected.push(PinEvent::RstN(true));
    expected.extend(TICK);

    assert_eq!(driver.device().events, expected);
    assert_eq!(driver.stats().cycles, 3);
    // Only the post-release edge counts.
    assert_eq!(driver.device().edges(), 1);
    assert!(driver.device().rst_n());
    assert!(!driver.device().clk());
}

#[test]
fn startup_cycle_counts_follow_config() {
    let config = DriverConfig {
        reset_cycles: 4,
        release_cycles: 3,
    };
    let driver = CycleDriver::new(MockRegisterDevice::new(), &config);
    assert_eq!(driver.stats().cycles, 7);
    assert_eq!(driver.device().edges(), 3);
}

#[test]
fn startup_is_deterministic() {
    let a = driver();
    let b = driver();
    assert_eq!(a.status(), b.status());
    assert_eq!(a.device().events, b.device().events);
}

// ══════════════════════════════════════════════════════════
// Tick
// ══════════════════════════════════════════════════════════

#[test]
fn tick_is_low_high_low_with_eval_after_each() {
    let mut driver = driver();
    let mark = driver.device().events.len();
    driver.tick();
    assert_eq!(events_since(&driver, mark), TICK);
    assert_eq!(driver.device().edges(), 2);
    assert!(!driver.device().clk());
}

// ══════════════════════════════════════════════════════════
// Step
// ══════════════════════════════════════════════════════════

#[test]
fn step_applies_pins_ticks_once_and_clears_pulses() {
    let mut driver = driver();
    let mark = driver.device().events.len();
    let status = driver.step(&CommandLine {
        data: 0x5,
        store: true,
        next: true,
        prev: false,
        reset: false,
    });

    let mut expected = vec![
        PinEvent::RstN(true),
        PinEvent::Din(0x5),
        PinEvent::Store(true),
        PinEvent::Next(true),
        PinEvent::Prev(false),
    ];
    expected.extend(TICK);
    expected.extend([
        PinEvent::Store(false),
        PinEvent::Next(false),
        PinEvent::Prev(false),
    ]);
    assert_eq!(events_since(&driver, mark), expected);
    assert_eq!(driver.device().pulses(), (false, false, false));
    assert_eq!(status, Status { addr: 2, dout: 0x5 });
}

#[test]
fn step_masks_data_to_low_nibble() {
    let mut driver = driver();
    let _ = driver.step(&CommandLine {
        data: 0xFA,
        store: true,
        ..CommandLine::default()
    });
    assert_eq!(driver.device().count(PinEvent::Din(0xA)), 1);
    assert_eq!(driver.status().dout, 0xA);
}

#[test]
fn pulses_do_not_persist_into_next_line() {
    let mut driver = driver();
    let _ = driver.step(&CommandLine {
        data: 0x3,
        store: true,
        ..CommandLine::default()
    });
    let _ = driver.step(&CommandLine::idle(0x3));
    let _ = driver.step(&CommandLine::idle(0x3));
    assert_eq!(driver.device().stores(), 1);
}

#[test]
fn reset_level_is_not_cleared_after_step() {
    let mut driver = driver();
    let _ = driver.step(&CommandLine {
        reset: true,
        ..CommandLine::default()
    });
    assert!(!driver.device().rst_n());

    // A malformed line touches no pins, so reset stays asserted.
    let _ = driver.handle_line("not a command");
    assert!(!driver.device().rst_n());

    let _ = driver.step(&CommandLine::idle(0));
    assert!(driver.device().rst_n());
}

#[test]
fn reset_held_across_lines_keeps_device_cleared() {
    let mut driver = driver();
    let held = CommandLine {
        reset: true,
        next: true,
        ..CommandLine::default()
    };
    assert_eq!(driver.step(&held), Status::default());
    assert_eq!(driver.step(&held), Status::default());
    assert_eq!(driver.step(&CommandLine::idle(0)).addr, 1);
}

// ══════════════════════════════════════════════════════════
// Line handling
// ══════════════════════════════════════════════════════════

#[test]
fn malformed_line_touches_no_pins() {
    let mut driver = driver();
    let _ = driver.step(&CommandLine {
        data: 0xB,
        store: true,
        ..CommandLine::default()
    });
    let before = driver.status();
    let mark = driver.device().events.len();
    let cycles = driver.stats().cycles;

    for line in ["", "A 1 0", "Z 0 0 0 0", "A 1 0 0 0 0", "A x 0 0 0"] {
        assert_eq!(driver.handle_line(line), LineOutcome::Report(before));
    }
    assert!(events_since(&driver, mark).is_empty());
    assert_eq!(driver.stats().cycles, cycles);
    assert_eq!(driver.stats().malformed, 5);
}

#[test]
fn quit_line_touches_no_pins() {
    let mut driver = driver();
    let mark = driver.device().events.len();
    assert_eq!(driver.handle_line("exit\n"), LineOutcome::Quit);
    assert!(events_since(&driver, mark).is_empty());
}

#[test]
fn into_device_returns_owned_device() {
    let mut driver = driver();
    driver.tick();
    let device = driver.into_device();
    assert_eq!(device.edges(), 2);
}
