//! Device trait for pin-level simulation models.
//!
//! This module defines the `Device` trait implemented by every model the
//! cycle driver can own. It mirrors the port list of the nibble memory RTL:
//! 1. **Inputs:** `clk`, `rst_n` (active low), `din` (4-bit), and the
//!    `store`/`next`/`prev` pulse controls.
//! 2. **Outputs:** `addr` and `dout`.
//! 3. **Evaluation:** `eval` propagates pending pin changes through the model.
//!
//! Driving an input only latches the new level; nothing observable changes
//! until the next `eval`.

/// Trait for clocked, pin-level device models.
///
/// Implementors hold their input pins at the last driven level, react to a
/// rising `clk` edge during `eval`, and expose settled outputs afterwards.
pub trait Device {
    /// Returns a short name for this device (e.g., `"nibble_mem"`).
    fn name(&self) -> &str;

    /// Drives the clock input.
    fn set_clk(&mut self, level: bool);
    /// Drives the active-low reset input.
    fn set_rst_n(&mut self, level: bool);
    /// Drives the data input. Only the low four bits are meaningful.
    fn set_din(&mut self, value: u8);
    /// Drives the store pulse input.
    fn set_store(&mut self, level: bool);
    /// Drives the next pulse input.
    fn set_next(&mut self, level: bool);
    /// Drives the prev pulse input.
    fn set_prev(&mut self, level: bool);

    /// Reads the address output.
    fn addr(&self) -> u32;
    /// Reads the data output.
    fn dout(&self) -> u8;

    /// Propagates input changes until the outputs settle.
    ///
    /// Simulated time only advances when this call observes a rising clock edge.
    fn eval(&mut self);
}
