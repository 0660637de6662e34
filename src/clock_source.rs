//! MPU9250 Clock Source Configuration
//!
//! PWR_MGMT_1 CLKSEL[2:0] selects the timing reference of the inertial part:
//! - Internal 20MHz oscillator (used right after reset)
//! - Auto-select: the gyroscope PLL once it is ready, the internal oscillator before that
//!
//! The PLL needs time to lock after switching, so a settle delay must follow.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockSource {
    /// Internal 20MHz oscillator
    Internal = 0,

    /// Best available clock source: PLL if ready, else internal oscillator.
    /// Values 1 through 5 all select this behaviour.
    AutoSelect = 1,

    /// Stops the clock and keeps the timing generator in reset
    Stop = 7,
}
