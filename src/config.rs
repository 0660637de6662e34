//! MPU9250 Sensing Configuration
//!
//! Collects the register values written during initialization:
//! - gyroscope / temperature digital low-pass filter (CONFIG)
//! - sample rate divider (SMPLRT_DIV)
//! - accelerometer digital low-pass filter (ACCEL_CONFIG_2)
//! - interrupt pin behaviour (INT_PIN_CFG)
//! - magnetometer operating mode (CNTL1)
//!
//! Only the full-scale ranges are chosen by the caller, through [`Config`].
//! Everything else is fixed to the values below.

use crate::{accel::AccelFullScale, gyro::GyroFullScale, magnetometer::MagScale};

/// Gyroscope and temperature digital low-pass filter, DLPF_CFG[2:0].
///
/// Bandwidths apply with FCHOICE_B = 00.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum DigitalLowPassFilter {
    /// Gyro 250 Hz, temperature 4000 Hz, Fs = 8 kHz
    Filter0 = 0,
    /// Gyro 184 Hz, temperature 188 Hz, Fs = 1 kHz
    Filter1 = 1,
    /// Gyro 92 Hz, temperature 98 Hz, Fs = 1 kHz
    Filter2 = 2,
    /// Gyro 41 Hz, temperature 42 Hz, Fs = 1 kHz, 5.9 ms delay
    Filter3 = 3,
    /// Gyro 20 Hz, temperature 20 Hz, Fs = 1 kHz
    Filter4 = 4,
    /// Gyro 10 Hz, temperature 10 Hz, Fs = 1 kHz
    Filter5 = 5,
    /// Gyro 5 Hz, temperature 5 Hz, Fs = 1 kHz
    Filter6 = 6,
}

/// Accelerometer digital low-pass filter, A_DLPFCFG[2:0] with ACCEL_FCHOICE_B = 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum AccelDigitalLowPassFilter {
    /// 218.1 Hz
    Filter0 = 0,
    /// 218.1 Hz
    Filter1 = 1,
    /// 99 Hz
    Filter2 = 2,
    /// 44.8 Hz
    Filter3 = 3,
    /// 21.2 Hz
    Filter4 = 4,
    /// 10.2 Hz
    Filter5 = 5,
    /// 5.05 Hz
    Filter6 = 6,
    /// 420 Hz
    Filter7 = 7,
}

/// INT_PIN_CFG bits.
pub mod int_pin {
    /// INT pin is active low
    pub const ACTL: u8 = 1 << 7;
    /// INT pin is open drain
    pub const OPEN: u8 = 1 << 6;
    /// INT pin stays asserted until cleared
    pub const LATCH_INT_EN: u8 = 1 << 5;
    /// Any read clears the interrupt status
    pub const INT_ANYRD_2CLEAR: u8 = 1 << 4;
    /// I2C bypass: the auxiliary bus is connected to the main bus
    pub const BYPASS_EN: u8 = 1 << 1;
}

/// AK8963 operating mode, CNTL1 MODE[3:0].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum MagMode {
    PowerDown = 0x00,
    SingleMeasurement = 0x01,
    /// 8 Hz
    ContinuousMeasurement1 = 0x02,
    /// 100 Hz
    ContinuousMeasurement2 = 0x06,
    ExternalTrigger = 0x04,
    SelfTest = 0x08,
    FuseRomAccess = 0x0F,
}

impl MagMode {
    /// CNTL1 value for this mode with the given output resolution in BIT[4].
    pub const fn with_output(self, scale: MagScale) -> u8 {
        (self as u8) | (scale.code() << 4)
    }
}

/// Gyro bandwidth 41 Hz, internal rate 1 kHz.
pub const GYRO_FILTER: DigitalLowPassFilter = DigitalLowPassFilter::Filter3;

/// 1 kHz / (1 + 4) = 200 Hz output rate.
pub const SAMPLE_RATE_DIVIDER: u8 = 4;

/// Accel bandwidth 44.8 Hz.
pub const ACCEL_FILTER: AccelDigitalLowPassFilter = AccelDigitalLowPassFilter::Filter3;

/// Push-pull, active high, latched until cleared, bypass to the magnetometer enabled.
pub const INT_PIN_CONFIG: u8 = int_pin::LATCH_INT_EN | int_pin::BYPASS_EN;

/// Magnetometer measurement mode entered at the end of initialization.
pub const MAG_MODE: MagMode = MagMode::ContinuousMeasurement1;

/// Output resolution programmed into the magnetometer. Independent of [`Config::mag_scale`],
/// which only selects the conversion factor.
pub const MAG_OUTPUT: MagScale = MagScale::Bits16;

/// Settle time after waking the device (ms).
pub const WAKE_DELAY_MS: u32 = 100;
/// Settle time after selecting the clock source (ms).
pub const CLOCK_DELAY_MS: u32 = 200;
/// Settle time after each magnetometer mode change (ms).
pub const MAG_MODE_DELAY_MS: u32 = 10;

/// Full-scale selections chosen by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub accel_scale: AccelFullScale,
    pub gyro_scale: GyroFullScale,
    pub mag_scale: MagScale,
}

impl Config {
    pub const fn new(
        accel_scale: AccelFullScale,
        gyro_scale: GyroFullScale,
        mag_scale: MagScale,
    ) -> Self {
        Self {
            accel_scale,
            gyro_scale,
            mag_scale,
        }
    }
}

impl Default for Config {
    /// ±16g, ±2000 °/s, 16-bit magnetometer output.
    fn default() -> Self {
        Self::new(
            AccelFullScale::G16,
            GyroFullScale::Deg2000,
            MagScale::Bits16,
        )
    }
}
