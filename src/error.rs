//! Error types for MPU9250 operations.

use core::fmt::{Debug, Formatter};
use embedded_hal::i2c::I2c;

/// Error during initialization of the sensor. Wraps [`Error`].
///
/// Hands the I2C bus back so initialization can be retried from scratch.
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InitError<I>
where
    I: I2c,
{
    pub i2c: I,
    pub error: Error<I>,
}

impl<I> Debug for InitError<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.error.fmt(f)
    }
}

/// Error for sensor operations.
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<I>
where
    I: I2c,
{
    /// Error occurred during an I2C write operation
    WriteError(I::Error),
    /// Error occurred during an I2C write-read operation
    WriteReadError(I::Error),
    /// Readiness probe was not acknowledged, or the identity register did not match
    DeviceNotFound,
    /// Magnetometer reported a magnetic sensor overflow in ST2
    SensorOverflow,
    /// Full-scale register code that maps to no known range
    InvalidScale(u8),
    /// Instance selector that is neither `Device0` nor `Device1`
    InvalidSelector(u8),
}

impl<I> Error<I>
where
    I: I2c,
{
    /// Whether the error came from the underlying bus transaction.
    pub fn is_bus_error(&self) -> bool {
        matches!(self, Self::WriteError(_) | Self::WriteReadError(_))
    }
}

impl<I> Debug for Error<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::WriteReadError(e) => f.debug_tuple("WriteReadError").field(e).finish(),
            Self::WriteError(e) => f.debug_tuple("WriteError").field(e).finish(),
            Self::DeviceNotFound => f.write_str("DeviceNotFound"),
            Self::SensorOverflow => f.write_str("SensorOverflow"),
            Self::InvalidScale(code) => f.debug_tuple("InvalidScale").field(code).finish(),
            Self::InvalidSelector(code) => f.debug_tuple("InvalidSelector").field(code).finish(),
        }
    }
}

/// Rejected raw configuration code, independent of the bus type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ConfigError {
    InvalidScale(u8),
    InvalidSelector(u8),
}

impl<I> From<ConfigError> for Error<I>
where
    I: I2c,
{
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::InvalidScale(code) => Self::InvalidScale(code),
            ConfigError::InvalidSelector(code) => Self::InvalidSelector(code),
        }
    }
}
