//! MPU9250 I2C Address Configuration
//!
//! The MPU9250 package holds two devices on the same I2C bus:
//! - the inertial part (accelerometer + gyroscope), at 0x68 or 0x69 depending on the AD0 pin
//! - the AK8963 magnetometer, always at 0x0C
//!
//! Addresses are kept in their 8-bit form (7-bit address shifted left by one),
//! which is how the register map and the instance selector are defined:
//! - 0xD0 | [`Device`] for the inertial part
//! - 0x18 for the magnetometer
//!
//! The shift is undone only when talking to `embedded-hal`, which expects 7-bit addresses.

use crate::error::ConfigError;

/// 8-bit base address of the inertial part (AD0 low).
pub const MPU9250_ADDRESS: u8 = 0xD0;

/// 8-bit address of the AK8963 magnetometer.
pub const AK8963_ADDRESS: u8 = 0x0C << 1;

/// Selects which of the two inertial part addresses to target.
///
/// The value is OR'd into [`MPU9250_ADDRESS`]:
/// - `Device0`: AD0 pin connected to GND (0xD0 / 7-bit 0x68)
/// - `Device1`: AD0 pin connected to VCC (0xD2 / 7-bit 0x69)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Device {
    #[default]
    Device0 = 0x00,
    Device1 = 0x02,
}

impl TryFrom<u8> for Device {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::Device0),
            0x02 => Ok(Self::Device1),
            other => Err(ConfigError::InvalidSelector(other)),
        }
    }
}

/// 8-bit I2C address of one of the devices in the package.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(pub u8);

impl Address {
    /// Address of the inertial part for the given instance selector.
    pub const fn inertial(device: Device) -> Self {
        Self(MPU9250_ADDRESS | device as u8)
    }

    /// Address of the magnetometer, independent of the instance selector.
    pub const fn magnetometer() -> Self {
        Self(AK8963_ADDRESS)
    }

    /// The 7-bit form used on the wire by `embedded-hal`.
    pub const fn seven_bit(self) -> u8 {
        self.0 >> 1
    }
}

impl Default for Address {
    /// Returns the inertial part address with AD0 low (0xD0).
    fn default() -> Self {
        Self::inertial(Device::Device0)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inertial_address_includes_selector() {
        assert_eq!(Address::inertial(Device::Device0).0, 0xD0);
        assert_eq!(Address::inertial(Device::Device1).0, 0xD2);
        assert_eq!(Address::inertial(Device::Device0).seven_bit(), 0x68);
        assert_eq!(Address::inertial(Device::Device1).seven_bit(), 0x69);
    }

    #[test]
    fn magnetometer_address_is_fixed() {
        assert_eq!(Address::magnetometer().0, 0x18);
        assert_eq!(Address::magnetometer().seven_bit(), 0x0C);
    }

    #[test]
    fn selector_from_raw_code() {
        assert_eq!(Device::try_from(0x00), Ok(Device::Device0));
        assert_eq!(Device::try_from(0x02), Ok(Device::Device1));
        assert_eq!(
            Device::try_from(0x01),
            Err(ConfigError::InvalidSelector(0x01))
        );
    }
}
