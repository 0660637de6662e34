//! Magnetometer Data Processing
//!
//! The AK8963 measures the magnetic field along three axes (X, Y, Z).
//! Unlike the inertial part, it reports each axis low byte first.
//!
//! Scaled values go through [`deg_to_rad`] after the resolution multiplier.
//! The field is not an angle, so the result is µT × π/180 rather than µT.
//! Consumers that need plain µT can divide by [`DEG_TO_RAD`] or use the raw sample.
use crate::error::ConfigError;
use crate::registers::{ST1_DRDY, ST2_HOFL};

/// π / 180
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

#[inline]
pub fn deg_to_rad(value: f32) -> f32 {
    DEG_TO_RAD * value
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mag {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl Mag {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Converts raw sensor bytes into magnetometer values.
    ///
    /// HXL..HZH hold 2 bytes per axis, little-endian, signed.
    pub const fn from_bytes(data: [u8; 6]) -> Self {
        let x = [data[0], data[1]];
        let y = [data[2], data[3]];
        let z = [data[4], data[5]];
        Self {
            x: i16::from_le_bytes(x),
            y: i16::from_le_bytes(y),
            z: i16::from_le_bytes(z),
        }
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        self.z
    }

    pub fn scaled(&self, scale: MagScale) -> MagF32 {
        self.scaled_by(scale.multiplier())
    }

    /// `deg_to_rad(raw * multiplier)` per axis.
    pub fn scaled_by(&self, multiplier: f32) -> MagF32 {
        MagF32 {
            x: deg_to_rad(self.x as f32 * multiplier),
            y: deg_to_rad(self.y as f32 * multiplier),
            z: deg_to_rad(self.z as f32 * multiplier),
        }
    }
}

/// Magnetometer output resolution, CNTL1 BIT[4].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MagScale {
    Bits14 = 0x00,
    Bits16 = 0x01,
}

impl MagScale {
    /// µT per LSB for this resolution.
    pub const fn multiplier(self) -> f32 {
        match self {
            Self::Bits14 => 0.6,
            Self::Bits16 => 0.15,
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for MagScale {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Self::Bits14),
            0x01 => Ok(Self::Bits16),
            other => Err(ConfigError::InvalidScale(other)),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagF32 {
    x: f32,
    y: f32,
    z: f32,
}

impl MagF32 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }
}

impl From<MagF32> for [f32; 3] {
    fn from(value: MagF32) -> Self {
        [value.x, value.y, value.z]
    }
}

/// Whether ST1 reports a new measurement.
pub const fn data_ready(st1: u8) -> bool {
    st1 & ST1_DRDY != 0
}

/// Whether ST2 reports magnetic sensor overflow.
pub const fn overflowed(st2: u8) -> bool {
    st2 & ST2_HOFL != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accel::Accel;

    #[test]
    fn little_endian_assembly() {
        let bytes = [0x10, 0x00, 0x00, 0x10, 0xF0, 0xFF];
        assert_eq!(Mag::from_bytes(bytes), Mag::new(0x0010, 0x1000, -16));
        // The same bytes read as inertial data give different values.
        assert_eq!(Accel::from_bytes(bytes), Accel::new(0x1000, 0x0010, -3841));
    }

    #[test]
    fn scaling_applies_degree_conversion() {
        let scaled = Mag::new(100, -100, 0).scaled(MagScale::Bits16);
        let expected = 100.0 * 0.15 * DEG_TO_RAD;
        assert_eq!(scaled.x(), deg_to_rad(100.0 * 0.15));
        assert!((scaled.x() - expected).abs() < 1e-6);
        assert!((scaled.y() + expected).abs() < 1e-6);
        assert_eq!(scaled.z(), 0.0);
    }

    #[test]
    fn scaling_is_linear_over_full_range() {
        for scale in [MagScale::Bits14, MagScale::Bits16] {
            let multiplier = scale.multiplier();
            for raw in i16::MIN..=i16::MAX {
                let scaled = Mag::new(0, raw, 0).scaled(scale);
                assert_eq!(scaled.y(), deg_to_rad(raw as f32 * multiplier));
                assert!(scaled.y().is_finite());
            }
        }
    }

    #[test]
    fn status_bits() {
        assert!(data_ready(0x01));
        assert!(data_ready(0x03));
        assert!(!data_ready(0x02));
        assert!(overflowed(0x08));
        assert!(overflowed(0x18));
        assert!(!overflowed(0x10));
    }

    #[test]
    fn resolution_from_code() {
        assert_eq!(MagScale::try_from(1), Ok(MagScale::Bits16));
        assert_eq!(MagScale::try_from(2), Err(ConfigError::InvalidScale(2)));
        assert_eq!(MagScale::Bits14.multiplier(), 0.6);
        assert_eq!(MagScale::Bits16.multiplier(), 0.15);
    }
}
