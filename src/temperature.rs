/// LSB per degree Celsius of the die temperature sensor. Not selectable.
pub const TEMP_MULTIPLIER: f32 = 333.87;

/// Reading that corresponds to a raw value of zero.
pub const TEMP_OFFSET: f32 = 21.0;

/// Temperature reading from the MPU9250's internal temperature sensor.
///
/// Note: This measures the temperature of the die itself, not the ambient
/// temperature. Readings will typically be a few degrees higher than
/// ambient due to self-heating of the device during operation.
///
/// # Example
/// ```
/// # use mpu9250::temperature::Temperature;
/// let temp = Temperature::from_bytes([0x0D, 0x0B]);
///
/// assert_eq!(temp.raw(), 3339);
/// assert!((temp.celsius() - 31.0).abs() < 0.01);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    pub(crate) raw: i16,
}

impl Temperature {
    pub const fn new(raw: i16) -> Self {
        Self { raw }
    }

    /// TEMP_OUT_H, TEMP_OUT_L
    pub const fn from_bytes(data: [u8; 2]) -> Self {
        Self {
            raw: i16::from_be_bytes(data),
        }
    }

    pub fn raw(&self) -> i16 {
        self.raw
    }

    /// Convert raw temperature to degrees Celsius
    /// Temperature = TEMP_OUT / 333.87 + 21.0
    pub fn celsius(&self) -> f32 {
        self.celsius_with(TEMP_MULTIPLIER)
    }

    pub fn celsius_with(&self, multiplier: f32) -> f32 {
        (self.raw as f32) / multiplier + TEMP_OFFSET
    }
}
