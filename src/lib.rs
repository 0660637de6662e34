//! Blocking I2C driver for the InvenSense MPU-9250.
//!
//! The package combines an MPU-6500 accelerometer/gyroscope with an AK8963
//! magnetometer. [`sensor::Mpu9250::initialize`] brings both into a fixed
//! sensing configuration; the `read_*` methods then return scaled samples and
//! keep the latest raw/scaled pair in [`sensor::DeviceState`].
//!
//! ```ignore
//! use mpu9250::{address::Device, config::Config, sensor::Mpu9250};
//!
//! let mut mpu = Mpu9250::initialize(i2c, &mut delay, Device::Device0, Config::default())
//!     .map_err(|e| e.error)?;
//!
//! if mpu.is_data_ready()? {
//!     let accel = mpu.read_acceleration()?;
//!     let gyro = mpu.read_angular_rate()?;
//!     let celsius = mpu.read_temperature()?;
//! }
//! if let Some(field) = mpu.read_magnetic_field()? {
//!     // new magnetometer sample
//! }
//! ```
#![cfg_attr(not(test), no_std)]

pub mod accel;
pub mod address;
pub mod clock_source;
pub mod config;
pub mod error;
pub mod gyro;
pub mod magnetometer;
pub mod registers;
pub mod sensor;
pub mod temperature;
