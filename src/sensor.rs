//! MPU9250 Blocking Driver Implementation
//!
//! Brings the inertial part and the AK8963 magnetometer into a fixed sensing
//! configuration and converts their data registers into scaled readings.
//!
//! Every call blocks on the I2C bus until the transaction completes or the
//! HAL gives up. Nothing is retried except the initial address probe, and
//! errors are returned as soon as they happen.

use crate::{
    accel::{Accel, AccelF32, AccelFullScale},
    address::{Address, Device},
    clock_source::ClockSource,
    config::{
        AccelDigitalLowPassFilter, Config, DigitalLowPassFilter, MagMode, ACCEL_FILTER,
        CLOCK_DELAY_MS, GYRO_FILTER, INT_PIN_CONFIG, MAG_MODE, MAG_MODE_DELAY_MS, MAG_OUTPUT,
        SAMPLE_RATE_DIVIDER, WAKE_DELAY_MS,
    },
    error::{Error, InitError},
    gyro::{Gyro, GyroF32, GyroFullScale},
    magnetometer::{self, Mag, MagF32, MagScale},
    registers::{
        MagRegister, Register, ACCEL_CONFIG_2_MASK, FS_SEL_MASK, GYRO_FCHOICE_B_MASK,
        PWR_MGMT_1_RESET, RAW_DATA_RDY, WHO_AM_I_VALUE, WIA_VALUE,
    },
    temperature::{Temperature, TEMP_MULTIPLIER},
};
use core::fmt::{Debug, Formatter};
use embedded_hal::{delay, i2c::I2c};
use log::{debug, trace, warn};

/// Attempts made by the address probe before the device is reported missing.
const PROBE_TRIALS: usize = 2;

/// Data bytes sent per burst write.
const MAX_BURST: usize = 16;

/// Latest raw sample of one quantity together with its scaled value.
///
/// Both halves are replaced in one assignment, so they always come from the same sample.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Reading<R, S> {
    raw: R,
    scaled: S,
}

impl<R: Copy, S: Copy> Reading<R, S> {
    pub fn new(raw: R, scaled: S) -> Self {
        Self { raw, scaled }
    }

    pub fn raw(&self) -> R {
        self.raw
    }

    pub fn scaled(&self) -> S {
        self.scaled
    }
}

/// Addresses, conversion factors and the most recent samples of one sensor package.
///
/// Only a successfully initialized driver owns one, so the multipliers are always set.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct DeviceState {
    address: Address,
    mag_address: Address,
    accel_multiplier: f32,
    gyro_multiplier: f32,
    mag_multiplier: f32,
    temp_multiplier: f32,
    accel: Reading<Accel, AccelF32>,
    gyro: Reading<Gyro, GyroF32>,
    mag: Reading<Mag, MagF32>,
    temperature: Reading<Temperature, f32>,
}

impl DeviceState {
    fn new(device: Device, config: Config) -> Self {
        Self {
            address: Address::inertial(device),
            mag_address: Address::magnetometer(),
            accel_multiplier: config.accel_scale.multiplier(),
            gyro_multiplier: config.gyro_scale.multiplier(),
            mag_multiplier: config.mag_scale.multiplier(),
            temp_multiplier: TEMP_MULTIPLIER,
            accel: Reading::default(),
            gyro: Reading::default(),
            mag: Reading::default(),
            temperature: Reading::default(),
        }
    }

    /// 8-bit address of the inertial part.
    pub fn address(&self) -> Address {
        self.address
    }

    /// 8-bit address of the magnetometer.
    pub fn mag_address(&self) -> Address {
        self.mag_address
    }

    pub fn accel_multiplier(&self) -> f32 {
        self.accel_multiplier
    }

    pub fn gyro_multiplier(&self) -> f32 {
        self.gyro_multiplier
    }

    pub fn mag_multiplier(&self) -> f32 {
        self.mag_multiplier
    }

    pub fn temp_multiplier(&self) -> f32 {
        self.temp_multiplier
    }

    pub fn acceleration(&self) -> Reading<Accel, AccelF32> {
        self.accel
    }

    pub fn angular_rate(&self) -> Reading<Gyro, GyroF32> {
        self.gyro
    }

    pub fn magnetic_field(&self) -> Reading<Mag, MagF32> {
        self.mag
    }

    pub fn temperature(&self) -> Reading<Temperature, f32> {
        self.temperature
    }
}

/// InvenSense MPU-9250 Driver
pub struct Mpu9250<I>
where
    I: I2c,
{
    i2c: I,
    state: DeviceState,
}

impl<I> Debug for Mpu9250<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mpu9250")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<I> Mpu9250<I>
where
    I: I2c,
{
    /// Probe, identify and configure both devices of the package.
    ///
    /// On failure the bus is handed back in [`InitError`] and the whole
    /// sequence has to be run again; no partial configuration is kept.
    pub fn initialize(
        i2c: I,
        delay: &mut impl delay::DelayNs,
        device: Device,
        config: Config,
    ) -> Result<Self, InitError<I>> {
        let mut sensor = Self {
            i2c,
            state: DeviceState::new(device, config),
        };

        if let Err(error) = sensor.configure(delay, config) {
            Err(InitError {
                error,
                i2c: sensor.i2c,
            })
        } else {
            Ok(sensor)
        }
    }

    /// Same as [`Mpu9250::initialize`], taking raw register codes for the
    /// instance selector and the three full-scale selections.
    ///
    /// Codes are validated before any bus traffic.
    pub fn new_with_scales(
        i2c: I,
        delay: &mut impl delay::DelayNs,
        device: u8,
        accel_scale: u8,
        gyro_scale: u8,
        mag_scale: u8,
    ) -> Result<Self, InitError<I>> {
        let parsed = Device::try_from(device).and_then(|device| {
            Ok((
                device,
                Config::new(
                    AccelFullScale::try_from(accel_scale)?,
                    GyroFullScale::try_from(gyro_scale)?,
                    MagScale::try_from(mag_scale)?,
                ),
            ))
        });

        match parsed {
            Ok((device, config)) => Self::initialize(i2c, delay, device, config),
            Err(error) => Err(InitError {
                error: error.into(),
                i2c,
            }),
        }
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.i2c
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    fn configure(
        &mut self,
        delay: &mut impl delay::DelayNs,
        config: Config,
    ) -> Result<(), Error<I>> {
        debug!("probing inertial part at {:#04x}", self.state.address.0);
        self.probe(self.state.address)?;

        let who_am_i = self.read_register(Register::WhoAmI)?;
        if who_am_i != WHO_AM_I_VALUE {
            warn!(
                "unexpected WHO_AM_I {:#04x}, expected {:#04x}",
                who_am_i, WHO_AM_I_VALUE
            );
            return Err(Error::DeviceNotFound);
        }

        self.reset(delay)?;
        self.set_clock_source(ClockSource::AutoSelect)?;
        delay.delay_ms(CLOCK_DELAY_MS);

        self.set_digital_lowpass_filter(GYRO_FILTER)?;
        self.set_sample_rate_divider(SAMPLE_RATE_DIVIDER)?;
        self.set_gyro_full_scale(config.gyro_scale)?;
        self.set_accel_full_scale(config.accel_scale)?;
        self.set_accel_lowpass_filter(ACCEL_FILTER)?;
        self.set_interrupt_pin_config(INT_PIN_CONFIG)?;
        self.interrupt_data_ready_en()?;
        debug!("inertial part configured: {:?}", config);

        debug!("probing magnetometer at {:#04x}", self.state.mag_address.0);
        self.probe(self.state.mag_address)?;

        // Fuse ROM access has to be entered and left through power-down.
        self.set_mag_mode(MagMode::PowerDown as u8, delay)?;
        self.set_mag_mode(MagMode::FuseRomAccess as u8, delay)?;
        self.set_mag_mode(MagMode::PowerDown as u8, delay)?;
        self.set_mag_mode(MAG_MODE.with_output(MAG_OUTPUT), delay)?;
        debug!("magnetometer in continuous measurement mode");

        Ok(())
    }

    fn read(
        &mut self,
        address: Address,
        bytes: &[u8],
        response: &mut [u8],
    ) -> Result<(), Error<I>> {
        self.i2c
            .write_read(address.seven_bit(), bytes, response)
            .map_err(|e| Error::WriteReadError(e))
    }

    fn write(&mut self, address: Address, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c
            .write(address.seven_bit(), bytes)
            .map_err(|e| Error::WriteError(e))
    }

    /// Address-only write, repeated up to [`PROBE_TRIALS`] times.
    ///
    /// The per-attempt timeout is whatever the HAL uses for a zero-length write.
    fn probe(&mut self, address: Address) -> Result<(), Error<I>> {
        for _ in 0..PROBE_TRIALS {
            if self.i2c.write(address.seven_bit(), &[]).is_ok() {
                return Ok(());
            }
        }
        warn!("no device acknowledged address {:#04x}", address.0);
        Err(Error::DeviceNotFound)
    }

    pub(crate) fn read_register(&mut self, reg: Register) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(self.state.address, &[reg as u8], &mut buf)?;
        Ok(buf[0])
    }

    pub(crate) fn read_registers<'a>(
        &mut self,
        reg: Register,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], Error<I>> {
        self.read(self.state.address, &[reg as u8], buf)?;
        Ok(buf)
    }

    pub(crate) fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I>> {
        self.write(self.state.address, &[reg as u8, value])
    }

    /// Burst write starting at `reg`, relying on register auto-increment.
    pub(crate) fn write_registers(&mut self, reg: Register, data: &[u8]) -> Result<(), Error<I>> {
        for (i, chunk) in data.chunks(MAX_BURST).enumerate() {
            let mut buf = [0; MAX_BURST + 1];
            buf[0] = reg as u8 + (i * MAX_BURST) as u8;
            buf[1..=chunk.len()].copy_from_slice(chunk);
            self.write(self.state.address, &buf[..=chunk.len()])?;
        }
        Ok(())
    }

    fn read_mag_register(&mut self, reg: MagRegister) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(self.state.mag_address, &[reg as u8], &mut buf)?;
        Ok(buf[0])
    }

    fn read_mag_registers<'a>(
        &mut self,
        reg: MagRegister,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], Error<I>> {
        self.read(self.state.mag_address, &[reg as u8], buf)?;
        Ok(buf)
    }

    fn write_mag_register(&mut self, reg: MagRegister, value: u8) -> Result<(), Error<I>> {
        self.write(self.state.mag_address, &[reg as u8, value])
    }

    /// Clear PWR_MGMT_1: leaves sleep and selects the internal oscillator.
    pub fn reset(&mut self, clock: &mut impl delay::DelayNs) -> Result<(), Error<I>> {
        self.write_register(Register::PwrMgmt1, PWR_MGMT_1_RESET)?;
        clock.delay_ms(WAKE_DELAY_MS);
        Ok(())
    }

    /// Pick the clock-source. The caller has to wait for the PLL to settle.
    pub fn set_clock_source(&mut self, clock_source: ClockSource) -> Result<(), Error<I>> {
        self.write_register(Register::PwrMgmt1, clock_source as u8)
    }

    pub fn set_digital_lowpass_filter(
        &mut self,
        filter: DigitalLowPassFilter,
    ) -> Result<(), Error<I>> {
        self.write_register(Register::Config, filter as u8)
    }

    pub fn set_sample_rate_divider(&mut self, div: u8) -> Result<(), Error<I>> {
        self.write_register(Register::SmpRtDiv, div)
    }

    /// Also clears FCHOICE_B so the gyro DLPF is in use.
    pub fn set_gyro_full_scale(&mut self, scale: GyroFullScale) -> Result<(), Error<I>> {
        let mut value = self.read_register(Register::GyroConfig)?;
        value &= !(GYRO_FCHOICE_B_MASK | FS_SEL_MASK);
        value |= scale.code();
        self.write_register(Register::GyroConfig, value)
    }

    pub fn set_accel_full_scale(&mut self, scale: AccelFullScale) -> Result<(), Error<I>> {
        let mut value = self.read_register(Register::AccelConfig)?;
        value &= !FS_SEL_MASK;
        value |= scale.code();
        self.write_register(Register::AccelConfig, value)
    }

    pub fn set_accel_lowpass_filter(
        &mut self,
        filter: AccelDigitalLowPassFilter,
    ) -> Result<(), Error<I>> {
        let mut value = self.read_register(Register::AccelConfig2)?;
        value &= !ACCEL_CONFIG_2_MASK;
        value |= filter as u8;
        self.write_register(Register::AccelConfig2, value)
    }

    pub fn set_interrupt_pin_config(&mut self, value: u8) -> Result<(), Error<I>> {
        self.write_register(Register::IntPinCfg, value)
    }

    /// Enables the raw data ready interrupt source
    pub fn interrupt_data_ready_en(&mut self) -> Result<(), Error<I>> {
        self.write_register(Register::IntEnable, RAW_DATA_RDY)
    }

    /// Write CNTL1 and wait for the mode transition.
    pub fn set_mag_mode(
        &mut self,
        cntl: u8,
        delay: &mut impl delay::DelayNs,
    ) -> Result<(), Error<I>> {
        self.write_mag_register(MagRegister::Cntl, cntl)?;
        delay.delay_ms(MAG_MODE_DELAY_MS);
        Ok(())
    }

    /// Re-reads both identity registers.
    ///
    /// Returns `false` when either device answers with an unexpected identity.
    pub fn check_connection(&mut self) -> Result<bool, Error<I>> {
        let who_am_i = self.read_register(Register::WhoAmI)?;
        let wia = self.read_mag_register(MagRegister::Wia)?;
        Ok(who_am_i == WHO_AM_I_VALUE && wia == WIA_VALUE)
    }

    /// Whether INT_STATUS reports new raw data. Reading clears the status on the device.
    pub fn is_data_ready(&mut self) -> Result<bool, Error<I>> {
        let status = self.read_register(Register::IntStatus)?;
        Ok(status & RAW_DATA_RDY != 0)
    }

    pub fn read_acceleration(&mut self) -> Result<AccelF32, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::AccelX_H, &mut data)?;
        let raw = Accel::from_bytes(data);
        let scaled = raw.scaled_by(self.state.accel_multiplier);
        trace!("accel raw {:?}", raw);
        self.state.accel = Reading::new(raw, scaled);
        Ok(scaled)
    }

    pub fn read_angular_rate(&mut self) -> Result<GyroF32, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroX_H, &mut data)?;
        let raw = Gyro::from_bytes(data);
        let scaled = raw.scaled_by(self.state.gyro_multiplier);
        trace!("gyro raw {:?}", raw);
        self.state.gyro = Reading::new(raw, scaled);
        Ok(scaled)
    }

    /// Reads the magnetometer if it has a new measurement.
    ///
    /// `Ok(None)` means ST1 reported no new data and nothing was read; poll again later.
    /// On overflow the stored reading is left untouched.
    pub fn read_magnetic_field(&mut self) -> Result<Option<MagF32>, Error<I>> {
        let st1 = self.read_mag_register(MagRegister::St1)?;
        if !magnetometer::data_ready(st1) {
            return Ok(None);
        }

        // HXL..HZH plus ST2, which also releases the data registers.
        let mut data = [0; 7];
        self.read_mag_registers(MagRegister::Hxl, &mut data)?;
        if magnetometer::overflowed(data[6]) {
            warn!("magnetometer overflow, ST2 = {:#04x}", data[6]);
            return Err(Error::SensorOverflow);
        }

        let raw = Mag::from_bytes([data[0], data[1], data[2], data[3], data[4], data[5]]);
        let scaled = raw.scaled_by(self.state.mag_multiplier);
        trace!("mag raw {:?}", raw);
        self.state.mag = Reading::new(raw, scaled);
        Ok(Some(scaled))
    }

    /// Die temperature in degrees Celsius.
    pub fn read_temperature(&mut self) -> Result<f32, Error<I>> {
        let mut data = [0; 2];
        self.read_registers(Register::TempOut_H, &mut data)?;
        let raw = Temperature::from_bytes(data);
        let celsius = raw.celsius_with(self.state.temp_multiplier);
        trace!("temperature raw {}", raw.raw());
        self.state.temperature = Reading::new(raw, celsius);
        Ok(celsius)
    }

    pub fn get_accel_offsets(&mut self) -> Result<Accel, Error<I>> {
        let mut data = [0; 8];
        self.read_registers(Register::AccelOffsetX_H, &mut data)?;
        Ok(Accel::from_bytes([
            data[0], data[1], data[3], data[4], data[6], data[7],
        ]))
    }

    pub fn get_gyro_offsets(&mut self) -> Result<Gyro, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroOffsetX_H, &mut data)?;
        Ok(Gyro::from_bytes(data))
    }

    /// The accelerometer offset registers are not contiguous, so each axis is its own burst.
    pub fn set_accel_offsets(&mut self, values: &Accel) -> Result<(), Error<I>> {
        let data = values.to_bytes();
        self.write_registers(Register::AccelOffsetX_H, &data[0..2])?;
        self.write_registers(Register::AccelOffsetY_H, &data[2..4])?;
        self.write_registers(Register::AccelOffsetZ_H, &data[4..6])
    }

    pub fn set_gyro_offsets(&mut self, values: &Gyro) -> Result<(), Error<I>> {
        self.write_registers(Register::GyroOffsetX_H, &values.to_bytes())
    }
}
