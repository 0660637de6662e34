//! MPU9250 Register Map and Descriptions
//!
//! The package exposes two independent register maps:
//! - [`Register`]: the inertial part (MPU-6500 core), accelerometer, gyroscope and temperature
//! - [`MagRegister`]: the AK8963 magnetometer, reachable directly on the bus
//!
//! Bit-field masks used during configuration and data reads live next to
//! the registers they belong to.

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    // Self-test Registers
    SelfTestX_Gyro = 0x00,
    SelfTestY_Gyro = 0x01,
    SelfTestZ_Gyro = 0x02,
    SelfTestX_Accel = 0x0D,
    SelfTestY_Accel = 0x0E,
    SelfTestZ_Accel = 0x0F,

    // Gyroscope Calibration Registers
    /// High byte of X-axis gyroscope offset
    GyroOffsetX_H = 0x13,
    /// Low byte of X-axis gyroscope offset
    GyroOffsetX_L = 0x14,
    /// High byte of Y-axis gyroscope offset
    GyroOffsetY_H = 0x15,
    /// Low byte of Y-axis gyroscope offset
    GyroOffsetY_L = 0x16,
    /// High byte of Z-axis gyroscope offset
    GyroOffsetZ_H = 0x17,
    /// Low byte of Z-axis gyroscope offset
    GyroOffsetZ_L = 0x18,

    /// Sample Rate Divider register (0x19)
    /// SAMPLE_RATE = INTERNAL_SAMPLE_RATE / (1 + SMPLRT_DIV)
    SmpRtDiv = 0x19,

    /// Configuration register (0x1A)
    /// Controls the gyro/temperature digital low pass filter
    Config = 0x1A,

    /// Gyroscope Configuration register (0x1B)
    /// GYRO_FS_SEL[4:3], FCHOICE_B[1:0]
    GyroConfig = 0x1B,

    /// Accelerometer Configuration register (0x1C)
    /// ACCEL_FS_SEL[4:3]
    AccelConfig = 0x1C,

    /// Accelerometer Configuration 2 register (0x1D)
    /// ACCEL_FCHOICE_B[3], A_DLPFCFG[2:0]
    AccelConfig2 = 0x1D,

    /// Low Power Accelerometer ODR Control
    LpAccelOdr = 0x1E,

    /// Wake-on Motion Threshold
    WomThr = 0x1F,

    /// FIFO Enable register (0x23)
    FifoEn = 0x23,

    // I2C Master Registers
    I2cMstCtrl = 0x24,
    I2cSlv0Addr = 0x25,
    I2cSlv0Reg = 0x26,
    I2cSlv0Ctrl = 0x27,
    I2cSlv1Addr = 0x28,
    I2cSlv1Reg = 0x29,
    I2cSlv1Ctrl = 0x2A,
    I2cSlv2Addr = 0x2B,
    I2cSlv2Reg = 0x2C,
    I2cSlv2Ctrl = 0x2D,
    I2cSlv3Addr = 0x2E,
    I2cSlv3Reg = 0x2F,
    I2cSlv3Ctrl = 0x30,
    I2cSlv4Addr = 0x31,
    I2cSlv4Reg = 0x32,
    I2cSlv4Do = 0x33,
    I2cSlv4Ctrl = 0x34,
    I2cSlv4Di = 0x35,
    I2cMstStatus = 0x36,

    /// INT Pin / Bypass Enable Configuration (0x37)
    IntPinCfg = 0x37,

    /// Interrupt Enable register (0x38)
    IntEnable = 0x38,

    /// Interrupt Status register (0x3A)
    /// Bit 0 is set when new raw sensor data is available
    IntStatus = 0x3A,

    // Accelerometer Data Registers
    /// High byte of X-axis acceleration
    AccelX_H = 0x3B,
    /// Low byte of X-axis acceleration
    AccelX_L = 0x3C,
    /// High byte of Y-axis acceleration
    AccelY_H = 0x3D,
    /// Low byte of Y-axis acceleration
    AccelY_L = 0x3E,
    /// High byte of Z-axis acceleration
    AccelZ_H = 0x3F,
    /// Low byte of Z-axis acceleration
    AccelZ_L = 0x40,

    // Temperature Data Registers
    /// High byte of temperature reading
    TempOut_H = 0x41,
    /// Low byte of temperature reading
    TempOut_L = 0x42,

    // Gyroscope Data Registers
    /// High byte of X-axis angular rate
    GyroX_H = 0x43,
    /// Low byte of X-axis angular rate
    GyroX_L = 0x44,
    /// High byte of Y-axis angular rate
    GyroY_H = 0x45,
    /// Low byte of Y-axis angular rate
    GyroY_L = 0x46,
    /// High byte of Z-axis angular rate
    GyroZ_H = 0x47,
    /// Low byte of Z-axis angular rate
    GyroZ_L = 0x48,

    /// First of 24 external sensor data registers (0x49..=0x60)
    ExtSensData00 = 0x49,

    I2cSlv0Do = 0x63,
    I2cSlv1Do = 0x64,
    I2cSlv2Do = 0x65,
    I2cSlv3Do = 0x66,
    I2cMstDelayCtrl = 0x67,

    /// Signal Path Reset
    SignalPathReset = 0x68,

    /// Accelerometer Interrupt Control
    MotDetectCtrl = 0x69,

    /// User Control register (0x6A)
    UserCtrl = 0x6A,

    /// Power Management 1 register (0x6B)
    /// Controls device reset, sleep and clock source
    PwrMgmt1 = 0x6B,

    /// Power Management 2 register (0x6C)
    PwrMgmt2 = 0x6C,

    // FIFO Registers
    /// High byte of FIFO byte count
    FifoCount_H = 0x72,
    /// Low byte of FIFO byte count
    FifoCount_L = 0x73,
    /// FIFO Read Write register
    FifoRw = 0x74,

    /// Device identity register, reads [`WHO_AM_I_VALUE`]
    WhoAmI = 0x75,

    // Accelerometer Calibration Registers
    // Each axis is followed by a reserved byte, so these are not one contiguous block.
    /// High byte of X-axis accelerometer offset
    AccelOffsetX_H = 0x77,
    /// Low byte of X-axis accelerometer offset
    AccelOffsetX_L = 0x78,
    /// High byte of Y-axis accelerometer offset
    AccelOffsetY_H = 0x7A,
    /// Low byte of Y-axis accelerometer offset
    AccelOffsetY_L = 0x7B,
    /// High byte of Z-axis accelerometer offset
    AccelOffsetZ_H = 0x7D,
    /// Low byte of Z-axis accelerometer offset
    AccelOffsetZ_L = 0x7E,
}

/// AK8963 magnetometer registers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum MagRegister {
    /// Device ID, reads [`WIA_VALUE`]
    Wia = 0x00,
    /// Information
    Info = 0x01,
    /// Data Status 1, bit 0 is data ready
    St1 = 0x02,
    /// X-axis low byte. Measurement data is little-endian: HXL, HXH, HYL, HYH, HZL, HZH
    Hxl = 0x03,
    Hxh = 0x04,
    Hyl = 0x05,
    Hyh = 0x06,
    Hzl = 0x07,
    Hzh = 0x08,
    /// Data Status 2, bit 3 is magnetic sensor overflow. Must be read to finish a measurement.
    St2 = 0x09,
    /// Control 1: MODE[3:0] and BIT[4]
    Cntl = 0x0A,
    /// Self-test control
    Astc = 0x0C,
    /// I2C disable
    I2cDis = 0x0F,
    /// Sensitivity adjustment values, readable in fuse ROM access mode
    Asax = 0x10,
    Asay = 0x11,
    Asaz = 0x12,
}

/// Expected content of [`Register::WhoAmI`].
pub const WHO_AM_I_VALUE: u8 = 0x71;

/// Expected content of [`MagRegister::Wia`].
pub const WIA_VALUE: u8 = 0x48;

/// PWR_MGMT_1: device reset and wake-up value.
pub const PWR_MGMT_1_RESET: u8 = 0x00;

/// GYRO_CONFIG: FCHOICE_B[1:0]
pub const GYRO_FCHOICE_B_MASK: u8 = 0b0000_0011;
/// GYRO_CONFIG / ACCEL_CONFIG: FS_SEL[4:3]
pub const FS_SEL_MASK: u8 = 0b0001_1000;
/// ACCEL_CONFIG_2: ACCEL_FCHOICE_B[3] and A_DLPFCFG[2:0]
pub const ACCEL_CONFIG_2_MASK: u8 = 0b0000_1111;

/// INT_ENABLE / INT_STATUS: raw sensor data ready
pub const RAW_DATA_RDY: u8 = 0b0000_0001;

/// ST1: data ready
pub const ST1_DRDY: u8 = 0b0000_0001;
/// ST2: magnetic sensor overflow
pub const ST2_HOFL: u8 = 0b0000_1000;
