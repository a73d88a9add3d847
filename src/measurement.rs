//! Measurement range, output data rate, sample and state types

/// Measurement range (full-scale sensitivity)
///
/// The range is encoded in the top two bits of `FILTER_CTL` and determines
/// the scale factor used to convert raw samples to milli-g.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasurementRange {
    /// ±2g range (most sensitive, least range)
    G2 = 0,
    /// ±4g range
    G4 = 1,
    /// ±8g range (least sensitive, most range)
    G8 = 2,
}

impl Default for MeasurementRange {
    fn default() -> Self {
        // Power-on default of the ADXL362
        Self::G2
    }
}

impl MeasurementRange {
    /// Get the `FILTER_CTL` range field value (bits 7:6)
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Get the full-scale magnitude in g
    #[must_use]
    pub const fn full_scale_g(self) -> i32 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
        }
    }

    /// Milli-g per LSB for an 8-bit sample spanning the full scale
    ///
    /// `2 * full_scale * 1000 / 255`, in integer arithmetic.
    #[must_use]
    pub const fn scale_factor_mg(self) -> i32 {
        2 * self.full_scale_g() * 1000 / 255
    }

    /// Milli-g per LSB of the 11-bit activity/inactivity threshold encoding
    #[must_use]
    pub const fn threshold_lsb_mg(self) -> u32 {
        match self {
            Self::G2 => 1,
            Self::G4 => 2,
            Self::G8 => 4,
        }
    }
}

/// Output data rate (`FILTER_CTL` bits 2:0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Odr {
    /// 12.5 Hz
    Hz12_5 = 0,
    /// 25 Hz
    Hz25 = 1,
    /// 50 Hz
    Hz50 = 2,
    /// 100 Hz (power-on default)
    Hz100 = 3,
    /// 200 Hz
    Hz200 = 4,
    /// 400 Hz
    Hz400 = 5,
}

impl Default for Odr {
    fn default() -> Self {
        Self::Hz100
    }
}

impl Odr {
    /// Get the `FILTER_CTL` ODR field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// One 3-axis acceleration sample (raw signed 8-bit values)
///
/// Captured atomically via a single burst read; every read overwrites the
/// previous sample.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// X-axis acceleration (raw)
    pub x: i8,
    /// Y-axis acceleration (raw)
    pub y: i8,
    /// Z-axis acceleration (raw)
    pub z: i8,
}

impl Sample {
    /// Convert all three axes to milli-g using the given range
    ///
    /// The conversion must use the range that was active when the sample was
    /// taken; the driver keeps the two in sync.
    #[must_use]
    pub const fn to_milli_g(self, range: MeasurementRange) -> MilliG {
        MilliG {
            x: convert_milli_g(self.x, range),
            y: convert_milli_g(self.y, range),
            z: convert_milli_g(self.z, range),
        }
    }
}

/// One 3-axis sample converted to milli-g
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MilliG {
    /// X-axis acceleration in milli-g
    pub x: i32,
    /// Y-axis acceleration in milli-g
    pub y: i32,
    /// Z-axis acceleration in milli-g
    pub z: i32,
}

/// Convert one raw signed 8-bit sample to milli-g
///
/// Linear in the sample; the per-LSB weight grows with the range.
#[must_use]
pub const fn convert_milli_g(raw: i8, range: MeasurementRange) -> i32 {
    range.scale_factor_mg() * raw as i32
}

/// Device configuration state machine
///
/// There is no path back to `Uninitialized` except a power cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Power-up state; nothing verified yet
    Uninitialized,
    /// Soft reset performed and identity verified
    Reset,
    /// Range, activity threshold and interrupt routing programmed
    Configured,
    /// Continuous measurement enabled
    Measuring,
}
