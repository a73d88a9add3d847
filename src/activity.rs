//! Activity (wake-on-motion) threshold types
//!
//! The ADXL362 stores activity and inactivity thresholds as unsigned 11-bit
//! magnitudes split across two registers: the low 8 bits in `THRESH_*_L` and
//! the high 3 bits in `THRESH_*_H`. The hardware silently truncates values
//! above 2047, so validation happens here, before any register write.

use crate::measurement::MeasurementRange;

/// Maximum representable threshold code (11 bits)
pub const MAX_THRESHOLD_CODE: u16 = 0x07FF;

/// A validated 11-bit activity/inactivity threshold magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivityThreshold(u16);

impl ActivityThreshold {
    /// Create a threshold from a raw 11-bit code
    ///
    /// Returns `None` for codes above 2047 rather than letting the register
    /// encoding truncate them.
    #[must_use]
    pub const fn from_raw(code: u16) -> Option<Self> {
        if code > MAX_THRESHOLD_CODE {
            None
        } else {
            Some(Self(code))
        }
    }

    /// Create a threshold from a magnitude in milli-g for the given range
    ///
    /// The threshold registers use the same per-LSB weight as the 12-bit
    /// acceleration data for the selected range (1 mg at ±2g, 2 mg at ±4g,
    /// 4 mg at ±8g). Returns `None` if the resulting code does not fit in
    /// 11 bits.
    #[must_use]
    pub const fn from_milli_g(milli_g: u32, range: MeasurementRange) -> Option<Self> {
        let code = milli_g / range.threshold_lsb_mg();
        if code > MAX_THRESHOLD_CODE as u32 {
            None
        } else {
            Some(Self(code as u16))
        }
    }

    /// Get the raw 11-bit code
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Split into the two register values: (low 8 bits, high 3 bits)
    #[must_use]
    pub const fn encode(self) -> (u8, u8) {
        ((self.0 & 0xFF) as u8, (self.0 >> 8) as u8)
    }

    /// Reassemble a threshold from its two register values
    ///
    /// Only the low 3 bits of `high` participate, mirroring the hardware.
    #[must_use]
    pub const fn decode(low: u8, high: u8) -> Self {
        Self(((high as u16 & 0x07) << 8) | low as u16)
    }
}

/// Activity detection configuration
///
/// Programmed by [`crate::Adxl362Driver::set_activity_threshold`], which also
/// routes activity detection to the INT1 wake pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivityConfig {
    /// Detection threshold magnitude
    pub threshold: ActivityThreshold,
    /// Consecutive samples above threshold before activity asserts
    /// (`TIME_ACT`, in samples at the current ODR)
    pub time: u8,
    /// Referenced (true) or absolute (false) detection. Referenced mode
    /// compares against a baseline captured when measurement starts, which
    /// makes detection orientation-independent.
    pub referenced: bool,
}

impl ActivityConfig {
    /// Configuration detecting the given raw threshold code immediately
    /// (no time qualification), in referenced mode
    #[must_use]
    pub const fn from_raw(code: u16) -> Option<Self> {
        match ActivityThreshold::from_raw(code) {
            Some(threshold) => Some(Self {
                threshold,
                time: 0,
                referenced: true,
            }),
            None => None,
        }
    }

    /// Configuration detecting the given magnitude in milli-g for the given
    /// range, in referenced mode
    #[must_use]
    pub const fn from_milli_g(milli_g: u32, range: MeasurementRange) -> Option<Self> {
        match ActivityThreshold::from_milli_g(milli_g, range) {
            Some(threshold) => Some(Self {
                threshold,
                time: 0,
                referenced: true,
            }),
            None => None,
        }
    }
}
