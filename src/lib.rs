#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod activity;
pub mod cycle;
pub mod device;
pub mod interface;
pub mod measurement;
pub mod registers;
pub mod wake;

// Re-export main types
pub use activity::{ActivityConfig, ActivityThreshold};
pub use cycle::{Indicator, MonitorCycle};
pub use device::{Adxl362Driver, StatusFlags};
pub use interface::SpiInterface;
pub use measurement::{DeviceState, MeasurementRange, Odr, Sample};
pub use wake::{SleepControl, TickCounter, WakeCell, WakeEvent, WakePins, WakeSources};

/// Expected value of the `DEVID_AD` register (Analog Devices vendor ID)
pub const DEVICE_ID_AD: u8 = 0xAD;

/// Expected value of the `DEVID_MST` register (MEMS device ID)
pub const DEVICE_ID_MST: u8 = 0x1D;

/// Expected value of the `PARTID` register
pub const PART_ID: u8 = 0xF2;

/// Magic byte written to `SOFT_RESET` to trigger a soft reset ("R")
pub const SOFT_RESET_KEY: u8 = 0x52;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error on the SPI link
    Bus(E),
    /// `DEVID_AD` did not read back 0xAD after a soft reset and one retry
    /// (contains the value actually read). The device is assumed absent or
    /// miswired; callers should treat this as fatal.
    InvalidDevice(u8),
    /// Invalid configuration parameter; no register write was issued
    InvalidConfig,
    /// Operation issued before the device state machine permits it
    /// (e.g. range selection before a verified reset)
    InvalidState,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
