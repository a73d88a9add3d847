//! The main monitoring cycle
//!
//! Composes the driver, the shared wake cell and the platform sleep seam
//! into the system's outer loop: blink the liveness indicator, service
//! whatever woke us, acknowledge the sensor if it was the activity line,
//! then deep-sleep until the next wake source fires.

use core::convert::Infallible;

use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;

use crate::device::Adxl362Driver;
use crate::wake::{enter_low_power, SleepControl, WakeCell, WakeEvent};
use crate::Error;

/// Liveness indicator collaborator
///
/// Pure side-effect output (an LED on most boards); the cycle never depends
/// on reading it back and it cannot fail.
pub trait Indicator {
    /// Switch the indicator on or off
    fn set_active(&mut self, on: bool);
}

/// The sleep-until-woken main loop
///
/// This is the only place [`WakeEvent`]s are consumed: each pass takes the
/// pending event (clearing the cell back to `None`), performs the single
/// STATUS acknowledgement read when the sensor's activity line caused the
/// wake, and re-enters deep sleep. All bus traffic happens here in the main
/// context; interrupt handlers only ever write the cell.
pub struct MonitorCycle<'a, I, N, S> {
    driver: Adxl362Driver<I>,
    events: &'a WakeCell,
    indicator: N,
    sleep: S,
    liveness_ms: u32,
}

impl<'a, I, N, S> MonitorCycle<'a, I, N, S>
where
    I: RegisterInterface<AddressType = u8>,
    N: Indicator,
    S: SleepControl,
{
    /// Default liveness blink interval
    pub const DEFAULT_LIVENESS_MS: u32 = 1000;

    /// Create the cycle over a configured driver
    pub fn new(driver: Adxl362Driver<I>, events: &'a WakeCell, indicator: N, sleep: S) -> Self {
        Self {
            driver,
            events,
            indicator,
            sleep,
            liveness_ms: Self::DEFAULT_LIVENESS_MS,
        }
    }

    /// Override the liveness blink interval
    #[must_use]
    pub fn with_liveness_interval(mut self, ms: u32) -> Self {
        self.liveness_ms = ms;
        self
    }

    /// Run one wake/service/sleep pass
    ///
    /// Blinks the indicator for the liveness interval, consumes the pending
    /// wake event (issuing exactly one STATUS read if it was
    /// [`WakeEvent::SensorActivity`], which clears the sensor's latched
    /// interrupt), then suspends the tick and enters deep sleep. Returns the
    /// event that was serviced so callers can act on button presses.
    ///
    /// # Errors
    ///
    /// Returns an error if the STATUS acknowledgement read fails.
    pub fn step<D: DelayNs>(&mut self, delay: &mut D) -> Result<WakeEvent, Error<I::Error>> {
        self.sleep.arm_wake_sources();

        self.indicator.set_active(true);
        delay.delay_ms(self.liveness_ms);
        self.indicator.set_active(false);

        let event = self.events.take();
        if event == WakeEvent::SensorActivity {
            self.driver.read_status()?;
        }

        enter_low_power(&mut self.sleep);
        Ok(event)
    }

    /// Run forever
    ///
    /// Only returns on error; the caller owns the fatal path (typically an
    /// indicator-flashing halt).
    ///
    /// # Errors
    ///
    /// Returns the first bus error encountered while servicing a wake.
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> Result<Infallible, Error<I::Error>> {
        loop {
            self.step(delay)?;
        }
    }

    /// Access the driver (for reading the last sample, range or state)
    #[must_use]
    pub const fn driver(&self) -> &Adxl362Driver<I> {
        &self.driver
    }

    /// Mutable access to the driver
    pub fn driver_mut(&mut self) -> &mut Adxl362Driver<I> {
        &mut self.driver
    }

    /// Tear the cycle apart again
    pub fn into_parts(self) -> (Adxl362Driver<I>, N, S) {
        (self.driver, self.indicator, self.sleep)
    }
}
