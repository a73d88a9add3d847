//! Wake sources, tick counter and deep-sleep sequencing
//!
//! The system runs as a single blocking context plus interrupt handlers. The
//! handlers never touch the sensor bus and never wait; they only decode which
//! pin fired, record a [`WakeEvent`] and hand back the interrupt-flag mask to
//! clear. Everything shared between the two contexts lives in atomic cells
//! with a single-writer (interrupt) / single-reader (main loop) discipline.

use portable_atomic::{AtomicU32, AtomicU8, Ordering};

/// Interrupt-flag bits of the even-numbered pin group
pub const EVEN_PIN_FLAGS: u16 = 0x5555;

/// Interrupt-flag bits of the odd-numbered pin group
pub const ODD_PIN_FLAGS: u16 = 0xAAAA;

/// Reason the system woke up
///
/// Produced by interrupt handlers, consumed exactly once per sleep/wake pair
/// by the main cycle. This is a handoff cell, not a queue: a new event before
/// the previous one is consumed overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum WakeEvent {
    /// No pending event
    None = 0,
    /// First user button pressed
    ButtonA = 1,
    /// Second user button pressed
    ButtonB = 2,
    /// The sensor's activity interrupt line asserted
    SensorActivity = 3,
    /// The periodic wake timer expired
    TimerExpired = 4,
}

impl WakeEvent {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::ButtonA,
            2 => Self::ButtonB,
            3 => Self::SensorActivity,
            4 => Self::TimerExpired,
            _ => Self::None,
        }
    }
}

/// Shared wake-event cell
///
/// Written only from interrupt context via [`set`](Self::set), cleared only
/// by the main cycle via [`take`](Self::take). Declared atomic so the value
/// is re-read from memory on every access; it can change between any two
/// instructions of the main context.
#[derive(Debug)]
pub struct WakeCell(AtomicU8);

impl WakeCell {
    /// Create an empty cell (suitable for a `static`)
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU8::new(WakeEvent::None as u8))
    }

    /// Record an event, overwriting any unconsumed one (interrupt context)
    pub fn set(&self, event: WakeEvent) {
        self.0.store(event as u8, Ordering::Release);
    }

    /// Consume the pending event, leaving `None` (main context)
    pub fn take(&self) -> WakeEvent {
        WakeEvent::from_u8(self.0.swap(WakeEvent::None as u8, Ordering::AcqRel))
    }

    /// Look at the pending event without consuming it
    pub fn peek(&self) -> WakeEvent {
        WakeEvent::from_u8(self.0.load(Ordering::Acquire))
    }
}

impl Default for WakeCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-running millisecond tick counter
///
/// Incremented from the periodic tick interrupt, read by the main context.
/// Wrap-around is handled with wrapping arithmetic, so elapsed-time math
/// stays correct across the 32-bit boundary.
#[derive(Debug)]
pub struct TickCounter(AtomicU32);

impl TickCounter {
    /// Create a counter at zero (suitable for a `static`)
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Advance by one millisecond (tick interrupt context)
    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Release);
    }

    /// Current tick value in milliseconds
    pub fn ticks(&self) -> u32 {
        self.0.load(Ordering::Acquire)
    }

    /// Milliseconds elapsed since an earlier [`ticks`](Self::ticks) reading
    pub fn elapsed_since(&self, start: u32) -> u32 {
        self.ticks().wrapping_sub(start)
    }

    /// A busy-wait delay provider polling this counter
    #[must_use]
    pub const fn delay(&self) -> TickDelay<'_> {
        TickDelay(self)
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Busy-wait `DelayNs` implementation backed by a [`TickCounter`]
///
/// The wait loop only terminates while the tick interrupt is running: if the
/// tick is suspended (as it is across deep sleep), any pending delay stalls
/// forever. This is why tick suspension is scoped tightly around the sleep
/// statement in [`enter_low_power`] and nowhere else.
#[derive(Debug, Clone, Copy)]
pub struct TickDelay<'a>(&'a TickCounter);

impl embedded_hal::delay::DelayNs for TickDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        // Millisecond resolution; round up so short waits are not skipped
        self.delay_ms(ns.div_ceil(1_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ms(us.div_ceil(1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        let start = self.0.ticks();
        while self.0.elapsed_since(start) < ms {}
    }
}

/// Wake-capable input pins, by pin number within the interrupt-flag word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WakePins {
    /// Sensor INT1 activity line (rising edge)
    pub sensor_activity: u8,
    /// First user button (falling edge, glitch filtered)
    pub button_a: u8,
    /// Second user button (falling edge, glitch filtered)
    pub button_b: u8,
}

impl Default for WakePins {
    fn default() -> Self {
        // Reference board wiring: INT1 on PD7, buttons on PC9/PC10
        Self {
            sensor_activity: 7,
            button_a: 9,
            button_b: 10,
        }
    }
}

/// Decodes edge-interrupt flag words into [`WakeEvent`]s
///
/// The two pin-parity groups are serviced by separate platform interrupt
/// handlers. Each handler passes its flag word to the matching method here
/// and clears exactly the mask the method returns — the whole parity group,
/// mirroring the hardware's grouped flag register. Note this can discard a
/// concurrently pending event on another pin of the same parity.
///
/// These methods are the fixed callback slots the platform binds its
/// interrupt vectors to at startup; they run in interrupt context and
/// therefore never perform bus transfers or waits.
#[derive(Debug)]
pub struct WakeSources<'a> {
    cell: &'a WakeCell,
    pins: WakePins,
}

impl<'a> WakeSources<'a> {
    /// Create the decoder over a shared wake cell
    #[must_use]
    pub const fn new(cell: &'a WakeCell, pins: WakePins) -> Self {
        Self { cell, pins }
    }

    /// Service an even-pin-group interrupt; returns the flag mask to clear
    #[must_use]
    pub fn handle_even_pins(&self, flags: u16) -> u16 {
        self.record(flags & EVEN_PIN_FLAGS);
        EVEN_PIN_FLAGS
    }

    /// Service an odd-pin-group interrupt; returns the flag mask to clear
    #[must_use]
    pub fn handle_odd_pins(&self, flags: u16) -> u16 {
        self.record(flags & ODD_PIN_FLAGS);
        ODD_PIN_FLAGS
    }

    /// Service a periodic-timer interrupt
    ///
    /// Periodic wake is "do nothing, loop again": no event is recorded, the
    /// sleep statement simply returns. The platform handler still resets its
    /// timer counter and clears the timer's own interrupt flag.
    pub fn handle_periodic_timer(&self) {}

    fn record(&self, flags: u16) {
        // Sensor activity recorded last so it wins when several pins of the
        // same group fired together
        if flags & (1 << self.pins.button_a) != 0 {
            self.cell.set(WakeEvent::ButtonA);
        }
        if flags & (1 << self.pins.button_b) != 0 {
            self.cell.set(WakeEvent::ButtonB);
        }
        if flags & (1 << self.pins.sensor_activity) != 0 {
            self.cell.set(WakeEvent::SensorActivity);
        }
    }
}

/// Platform seam for the power-cycle controller
///
/// Implemented once per target; the trait methods map to the MCU's tick
/// timer, wake-source and energy-mode primitives.
pub trait SleepControl {
    /// Enable the wake interrupt lines and the periodic wake timer
    ///
    /// Must be idempotent; called at least once before the first sleep.
    fn arm_wake_sources(&mut self);

    /// Suspend the millisecond tick interrupt
    ///
    /// While suspended, [`TickDelay`] waits stall; nothing between this call
    /// and [`resume_tick`](Self::resume_tick) may depend on a delay.
    fn suspend_tick(&mut self);

    /// Enter the deep-sleep energy mode, preserving clock and oscillator
    /// state; returns when a wake source fires
    fn enter_deep_sleep(&mut self);

    /// Re-enable the millisecond tick interrupt
    fn resume_tick(&mut self);
}

/// Suspend the tick, deep-sleep until a wake source fires, resume the tick
///
/// The ordering is the power-saving contract this module exists to uphold:
/// the tick interrupt is stopped before sleep entry (so it cannot wake the
/// core every millisecond) and restored immediately on wake, before any
/// delay-based operation runs.
pub fn enter_low_power<S: SleepControl>(sleep: &mut S) {
    sleep.suspend_tick();
    sleep.enter_deep_sleep();
    sleep.resume_tick();
}
