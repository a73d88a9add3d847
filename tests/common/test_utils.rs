//! Shared test helpers: mock delay, sleep controller, indicator and driver
//! constructors

use std::cell::RefCell;
use std::rc::Rc;

use adxl362::cycle::Indicator;
use adxl362::wake::SleepControl;
use adxl362::{ActivityConfig, Adxl362Driver};
use embedded_hal::delay::DelayNs;

use super::mock_interface::MockInterface;

/// Delay provider that returns immediately, recording the requested
/// millisecond waits
#[derive(Clone, Default)]
pub struct MockDelay {
    /// Millisecond delays requested, in order
    pub requested_ms: Rc<RefCell<Vec<u32>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.requested_ms.borrow_mut().push(ns.div_ceil(1_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.requested_ms.borrow_mut().push(us.div_ceil(1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.requested_ms.borrow_mut().push(ms);
    }
}

/// Sleep-controller operations, for order verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepOp {
    ArmWakeSources,
    SuspendTick,
    EnterDeepSleep,
    ResumeTick,
}

/// Sleep controller that records the call sequence
///
/// Clones share the log, so tests keep a handle while the cycle owns another.
#[derive(Clone, Default)]
pub struct MockSleep {
    pub log: Rc<RefCell<Vec<SleepOp>>>,
}

impl MockSleep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Vec<SleepOp> {
        self.log.borrow().clone()
    }
}

impl SleepControl for MockSleep {
    fn arm_wake_sources(&mut self) {
        self.log.borrow_mut().push(SleepOp::ArmWakeSources);
    }

    fn suspend_tick(&mut self) {
        self.log.borrow_mut().push(SleepOp::SuspendTick);
    }

    fn enter_deep_sleep(&mut self) {
        self.log.borrow_mut().push(SleepOp::EnterDeepSleep);
    }

    fn resume_tick(&mut self) {
        self.log.borrow_mut().push(SleepOp::ResumeTick);
    }
}

/// Indicator that records every on/off transition
#[derive(Clone, Default)]
pub struct MockIndicator {
    pub transitions: Rc<RefCell<Vec<bool>>>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transitions(&self) -> Vec<bool> {
        self.transitions.borrow().clone()
    }
}

impl Indicator for MockIndicator {
    fn set_active(&mut self, on: bool) {
        self.transitions.borrow_mut().push(on);
    }
}

/// Create a driver over a fresh mock interface
///
/// Returns the driver plus a shared handle to the interface for inspection.
pub fn create_mock_driver() -> (Adxl362Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let driver = Adxl362Driver::new(interface.clone());
    (driver, interface)
}

/// Create a driver that has completed a verified reset
pub fn create_reset_driver() -> (Adxl362Driver<MockInterface>, MockInterface) {
    let (mut driver, interface) = create_mock_driver();
    let mut delay = MockDelay::new();
    driver
        .reset_and_verify(&mut delay)
        .expect("reset should succeed against the mock");
    interface.clear_operations();
    (driver, interface)
}

/// Create a driver configured for activity detection and measuring
pub fn create_measuring_driver() -> (Adxl362Driver<MockInterface>, MockInterface) {
    let (mut driver, interface) = create_reset_driver();
    let config = ActivityConfig::from_raw(250).expect("valid threshold");
    driver
        .set_activity_threshold(&config)
        .expect("configuration should succeed against the mock");
    driver
        .set_measurement_enabled(true)
        .expect("measurement enable should succeed against the mock");
    interface.clear_operations();
    (driver, interface)
}
