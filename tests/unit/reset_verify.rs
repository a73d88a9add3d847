//! Soft-reset and identity-verification tests

use crate::common::mock_interface::reg;
use crate::common::test_utils::{create_mock_driver, MockDelay};
use adxl362::{DeviceState, Error, MeasurementRange};

#[test]
fn test_reset_writes_key_and_verifies() {
    let (mut driver, interface) = create_mock_driver();
    let mut delay = MockDelay::new();

    driver.reset_and_verify(&mut delay).unwrap();

    assert_eq!(interface.writes_to(reg::SOFT_RESET), vec![0x52]);
    assert_eq!(interface.read_count(reg::DEVID_AD), 1);
    assert_eq!(driver.state(), DeviceState::Reset);

    // Only the post-reset settle delay on the happy path
    assert_eq!(*delay.requested_ms.borrow(), vec![10]);
}

#[test]
fn test_single_retry_after_bad_identity() {
    let (mut driver, interface) = create_mock_driver();
    // First identity read returns garbage, the retry reads the real register
    interface.set_device_id_sequence(&[0x00]);
    let mut delay = MockDelay::new();

    driver.reset_and_verify(&mut delay).unwrap();

    assert_eq!(interface.writes_to(reg::SOFT_RESET), vec![0x52, 0x52]);
    assert_eq!(interface.read_count(reg::DEVID_AD), 2);
    assert_eq!(driver.state(), DeviceState::Reset);

    // Settle, one-second hold before the retry, settle again
    assert_eq!(*delay.requested_ms.borrow(), vec![10, 1000, 10]);
}

#[test]
fn test_second_failure_is_fatal() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_device_id_sequence(&[0x00, 0x5A]);
    let mut delay = MockDelay::new();

    let result = driver.reset_and_verify(&mut delay);

    // The error carries the value actually read on the second attempt
    assert_eq!(result, Err(Error::InvalidDevice(0x5A)));
    // Exactly one retry, never more
    assert_eq!(interface.writes_to(reg::SOFT_RESET), vec![0x52, 0x52]);
    assert_eq!(interface.read_count(reg::DEVID_AD), 2);

    // The driver never leaves Uninitialized, so configuration stays refused
    assert_eq!(driver.state(), DeviceState::Uninitialized);
    assert_eq!(
        driver.set_range(MeasurementRange::G4),
        Err(Error::InvalidState)
    );
}

#[test]
fn test_identity_helpers() {
    let (mut driver, interface) = create_mock_driver();

    assert_eq!(driver.read_device_id().unwrap(), 0xAD);
    assert!(driver.verify_identity().unwrap());

    interface.set_device_id_sequence(&[0x12]);
    assert!(!driver.verify_identity().unwrap());
}
