//! Activity-threshold programming tests

use crate::common::mock_interface::{reg, Operation};
use crate::common::test_utils::create_reset_driver;
use adxl362::{ActivityConfig, ActivityThreshold, DeviceState, Error, MeasurementRange};

#[test]
fn test_threshold_register_split() {
    let (mut driver, interface) = create_reset_driver();
    let config = ActivityConfig::from_raw(600).unwrap();
    driver.set_activity_threshold(&config).unwrap();

    // 600 = 0x258: low byte 0x58, high register carries 0x02
    assert_eq!(interface.writes_to(reg::THRESH_ACT_L), vec![0x58]);
    assert_eq!(interface.writes_to(reg::THRESH_ACT_H), vec![0x02]);
}

#[test]
fn test_threshold_low_byte_written_first() {
    let (mut driver, interface) = create_reset_driver();
    let config = ActivityConfig::from_raw(0x07FF).unwrap();
    driver.set_activity_threshold(&config).unwrap();

    let ops = interface.operations();
    let low_pos = ops
        .iter()
        .position(|op| {
            matches!(op, Operation::WriteRegister { address, .. } if *address == reg::THRESH_ACT_L)
        })
        .unwrap();
    let high_pos = ops
        .iter()
        .position(|op| {
            matches!(op, Operation::WriteRegister { address, .. } if *address == reg::THRESH_ACT_H)
        })
        .unwrap();
    assert!(low_pos < high_pos);
}

#[test]
fn test_activity_enable_and_interrupt_routing() {
    let (mut driver, interface) = create_reset_driver();
    let config = ActivityConfig::from_raw(250).unwrap();
    driver.set_activity_threshold(&config).unwrap();

    // ACT_INACT_CTL: activity enabled, referenced mode
    assert_eq!(interface.get_register(reg::ACT_INACT_CTL) & 0x03, 0x03);
    // INTMAP1: activity flag routed to INT1
    assert_ne!(interface.get_register(reg::INTMAP1) & 0x10, 0);
    assert_eq!(interface.writes_to(reg::TIME_ACT), vec![0]);
    assert_eq!(driver.state(), DeviceState::Configured);
}

#[test]
fn test_threshold_roundtrip_full_domain() {
    for code in 0..=0x07FF_u16 {
        let threshold = ActivityThreshold::from_raw(code).unwrap();
        let (low, high) = threshold.encode();
        assert_eq!(ActivityThreshold::decode(low, high).raw(), code);
    }
}

#[test]
fn test_over_11_bit_threshold_rejected() {
    let (mut driver, interface) = create_reset_driver();

    // 4000 mg at +-2g would need code 4000, beyond the 11-bit encoding
    let result = driver.set_activity_threshold_milli_g(4000);
    assert_eq!(result, Err(Error::InvalidConfig));

    // Rejected before any register write
    assert!(interface.writes_to(reg::THRESH_ACT_L).is_empty());
    assert!(interface.writes_to(reg::THRESH_ACT_H).is_empty());
    assert_eq!(driver.state(), DeviceState::Reset);
}

#[test]
fn test_milli_g_threshold_uses_current_range() {
    let (mut driver, interface) = create_reset_driver();
    driver.set_range(MeasurementRange::G8).unwrap();

    // 4 mg per LSB at +-8g
    driver.set_activity_threshold_milli_g(1000).unwrap();
    assert_eq!(interface.writes_to(reg::THRESH_ACT_L), vec![250]);
    assert_eq!(interface.writes_to(reg::THRESH_ACT_H), vec![0]);
}

#[test]
fn test_inactivity_threshold_programming() {
    let (mut driver, interface) = create_reset_driver();
    let threshold = ActivityThreshold::from_raw(0x0140).unwrap();
    driver
        .set_inactivity_threshold(threshold, 0x0102, false)
        .unwrap();

    assert_eq!(interface.get_register(0x23), 0x40);
    assert_eq!(interface.get_register(0x24), 0x01);
    // 16-bit inactivity time, low register first in the map
    assert_eq!(interface.get_register(0x25), 0x02);
    assert_eq!(interface.get_register(0x26), 0x01);
    // Inactivity enabled, absolute mode
    assert_eq!(interface.get_register(reg::ACT_INACT_CTL) & 0x0C, 0x04);
}
