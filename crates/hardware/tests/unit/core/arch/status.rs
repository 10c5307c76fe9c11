//! # Status Flag Tests

use rstest::rstest;
use simplecpu_core::common::constants::{FL_N, FL_Z};
use simplecpu_core::core::arch::status::StatusFlags;

#[rstest]
#[case(0x0000, false, true)]
#[case(0x0001, false, false)]
#[case(0x7FFF, false, false)]
#[case(0x8000, true, false)]
#[case(0xFFFF, true, false)]
fn from_result(#[case] value: u16, #[case] negative: bool, #[case] zero: bool) {
    let flags = StatusFlags::from_result(value);
    assert_eq!(flags.negative(), negative);
    assert_eq!(flags.zero(), zero);
    assert!(!flags.carry());
    assert!(!flags.overflow());
}

#[test]
fn packed_bit_positions() {
    assert_eq!(StatusFlags::from_result(0).bits(), FL_Z);
    assert_eq!(StatusFlags::from_result(0x8000).bits(), FL_N);
}

#[test]
fn display_shows_set_flags() {
    assert_eq!(StatusFlags::from_result(0).to_string(), "-Z--");
    assert_eq!(StatusFlags::from_result(0x8000).to_string(), "---N");
    assert_eq!(StatusFlags::from_bits(0xF).to_string(), "VZCN");
}
