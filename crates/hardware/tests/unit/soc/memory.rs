//! # Memory Tests
//!
//! Full-range addressing, image loading, and the dump format.

use pretty_assertions::assert_eq;
use simplecpu_core::common::SimError;
use simplecpu_core::soc::System;
use simplecpu_core::soc::memory::Memory;

#[test]
fn spans_full_address_space() {
    let mut mem = Memory::new();
    mem.write(0xFFFF, 0x1234);
    mem.write(0, 0x5678);
    assert_eq!(mem.read(0xFFFF), 0x1234);
    assert_eq!(mem.read(0), 0x5678);
    assert_eq!(mem.as_slice().len(), 65536);
}

#[test]
fn load_words_fills_prefix_only() {
    let mut mem = Memory::new();
    mem.load_words(&[1, 2, 3]).unwrap();
    assert_eq!(&mem.as_slice()[..4], &[1, 2, 3, 0]);
    assert!(mem.as_slice()[3..].iter().all(|&w| w == 0));
}

#[test]
fn load_words_accepts_exactly_full_image() {
    let mut mem = Memory::new();
    let words = vec![0xAAAA; 65536];
    mem.load_words(&words).unwrap();
    assert_eq!(mem.read(0xFFFF), 0xAAAA);
}

#[test]
fn load_words_rejects_oversized_image_untouched() {
    let mut mem = Memory::new();
    let words = vec![1; 65537];
    let err = mem.load_words(&words).unwrap_err();
    assert!(matches!(err, SimError::ImageTooLarge { words: 65537, .. }));
    assert_eq!(mem.read(0), 0);
}

#[test]
fn dump_format() {
    let mut mem = Memory::new();
    mem.load_words(&[0x2200, 0x1e00, 0xabc]).unwrap();
    assert_eq!(
        mem.dump(4),
        "Printing 4 locations in memory...\n0x0:\t0x2200\n0x1:\t0x1e00\n0x2:\t0xabc\n0x3:\t0x0\n\n"
    );
}

#[test]
fn system_with_images_keeps_memories_separate() {
    let system = System::with_images(&[0x1E00], &[7, 8]).unwrap();
    assert_eq!(system.imem.read(0), 0x1E00);
    assert_eq!(system.imem.read(1), 0);
    assert_eq!(system.dmem.read(0), 7);
    assert_eq!(system.dmem.read(1), 8);
}
