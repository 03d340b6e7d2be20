//! End-to-end scenarios driving `rvm_core::Vm` the way `main` does, minus
//! the process boundary: build an in-memory program image, run it against
//! an in-memory output buffer, and check bytes produced plus the result.

use std::io::Cursor;

use rvm_core::{load_program, Vm, VmError};

fn run(words: Vec<u32>) -> (Result<(), VmError>, Vec<u8>) {
    let mut output = Vec::new();
    let result = Vm::new(words, Cursor::new(Vec::new()), &mut output).run();
    (result, output)
}

#[test]
fn scenario_halt_immediately() {
    let (result, output) = run(vec![0x7000_0000]);
    assert!(result.is_ok());
    assert!(output.is_empty());
}

#[test]
fn scenario_print_one_character() {
    let (result, output) = run(vec![0xDA00_0041, 0xA000_0005, 0x7000_0000]);
    assert!(result.is_ok());
    assert_eq!(output, b"A");
}

#[test]
fn scenario_add_and_print() {
    let words = vec![0xD000_0030, 0xD200_0009, 0x3000_0081, 0xA000_0002, 0x7000_0000];
    let (result, output) = run(words);
    assert!(result.is_ok());
    assert_eq!(output, b"9");
}

#[test]
fn scenario_allocate_store_load_print() {
    let words = vec![
        0xD000_0001,
        0x8000_0040,
        0xD400_0042,
        0xD600_0000,
        0x2000_004B,
        0x1000_0118,
        0xA000_0004,
        0x7000_0000,
    ];
    let (result, output) = run(words);
    assert!(result.is_ok());
    assert_eq!(output, b"B");
}

#[test]
fn scenario_division_by_zero_faults_with_no_output() {
    let words = vec![0xD000_000A, 0xD200_0000, 0x5000_0081, 0x7000_0000];
    let (result, output) = run(words);
    assert!(matches!(result, Err(VmError::DivideByZero)));
    assert!(output.is_empty());
}

#[test]
fn loader_reads_big_endian_words_from_disk() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("rvm-loader-test-{}.bin", std::process::id()));
    std::fs::write(&path, [0x00, 0x00, 0x00, 0x01, 0xDE, 0xAD, 0xBE, 0xEF]).unwrap();

    let words = load_program(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(words, vec![1, 0xDEAD_BEEF]);
}

#[test]
fn loader_faults_on_truncated_file() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("rvm-loader-truncated-{}.bin", std::process::id()));
    std::fs::write(&path, [0x00, 0x00, 0x00]).unwrap();

    let result = load_program(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(VmError::InvalidInput(_))));
}
