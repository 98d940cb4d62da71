#![no_main]

use bincursor::fuzz::byte_reader::{harness, FuzzCase};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| harness(data));
