#![no_main]

use bincursor::fuzz::bit_writer::{harness, FuzzCase};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| harness(data));
