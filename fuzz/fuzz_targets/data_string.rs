#![no_main]

use bincursor::fuzz::data_string::{harness, FuzzCase};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| harness(data));
