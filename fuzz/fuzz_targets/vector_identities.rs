#![no_main]

use libfuzzer_sys::fuzz_target;
use vector3::fuzzing::{ArbitraryVector3, fuzz_test_vector_identities};

fuzz_target!(|input: (ArbitraryVector3, ArbitraryVector3)| {
    fuzz_test_vector_identities(input);
});
