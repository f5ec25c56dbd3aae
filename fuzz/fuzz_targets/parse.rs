#![no_main]
use libfuzzer_sys::fuzz_target;
use full_name::{Name, ReturnFormat};

fuzz_target!(|data: &str| {
    let name = Name::parse(data);
    let _ = name.format(ReturnFormat::PrefixFirstLast);
    let _ = name.validate(true);
});
