#![no_main]
use libfuzzer_sys::fuzz_target;
use full_name::Name;

fuzz_target!(|data: [String; 3]| {
    let [prefix, first, last] = data;
    let name = Name::new(&prefix, &first, &last);
    if name.validate(false).is_ok() {
        let loaded = Name::parse(&name.serialize());
        assert_eq!(name.first().trim(), loaded.first());
        assert_eq!(name.last().trim(), loaded.last());
        assert_eq!(name.prefix(), loaded.prefix());
    }
});
