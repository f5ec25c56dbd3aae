extern crate alloc_counter;
extern crate full_name;

use alloc_counter::{count_alloc, AllocCounterSystem};
use full_name::{prefix_label, Name};

#[global_allocator]
static A: AllocCounterSystem = AllocCounterSystem;

#[test]
fn validating_plain_names_does_not_allocate() {
    let name = Name::new("Mrs", "Jane", "O'Brien-Smith");
    // The character matcher and its search cache are built on first use
    let _ = name.validate(true);
    let (counts, result) = count_alloc(|| name.validate(true));
    assert_eq!(Ok(()), result);
    assert_eq!((0, 0, 0), counts);
}

#[test]
fn looking_up_labels_does_not_allocate() {
    let (counts, label) = count_alloc(|| prefix_label("Mx"));
    assert_eq!("Mx.", label);
    assert_eq!((0, 0, 0), counts);
}

#[test]
fn parsing_short_names_stays_inline() {
    let (counts, name) = count_alloc(|| Name::parse("Doe|Jane|Mrs"));
    assert_eq!("Jane", name.first());
    assert_eq!((0, 0, 0), counts);
}
