use crate::{error::ErrorKind, from_bytes, test::builder::Builder, ReadLimiter, Tag};

/// Smallest budget that `payload` decodes within.
fn exact_budget(payload: &[u8]) -> u64 {
    let mut limiter = ReadLimiter::unlimited();
    from_bytes(payload, &mut limiter).unwrap();
    let needed = limiter.read();

    assert!(from_bytes(payload, &mut ReadLimiter::new(needed)).is_ok());
    let err = from_bytes(payload, &mut ReadLimiter::new(needed - 1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceLimitExceeded);

    needed
}

#[test]
fn charge_rounds_bits_down() {
    let mut limiter = ReadLimiter::new(1);
    limiter.charge(7).unwrap();
    assert_eq!(limiter.read(), 0);
    limiter.charge(15).unwrap();
    assert_eq!(limiter.read(), 1);
}

#[test]
fn limit_is_inclusive() {
    let mut limiter = ReadLimiter::new(2);
    assert!(limiter.charge(16).is_ok());

    let err = limiter.charge(8).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceLimitExceeded);
}

#[test]
fn unlimited_never_fails_but_counts() {
    let mut limiter = ReadLimiter::default();
    assert!(limiter.is_unlimited());
    assert_eq!(limiter.max(), None);

    limiter.charge(u64::MAX).unwrap();
    limiter.charge(u64::MAX).unwrap();
    assert!(limiter.read() > 0);
}

#[test]
fn empty_root_costs_its_end_tag() {
    let payload = Builder::root().end_compound().build();
    assert_eq!(exact_budget(&payload), 1);
}

#[test]
fn single_int() {
    // 1 for the tag, 2 for the key, 4 for the int, 1 for the end.
    let payload = Builder::root().int("a", 5).end_compound().build();
    assert_eq!(exact_budget(&payload), 8);
}

#[test]
fn keys_cost_utf16_units() {
    let bmp = Builder::root().byte("é", 1).end_compound().build();
    assert_eq!(exact_budget(&bmp), 5);

    // A surrogate pair is two units, though it is 6 bytes on the wire.
    let astral = Builder::root().byte("😀", 1).end_compound().build();
    assert_eq!(exact_budget(&astral), 7);
}

#[test]
fn strings_cost_utf16_units() {
    let payload = Builder::root().string("s", "héllo").end_compound().build();
    assert_eq!(exact_budget(&payload), 1 + 2 + 10 + 1);
}

#[test]
fn list_costs_one_byte_plus_elements() {
    let payload = Builder::root()
        .start_list("l", Tag::Int, 2)
        .int_payload(1)
        .int_payload(2)
        .end_compound()
        .build();

    assert_eq!(exact_budget(&payload), 13);
}

#[test]
fn arrays_cost_per_element() {
    let bytes = Builder::root()
        .byte_array("b", &[1, 2, 3])
        .end_compound()
        .build();
    assert_eq!(exact_budget(&bytes), 1 + 2 + 3 + 1);

    let ints = Builder::root()
        .int_array("i", &[1, 2, 3])
        .end_compound()
        .build();
    assert_eq!(exact_budget(&ints), 1 + 2 + 12 + 1);
}

#[test]
fn nested_compound() {
    let payload = Builder::root()
        .start_compound("c")
        .end_compound()
        .end_compound()
        .build();

    assert_eq!(exact_budget(&payload), 5);
}

#[test]
fn array_refused_before_reading() {
    // The data for the claimed length is not there at all, so only a charge
    // made before reading can produce this error.
    let payload = Builder::root()
        .tag(Tag::ByteArray)
        .name("a")
        .int_payload(1_000_000_000)
        .build();

    let err = from_bytes(&payload, &mut ReadLimiter::new(1024 * 1024)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceLimitExceeded);
}

#[test]
fn budget_spans_reuse() {
    let payload = Builder::root().int("a", 5).end_compound().build();
    let mut limiter = ReadLimiter::new(12);

    from_bytes(&payload, &mut limiter).unwrap();
    assert_eq!(limiter.read(), 8);

    let err = from_bytes(&payload, &mut limiter).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceLimitExceeded);
}

#[test]
fn many_small_entries_add_up() {
    let mut builder = Builder::root();
    for i in 0..1000 {
        builder = builder.long(&format!("k{:04}", i), i);
    }
    let payload = builder.end_compound().build();

    // Each entry: 1 tag, 10 for the key, 8 for the long.
    assert_eq!(exact_budget(&payload), 1000 * 19 + 1);
}

#[test]
fn end_elements_cost_a_byte_each() {
    let payload = Builder::root()
        .start_list("l", Tag::End, 3)
        .end_compound()
        .build();

    assert_eq!(exact_budget(&payload), 1 + 2 + 1 + 3 + 1);
}
