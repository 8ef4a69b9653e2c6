use crate::{compound, Compound, List, Tag, Value, ANY_NUMERIC};

fn mixed() -> Compound {
    compound! {
        "byte" => 7i8,
        "double" => -2.5f64,
        "string" => "hello",
        "bytes" => vec![1i8, 2],
        "ints" => vec![3i32, 4],
        "compound" => compound! { "x" => 1 },
        "list" => [1.5f32, 2.5].into_iter().collect::<List>(),
    }
}

#[test]
fn missing_keys_give_defaults() {
    let c = Compound::new();

    assert_eq!(c.get_byte("k"), 0);
    assert_eq!(c.get_short("k"), 0);
    assert_eq!(c.get_int("k"), 0);
    assert_eq!(c.get_long("k"), 0);
    assert_eq!(c.get_float("k"), 0.0);
    assert_eq!(c.get_double("k"), 0.0);
    assert!(!c.get_bool("k"));
    assert_eq!(c.get_string("k"), "");
    assert!(c.get_byte_array("k").is_empty());
    assert!(c.get_int_array("k").is_empty());
    assert!(c.get_compound("k").is_empty());
    assert!(c.get_list("k", Tag::Int).is_empty());
    assert!(c.get("k").is_none());
    assert_eq!(c.tag_type("k"), Tag::End);
}

#[test]
fn mistyped_keys_give_defaults() {
    let c = mixed();

    assert_eq!(c.get_byte("string"), 0);
    assert_eq!(c.get_short("compound"), 0);
    assert_eq!(c.get_int("string"), 0);
    assert_eq!(c.get_long("bytes"), 0);
    assert_eq!(c.get_float("list"), 0.0);
    assert_eq!(c.get_double("compound"), 0.0);
    assert!(!c.get_bool("string"));
    assert!(!c.get_bool("ints"));
    assert_eq!(c.get_string("byte"), "");
    assert!(c.get_byte_array("ints").is_empty());
    assert!(c.get_int_array("bytes").is_empty());
    assert!(c.get_compound("list").is_empty());
    assert!(c.get_list("compound", Tag::Compound).is_empty());
}

#[test]
fn numeric_getters_coerce() {
    let c = mixed();

    assert_eq!(c.get_int("byte"), 7);
    assert_eq!(c.get_long("byte"), 7);
    assert_eq!(c.get_int("double"), -3);
    assert_eq!(c.get_long("double"), -3);
    assert_eq!(c.get_byte("double"), -3);
    assert_eq!(c.get_float("double"), -2.5);
    assert_eq!(c.get_double("byte"), 7.0);
}

#[test]
fn present_values() {
    let c = mixed();

    assert_eq!(c.get_string("string"), "hello");
    assert_eq!(c.get_byte_array("bytes"), &[1, 2]);
    assert_eq!(c.get_int_array("ints"), &[3, 4]);
    assert_eq!(c.get_compound("compound").get_int("x"), 1);
    assert_eq!(c.get_list("list", Tag::Float).float_at(1), 2.5);
}

#[test]
fn list_getter_checks_element_type() {
    let mut c = mixed();
    assert!(c.get_list("list", Tag::Double).is_empty());
    assert_eq!(c.get_list("list", Tag::Float).len(), 2);

    // An empty list matches whatever type is asked for.
    let mut empty = List::new();
    empty.push(1i32);
    empty.remove(0).unwrap();
    c.set_list("empty", empty);
    assert_eq!(c.get_list("empty", Tag::String).element_type(), Tag::Int);
}

#[test]
fn bools() {
    let mut c = Compound::new();
    c.set_bool("yes", true);
    c.set_bool("no", false);
    c.set_int("big", 256);

    assert_eq!(c.get("yes"), Some(&Value::Byte(1)));
    assert!(c.get_bool("yes"));
    assert!(!c.get_bool("no"));
    // 256 narrows to a byte of 0.
    assert!(!c.get_bool("big"));
}

#[test]
fn setters_store_exact_types() {
    let mut c = Compound::new();
    c.set_byte("b", 1);
    c.set_short("s", 1);
    c.set_int("i", 1);
    c.set_long("l", 1);
    c.set_float("f", 1.0);
    c.set_double("d", 1.0);
    c.set_string("str", "1");
    c.set_byte_array("ba", vec![1]);
    c.set_int_array("ia", vec![1]);
    c.set_compound("c", Compound::new());
    c.set_list("li", List::new());

    let tags: Vec<Tag> = ["b", "s", "i", "l", "f", "d", "str", "ba", "ia", "c", "li"]
        .iter()
        .map(|k| c.tag_type(k))
        .collect();

    assert_eq!(
        tags,
        [
            Tag::Byte,
            Tag::Short,
            Tag::Int,
            Tag::Long,
            Tag::Float,
            Tag::Double,
            Tag::String,
            Tag::ByteArray,
            Tag::IntArray,
            Tag::Compound,
            Tag::List,
        ]
    );
}

#[test]
fn setting_replaces() {
    let mut c = Compound::new();
    c.set_int("a", 1);
    let old = c.insert("a", "now a string");

    assert_eq!(old, Some(Value::Int(1)));
    assert_eq!(c.len(), 1);
    assert_eq!(c.tag_type("a"), Tag::String);
}

#[test]
fn contains_key_of_type() {
    let c = mixed();

    assert!(c.contains_key_of_type("byte", Tag::Byte as u8));
    assert!(!c.contains_key_of_type("byte", Tag::Int as u8));
    assert!(c.contains_key_of_type("byte", ANY_NUMERIC));
    assert!(c.contains_key_of_type("double", ANY_NUMERIC));
    assert!(!c.contains_key_of_type("string", ANY_NUMERIC));
    assert!(!c.contains_key_of_type("missing", ANY_NUMERIC));

    // A missing key has type end.
    assert!(c.contains_key_of_type("missing", 0));
}

#[test]
fn remove_and_clear() {
    let mut c = mixed();
    let len = c.len();

    assert_eq!(c.remove("byte"), Some(Value::Byte(7)));
    assert_eq!(c.remove("byte"), None);
    assert!(!c.contains_key("byte"));
    assert_eq!(c.len(), len - 1);

    c.clear();
    assert!(c.is_empty());
}

#[test]
fn key_order() {
    let c = compound! { "b" => 1, "c" => 2, "a" => 3 };
    let keys: Vec<&str> = c.keys().collect();

    if cfg!(feature = "preserve-order") {
        assert_eq!(keys, ["b", "c", "a"]);
    } else {
        assert_eq!(keys, ["a", "b", "c"]);
    }
}

#[test]
fn equality_ignores_insertion_order() {
    let a = compound! { "x" => 1, "y" => 2 };
    let b = compound! { "y" => 2, "x" => 1 };
    assert_eq!(a, b);
}

#[test]
fn mutable_access() {
    let mut c = mixed();

    c.get_compound_mut("compound").unwrap().set_int("y", 2);
    c.get_list_mut("list").unwrap().push(3.5f32);
    if let Some(Value::String(s)) = c.get_mut("string") {
        s.push('!');
    }
    for (_, v) in c.iter_mut() {
        if let Value::Byte(b) = v {
            *b += 1;
        }
    }

    assert_eq!(c.get_compound("compound").get_int("y"), 2);
    assert_eq!(c.get_list("list", Tag::Float).len(), 3);
    assert_eq!(c.get_string("string"), "hello!");
    assert_eq!(c.get_byte("byte"), 8);
    assert!(c.get_compound_mut("string").is_none());
    assert!(c.get_list_mut("compound").is_none());
}

#[test]
fn collect_and_iterate() {
    let c: Compound = vec![("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(c.get_int("b"), 2);

    let total: i32 = c.iter().filter_map(|(_, v)| v.as_i32()).sum();
    assert_eq!(total, 3);

    let owned: Vec<(String, Value)> = c.into_iter().collect();
    assert_eq!(owned.len(), 2);
}
