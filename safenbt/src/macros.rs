/// Build a [`Compound`][`crate::Compound`] from `key => value` pairs. Values
/// can be anything with an `Into<Value>` conversion, including nested
/// `compound!` invocations.
///
/// ```rust
/// use safenbt::{compound, List, Value};
///
/// let c = compound! {
///     "name" => "Bob",
///     "hp" => 20,
///     "speed" => 0.1f32,
///     "alive" => true,
///     "pos" => [1.0f64, 64.0, -3.5].into_iter().collect::<List>(),
///     "inventory" => compound! {
///         "slots" => vec![1i32, 2, 3],
///     },
/// };
///
/// assert_eq!(c.get("hp"), Some(&Value::Int(20)));
/// assert_eq!(c.get_list("pos", safenbt::Tag::Double).double_at(2), -3.5);
/// assert_eq!(c.get_compound("inventory").get_int_array("slots"), &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! compound {
    () => {
        $crate::Compound::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut compound = $crate::Compound::new();
        $(
            compound.insert($key, $crate::Value::from($value));
        )+
        compound
    }};
}
