use crate::Tag;


mod limiter;

#[allow(clippy::float_cmp)]
mod compound;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val as u8), Ok(Tag::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
    }

    for value in 12..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn numeric_tags() {
    let numeric: Vec<Tag> = (0u8..=11)
        .filter_map(|v| Tag::try_from(v).ok())
        .filter(|t| t.is_numeric())
        .collect();

    assert_eq!(
        numeric,
        [
            Tag::Byte,
            Tag::Short,
            Tag::Int,
            Tag::Long,
            Tag::Float,
            Tag::Double
        ]
    );
}
