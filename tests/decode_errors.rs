use std::io::ErrorKind;

use tagwire::{
    Codec, Config, DEFAULT_MAX_TEXT_LEN, Error, decode_be, decode_le, from_slice_le, to_vec_le,
};

tagwire::record! {
    #[derive(Debug, Default, PartialEq)]
    pub struct Named {
        pub id: u32,
        pub name: String => "nullterm",
    }
}

tagwire::record! {
    #[derive(Debug, Default, PartialEq)]
    pub struct Counted {
        pub len: u32 => "sizeof=body",
        pub body: String,
    }
}

fn is_eof(err: &Error) -> bool {
    matches!(err, Error::IO(io) if io.kind() == ErrorKind::UnexpectedEof)
}

#[test]
fn test_truncated_scalar() {
    let mut value = 0u64;
    let err = decode_le(&[1, 2, 3][..], &mut value).unwrap_err();
    assert!(is_eof(&err));
}

#[test]
fn test_truncated_counted_text() {
    let err = from_slice_le::<Counted>(&[5, 0, 0, 0, b'a', b'b']).unwrap_err();
    assert!(is_eof(&err));
}

#[test]
fn test_huge_length_does_not_allocate_up_front() {
    let err = from_slice_le::<Counted>(&[0xff, 0xff, 0xff, 0xff, b'a']).unwrap_err();
    assert!(is_eof(&err));
}

#[test]
fn test_huge_sequence_length_does_not_allocate_up_front() {
    tagwire::record! {
        #[derive(Debug, Default, PartialEq)]
        struct Wide {
            len: u64 => "sizeof=data",
            data: Vec<u64>,
        }
    }

    let mut input = (1u64 << 62).to_le_bytes().to_vec();
    input.push(0xaa);
    let err = from_slice_le::<Wide>(&input).unwrap_err();
    assert!(is_eof(&err));

    // a sane length still decodes
    let mut input = 2u64.to_le_bytes().to_vec();
    input.extend_from_slice(&1u64.to_le_bytes());
    input.extend_from_slice(&2u64.to_le_bytes());
    assert_eq!(from_slice_le::<Wide>(&input).unwrap().data, [1, 2]);
}

#[test]
fn test_huge_record_sequence_length() {
    tagwire::record! {
        #[derive(Debug, Default, PartialEq)]
        struct Item {
            tag: u8,
            note: String => "nullterm",
        }
    }

    tagwire::record! {
        #[derive(Debug, Default, PartialEq)]
        struct Items {
            count: u32 => "sizeof=items",
            items: Vec<Item>,
        }
    }

    let err = from_slice_le::<Items>(&[0xff, 0xff, 0xff, 0xff]).unwrap_err();
    assert!(is_eof(&err));

    let mut decoded = Items {
        count: 9,
        items: vec![Item::default(), Item::default()],
    };
    decode_le(&[1, 0, 0, 0, 7, b'o', 0][..], &mut decoded).unwrap();
    assert_eq!(decoded.count, 1);
    assert_eq!(
        decoded.items,
        [Item {
            tag: 7,
            note: "o".into()
        }]
    );
}

#[test]
fn test_interior_nul_is_rejected() {
    let value = Named {
        id: 1,
        name: "a\0b".into(),
    };
    assert!(matches!(
        tagwire::measure(&value),
        Err(Error::InteriorNul("name"))
    ));

    let mut sink = Vec::new();
    let err = tagwire::encode_le(&mut sink, &value).unwrap_err();
    assert!(matches!(err, Error::InteriorNul("name")));
    // nothing of the text was written
    assert_eq!(sink, [1, 0, 0, 0]);

    // counted text may hold zero bytes
    let counted = Counted {
        len: 0,
        body: "a\0b".into(),
    };
    let bytes = to_vec_le(&counted).unwrap();
    assert_eq!(from_slice_le::<Counted>(&bytes).unwrap().body, "a\0b");
}

#[test]
fn test_text_cap_only_applies_when_decoding() {
    let value = Named {
        id: 0,
        name: "z".repeat(DEFAULT_MAX_TEXT_LEN + 1),
    };
    let bytes = to_vec_le(&value).unwrap();
    assert_eq!(bytes.len(), 4 + DEFAULT_MAX_TEXT_LEN + 2);
    assert!(matches!(
        from_slice_le::<Named>(&bytes),
        Err(Error::TextTooLong(DEFAULT_MAX_TEXT_LEN))
    ));
}

#[test]
fn test_missing_terminator() {
    let err = from_slice_le::<Named>(&[1, 0, 0, 0, b'a', b'b']).unwrap_err();
    assert!(is_eof(&err));
}

#[test]
fn test_null_terminated_text() {
    let value = Named {
        id: 7,
        name: "hello".into(),
    };
    let bytes = to_vec_le(&value).unwrap();
    assert_eq!(bytes, [7, 0, 0, 0, b'h', b'e', b'l', b'l', b'o', 0]);
    assert_eq!(from_slice_le::<Named>(&bytes).unwrap(), value);

    // an empty string is just the terminator
    let empty: Named = from_slice_le(&[0, 0, 0, 0, 0]).unwrap();
    assert_eq!(empty.name, "");
}

#[test]
fn test_terminator_stops_reading() {
    let mut input = &[1u8, 0, 0, 0, b'o', b'k', 0, 0xaa, 0xbb][..];
    let mut value = Named::default();
    decode_le(&mut input, &mut value).unwrap();
    assert_eq!(value.name, "ok");
    assert_eq!(input, [0xaa, 0xbb]);
}

#[test]
fn test_text_cap() {
    let mut input = vec![0, 0, 0, 0];
    input.extend(std::iter::repeat_n(b'a', 16));
    input.push(0);

    let codec = Codec::new(Config::default().with_max_text_len(Some(8)));
    let err = codec.from_slice::<Named>(&input).unwrap_err();
    assert!(matches!(err, Error::TextTooLong(8)));

    // exactly at the cap is fine
    let codec = Codec::new(Config::default().with_max_text_len(Some(16)));
    assert_eq!(codec.from_slice::<Named>(&input).unwrap().name.len(), 16);

    let uncapped = Codec::new(Config::default().with_max_text_len(None));
    let mut long = vec![0, 0, 0, 0];
    long.extend(std::iter::repeat_n(b'z', DEFAULT_MAX_TEXT_LEN + 1));
    long.push(0);
    assert!(matches!(
        Codec::default().from_slice::<Named>(&long),
        Err(Error::TextTooLong(DEFAULT_MAX_TEXT_LEN))
    ));
    assert_eq!(
        uncapped.from_slice::<Named>(&long).unwrap().name.len(),
        DEFAULT_MAX_TEXT_LEN + 1
    );
}

#[test]
fn test_invalid_utf8() {
    let err = from_slice_le::<Counted>(&[2, 0, 0, 0, 0xc3, 0x28]).unwrap_err();
    assert!(matches!(err, Error::InvalidUtf8(_)));

    let err = from_slice_le::<Named>(&[0, 0, 0, 0, 0xff, 0]).unwrap_err();
    assert!(matches!(err, Error::InvalidUtf8(_)));
}

#[test]
fn test_trailing_data() {
    let err = from_slice_le::<u16>(&[1, 0, 2]).unwrap_err();
    assert!(matches!(err, Error::TrailingData(1)));

    // the streaming form leaves the rest alone
    let mut input = &[1u8, 0, 2][..];
    let mut value = 0u16;
    decode_le(&mut input, &mut value).unwrap();
    assert_eq!(value, 1);
    assert_eq!(input, [2]);
}

#[test]
fn test_unsupported_kind() {
    tagwire::record! {
        #[derive(Debug, Default)]
        struct Platform {
            a: u8,
            b: usize,
        }
    }

    let value = Platform { a: 1, b: 2 };
    assert!(matches!(
        tagwire::measure(&value),
        Err(Error::UnsupportedKind("usize"))
    ));

    let mut sink = Vec::new();
    assert!(matches!(
        tagwire::encode_le(&mut sink, &value),
        Err(Error::UnsupportedKind("usize"))
    ));
    // fields before the failing one were already written
    assert_eq!(sink, [1]);

    let mut target = Platform::default();
    assert!(matches!(
        decode_be(&[1, 0, 0, 0, 0, 0, 0, 0, 2][..], &mut target),
        Err(Error::UnsupportedKind("usize"))
    ));
    assert!(matches!(
        tagwire::measure(&'x'),
        Err(Error::UnsupportedKind("char"))
    ));
}

#[test]
fn test_unsupported_inside_collection() {
    assert!(matches!(
        to_vec_le(&[1isize, 2]),
        Err(Error::UnsupportedKind("isize"))
    ));
}
