//! A mixed record exercising every directive, checked byte for byte.

use tagwire::{BigEndian, Codec, Config, Endian, decode, encode, measure};

tagwire::record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Inner {
        pub value: u32,
    }
}

tagwire::record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Reference {
        pub a_i8: i8,
        pub a_i16: i16,
        pub a_i32: i32 => "little",
        pub a_i64: i64,

        pub a_u8: u8,
        pub a_u16: u16,
        pub a_u32: u32 => "big",
        pub a_u64: u64,

        pub array: [u32; 4],
        pub second_array: [u32; 4],

        pub inner_count: u32 => "little,sizeof=inners",
        pub inner: Inner,

        pub inner_array: [Inner; 2],
        pub inners: Vec<Inner>,

        pub greeting: String => "nullterm",
        pub fruit_len: u32 => "sizeof=fruit",
        pub fruit: String,
    }
}

fn reference() -> Reference {
    Reference {
        a_i8: 0x11,
        a_i16: 0x1122,
        a_i32: 0x11223344,
        a_i64: 0x1122334455667788,

        a_u8: 0x11,
        a_u16: 0x1122,
        a_u32: 0x11223344,
        a_u64: 0x1122334455667788,

        array: [0, 1, 2, 3],
        second_array: [0, 1, 2, 3],

        inner_count: 0,
        inner: Inner { value: 0x11223344 },

        inner_array: [Inner { value: 0 }, Inner { value: 1 }],
        inners: vec![Inner { value: 0 }, Inner { value: 1 }],

        greeting: "hello".into(),
        fruit_len: 0,
        fruit: "banan".into(),
    }
}

#[rustfmt::skip]
const REFERENCE_BYTES: [u8; 101] = [
    0x11,
    0x11, 0x22,
    0x44, 0x33, 0x22, 0x11,
    0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88,

    0x11,
    0x11, 0x22,
    0x11, 0x22, 0x33, 0x44,
    0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88,

    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x02,
    0x00, 0x00, 0x00, 0x03,

    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x02,
    0x00, 0x00, 0x00, 0x03,

    0x02, 0x00, 0x00, 0x00,
    0x11, 0x22, 0x33, 0x44,

    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01,

    0x68, 0x65, 0x6c, 0x6c, 0x6f, 0x00,
    0x00, 0x00, 0x00, 0x05,
    0x62, 0x61, 0x6e, 0x61, 0x6e,
];

#[test]
fn test_measure() {
    assert_eq!(measure(&reference()).unwrap(), 101);
}

#[test]
fn test_encode() {
    let mut out = Vec::new();
    encode::<BigEndian>(&mut out, &reference()).unwrap();
    assert_eq!(out, REFERENCE_BYTES);
}

#[test]
fn test_decode() {
    let mut decoded = Reference::default();
    decode::<BigEndian>(&REFERENCE_BYTES[..], &mut decoded).unwrap();

    let mut expected = reference();
    expected.inner_count = 2;
    expected.fruit_len = 5;
    assert_eq!(decoded, expected);
}

#[test]
fn test_runtime_order_matches_generic_order() {
    let codec = Codec::new(Config::default().with_order(Endian::Big));
    assert_eq!(codec.to_vec(&reference()).unwrap(), REFERENCE_BYTES);

    let decoded: Reference = codec.from_slice(&REFERENCE_BYTES).unwrap();
    assert_eq!(decoded.fruit, "banan");
    assert_eq!(decoded.inners, [Inner { value: 0 }, Inner { value: 1 }]);
}

#[test]
fn test_round_trip_little_endian() {
    let mut value = reference();
    let bytes = tagwire::to_vec_le(&value).unwrap();
    assert_eq!(bytes.len(), 101);

    let decoded: Reference = tagwire::from_slice_le(&bytes).unwrap();
    value.inner_count = 2;
    value.fruit_len = 5;
    assert_eq!(decoded, value);
}
