use bytes::Bytes;
use tagwire::{Codec, Config, Endian, Wire, from_slice_be, from_slice_le, measure, to_vec_be, to_vec_le};

tagwire::record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Header {
        pub magic: u32 => "big",
        pub flags: u16,
        pub name_len: u8 => "sizeof=name",
        pub name: String,
    }
}

tagwire::record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Chunk {
        pub kind: i8,
        pub data_len: u16 => "sizeof=data",
        pub data: Vec<i32>,
        pub note: String => "nullterm",
    }
}

tagwire::record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Archive {
        pub header: Header,
        pub ids: [u64; 2] => "little",
        pub chunk_count: u32 => "sizeof=chunks",
        pub chunks: Vec<Chunk>,
        pub trailer: String => "nullterm",
    }
}

/// Anything that decodes must re-encode to the same bytes and decode back
/// to the same value.
fn check<T: Wire + Default + PartialEq + std::fmt::Debug>(
    data: &[u8],
    decode: fn(&[u8]) -> tagwire::Result<T>,
    encode: fn(&T) -> tagwire::Result<Vec<u8>>,
) {
    let Ok(value) = decode(data) else {
        return;
    };
    let bytes = match encode(&value) {
        Ok(bytes) => bytes,
        Err(e) => panic!("decoded value failed to encode: {e}"),
    };
    assert_eq!(measure(&value).ok(), Some(bytes.len()));
    assert_eq!(bytes, data);
    assert_eq!(decode(&bytes).ok().as_ref(), Some(&value));
}

pub fn test_records(data: &[u8]) {
    check::<Header>(data, from_slice_be, |v| to_vec_be(v));
    check::<Header>(data, from_slice_le, |v| to_vec_le(v));
    check::<Chunk>(data, from_slice_be, |v| to_vec_be(v));
    check::<Chunk>(data, from_slice_le, |v| to_vec_le(v));
}

pub fn test_config(data: &[u8]) {
    let codec = Codec::new(
        Config::default()
            .with_order(Endian::Big)
            .strict()
            .with_max_text_len(Some(32)),
    );
    if let Ok(archive) = codec.from_slice::<Archive>(data) {
        let _ = codec.to_vec(&archive);
        let _ = codec.to_bytes(&archive);
    }

    let mut archive = Archive::default();
    let _ = codec.decode_buf(Bytes::copy_from_slice(data), &mut archive);
}

pub fn test(data: &[u8]) {
    test_records(data);
    test_config(data);
}
