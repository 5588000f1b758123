use dertree::{DecodeError, DecodeErrorKind, Tag, TagClass, Tlv, Value};

fn children<'a, 'b>(tlv: &'b Tlv<'a>) -> &'b [Tlv<'a>] {
    match tlv.value() {
        Value::Constructed(children) => children,
        Value::Primitive(_) => panic!("expected a constructed element"),
    }
}

fn rdn(oid: &'static [u8], value: &'static [u8]) -> Tlv<'static> {
    Tlv::constructed(
        Tag::constructed(0x11),
        vec![Tlv::constructed(
            Tag::constructed(0x10),
            vec![
                Tlv::primitive(Tag::primitive(0x06), oid),
                Tlv::primitive(Tag::primitive(0x13), value),
            ],
        )],
    )
}

// A structure shaped like the to-be-signed part of a certificate, built
// from the public constructors.
fn certificate_like() -> Tlv<'static> {
    Tlv::constructed(
        Tag::constructed(0x10),
        vec![
            Tlv::constructed(
                Tag::new(0, TagClass::ContextSpecific, true),
                vec![Tlv::primitive(Tag::primitive(0x02), b"\x02")],
            ),
            Tlv::primitive(Tag::primitive(0x02), b"\x00\xaa\xbb\xcc"),
            Tlv::constructed(
                Tag::constructed(0x10),
                vec![
                    Tlv::primitive(
                        Tag::primitive(0x06),
                        b"\x2a\x86\x48\x86\xf7\x0d\x01\x01\x01",
                    ),
                    Tlv::primitive(Tag::primitive(0x05), b""),
                ],
            ),
            Tlv::constructed(
                Tag::constructed(0x10),
                vec![rdn(b"\x55\x04\x03", b"Test Root")],
            ),
            Tlv::constructed(
                Tag::constructed(0x10),
                vec![
                    Tlv::primitive(Tag::primitive(0x17), b"260101000000Z"),
                    Tlv::primitive(Tag::primitive(0x17), b"360101000000Z"),
                ],
            ),
            Tlv::primitive(Tag::primitive(0x03), b"\x00\x42\x10\x7f"),
        ],
    )
}

#[test]
fn test_decode_reencode_identity() {
    let mut long_value = vec![0x04u8, 0x81, 0xc8];
    long_value.extend([0xab; 200]);

    for der in [
        b"\x02\x01\x05" as &[u8],
        b"\x30\x03\x02\x01\x05",
        b"\x30\x06\x30\x04\xa0\x02\x05\x00",
        b"\x7f\x87\x68\x01\x00",
        &long_value,
        &certificate_like().to_der(),
    ] {
        let tlv = dertree::decode(der).unwrap();
        assert_eq!(tlv.to_der(), der);
    }
}

#[test]
fn test_constructed_length_sums_children() {
    let der = certificate_like().to_der();
    let cert = dertree::decode(&der).unwrap();

    let fields = children(&cert);
    assert_eq!(fields.len(), 6);
    assert_eq!(
        cert.length(),
        fields.iter().map(|f| f.encoded_len()).sum::<usize>()
    );

    assert_eq!(fields[0].tag(), Tag::new(0, TagClass::ContextSpecific, true));
    assert_eq!(
        children(&fields[0])[0].value(),
        &Value::Primitive(b"\x02" as &[u8])
    );
    assert_eq!(fields[5].tag(), Tag::primitive(0x03));
}

#[test]
fn test_pem_roundtrip() {
    let der = certificate_like().to_der();
    let text = dertree::pem::wrap("CERTIFICATE", &der);
    assert!(text.starts_with("-----BEGIN CERTIFICATE-----\n"));
    assert!(text.ends_with("-----END CERTIFICATE-----\n"));

    let (label, payload) = dertree::pem::strip(&text).unwrap();
    assert_eq!(label, "CERTIFICATE");
    assert_eq!(payload, der);

    let tlv = dertree::decode(&payload).unwrap();
    assert_eq!(tlv.to_der(), der);
}

#[test]
fn test_pem_fixture_end_to_end() {
    let text = "Subject: test\n\
                -----BEGIN CERTIFICATE-----\n\
                MAMCAQU=\n\
                -----END CERTIFICATE-----\n";
    let (label, payload) = dertree::pem::strip(text).unwrap();
    assert_eq!(label, "CERTIFICATE");
    assert_eq!(payload, b"\x30\x03\x02\x01\x05");

    let tlv = dertree::decode(&payload).unwrap();
    assert_eq!(tlv.tag(), Tag::constructed(0x10));
    let fields = children(&tlv);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].value(), &Value::Primitive(b"\x05" as &[u8]));
}

#[test]
fn test_error_offsets() {
    assert_eq!(
        dertree::decode(b"\x30\x03\x02\x01"),
        Err(DecodeError::new(DecodeErrorKind::TruncatedInput, 2))
    );
    assert_eq!(
        dertree::decode(b"\x05\x00\xff"),
        Err(DecodeError::new(DecodeErrorKind::TrailingData, 2))
    );

    let text = "-----BEGIN CERTIFICATE-----\nMAMCAQU=\n-----END PUBLIC KEY-----\n";
    assert_eq!(
        dertree::pem::strip(text),
        Err(DecodeError::new(DecodeErrorKind::MalformedPem, 37))
    );
}
