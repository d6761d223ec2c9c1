use proto_demo::pb::{ComplexMessage, DayOfTheWeek, DummyMessage, EnumMessage, SimpleMessage};
use proto_demo::{create_complex_message, create_enum_message, create_simple_message};
use proto_pack::file::{load_from_path, save_to_path};
use proto_pack::{json, Codecs, Enumeration, Message, MessageCodec, UnmarshalOptions};

const SIMPLE_BYTES: [u8; 31] = [
    0x08, 0xb9, 0x60, // id 12345
    0x10, 0x01, // is_simple
    0x1a, 0x11, b'M', b'y', b' ', b'S', b'i', b'm', b'p', b'l', b'e', b' ', b'M', b'e', b's',
    b's', b'a', b'g', b'e', // name
    0x22, 0x05, 0x01, 0x04, 0x05, 0x06, 0x08, // sample_list, packed
];

#[test]
fn simple_known_bytes() {
    let msg = create_simple_message();
    assert_eq!(msg.encode_to_vec().unwrap(), SIMPLE_BYTES);
    assert_eq!(SimpleMessage::decode(&SIMPLE_BYTES).unwrap(), msg);
}

#[test]
fn simple_accepts_unpacked_list() {
    let bytes = [0x20, 0x01, 0x20, 0x04, 0x22, 0x01, 0x05];
    let msg = SimpleMessage::decode(&bytes).unwrap();
    assert_eq!(msg.sample_list, vec![1, 4, 5]);
}

#[test]
fn simple_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("simple.bin");
    let msg = create_simple_message();
    save_to_path(&path, &msg).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), SIMPLE_BYTES);
    let loaded: SimpleMessage = load_from_path(&path).unwrap();
    assert_eq!(loaded, msg);
}

#[test]
fn simple_json_exact_output() {
    let codecs = Codecs::with_indent("    ");
    let text = codecs.text.to_text(&create_simple_message()).unwrap();
    let expected = r#"{
    "id": "12345",
    "isSimple": true,
    "name": "My Simple Message",
    "sampleList": [
        1,
        4,
        5,
        6,
        8
    ]
}"#;
    assert_eq!(text, expected);
    let back: SimpleMessage = codecs.text.from_text(&text).unwrap();
    assert_eq!(back, create_simple_message());
}

#[test]
fn enum_json_uses_symbol() {
    let codecs = Codecs::new();
    let text = codecs.text.to_text(&create_enum_message()).unwrap();
    assert_eq!(text, r#"{"id":"42","dayOfTheWeek":"THURSDAY"}"#);
    assert!(text.contains("\"THURSDAY\""));
}

#[test]
fn enum_every_day_through_both_codecs() {
    let codecs = Codecs::new();
    for day in DayOfTheWeek::WEEK {
        let mut msg = EnumMessage {
            id: 42,
            ..Default::default()
        };
        msg.set_day_of_the_week(day);

        let bytes = codecs.binary.encode(&msg).unwrap();
        let back: EnumMessage = codecs.binary.decode(&bytes).unwrap();
        assert_eq!(back.day_of_the_week(), Some(day));

        let text = codecs.text.encode(&msg).unwrap();
        assert!(std::str::from_utf8(&text).unwrap().contains(day.as_str_name()));
        let back: EnumMessage = codecs.text.decode(&text).unwrap();
        assert_eq!(back.day_of_the_week(), Some(day));
    }
}

#[test]
fn enum_unrecognized_value_survives() {
    let msg = EnumMessage {
        id: 1,
        day_of_the_week: 11,
        ..Default::default()
    };
    let codecs = Codecs::new();
    for codec in [&codecs.binary as &dyn MessageCodec, &codecs.text] {
        let bytes = codec.encode(&msg).unwrap();
        let mut back = EnumMessage::default();
        codec.decode_into(&bytes, &mut back).unwrap();
        assert_eq!(back.day_of_the_week, 11, "codec {}", codec.id());
        assert_eq!(back.day_of_the_week(), None);
    }
}

#[test]
fn complex_order_and_distinctness() {
    let msg = create_complex_message();
    let codecs = Codecs::with_indent("  ");
    for codec in [&codecs.binary as &dyn MessageCodec, &codecs.text] {
        let bytes = codec.encode(&msg).unwrap();
        let mut back = ComplexMessage::default();
        codec.decode_into(&bytes, &mut back).unwrap();
        assert_eq!(back, msg);

        let one = back.one_dummy.as_ref().unwrap();
        assert_eq!((one.id, one.name.as_str()), (1, "First message"));
        let ids: Vec<i32> = back.multiple_dummy.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(back.multiple_dummy.iter().all(|d| d != one));
    }
}

#[test]
fn complex_json_shape() {
    let text = json::to_string(&create_complex_message(), &Default::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "oneDummy": {"id": 1, "name": "First message"},
            "multipleDummy": [
                {"id": 2, "name": "Second message"},
                {"id": 3, "name": "Third message"}
            ]
        })
    );
}

#[test]
fn complex_binary_merge_appends_list() {
    let mut msg = create_complex_message();
    let update = ComplexMessage {
        one_dummy: Some(DummyMessage::new(0, "Renamed")),
        multiple_dummy: vec![DummyMessage::new(4, "Fourth message")],
        ..Default::default()
    };
    msg.merge(&update.encode_to_vec().unwrap()).unwrap();
    assert_eq!(msg.one_dummy, Some(DummyMessage::new(1, "Renamed")));
    assert_eq!(msg.multiple_dummy.len(), 3);
    assert_eq!(msg.multiple_dummy[2].name, "Fourth message");
}

#[test]
fn empty_input_is_zero_message() {
    assert_eq!(SimpleMessage::decode(&[]).unwrap(), SimpleMessage::default());
    assert_eq!(EnumMessage::decode(&[]).unwrap(), EnumMessage::default());
    assert_eq!(ComplexMessage::decode(&[]).unwrap(), ComplexMessage::default());
    let from_text: SimpleMessage = json::from_str("{}", &UnmarshalOptions::new()).unwrap();
    assert_eq!(from_text, SimpleMessage::default());
}

#[test]
fn display_uses_compact_text() {
    assert_eq!(
        create_simple_message().to_string(),
        r#"id:12345 is_simple:true name:"My Simple Message" sample_list:1 sample_list:4 sample_list:5 sample_list:6 sample_list:8"#
    );
    assert_eq!(create_enum_message().to_string(), "id:42 day_of_the_week:THURSDAY");
    assert_eq!(
        create_complex_message().to_string(),
        r#"one_dummy:{id:1 name:"First message"} multiple_dummy:{id:2 name:"Second message"} multiple_dummy:{id:3 name:"Third message"}"#
    );
    assert_eq!(SimpleMessage::default().to_string(), "");
}

proptest::proptest! {
    #[test]
    fn simple_roundtrip_property(
        id in proptest::num::i64::ANY,
        is_simple in proptest::bool::ANY,
        name in "\\PC{0,24}",
        sample_list in proptest::collection::vec(proptest::num::i32::ANY, 0..12)
    ) {
        let msg = SimpleMessage {
            id,
            is_simple,
            name,
            sample_list,
            ..Default::default()
        };
        let codecs = Codecs::with_indent("    ");

        let bytes = codecs.binary.encode(&msg).unwrap();
        let back: SimpleMessage = codecs.binary.decode(&bytes).unwrap();
        proptest::prop_assert_eq!(&back, &msg);

        let text = codecs.text.to_text(&msg).unwrap();
        let back: SimpleMessage = codecs.text.from_text(&text).unwrap();
        proptest::prop_assert_eq!(back, msg);
    }

    #[test]
    fn complex_roundtrip_property(
        names in proptest::collection::vec("[a-z ]{0,12}", 0..6),
        one in proptest::option::of(proptest::num::i32::ANY)
    ) {
        let msg = ComplexMessage {
            one_dummy: one.map(|id| DummyMessage::new(id, "one")),
            multiple_dummy: names
                .iter()
                .enumerate()
                .map(|(i, name)| DummyMessage::new(i as i32, name.clone()))
                .collect(),
            ..Default::default()
        };
        let bytes = msg.encode_to_vec().unwrap();
        proptest::prop_assert_eq!(ComplexMessage::decode(&bytes).unwrap(), msg.clone());
        let text = json::to_string(&msg, &Default::default()).unwrap();
        let back: ComplexMessage = json::from_str(&text, &UnmarshalOptions::new()).unwrap();
        proptest::prop_assert_eq!(back, msg);
    }
}
