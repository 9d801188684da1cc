use inikeep::{
    to_string, to_string_with_options, to_writer, Commentable, Document, Key, Section, Value,
    WriteOptions, Writer,
};

#[test]
fn test_write_global_values() {
    let mut document = Document::new();
    document
        .globals_mut()
        .insert(Key::new("key1"), Value::from("value1"))
        .unwrap();

    assert_eq!(to_string(&document).unwrap(), "key1=value1\n");
}

#[test]
fn test_write_sections() {
    let mut document = Document::new();
    let mut section = Section::new();
    section
        .pairs_mut()
        .insert(Key::new("key1"), Value::from("value1"))
        .unwrap();
    document.insert_section("section1", section);

    assert_eq!(to_string(&document).unwrap(), "[section1]\nkey1=value1\n");
}

#[test]
fn test_write_comments() {
    let mut document = Document::new();
    let mut section = Section::with_comment("Section comment");
    section
        .pairs_mut()
        .insert(
            Key::with_comment("key1", "Key-Value comment"),
            Value::from("value1"),
        )
        .unwrap();
    document.insert_section("section1", section);

    assert_eq!(
        to_string(&document).unwrap(),
        "# Section comment\n[section1]\n# Key-Value comment\nkey1=value1\n"
    );
}

#[test]
fn test_write_empty_section() {
    let mut document = Document::new();
    document.insert_section("section1", Section::new());

    assert_eq!(to_string(&document).unwrap(), "[section1]\n");
}

#[test]
fn test_write_newline_at_section_end() {
    let mut document = Document::new();
    let mut section = Section::new();
    section
        .pairs_mut()
        .insert(Key::new("key1"), Value::from("value1"))
        .unwrap();
    document.insert_section("section1", section);

    let options = WriteOptions::new().with_newline_at_section_end(true);
    assert_eq!(
        to_string_with_options(&document, options).unwrap(),
        "[section1]\nkey1=value1\n\n"
    );
}

#[test]
fn test_write_globals_before_sections() {
    let mut document = Document::new();
    let mut section = Section::new();
    section
        .pairs_mut()
        .insert(Key::new("key2"), Value::from("value2"))
        .unwrap();
    document.insert_section("section1", section);
    document
        .globals_mut()
        .insert(Key::new("key1"), Value::from("value1"))
        .unwrap();

    // Globals always come first, regardless of insertion interleaving.
    assert_eq!(
        to_string(&document).unwrap(),
        "key1=value1\n[section1]\nkey2=value2\n"
    );
}

#[test]
fn test_write_preserves_insertion_order() {
    let mut document = Document::new();
    document
        .globals_mut()
        .insert(Key::new("zebra"), Value::from("1"))
        .unwrap();
    document
        .globals_mut()
        .insert(Key::new("apple"), Value::from("2"))
        .unwrap();
    document.insert_section("omega", Section::new());
    document.insert_section("alpha", Section::new());

    assert_eq!(
        to_string(&document).unwrap(),
        "zebra=1\napple=2\n[omega]\n[alpha]\n"
    );
}

#[test]
fn test_write_absent_value() {
    let mut document = Document::new();
    document
        .globals_mut()
        .insert(Key::new("key1"), Value::EMPTY)
        .unwrap();

    assert_eq!(to_string(&document).unwrap(), "key1=\n");
}

#[test]
fn test_write_hash_marker_regardless_of_input_marker() {
    let document = inikeep::parse_str("; semicolon comment\n[s]\n").unwrap();
    assert_eq!(
        to_string(&document).unwrap(),
        "# semicolon comment\n[s]\n"
    );
}

#[test]
fn test_writer_toggle_setter() {
    let mut document = Document::new();
    document.insert_section("s", Section::new());

    let mut writer = Writer::new(Vec::new());
    writer.set_newline_at_section_end(true);
    writer.write(&document).unwrap();

    assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "[s]\n\n");
}

#[test]
fn test_write_to_sink_propagates_io_error() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "sink full",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut document = Document::new();
    document
        .globals_mut()
        .insert(Key::new("key"), Value::from("value"))
        .unwrap();

    match to_writer(Broken, &document) {
        Err(inikeep::Error::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::WriteZero),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

#[test]
fn test_section_equality_ignores_comment_for_round_trip_checks() {
    let mut with_comment = Section::with_comment("ignored");
    with_comment
        .pairs_mut()
        .insert(Key::new("k"), Value::from("v"))
        .unwrap();

    let mut without_comment = Section::new();
    without_comment
        .pairs_mut()
        .insert(Key::new("k"), Value::from("v"))
        .unwrap();

    assert_eq!(with_comment, without_comment);
    assert!(with_comment.has_comment());
}
