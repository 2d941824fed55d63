use docbind::{
    bind, bind_map, doc, from_binary, from_slice, from_str, to_binary, to_string, to_string_pretty,
    to_value, Bound, Error, Map, Value,
};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default, Clone, PartialEq)]
struct Pen {
    name: String,
    count: u32,
}

bind!(Pen { name, count });

#[derive(Debug, Default, Clone, PartialEq)]
struct HomeWork {
    name: String,
    finish: Vec<i32>,
}

bind_map!(HomeWork { "n" => name, "f" => finish });

#[derive(Debug, Default, Clone, PartialEq)]
struct Student {
    name: String,
    age: i32,
    pens: Vec<Pen>,
    homeworks: BTreeMap<String, HomeWork>,
    seats: HashMap<u16, String>,
    nickname: Option<String>,
    score: f64,
}

bind!(Student {
    name,
    age,
    homeworks,
    pens,
    seats,
    nickname,
    score,
});

fn student() -> Student {
    let mut homeworks = BTreeMap::new();
    homeworks.insert(
        "math".to_string(),
        HomeWork {
            name: "algebra".to_string(),
            finish: vec![1, 2, 5],
        },
    );
    let mut seats = HashMap::new();
    seats.insert(3, "window".to_string());
    seats.insert(11, "aisle".to_string());
    Student {
        name: "Alice".to_string(),
        age: 14,
        pens: vec![
            Pen {
                name: "blue".to_string(),
                count: 2,
            },
            Pen {
                name: "red".to_string(),
                count: 1,
            },
        ],
        homeworks,
        seats,
        nickname: Some("Al".to_string()),
        score: 91.5,
    }
}

#[test]
fn test_text_roundtrip() {
    let original = student();
    let text = to_string(&original).unwrap();
    println!("Student JSON: {}", text);

    let back: Student = from_str(&text).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_pretty_roundtrip() {
    let original = student();
    let text = original.to_text(Some(4)).unwrap();
    assert!(text.starts_with("{\n    \"name\": \"Alice\",\n    \"age\": 14,"));

    let mut back = Student::default();
    back.from_text(&text).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_binary_roundtrip() {
    let original = student();
    let bytes = original.to_binary().unwrap();
    let mut back = Student::default();
    back.from_binary(&bytes).unwrap();
    assert_eq!(back, original);
    assert_eq!(from_binary::<Student>(&to_binary(&original).unwrap()).unwrap(), original);
}

#[test]
fn test_binary_is_more_compact_than_text() {
    let original = student();
    let bytes = original.to_binary().unwrap();
    let text = original.to_text(None).unwrap();
    assert!(bytes.len() < text.len());
}

#[test]
fn test_mapped_keys_exact_and_ordered() {
    let hw = HomeWork {
        name: "essay".to_string(),
        finish: vec![],
    };
    let value = hw.to_document();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["n", "f"]);
    assert_eq!(HomeWork::keys(), &["n", "f"]);
}

#[test]
fn test_positional_keys_follow_declaration() {
    let value = to_value(&student());
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        vec!["name", "age", "homeworks", "pens", "seats", "nickname", "score"]
    );
}

#[test]
fn test_absent_keys_keep_defaults() {
    let mut target = student();
    target.from_text(r#"{"age": 15}"#).unwrap();

    let mut expected = student();
    expected.age = 15;
    assert_eq!(target, expected);
}

#[test]
fn test_null_keys_keep_values() {
    let mut target = student();
    target
        .from_text(r#"{"name": null, "pens": null, "nickname": null}"#)
        .unwrap();
    assert_eq!(target, student());
}

#[test]
fn test_integer_keyed_map_as_string_keys() {
    let mut seats = HashMap::new();
    seats.insert(1u16, "a".to_string());
    seats.insert(2u16, "b".to_string());
    let s = Student {
        seats,
        ..Student::default()
    };

    let doc = s.to_document();
    let seats_doc = doc.get("seats").unwrap().as_object().unwrap();
    assert_eq!(seats_doc.len(), 2);
    assert_eq!(seats_doc.get("1"), Some(&Value::from("a")));
    assert_eq!(seats_doc.get("2"), Some(&Value::from("b")));

    let mut back = Student::default();
    back.from_document(&doc).unwrap();
    assert_eq!(back.seats, s.seats);
}

#[test]
fn test_array_is_shape_error() {
    let err = from_str::<Student>("[]").unwrap_err();
    match &err {
        Error::Shape { found, .. } => assert_eq!(found, "array"),
        other => panic!("expected shape error, got {:?}", other),
    }
    assert!(err.to_string().contains("type must be object"));
}

#[test]
fn test_malformed_text_does_not_mutate() {
    let mut target = student();
    let err = target.from_text("{not json}").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(target, student());
}

#[test]
fn test_trailing_garbage_rejected() {
    let err = from_str::<Pen>(r#"{"name": "x"} trailing"#).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_malformed_binary_does_not_mutate() {
    let mut target = student();
    let err = target.from_binary(&[0xff, 0x00, 0x13]).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert_eq!(target, student());
}

#[test]
fn test_nested_error_path() {
    let err = from_str::<Student>(r#"{"pens": [{"name": "x"}, {"count": "many"}]}"#).unwrap_err();
    assert_eq!(err.path(), Some("pens[1].count"));
    assert!(err.to_string().contains("expected u32, found string \"many\""));
}

#[test]
fn test_mapped_nested_error_path() {
    let err = from_str::<Student>(r#"{"homeworks": {"math": {"f": [1, "2"]}}}"#).unwrap_err();
    assert_eq!(err.path(), Some("homeworks.math.f[1]"));
}

#[test]
fn test_failure_leaves_earlier_fields_assigned() {
    let mut target = Student::default();
    let err = target
        .from_text(r#"{"name": "Bob", "age": "old", "score": 3.0}"#)
        .unwrap_err();
    assert_eq!(err.path(), Some("age"));
    assert_eq!(target.name, "Bob");
    assert_eq!(target.score, 0.0);
}

#[test]
fn test_unknown_keys_ignored() {
    let pen: Pen = from_str(r##"{"name": "green", "color": "#0f0", "count": 4}"##).unwrap();
    assert_eq!(
        pen,
        Pen {
            name: "green".to_string(),
            count: 4
        }
    );
}

#[test]
fn test_from_slice_replaces_invalid_utf8() {
    let pen: Pen = from_slice(b"{\"name\": \"bl\xffe\"}").unwrap();
    assert_eq!(pen.name, "bl\u{FFFD}e");

    let mut other = Pen::default();
    other.from_text_bytes(b"{\"count\": 7}").unwrap();
    assert_eq!(other.count, 7);
}

#[test]
fn test_document_from_doc_macro() {
    let value = doc!({
        "name": "Carol",
        "pens": [{"name": "black", "count": 9}],
        "seats": {"5": "front"}
    });
    let mut s = Student::default();
    s.from_document(&value).unwrap();
    assert_eq!(s.name, "Carol");
    assert_eq!(s.pens[0].count, 9);
    assert_eq!(s.seats.get(&5).map(String::as_str), Some("front"));
}

#[test]
fn test_top_level_collections() {
    let pens = vec![
        Pen {
            name: "a".to_string(),
            count: 1,
        },
        Pen {
            name: "b".to_string(),
            count: 2,
        },
    ];
    let text = to_string_pretty(&pens, 2).unwrap();
    let back: Vec<Pen> = from_str(&text).unwrap();
    assert_eq!(back, pens);
}

#[test]
fn test_empty_object_leaves_all_defaults() {
    let s: Student = from_str("{}").unwrap();
    assert_eq!(s, Student::default());
    assert_eq!(
        Student::default().to_document().as_object().map(Map::len),
        Some(Student::keys().len())
    );
}

#[derive(Debug, PartialEq)]
struct Table {
    rows: BTreeMap<u32, String>,
}

impl Default for Table {
    fn default() -> Self {
        let mut rows = BTreeMap::new();
        rows.insert(1, "keep".to_string());
        rows.insert(2, "old".to_string());
        Table { rows }
    }
}

bind!(Table { rows });

#[test]
fn test_integer_keyed_map_keeps_existing_entries() {
    let mut table = Table::default();
    table
        .from_text(r#"{"rows": {"2": "new", "3": "c"}}"#)
        .unwrap();

    let rows: Vec<_> = table
        .rows
        .iter()
        .map(|(k, v)| (*k, v.as_str()))
        .collect();
    assert_eq!(rows, vec![(1, "keep"), (2, "old"), (3, "c")]);

    let fresh: Table = from_str(r#"{"rows": {"7": "x"}}"#).unwrap();
    assert_eq!(fresh.rows.len(), 3);
    assert_eq!(fresh.rows.get(&1).map(String::as_str), Some("keep"));
}
