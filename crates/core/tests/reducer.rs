use validgen_core::prelude::*;

#[test]
fn users_table_keeps_only_user_input_columns() {
    let rows = vec![
        RawColumn::new("Id").with_type("integer").nullable(false).primary(),
        RawColumn::new("Name").with_type("character varying").with_max_length("50").nullable(false),
        RawColumn::new("Bio").with_type("character varying").with_max_length("200").nullable(true),
        RawColumn::new("CreatedAt")
            .with_type("timestamp without time zone")
            .with_default("now()")
            .nullable(false),
    ];

    let fields = reduce_all(rows);
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();

    // Id is primary, CreatedAt has a default.
    assert_eq!(names, vec!["Name", "Bio"]);

    assert_eq!(
        fields[0],
        FieldDescriptor {
            name: "Name".to_string(),
            data_type: "character varying".to_string(),
            max_length: 50,
            is_nullable: false,
            is_primary: false,
        }
    );
    assert_eq!(fields[1].max_length, 200);
    assert!(fields[1].is_nullable);
}

#[test]
fn primary_or_default_is_always_excluded() {
    let cases = vec![
        RawColumn::new("A").primary(),
        RawColumn::new("B").with_default("0"),
        RawColumn::new("C").primary().with_default("nextval('c_seq'::regclass)"),
        RawColumn::new("D").primary().nullable(true).with_max_length("10"),
    ];

    for raw in cases {
        let name = raw.name.clone();
        assert!(reduce(raw).is_none(), "{name} should be excluded");
    }
}

#[test]
fn empty_default_is_not_a_default() {
    let field = reduce(RawColumn::new("Code").with_default("").nullable(false))
        .expect("Column without default text should survive");
    assert_eq!(field.name, "Code");
}

#[test]
fn malformed_values_never_fail() {
    let raw = RawColumn {
        name: "Notes".to_string(),
        data_type: None,
        max_length: Some("unbounded".to_string()),
        default_value: None,
        is_nullable: None,
        primary: Some("PRIMARY KEY".to_string()),
    };

    let field = reduce(raw).expect("Malformed flags fall back to defaults");
    assert_eq!(field.max_length, 0);
    assert_eq!(field.data_type, "");
    assert!(!field.is_nullable);
    assert!(!field.is_primary);
}

#[test]
fn duplicate_rows_are_kept_in_order() {
    let rows = vec![
        RawColumn::new("Email").with_max_length("100"),
        RawColumn::new("Email").with_max_length("100"),
        RawColumn::new("Age"),
    ];

    let names: Vec<String> = reduce_all(rows).into_iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["Email", "Email", "Age"]);
}
