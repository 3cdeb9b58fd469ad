use pgpatch::{
    FieldNameMap, PatchError, SetClauseBuilder, UpdatePayload, Value, sql_for_partial_update,
};

fn user_columns() -> FieldNameMap {
    FieldNameMap::new()
        .map("firstName", "first_name")
        .map("lastName", "last_name")
        .map("isAdmin", "is_admin")
}

#[test]
fn patch_body_to_update_statement() {
    let payload: UpdatePayload = serde_json::from_str(
        r#"{"lastName": "Nguyen", "email": "a@example.com", "isAdmin": false}"#,
    )
    .unwrap();

    let mut clause = sql_for_partial_update(payload, &user_columns()).unwrap();
    let username_idx = clause.bind("aliya").unwrap();
    let sql = format!(
        "UPDATE users SET {} WHERE username = ${username_idx} RETURNING username",
        clause.set_cols()
    );

    assert_eq!(
        sql,
        r#"UPDATE users SET "last_name"=$1, "email"=$2, "is_admin"=$3 WHERE username = $4 RETURNING username"#
    );
    assert_eq!(
        clause.values(),
        &[
            Value::from("Nguyen"),
            Value::from("a@example.com"),
            Value::Bool(false),
            Value::from("aliya"),
        ]
    );
}

#[test]
fn empty_body_is_rejected() {
    let payload: UpdatePayload = serde_json::from_str("{}").unwrap();
    let err = sql_for_partial_update(payload, &user_columns()).unwrap_err();
    assert!(matches!(err, PatchError::BadRequest(ref m) if m == "No data"));
}

#[test]
fn non_object_body_is_rejected() {
    let body = serde_json::json!("firstName");
    let err = UpdatePayload::<Value>::try_from(body).unwrap_err();
    assert!(err.is_bad_request());
}

#[test]
fn typed_values_without_value_enum() {
    let payload: UpdatePayload<String> = [("firstName", "Aliya"), ("lastName", "K")]
        .into_iter()
        .collect();
    let clause = sql_for_partial_update(payload, &user_columns()).unwrap();

    assert_eq!(clause.set_cols(), r#""first_name"=$1, "last_name"=$2"#);
    assert_eq!(clause.values(), &["Aliya".to_string(), "K".to_string()]);
    assert_eq!(clause.params().len(), 2);
}

#[test]
fn params_after_leading_parameters() {
    // `WITH t AS (SELECT $1::int AS tenant) UPDATE ...` binds one value first.
    let payload = UpdatePayload::<Value>::new()
        .set("firstName", "Aliya")
        .set("age", 32);
    let clause = SetClauseBuilder::new()
        .with_field_map(user_columns())
        .with_start_index(2)
        .build(payload)
        .unwrap();

    assert_eq!(clause.set_cols(), r#""first_name"=$2, "age"=$3"#);
    assert_eq!(clause.next_placeholder(), 4);
}

#[test]
fn mapping_is_per_field() {
    let payload: UpdatePayload = serde_json::from_str(
        r#"{"age": 40, "firstName": "B", "password": "x", "isAdmin": true}"#,
    )
    .unwrap();
    let clause = sql_for_partial_update(payload, &user_columns()).unwrap();

    assert_eq!(
        clause.set_cols(),
        r#""age"=$1, "first_name"=$2, "password"=$3, "is_admin"=$4"#
    );
    assert_eq!(clause.values()[0], Value::Int(40));
    assert_eq!(clause.values()[3], Value::Bool(true));
}
