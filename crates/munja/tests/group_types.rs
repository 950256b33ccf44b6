//! Tests for the data types behind the renderer: group field access,
//! fixed-data normalization on insert, and value display.

use munja::{FixedData, GroupRecord, Value, attrs, member_list_text};

#[test]
fn sequential_ids_are_zero_padded() {
    assert_eq!(GroupRecord::sequential_id(1), "G001");
    assert_eq!(GroupRecord::sequential_id(42), "G042");
    assert_eq!(GroupRecord::sequential_id(1000), "G1000");
}

#[test]
fn core_fields_resolve_by_name() {
    let group = GroupRecord::builder()
        .group_id(GroupRecord::sequential_id(7))
        .team_name("이영희팀".to_string())
        .sender_group("2팀".to_string())
        .sender("이영희".to_string())
        .members(vec!["이영희".to_string(), "박민수".to_string()])
        .build();

    assert_eq!(group.core_field("group_id"), Some(Value::Str("G007".to_string())));
    assert_eq!(group.core_field("team_name"), Some(Value::Str("이영희팀".to_string())));
    assert_eq!(group.core_field("sender_group"), Some(Value::Str("2팀".to_string())));
    assert_eq!(group.core_field("sender"), Some(Value::Str("이영희".to_string())));
    assert_eq!(group.core_field("보증금"), None);
}

#[test]
fn members_core_field_is_a_list() {
    let group = GroupRecord::builder()
        .group_id(GroupRecord::sequential_id(1))
        .team_name("이영희팀".to_string())
        .members(vec!["이영희".to_string(), "박민수".to_string()])
        .build();

    assert_eq!(
        group.core_field("members"),
        Some(Value::List(vec!["이영희".to_string(), "박민수".to_string()]))
    );
    assert_eq!(group.size(), 2);
}

#[test]
fn column_lookup_is_verbatim() {
    let group = GroupRecord::builder()
        .group_id(GroupRecord::sequential_id(1))
        .team_name("이영희팀".to_string())
        .columns(attrs! { "고객 부담금" => "50,000원" })
        .build();

    assert_eq!(group.column("고객 부담금"), Some(&Value::Str("50,000원".to_string())));
    // No trimming or renaming on lookup
    assert_eq!(group.column("고객 부담금 "), None);
    assert_eq!(group.column("고객_부담금"), None);
}

#[test]
fn set_text_coerces_known_numeric_keys() {
    let mut fixed = FixedData::new();
    fixed.set_text("base_exchange_rate", "1,390");
    fixed.set_text("company_burden", "20,000원");

    assert_eq!(fixed.get("base_exchange_rate"), Some(&Value::Int(1_390)));
    assert_eq!(fixed.get("company_burden"), Some(&Value::Int(20_000)));
}

#[test]
fn set_text_known_key_coerces_even_rough_text() {
    let mut fixed = FixedData::new();
    fixed.set_text("company_burden", "미정");
    assert_eq!(fixed.get("company_burden"), Some(&Value::Int(0)));
}

#[test]
fn set_text_coerces_values_that_look_numeric() {
    let mut fixed = FixedData::new();
    fixed.set_text("deposit", "1,000원");
    assert_eq!(fixed.get("deposit"), Some(&Value::Int(1_000)));
}

#[test]
fn set_text_stores_other_values_trimmed() {
    let mut fixed = FixedData::new();
    fixed.set_text("bank_account", " 국민은행 123-456 ");
    fixed.set_text("product_name", "하와이 힐링 7일");

    assert_eq!(
        fixed.get("bank_account"),
        Some(&Value::Str("국민은행 123-456".to_string()))
    );
    assert_eq!(
        fixed.get("product_name"),
        Some(&Value::Str("하와이 힐링 7일".to_string()))
    );
    assert_eq!(fixed.len(), 2);
    assert!(!fixed.is_empty());
}

#[test]
fn value_accessors_are_variant_strict() {
    assert_eq!(Value::Int(3).as_int(), Some(3));
    assert_eq!(Value::Int(3).as_float(), Some(3.0));
    assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
    assert_eq!(Value::Float(1.5).as_int(), None);
    assert_eq!(Value::Str("a".to_string()).as_int(), None);
    assert_eq!(Value::Str("a".to_string()).as_str(), Some("a"));
}

#[test]
fn list_value_displays_as_member_list() {
    let value = Value::List(vec!["김철수".to_string(), "이영희".to_string()]);
    assert_eq!(value.to_string(), "김철수님, 이영희님");
}

#[test]
fn member_list_text_of_empty_slice_is_empty() {
    assert_eq!(member_list_text(&[]), "");
    assert_eq!(member_list_text(&["김철수".to_string()]), "김철수님");
}
