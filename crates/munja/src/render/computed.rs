//! Render-time computed variables.
//!
//! Computed fresh per group on every render call so no state can leak
//! between groups in a batch.

use std::collections::HashMap;

use crate::numeric::{coerce_numeric, group_thousands};
use crate::types::{FixedData, GroupRecord, Value, member_list_text};

/// Names of the variables the renderer computes for every group.
///
/// These take precedence over every other resolution source.
pub const COMPUTED_KEYS: [&str; 4] = [
    "group_members_text",
    "group_size",
    "additional_fee_per_person",
    "additional_amount_text",
];

/// Builds the computed-variable map for one group.
///
/// `group_members_text` joins the member names with the honorific suffix,
/// `group_size` is the member count, `additional_fee_per_person` sums the
/// exchange fee and the company burden, and `additional_amount_text` is a
/// message fragment present only when the group carries a non-zero
/// additional amount.
pub fn computed_variables(group: &GroupRecord, fixed: &FixedData) -> HashMap<String, Value> {
    let mut vars = HashMap::new();
    vars.insert(
        "group_members_text".to_string(),
        Value::Str(member_list_text(&group.members)),
    );
    vars.insert("group_size".to_string(), Value::Int(group.members.len() as i64));

    let exchange_fee = numeric_operand(group, fixed, "exchange_fee");
    let company_burden = numeric_operand(group, fixed, "company_burden");
    vars.insert(
        "additional_fee_per_person".to_string(),
        Value::Int(exchange_fee + company_burden),
    );

    vars.insert(
        "additional_amount_text".to_string(),
        Value::Str(additional_amount_text(group)),
    );
    vars
}

/// Numeric operand for a computed variable: group attributes first, then
/// fixed data, defaulting to `0` when absent.
fn numeric_operand(group: &GroupRecord, fixed: &FixedData, key: &str) -> i64 {
    group
        .attributes
        .get(key)
        .or_else(|| fixed.get(key))
        .map_or(0, coerce_numeric)
}

/// Suffix fragment naming the group's additional amount, or the empty
/// string when the amount is zero.
fn additional_amount_text(group: &GroupRecord) -> String {
    let amount = group.attributes.get("additional_amount").map_or(0, coerce_numeric);
    if amount == 0 {
        String::new()
    } else {
        format!(" - 추가금액 {}원", group_thousands(amount))
    }
}
