//! Integration tests for near-miss key suggestions.

use munja::suggest_keys;

fn known(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| (*k).to_string()).collect()
}

#[test]
fn test_suggests_close_match() {
    let keys = known(&["total_balance", "team_name", "sender"]);
    assert_eq!(suggest_keys("total_balanc", keys.iter()), vec!["total_balance"]);
}

#[test]
fn test_exact_match_is_not_a_suggestion() {
    let keys = known(&["sender"]);
    assert_eq!(suggest_keys("sender", keys.iter()), Vec::<String>::new());
}

#[test]
fn test_distant_keys_are_ignored() {
    let keys = known(&["payment_due_date", "bank_account"]);
    assert_eq!(suggest_keys("members", keys.iter()), Vec::<String>::new());
}

#[test]
fn test_short_keys_tolerate_one_edit() {
    let keys = known(&["fee", "free"]);
    assert_eq!(suggest_keys("fe", keys.iter()), vec!["fee"]);
}

#[test]
fn test_closest_first_capped_at_three() {
    let keys = known(&["balanc", "balancee", "balance2", "balanced", "team"]);
    assert_eq!(
        suggest_keys("balance", keys.iter()),
        vec!["balanc", "balance2", "balanced"]
    );
}

#[test]
fn test_korean_keys() {
    let keys = known(&["고객_부담금", "운임"]);
    assert_eq!(suggest_keys("고객_부담김", keys.iter()), vec!["고객_부담금"]);
}
