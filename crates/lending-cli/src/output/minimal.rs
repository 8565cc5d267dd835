use serde_json::Value;

use super::format_value;

/// Print just the headline number: the per-installment payment for a
/// schedule, the total outstanding for a portfolio summary, otherwise the
/// first field.
pub fn print_minimal(value: &Value) {
    // For a schedule, the interesting fields live in the summary
    let target = value
        .as_object()
        .and_then(|m| m.get("summary"))
        .unwrap_or(value);

    let priority_keys = ["payment", "total_payable", "total_outstanding"];

    if let Value::Object(map) = target {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_value(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_value(val));
            return;
        }
    }

    println!("{}", format_value(target));
}
