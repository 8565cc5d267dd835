use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, PLAN_COLUMNS};

/// Format output as tables using the tabled crate. A schedule prints as a
/// summary field/value table followed by the installment plan; anything
/// else falls back to a flat field/value table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let (Some(summary), Some(Value::Array(plan))) =
                (map.get("summary"), map.get("plan"))
            {
                print_fields(summary);
                println!();
                print_plan(plan);
            } else {
                print_fields(value);
            }
        }
        Value::Array(arr) => print_plan(arr),
        _ => println!("{}", value),
    }
}

fn print_fields(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_plan(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(PLAN_COLUMNS);
    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = PLAN_COLUMNS
                .iter()
                .map(|col| map.get(*col).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }
    println!("{}", Table::from(builder));
}
