// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Installment;
use anyhow::{Context, Result, anyhow, bail};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Minor units per major unit for every amount the CLI reads or prints.
const SCALE: u32 = 2;

/// Parse a decimal string such as `-12.5` into minor units (`-1250`).
pub fn parse_amount(s: &str) -> Result<i64> {
    let d = s
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}'", s))?;
    if d.scale() > SCALE && d.round_dp(SCALE) != d {
        bail!("Amount '{}' has more than {} decimal places", s, SCALE);
    }
    d.checked_mul(Decimal::from(10_i64.pow(SCALE)))
        .and_then(|v| v.to_i64())
        .with_context(|| format!("Amount '{}' out of range", s))
}

pub fn fmt_amount(minor: i64) -> String {
    Decimal::new(minor, SCALE).to_string()
}

/// `DUE:AMOUNT:STATUS[:PAID]`, e.g. `2025-03-01:150.00:paid:2025-02-27`.
pub fn parse_installment(s: &str) -> Result<Installment> {
    let parts: Vec<&str> = s.split(':').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(anyhow!(
            "Invalid installment '{}', expected DUE:AMOUNT:STATUS[:PAID]",
            s
        ));
    }
    Ok(Installment {
        due_date: parts[0].to_string(),
        amount: parse_amount(parts[1])?,
        status: parts[2].to_string(),
        paid_date: parts.get(3).map(|p| p.to_string()).unwrap_or_default(),
    })
}

pub fn required<'a>(m: &'a clap::ArgMatches, id: &str) -> Result<&'a String> {
    m.get_one::<String>(id)
        .with_context(|| format!("Missing required argument '{}'", id))
}

pub fn required_id(m: &clap::ArgMatches, id: &str) -> Result<i64> {
    m.get_one::<i64>(id)
        .copied()
        .with_context(|| format!("Missing required argument '{}'", id))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_to_minor_units() {
        assert_eq!(parse_amount("12.34").unwrap(), 1234);
        assert_eq!(parse_amount("-5").unwrap(), -500);
        assert_eq!(parse_amount(" 0.5 ").unwrap(), 50);
        assert_eq!(parse_amount("7.100").unwrap(), 710);
    }

    #[test]
    fn amounts_reject_sub_cent_precision() {
        assert!(parse_amount("1.005").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn amounts_out_of_range_are_errors() {
        assert!(parse_amount("79228162514264337593543950335").is_err());
        assert!(parse_amount("-79228162514264337593543950335").is_err());
        assert!(parse_amount("92233720368547758.08").is_err());
        assert_eq!(parse_amount("-92233720368547758.08").unwrap(), i64::MIN);
    }

    #[test]
    fn amounts_format_with_two_places() {
        assert_eq!(fmt_amount(1234), "12.34");
        assert_eq!(fmt_amount(-500), "-5.00");
        assert_eq!(fmt_amount(0), "0.00");
    }

    #[test]
    fn installment_with_and_without_paid_date() {
        let paid = parse_installment("2025-03-01:150:paid:2025-02-27").unwrap();
        assert_eq!(paid.amount, 15000);
        assert_eq!(paid.status, "paid");
        assert_eq!(paid.paid_date, "2025-02-27");

        let open = parse_installment("2025-04-01:150.25:upcoming").unwrap();
        assert_eq!(open.amount, 15025);
        assert_eq!(open.paid_date, "");
    }

    #[test]
    fn installment_rejects_wrong_shape() {
        assert!(parse_installment("2025-04-01:150").is_err());
        assert!(parse_installment("a:1:b:c:d").is_err());
    }
}
