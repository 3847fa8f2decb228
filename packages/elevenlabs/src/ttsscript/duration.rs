//! Pause duration parsing
//!
//! Pause specs are written as one or more `<number><unit>` groups, e.g.
//! `500ms`, `1.5s` or `1m30s`. Units: `ns`, `us`/`µs`, `ms`, `s`, `m`, `h`.

use once_cell::sync::Lazy;
use regex::Regex;

static GROUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d*)(?:\.(\d*))?(ns|us|µs|μs|ms|s|m|h)").expect("static pattern")
});

const NS_PER_MS: u128 = 1_000_000;
// fraction digits past this are below a nanosecond for every unit
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a pause spec into whole milliseconds (fractions truncate)
pub fn parse_pause(spec: &str) -> Result<u64, String> {
    let spec = spec.trim();
    if spec.is_empty() || spec == "0" {
        return Ok(0);
    }
    if spec.starts_with('-') {
        return Err("negative durations are not allowed".to_string());
    }

    let mut rest = spec;
    let mut total_ns: u128 = 0;
    while !rest.is_empty() {
        let caps = GROUP
            .captures(rest)
            .ok_or_else(|| format!("expected <number><unit> at '{rest}'"))?;
        let whole = &caps[1];
        let fraction = caps.get(2).map_or("", |m| m.as_str());
        if whole.is_empty() && fraction.is_empty() {
            return Err(format!("missing number before unit at '{rest}'"));
        }
        let scale: u128 = match &caps[3] {
            "ns" => 1,
            "us" | "µs" | "μs" => 1_000,
            "ms" => NS_PER_MS,
            "s" => 1_000_000_000,
            "m" => 60_000_000_000,
            "h" => 3_600_000_000_000,
            unit => return Err(format!("unknown unit '{unit}'")),
        };
        let group_ns = group_nanos(whole, fraction, scale)
            .ok_or_else(|| format!("'{}' is out of range", &caps[0]))?;
        total_ns = total_ns
            .checked_add(group_ns)
            .ok_or_else(|| "duration out of range".to_string())?;
        rest = &rest[caps[0].len()..];
    }

    u64::try_from(total_ns / NS_PER_MS).map_err(|_| "duration out of range".to_string())
}

/// `whole.fraction` units in nanoseconds, truncated
fn group_nanos(whole: &str, fraction: &str, scale: u128) -> Option<u128> {
    let whole_ns = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().ok()?.checked_mul(scale)?
    };

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    let fraction_ns = if fraction.is_empty() {
        0
    } else {
        let digits: u128 = fraction.parse().ok()?;
        digits * scale / 10u128.pow(fraction.len() as u32)
    };
    whole_ns.checked_add(fraction_ns)
}

/// Render milliseconds as an SSML `time` value
pub fn format_break_time(ms: u64) -> String {
    if ms > 0 && ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{ms}ms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_specs() {
        assert_eq!(parse_pause("500ms"), Ok(500));
        assert_eq!(parse_pause("1s"), Ok(1000));
        assert_eq!(parse_pause("1.5s"), Ok(1500));
        assert_eq!(parse_pause("1m30s"), Ok(90_000));
        assert_eq!(parse_pause(" 250ms "), Ok(250));
        assert_eq!(parse_pause("0"), Ok(0));
        assert_eq!(parse_pause(""), Ok(0));
        assert_eq!(parse_pause("1500us"), Ok(1));
        assert_eq!(parse_pause("0.7s"), Ok(700));
        assert_eq!(parse_pause(".5s"), Ok(500));
        assert_eq!(parse_pause("2.s"), Ok(2000));
    }

    #[test]
    fn fractional_milliseconds_truncate() {
        assert_eq!(parse_pause("1.9999999ms"), Ok(1));
        assert_eq!(parse_pause("999999ns"), Ok(0));
        assert_eq!(parse_pause("0.0019999s"), Ok(1));
        assert_eq!(parse_pause("1.23456789012345678901234s"), Ok(1234));
    }

    #[test]
    fn large_values_keep_integer_precision() {
        assert_eq!(parse_pause("9007199254740993ms"), Ok(9_007_199_254_740_993));
        assert_eq!(parse_pause("5124095576030431h"), Err("duration out of range".to_string()));
        assert!(parse_pause("99999999999999999999999999999999999999999h").is_err());
    }

    #[test]
    fn rejects_malformed_specs() {
        for spec in ["abc", "10", "-1s", "5 sec", "1x", "ms", ".s", "1s foo"] {
            assert!(parse_pause(spec).is_err(), "{spec} should be rejected");
        }
    }

    #[test]
    fn break_time_rendering() {
        assert_eq!(format_break_time(500), "500ms");
        assert_eq!(format_break_time(2000), "2s");
        assert_eq!(format_break_time(1500), "1500ms");
        assert_eq!(format_break_time(0), "0ms");
    }
}
