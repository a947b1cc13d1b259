pub mod config;
pub mod event;
pub mod ids;
pub mod inter;
pub mod registration;
pub mod store;
pub mod user;

/**
Read an integer off the front of `s` the way a lenient client-side parser
would: skip leading whitespace, take an optional sign and then as many
decimal digits as there are, and ignore whatever follows. `"12abc"` is 12,
`"1e3"` is 1, and `"abc"` is `None`. A digit run too long for an `i64` is
also `None`.

Used for ids in request paths and for string-valued event costs.
*/
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (neg, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let n_digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if n_digits == 0 {
        return None;
    }

    let n: i64 = rest[..n_digits].parse().ok()?;
    if neg { Some(-n) } else { Some(n) }
}

pub fn log_level_from_env() -> simplelog::LevelFilter {
    use simplelog::LevelFilter;

    let mut level_string = match std::env::var("LOG_LEVEL") {
        Err(_) => { return LevelFilter::Warn; },
        Ok(s) => s,
    };

    level_string.make_ascii_lowercase();
    match level_string.as_str() {
        "max" => LevelFilter::max(),
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}
