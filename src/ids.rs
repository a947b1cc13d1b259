/*!
Identity generation for events and registrations.

Each collection gets its own `IdSource`; an id is handed out once and never
handed out again by the same source. A source that has handed out
`i64::MAX` is spent and returns `None` from then on.
*/
use time::OffsetDateTime;

pub trait IdSource: std::fmt::Debug + Send + Sync {
    fn next_id(&mut self) -> Option<i64>;
}

/// Plain strictly increasing counter.
#[derive(Debug)]
pub struct Counter {
    last: i64,
}

impl Counter {
    /// A counter that starts one past the largest of `existing`.
    pub fn after<I: IntoIterator<Item = i64>>(existing: I) -> Self {
        Self { last: existing.into_iter().max().unwrap_or(0) }
    }
}

impl IdSource for Counter {
    fn next_id(&mut self) -> Option<i64> {
        let id = self.last.checked_add(1)?;
        self.last = id;
        Some(id)
    }
}

/**
Milliseconds since the Unix epoch, bumped past the last id handed out.

Two creations inside the same millisecond still get distinct ids, and a clock
stepping backwards can't cause a repeat.
*/
#[derive(Debug)]
pub struct Clock {
    last: i64,
}

impl Clock {
    pub fn after<I: IntoIterator<Item = i64>>(existing: I) -> Self {
        Self { last: existing.into_iter().max().unwrap_or(0) }
    }

    fn now_millis() -> i64 {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }
}

impl IdSource for Clock {
    fn next_id(&mut self) -> Option<i64> {
        let id = Clock::now_millis().max(self.last.checked_add(1)?);
        self.last = id;
        Some(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IdScheme {
    Counter,
    Clock,
}

impl std::str::FromStr for IdScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "counter" => Ok(IdScheme::Counter),
            "clock"   => Ok(IdScheme::Clock),
            _ => Err(format!(
                "{:?} is not a valid id scheme (expected \"counter\" or \"clock\").", s
            )),
        }
    }
}

impl IdScheme {
    /// Build a source for a collection already holding `existing` ids.
    pub fn source<I>(self, existing: I) -> Box<dyn IdSource>
    where
        I: IntoIterator<Item = i64>
    {
        match self {
            IdScheme::Counter => Box::new(Counter::after(existing)),
            IdScheme::Clock => Box::new(Clock::after(existing)),
        }
    }
}
