/*!
Initial store contents.

`Seed::default()` is the stock demo data. A TOML file of the same shape can
replace it:

```toml
[[users]]
id = 1
username = "admin"
password = "password"
role = "Admin"
name = "Admin User"

[[events]]
id = 1
name = "Tech Fest 2024"
date = "2024-10-15"
time = "09:00"
venue = "Main Auditorium"
cost = 800
description = "A festival showcasing the latest in technology and innovation."

[[registrations]]
id = 1
studentId = 101
eventId = 1
status = "Verified"
```
*/
use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::{
    event::Event,
    registration::{Registration, Status},
    user::{Role, User},
};

/// Sections missing from a seed file are empty, not the stock data.
#[derive(Debug, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub registrations: Vec<Registration>,
}

fn event(
    id: i64,
    name: &str,
    date: &str,
    time: &str,
    venue: &str,
    cost: u64,
    description: &str
) -> Event {
    Event {
        id,
        name: name.to_owned(),
        date: date.to_owned(),
        time: time.to_owned(),
        venue: venue.to_owned(),
        cost,
        description: description.to_owned(),
    }
}

impl Default for Seed {
    fn default() -> Self {
        let users = vec![
            User::new(1, "admin", "password", Role::Admin, "Admin User"),
            User::new(101, "student1", "password", Role::Student, "Alice Smith"),
            User::new(102, "student2", "password", Role::Student, "Bob Johnson"),
            User::new(201, "faculty1", "password", Role::Faculty, "Dr. Emily Carter"),
        ];

        let events = vec![
            event(
                1, "Tech Fest 2024", "2024-10-15", "09:00", "Main Auditorium", 800,
                "A festival showcasing the latest in technology and innovation."
            ),
            event(
                2, "Arts & Culture Expo", "2024-11-05", "11:00", "Exhibition Hall", 400,
                "Celebrate creativity with art displays, music, and dance performances."
            ),
            event(
                3, "Entrepreneurship Workshop", "2024-11-20", "14:00", "Seminar Hall B", 2000,
                "Learn the fundamentals of starting your own business from industry experts."
            ),
        ];

        let mut verified = Registration::new(1, 101, 1);
        verified.status = Status::Verified;
        let registrations = vec![
            verified,
            Registration::new(2, 102, 1),
            Registration::new(3, 101, 3),
        ];

        Self { users, events, registrations }
    }
}

fn find_duplicate<I: IntoIterator<Item = i64>>(ids: I) -> Option<i64> {
    let mut seen: HashSet<i64> = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

impl Seed {
    pub fn from_toml(text: &str) -> Result<Self, String> {
        let seed: Seed = toml::from_str(text)
            .map_err(|e| format!("Unable to deserialize seed data: {}", &e))?;
        seed.check()?;
        Ok(seed)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        log::trace!("Seed::from_file( {} ) called.", path.display());

        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Unable to read seed file {}: {}", path.display(), &e))?;
        Seed::from_toml(&text)
            .map_err(|e| format!("{}: {}", path.display(), &e))
    }

    /**
    Ensure the seed upholds the same invariants the store maintains: ids
    unique within each collection, and no registration pointing at an event
    that isn't there. Event and registration ids must also leave room for
    at least one more id after them, so `i64::MAX` is refused.

    Seeded registrations pointing at missing or non-Student users are only
    warned about, since the store accepts those at runtime as well.
    */
    pub fn check(&self) -> Result<(), String> {
        if let Some(id) = find_duplicate(self.users.iter().map(|u| u.id)) {
            return Err(format!("Duplicate user id {}.", id));
        }
        if let Some(id) = find_duplicate(self.events.iter().map(|e| e.id)) {
            return Err(format!("Duplicate event id {}.", id));
        }
        if let Some(id) = find_duplicate(self.registrations.iter().map(|r| r.id)) {
            return Err(format!("Duplicate registration id {}.", id));
        }
        if self.events.iter().any(|e| e.id == i64::MAX) {
            return Err(format!("Event id {} leaves no room for new events.", i64::MAX));
        }
        if self.registrations.iter().any(|r| r.id == i64::MAX) {
            return Err(format!(
                "Registration id {} leaves no room for new registrations.", i64::MAX
            ));
        }

        for r in self.registrations.iter() {
            if !self.events.iter().any(|e| e.id == r.event_id) {
                return Err(format!(
                    "Registration {} references nonexistent event {}.",
                    &r.id, &r.event_id
                ));
            }
            if !self.users.iter().any(|u| u.id == r.student_id && u.role == Role::Student) {
                log::warn!(
                    "Seeded registration {} references {}, which is not a Student.",
                    &r.id, &r.student_id
                );
            }
        }

        Ok(())
    }
}
