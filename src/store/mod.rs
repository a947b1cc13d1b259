/*!
The in-memory data store.

There is exactly one `Store` per process. It owns the three collections

  * users (seed data only; never mutated),
  * events,
  * registrations,

plus one `IdSource` per mutable collection. Methods are split by collection
into the `users`, `events`, and `registrations` submodules.

Nothing here is persisted; restarting the process restores the seed.
*/
use crate::{
    event::Event,
    ids::{IdScheme, IdSource},
    registration::Registration,
    user::User,
};

mod events;
mod registrations;
pub mod seed;
mod users;

pub use seed::Seed;

#[derive(Debug, PartialEq)]
pub enum StoreError {
    /// No user matches the supplied username, password, and role.
    Unauthorized,
    NotFound(String),
    /// Only produced when strict registration checking is on.
    Validation(String),
    /// A collection's id source has nothing left to hand out.
    Exhausted(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StoreError::Unauthorized => write!(f, "Invalid username, password, or role."),
            StoreError::NotFound(s) => write!(f, "{}", s),
            StoreError::Validation(s) => write!(f, "{}", s),
            StoreError::Exhausted(s) => write!(f, "No {} ids left to assign.", s),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug)]
pub struct Store {
    users: Vec<User>,
    events: Vec<Event>,
    registrations: Vec<Registration>,
    event_ids: Box<dyn IdSource>,
    registration_ids: Box<dyn IdSource>,
    strict_registrations: bool,
}

impl Store {
    /// Build a store holding `seed`, generating new ids with `scheme`.
    pub fn new(seed: Seed, scheme: IdScheme) -> Self {
        log::trace!(
            "Store::new( [ {} users, {} events, {} registrations ], {:?} ) called.",
            seed.users.len(), seed.events.len(), seed.registrations.len(), &scheme
        );

        let event_ids = scheme.source(seed.events.iter().map(|e| e.id));
        let registration_ids = scheme.source(
            seed.registrations.iter().map(|r| r.id)
        );

        Self {
            users: seed.users,
            events: seed.events,
            registrations: seed.registrations,
            event_ids,
            registration_ids,
            strict_registrations: false,
        }
    }

    /// Turn on (or off) checking that new registrations reference an
    /// existing Student and an existing Event.
    pub fn set_strict_registrations(&mut self, strict: bool) {
        self.strict_registrations = strict;
    }

    pub fn strict_registrations(&self) -> bool { self.strict_registrations }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(Seed::default(), IdScheme::Counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::ensure_logging;
    use crate::{
        event::EventDraft,
        registration::{NewRegistration, Status},
    };

    use serde_json::json;

    fn draft(name: &str) -> EventDraft {
        serde_json::from_value(json!({
            "name": name,
            "date": "2024-12-01",
            "time": "10:00",
            "venue": "Hall A",
            "cost": 100,
            "description": "x"
        })).unwrap()
    }

    #[test]
    fn verify_then_cascade() {
        ensure_logging();

        let seed = Seed {
            users: Seed::default().users,
            events: vec![draft("Only").into_event(1)],
            registrations: vec![Registration::new(1, 101, 1)],
        };
        let mut store = Store::new(seed, IdScheme::Counter);

        let r = store.verify_registration(1).unwrap();
        assert_eq!(r.status, Status::Verified);
        assert_eq!(store.registrations()[0].status, Status::Verified);

        store.delete_event(1);
        assert!(store.events().is_empty());
        assert!(store.registrations().iter().all(|r| r.id != 1));
    }

    #[test]
    fn ids_stay_unique_across_create_and_delete() {
        ensure_logging();
        let mut store = Store::default();

        let a = store.create_event(draft("A")).unwrap();
        store.delete_event(a.id);
        let b = store.create_event(draft("B")).unwrap();
        assert_ne!(a.id, b.id);
        assert!(store.events().iter().all(|e| e.id != a.id));

        let r0 = store.create_registration(
            NewRegistration { student_id: 101, event_id: b.id }
        ).unwrap();
        let r1 = store.create_registration(
            NewRegistration { student_id: 102, event_id: b.id }
        ).unwrap();
        assert_ne!(r0.id, r1.id);

        let mut ids: Vec<i64> = store.registrations().iter().map(|r| r.id).collect();
        let n = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), n);
    }

    #[test]
    fn clock_ids_also_unique() {
        ensure_logging();
        let mut store = Store::new(Seed::default(), IdScheme::Clock);

        let ids: Vec<i64> = (0..50)
            .map(|n| store.create_event(draft(&format!("E{}", n))).unwrap().id)
            .collect();
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn exhausted_ids_fail_without_duplicating() {
        ensure_logging();
        let mut seed = Seed::default();
        seed.events[2].id = i64::MAX - 1;
        seed.registrations[2].event_id = i64::MAX - 1;
        seed.registrations[2].id = i64::MAX - 1;
        let mut store = Store::new(seed, IdScheme::Counter);

        let last = store.create_event(draft("Last")).unwrap();
        assert_eq!(last.id, i64::MAX);
        let n = store.events().len();
        assert_eq!(
            store.create_event(draft("One too many")),
            Err(StoreError::Exhausted("event".to_owned()))
        );
        assert_eq!(store.events().len(), n);

        store.create_registration(
            NewRegistration { student_id: 101, event_id: 1 }
        ).unwrap();
        let n = store.registrations().len();
        assert!(matches!(
            store.create_registration(NewRegistration { student_id: 102, event_id: 1 }),
            Err(StoreError::Exhausted(_))
        ));
        assert_eq!(store.registrations().len(), n);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            StoreError::Unauthorized.to_string(),
            "Invalid username, password, or role."
        );
        assert_eq!(
            StoreError::NotFound("Registration not found.".to_owned()).to_string(),
            "Registration not found."
        );
        assert_eq!(
            StoreError::Exhausted("event".to_owned()).to_string(),
            "No event ids left to assign."
        );
    }
}
