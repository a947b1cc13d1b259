/*!
`Store` methods for registrations.
*/
use super::{Store, StoreError};
use crate::{
    registration::{NewRegistration, Registration, Status},
    user::Role,
};

impl Store {
    /// All registrations in insertion order.
    pub fn registrations(&self) -> &[Registration] {
        log::trace!("Store::registrations() called.");
        &self.registrations
    }

    /**
    Create a `Pending` registration.

    Unless strict registration checking is on, neither id is checked against
    the users or events.
    */
    pub fn create_registration(
        &mut self,
        new: NewRegistration,
    ) -> Result<Registration, StoreError> {
        log::trace!("Store::create_registration( {:?} ) called.", &new);

        if self.strict_registrations {
            match self.user(new.student_id) {
                Some(u) if u.role == Role::Student => {},
                _ => {
                    return Err(StoreError::Validation(format!(
                        "No Student with id {}.", &new.student_id
                    )));
                },
            }
            if self.event(new.event_id).is_none() {
                return Err(StoreError::Validation(format!(
                    "No event with id {}.", &new.event_id
                )));
            }
        }

        let id = match self.registration_ids.next_id() {
            Some(id) => id,
            None => {
                log::error!("Registration id source exhausted; {:?} not created.", &new);
                return Err(StoreError::Exhausted("registration".to_owned()));
            },
        };
        let reg = Registration::new(id, new.student_id, new.event_id);
        self.registrations.push(reg.clone());

        log::debug!(
            "Registration {} created: student {} for event {}.",
            &reg.id, &reg.student_id, &reg.event_id
        );
        Ok(reg)
    }

    /// Move registration `id` to `Verified` and return its new state.
    pub fn verify_registration(&mut self, id: i64) -> Result<Registration, StoreError> {
        log::trace!("Store::verify_registration( {} ) called.", &id);

        let reg = self.registrations.iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound("Registration not found.".to_owned()))?;

        if reg.status == Status::Verified {
            log::debug!("Registration {} was already verified.", &id);
        } else {
            reg.verify();
            log::debug!("Registration {} verified.", &id);
        }

        Ok(reg.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::ensure_logging;

    #[test]
    fn create_is_pending_and_listed() {
        ensure_logging();
        let mut store = Store::default();

        let r = store.create_registration(
            NewRegistration { student_id: 102, event_id: 2 }
        ).unwrap();
        assert_eq!(r.status, Status::Pending);
        assert_eq!((r.student_id, r.event_id), (102, 2));
        assert_eq!(r.id, 4);
        assert_eq!(store.registrations().last(), Some(&r));
    }

    #[test]
    fn lax_mode_accepts_unknown_ids() {
        ensure_logging();
        let mut store = Store::default();
        assert!(!store.strict_registrations());

        let r = store.create_registration(
            NewRegistration { student_id: 999, event_id: 999 }
        ).unwrap();
        assert_eq!(r.status, Status::Pending);
    }

    #[test]
    fn strict_mode_rejects_unknown_ids() {
        ensure_logging();
        let mut store = Store::default();
        store.set_strict_registrations(true);
        let n = store.registrations().len();

        // Faculty member, not a Student.
        assert!(matches!(
            store.create_registration(NewRegistration { student_id: 201, event_id: 1 }),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            store.create_registration(NewRegistration { student_id: 101, event_id: 77 }),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(store.registrations().len(), n);

        store.create_registration(NewRegistration { student_id: 101, event_id: 2 })
            .unwrap();
        assert_eq!(store.registrations().len(), n + 1);
    }

    #[test]
    fn verify_pending() {
        ensure_logging();
        let mut store = Store::default();

        let r = store.verify_registration(2).unwrap();
        assert_eq!(r.status, Status::Verified);
        let listed = store.registrations().iter().find(|r| r.id == 2).unwrap();
        assert_eq!(listed.status, Status::Verified);

        // Already verified; still fine, still Verified.
        let r = store.verify_registration(1).unwrap();
        assert_eq!(r.status, Status::Verified);
    }

    #[test]
    fn verify_missing() {
        ensure_logging();
        let mut store = Store::default();
        assert_eq!(
            store.verify_registration(12345),
            Err(StoreError::NotFound("Registration not found.".to_owned()))
        );
    }
}
