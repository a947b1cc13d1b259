/*!
`Store` methods for events.

Deleting an event also deletes every registration for it; nothing else in
the store ever removes a registration.
*/
use super::{Store, StoreError};
use crate::event::{Event, EventDraft};

impl Store {
    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        log::trace!("Store::events() called.");
        &self.events
    }

    pub fn event(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Assign `draft` a fresh id, append it, and return the stored copy.
    pub fn create_event(&mut self, draft: EventDraft) -> Result<Event, StoreError> {
        log::trace!("Store::create_event( {:?} ) called.", &draft);

        let id = match self.event_ids.next_id() {
            Some(id) => id,
            None => {
                log::error!("Event id source exhausted; {:?} not created.", &draft.name);
                return Err(StoreError::Exhausted("event".to_owned()));
            },
        };
        let ev = draft.into_event(id);
        self.events.push(ev.clone());

        log::debug!("Created event {} ({:?}).", &ev.id, &ev.name);
        Ok(ev)
    }

    /**
    Remove event `id` along with all of its registrations.

    An absent `id` is not an error; the registration sweep still runs, so
    any stray registrations for it go too. Returns the number of
    registrations removed.
    */
    pub fn delete_event(&mut self, id: i64) -> usize {
        log::trace!("Store::delete_event( {} ) called.", &id);

        let n_events = self.events.len();
        self.events.retain(|e| e.id != id);
        match n_events - self.events.len() {
            0 => { log::debug!("No event {} to delete.", &id); },
            1 => { log::debug!("Event {} deleted.", &id); },
            n => {
                log::warn!("Deleting single event {} removed {} events.", &id, &n);
            },
        }

        let n_regs = self.registrations.len();
        self.registrations.retain(|r| r.event_id != id);
        let n_removed = n_regs - self.registrations.len();
        if n_removed > 0 {
            log::debug!(
                "{} registration(s) for event {} deleted along with it.",
                &n_removed, &id
            );
        }

        n_removed
    }
}
