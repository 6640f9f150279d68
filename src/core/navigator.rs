//! Cursor over a loaded catalog.
//!
//! The starter steps through the meet program one heat at a time; the
//! navigator tracks which event/heat is current and wraps around at both
//! ends. The cursor is plain mutable state owned by whoever drives the
//! interaction; the catalog itself stays untouched.

use crate::core::catalog::EventCatalog;
use crate::domain::model::{Event, Heat};
use crate::utils::error::{Result, StartListError};

#[derive(Debug)]
pub struct Navigator<'a> {
    catalog: &'a EventCatalog,
    event_index: usize,
    heat_index: usize,
}

impl<'a> Navigator<'a> {
    /// Starts at the first heat of the first event. Fails when the catalog
    /// holds no events, since there would be nothing to point at.
    pub fn new(catalog: &'a EventCatalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(StartListError::EmptyCatalog);
        }
        Ok(Self {
            catalog,
            event_index: 0,
            heat_index: 0,
        })
    }

    pub fn event_index(&self) -> usize {
        self.event_index
    }

    pub fn heat_index(&self) -> usize {
        self.heat_index
    }

    pub fn current_event(&self) -> &Event {
        &self.catalog.events()[self.event_index]
    }

    /// `None` only for an event whose file carried a header and no heats.
    pub fn current_heat(&self) -> Option<&Heat> {
        self.current_event().heats.get(self.heat_index)
    }

    pub fn next_event(&mut self) {
        self.event_index = (self.event_index + 1) % self.catalog.len();
        self.heat_index = 0;
    }

    pub fn prev_event(&mut self) {
        self.event_index = if self.event_index == 0 {
            self.catalog.len() - 1
        } else {
            self.event_index - 1
        };
        self.heat_index = 0;
    }

    /// Stepping past the last heat rolls into the next event's first heat.
    pub fn next_heat(&mut self) {
        let heats = self.current_event().num_heats();
        if heats == 0 {
            self.next_event();
            return;
        }
        self.heat_index += 1;
        if self.heat_index % heats == 0 {
            self.next_event();
        }
    }

    /// Stepping back from the first heat selects the previous event's FIRST
    /// heat, not its last.
    pub fn prev_heat(&mut self) {
        if self.heat_index == 0 {
            self.prev_event();
        } else {
            self.heat_index -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Lane, LANES_PER_HEAT};

    fn make_event(id: &str, num_heats: usize) -> Event {
        let heats = (1..=num_heats)
            .map(|h| Heat {
                event: id.to_string(),
                event_desc: format!("EVENT {}", id),
                heat: h as u32,
                lanes: <[Lane; LANES_PER_HEAT]>::default(),
            })
            .collect();
        Event {
            event: id.to_string(),
            event_desc: format!("EVENT {}", id),
            heats,
        }
    }

    fn catalog(heat_counts: &[usize]) -> EventCatalog {
        let events = heat_counts
            .iter()
            .enumerate()
            .map(|(i, &h)| make_event(&(i + 1).to_string(), h))
            .collect();
        EventCatalog::from_events(events)
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let empty = EventCatalog::default();
        assert!(matches!(
            Navigator::new(&empty),
            Err(StartListError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_next_event_cycles_through_catalog() {
        let cat = catalog(&[2, 3, 1]);
        let mut nav = Navigator::new(&cat).unwrap();
        for _ in 0..cat.len() {
            nav.next_event();
        }
        assert_eq!(nav.event_index(), 0);
        assert_eq!(nav.heat_index(), 0);
    }

    #[test]
    fn test_next_then_prev_event_restores_position() {
        let cat = catalog(&[2, 3]);
        let mut nav = Navigator::new(&cat).unwrap();
        nav.next_event();
        nav.prev_event();
        assert_eq!(nav.event_index(), 0);
        assert_eq!(nav.heat_index(), 0);
    }

    #[test]
    fn test_prev_event_wraps_to_last() {
        let cat = catalog(&[1, 1, 2]);
        let mut nav = Navigator::new(&cat).unwrap();
        nav.prev_event();
        assert_eq!(nav.event_index(), 2);
        assert_eq!(nav.heat_index(), 0);
    }

    #[test]
    fn test_next_heat_walks_heats_then_rolls_into_next_event() {
        let cat = catalog(&[3, 2]);
        let mut nav = Navigator::new(&cat).unwrap();

        nav.next_heat();
        assert_eq!((nav.event_index(), nav.heat_index()), (0, 1));
        nav.next_heat();
        assert_eq!((nav.event_index(), nav.heat_index()), (0, 2));
        nav.next_heat();
        assert_eq!((nav.event_index(), nav.heat_index()), (1, 0));
    }

    #[test]
    fn test_heat_count_steps_land_on_next_event() {
        let cat = catalog(&[4, 2]);
        let mut nav = Navigator::new(&cat).unwrap();
        let heats = cat.events()[0].num_heats();
        for _ in 0..heats {
            nav.next_heat();
        }
        assert_eq!(nav.event_index(), 1);
        assert_eq!(nav.heat_index(), 0);
    }

    #[test]
    fn test_next_heat_wraps_whole_catalog() {
        let cat = catalog(&[2, 1]);
        let mut nav = Navigator::new(&cat).unwrap();
        for _ in 0..3 {
            nav.next_heat();
        }
        assert_eq!((nav.event_index(), nav.heat_index()), (0, 0));
    }

    #[test]
    fn test_prev_heat_steps_back_within_event() {
        let cat = catalog(&[3]);
        let mut nav = Navigator::new(&cat).unwrap();
        nav.next_heat();
        nav.next_heat();
        nav.prev_heat();
        assert_eq!((nav.event_index(), nav.heat_index()), (0, 1));
    }

    /// Documented behavior, not an accident: backing out of the first heat
    /// lands on the previous event's FIRST heat rather than its last one.
    #[test]
    fn test_prev_heat_from_first_heat_selects_first_heat_of_previous_event() {
        let cat = catalog(&[3, 2]);
        let mut nav = Navigator::new(&cat).unwrap();
        nav.next_event();
        assert_eq!((nav.event_index(), nav.heat_index()), (1, 0));

        nav.prev_heat();
        assert_eq!(nav.event_index(), 0);
        assert_eq!(nav.heat_index(), 0, "lands on heat 1, not heat 3");
    }

    #[test]
    fn test_single_event_catalog_wraps_to_itself() {
        let cat = catalog(&[2]);
        let mut nav = Navigator::new(&cat).unwrap();
        nav.next_event();
        assert_eq!((nav.event_index(), nav.heat_index()), (0, 0));
        nav.prev_event();
        assert_eq!((nav.event_index(), nav.heat_index()), (0, 0));
    }

    #[test]
    fn test_zero_heat_event_is_skipped_over() {
        // Header-only files are structurally legal; heat stepping must not
        // get stuck (or divide by zero) on them.
        let cat = catalog(&[0, 2]);
        let mut nav = Navigator::new(&cat).unwrap();
        assert!(nav.current_heat().is_none());

        nav.next_heat();
        assert_eq!((nav.event_index(), nav.heat_index()), (1, 0));
        assert!(nav.current_heat().is_some());

        nav.prev_event();
        nav.prev_heat();
        assert_eq!((nav.event_index(), nav.heat_index()), (1, 0));
    }
}
