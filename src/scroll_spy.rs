//! Decides which page section is being read from intersection reports.
//!
//! Reports that arrive during the same frame are batched and resolved
//! together; for each section only its latest report in the batch counts.
//! Which sections are inside the band is remembered across batches.
//!
//! A section that entered the band in this batch takes over; among several,
//! the most recently observed one wins and identical timestamps go to the
//! top-most section in page order. When the active section has left the
//! band, the section that entered most recently among those still inside
//! takes over. When nothing is inside the active section stays as it was.

use log::debug;

use crate::nav::Section;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub section: Section,
    pub intersecting: bool,
    /// `IntersectionObserverEntry.time`, milliseconds since page load.
    pub time: f64,
}

#[derive(Debug)]
pub struct ScrollSpy {
    order: Vec<Section>,
    /// Per tracked section, when it entered the band if it is inside now.
    inside: Vec<Option<f64>>,
    active: Section,
    pending: Vec<Observation>,
    attached: bool,
}

/// Latest entry time wins, ties go to the lower (top-most) slot.
fn latest_entry(candidates: impl Iterator<Item = (usize, f64)>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (slot, time) in candidates {
        match best {
            Some((_, best_time)) if time <= best_time => {}
            _ => best = Some((slot, time)),
        }
    }
    best.map(|(slot, _)| slot)
}

impl ScrollSpy {
    pub fn new(active: Section) -> Self {
        Self {
            order: Vec::new(),
            inside: Vec::new(),
            active,
            pending: Vec::new(),
            attached: false,
        }
    }

    /// Start tracking `sections`, given in page order.
    pub fn attach(&mut self, sections: &[Section]) {
        self.order = sections.to_vec();
        self.inside = vec![None; sections.len()];
        self.pending.clear();
        self.attached = true;
    }

    /// Stop tracking. Reports that still trickle in afterwards are ignored.
    pub fn detach(&mut self) {
        self.order.clear();
        self.inside.clear();
        self.pending.clear();
        self.attached = false;
    }

    #[cfg(test)]
    pub fn tracked(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn set_active(&mut self, section: Section) {
        self.active = section;
    }

    /// Queue a report. Returns whether it was accepted.
    pub fn record(&mut self, observation: Observation) -> bool {
        if !self.attached || !self.order.contains(&observation.section) {
            return false;
        }
        self.pending.push(observation);
        true
    }

    #[cfg(test)]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Resolve everything recorded since the last call. Returns the new
    /// active section when it changed.
    pub fn resolve(&mut self) -> Option<Section> {
        let batch = std::mem::take(&mut self.pending);
        if !self.attached || batch.is_empty() {
            return None;
        }

        let mut latest: Vec<Option<Observation>> = vec![None; self.order.len()];
        for observation in batch {
            let Some(slot) = self.order.iter().position(|s| *s == observation.section) else {
                continue;
            };
            match latest[slot] {
                Some(seen) if seen.time > observation.time => {}
                _ => latest[slot] = Some(observation),
            }
        }

        let mut entered = Vec::new();
        for (slot, observation) in latest.into_iter().enumerate() {
            let Some(observation) = observation else { continue };
            match (self.inside[slot], observation.intersecting) {
                (None, true) => {
                    self.inside[slot] = Some(observation.time);
                    entered.push((slot, observation.time));
                }
                (Some(_), false) => self.inside[slot] = None,
                _ => {}
            }
        }

        let active_inside = self
            .order
            .iter()
            .position(|s| *s == self.active)
            .is_some_and(|slot| self.inside[slot].is_some());

        let slot = match latest_entry(entered.into_iter()) {
            Some(slot) => slot,
            None if active_inside => return None,
            None => latest_entry(
                self.inside
                    .iter()
                    .enumerate()
                    .filter_map(|(slot, time)| time.map(|t| (slot, t))),
            )?,
        };

        let winner = self.order[slot];
        if winner == self.active {
            return None;
        }
        debug!("scroll spy: {} -> {}", self.active, winner);
        self.active = winner;
        Some(winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::SPY_SECTIONS;

    fn seen(section: Section, intersecting: bool, time: f64) -> Observation {
        Observation { section, intersecting, time }
    }

    fn attached() -> ScrollSpy {
        let mut spy = ScrollSpy::new(Section::Realisations);
        spy.attach(&SPY_SECTIONS);
        spy
    }

    #[test]
    fn section_crossing_band_becomes_active() {
        let mut spy = attached();
        assert!(spy.record(seen(Section::Realisations, false, 900.0)));
        assert!(spy.record(seen(Section::Offres, true, 900.0)));
        assert_eq!(spy.resolve(), Some(Section::Offres));
        assert_eq!(spy.active(), Section::Offres);
    }

    #[test]
    fn leaving_the_band_keeps_last_section() {
        let mut spy = attached();
        spy.record(seen(Section::Offres, true, 100.0));
        spy.resolve();
        spy.record(seen(Section::Offres, false, 200.0));
        assert_eq!(spy.resolve(), None);
        assert_eq!(spy.active(), Section::Offres);
    }

    #[test]
    fn most_recent_intersection_wins_within_a_frame() {
        let mut spy = attached();
        spy.record(seen(Section::Comparatif, true, 1000.0));
        spy.record(seen(Section::Process, true, 1016.0));
        spy.record(seen(Section::Offres, true, 1008.0));
        assert_eq!(spy.resolve(), Some(Section::Process));
    }

    #[test]
    fn equal_timestamps_favour_top_most_section() {
        let mut spy = attached();
        spy.record(seen(Section::Faq, true, 500.0));
        spy.record(seen(Section::Comparatif, true, 500.0));
        assert_eq!(spy.resolve(), Some(Section::Comparatif));
    }

    #[test]
    fn later_exit_overrides_earlier_entry_for_same_section() {
        let mut spy = attached();
        spy.record(seen(Section::Process, true, 100.0));
        spy.record(seen(Section::Process, false, 120.0));
        spy.record(seen(Section::Comparatif, true, 90.0));
        assert_eq!(spy.resolve(), Some(Section::Comparatif));
    }

    #[test]
    fn detached_spy_ignores_reports() {
        let mut spy = attached();
        assert_eq!(spy.tracked(), SPY_SECTIONS.len());
        spy.detach();
        assert_eq!(spy.tracked(), 0);
        assert!(!spy.record(seen(Section::Faq, true, 10.0)));
        assert_eq!(spy.resolve(), None);
        assert_eq!(spy.active(), Section::Realisations);
    }

    #[test]
    fn untracked_sections_are_rejected() {
        let mut spy = attached();
        assert!(!spy.record(seen(Section::Devis, true, 10.0)));
        assert!(!spy.has_pending());
    }

    #[test]
    fn section_still_in_band_takes_over_when_active_one_leaves() {
        let mut spy = attached();
        spy.record(seen(Section::Offres, true, 100.0));
        spy.record(seen(Section::Comparatif, true, 100.0));
        assert_eq!(spy.resolve(), Some(Section::Offres));
        spy.record(seen(Section::Offres, false, 200.0));
        assert_eq!(spy.resolve(), Some(Section::Comparatif));
        assert_eq!(spy.active(), Section::Comparatif);
    }

    #[test]
    fn unrelated_exit_keeps_active_section_in_band() {
        let mut spy = attached();
        spy.record(seen(Section::Offres, true, 100.0));
        spy.record(seen(Section::Process, true, 150.0));
        assert_eq!(spy.resolve(), Some(Section::Process));
        spy.record(seen(Section::Offres, false, 200.0));
        assert_eq!(spy.resolve(), None);
        assert_eq!(spy.active(), Section::Process);
    }

    #[test]
    fn reattaching_forgets_previous_band_state() {
        let mut spy = attached();
        spy.record(seen(Section::Faq, true, 100.0));
        spy.resolve();
        spy.detach();
        spy.attach(&SPY_SECTIONS);
        spy.record(seen(Section::Faq, true, 300.0));
        spy.record(seen(Section::Offres, true, 250.0));
        assert_eq!(spy.resolve(), None);
        assert_eq!(spy.active(), Section::Faq);
    }
}
