use log::debug;

use crate::geometry::{measure_indicator, IndicatorRect, Rect};

/// Remembers where the pill highlight belongs.
///
/// A measurement only replaces the stored rect when both the bar and the
/// active button could be measured. Until the first good measurement there
/// is nothing to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IndicatorTracker {
    last: Option<IndicatorRect>,
}

impl IndicatorTracker {
    #[cfg(test)]
    pub fn current(&self) -> Option<IndicatorRect> {
        self.last
    }

    pub fn update(&mut self, container: Option<Rect>, active: Option<Rect>) -> Option<IndicatorRect> {
        match (container, active) {
            (Some(container), Some(active)) => {
                self.last = Some(measure_indicator(container, active));
            }
            _ => debug!("indicator: tab bar or active tab not laid out, keeping {:?}", self.last),
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_draw_before_first_measurement() {
        let mut tracker = IndicatorTracker::default();
        assert_eq!(tracker.update(None, None), None);
        assert_eq!(tracker.update(Some(Rect::new(0.0, 0.0, 500.0, 40.0)), None), None);
    }

    #[test]
    fn follows_active_tab() {
        let mut tracker = IndicatorTracker::default();
        let bar = Some(Rect::new(20.0, 0.0, 600.0, 48.0));
        tracker.update(bar, Some(Rect::new(28.0, 4.0, 150.0, 40.0)));
        let rect = tracker.update(bar, Some(Rect::new(120.0, 4.0, 80.0, 40.0)));
        assert_eq!(rect, Some(IndicatorRect { offset: 100.0, width: 80.0 }));
    }

    #[test]
    fn missing_tab_keeps_last_valid_rect() {
        let mut tracker = IndicatorTracker::default();
        let bar = Some(Rect::new(20.0, 0.0, 600.0, 48.0));
        tracker.update(bar, Some(Rect::new(120.0, 4.0, 80.0, 40.0)));
        let kept = tracker.update(bar, None);
        assert_eq!(kept, Some(IndicatorRect { offset: 100.0, width: 80.0 }));
        assert_eq!(tracker.current(), kept);
    }
}
