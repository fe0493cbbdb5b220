//! Layout math shared by the navigation indicator, the carousel and
//! anchor scrolling. Everything here works on plain numbers so it can be
//! exercised without a browser.

/// A bounding box in viewport coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Horizontal placement of the highlight under the active tab, relative to
/// the tab bar's left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorRect {
    pub offset: f64,
    pub width: f64,
}

pub fn measure_indicator(container: Rect, active: Rect) -> IndicatorRect {
    IndicatorRect {
        offset: active.left - container.left,
        width: active.width,
    }
}

/// Index of the card whose center is closest to the track's center.
///
/// Cards that could not be measured are skipped. Exact ties keep the lower
/// index. Returns `None` when nothing was measurable.
pub fn nearest_center(track: Rect, cards: &[Option<Rect>]) -> Option<usize> {
    let center = track.center_x();
    let mut best: Option<(usize, f64)> = None;
    for (index, card) in cards.iter().enumerate() {
        let Some(card) = card else { continue };
        let distance = (center - card.center_x()).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Document scroll position that puts an element's top just below the
/// sticky header.
pub fn scroll_target_top(scroll_y: f64, element_top: f64, header_height: Option<f64>, margin: f64) -> f64 {
    let offset = header_height.map(|h| h + margin).unwrap_or(0.0);
    scroll_y + element_top - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(left: f64, width: f64) -> Option<Rect> {
        Some(Rect::new(left, 0.0, width, 200.0))
    }

    #[test]
    fn indicator_overlays_active_button() {
        let container = Rect::new(20.0, 10.0, 600.0, 48.0);
        let button_b = Rect::new(120.0, 14.0, 80.0, 40.0);
        let rect = measure_indicator(container, button_b);
        assert_eq!(rect, IndicatorRect { offset: 100.0, width: 80.0 });
    }

    #[test]
    fn nearest_center_picks_closest_card() {
        let track = Rect::new(0.0, 0.0, 1000.0, 300.0);
        // card centers: -350, 150, 650 (track center at 500)
        let cards = [card(-600.0, 500.0), card(-100.0, 500.0), card(400.0, 500.0)];
        assert_eq!(nearest_center(track, &cards), Some(2));
    }

    #[test]
    fn exact_tie_keeps_lower_index() {
        let track = Rect::new(0.0, 0.0, 1000.0, 300.0);
        // centers at 400 and 600, both 100 away from 500
        let cards = [card(300.0, 200.0), card(500.0, 200.0)];
        assert_eq!(nearest_center(track, &cards), Some(0));
    }

    #[test]
    fn unmeasured_cards_are_skipped() {
        let track = Rect::new(0.0, 0.0, 1000.0, 300.0);
        let cards = [None, card(900.0, 100.0), None];
        assert_eq!(nearest_center(track, &cards), Some(1));
        assert_eq!(nearest_center(track, &[None, None]), None);
        assert_eq!(nearest_center(track, &[]), None);
    }

    #[test]
    fn scroll_target_accounts_for_header() {
        assert_eq!(scroll_target_top(1200.0, 300.0, Some(72.0), 8.0), 1420.0);
        assert_eq!(scroll_target_top(1200.0, 300.0, None, 8.0), 1500.0);
    }
}
