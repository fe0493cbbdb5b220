use crate::geometry::{nearest_center, Rect};

/// Which card of the project strip sits closest to the middle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    focused: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { len, focused: 0 }
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Re-derive the focused card from fresh measurements. Returns whether
    /// the focus moved. Keeps the previous focus when no card could be
    /// measured.
    pub fn sample(&mut self, track: Rect, cards: &[Option<Rect>]) -> bool {
        match nearest_center(track, cards) {
            Some(index) if index < self.len && index != self.focused => {
                self.focused = index;
                true
            }
            _ => false,
        }
    }

    /// Clamp a requested card index into range.
    pub fn clamp(&self, index: isize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        Some(index.clamp(0, self.len as isize - 1) as usize)
    }

    /// Card to scroll to for "previous"; `None` at the first card.
    pub fn prev(&self) -> Option<usize> {
        self.clamp(self.focused as isize - 1).filter(|&i| i != self.focused)
    }

    /// Card to scroll to for "next"; `None` at the last card.
    pub fn next(&self) -> Option<usize> {
        self.clamp(self.focused as isize + 1).filter(|&i| i != self.focused)
    }
}

/// Visual weight of a card: 1.0 when focused, 0.0 otherwise. Springs
/// interpolate between the two.
pub fn emphasis(focused: bool) -> f64 {
    if focused { 1.0 } else { 0.0 }
}

/// CSS for a card at the given emphasis.
pub fn card_style(emphasis: f64) -> String {
    let scale = 0.9 + 0.1 * emphasis;
    let opacity = 0.7 + 0.3 * emphasis;
    let blur = 1.5 * (1.0 - emphasis);
    format!("transform: scale({scale:.4}); opacity: {opacity:.4}; filter: blur({blur:.2}px);")
}

/// Which picture a project card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Primary,
    Fallback,
}

impl ImageSource {
    /// State after a load error. `None` means give up: the fallback is
    /// only ever tried once.
    pub fn after_error(self) -> Option<ImageSource> {
        match self {
            ImageSource::Primary => Some(ImageSource::Fallback),
            ImageSource::Fallback => None,
        }
    }

    pub fn pick<'a>(self, primary: &'a str, fallback: &'a str) -> &'a str {
        match self {
            ImageSource::Primary => primary,
            ImageSource::Fallback => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four cards 400px wide with a 24px gap, track 800px wide, scrolled so
    /// that `centered` sits in the middle.
    fn layout(centered: usize) -> (Rect, Vec<Option<Rect>>) {
        let track = Rect::new(0.0, 0.0, 800.0, 300.0);
        let pitch = 424.0;
        let shift = 400.0 - 200.0 - pitch * centered as f64;
        let cards = (0..4)
            .map(|i| Some(Rect::new(shift + pitch * i as f64, 0.0, 400.0, 300.0)))
            .collect();
        (track, cards)
    }

    #[test]
    fn centered_card_is_focused() {
        let mut state = CarouselState::new(4);
        let (track, cards) = layout(2);
        assert!(state.sample(track, &cards));
        assert_eq!(state.focused(), 2);

        assert_eq!(state.next(), Some(3));
        let (track, cards) = layout(3);
        state.sample(track, &cards);
        assert_eq!(state.focused(), 3);
    }

    #[test]
    fn resampling_same_layout_reports_no_change() {
        let mut state = CarouselState::new(4);
        let (track, cards) = layout(1);
        assert!(state.sample(track, &cards));
        assert!(!state.sample(track, &cards));
    }

    #[test]
    fn unmeasurable_cards_keep_focus() {
        let mut state = CarouselState::new(4);
        let (track, cards) = layout(2);
        state.sample(track, &cards);
        assert!(!state.sample(track, &[None, None, None, None]));
        assert_eq!(state.focused(), 2);
    }

    #[test]
    fn navigation_is_clamped_without_wraparound() {
        let mut state = CarouselState::new(4);
        assert_eq!(state.prev(), None);
        assert_eq!(state.next(), Some(1));
        assert_eq!(state.clamp(-3), Some(0));
        assert_eq!(state.clamp(99), Some(3));

        let (track, cards) = layout(3);
        state.sample(track, &cards);
        assert_eq!(state.next(), None);
        assert_eq!(state.prev(), Some(2));
    }

    #[test]
    fn empty_carousel_has_nowhere_to_go() {
        let state = CarouselState::new(0);
        assert_eq!(state.clamp(0), None);
        assert_eq!(state.prev(), None);
        assert_eq!(state.next(), None);
    }

    #[test]
    fn fallback_is_tried_exactly_once() {
        let source = ImageSource::Primary;
        let source = source.after_error().expect("primary falls back");
        assert_eq!(source.pick("/p.jpg", "https://f.jpg"), "https://f.jpg");
        assert_eq!(source.after_error(), None);
    }

    #[test]
    fn card_style_extremes() {
        assert_eq!(
            card_style(1.0),
            "transform: scale(1.0000); opacity: 1.0000; filter: blur(0.00px);"
        );
        assert_eq!(
            card_style(0.0),
            "transform: scale(0.9000); opacity: 0.7000; filter: blur(1.50px);"
        );
    }
}
