use yew::prelude::*;

const STAR_PATH: &str =
    "M12 3.5l2.6 5.3 5.9.9-4.3 4.2 1 5.9L12 17.8 6.8 19.8l1-5.9L3.5 9.7l5.9-.9L12 3.5z";

/// How much of star `star` (1-based) is filled for a given rating, in percent.
pub fn star_fill(value: f64, star: u8) -> f64 {
    (value - f64::from(star) + 1.0).clamp(0.0, 1.0) * 100.0
}

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub value: f64,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class="star-rating" aria-label={format!("{}/5", props.value)}>
            { for (1..=5u8).map(|star| {
                let fill = star_fill(props.value, star);
                html! {
                    <span class="star" key={star} aria-hidden="true">
                        <svg viewBox="0 0 24 24" class="star-empty">
                            <path fill="none" stroke="currentColor" stroke-width="1.5" d={STAR_PATH} />
                        </svg>
                        <div class="star-fill" style={format!("width: {}%", fill)}>
                            <svg viewBox="0 0 24 24">
                                <path fill="currentColor" d={STAR_PATH} />
                            </svg>
                        </div>
                    </span>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_rating_fills_partial_star() {
        let fills: Vec<f64> = (1..=5).map(|s| star_fill(4.5, s)).collect();
        assert_eq!(fills, [100.0, 100.0, 100.0, 100.0, 50.0]);
    }

    #[test]
    fn fill_is_clamped() {
        assert_eq!(star_fill(0.0, 1), 0.0);
        assert_eq!(star_fill(7.0, 5), 100.0);
        assert!((star_fill(4.7, 5) - 70.0).abs() < 1e-9);
    }
}
