//! Five-position star rating indicator.

#[cfg(test)]
#[path = "rating_stars_test.rs"]
mod rating_stars_test;

use leptos::prelude::*;

use crate::util::format::format_number;

/// Number of positions in the indicator.
pub const RATING_POSITIONS: usize = 5;

const STAR_PATH: &str = "M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z";

/// Filled positions for `rating`: round-half-up, clamped to `0..=5`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn filled_positions(rating: f64) -> usize {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    (rating.round() as usize).min(RATING_POSITIONS)
}

/// Filled state for each position, left to right.
pub fn star_states(rating: f64) -> [bool; RATING_POSITIONS] {
    let filled = filled_positions(rating);
    std::array::from_fn(|i| i < filled)
}

/// Star row plus the raw numeric rating.
#[component]
pub fn RatingStars(rating: f64) -> impl IntoView {
    let stars = star_states(rating)
        .into_iter()
        .map(|filled| {
            view! {
                <svg
                    class="rating-stars__star"
                    class:rating-stars__star--filled=filled
                    xmlns="http://www.w3.org/2000/svg"
                    fill="currentColor"
                    viewBox="0 0 24 24"
                    aria-hidden="true"
                >
                    <path d=STAR_PATH></path>
                </svg>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="rating-stars">
            <h3 class="rating-stars__label">"Rating:"</h3>
            <div class="rating-stars__row">
                {stars}
                <span class="rating-stars__value">{format_number(rating)}</span>
            </div>
        </div>
    }
}
