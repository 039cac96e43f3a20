//! Double-out checkout legality.
//!
//! An x01 leg must finish on a double. Rather than modeling individual dart
//! segments, legality is encoded as a predicate over the remaining score:
//! anything in `2..=170` can be finished within three darts, except for the
//! eight scores no double-ending combination reaches.

/// Scores in `2..=170` that cannot be finished with a double-out sequence.
pub const IMPOSSIBLE_CHECKOUTS: [u16; 8] = [1, 159, 162, 163, 165, 166, 168, 169];

/// Lowest finishable score (double 1).
pub const MIN_CHECKOUT: u16 = 2;

/// Highest finishable score (treble 20, treble 20, bullseye).
pub const MAX_CHECKOUT: u16 = 170;

/// Whether `score` can be taken out with a legal double-out sequence.
///
/// Used both to flag an ongoing remaining score as checkout-reachable and to
/// validate a finishing throw.
///
/// ```
/// use oche::is_checkout_reachable;
///
/// assert!(is_checkout_reachable(40));  // double 20
/// assert!(is_checkout_reachable(170)); // T20 T20 Bull
/// assert!(!is_checkout_reachable(1));
/// assert!(!is_checkout_reachable(159));
/// assert!(!is_checkout_reachable(171));
/// ```
#[must_use]
pub fn is_checkout_reachable(score: u16) -> bool {
    (MIN_CHECKOUT..=MAX_CHECKOUT).contains(&score) && !IMPOSSIBLE_CHECKOUTS.contains(&score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_checkouts_reachable() {
        assert!(is_checkout_reachable(2));
        assert!(is_checkout_reachable(36));
        assert!(is_checkout_reachable(40));
        assert!(is_checkout_reachable(158));
        assert!(is_checkout_reachable(160));
        assert!(is_checkout_reachable(167));
        assert!(is_checkout_reachable(170));
    }

    #[test]
    fn test_impossible_set_unreachable() {
        for score in IMPOSSIBLE_CHECKOUTS {
            assert!(!is_checkout_reachable(score), "{score} must not be finishable");
        }
    }

    #[test]
    fn test_out_of_range_unreachable() {
        assert!(!is_checkout_reachable(0));
        assert!(!is_checkout_reachable(1));
        assert!(!is_checkout_reachable(171));
        assert!(!is_checkout_reachable(180));
        assert!(!is_checkout_reachable(501));
    }
}
