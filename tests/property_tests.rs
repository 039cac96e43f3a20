//! Property tests for the scoring invariants.

use oche::{
    is_checkout_reachable, GameBuilder, PlayerId, Status, IMPOSSIBLE_CHECKOUTS, MAX_CHECKOUT,
    MIN_CHECKOUT,
};
use proptest::prelude::*;

proptest! {
    /// Remaining score is always the starting score minus the recorded
    /// total, and never negative, for any sequence of in-range throws.
    #[test]
    fn score_conservation(scores in prop::collection::vec(0i32..=180, 0..60)) {
        let mut game = GameBuilder::new(PlayerId::new(1)).build();

        for score in scores {
            let before = game.turns().len();
            let feedback = game.record_turn(score);

            // In-range throws always record exactly one turn.
            prop_assert!(feedback.status.records_turn());
            prop_assert_eq!(game.turns().len(), before + 1);
        }

        prop_assert_eq!(game.remaining_score(), 501 - game.total_score());
        prop_assert!(game.total_score() <= 501);
    }

    /// Out-of-range scores are rejected without touching the history.
    #[test]
    fn invalid_never_appends(score in prop_oneof![i32::MIN..0, 181..=i32::MAX]) {
        let mut game = GameBuilder::new(PlayerId::new(1)).build();
        game.record_turn(100);
        let before = game.clone();

        let feedback = game.record_turn(score);

        prop_assert_eq!(feedback.status, Status::Invalid);
        prop_assert_eq!(game, before);
    }

    /// A turn that would leave exactly 1 busts, whatever the throw was.
    #[test]
    fn one_left_always_busts(starting in 3u16..=181) {
        let mut game = GameBuilder::new(PlayerId::new(1))
            .starting_score(starting)
            .build();

        let feedback = game.record_turn(i32::from(starting) - 1);

        prop_assert_eq!(feedback.status, Status::Bust);
        prop_assert_eq!(game.remaining_score(), starting);
    }

    /// The checkout predicate is exactly "in 2..=170 and not in the
    /// impossible set".
    #[test]
    fn checkout_predicate_is_exhaustive(score in 0u16..=300) {
        let expected = (MIN_CHECKOUT..=MAX_CHECKOUT).contains(&score)
            && !IMPOSSIBLE_CHECKOUTS.contains(&score);
        prop_assert_eq!(is_checkout_reachable(score), expected);
    }

    /// Reading statistics does not change them.
    #[test]
    fn statistics_idempotent(scores in prop::collection::vec(0i32..=180, 0..20)) {
        let mut game = GameBuilder::new(PlayerId::new(1)).build();
        for score in scores {
            game.record_turn(score);
        }

        let first = game.stats();
        let again = game.stats();

        prop_assert_eq!(first, again);
        prop_assert_eq!(game.points_per_dart(), game.points_per_dart());
        prop_assert_eq!(game.three_dart_average(), game.three_dart_average());
    }
}

/// Zero is only ever reached through a Completed turn.
#[test]
fn completion_implies_legal_checkout() {
    let mut game = GameBuilder::new(PlayerId::new(1)).build();
    let mut completed = false;

    for score in [180, 180, 139, 1, 2] {
        // 139 leaves 2; 1 would leave 1 (bust); 2 finishes on double 1.
        let feedback = game.record_turn(score);
        completed = feedback.status == Status::Completed;
    }

    assert!(completed);
    assert!(game.is_complete());
}
