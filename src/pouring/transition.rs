//! Successor generation: every state one pour away.
//!
//! A pour runs until the source is empty or the destination is full,
//! whichever comes first. No partial pours exist.

use super::bucket::Pour;
use super::capacities::Capacities;
use super::state::BucketState;

/// Apply a single pour.
///
/// Moves `min(source level, destination headroom)`; the bucket not involved
/// keeps its level. A pour that moves nothing returns the input state.
///
/// ```rust
/// use decant::pouring::{apply_pour, Bucket, BucketState, Capacities, Pour};
///
/// let next = apply_pour(
///     &BucketState::new(8, 0, 0),
///     &Capacities::CLASSIC,
///     Pour::new(Bucket::A, Bucket::B),
/// );
/// assert_eq!(next, BucketState::new(3, 5, 0));
/// ```
pub fn apply_pour(state: &BucketState, capacities: &Capacities, pour: Pour) -> BucketState {
    let source = state.level(pour.from);
    let amount = source.min(capacities.headroom(state, pour.to));

    state
        .with_level(pour.from, source - amount)
        .with_level(pour.to, state.level(pour.to) + amount)
}

/// Every state reachable by one pour, in [`Pour::ALL`] order.
///
/// Always six states; no-op pours are kept, so duplicates of the input
/// state are expected.
///
/// ```rust
/// use decant::pouring::{get_next_states, BucketState, Capacities};
///
/// let next = get_next_states(&BucketState::new(8, 0, 0), &Capacities::CLASSIC);
/// assert_eq!(next.len(), 6);
/// assert_eq!(next[0], BucketState::new(3, 5, 0));
/// assert_eq!(next[1], BucketState::new(5, 0, 3));
/// ```
pub fn get_next_states(state: &BucketState, capacities: &Capacities) -> Vec<BucketState> {
    Pour::ALL
        .iter()
        .map(|pour| apply_pour(state, capacities, *pour))
        .collect()
}

/// Like [`get_next_states`], with each successor labelled by its pour.
pub fn next_moves(state: &BucketState, capacities: &Capacities) -> Vec<(Pour, BucketState)> {
    Pour::ALL
        .iter()
        .map(|pour| (*pour, apply_pour(state, capacities, *pour)))
        .collect()
}

/// The pour that turns `from` into `to`, if one exists.
///
/// When several pours give the same result the first in [`Pour::ALL`]
/// order is returned.
pub fn pour_between(
    from: &BucketState,
    to: &BucketState,
    capacities: &Capacities,
) -> Option<Pour> {
    next_moves(from, capacities)
        .into_iter()
        .find(|(_, next)| next == to && next != from)
        .map(|(pour, _)| pour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pouring::Bucket;

    #[test]
    fn classic_start_successors() {
        let next = get_next_states(&BucketState::CLASSIC_START, &Capacities::CLASSIC);

        assert_eq!(
            next,
            vec![
                BucketState::new(3, 5, 0),
                BucketState::new(5, 0, 3),
                BucketState::new(8, 0, 0),
                BucketState::new(8, 0, 0),
                BucketState::new(8, 0, 0),
                BucketState::new(8, 0, 0),
            ]
        );
    }

    #[test]
    fn pour_stops_when_destination_full() {
        let next = apply_pour(
            &BucketState::new(3, 2, 3),
            &Capacities::CLASSIC,
            Pour::new(Bucket::A, Bucket::B),
        );
        assert_eq!(next, BucketState::new(0, 5, 3));
    }

    #[test]
    fn pour_stops_when_source_empty() {
        let next = apply_pour(
            &BucketState::new(6, 2, 0),
            &Capacities::CLASSIC,
            Pour::new(Bucket::B, Bucket::C),
        );
        assert_eq!(next, BucketState::new(6, 0, 2));
    }

    #[test]
    fn pour_into_full_bucket_is_noop() {
        let state = BucketState::new(0, 5, 3);
        let next = apply_pour(&state, &Capacities::CLASSIC, Pour::new(Bucket::C, Bucket::B));
        assert_eq!(next, state);
    }

    #[test]
    fn overfull_destination_does_not_underflow() {
        let state = BucketState::new(2, 7, 0);
        let next = apply_pour(&state, &Capacities::CLASSIC, Pour::new(Bucket::A, Bucket::B));
        assert_eq!(next, state);
    }

    #[test]
    fn next_moves_label_pours() {
        let moves = next_moves(&BucketState::new(3, 5, 0), &Capacities::CLASSIC);

        assert_eq!(moves.len(), 6);
        assert_eq!(moves[3], (Pour::new(Bucket::B, Bucket::C), BucketState::new(3, 2, 3)));
    }

    #[test]
    fn pour_between_finds_the_move() {
        let caps = Capacities::CLASSIC;

        assert_eq!(
            pour_between(&BucketState::new(6, 0, 2), &BucketState::new(1, 5, 2), &caps),
            Some(Pour::new(Bucket::A, Bucket::B))
        );
        assert_eq!(
            pour_between(&BucketState::new(8, 0, 0), &BucketState::new(0, 5, 3), &caps),
            None
        );
        assert_eq!(
            pour_between(&BucketState::new(8, 0, 0), &BucketState::new(8, 0, 0), &caps),
            None
        );
    }
}
