/// Start delay for the sibling at `index`.
pub fn stagger_delay(index: usize, unit_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(unit_ms)
}

/// Pairs each item with its position and delay, in order.
pub fn cascade<T>(items: &[T], unit_ms: u32) -> impl Iterator<Item = (usize, u32, &T)> + '_ {
    items
        .iter()
        .enumerate()
        .map(move |(index, item)| (index, stagger_delay(index, unit_ms), item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn four_cards_cascade_by_a_tenth_of_a_second() {
        let cards = ["facial", "injectables", "laser", "contouring"];
        let delays: Vec<u32> = cascade(&cards, 100).map(|(_, delay, _)| delay).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }

    #[test]
    fn empty_sequence_has_no_delays() {
        let none: [u8; 0] = [];
        assert_eq!(cascade(&none, 100).count(), 0);
    }

    #[test]
    fn reversing_content_reverses_the_cascade() {
        let forward = ["a", "b", "c"];
        let mut backward = forward;
        backward.reverse();

        let by_item = |items: &[&'static str]| {
            let mut pairs: Vec<(&str, u32)> =
                cascade(items, 100).map(|(_, delay, item)| (*item, delay)).collect();
            pairs.sort();
            pairs
        };
        assert_eq!(by_item(&forward[..]), vec![("a", 0), ("b", 100), ("c", 200)]);
        assert_eq!(by_item(&backward[..]), vec![("a", 200), ("b", 100), ("c", 0)]);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(stagger_delay(usize::MAX, 100), u32::MAX);
    }

    proptest! {
        #[test]
        fn delay_is_position_times_unit(len in 0usize..200, unit in 1u32..1000) {
            let items = vec![(); len];
            let mut previous = None;
            for (index, delay, _) in cascade(&items, unit) {
                prop_assert_eq!(delay, index as u32 * unit);
                if let Some(previous) = previous {
                    prop_assert!(delay > previous);
                }
                previous = Some(delay);
            }
        }
    }
}
