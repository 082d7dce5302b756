use proptest::prelude::*;
use std::collections::HashSet;
use triple_pocket::cards::{Card, Rank, Suit};
use triple_pocket::evaluator::{best_hand, break_tie, classify, combinations, Category, TieBreak};
use triple_pocket::hand::{Community, Hand, HoleHand};
use triple_pocket::outcome::{determine_outcome, DealerHoles, Winner};

fn full_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|s| Rank::ALL.into_iter().map(move |r| Card::new(r, s)))
        .collect()
}

fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(), n).prop_shuffle()
}

fn any_hand() -> impl Strategy<Value = Hand> {
    distinct_cards(5).prop_map(|cs| Hand::try_from(cs.as_slice()).unwrap())
}

/// Category from rank counts and suits, independent of card positions.
fn reference_category(hand: &Hand) -> Category {
    let ranks = hand.ranks();
    let mut counts: Vec<usize> = Vec::new();
    let mut seen: Vec<Rank> = Vec::new();
    for r in ranks {
        if !seen.contains(&r) {
            seen.push(r);
            counts.push(ranks.iter().filter(|&&x| x == r).count());
        }
    }
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let flush = hand.cards().iter().all(|c| c.suit() == hand.cards()[0].suit());
    let straight = ranks.windows(2).all(|w| w[0].value() == w[1].value() + 1);

    match (counts.as_slice(), flush, straight) {
        (_, true, true) if ranks[0] == Rank::Ace => Category::RoyalFlush,
        (_, true, true) => Category::StraightFlush,
        ([4, 1], _, _) => Category::FourOfAKind,
        ([3, 2], _, _) => Category::FullHouse,
        (_, true, false) => Category::Flush,
        (_, false, true) => Category::Straight,
        ([3, 1, 1], _, _) => Category::ThreeOfAKind,
        ([2, 2, 1], _, _) => Category::TwoPairs,
        ([2, 1, 1, 1], _, _) => Category::OnePair,
        _ => Category::HighCard,
    }
}

const SYMMETRIC: [Category; 7] = [
    Category::RoyalFlush,
    Category::StraightFlush,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::Straight,
    Category::TwoPairs,
    Category::OnePair,
];

proptest! {
    #[test]
    fn classify_matches_rank_counts(hand in any_hand()) {
        prop_assert_eq!(classify(&hand), reference_category(&hand));
    }

    #[test]
    fn flush_and_straight_together_are_straight_flush_or_royal(top in 6u8..=14u8, suit in 0usize..4) {
        let suit = Suit::ALL[suit];
        let cards: Vec<Card> = (0..5u8)
            .map(|i| Card::from_value(top - i, suit).unwrap())
            .collect();
        let hand = Hand::try_from(cards.as_slice()).unwrap();
        let expected = if top == 14 { Category::RoyalFlush } else { Category::StraightFlush };
        prop_assert_eq!(classify(&hand), expected);
    }

    #[test]
    fn hand_ties_with_itself(hand in any_hand()) {
        prop_assert_eq!(break_tie(&hand, &hand, classify(&hand)), TieBreak::Equal);
    }

    #[test]
    fn symmetric_rules_invert_when_swapped(a in any_hand(), b in any_hand()) {
        let category = classify(&a);
        if category == classify(&b) && SYMMETRIC.contains(&category) {
            prop_assert_eq!(break_tie(&a, &b, category), break_tie(&b, &a, category).reversed());
        }
    }

    #[test]
    fn high_card_rule_never_favours_second(a in any_hand(), b in any_hand()) {
        prop_assert_ne!(break_tie(&a, &b, Category::HighCard), TieBreak::Second);
        prop_assert_ne!(break_tie(&a, &b, Category::Flush), TieBreak::Second);
    }

    #[test]
    fn combinations_are_21_distinct_sorted_subsets(cards in distinct_cards(7)) {
        let hole = HoleHand::from_slice(&cards[..2]).unwrap();
        let community = Community::from_slice(&cards[2..]).unwrap();
        let hands = combinations(&hole, &community);
        prop_assert_eq!(hands.len(), 21);

        let mut sets = HashSet::new();
        for h in &hands {
            prop_assert!(h.ranks().windows(2).all(|w| w[0] >= w[1]));
            prop_assert!(h.cards().iter().all(|c| cards.contains(c)));
            let mut key = h.cards().to_vec();
            key.sort();
            sets.insert(key);
        }
        prop_assert_eq!(sets.len(), 21);
    }

    #[test]
    fn best_hand_has_the_top_category(cards in distinct_cards(7)) {
        let hole = HoleHand::from_slice(&cards[..2]).unwrap();
        let community = Community::from_slice(&cards[2..]).unwrap();
        let pool = combinations(&hole, &community);
        let best = best_hand(&pool).unwrap();
        let top = pool.iter().map(classify).max().unwrap();
        prop_assert_eq!(best.category, top);
        prop_assert!(pool.contains(&best.hand));
    }

    #[test]
    fn outcome_multiples_cancel_out(cards in distinct_cards(11)) {
        let player = HoleHand::from_slice(&cards[..2]).unwrap();
        let dealer = DealerHoles::new(
            HoleHand::from_slice(&cards[2..4]).unwrap(),
            HoleHand::from_slice(&cards[4..6]).unwrap(),
        );
        let community = Community::from_slice(&cards[6..]).unwrap();
        let o = determine_outcome(&player, &dealer, &community).unwrap();

        prop_assert_eq!(o.player_multiplier, -o.dealer_multiplier);
        match o.winner {
            Winner::Dealer => prop_assert_eq!(o.player_multiplier, -1),
            Winner::Tie => prop_assert_eq!(o.player_multiplier, 0),
            Winner::Player => prop_assert!(o.player_multiplier >= 1),
        }
        if o.player_category > o.dealer_category {
            prop_assert_eq!(o.winner, Winner::Player);
        }
        if o.player_category < o.dealer_category {
            prop_assert_eq!(o.winner, Winner::Dealer);
        }
    }
}
