//! Scoring and card parsing tests.

mod common;

use bjround::score::{card_value, evaluate, is_bust};
use bjround::{BLACKJACK, Card, CardError, Hand, Rank, Suit, WireCard, score};

use common::card;

fn hand(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(rank, Suit::Spades)).collect()
}

/// Best total over every 1/11 assignment of the aces.
fn best_total(ranks: &[Rank]) -> u8 {
    let base: u32 = ranks
        .iter()
        .map(|&rank| if rank == Rank::Ace { 1 } else { u32::from(card_value(rank)) })
        .sum();
    let aces = ranks.iter().filter(|&&rank| rank == Rank::Ace).count() as u32;

    let best = (0..=aces)
        .map(|high| base + 10 * high)
        .filter(|&total| total <= u32::from(BLACKJACK))
        .max()
        .unwrap_or(base);
    u8::try_from(best).unwrap_or(u8::MAX)
}

#[test]
fn known_hands() {
    assert_eq!(score(&hand(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(score(&hand(&[Rank::Ace, Rank::King])), 21);
    assert_eq!(
        score(&hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::King])),
        13
    );
    assert_eq!(score(&hand(&[Rank::King, Rank::Queen, Rank::Two])), 22);
    assert!(is_bust(&hand(&[Rank::King, Rank::Queen, Rank::Two])));
    assert_eq!(score(&[]), 0);
}

#[test]
fn soft_and_hard_totals() {
    assert_eq!(evaluate(&hand(&[Rank::Ace, Rank::Six])), (17, true));
    assert_eq!(evaluate(&hand(&[Rank::Ace, Rank::Six, Rank::Ten])), (17, false));
    assert_eq!(evaluate(&hand(&[Rank::Ten, Rank::Seven])), (17, false));
}

#[test]
fn face_cards_count_ten() {
    for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
        assert_eq!(card_value(rank), 10);
    }
    assert_eq!(card_value(Rank::Ace), 11);
}

#[test]
fn hands_without_aces_sum_face_values() {
    let non_aces = &Rank::ALL[1..];
    for &a in non_aces {
        for &b in non_aces {
            for &c in non_aces {
                let ranks = [a, b, c];
                let expected: u8 = ranks.iter().map(|&rank| card_value(rank)).sum();
                assert_eq!(score(&hand(&ranks)), expected, "{ranks:?}");
            }
        }
    }
}

#[test]
fn aces_take_the_best_total_not_over_21() {
    let ranks = [Rank::Ace, Rank::Two, Rank::Five, Rank::Nine, Rank::King];
    for &a in &ranks {
        for &b in &ranks {
            for &c in &ranks {
                for &d in &ranks {
                    let cards = [a, b, c, d];
                    assert_eq!(score(&hand(&cards)), best_total(&cards), "{cards:?}");
                }
            }
        }
    }
}

#[test]
fn long_ace_runs_score_every_ace_low() {
    for count in [21, 22, 23, 24, 25, 30] {
        let aces = vec![Rank::Ace; count];
        let cards = hand(&aces);
        assert_eq!(score(&cards), count as u8, "{count} aces");
        assert_eq!(is_bust(&cards), count > 21, "{count} aces");

        for &extra in &Rank::ALL {
            let mut ranks = aces.clone();
            ranks.push(extra);
            assert_eq!(score(&hand(&ranks)), best_total(&ranks), "{count} aces + {extra:?}");
        }
    }

    let mut cards = hand(&[Rank::King; 30]);
    cards.extend(hand(&[Rank::Ace; 24]));
    assert_eq!(score(&cards), u8::MAX);
    assert!(is_bust(&cards));
}

#[test]
fn hand_tracks_bust() {
    let mut player = Hand::new();
    player.add_card(card(Rank::Nine, Suit::Hearts));
    player.add_card(card(Rank::Nine, Suit::Clubs));
    assert!(!player.is_bust());
    player.add_card(card(Rank::Five, Suit::Clubs));
    assert_eq!(player.value(), 23);
    assert!(player.is_bust());
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = bjround::DealerHand::new();
    dealer.add_card(card(Rank::Ace, Suit::Hearts));
    dealer.add_card(card(Rank::Six, Suit::Clubs));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 11);

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());
}

#[test]
fn rank_parsing_accepts_only_well_formed_values() {
    assert_eq!(Rank::parse("ACE"), Ok(Rank::Ace));
    assert_eq!(Rank::parse("2"), Ok(Rank::Two));
    assert_eq!(Rank::parse("10"), Ok(Rank::Ten));
    assert_eq!(Rank::parse("QUEEN"), Ok(Rank::Queen));

    for bad in ["1", "11", "02", " 7", "7 ", "+5", "", "ace", "0"] {
        assert_eq!(
            Rank::parse(bad),
            Err(CardError::MalformedRank(bad.into())),
            "{bad:?}"
        );
    }
}

#[test]
fn wire_cards_convert_both_ways() {
    let ten = Card::new(Rank::Ten, Suit::Diamonds);
    let wire = ten.to_wire();
    assert_eq!(wire.code, "0D");
    assert_eq!(wire.value, "10");
    assert_eq!(wire.suit, "DIAMONDS");
    assert_eq!(Card::try_from(&wire), Ok(ten));

    let bad_suit = WireCard {
        value: "ACE".into(),
        suit: "CUPS".into(),
        ..WireCard::default()
    };
    assert_eq!(
        Card::try_from(&bad_suit),
        Err(CardError::MalformedSuit("CUPS".into()))
    );
}
