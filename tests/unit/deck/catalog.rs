use super::*;

#[test]
fn keys_round_trip_and_index_their_entry() {
    for key in DeckKey::ALL {
        assert_eq!(DeckKey::parse(key.as_str()), Some(key));
        assert_eq!(key.variant().key, key);
    }
    assert_eq!(DeckKey::parse("tarot-of-nowhere"), None);
}

#[test]
fn every_deck_has_a_distinct_pattern_and_effect() {
    let patterns: std::collections::HashSet<_> = DECKS.iter().map(|d| d.back_pattern).collect();
    let effects: std::collections::HashSet<_> = DECKS.iter().map(|d| d.mystical_effect).collect();
    assert_eq!(patterns.len(), 4);
    assert_eq!(effects.len(), 4);
    assert!(DECKS.iter().all(|d| d.colors.len() >= 4));
}

#[test]
fn unknown_names_parse_to_none() {
    assert_eq!(BackPattern::parse("paisley"), None);
    assert_eq!(MysticalEffect::parse("confetti"), None);
    assert_eq!(BackPattern::parse("gold-leaf"), Some(BackPattern::GoldLeaf));
    assert_eq!(
        MysticalEffect::parse("cosmic-swirl"),
        Some(MysticalEffect::CosmicSwirl)
    );
}

#[test]
fn unknown_deck_falls_back_to_rider_waite() {
    let deck = deck_or_default("???");
    assert_eq!(deck.key, DeckKey::RiderWaite);
    assert_eq!(deck.year, 1909);
    assert_eq!(deck_or_default("thoth").name, "Thoth Tarot");
}
