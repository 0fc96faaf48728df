use super::*;
use crate::deck::card::{MAJOR_ARCANA, Suit};
use crate::deck::catalog::DeckKey;

#[test]
fn prompt_names_card_deck_and_intention() {
    let card = CardDescriptor::major(&MAJOR_ARCANA[0], "thoth", "begin again", 0);
    let prompt = compose_prompt(&card, DeckKey::Thoth.variant(), "begin again");
    assert!(prompt.starts_with("A mystical tarot card image for The Fool, inspired by "));
    assert!(prompt.contains(DeckKey::Thoth.variant().name));
    assert!(prompt.contains("imbued with the intention: \"begin again\""));
    assert!(prompt.ends_with("ethereal, magical, detailed"));
}

#[test]
fn prompt_falls_back_when_symbolism_missing() {
    let mut card = CardDescriptor::minor(Suit::Cups, "Ace", "rider-waite", "love", 0);
    card.symbolism = None;
    let prompt = compose_prompt(&card, DeckKey::RiderWaite.variant(), "love");
    assert!(prompt.contains("with mystical symbolism,"));
}

#[test]
fn missing_file_is_an_error() {
    let oracle = FileOracle::new("target/definitely-not-here.png");
    assert!(oracle.conjure("anything").is_err());
}
