use pokerhand::Hand;

/// Parses a hand, panicking with the input on failure.
pub fn hand(cards: &str) -> Hand {
    cards
        .parse()
        .unwrap_or_else(|e| panic!("{cards:?} should be a valid hand: {e}"))
}

/// Asserts the first hand beats the second under every comparison operator.
pub fn assert_beats(winner: &str, loser: &str) {
    let (w, l) = (hand(winner), hand(loser));
    assert!(w > l, "{w:?} should beat {l:?}");
    assert!(w >= l, "{w:?} should beat {l:?}");
    assert!(l < w, "{l:?} should lose to {w:?}");
    assert!(l <= w, "{l:?} should lose to {w:?}");
    assert!(w != l, "{w:?} should differ from {l:?}");
}
