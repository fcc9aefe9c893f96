//! Cards, ranks and suits shared by both solvers.

use std::fmt;
use std::str::FromStr;

const RANK_CHARS: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

/// A card rank, ordered A,2,3,...,T,J,Q,K with ordinals 0..12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(0);
    pub const KING: Rank = Rank(12);

    /// Build a rank from its ordinal (0..=12). Returns `None` out of range.
    pub fn from_ordinal(ordinal: u8) -> Option<Rank> {
        if ordinal < 13 {
            Some(Rank(ordinal))
        } else {
            None
        }
    }

    pub fn ordinal(self) -> u8 {
        self.0
    }

    /// Strictly uppercase, matching the deck's canonical two-character
    /// token format: `"ks"` and `"KS"` are not `"Ks"`.
    pub fn from_char(c: char) -> Option<Rank> {
        RANK_CHARS.iter().position(|&r| r == c).map(|i| Rank(i as u8))
    }

    pub fn to_char(self) -> char {
        RANK_CHARS[self.0 as usize]
    }

    /// Pyramid Solitaire's card value: Ace is 1, King is 13.
    pub fn pyramid_value(self) -> u8 {
        self.0 + 1
    }
}

/// A card suit, ordered c,d,h,s (the order the deck module iterates in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Strictly lowercase; see [`Rank::from_char`].
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

/// A single playing card. Cheap to copy, compare and hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn pyramid_value(self) -> u8 {
        self.rank.pyramid_value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

/// An error parsing a two-character card token such as `"Ks"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardParseError(pub String);

impl fmt::Display for CardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a card: {:?}", self.0)
    }
}

impl std::error::Error for CardParseError {}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Card, CardParseError> {
        let mut chars = s.chars();
        let (rank_char, suit_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => (r, su),
            _ => return Err(CardParseError(s.to_string())),
        };
        let rank = Rank::from_char(rank_char).ok_or_else(|| CardParseError(s.to_string()))?;
        let suit = Suit::from_char(suit_char).ok_or_else(|| CardParseError(s.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

/// Cyclic rank distance used by TriPeaks: King and Ace are one apart.
pub fn tripeaks_distance(a: Rank, b: Rank) -> u8 {
    let diff = (a.ordinal() as i16 - b.ordinal() as i16).unsigned_abs() as u8;
    diff.min(13 - diff)
}

/// True if `b` is one rank above or below `a`, wrapping King to Ace.
pub fn is_one_rank_apart(a: Rank, b: Rank) -> bool {
    tripeaks_distance(a, b) == 1
}

/// True if the card or pair of cards can be removed together in Pyramid
/// Solitaire: a lone King, or two cards whose pyramid values sum to 13.
pub fn cards_are_removable(card1: Card, card2: Option<Card>) -> bool {
    let total = card1.pyramid_value() as u16 + card2.map_or(0, Card::pyramid_value) as u16;
    total == 13
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Ac", Rank::ACE, Suit::Clubs)]
    #[case("Ks", Rank::KING, Suit::Spades)]
    #[case("Td", Rank::from_ordinal(9).unwrap(), Suit::Diamonds)]
    fn parses_valid_tokens(#[case] token: &str, #[case] rank: Rank, #[case] suit: Suit) {
        let card: Card = token.parse().unwrap();
        assert_eq!(card.rank, rank);
        assert_eq!(card.suit, suit);
    }

    #[rstest]
    #[case("")]
    #[case("A")]
    #[case("Axx")]
    #[case("1s")]
    #[case("Az")]
    #[case("ks")]
    #[case("KS")]
    #[case("kS")]
    fn rejects_invalid_tokens(#[case] token: &str) {
        assert!(token.parse::<Card>().is_err());
    }

    #[test]
    fn displays_as_two_char_token() {
        let card = Card::new(Rank::from_ordinal(5).unwrap(), Suit::Hearts);
        assert_eq!(card.to_string(), "6h");
    }

    #[test]
    fn pyramid_values_span_one_to_thirteen() {
        assert_eq!(Rank::ACE.pyramid_value(), 1);
        assert_eq!(Rank::KING.pyramid_value(), 13);
    }

    #[test]
    fn king_is_solo_removable() {
        let king = Card::new(Rank::KING, Suit::Clubs);
        assert!(cards_are_removable(king, None));
    }

    #[test]
    fn pair_summing_to_thirteen_is_removable() {
        let six = Card::new(Rank::from_ordinal(5).unwrap(), Suit::Hearts);
        let seven = Card::new(Rank::from_ordinal(6).unwrap(), Suit::Spades);
        assert!(cards_are_removable(six, Some(seven)));
    }

    #[rstest]
    #[case(Rank::KING, Rank::ACE, true)]
    #[case(Rank::ACE, Rank::from_ordinal(1).unwrap(), true)]
    #[case(Rank::ACE, Rank::KING, true)]
    #[case(Rank::ACE, Rank::from_ordinal(2).unwrap(), false)]
    fn rank_adjacency_wraps(#[case] a: Rank, #[case] b: Rank, #[case] expected: bool) {
        assert_eq!(is_one_rank_apart(a, b), expected);
        assert_eq!(is_one_rank_apart(b, a), expected);
    }
}
