//! Card types.

use alloc::string::{String, ToString};
use core::fmt;

use crate::error::InvalidCardSpec;

/// Card color.
///
/// `Wild` marks colorless cards whose color is chosen when they are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Colorless.
    Wild = 0,
    /// Blue.
    Blue = 1,
    /// Green.
    Green = 2,
    /// Red.
    Red = 3,
    /// Yellow.
    Yellow = 4,
}

/// The four playable colors, in code order.
pub const COLORS: [Color; 4] = [Color::Blue, Color::Green, Color::Red, Color::Yellow];

impl Color {
    /// Returns the integer code of the color.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns whether this is one of the four playable colors.
    #[must_use]
    pub const fn is_chosen(self) -> bool {
        !matches!(self, Self::Wild)
    }
}

impl TryFrom<u8> for Color {
    type Error = InvalidCardSpec;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Wild),
            1 => Ok(Self::Blue),
            2 => Ok(Self::Green),
            3 => Ok(Self::Red),
            4 => Ok(Self::Yellow),
            _ => Err(InvalidCardSpec::Color(code)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wild => "Wild",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// Card symbol: a number rank or an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// 0.
    Zero = 0,
    /// 1.
    One = 1,
    /// 2.
    Two = 2,
    /// 3.
    Three = 3,
    /// 4.
    Four = 4,
    /// 5.
    Five = 5,
    /// 6.
    Six = 6,
    /// 7.
    Seven = 7,
    /// 8.
    Eight = 8,
    /// 9.
    Nine = 9,
    /// The next player loses their turn.
    Skip = 10,
    /// Play order is reversed.
    Reverse = 11,
    /// The next player draws two cards.
    DrawTwo = 12,
    /// The player nominates a color.
    Wild = 13,
    /// The player nominates a color and the next player draws four cards.
    DrawFour = 14,
}

impl Symbol {
    /// All symbols, in code order.
    pub const ALL: [Self; 15] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Skip,
        Self::Reverse,
        Self::DrawTwo,
        Self::Wild,
        Self::DrawFour,
    ];

    /// Returns the integer code of the symbol.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns whether cards with this symbol are printed without a color.
    #[must_use]
    pub const fn is_colorless(self) -> bool {
        matches!(self, Self::Wild | Self::DrawFour)
    }
}

impl TryFrom<u8> for Symbol {
    type Error = InvalidCardSpec;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(InvalidCardSpec::Symbol(code))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Zero => "Zero",
            Self::One => "One",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Skip => "Skip",
            Self::Reverse => "Reverse",
            Self::DrawTwo => "Draw Two",
            Self::Wild => "Wild",
            Self::DrawFour => "Draw Four",
        };
        f.write_str(name)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The symbol of the card.
    pub symbol: Symbol,
    /// The color of the card.
    pub color: Color,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(symbol: Symbol, color: Color) -> Self {
        Self { symbol, color }
    }

    /// Creates a card from integer codes (symbol 0-14, color 0-4).
    ///
    /// # Errors
    ///
    /// Returns an error if either code is outside its domain.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::{Card, Color, InvalidCardSpec, Symbol};
    ///
    /// let card = Card::from_codes(12, 3).unwrap();
    /// assert_eq!(card, Card::new(Symbol::DrawTwo, Color::Red));
    /// assert_eq!(Card::from_codes(15, 1), Err(InvalidCardSpec::Symbol(15)));
    /// ```
    pub fn from_codes(symbol: u8, color: u8) -> Result<Self, InvalidCardSpec> {
        Ok(Self::new(Symbol::try_from(symbol)?, Color::try_from(color)?))
    }

    /// Returns whether this card can be played on `top`.
    ///
    /// A card matches on color or symbol; colorless cards and the WILD and
    /// DRAW FOUR symbols always match.
    #[must_use]
    pub fn matches(&self, top: &Self) -> bool {
        self.color == top.color
            || self.symbol == top.symbol
            || self.color == Color::Wild
            || self.symbol == Symbol::Wild
            || self.symbol == Symbol::DrawFour
    }

    /// Returns the human-readable label, e.g. `"Red Draw Two"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.symbol)
    }
}
