// src/tiles.rs
use std::fmt;

/// A tile kind, with the wire code as its discriminant.
///
/// Codes: Characters 1-9, Bamboo 11-19, Circles 21-29,
/// winds 31-34, dragons 35-37. The gaps (10, 20, 30) keep
/// `code + 1` from ever crossing a suit boundary.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    Man1 = 1, Man2, Man3, Man4, Man5, Man6, Man7, Man8, Man9,
    Sou1 = 11, Sou2, Sou3, Sou4, Sou5, Sou6, Sou7, Sou8, Sou9,
    Pin1 = 21, Pin2, Pin3, Pin4, Pin5, Pin6, Pin7, Pin8, Pin9,
    East = 31, South, West, North,
    Red = 35, Green, White,
}

/// Tile families. The first three carry ranks 1-9, honors have none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Characters, // 万
    Bamboo,     // 条
    Circles,    // 饼
    Wind,
    Dragon,
}

impl Suit {
    pub fn is_numeric(self) -> bool {
        matches!(self, Suit::Characters | Suit::Bamboo | Suit::Circles)
    }
}

impl TryFrom<u8> for Tile {
    type Error = ();
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        use Tile::*;
        Ok(match v {
            1 => Man1, 2 => Man2, 3 => Man3, 4 => Man4, 5 => Man5,
            6 => Man6, 7 => Man7, 8 => Man8, 9 => Man9,
            11 => Sou1, 12 => Sou2, 13 => Sou3, 14 => Sou4, 15 => Sou5,
            16 => Sou6, 17 => Sou7, 18 => Sou8, 19 => Sou9,
            21 => Pin1, 22 => Pin2, 23 => Pin3, 24 => Pin4, 25 => Pin5,
            26 => Pin6, 27 => Pin7, 28 => Pin8, 29 => Pin9,
            31 => East, 32 => South, 33 => West, 34 => North,
            35 => Red, 36 => Green, 37 => White,
            _ => return Err(()),
        })
    }
}

impl TryFrom<i32> for Tile {
    type Error = ();
    fn try_from(v: i32) -> Result<Self, Self::Error> {
        u8::try_from(v).map_err(|_| ()).and_then(<Tile as TryFrom<u8>>::try_from)
    }
}

impl Tile {
    /// Every tile kind, in code order.
    pub const ALL: [Tile; 34] = {
        use Tile::*;
        [
            Man1, Man2, Man3, Man4, Man5, Man6, Man7, Man8, Man9,
            Sou1, Sou2, Sou3, Sou4, Sou5, Sou6, Sou7, Sou8, Sou9,
            Pin1, Pin2, Pin3, Pin4, Pin5, Pin6, Pin7, Pin8, Pin9,
            East, South, West, North,
            Red, Green, White,
        ]
    };

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn suit(self) -> Suit {
        match self as u8 {
            1..=9 => Suit::Characters,
            11..=19 => Suit::Bamboo,
            21..=29 => Suit::Circles,
            31..=34 => Suit::Wind,
            _ => Suit::Dragon,
        }
    }

    pub fn is_numeric(self) -> bool {
        self.suit().is_numeric()
    }

    pub fn is_honor(self) -> bool {
        !self.is_numeric()
    }

    /// Rank within a numeric suit (1-9). Honors have no rank.
    pub fn rank(self) -> Option<u8> {
        self.is_numeric().then(|| self as u8 % 10)
    }

    /// The tile one rank higher in the same suit, if any.
    pub fn next_in_suit(self) -> Option<Tile> {
        match self.rank() {
            Some(r) if r < 9 => Tile::try_from(self as u8 + 1).ok(),
            _ => None,
        }
    }

    /// Returns the Unicode Mahjong tile symbol
    pub fn to_unicode(self) -> char {
        use Tile::*;
        match self {
            Man1 => '\u{1F007}', Man2 => '\u{1F008}', Man3 => '\u{1F009}',
            Man4 => '\u{1F00A}', Man5 => '\u{1F00B}', Man6 => '\u{1F00C}',
            Man7 => '\u{1F00D}', Man8 => '\u{1F00E}', Man9 => '\u{1F00F}',
            Sou1 => '\u{1F010}', Sou2 => '\u{1F011}', Sou3 => '\u{1F012}',
            Sou4 => '\u{1F013}', Sou5 => '\u{1F014}', Sou6 => '\u{1F015}',
            Sou7 => '\u{1F016}', Sou8 => '\u{1F017}', Sou9 => '\u{1F018}',
            Pin1 => '\u{1F019}', Pin2 => '\u{1F01A}', Pin3 => '\u{1F01B}',
            Pin4 => '\u{1F01C}', Pin5 => '\u{1F01D}', Pin6 => '\u{1F01E}',
            Pin7 => '\u{1F01F}', Pin8 => '\u{1F020}', Pin9 => '\u{1F021}',
            East => '\u{1F000}', South => '\u{1F001}', West => '\u{1F002}', North => '\u{1F003}',
            Red => '\u{1F004}', Green => '\u{1F005}', White => '\u{1F006}',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_unicode())
    }
}

/// Suit of a raw wire code, `None` if the code is not a tile.
pub fn suit_of(code: i32) -> Option<Suit> {
    Tile::try_from(code).ok().map(Tile::suit)
}

pub fn is_numeric(code: i32) -> bool {
    suit_of(code).is_some_and(Suit::is_numeric)
}

/// Rank of a raw wire code, defined only for numeric suits.
pub fn rank_of(code: i32) -> Option<u8> {
    Tile::try_from(code).ok().and_then(Tile::rank)
}
