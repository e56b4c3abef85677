use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuator {
    LParen,
    RParen,
    Comma,
    Assign,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Caret,
    Tilde,
    Bang,
    Question,
    Colon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// Binding strength of an operator, lowest first. Higher ranks bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Precedence {
    Assignment = 1,
    Conditional,
    Sum,
    Product,
    Exponent,
    Prefix,
    Postfix,
    Call,
}

impl Precedence {
    pub const ALL: [Precedence; 8] = [
        Self::Assignment,
        Self::Conditional,
        Self::Sum,
        Self::Product,
        Self::Exponent,
        Self::Prefix,
        Self::Postfix,
        Self::Call,
    ];

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Every punctuator binding at this level in some grammatical position.
    pub fn punctuators(self) -> Vec<Punctuator> {
        Punctuator::ALL
            .into_iter()
            .filter(|p| {
                p.infix().map(|(prec, _)| prec) == Some(self)
                    || p.prefix() == Some(self)
                    || p.postfix() == Some(self)
            })
            .collect()
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Assignment => "assignment",
            Self::Conditional => "conditional",
            Self::Sum => "sum",
            Self::Product => "product",
            Self::Exponent => "exponent",
            Self::Prefix => "prefix",
            Self::Postfix => "postfix",
            Self::Call => "call",
        };
        f.pad(name)
    }
}

impl Punctuator {
    pub const ALL: [Punctuator; 13] = [
        Self::LParen,
        Self::RParen,
        Self::Comma,
        Self::Assign,
        Self::Plus,
        Self::Minus,
        Self::Asterisk,
        Self::Slash,
        Self::Caret,
        Self::Tilde,
        Self::Bang,
        Self::Question,
        Self::Colon,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            ',' => Some(Self::Comma),
            '=' => Some(Self::Assign),
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Asterisk),
            '/' => Some(Self::Slash),
            '^' => Some(Self::Caret),
            '~' => Some(Self::Tilde),
            '!' => Some(Self::Bang),
            '?' => Some(Self::Question),
            ':' => Some(Self::Colon),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::LParen => '(',
            Self::RParen => ')',
            Self::Comma => ',',
            Self::Assign => '=',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Asterisk => '*',
            Self::Slash => '/',
            Self::Caret => '^',
            Self::Tilde => '~',
            Self::Bang => '!',
            Self::Question => '?',
            Self::Colon => ':',
        }
    }

    /// Binding when the punctuator follows a complete operand. A `(` in
    /// this position opens a call.
    ///
    /// The structural punctuators `)`, `,` and `:` carry no level in any
    /// position: they only close or separate what `(` and `?` opened.
    pub fn infix(self) -> Option<(Precedence, Assoc)> {
        match self {
            Self::Assign => Some((Precedence::Assignment, Assoc::Right)),
            Self::Question => Some((Precedence::Conditional, Assoc::Right)),
            Self::Plus | Self::Minus => Some((Precedence::Sum, Assoc::Left)),
            Self::Asterisk | Self::Slash => Some((Precedence::Product, Assoc::Left)),
            Self::Caret => Some((Precedence::Exponent, Assoc::Right)),
            Self::LParen => Some((Precedence::Call, Assoc::Left)),
            _ => None,
        }
    }

    /// Binding when the punctuator appears where an operand is expected.
    pub fn prefix(self) -> Option<Precedence> {
        match self {
            Self::Plus | Self::Minus | Self::Tilde | Self::Bang => Some(Precedence::Prefix),
            _ => None,
        }
    }

    pub fn postfix(self) -> Option<Precedence> {
        match self {
            Self::Bang => Some(Precedence::Postfix),
            _ => None,
        }
    }
}

impl fmt::Display for Punctuator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    Punctuator(Punctuator),
    Name(&'src str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Punctuator(p) => write!(f, "{p}"),
            Token::Name(name) => f.write_str(name),
        }
    }
}
