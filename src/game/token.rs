#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Black,
    Red,
}

impl Token {
    /// Get the other player's token
    pub fn other(self) -> Token {
        match self {
            Token::Black => Token::Red,
            Token::Red => Token::Black,
        }
    }

    /// Single-character form used by the text rendering
    pub fn char_value(self) -> char {
        match self {
            Token::Black => 'B',
            Token::Red => 'R',
        }
    }

    /// Get the token name for display
    pub fn name(self) -> &'static str {
        match self {
            Token::Black => "Black",
            Token::Red => "Red",
        }
    }
}
