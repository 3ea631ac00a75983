use phf::phf_map;
use strum::{AsRefStr, Display, VariantArray};

/// Fixed vocabulary matched by exact lookup before any structural rule.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, AsRefStr, VariantArray)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Keyword {
    For,
    While,
    If,
    Else,
    BitwiseOr,
    LogicalOr,
    BitwiseAnd,
    LogicalAnd,
}

static RESERVED: phf::Map<&'static str, Keyword> = phf_map! {
    "for" => Keyword::For,
    "while" => Keyword::While,
    "if" => Keyword::If,
    "else" => Keyword::Else,
    "|" => Keyword::BitwiseOr,
    "||" => Keyword::LogicalOr,
    "&" => Keyword::BitwiseAnd,
    "&&" => Keyword::LogicalAnd,
};

impl Keyword {
    /// Case-sensitive; `FOR` is not a keyword.
    pub fn lookup(text: &str) -> Option<Keyword> {
        RESERVED.get(text).copied()
    }

    pub fn lexeme(&self) -> &'static str {
        match self {
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::BitwiseOr => "|",
            Keyword::LogicalOr => "||",
            Keyword::BitwiseAnd => "&",
            Keyword::LogicalAnd => "&&",
        }
    }

    pub fn is_reserved_word(&self) -> bool {
        matches!(
            self,
            Keyword::For | Keyword::While | Keyword::If | Keyword::Else
        )
    }

    /// Word keywords in the order they occupy the symbol table.
    pub fn reserved_words() -> impl Iterator<Item = Keyword> {
        Keyword::VARIANTS
            .iter()
            .copied()
            .filter(Keyword::is_reserved_word)
    }
}
