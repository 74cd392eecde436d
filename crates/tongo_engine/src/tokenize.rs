//! Semantic tokenization of numeral phrases.
//!
//! The inverse direction: a generated phrase is split into words, each word
//! classified against the morpheme table, and well-formed phrases are read
//! back into the number they denote. Only the uniform-connector grammar the
//! assembler emits is accepted; phrases with recursive multipliers (a
//! thousands multiplier of 10 or more) are reported as unparseable rather
//! than mis-read.

use tongo_foundation::MorphemeTable;

/// Semantic class of one word in a numeral phrase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A base lexical number 1-9, carrying its value.
    Unit(u64),
    /// The base word for 10.
    Ten,
    /// The dedicated base-20 word.
    Twenty,
    /// The hundreds classifier.
    Hundred,
    /// The thousands classifier.
    Thousand,
    /// The additive connector.
    Connector,
    /// The tens-forming morpheme.
    TensFormer,
    /// A word the table does not know.
    Unknown,
}

/// Splits a phrase into words and classifies each against the table.
#[must_use]
pub fn tokenize<'a>(table: &MorphemeTable, phrase: &'a str) -> Vec<(Token, &'a str)> {
    phrase
        .split_whitespace()
        .map(|word| (classify(table, word), word))
        .collect()
}

/// Reads a well-formed phrase back into its number.
///
/// A phrase is well-formed when it is a connector-separated sequence of
/// component groups, each group being a bare base word, a tens-former plus
/// unit, or a classifier plus optional single-digit multiplier. Returns
/// `None` for anything else - unknown words, recursive multipliers, empty
/// input.
#[must_use]
pub fn parse_number(table: &MorphemeTable, phrase: &str) -> Option<u64> {
    let tokens = tokenize(table, phrase);
    if tokens.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    for group in tokens.split(|(token, _)| *token == Token::Connector) {
        total = total.checked_add(group_value(group)?)?;
    }
    (total > 0).then_some(total)
}

/// Value of one connector-delimited component group, or `None` if the group
/// does not match any component shape.
fn group_value(group: &[(Token, &str)]) -> Option<u64> {
    let tokens: Vec<Token> = group.iter().map(|(token, _)| *token).collect();
    match tokens.as_slice() {
        [Token::Unit(d)] => Some(*d),
        [Token::Ten] => Some(10),
        [Token::Twenty] => Some(20),
        [Token::TensFormer, Token::Unit(d)] if (3..=9).contains(d) => Some(d * 10),
        [Token::Hundred] => Some(100),
        [Token::Hundred, Token::Unit(d)] => Some(d * 100),
        [Token::Thousand] => Some(1000),
        [Token::Thousand, Token::Unit(d)] => Some(d * 1000),
        _ => None,
    }
}

fn classify(table: &MorphemeTable, word: &str) -> Token {
    if word == table.connector() {
        return Token::Connector;
    }
    if word == table.tens_former() {
        return Token::TensFormer;
    }
    for (value, morpheme) in table.iter() {
        if morpheme.text() == word {
            return match value {
                1..=9 => Token::Unit(value),
                10 => Token::Ten,
                20 => Token::Twenty,
                100 => Token::Hundred,
                1000 => Token::Thousand,
                _ => Token::Unknown,
            };
        }
    }
    Token::Unknown
}
