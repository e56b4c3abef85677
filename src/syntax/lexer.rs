use std::{
    iter::{FusedIterator, Peekable},
    str::CharIndices,
};

use super::token::{Punctuator, Token};

/// Names are made of ASCII letters only.
pub fn is_letter(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z')
}

pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((off, c)) = self.chars.next() {
            if let Some(p) = Punctuator::from_char(c) {
                return Some(Token::Punctuator(p));
            }
            if is_letter(c) {
                return Some(self.read_name(off));
            }

            log::trace!("skipping {c:?} at byte {off}");
        }
        None
    }
}

impl FusedIterator for Lexer<'_> {}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..]
    }

    fn read_name(&mut self, from_off: usize) -> Token<'src> {
        Token::Name(self.slice_until(from_off, |c| !is_letter(c)))
    }
}

#[cfg(test)]
mod test {
    use super::{
        super::token::{Punctuator, Token},
        is_letter, Lexer,
    };

    fn tokenize_str(s: &str) -> Vec<Token> {
        Lexer::new(s).collect()
    }

    #[test]
    fn sample_input() {
        let mut lexer = Lexer::new("b + a");

        assert_eq!(lexer.next(), Some(Token::Name("b")));
        assert_eq!(lexer.next(), Some(Token::Punctuator(Punctuator::Plus)));
        assert_eq!(lexer.next(), Some(Token::Name("a")));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn empty_input() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);

        assert!(tokenize_str(" \t\n 42 %").is_empty());
    }

    #[test]
    fn digits_split_names() {
        let tokens = tokenize_str("x1 + 2y");
        let expected = &[
            Token::Name("x"),
            Token::Punctuator(Punctuator::Plus),
            Token::Name("y"),
        ];

        assert_eq!(tokens, expected);
        assert_eq!(
            tokenize_str("ab12cd_ef"),
            vec![Token::Name("ab"), Token::Name("cd"), Token::Name("ef")]
        );
    }

    #[test]
    fn names_are_greedy() {
        assert_eq!(
            tokenize_str("(fooBar)"),
            vec![
                Token::Punctuator(Punctuator::LParen),
                Token::Name("fooBar"),
                Token::Punctuator(Punctuator::RParen),
            ]
        );
        assert_eq!(tokenize_str("Zz"), vec![Token::Name("Zz")]);
    }

    #[test]
    fn punctuators_never_merge() {
        use Punctuator::*;

        let tokens = tokenize_str("(),=+-*/^~!?:");
        let expected: Vec<Token> = [
            LParen, RParen, Comma, Assign, Plus, Minus, Asterisk, Slash, Caret, Tilde, Bang,
            Question, Colon,
        ]
        .into_iter()
        .map(Token::Punctuator)
        .collect();
        assert_eq!(tokens, expected);

        assert_eq!(
            tokenize_str("a==b"),
            vec![
                Token::Name("a"),
                Token::Punctuator(Assign),
                Token::Punctuator(Assign),
                Token::Name("b"),
            ]
        );
    }

    #[test]
    fn unicode_is_skipped_on_char_boundaries() {
        assert_eq!(
            tokenize_str("é+ñame→b"),
            vec![
                Token::Punctuator(Punctuator::Plus),
                Token::Name("ame"),
                Token::Name("b"),
            ]
        );
        assert!(!is_letter('é'));
        assert!(!is_letter('_'));
        assert!(!is_letter('7'));
        assert!(is_letter('q'));
        assert!(is_letter('Q'));
    }

    #[test]
    fn long_runs_of_ignored_characters() {
        let src = format!("{}a", " ".repeat(1_000_000));
        assert_eq!(tokenize_str(&src), vec![Token::Name("a")]);
    }

    #[test]
    fn rescans_are_identical() {
        let src = "f(x, y) = x ? ~y : z! ^ 3";
        assert_eq!(tokenize_str(src), tokenize_str(src));
    }
}
