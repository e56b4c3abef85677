mod expr;
mod lexer;
mod token;

pub use expr::Expression;
pub use lexer::{is_letter, Lexer};
pub use token::{Assoc, Precedence, Punctuator, Token};
