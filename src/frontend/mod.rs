pub mod lexer;
pub mod parser;
pub mod token;
pub mod token_stream;

pub use lexer::Lexer;
pub use parser::{ParseOutcome, Parser};
pub use token::Token;
pub use token_stream::TokenStream;
