use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\n\r\f\x0B]+")] // Runs of blanks separate words and are never emitted
pub enum Token {
    // Any maximal run of non-blank characters (ex: "cars", "a\"b", "x,y")
    #[regex(r"[^ \t\n\r\f\x0B]+", |lex| lex.slice().to_string())]
    Word(String),
}

impl Token {
    pub fn text(&self) -> &str {
        match self {
            Token::Word(text) => text,
        }
    }
}

// Shows the raw word, which is what error messages want
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
