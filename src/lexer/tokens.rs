use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Exact-text table for every fixed-text token: reserved words, word
    /// operators, symbolic operators and punctuation. `nil` is recognised
    /// by its own pattern and is not listed here.
    pub static ref TOKEN_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        // Directives
        map.insert("program", TokenKind::Program);
        map.insert("var", TokenKind::Var);
        map.insert("procedure", TokenKind::Procedure);
        map.insert("function", TokenKind::Function);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("type", TokenKind::Type);
        map.insert("of", TokenKind::Of);
        map.insert("const", TokenKind::Const);
        map.insert("with", TokenKind::With);
        // Statements
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("repeat", TokenKind::Repeat);
        map.insert("for", TokenKind::For);
        map.insert("do", TokenKind::Do);
        map.insert("until", TokenKind::Until);
        map.insert("to", TokenKind::To);
        map.insert("downto", TokenKind::Downto);
        map.insert("case", TokenKind::Case);
        // Types
        map.insert("array", TokenKind::Array);
        map.insert("set", TokenKind::Set);
        map.insert("record", TokenKind::Record);
        map.insert("file", TokenKind::File);
        map.insert("integer", TokenKind::Integer);
        map.insert("real", TokenKind::Real);
        map.insert("character", TokenKind::Character);
        map.insert("boolean", TokenKind::Boolean);
        map.insert("string", TokenKind::String);
        // Built-in I/O
        map.insert("read", TokenKind::Read);
        map.insert("readln", TokenKind::Readln);
        map.insert("write", TokenKind::Write);
        map.insert("writeln", TokenKind::Writeln);
        // Operators
        map.insert(":=", TokenKind::Assign);
        map.insert("+", TokenKind::AddOp);
        map.insert("-", TokenKind::AddOp);
        map.insert("*", TokenKind::MulOp);
        map.insert("/", TokenKind::MulOp);
        map.insert("div", TokenKind::MulOp);
        map.insert("mod", TokenKind::MulOp);
        map.insert("=", TokenKind::RelOp);
        map.insert("<>", TokenKind::RelOp);
        map.insert("<=", TokenKind::RelOp);
        map.insert(">=", TokenKind::RelOp);
        map.insert(">", TokenKind::RelOp);
        map.insert("<", TokenKind::RelOp);
        map.insert("and", TokenKind::LogicOp);
        map.insert("or", TokenKind::LogicOp);
        map.insert("not", TokenKind::LogicOp);
        map.insert("..", TokenKind::Range);
        // Punctuation
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("[", TokenKind::OpenBracket);
        map.insert("]", TokenKind::CloseBracket);
        map.insert(",", TokenKind::Comma);
        map.insert(";", TokenKind::Semicolon);
        map.insert(".", TokenKind::Period);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    IntLiteral,
    RealLiteral,
    StringLiteral,
    Nil,

    // Directives
    Program,
    Var,
    Procedure,
    Function,
    Begin,
    End,
    Type,
    Of,
    Const,
    With,

    // Statements
    If,
    Then,
    Else,
    While,
    Repeat,
    For,
    Do,
    Until,
    To,
    Downto,
    Case,

    // Types
    Array,
    Set,
    Record,
    File,
    Integer,
    Real,
    Character,
    Boolean,
    String,

    // Built-in I/O
    Read,
    Readln,
    Write,
    Writeln,

    Assign,  // :=
    AddOp,   // + -
    MulOp,   // * / div mod
    RelOp,   // = <> <= >= > <
    LogicOp, // and or not
    Range,   // ..

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Comma,
    Semicolon,
    Period,
}

/// Coarse grouping of token kinds, as a parser sees them.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenFamily {
    Identifier,
    Literal,
    Directive,
    Statement,
    Type,
    Builtin,
    Operator,
    Punctuation,
}

impl TokenKind {
    pub fn family(&self) -> TokenFamily {
        use TokenKind::*;

        match self {
            Identifier => TokenFamily::Identifier,
            IntLiteral | RealLiteral | StringLiteral | Nil => TokenFamily::Literal,
            Program | Var | Procedure | Function | Begin | End | Type | Of | Const | With => {
                TokenFamily::Directive
            }
            If | Then | Else | While | Repeat | For | Do | Until | To | Downto | Case => {
                TokenFamily::Statement
            }
            Array | Set | Record | File | Integer | Real | Character | Boolean | String => {
                TokenFamily::Type
            }
            Read | Readln | Write | Writeln => TokenFamily::Builtin,
            Assign | AddOp | MulOp | RelOp | LogicOp | Range => TokenFamily::Operator,
            OpenParen | CloseParen | OpenBracket | CloseBracket | Comma | Semicolon | Period => {
                TokenFamily::Punctuation
            }
        }
    }

    /// Symbolic code used by the reference token dumps (`DIR_BEGIN`, `OP_SUM`, ...).
    pub fn code(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Identifier => "ID",
            IntLiteral => "LIT_INT",
            RealLiteral => "LIT_REAL",
            StringLiteral => "LIT_STRING",
            Nil => "OP_NIL",
            Program => "DIR_PROGRAM",
            Var => "DIR_VAR",
            Procedure => "DIR_PROC",
            Function => "DIR_FUNC",
            Begin => "DIR_BEGIN",
            End => "DIR_END",
            Type => "DIR_TYPE",
            Of => "DIR_OF",
            Const => "DIR_CONST",
            With => "DIR_WITH",
            If => "STMT_IF",
            Then => "STMT_THEN",
            Else => "STMT_ELSE",
            While => "STMT_WHILE",
            Repeat => "STMT_REPEAT",
            For => "STMT_FOR",
            Do => "STMT_DO",
            Until => "STMT_UNTIL",
            To => "STMT_TO",
            Downto => "STMT_DOWNTO",
            Case => "STMT_CASE",
            Array => "TYPE_ARRAY",
            Set => "TYPE_SET",
            Record => "TYPE_RECORD",
            File => "TYPE_FILE",
            Integer => "TYPE_INT",
            Real => "TYPE_REAL",
            Character => "TYPE_CHAR",
            Boolean => "TYPE_BOOL",
            String => "TYPE_STRING",
            Read => "FN_READ",
            Readln => "FN_READLN",
            Write => "FN_WRITE",
            Writeln => "FN_WRITELN",
            Assign => "OP_ATRIB",
            AddOp => "OP_SUM",
            MulOp => "OP_MUL",
            RelOp => "OP_REL",
            LogicOp => "OP_LOGIC",
            Range => "OP_RANGE",
            OpenParen => "OP_OPAR",
            CloseParen => "OP_CPAR",
            OpenBracket => "OP_OBRA",
            CloseBracket => "OP_CBRA",
            Comma => "OP_COMMA",
            Semicolon => "OP_EOC",
            Period => "OP_PERIOD",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    pub line: u32,
    pub value: Option<String>,
}
