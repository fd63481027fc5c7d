use std::{fmt, str::FromStr};

use serde::Serialize;

/// One way of writing an operator in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spelling {
    /// Word form, matched with a word boundary (`and`, `is implied by`)
    Text(&'static str),
    /// Symbol form, matched without a boundary (`/\`, `<=>`)
    Symbol(&'static str),
}

impl Spelling {
    pub fn as_str(self) -> &'static str {
        match self {
            Spelling::Text(s) | Spelling::Symbol(s) => s,
        }
    }

    /// Whether the spelling is made of more than one word.
    pub fn is_multi_word(self) -> bool {
        matches!(self, Spelling::Text(s) if s.contains(' '))
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    /// Negation (`not`, `~`)
    Not,
    /// Forces the operand to false (`nullify`)
    Nullify,
    /// Forces the operand to true (`truify`)
    Truify,
    /// Identity (`id`)
    Id,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 4] = [UnaryOp::Not, UnaryOp::Nullify, UnaryOp::Truify, UnaryOp::Id];

    pub fn spellings(self) -> &'static [Spelling] {
        match self {
            UnaryOp::Not => &[Spelling::Text("not"), Spelling::Symbol("~")],
            UnaryOp::Nullify => &[Spelling::Text("nullify")],
            UnaryOp::Truify => &[Spelling::Text("truify")],
            UnaryOp::Id => &[Spelling::Text("id")],
        }
    }

    /// Canonical (first textual) spelling.
    pub fn as_str(self) -> &'static str {
        self.spellings()[0].as_str()
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary connectives.
///
/// All connectives share one precedence level and chain to the right:
/// `a OP1 b OP2 c` groups as `a OP1 (b OP2 c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinOp {
    /// Conjunction (`and`, `/\`)
    And,
    /// Negated conjunction (`nand`, `~/\`)
    Nand,
    /// Disjunction (`or`, `\/`)
    Or,
    /// Negated disjunction (`nor`, `~\/`)
    Nor,
    /// Equivalence (`xnor`, `iff`, `<=>`)
    Xnor,
    /// Exclusive or (`xor`, `<~>`)
    Xor,
    /// Material implication (`implies`, `=>`)
    Implies,
    /// Converse implication (`is implied by`, `<=`)
    ImpliedBy,
    /// `inhibits`, `/=>`
    Inhibits,
    /// `is inhibited by`, `<=/`
    InhibitedBy,
    /// Left projection (`left`, `<s`)
    Left,
    /// Right projection (`right`, `s>`)
    Right,
    /// Negated left projection (`not left`, `</`)
    NotLeft,
    /// Negated right projection (`not right`, `/>`)
    NotRight,
}

impl BinOp {
    pub const ALL: [BinOp; 14] = [
        BinOp::And,
        BinOp::Nand,
        BinOp::Or,
        BinOp::Nor,
        BinOp::Xnor,
        BinOp::Xor,
        BinOp::Implies,
        BinOp::ImpliedBy,
        BinOp::Inhibits,
        BinOp::InhibitedBy,
        BinOp::Left,
        BinOp::Right,
        BinOp::NotLeft,
        BinOp::NotRight,
    ];

    pub fn spellings(self) -> &'static [Spelling] {
        use Spelling::{Symbol, Text};

        match self {
            BinOp::And => &[Text("and"), Symbol("/\\")],
            BinOp::Nand => &[Text("nand"), Symbol("~/\\")],
            BinOp::Or => &[Text("or"), Symbol("\\/")],
            BinOp::Nor => &[Text("nor"), Symbol("~\\/")],
            BinOp::Xnor => &[Text("xnor"), Text("iff"), Symbol("<=>")],
            BinOp::Xor => &[Text("xor"), Symbol("<~>")],
            BinOp::Implies => &[Text("implies"), Symbol("=>")],
            BinOp::ImpliedBy => &[Text("is implied by"), Symbol("<=")],
            BinOp::Inhibits => &[Text("inhibits"), Symbol("/=>")],
            BinOp::InhibitedBy => &[Text("is inhibited by"), Symbol("<=/")],
            BinOp::Left => &[Text("left"), Symbol("<s")],
            BinOp::Right => &[Text("right"), Symbol("s>")],
            BinOp::NotLeft => &[Text("not left"), Symbol("</")],
            BinOp::NotRight => &[Text("not right"), Symbol("/>")],
        }
    }

    /// Canonical (first textual) spelling.
    pub fn as_str(self) -> &'static str {
        self.spellings()[0].as_str()
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a spelling of any operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator '{0}'")]
pub struct UnknownOperator(pub String);

/// Collapses runs of blanks so `is  implied\tby` matches `is implied by`.
fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl FromStr for UnaryOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        UnaryOp::ALL
            .into_iter()
            .find(|op| op.spellings().iter().any(|sp| sp.as_str() == wanted))
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

impl FromStr for BinOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        BinOp::ALL
            .into_iter()
            .find(|op| op.spellings().iter().any(|sp| sp.as_str() == wanted))
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

#[test]
fn test_every_spelling_round_trips() {
    for op in BinOp::ALL {
        for spelling in op.spellings() {
            assert_eq!(spelling.as_str().parse::<BinOp>(), Ok(op));
        }
    }
    for op in UnaryOp::ALL {
        for spelling in op.spellings() {
            assert_eq!(spelling.as_str().parse::<UnaryOp>(), Ok(op));
        }
    }
}

#[test]
fn test_multi_word_spellings() {
    assert_eq!("is   implied\tby".parse::<BinOp>(), Ok(BinOp::ImpliedBy));
    assert!(Spelling::Text("not left").is_multi_word());
    assert!(!Spelling::Symbol("</").is_multi_word());
    assert!("nandy".parse::<BinOp>().is_err());
}
