//! Documentation content for the lx CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Unary,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "statements" => Some(Self::Syntax),
            "operators" | "ops" | "binary" | "connectives" => Some(Self::Operators),
            "unary" | "prefix" => Some(Self::Unary),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"LX DOCUMENTATION

lx is a small language of boolean expressions. A program is a list of
statements separated by ';;' or newlines; each statement evaluates to
true or false.

DOCUMENTATION CATEGORIES

  syntax            Literals, grouping, statements and terminators
  operators         The fourteen binary connectives and their spellings
  unary             Prefix operators and the order they apply in
  errors            What parse and evaluation errors look like

QUICK REFERENCE

  true / false      Literals (lowercase only)
  not / ~           Negation
  and / /\          Conjunction
  or / \/           Disjunction
  implies / =>      Implication
  ( ... )           Grouping
  ;;                Statement separator (a newline works too)

Run 'lx doc <category>' for detailed documentation.
Run 'lx onboard' for a short tutorial.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_str(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Unary) => Ok(UNARY_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Literals, Grouping, Statements

LITERALS
  true
  false
    Only the lowercase spellings are literals. 'True' is an unknown word.

GROUPING
  ( expr )
    Parentheses can be nested up to the nesting limit (see NESTING LIMIT).

    Example:
      Query:  ((true))
      Output: true

CHAINS
  a OP b OP c
    All connectives share one precedence level and group to the right:

      a OP1 b OP2 c   is   a OP1 (b OP2 c)

    Use parentheses to group to the left.

    Example:
      Query:  false implies false implies false
      Output: true              (false implies (false implies false))

      Query:  (false implies false) implies false
      Output: false

NESTING LIMIT
    Every group and every chain link is one level of nesting. A chain of
    N operands uses N levels, so with the default limit of 128 a single
    chain holds at most 128 operands. Longer chains, or deeper groups, fail:

      Query:  true and true and ... and true     (129 operands)
      Error:  1:...: expression nested deeper than 128 levels

    'lx check --max-depth N' raises or lowers the limit (1 to 512).

STATEMENTS
  expr ;; expr
  expr <newline> expr
    A file is one or more statements. Runs of separators count as one, so
    blank lines are fine between statements. Only the last statement may
    omit its separator. Empty input is an error.

    Example:
      Query:  false;;true
      Output: false
              true

WORDS AND SYMBOLS
  Word operators ('and', 'nullify', 'is implied by') need a word boundary
  on both sides: 'nullifyx' is an unknown word, not 'nullify' + 'x'.
  Symbols ('/\', '~', '<=>') need no spacing at all: '~(true/\false)'.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Binary Connectives

  Word form           Symbol   Result
  ---------           ------   ------
  and                 /\       left and right
  nand                ~/\      not (left and right)
  or                  \/       left or right
  nor                 ~\/      not (left or right)
  xnor, iff           <=>      left equals right
  xor                 <~>      left differs from right
  implies             =>       (not left) or right
  is implied by       <=       left or (not right)
  inhibits            /=>      (not left) or (not right)
  is inhibited by     <=/      (not left) or (not right)
  left                <s       left
  right               s>       right
  not left            </       not left
  not right           />       not right

  Both sides are always evaluated; nothing short-circuits.

  Examples:
    true /\ false              false
    false is implied by true   false
    true <~> false             true
    true not left false        false
"#;

const UNARY_DOC: &str = r#"UNARY - Prefix Operators

  not, ~      Negate
  nullify     Replace with false
  truify      Replace with true
  id          Leave unchanged

FOLD ORDER
  Prefix operators apply from the operand outwards: the operator written
  closest to the operand runs first.

  Examples:
    not nullify true      true     (nullify gives false, not flips it)
    nullify not true      false    (not gives false, nullify keeps false)
    truify not false      true
    ~~true                true
"#;

const ERRORS_DOC: &str = r#"ERRORS - Diagnostics

Every error starts with the line and column (both 1-based) of the token
that caused it.

LEXICAL ERRORS
  Text that is not part of the language:

    Query:  true & false
    Error:  1:6: invalid input text "&"

PARSE ERRORS
  A token that does not fit where it appears, and what was expected:

    Query:  t rue
    Error:  1:1: unexpected token "t" (expected primary expression)

    Query:  (true
    Error:  1:6: unexpected token "<EOF>" (expected ")")

    Query:  true false
    Error:  1:6: unexpected token "false" (expected terminator or end of input)

    Control characters in the token are escaped, so a stray newline shows
    as "\n":

    Query:  <newline>true
    Error:  1:1: unexpected token "\n" (expected primary expression)

EVALUATION ERRORS
  Only trees built by hand, outside the parser's limits, fail to evaluate:

    1:1: invalid nesting depth '129'
"#;
