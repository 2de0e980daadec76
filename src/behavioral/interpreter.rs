// Interpreter
//
// Turns a sentence of some language into an abstract syntax tree of terminal
// and non-terminal expressions, each of which knows how to interpret itself.
// The grammar here is integer addition and subtraction, folded left to right.

use crate::error::{PatternError, Result};
use crate::example::{Category, PatternExample, RunContext, Transcript};
use std::fmt;

// ============================================================================
// Example: Interpreter Pattern - Expression Tree
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Terminal expression.
    Number(i64),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Add(Box::new(left), Box::new(right))
    }

    pub fn subtract(left: Expression, right: Expression) -> Self {
        Expression::Subtract(Box::new(left), Box::new(right))
    }

    /// Fails instead of wrapping when an intermediate result leaves `i64`.
    pub fn interpret(&self) -> Result<i64> {
        let value = match self {
            Expression::Number(value) => Some(*value),
            Expression::Add(left, right) => left.interpret()?.checked_add(right.interpret()?),
            Expression::Subtract(left, right) => left.interpret()?.checked_sub(right.interpret()?),
        };
        value.ok_or_else(|| PatternError::expression("integer overflow"))
    }

    pub fn parse(sentence: &str) -> Result<Self> {
        let tokens: Vec<&str> = sentence.split_whitespace().collect();
        Self::fold_tokens(&tokens)
    }

    /// Builds `((a op b) op c) ...` from alternating number and operator tokens.
    pub fn fold_tokens(tokens: &[&str]) -> Result<Self> {
        let (first, rest) = tokens
            .split_first()
            .ok_or_else(|| PatternError::expression("no tokens to interpret"))?;

        let mut tree = number(first)?;
        let mut rest = rest.iter();
        while let Some(op) = rest.next() {
            let operand = rest.next().ok_or_else(|| {
                PatternError::expression(format!("operator '{op}' has no right operand"))
            })?;
            let right = number(operand)?;
            tree = match *op {
                "+" => Expression::add(tree, right),
                "-" => Expression::subtract(tree, right),
                other => {
                    return Err(PatternError::expression(format!(
                        "unknown operator '{other}'"
                    )))
                }
            };
        }
        Ok(tree)
    }
}

fn number(token: &str) -> Result<Expression> {
    token
        .parse()
        .map(Expression::Number)
        .map_err(|_| PatternError::expression(format!("'{token}' is not an integer")))
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(value) => write!(f, "{value}"),
            Expression::Add(left, right) => write!(f, "({left} Add {right})"),
            Expression::Subtract(left, right) => write!(f, "({left} Subtract {right})"),
        }
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct InterpreterExample;

impl PatternExample for InterpreterExample {
    fn name(&self) -> &'static str {
        "interpreter"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "evaluate a sentence by interpreting its syntax tree"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let sentence = "5 + 4 - 3 + 7 - 2";
        let root = Expression::parse(sentence)?;

        let mut transcript = Transcript::new();
        transcript.push(sentence);
        transcript.push(root.interpret()?.to_string());
        transcript.push(root.to_string());
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
