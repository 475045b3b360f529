use std::fmt::{Display, Formatter, Result};

use crate::lexer::tokens::Token;

use super::expressions::Addition;

/// `NUMBER ("," NUMBER)*`
#[derive(Debug, Clone, PartialEq)]
pub struct NumberList {
    pub numbers: Vec<Token>,
}

/// `"[" number_list "]"`
#[derive(Debug, Clone, PartialEq)]
pub struct NumberSet {
    pub list: NumberList,
}

impl Display for NumberSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let values = self
            .list
            .numbers
            .iter()
            .map(|token| token.value.to_string())
            .collect::<Vec<_>>();
        write!(f, "NumberSet[{}]", values.join(", "))
    }
}

/// `"let" IDENTIFIER "=" number_set [";"]`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub identifier: Token,
    pub number_set: NumberSet,
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Declaration({}, {})", self.identifier.value, self.number_set)
    }
}

/// `IDENTIFIER "=" addition ";"`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Token,
    pub value: Addition,
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Assignment({}, {})", self.target.value, self.value)
    }
}

/// The second statement of a loop body. Same shape as an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    pub target: Token,
    pub value: Addition,
}

impl Display for Count {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Count({}, {})", self.target.value, self.value)
    }
}

/// `"for" IDENTIFIER "in" number_set ":" assignment count`
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub variable: Token,
    pub iterable: NumberSet,
    pub body: Assignment,
    pub count: Count,
}

impl Display for ForLoop {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "ForLoop({}, {}, {}, {})",
            self.variable.value, self.iterable, self.body, self.count
        )
    }
}

/// `IDENTIFIER "/" IDENTIFIER`
#[derive(Debug, Clone, PartialEq)]
pub struct Division {
    pub left: Token,
    pub operator: Token,
    pub right: Token,
}

impl Display for Division {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Division({}, {})", self.left.value, self.right.value)
    }
}

/// `"return" division`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub division: Division,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "ReturnStmt({})", self.division)
    }
}
