use std::fmt;

use super::token::Punctuator;

/// A parsed expression. Every variant except `Name` and `Call` renders
/// wrapped in parentheses.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression<'src> {
    Name(&'src str),
    Assign {
        name: &'src str,
        right: Box<Expression<'src>>,
    },
    Op {
        left: Box<Expression<'src>>,
        op: Punctuator,
        right: Box<Expression<'src>>,
    },
    Prefix {
        op: Punctuator,
        right: Box<Expression<'src>>,
    },
    Postfix {
        left: Box<Expression<'src>>,
        op: Punctuator,
    },
    Conditional {
        condition: Box<Expression<'src>>,
        then_arm: Box<Expression<'src>>,
        else_arm: Box<Expression<'src>>,
    },
    Call {
        function: Box<Expression<'src>>,
        args: Vec<Expression<'src>>,
    },
}

impl<'src> Expression<'src> {
    pub fn name(name: &'src str) -> Self {
        Self::Name(name)
    }

    pub fn assign(name: &'src str, right: Self) -> Self {
        Self::Assign {
            name,
            right: Box::new(right),
        }
    }

    pub fn op(left: Self, op: Punctuator, right: Self) -> Self {
        Self::Op {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn prefix(op: Punctuator, right: Self) -> Self {
        Self::Prefix {
            op,
            right: Box::new(right),
        }
    }

    pub fn postfix(left: Self, op: Punctuator) -> Self {
        Self::Postfix {
            left: Box::new(left),
            op,
        }
    }

    pub fn conditional(condition: Self, then_arm: Self, else_arm: Self) -> Self {
        Self::Conditional {
            condition: Box::new(condition),
            then_arm: Box::new(then_arm),
            else_arm: Box::new(else_arm),
        }
    }

    pub fn call(function: Self, args: Vec<Self>) -> Self {
        Self::Call {
            function: Box::new(function),
            args,
        }
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Assign { name, right } => write!(f, "({name} = {right})"),
            Self::Op { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Postfix { left, op } => write!(f, "({left}{op})"),
            Self::Conditional {
                condition,
                then_arm,
                else_arm,
            } => write!(f, "({condition} ? {then_arm} : {else_arm})"),
            Self::Call { function, args } => {
                write!(f, "{function}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
