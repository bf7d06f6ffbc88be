use std::fmt;
use std::fmt::Formatter;

/// The binary connectives
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Op {
    And,
    Or,
    Implies,
    Iff,
}

impl Op {
    pub fn token(self) -> &'static str {
        match self {
            Op::And => "and",
            Op::Or => "or",
            Op::Implies => "implies",
            Op::Iff => "iff",
        }
    }
}

/// A propositional formula over named variables.
/// Equality is structural: same shape, same operators, same names
#[derive(Clone, PartialEq, Eq)]
pub enum Formula {
    Literal(String),
    Not(Box<Formula>),
    Binary(Box<Formula>, Op, Box<Formula>),
}

impl Formula {
    pub fn literal<S: Into<String>>(name: S) -> Formula {
        Formula::Literal(name.into())
    }
    pub fn not(inner: Formula) -> Formula {
        Formula::Not(Box::new(inner))
    }
    pub fn binary(left: Formula, op: Op, right: Formula) -> Formula {
        Formula::Binary(Box::new(left), op, Box::new(right))
    }
    pub fn and(left: Formula, right: Formula) -> Formula {
        Formula::binary(left, Op::And, right)
    }
    pub fn or(left: Formula, right: Formula) -> Formula {
        Formula::binary(left, Op::Or, right)
    }
    pub fn implies(left: Formula, right: Formula) -> Formula {
        Formula::binary(left, Op::Implies, right)
    }
    pub fn iff(left: Formula, right: Formula) -> Formula {
        Formula::binary(left, Op::Iff, right)
    }
    pub fn negate(self) -> Formula {
        Formula::not(self)
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Literal(name) => write!(f, "{}", name),
            Formula::Not(inner) => write!(f, "~{:?}", inner),
            Formula::Binary(left, op, right) => {
                write!(f, "({:?} {} {:?})", left, op.token(), right)
            }
        }
    }
}
