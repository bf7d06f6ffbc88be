mod error;
#[macro_use]
pub mod prover;
pub mod ast;

extern crate pretty_env_logger;
#[macro_use] extern crate log;

pub use crate::ast::{parse, Formula, Op};
pub use crate::error::{BoxedErrorTrait, KbContradictionError};
pub use crate::prover::{
    negate_hash, prove, resolve_entailment, resolve_entailment_bounded,
    BooleanLiteral, Clause, KnowledgeBase,
    DEFAULT_MAX_ITERATIONS, EMPTY_CLAUSE, TAUTOLOGY,
};
