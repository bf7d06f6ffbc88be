mod formula;
pub use formula::*;

mod cnf;

mod parse;
pub use parse::*;
