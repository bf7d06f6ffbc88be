use std::fmt;
use std::fmt::Formatter;

/// The knowledge base handed to the resolution engine already contains the empty clause,
/// i.e. the caller asserted a contradiction before ever asking a query
#[derive(Debug)]
pub struct KbContradictionError;

impl fmt::Display for KbContradictionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "knowledge base already contains the empty clause")
    }
}
impl std::error::Error for KbContradictionError {

}

pub type BoxedErrorTrait = Box<(dyn std::error::Error + 'static)>;
