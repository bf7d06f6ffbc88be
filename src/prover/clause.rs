use std::collections::BTreeMap;
use itertools::Itertools;
use std::fmt::Formatter;
use std::fmt;

/// Canonical hash of the clause with zero literals, i.e. falso
pub const EMPTY_CLAUSE: &str = "empty";
/// Canonical hash of the tautology sentinel.
/// Neither reserved token can collide with a join of literal hashes,
/// as long as no literal is actually named `empty` or `taut`
pub const TAUTOLOGY: &str = "taut";

/// The negation marker prefixing the canonical hash of a negated literal
pub const NEGATION_MARKER: char = '~';

/// Toggle the negation marker on a literal hash
pub fn negate_hash(literal_hash: &str) -> String {
    match literal_hash.strip_prefix(NEGATION_MARKER) {
        Some(name) => name.to_string(),
        None => format!("{}{}", NEGATION_MARKER, literal_hash),
    }
}

/// A recursive macro that constructs a clause from signed literal names
#[macro_export]
macro_rules! clause {
    // the base case: the empty clause
    () => {
        $crate::prover::Clause::empty()
    };
    ($name:ident) => {
        $crate::prover::Clause::empty().with($crate::prover::BooleanLiteral::positive(stringify!($name)))
    };
    ( ~ $name:ident) => {
        $crate::prover::Clause::empty().with($crate::prover::BooleanLiteral::negative(stringify!($name)))
    };
    // the recursive, positive case
    ( $name:ident, $($tail:tt)*) => {
        clause!( $($tail)* ).with($crate::prover::BooleanLiteral::positive(stringify!($name)))
    };
    // the recursive, negative case
    ( ~ $name:ident, $($tail:tt)*) => {
        clause!( $($tail)* ).with($crate::prover::BooleanLiteral::negative(stringify!($name)))
    };
}

/// A propositional variable or its negation
#[derive(Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    name: String,
    negated: bool,
}

impl BooleanLiteral {
    pub fn new<S: Into<String>>(name: S, negated: bool) -> BooleanLiteral {
        BooleanLiteral { name: name.into(), negated }
    }
    pub fn positive<S: Into<String>>(name: S) -> BooleanLiteral {
        BooleanLiteral::new(name, false)
    }
    pub fn negative<S: Into<String>>(name: S) -> BooleanLiteral {
        BooleanLiteral::new(name, true)
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn is_negated(&self) -> bool {
        self.negated
    }
    /// The canonical form: the name, prefixed with the negation marker iff negated
    pub fn hash(&self) -> String {
        if self.negated {
            format!("{}{}", NEGATION_MARKER, self.name)
        } else {
            self.name.clone()
        }
    }
    /// The canonical form of this literal's complement
    pub fn negated_hash(&self) -> String {
        if self.negated {
            self.name.clone()
        } else {
            format!("{}{}", NEGATION_MARKER, self.name)
        }
    }
}

impl fmt::Debug for BooleanLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hash())
    }
}

/// A disjunction of literals: any number of them, at least one of which is true.
/// A clause that would contain both a variable and its negation collapses to
/// `Tautology` at construction time, so a `Disjunction` never holds a
/// complementary pair. The empty disjunction, of course, represents paradox
#[derive(Clone, PartialEq, Eq)]
pub enum Clause {
    /// true no matter what, carries no information
    Tautology,
    /// literals keyed by their canonical hash
    Disjunction(BTreeMap<String, BooleanLiteral>),
}

impl Clause {
    /// Creates the empty clause
    pub fn empty() -> Clause {
        Clause::Disjunction(BTreeMap::new())
    }
    /// Builds a clause from literals, deduplicating by canonical hash
    pub fn new(literals: Vec<BooleanLiteral>) -> Clause {
        let mut clause = Clause::empty();
        for literal in literals {
            clause = clause.with(literal);
        }
        clause
    }
    /// Adds one literal, returning `self`.
    /// Inserting the complement of a literal already present collapses the
    /// whole clause to `Tautology`
    pub fn with(self, literal: BooleanLiteral) -> Clause {
        match self {
            Clause::Tautology => Clause::Tautology,
            Clause::Disjunction(mut literals) => {
                if literals.contains_key(&literal.negated_hash()) {
                    return Clause::Tautology;
                }
                literals.insert(literal.hash(), literal);
                Clause::Disjunction(literals)
            }
        }
    }
    pub fn is_tautology(&self) -> bool {
        matches!(self, Clause::Tautology)
    }
    /// Returns true if this is the empty clause, i.e falso
    pub fn is_empty(&self) -> bool {
        match self {
            Clause::Tautology => false,
            Clause::Disjunction(literals) => literals.is_empty(),
        }
    }
    pub fn len(&self) -> usize {
        match self {
            Clause::Tautology => 0,
            Clause::Disjunction(literals) => literals.len(),
        }
    }
    pub fn contains(&self, literal_hash: &str) -> bool {
        match self {
            Clause::Tautology => false,
            Clause::Disjunction(literals) => literals.contains_key(literal_hash),
        }
    }
    /// The canonical, order-independent form: literal hashes sorted
    /// lexicographically and joined with `|`, or one of the reserved tokens
    pub fn hash(&self) -> String {
        match self {
            Clause::Tautology => TAUTOLOGY.to_string(),
            Clause::Disjunction(literals) if literals.is_empty() => EMPTY_CLAUSE.to_string(),
            // BTreeMap keys come out already sorted
            Clause::Disjunction(literals) => literals.keys().join("|"),
        }
    }
    pub fn literals(&self) -> impl Iterator<Item = &BooleanLiteral> {
        let literals = match self {
            Clause::Tautology => None,
            Clause::Disjunction(literals) => Some(literals),
        };
        literals.into_iter().flat_map(|map| map.values())
    }
    pub fn literal_hashes(&self) -> impl Iterator<Item = &str> {
        let literals = match self {
            Clause::Tautology => None,
            Clause::Disjunction(literals) => Some(literals),
        };
        literals.into_iter().flat_map(|map| map.keys()).map(String::as_str)
    }
    /// A copy of this clause minus one literal.
    /// Removing a literal can not introduce a complementary pair
    pub fn without(&self, literal_hash: &str) -> Clause {
        match self {
            Clause::Tautology => Clause::Tautology,
            Clause::Disjunction(literals) => {
                let mut literals = literals.clone();
                literals.remove(literal_hash);
                Clause::Disjunction(literals)
            }
        }
    }
    /// The deduplicated union of two disjunctions, which collapses to
    /// `Tautology` when the sides hold complementary literals
    pub fn union(&self, other: &Clause) -> Clause {
        match (self, other) {
            (Clause::Tautology, _) | (_, Clause::Tautology) => Clause::Tautology,
            _ => Clause::new(self.literals().chain(other.literals()).cloned().collect()),
        }
    }
    /// A subset disjunction logically dominates its supersets
    pub fn is_subset_of(&self, other: &Clause) -> bool {
        match (self, other) {
            (Clause::Disjunction(ours), Clause::Disjunction(theirs)) => {
                ours.keys().all(|hash| theirs.contains_key(hash))
            }
            _ => false,
        }
    }
    /// Apply the resolution rule on one literal: `self` contains `literal_hash`,
    /// `other` contains its complement, and the resolvent is the union of
    /// what remains of each side.
    /// For example, suppose we have
    ///     `{p, q}` (p is true OR q is true)
    ///    `{~q, r}` (q is false OR r is true)
    /// Then, it must be the case that p is true, OR r is true,
    ///       and we don't know anything about q. This gives us:
    ///     `{p, r}` (p is true OR r is true)
    ///
    /// Returns `None` if the remainders still hold a complementary pair:
    /// the resolvent would be a tautology and tells us nothing
    pub fn resolve_on(&self, other: &Clause, literal_hash: &str) -> Option<Clause> {
        let remainder = self.without(literal_hash);
        let other_remainder = other.without(negate_hash(literal_hash).as_str());
        match remainder.union(&other_remainder) {
            Clause::Tautology => None,
            resolvent => Some(resolvent),
        }
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Tautology => write!(f, "{{taut}}"),
            Clause::Disjunction(literals) => {
                write!(f, "{{")?;
                let mut first = true;
                for hash in literals.keys() {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{}", hash)?;
                }
                write!(f, "}}")
            }
        }
    }
}
