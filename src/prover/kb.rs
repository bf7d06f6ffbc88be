use indexmap::map::IndexMap;
use std::fmt::Formatter;
use std::fmt;

use crate::prover::Clause;

/// An append-only, deduplicating store of clauses keyed by canonical hash.
/// There is no retraction: a logical agent only accumulates facts
pub struct KnowledgeBase {
    clauses: IndexMap<String, Clause>,
}

impl KnowledgeBase {
    pub fn new() -> KnowledgeBase {
        KnowledgeBase { clauses: IndexMap::new() }
    }
    /// Insert a clause under its canonical hash.
    /// Tautologies carry no information and are silently dropped;
    /// re-inserting an identical clause is a no-op
    pub fn add_clause(&mut self, clause: Clause) {
        if clause.is_tautology() {
            return;
        }
        self.clauses.insert(clause.hash(), clause);
    }
    pub fn has(&self, clause_hash: &str) -> bool {
        self.clauses.contains_key(clause_hash)
    }
    pub fn len(&self) -> usize {
        self.clauses.len()
    }
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Clause> {
        self.clauses.iter()
    }
}

impl Default for KnowledgeBase {
    fn default() -> KnowledgeBase {
        KnowledgeBase::new()
    }
}

impl fmt::Debug for KnowledgeBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.clauses.values()).finish()
    }
}
