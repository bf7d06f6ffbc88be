#[macro_use]
mod clause;

pub use clause::*;

mod kb;
pub use kb::*;

mod search;
pub use search::*;

use crate::ast;
use crate::error::BoxedErrorTrait;

/// Parse the given sentences and the goal, assert the givens into a fresh
/// knowledge base, and answer the entailment query,
/// returning `Ok(true)` on success, `Ok(false)` otherwise
pub fn prove(givens: &[&str], goal: &str) -> Result<bool, BoxedErrorTrait> {
    let mut kb = KnowledgeBase::new();
    for &source in givens.iter() {
        let formula = ast::parse(source)?;
        for clause in formula.to_cnf().into_clauses() {
            kb.add_clause(clause);
        }
    }
    let goal = ast::parse(goal)?;
    let success = resolve_entailment(&kb, goal)?;
    Ok( success )
}

#[cfg(test)]
mod tests {
    use crate::ast::Formula;
    use crate::prover::{
        negate_hash, resolve_entailment, resolve_entailment_bounded,
        BooleanLiteral, Clause, KnowledgeBase, EMPTY_CLAUSE, TAUTOLOGY,
    };

    #[test]
    fn literal_hash_0() {
        let lit = BooleanLiteral::positive("p12");
        assert_eq!(lit.hash(), "p12");
        assert_eq!(lit.negated_hash(), "~p12");
    }
    #[test]
    fn literal_hash_1() {
        let lit = BooleanLiteral::negative("p12");
        assert_eq!(lit.hash(), "~p12");
        assert_eq!(lit.negated_hash(), "p12");
    }
    #[test]
    fn negate_hash_0() {
        assert_eq!(negate_hash("b11"), "~b11");
        assert_eq!(negate_hash("~b11"), "b11");
    }

    #[test]
    fn clause_build_0() {
        let clause = Clause::new(vec![
            BooleanLiteral::positive("p"),
            BooleanLiteral::negative("q"),
            BooleanLiteral::positive("r"),
        ]);
        assert_eq!(clause, clause!(p, ~q, r));
    }
    #[test]
    fn clause_build_tautology_0() {
        // {a, ~a, b} is always true, so it collapses to the sentinel
        let clause = Clause::new(vec![
            BooleanLiteral::positive("a"),
            BooleanLiteral::negative("a"),
            BooleanLiteral::positive("b"),
        ]);
        assert_eq!(clause, Clause::Tautology);
    }
    #[test]
    fn clause_build_redundant_0() {
        let clause = Clause::new(vec![
            BooleanLiteral::positive("q"),
            BooleanLiteral::positive("q"),
            BooleanLiteral::negative("p"),
        ]);
        assert_eq!(clause, clause!(~p, q));
        assert_eq!(clause.len(), 2);
    }

    #[test]
    fn clause_hash_0() {
        assert_eq!(clause!(b, c).hash(), "b|c");
    }
    #[test]
    fn clause_hash_1() {
        assert_eq!(clause!().hash(), EMPTY_CLAUSE);
        assert_eq!(Clause::Tautology.hash(), TAUTOLOGY);
    }
    #[test]
    fn clause_hash_order_invariance_0() {
        // any insertion order produces the same canonical hash
        let a = Clause::new(vec![
            BooleanLiteral::positive("b11"),
            BooleanLiteral::negative("p12"),
            BooleanLiteral::positive("p21"),
        ]);
        let b = Clause::new(vec![
            BooleanLiteral::positive("p21"),
            BooleanLiteral::positive("b11"),
            BooleanLiteral::negative("p12"),
        ]);
        assert_eq!(a.hash(), b.hash());
        assert_eq!(a, b);
    }

    #[test]
    fn clause_subset_0() {
        assert!(clause!(a).is_subset_of(&clause!(a, b)));
        assert!(!clause!(a, b).is_subset_of(&clause!(a)));
        assert!(clause!().is_subset_of(&clause!(a)));
        assert!(clause!(a, b).is_subset_of(&clause!(a, b)));
    }
    #[test]
    fn clause_union_0() {
        assert_eq!(clause!(a, b).union(&clause!(b, c)), clause!(a, b, c));
        assert_eq!(clause!(a).union(&clause!(~a)), Clause::Tautology);
    }

    #[test]
    fn resolution_simple_0() {
        let a = clause!(a, b, c);
        let b = clause!(~a);
        let resolvent = a.resolve_on(&b, "a").expect("not a tautology");
        assert_eq!(resolvent.hash(), "b|c");
    }
    #[test]
    fn resolution_simple_1() {
        let a = clause!(a);
        let b = clause!(~a);
        let resolvent = a.resolve_on(&b, "a").expect("not a tautology");
        assert_eq!(resolvent.hash(), EMPTY_CLAUSE);
        assert!(resolvent.is_empty());
    }
    #[test]
    fn resolution_tautology_0() {
        // the remainders still hold b and ~b, so resolving tells us nothing
        let a = clause!(a, ~b, c);
        let b = clause!(~a, b);
        assert_eq!(a.resolve_on(&b, "a"), None);
    }
    #[test]
    fn resolution_shared_literal_0() {
        // the shared b must not be double-counted
        let a = clause!(a, b);
        let b = clause!(~a, b);
        let resolvent = a.resolve_on(&b, "a").expect("not a tautology");
        assert_eq!(resolvent, clause!(b));
        assert_eq!(resolvent.len(), 1);
    }

    #[test]
    fn kb_idempotent_insert_0() {
        let mut kb = KnowledgeBase::new();
        kb.add_clause(clause!(p, ~q));
        kb.add_clause(clause!(p, ~q));
        assert_eq!(kb.len(), 1);
    }
    #[test]
    fn kb_drops_tautology_0() {
        let mut kb = KnowledgeBase::new();
        kb.add_clause(Clause::Tautology);
        assert_eq!(kb.len(), 0);
    }
    #[test]
    fn kb_has_0() {
        let mut kb = KnowledgeBase::new();
        kb.add_clause(clause!(b, ~a, c));
        assert!(kb.has("b|c|~a"));
        assert!(!kb.has("b|c"));
    }

    /// the textbook breeze/pit scenario:
    /// a breeze in [1,1] iff a pit is adjacent, and there is no breeze
    fn breeze_kb() -> KnowledgeBase {
        let mut kb = KnowledgeBase::new();
        let rule = Formula::iff(
            Formula::literal("b11"),
            Formula::or(
                Formula::literal("p12"),
                Formula::literal("p21"),
            ),
        );
        for clause in rule.to_cnf().into_clauses() {
            kb.add_clause(clause);
        }
        for clause in Formula::not(Formula::literal("b11")).to_cnf().into_clauses() {
            kb.add_clause(clause);
        }
        kb
    }

    #[test]
    fn entailment_textbook_0() {
        // no breeze in [1,1] proves there is no pit in [1,2]
        let kb = breeze_kb();
        let alpha = Formula::not(Formula::literal("p12"));
        let success = resolve_entailment(&kb, alpha).expect("kb is consistent");
        assert_eq!(success, true);
    }
    #[test]
    fn entailment_textbook_1() {
        // the positive query is not provable
        let kb = breeze_kb();
        let alpha = Formula::literal("p12");
        let success = resolve_entailment(&kb, alpha).expect("kb is consistent");
        assert_eq!(success, false);
    }
    #[test]
    fn entailment_unrelated_0() {
        // knowledge about other cells says nothing about p12
        let mut kb = KnowledgeBase::new();
        let rule = Formula::iff(
            Formula::literal("b21"),
            Formula::or(
                Formula::literal("p22"),
                Formula::literal("p31"),
            ),
        );
        for clause in rule.to_cnf().into_clauses() {
            kb.add_clause(clause);
        }
        for clause in Formula::not(Formula::literal("b11")).to_cnf().into_clauses() {
            kb.add_clause(clause);
        }
        let alpha = Formula::not(Formula::literal("p12"));
        let success = resolve_entailment(&kb, alpha).expect("kb is consistent");
        assert_eq!(success, false);
    }
    #[test]
    fn entailment_unit_0() {
        let mut kb = KnowledgeBase::new();
        kb.add_clause(clause!(a));
        let success = resolve_entailment(&kb, Formula::literal("a")).expect("kb is consistent");
        assert_eq!(success, true);
    }
    #[test]
    fn entailment_disjunction_is_not_enough_0() {
        // a or b does not prove a
        let mut kb = KnowledgeBase::new();
        kb.add_clause(clause!(a, b));
        let success = resolve_entailment(&kb, Formula::literal("a")).expect("kb is consistent");
        assert_eq!(success, false);
    }
    #[test]
    fn entailment_chain_0() {
        // a, a implies b, b implies c |- c
        let mut kb = KnowledgeBase::new();
        kb.add_clause(clause!(a));
        kb.add_clause(clause!(~a, b));
        kb.add_clause(clause!(~b, c));
        let success = resolve_entailment(&kb, Formula::literal("c")).expect("kb is consistent");
        assert_eq!(success, true);
    }
    #[test]
    fn entailment_iteration_cap_0() {
        // with zero iterations allowed we can not prove anything
        let mut kb = KnowledgeBase::new();
        kb.add_clause(clause!(a));
        let success = resolve_entailment_bounded(&kb, Formula::literal("a"), 0)
            .expect("kb is consistent");
        assert_eq!(success, false);
    }
    #[test]
    fn entailment_contradictory_kb_0() {
        // asking anything of a contradictory kb is a caller error
        let mut kb = KnowledgeBase::new();
        kb.add_clause(clause!());
        let result = resolve_entailment(&kb, Formula::literal("a"));
        assert!(result.is_err());
    }
    #[test]
    fn entailment_does_not_mutate_kb_0() {
        let kb = breeze_kb();
        let before = kb.len();
        let alpha = Formula::not(Formula::literal("p12"));
        let _ = resolve_entailment(&kb, alpha).expect("kb is consistent");
        assert_eq!(kb.len(), before);
    }
}
