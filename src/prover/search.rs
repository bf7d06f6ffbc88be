use std::collections::HashMap;

use crate::ast::Formula;
use crate::prover::{negate_hash, Clause, KnowledgeBase, EMPTY_CLAUSE};
use crate::error::{BoxedErrorTrait, KbContradictionError};

/// To avoid memory exhaustion, we give up if no contradiction is found within this many rounds
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

/// Does `kb` logically imply `alpha`?
/// We do proof by refutation: negate the query, and if resolution derives
/// the empty clause from `kb` plus the negation, that's a proof.
///
/// `Ok(false)` only means no proof was found within the heuristic search and
/// the iteration cap. It is NOT a proof of the negation
pub fn resolve_entailment(kb: &KnowledgeBase, alpha: Formula) -> Result<bool, BoxedErrorTrait> {
    resolve_entailment_bounded(kb, alpha, DEFAULT_MAX_ITERATIONS)
}

pub fn resolve_entailment_bounded(
    kb: &KnowledgeBase,
    alpha: Formula,
    max_iterations: usize,
) -> Result<bool, BoxedErrorTrait> {
    // copy the caller's clauses into a working set,
    // so lookups never mutate the store we were handed
    let mut kb_clauses = KnowledgeBase::new();
    for (hash, clause) in kb.iter() {
        if hash == EMPTY_CLAUSE {
            // a pre-existing contradiction is a knowledge-authoring defect
            return Err(Box::new(KbContradictionError));
        }
        kb_clauses.add_clause(clause.clone());
    }

    // Heuristic: we do not want to resolve all clauses against all others.
    // We only resolve clauses from which we can infer
    // interesting knowledge related to our query alpha,
    // seeded here with the clauses of the negated query
    let mut interesting = KnowledgeBase::new();
    for clause in alpha.negate().to_cnf().into_clauses() {
        interesting.add_clause(clause);
    }
    debug!("seeded {} interesting clauses from the negated query", interesting.len());

    let mut new_knowledge = KnowledgeBase::new();

    for round in 0..max_iterations {
        // index each literal hash to the clauses containing it,
        // across the interesting set and the kb copy
        let mut occurrences: HashMap<&str, Vec<&Clause>> = HashMap::new();
        for (_, clause) in interesting.iter().chain(kb_clauses.iter()) {
            for literal_hash in clause.literal_hashes() {
                occurrences
                    .entry(literal_hash)
                    .or_insert_with(Vec::new)
                    .push(clause);
            }
        }

        // only pairs with one side in the interesting set,
        // and the other side holding the complementary literal
        let mut resolvents = Vec::new();
        for (_, c_i) in interesting.iter() {
            for literal_hash in c_i.literal_hashes() {
                let negated = negate_hash(literal_hash);
                if let Some(partners) = occurrences.get(negated.as_str()) {
                    for c_j in partners {
                        if let Some(resolvent) = c_i.resolve_on(c_j, literal_hash) {
                            resolvents.push(resolvent);
                        }
                    }
                }
            }
        }
        trace!("round {}: {} resolvents", round, resolvents.len());

        for resolvent in resolvents {
            if resolvent.hash() == EMPTY_CLAUSE {
                debug!("derived the empty clause in round {}", round);
                return Ok(true);
            }
            new_knowledge.add_clause(resolvent);
        }

        // only clauses that are not subsumed by something
        // we already know contribute new information
        let mut added_knowledge = false;
        let candidates = new_knowledge
            .iter()
            .map(|(_, clause)| clause.clone())
            .collect::<Vec<_>>();
        for clause in candidates {
            let subsumed = interesting
                .iter()
                .chain(kb_clauses.iter())
                .any(|(_, old_clause)| old_clause.is_subset_of(&clause));
            if !subsumed {
                interesting.add_clause(clause);
                added_knowledge = true;
            }
        }

        if !added_knowledge {
            // the restricted search is closed; we can not prove the goal.
            // it might still be true
            debug!("round {} added no new knowledge, giving up", round);
            return Ok(false);
        }
    }
    Ok(false)
}
