use crate::ast::{Formula, Op};
use crate::prover::{BooleanLiteral, Clause};

impl Formula {
    /// Rewrite into conjunctive normal form: an AND-tree of OR-trees of
    /// (possibly negated) literals. Implications and biconditionals are
    /// eliminated, negations are pushed down to the literals, and ORs are
    /// distributed over ANDs, so that
    /// `(a or (b and c))` becomes `((a or b) and (a or c))`.
    ///
    /// Distribution is naive: deeply nested disjunctions of conjunctions can
    /// blow up exponentially. There is no Tseitin-style encoding here
    pub fn to_cnf(self) -> Formula {
        match self {
            Formula::Literal(_) => self,
            Formula::Not(inner) => match *inner {
                // a negated literal is already in normal form
                lit @ Formula::Literal(_) => Formula::not(lit),
                // double negation elimination
                Formula::Not(x) => (*x).to_cnf(),
                // de morgan's law
                // `not (P and Q)` becomes `not P or not Q`
                Formula::Binary(l, Op::And, r) => {
                    Formula::or((*l).negate(), (*r).negate()).to_cnf()
                }
                // de morgan's law
                // `not (P or Q)` becomes `not P and not Q`
                Formula::Binary(l, Op::Or, r) => {
                    Formula::and((*l).negate(), (*r).negate()).to_cnf()
                }
                // rewrite the conditional under the negation first
                Formula::Binary(l, Op::Implies, r) => {
                    Formula::or((*l).negate(), *r).negate().to_cnf()
                }
                Formula::Binary(l, Op::Iff, r) => {
                    let a = *l;
                    let b = *r;
                    Formula::and(
                        Formula::or(a.clone().negate(), b.clone()),
                        Formula::or(b.negate(), a),
                    )
                    .negate()
                    .to_cnf()
                }
            },
            Formula::Binary(l, Op::And, r) => Formula::and((*l).to_cnf(), (*r).to_cnf()),
            Formula::Binary(l, Op::Or, r) => {
                let p = (*l).to_cnf();
                let q = (*r).to_cnf();
                match (p, q) {
                    // distribute the right side over the conjunction
                    // `(A and B) or Q` becomes `(A or Q) and (B or Q)`
                    (Formula::Binary(pl, Op::And, pr), q) => Formula::and(
                        Formula::or(*pl, q.clone()).to_cnf(),
                        Formula::or(*pr, q).to_cnf(),
                    ),
                    (p, Formula::Binary(ql, Op::And, qr)) => Formula::and(
                        Formula::or(p.clone(), *ql).to_cnf(),
                        Formula::or(p, *qr).to_cnf(),
                    ),
                    // neither side has a conjunction left, so this is a plain disjunction
                    (p, q) => Formula::or(p, q),
                }
            }
            // `P implies Q` becomes `not P or Q`
            Formula::Binary(l, Op::Implies, r) => {
                Formula::or((*l).negate(), *r).to_cnf()
            }
            // `P iff Q` becomes `(not P or Q) and (not Q or P)`
            Formula::Binary(l, Op::Iff, r) => {
                let a = *l;
                let b = *r;
                Formula::and(
                    Formula::or(a.clone().negate(), b.clone()),
                    Formula::or(b.negate(), a),
                )
                .to_cnf()
            }
        }
    }

    /// Flatten a CNF-shaped formula into its clauses.
    /// Precondition: `self` is the output of `to_cnf`. This is not checked,
    /// and anything else produces garbage clauses
    pub fn into_clauses(self) -> Vec<Clause> {
        let mut subtrees = Vec::new();
        self.split_conjuncts(&mut subtrees);
        subtrees
            .into_iter()
            .map(|subtree| {
                let mut literals = Vec::new();
                subtree.collect_literals(&mut literals);
                Clause::new(literals)
            })
            .collect()
    }

    /// Walk the AND spine, collecting each maximal non-AND subtree
    fn split_conjuncts(self, out: &mut Vec<Formula>) {
        match self {
            Formula::Binary(l, Op::And, r) => {
                l.split_conjuncts(out);
                r.split_conjuncts(out);
            }
            subtree => out.push(subtree),
        }
    }

    /// Flatten an OR-tree of literals into signed `BooleanLiteral`s
    fn collect_literals(self, out: &mut Vec<BooleanLiteral>) {
        match self {
            Formula::Literal(name) => out.push(BooleanLiteral::positive(name)),
            Formula::Not(inner) => {
                // in normal form, negations only wrap literals
                if let Formula::Literal(name) = *inner {
                    out.push(BooleanLiteral::negative(name));
                }
            }
            Formula::Binary(l, _, r) => {
                l.collect_literals(out);
                r.collect_literals(out);
            }
        }
    }
}
