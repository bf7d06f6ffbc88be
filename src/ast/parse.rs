use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::error::{Error, ErrorVariant};

use pest_derive::*;
use crate::ast::{Formula, Op};

#[derive(Parser)]
#[grammar = "../grammar.pest"]
struct Grammar;

pub fn parse(source: &str) -> Result<Formula, Error<Rule>> {
    // pest (essentially) tokenizes it for us,
    // all we have to do is deal with operator precedence
    // and converting into Formula trees
    let pairs = Grammar::parse(Rule::source, source)?;
    parse_expr(pairs)
}

fn parse_expr(pairs: Pairs<Rule>) -> Result<Formula, Error<Rule>> {
    let mut operator: Option<Pair<Rule>> = None; // we don't have an operator yet
    let mut terms = vec![];
    for pair in pairs {
        match pair.as_rule() {
            Rule::EOI => { break; }
            Rule::operator => {
                let new_operator = pair.into_inner()
                    .next()
                    .expect("operator missing inner rule (all operators should be `and`, `or`, `implies`, or `iff`)");
                match &operator {
                    // if this is the first operator we've seen, update the operator
                    None => operator = Some(new_operator),
                    // we can not chain conditionals, and we can not chain different operators together
                    Some(old_operator)
                        if old_operator.as_rule() == Rule::implies
                        || old_operator.as_rule() == Rule::bicond
                        || old_operator.as_rule() != new_operator.as_rule() => {
                        let variant = ErrorVariant::CustomError {
                            message: format!("unexpected {:?} after {:?}; try adding parenthesis to disambiguate",
                                              new_operator.as_rule(), old_operator.as_rule()
                            )
                        };
                        let error = Error::new_from_span(variant, new_operator.as_span());
                        return Err(error);
                    }
                    Some(_) => {}
                }
            }
            _ => {
                // not an operator, it is a term
                terms.push(parse_term(pair)?);
            }
        }
    }
    let formula = match operator.map(|p| p.as_rule()) {
        None => {
            // the parsing rules should prevent two adjacent terms
            assert_eq!(1, terms.len());
            terms.pop().unwrap()
        }
        Some(Rule::implies) => {
            // the parsing rules should prevent chaining implications w/o parens
            assert_eq!(2, terms.len());
            let last = terms.pop().unwrap();
            let first = terms.pop().unwrap();
            Formula::implies(first, last)
        }
        Some(Rule::bicond) => {
            assert_eq!(2, terms.len());
            let last = terms.pop().unwrap();
            let first = terms.pop().unwrap();
            Formula::iff(first, last)
        }
        Some(Rule::and) => fold_terms(terms, Op::And),
        Some(Rule::or) => fold_terms(terms, Op::Or),
        Some(rule) => {
            panic!("`{:?}` is not a valid operator", rule)
        }
    };
    Ok(formula)
}

/// Fold a same-operator chain like `a or b or c` into right-nested binary nodes
fn fold_terms(mut terms: Vec<Formula>, op: Op) -> Formula {
    let mut formula = terms.pop().expect("the parsing rules should prevent an empty chain");
    while let Some(term) = terms.pop() {
        formula = Formula::binary(term, op, formula);
    }
    formula
}

fn parse_term(pair: Pair<Rule>) -> Result<Formula, Error<Rule>> {
    let formula = match pair.as_rule() {
        Rule::literal => {
            Formula::literal(pair.as_str())
        }
        Rule::negation => {
            let inner = parse_expr(pair.into_inner())?;
            Formula::not(inner)
        }
        Rule::parenthetical => {
            parse_expr(pair.into_inner())?
        }
        // we're not expecting operators or EOI here, and silent rules produce nothing
        rule => {
            panic!("unexpected rule {:?} in parse_term", rule)
        }
    };
    Ok(formula)
}
