use entailment_prover::{parse, resolve_entailment, KnowledgeBase};

use log::info;

/// Seed the textbook breeze/pit knowledge base and ask about the cells around us
fn main() {
    pretty_env_logger::init();

    let givens = [
        "b11 iff (p12 or p21)",
        "not b11",
    ];
    let mut kb = KnowledgeBase::new();
    for source in givens.iter() {
        let formula = match parse(source) {
            Ok(formula) => formula,
            Err(why) => {
                eprintln!("{}", why);
                return;
            }
        };
        for clause in formula.to_cnf().into_clauses() {
            kb.add_clause(clause);
        }
    }
    info!("knowledge base holds {} clauses", kb.len());

    for query in ["not p12", "not p21", "p12"].iter() {
        let alpha = match parse(query) {
            Ok(alpha) => alpha,
            Err(why) => {
                eprintln!("{}", why);
                return;
            }
        };
        match resolve_entailment(&kb, alpha) {
            Ok(success) => println!("{:<10} entailed: {}", query, success),
            Err(why) => {
                eprintln!("{}", why);
                return;
            }
        }
    }
}
