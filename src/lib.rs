#![allow(nonstandard_style)]

pub mod error_handling;
pub mod evaluating;
pub mod tokenizing;

pub use error_handling::{CalcError, Result};
pub use evaluating::{evaluate, VariableStore};
pub use tokenizing::{tokenize, Sign, Token};

/// Runs one input line through the tokenizer and the evaluator. `Ok(None)`
/// means there is nothing to print (blank line or assignment).
pub fn calculate(line: &str, variables: &mut VariableStore) -> Result<Option<i64>> {
    let tokens = tokenize(line)?;
    evaluate(&tokens, variables)
}
