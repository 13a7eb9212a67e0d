use crate::error_handling::*;
use crate::tokenizing::*;

use std::collections::HashMap;

pub type VariableStore = HashMap<String, i64>;

/// Reduces a validated token sequence to a single value. `Ok(None)` means the
/// line produced nothing to print: a blank line, or an assignment whose value
/// went into the store instead.
pub fn evaluate(tokens: &[Token], variables: &mut VariableStore) -> Result<Option<i64>> {
    match tokens {
        [] => Ok(None),
        [Token::identifier(name), Token::assign, expression @ ..] => {
            let value = reduce(expression, variables)?;
            variables.insert(name.clone(), value);
            Ok(None)
        }
        _ => reduce(tokens, variables).map(Some),
    }
}

fn reduce(tokens: &[Token], variables: &VariableStore) -> Result<i64> {
    let (mut accumulated, mut rest) = match tokens {
        // a leading sign acts on the first value
        [Token::operator(sign), right, rest @ ..] => (sign.call(0, resolve(right, variables)?)?, rest),
        [left, rest @ ..] => (resolve(left, variables)?, rest),
        [] => return Err(CalcError::malformed_expression),
    };

    while let [Token::operator(sign), right, rest_after @ ..] = rest {
        accumulated = sign.call(accumulated, resolve(right, variables)?)?;
        rest = rest_after;
    }

    if rest.is_empty() {
        Ok(accumulated)
    } else {
        Err(CalcError::malformed_expression)
    }
}

fn resolve(token: &Token, variables: &VariableStore) -> Result<i64> {
    match token {
        Token::integer(value) => Ok(*value),
        Token::identifier(name) => variables
            .get(name)
            .copied()
            .ok_or(CalcError::unknown_variable),
        _ => Err(CalcError::malformed_expression),
    }
}
