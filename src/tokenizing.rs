use crate::error_handling::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    positive,
    negative,
}

impl Sign {
    // overflow has no representable result, so the whole line is rejected
    pub fn call(self, left: i64, right: i64) -> Result<i64> {
        use Sign::*;
        let value = match self {
            positive => left.checked_add(right),
            negative => left.checked_sub(right),
        };
        value.ok_or(CalcError::malformed_expression)
    }

    // sign-of-product: like signs collapse to '+', unlike signs to '-'
    fn fold(self, incoming: Sign) -> Sign {
        if self == incoming {
            Sign::positive
        } else {
            Sign::negative
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    integer(i64),
    identifier(String),
    operator(Sign),
    assign,
}

impl Token {
    fn is_value(&self) -> bool {
        matches!(self, Token::integer(_) | Token::identifier(_))
    }
}

pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    let words: Vec<&str> = line.split_whitespace().collect();

    let mut tokens = Vec::new();
    let mut adjacent_values = false;
    push_words(&words, &mut tokens, &mut adjacent_values)?;

    if adjacent_values {
        return Err(CalcError::malformed_expression);
    }
    match tokens.last() {
        Some(last) if !last.is_value() => Err(CalcError::malformed_expression),
        _ => Ok(tokens),
    }
}

fn push_words(words: &[&str], tokens: &mut Vec<Token>, adjacent_values: &mut bool) -> Result<()> {
    for word in words {
        if let Ok(value) = word.parse::<i64>() {
            push_value(Token::integer(value), tokens, adjacent_values);
        } else if word.chars().all(char::is_alphabetic) {
            push_value(Token::identifier((*word).into()), tokens, adjacent_values);
        } else if word.chars().all(|c| c == '+' || c == '-') {
            merge_signs(word, tokens)?;
        } else if *word == "=" {
            push_assign(tokens)?;
        } else if word.starts_with(|c: char| c.is_alphabetic() || c == '=') {
            split_assign(word, tokens, adjacent_values)?;
        } else {
            return Err(CalcError::malformed_expression);
        }
    }
    Ok(())
}

// Two values in a row is reported only after the full scan, so that a
// misplaced '=' later in the line outranks it.
fn push_value(token: Token, tokens: &mut Vec<Token>, adjacent_values: &mut bool) {
    if tokens.last().is_some_and(Token::is_value) {
        *adjacent_values = true;
    }
    tokens.push(token);
}

fn merge_signs(run: &str, tokens: &mut Vec<Token>) -> Result<()> {
    for c in run.chars() {
        let sign = if c == '+' { Sign::positive } else { Sign::negative };
        match tokens.last_mut() {
            Some(Token::operator(top)) => *top = top.fold(sign),
            Some(Token::assign) => return Err(CalcError::malformed_expression),
            _ => tokens.push(Token::operator(sign)),
        }
    }
    Ok(())
}

// An '=' may only follow a single leading identifier; the evaluator relies on
// every assign token sitting at position 1.
fn push_assign(tokens: &mut Vec<Token>) -> Result<()> {
    match tokens.as_slice() {
        [Token::identifier(_)] => {
            tokens.push(Token::assign);
            Ok(())
        }
        _ => Err(CalcError::invalid_assignment),
    }
}

// Re-splits a glued word such as "x=5" around its embedded '=' and feeds the
// parts back through the ordinary word rules, into the same sequence.
fn split_assign(word: &str, tokens: &mut Vec<Token>, adjacent_values: &mut bool) -> Result<()> {
    match find_assign(word)? {
        Some(index) => {
            let parts = [&word[..index], "=", &word[index + 1..]];
            let parts: Vec<&str> = parts.into_iter().filter(|part| !part.is_empty()).collect();
            push_words(&parts, tokens, adjacent_values)
        }
        None if tokens.contains(&Token::assign) => Err(CalcError::invalid_assignment),
        None => Err(CalcError::malformed_expression),
    }
}

fn find_assign(word: &str) -> Result<Option<usize>> {
    let mut found = None;
    for (index, c) in word.char_indices() {
        if c == '=' {
            // a second '=' is always an attempted double assignment
            if found.is_some() {
                return Err(CalcError::invalid_assignment);
            }
            found = Some(index);
        } else if !c.is_ascii_digit() && !c.is_alphabetic() {
            return Err(match found {
                Some(_) => CalcError::invalid_assignment,
                None => CalcError::malformed_expression,
            });
        }
    }
    Ok(found)
}
