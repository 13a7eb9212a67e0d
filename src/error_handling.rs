use thiserror::Error;

// The display strings double as the messages the session loop prints, so they
// must stay exactly as written.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid expression")]
    malformed_expression,

    #[error("Invalid assignment")]
    invalid_assignment,

    #[error("Unknown variable")]
    unknown_variable,
}

pub type Result<T> = std::result::Result<T, CalcError>;
