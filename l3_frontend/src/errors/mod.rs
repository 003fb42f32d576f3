use std::{collections::BTreeMap, fmt};
use thiserror::Error;

use crate::syntax::Identifier;

/// Which kind of binder list a duplicate was found in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinderKind {
    LetBindings,
    LetRecBindings,
    /// The parameters of an `Abstract`.
    Parameters,
    ProgramParameters,
}

impl fmt::Display for BinderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            BinderKind::LetBindings => "let binders",
            BinderKind::LetRecBindings => "letrec binders",
            BinderKind::Parameters => "parameters",
            BinderKind::ProgramParameters => "program parameters",
        };

        write!(f, "{}", description)
    }
}

/// Signals the first scoping error found while checking a program.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CheckError {
    /// A binder list introduces the same name more than once.
    /// `duplicates` maps each repeated name to how many times it appears.
    #[error("duplicate {kind}: {}", list_duplicates(.duplicates))]
    DuplicateBinder {
        kind: BinderKind,
        duplicates: BTreeMap<Identifier, usize>,
    },

    #[error("unknown variable: {0}")]
    UnboundVariable(Identifier),
}

fn list_duplicates(duplicates: &BTreeMap<Identifier, usize>) -> String {
    duplicates
        .iter()
        .map(|(name, count)| format!("{} ({} times)", name, count))
        .collect::<Vec<_>>()
        .join(", ")
}
