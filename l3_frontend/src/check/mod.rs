//! Scope checking. Verifies that every reference resolves to an
//! enclosing binder and that no binder list repeats a name.
//! Nothing else (types, arity) is checked here.


use std::collections::BTreeMap;

use crate::{
    context::Context,
    errors::{BinderKind, CheckError},
    syntax::{Identifier, Program, Term},
};

/// Checks a whole program. Its parameters are the outermost scope.
pub fn check_program(program: &Program) -> Result<(), CheckError> {
    check_binders(&program.parameters, BinderKind::ProgramParameters)?;

    let context: Context = program.parameters.iter().cloned().collect();
    check_term(&program.body, &context)
}

/// Checks `term` given the names bound around it.
/// Stops at the first error; duplicate binders at a node are reported
/// before anything inside that node is looked at.
pub fn check_term(term: &Term, context: &Context<'_>) -> Result<(), CheckError> {
    match term {
        Term::Reference(name) => {
            if context.contains(name) {
                Ok(())
            } else {
                Err(CheckError::UnboundVariable(name.clone()))
            }
        },

        Term::Immediate(_) | Term::Allocate(_) => Ok(()),

        Term::Abstract { parameters, body } => {
            check_binders(parameters, BinderKind::Parameters)?;
            check_term(body, &context.extend(parameters.iter().cloned()))
        },

        Term::Apply { target, arguments } => {
            check_term(target, context)?;
            check_all(arguments, context)
        },

        Term::Let { bindings, body } => {
            check_binders(binder_names(bindings), BinderKind::LetBindings)?;

            // Values can't see any of the names being bound
            for (_, value) in bindings {
                check_term(value, context)?;
            }

            check_term(body, &context.extend(binder_names(bindings).cloned()))
        },

        Term::LetRec { bindings, body } => {
            check_binders(binder_names(bindings), BinderKind::LetRecBindings)?;

            let context = context.extend(binder_names(bindings).cloned());

            for (_, value) in bindings {
                check_term(value, &context)?;
            }

            check_term(body, &context)
        },

        Term::Primitive { left, right, .. } => {
            check_term(left, context)?;
            check_term(right, context)
        },

        Term::Branch {
            left,
            right,
            consequent,
            otherwise,
            ..
        } => {
            check_term(left, context)?;
            check_term(right, context)?;
            check_term(consequent, context)?;
            check_term(otherwise, context)
        },

        // The index is a literal offset and isn't bounds checked
        Term::Load { base, .. } => check_term(base, context),

        Term::Store { base, value, .. } => {
            check_term(base, context)?;
            check_term(value, context)
        },

        Term::Begin { effects, value } => {
            check_all(effects, context)?;
            check_term(value, context)
        },
    }
}

fn check_all(terms: &[Term], context: &Context<'_>) -> Result<(), CheckError> {
    terms.iter().try_for_each(|term| check_term(term, context))
}

fn binder_names(bindings: &[(Identifier, Term)]) -> impl Iterator<Item = &Identifier> {
    bindings.iter().map(|(name, _)| name)
}

/// Fails if any name appears more than once in a single binder list.
fn check_binders<'a>(
    names: impl IntoIterator<Item = &'a Identifier>,
    kind: BinderKind,
) -> Result<(), CheckError> {
    let mut counts = BTreeMap::new();

    for name in names {
        *counts.entry(name).or_insert(0) += 1;
    }

    let duplicates: BTreeMap<Identifier, usize> = counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(name, count)| (name.clone(), count))
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(CheckError::DuplicateBinder { kind, duplicates })
    }
}
