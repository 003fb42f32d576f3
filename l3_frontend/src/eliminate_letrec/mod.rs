//! Lowers L3 to L2 by removing `letrec`.
//!
//! Each `letrec` binder gets a one-cell box, allocated before any
//! of the bound values is evaluated:
//!
//! ```text
//! (letrec ((x v) (y w)) body)
//! ```
//!
//! becomes
//!
//! ```text
//! (let ((x (allocate 1)) (y (allocate 1)))
//!   (begin (store x 0 v') (store y 0 w') body'))
//! ```
//!
//! where every reference to `x` or `y` inside `v'`, `w'` and `body'` reads
//! through the box with `(load x 0)`. A value may capture a sibling freely,
//! but must not read a sibling's box before that sibling's `store` has run.
//!
//! This pass assumes its input has already been scope checked and does no
//! validation of its own.


use l2_syntax as l2;

use crate::{
    context::Context,
    syntax::{Identifier, Program, Term},
};

/// Lowers a whole program. Program parameters are never boxed.
pub fn eliminate_letrec_program(program: Program) -> l2::Program {
    l2::Program {
        parameters: program.parameters,
        body: eliminate_letrec_term(program.body, &Context::new()),
    }
}

/// Lowers `term`, reading every name in `context` (the boxed names)
/// through its box.
pub fn eliminate_letrec_term(term: Term, context: &Context<'_>) -> l2::Term {
    let recur = |term: Term| eliminate_letrec_term(term, context);
    let recur_boxed = |term: Box<Term>| Box::new(eliminate_letrec_term(*term, context));

    match term {
        Term::Reference(name) => {
            if context.contains(&name) {
                l2::Term::load(l2::Term::Reference(name), 0)
            } else {
                l2::Term::Reference(name)
            }
        },

        Term::Immediate(value) => l2::Term::Immediate(value),

        // Parameters don't change what is boxed
        Term::Abstract { parameters, body } => l2::Term::Abstract {
            parameters,
            body: recur_boxed(body),
        },

        Term::Apply { target, arguments } => l2::Term::Apply {
            target: recur_boxed(target),
            arguments: arguments.into_iter().map(recur).collect(),
        },

        Term::Let { bindings, body } => l2::Term::Let {
            bindings: bindings
                .into_iter()
                .map(|(name, value)| (name, recur(value)))
                .collect(),
            body: recur_boxed(body),
        },

        Term::LetRec { bindings, body } => eliminate_bindings(bindings, *body, context),

        Term::Primitive {
            operator,
            left,
            right,
        } => l2::Term::Primitive {
            operator,
            left: recur_boxed(left),
            right: recur_boxed(right),
        },

        Term::Branch {
            operator,
            left,
            right,
            consequent,
            otherwise,
        } => l2::Term::Branch {
            operator,
            left: recur_boxed(left),
            right: recur_boxed(right),
            consequent: recur_boxed(consequent),
            otherwise: recur_boxed(otherwise),
        },

        Term::Allocate(count) => l2::Term::Allocate(count),

        Term::Load { base, index } => l2::Term::Load {
            base: recur_boxed(base),
            index,
        },

        Term::Store { base, index, value } => l2::Term::Store {
            base: recur_boxed(base),
            index,
            value: recur_boxed(value),
        },

        Term::Begin { effects, value } => l2::Term::Begin {
            effects: effects.into_iter().map(recur).collect(),
            value: recur_boxed(value),
        },
    }
}

/// Allocates a box for every binder, then stores each value in
/// declaration order before evaluating `body`.
fn eliminate_bindings(
    bindings: Vec<(Identifier, Term)>,
    body: Term,
    context: &Context<'_>,
) -> l2::Term {
    let context = context.extend(bindings.iter().map(|(name, _)| name.clone()));

    let mut allocations = Vec::with_capacity(bindings.len());
    let mut stores = Vec::with_capacity(bindings.len());

    for (name, value) in bindings {
        let value = eliminate_letrec_term(value, &context);
        stores.push(l2::Term::store(l2::Term::reference(name.clone()), 0, value));
        allocations.push((name, l2::Term::allocate(1)));
    }

    let body = eliminate_letrec_term(body, &context);
    l2::Term::let_(allocations, l2::Term::begin(stores, body))
}
