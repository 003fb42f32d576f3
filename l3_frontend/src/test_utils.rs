//! Strategies for generating L3 terms in property tests.

use proptest::{prelude::*, strategy::Union};

use crate::{
    context::Context,
    syntax::{BranchOperator, Identifier, PrimitiveOperator, Term},
};

/// Every name a generated term can bind or reference.
pub(crate) const NAMES: &[&str] = &["a", "b", "c", "d"];

/// A context binding every name in [`NAMES`].
pub(crate) fn pool() -> Context<'static> {
    NAMES.iter().copied().collect()
}

/// Terms whose references all come from [`NAMES`] and whose binder lists
/// never repeat a name. Checking one under [`pool`] always succeeds.
pub(crate) fn well_scoped_term() -> impl Strategy<Value = Term> {
    term(true)
}

/// Like [`well_scoped_term`], but never generates a `letrec`.
pub(crate) fn letrec_free_term() -> impl Strategy<Value = Term> {
    term(false)
}

fn name() -> impl Strategy<Value = Identifier> {
    prop::sample::select(NAMES.to_vec()).prop_map(|name| name.to_owned())
}

fn binders() -> impl Strategy<Value = Vec<Identifier>> {
    prop::sample::subsequence(NAMES.to_vec(), 0..=3)
        .prop_map(|names| names.into_iter().map(|name| name.to_owned()).collect())
}

fn bindings(inner: BoxedStrategy<Term>) -> impl Strategy<Value = Vec<(Identifier, Term)>> {
    binders()
        .prop_flat_map(move |names| {
            let values = prop::collection::vec(inner.clone(), names.len());
            (Just(names), values)
        })
        .prop_map(|(names, values)| names.into_iter().zip(values).collect())
}

fn primitive_operator() -> impl Strategy<Value = PrimitiveOperator> {
    prop_oneof![
        Just(PrimitiveOperator::Add),
        Just(PrimitiveOperator::Subtract),
        Just(PrimitiveOperator::Multiply),
    ]
}

fn branch_operator() -> impl Strategy<Value = BranchOperator> {
    prop_oneof![Just(BranchOperator::Less), Just(BranchOperator::Equal)]
}

fn term(with_letrec: bool) -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        name().prop_map(Term::Reference),
        any::<i64>().prop_map(Term::Immediate),
        (0usize..4).prop_map(Term::Allocate),
    ];

    leaf.prop_recursive(4, 48, 3, move |inner| {
        let mut arms = vec![
            (binders(), inner.clone())
                .prop_map(|(parameters, body)| Term::abstract_(parameters, body))
                .boxed(),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(target, arguments)| Term::apply(target, arguments))
                .boxed(),
            (bindings(inner.clone()), inner.clone())
                .prop_map(|(bindings, body)| Term::let_(bindings, body))
                .boxed(),
            (primitive_operator(), inner.clone(), inner.clone())
                .prop_map(|(operator, left, right)| Term::primitive(operator, left, right))
                .boxed(),
            (
                branch_operator(),
                inner.clone(),
                inner.clone(),
                inner.clone(),
                inner.clone(),
            )
                .prop_map(|(operator, left, right, consequent, otherwise)| {
                    Term::branch(operator, left, right, consequent, otherwise)
                })
                .boxed(),
            (inner.clone(), 0usize..4)
                .prop_map(|(base, index)| Term::load(base, index))
                .boxed(),
            (inner.clone(), 0usize..4, inner.clone())
                .prop_map(|(base, index, value)| Term::store(base, index, value))
                .boxed(),
            (prop::collection::vec(inner.clone(), 0..3), inner.clone())
                .prop_map(|(effects, value)| Term::begin(effects, value))
                .boxed(),
        ];

        if with_letrec {
            arms.push(
                (bindings(inner.clone()), inner)
                    .prop_map(|(bindings, body)| Term::letrec(bindings, body))
                    .boxed(),
            );
        }

        Union::new(arms)
    })
}
