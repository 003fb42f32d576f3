//! L3 syntax trees. L3 is L2 plus `letrec`.

use std::fmt;

use l2_syntax::display::{Bindings, Parameters, Spaced};
pub use l2_syntax::{BranchOperator, Identifier, OperatorError, PrimitiveOperator};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Term {
    Reference(Identifier),
    Immediate(i64),

    /// A function literal.
    Abstract {
        parameters: Vec<Identifier>,
        body: Box<Term>,
    },

    Apply {
        target: Box<Term>,
        arguments: Vec<Term>,
    },

    /// Non-recursive binding. Each value is evaluated
    /// in the enclosing scope and can't see its siblings.
    Let {
        bindings: Vec<(Identifier, Term)>,
        body: Box<Term>,
    },

    /// Mutually recursive binding. Every binder is in scope
    /// for every value and for the body.
    LetRec {
        bindings: Vec<(Identifier, Term)>,
        body: Box<Term>,
    },

    Primitive {
        operator: PrimitiveOperator,
        left: Box<Term>,
        right: Box<Term>,
    },

    /// `if (left operator right) consequent else otherwise`.
    Branch {
        operator: BranchOperator,
        left: Box<Term>,
        right: Box<Term>,
        consequent: Box<Term>,
        otherwise: Box<Term>,
    },

    /// Allocates a block of this many cells.
    Allocate(usize),

    Load {
        base: Box<Term>,
        index: usize,
    },

    Store {
        base: Box<Term>,
        index: usize,
        value: Box<Term>,
    },

    /// Evaluates `effects` in order, discarding their results,
    /// then evaluates to `value`.
    Begin {
        effects: Vec<Term>,
        value: Box<Term>,
    },
}

impl Term {
    pub fn reference(name: impl Into<Identifier>) -> Self {
        Term::Reference(name.into())
    }

    pub const fn immediate(value: i64) -> Self {
        Term::Immediate(value)
    }

    pub fn abstract_<N: Into<Identifier>>(
        parameters: impl IntoIterator<Item = N>,
        body: Term,
    ) -> Self {
        Term::Abstract {
            parameters: parameters.into_iter().map(Into::into).collect(),
            body: Box::new(body),
        }
    }

    pub fn apply(target: Term, arguments: impl IntoIterator<Item = Term>) -> Self {
        Term::Apply {
            target: Box::new(target),
            arguments: arguments.into_iter().collect(),
        }
    }

    pub fn let_<N: Into<Identifier>>(
        bindings: impl IntoIterator<Item = (N, Term)>,
        body: Term,
    ) -> Self {
        Term::Let {
            bindings: collect_bindings(bindings),
            body: Box::new(body),
        }
    }

    pub fn letrec<N: Into<Identifier>>(
        bindings: impl IntoIterator<Item = (N, Term)>,
        body: Term,
    ) -> Self {
        Term::LetRec {
            bindings: collect_bindings(bindings),
            body: Box::new(body),
        }
    }

    pub fn primitive(operator: PrimitiveOperator, left: Term, right: Term) -> Self {
        Term::Primitive {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn branch(
        operator: BranchOperator,
        left: Term,
        right: Term,
        consequent: Term,
        otherwise: Term,
    ) -> Self {
        Term::Branch {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            consequent: Box::new(consequent),
            otherwise: Box::new(otherwise),
        }
    }

    pub const fn allocate(count: usize) -> Self {
        Term::Allocate(count)
    }

    pub fn load(base: Term, index: usize) -> Self {
        Term::Load {
            base: Box::new(base),
            index,
        }
    }

    pub fn store(base: Term, index: usize, value: Term) -> Self {
        Term::Store {
            base: Box::new(base),
            index,
            value: Box::new(value),
        }
    }

    pub fn begin(effects: impl IntoIterator<Item = Term>, value: Term) -> Self {
        Term::Begin {
            effects: effects.into_iter().collect(),
            value: Box::new(value),
        }
    }
}

fn collect_bindings<N: Into<Identifier>>(
    bindings: impl IntoIterator<Item = (N, Term)>,
) -> Vec<(Identifier, Term)> {
    bindings
        .into_iter()
        .map(|(name, value)| (name.into(), value))
        .collect()
}

// Must stay in sync with `l2_syntax::Term`'s rendering
// for every construct the two languages share.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Reference(name) => write!(f, "{}", name),
            Term::Immediate(value) => write!(f, "{}", value),

            Term::Abstract { parameters, body } => {
                write!(f, "(lambda {} {})", Parameters(parameters), body)
            },

            Term::Apply { target, arguments } => {
                write!(f, "(apply {}{})", target, Spaced(arguments))
            },

            Term::Let { bindings, body } => write!(f, "(let {} {})", Bindings(bindings), body),

            Term::LetRec { bindings, body } => {
                write!(f, "(letrec {} {})", Bindings(bindings), body)
            },

            Term::Primitive {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator, left, right),

            Term::Branch {
                operator,
                left,
                right,
                consequent,
                otherwise,
            } => write!(
                f,
                "(if ({} {} {}) {} {})",
                operator, left, right, consequent, otherwise
            ),

            Term::Allocate(count) => write!(f, "(allocate {})", count),
            Term::Load { base, index } => write!(f, "(load {} {})", base, index),

            Term::Store { base, index, value } => {
                write!(f, "(store {} {} {})", base, index, value)
            },

            Term::Begin { effects, value } => write!(f, "(begin{} {})", Spaced(effects), value),
        }
    }
}

/// The top-level entry point of an L3 program.
/// Its parameters are ordinary values and are never boxed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Program {
    pub parameters: Vec<Identifier>,
    pub body: Term,
}

impl Program {
    pub fn new<N: Into<Identifier>>(parameters: impl IntoIterator<Item = N>, body: Term) -> Self {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
            body,
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(l3 {} {})", Parameters(&self.parameters), self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_letrec() {
        let term = Term::letrec(
            vec![
                ("x", Term::immediate(0)),
                (
                    "y",
                    Term::primitive(
                        PrimitiveOperator::Subtract,
                        Term::reference("x"),
                        Term::immediate(1),
                    ),
                ),
            ],
            Term::reference("y"),
        );

        assert_eq!(term.to_string(), "(letrec ((x 0) (y (- x 1))) y)");
    }

    #[test]
    fn display_program() {
        let program = Program::new(
            vec!["n"],
            Term::let_(
                vec![("m", Term::reference("n"))],
                Term::begin(
                    vec![Term::store(Term::reference("m"), 2, Term::immediate(7))],
                    Term::load(Term::reference("m"), 2),
                ),
            ),
        );

        assert_eq!(
            program.to_string(),
            "(l3 (n) (let ((m n)) (begin (store m 2 7) (load m 2))))"
        );
    }
}
