//! The L3 front end: scope checking followed by letrec elimination,
//! which lowers L3 to [L2](l2_syntax).
//!
//! Most callers want [`lower_to_l2`], which runs both passes in order.
//! The passes are also available on their own through [`check`] and
//! [`eliminate_letrec`].

#![warn(unused_imports)]
#![warn(unused_must_use)]

pub mod check;
pub mod context;
pub mod eliminate_letrec;
pub mod errors;
pub mod options;
pub mod syntax;

#[cfg(test)]
mod test_utils;

use anyhow::{Context as _, Result};
use l3_log::{error, info, trace};

pub use check::{check_program, check_term};
pub use context::Context;
pub use eliminate_letrec::{eliminate_letrec_program, eliminate_letrec_term};
pub use errors::{BinderKind, CheckError};
pub use options::{PipelineOptions, PipelineOptionsError};

/// Scope checks `program`, then lowers it to L2.
///
/// If the scope check fails, the error is logged and returned; the
/// underlying [`CheckError`] can be recovered with
/// [`anyhow::Error::downcast_ref`].
pub fn lower_to_l2(
    program: syntax::Program,
    options: PipelineOptions,
) -> Result<l2_syntax::Program> {
    if options.trace() {
        trace!("lowering {}", program);
    }

    if options.skip_check() {
        if options.verbose() {
            info!("skipping scope check");
        }
    } else {
        if options.verbose() {
            info!("checking scopes...");
        }

        if let Err(err) = check_program(&program) {
            error!("{}", err);
            return Err(err).context("scope check failed");
        }
    }

    if options.verbose() {
        info!("eliminating letrec...");
    }

    let lowered = eliminate_letrec_program(program);

    if options.trace() {
        trace!("lowered to {}", lowered);
    }

    if options.verbose() {
        info!("lowered to L2");
    }

    Ok(lowered)
}
