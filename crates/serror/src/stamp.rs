use crate::SiteError;

/// Copy an error and stamp the copy with a raise-site location.
///
/// The input is never mutated — the clone is a fully independent value, so
/// one original may be stamped any number of times without interference.
/// The concrete type is preserved: stamping a `NotFound` returns a
/// `NotFound`, not a trait object.
///
/// Never fails itself; a panic out of a pathological `Clone` impl
/// propagates unmasked.
///
/// Raising code does not call this directly — the [`raise!`](crate::raise)
/// macro supplies the current `file!()`/`line!()` and signals the result in
/// one step.
pub fn stamp<E>(error: &E, file: &str, line: u32) -> E
where
    E: SiteError + Clone,
{
    let mut stamped = error.clone();
    stamped.set_context(file, line);
    stamped
}

/// [`stamp`] bound to the caller's own location via `#[track_caller]`.
///
/// Useful where the raise site is a plain function call rather than a
/// macro invocation, e.g. helper fns that build-and-return errors:
///
/// ```
/// use serror::{ErrorBase, SiteError, stamp_here};
///
/// #[derive(Clone, Debug)]
/// struct NotFound { base: ErrorBase }
/// serror::impl_site_error!(NotFound);
///
/// let err = NotFound { base: ErrorBase::new("x not found") };
/// let stamped = stamp_here(&err); // this very line
/// assert_eq!(stamped.file(), file!());
/// ```
#[track_caller]
pub fn stamp_here<E>(error: &E) -> E
where
    E: SiteError + Clone,
{
    let caller = std::panic::Location::caller();
    stamp(error, caller.file(), caller.line())
}
