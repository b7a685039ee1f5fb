/// Implement `Display`, `std::error::Error`, and [`SiteError`](crate::SiteError)
/// for a concrete error kind with a `base: ErrorBase` field.
///
/// The kind formats its message from its own fields at construction time and
/// derives `Clone` + `Debug`; everything else is wired here.
///
/// ```
/// use serror::{ErrorBase, SiteError, impl_site_error};
///
/// #[derive(Clone, Debug)]
/// struct BadArgument {
///     base: ErrorBase,
/// }
///
/// impl BadArgument {
///     fn new(function: &str, index: usize) -> Self {
///         Self {
///             base: ErrorBase::new(format!("bad argument #{index} to '{function}'")),
///         }
///     }
/// }
///
/// impl_site_error!(BadArgument);
///
/// let err = BadArgument::new("call", 2);
/// assert_eq!(err.message(), "bad argument #2 to 'call'");
/// ```
#[macro_export]
macro_rules! impl_site_error {
    ($ty:ty) => {
        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.base, f)
            }
        }

        impl std::error::Error for $ty {}

        impl $crate::SiteError for $ty {
            fn message(&self) -> &str {
                self.base.message()
            }

            fn site(&self) -> &$crate::Site {
                self.base.site()
            }

            fn site_mut(&mut self) -> &mut $crate::Site {
                self.base.site_mut()
            }
        }
    };
}

/// Stamp an error with the current `file!()`/`line!()` and yield the copy
/// without signaling it.
///
/// ```
/// use serror::{ErrorBase, SiteError, stamped};
/// # #[derive(Clone, Debug)]
/// # struct NotFound { base: ErrorBase }
/// # serror::impl_site_error!(NotFound);
/// let err = NotFound { base: ErrorBase::new("x not found") };
/// let stamped = stamped!(err);
/// assert_eq!(stamped.file(), file!());
/// ```
#[macro_export]
macro_rules! stamped {
    ($err:expr) => {
        $crate::stamp(&$err, file!(), line!())
    };
}

/// Signal an error: stamp it with the current location and return it as
/// `Err`. The single recommended raise site for every error — anything
/// signaled through here carries accurate file/line context.
///
/// The `.into()` lets the raising function's error type differ from the
/// concrete kind (e.g. return `Box<dyn SiteError>` or a wider enum with a
/// `From` impl).
///
/// ```
/// use serror::{ErrorBase, SiteError, raise};
/// # #[derive(Clone, Debug)]
/// # struct NotFound { base: ErrorBase }
/// # serror::impl_site_error!(NotFound);
/// fn lookup(symbol: &str) -> Result<u32, NotFound> {
///     raise!(NotFound { base: ErrorBase::new(format!("{symbol} not found")) });
/// }
///
/// let err = lookup("x").unwrap_err();
/// assert_eq!(err.file(), file!());
/// ```
#[macro_export]
macro_rules! raise {
    ($err:expr) => {
        return Err($crate::stamped!($err).into())
    };
}

/// Early-return through [`raise!`](crate::raise) when a condition is false.
///
/// ```ignore
/// ensure!(args.len() == arity, BadArgument::new("call", args.len()));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            $crate::raise!($err);
        }
    };
}
