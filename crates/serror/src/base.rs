use crate::Site;

/// Shared storage every concrete error kind embeds: the descriptive
/// message plus the raise-site [`Site`].
///
/// The message is fixed at construction — a kind formats it from its own
/// fields up front ("symbol 'x' not found"), so later context stamping
/// never changes what went wrong, only where it was raised from.
///
/// `ErrorBase` itself is not an error: it implements neither
/// `std::error::Error` nor the [`SiteError`](crate::SiteError) trait, so it
/// cannot be signaled directly. Concrete kinds hold it in a `base` field
/// and wire it up with [`impl_site_error!`](crate::impl_site_error).
///
/// ```
/// use serror::ErrorBase;
///
/// let base = ErrorBase::new("symbol 'x' not found");
/// assert_eq!(base.message(), "symbol 'x' not found");
/// assert_eq!(base.file(), "");
/// assert_eq!(base.line(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ErrorBase {
    message: String,
    site: Site,
}

impl ErrorBase {
    /// Storage with the given message and no raise site yet.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            site: Site::UNSET,
        }
    }

    /// The descriptive text set at construction.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The stamped source file name, `""` if never stamped.
    #[inline]
    pub fn file(&self) -> &str {
        self.site.file()
    }

    /// The stamped line number, `0` if never stamped.
    #[inline]
    pub fn line(&self) -> u32 {
        self.site.line()
    }

    /// The raise-site location.
    #[inline]
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Mutable access to the raise-site location.
    #[inline]
    pub fn site_mut(&mut self) -> &mut Site {
        &mut self.site
    }

    /// Overwrite the raise-site location. Meant for internal use by
    /// [`stamp`](crate::stamp) — raising code goes through the
    /// [`raise!`](crate::raise) macro instead of calling this directly.
    #[inline]
    pub fn set_context(&mut self, file: &str, line: u32) {
        self.site.set(file, line);
    }
}

impl core::fmt::Display for ErrorBase {
    /// Reporter format: `<message>` plus ` (at <file>:<line>)` once stamped.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.message)?;
        if self.site.is_set() {
            write!(f, " (at {}:{})", self.site.file(), self.site.line())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_base_is_unstamped() {
        let base = ErrorBase::new("boom");
        assert_eq!(base.message(), "boom");
        assert_eq!(base.file(), "");
        assert_eq!(base.line(), 0);
        assert!(!base.site().is_set());
    }

    #[test]
    fn set_context_touches_only_the_site() {
        let mut base = ErrorBase::new("boom");
        base.set_context("parser.rs", 42);
        assert_eq!(base.message(), "boom");
        assert_eq!(base.file(), "parser.rs");
        assert_eq!(base.line(), 42);
    }

    #[test]
    fn display_without_site() {
        let base = ErrorBase::new("symbol 'x' not found");
        assert_eq!(format!("{}", base), "symbol 'x' not found");
    }

    #[test]
    fn display_with_site() {
        let mut base = ErrorBase::new("symbol 'x' not found");
        base.set_context("parser.rs", 42);
        assert_eq!(
            format!("{}", base),
            "symbol 'x' not found (at parser.rs:42)"
        );
    }

    #[test]
    fn clones_are_independent() {
        let mut original = ErrorBase::new("boom");
        let mut copy = original.clone();
        copy.set_context("a.rs", 1);
        original.set_context("b.rs", 2);
        assert_eq!(copy.file(), "a.rs");
        assert_eq!(original.file(), "b.rs");
    }
}
