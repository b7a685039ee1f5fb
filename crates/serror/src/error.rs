use std::error::Error;

use crate::Site;

/// The polymorphic root capability every signaled error exposes.
///
/// Handlers catch by this trait — `&dyn SiteError` or `Box<dyn SiteError>` —
/// and read the message plus raise-site context for reporting:
///
/// ```ignore
/// fn report(err: &dyn SiteError) {
///     eprintln!("error: {} (at {}:{})", err.message(), err.file(), err.line());
/// }
/// ```
///
/// Concrete kinds are defined by consumers; the only requirements are an
/// embedded [`ErrorBase`](crate::ErrorBase) (wired up via
/// [`impl_site_error!`](crate::impl_site_error)) and `Clone`, which
/// [`stamp`](crate::stamp) needs for its copy-in contract.
///
/// `file()`, `line()`, and `set_context()` delegate to the embedded
/// [`Site`]; kinds never override them.
pub trait SiteError: Error {
    /// The descriptive text set at construction. Stamping never alters it.
    fn message(&self) -> &str;

    /// The raise-site location.
    fn site(&self) -> &Site;

    /// Mutable access to the raise-site location.
    fn site_mut(&mut self) -> &mut Site;

    /// The stamped source file name, `""` if never stamped.
    fn file(&self) -> &str {
        self.site().file()
    }

    /// The stamped line number, `0` if never stamped.
    fn line(&self) -> u32 {
        self.site().line()
    }

    /// Overwrite the raise-site location (last stamp wins).
    /// Internal-use entry point for [`stamp`](crate::stamp).
    fn set_context(&mut self, file: &str, line: u32) {
        self.site_mut().set(file, line);
    }
}

// Lets `raise!` signal any concrete kind from a function that catches by
// capability (`Result<T, Box<dyn SiteError>>`), mirroring std's
// `From<E> for Box<dyn Error>`.
impl<'a, E: SiteError + 'a> From<E> for Box<dyn SiteError + 'a> {
    fn from(err: E) -> Self {
        Box::new(err)
    }
}

impl<'a, E: SiteError + Send + Sync + 'a> From<E> for Box<dyn SiteError + Send + Sync + 'a> {
    fn from(err: E) -> Self {
        Box::new(err)
    }
}
