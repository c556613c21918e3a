//! Capability contracts controllers opt into.
//!
//! A controller that wants its redirects (or, for external renderers, its
//! views) grouped under a common namespace implements one of these traits
//! and returns its prefix token. Nothing is enforced about the token: no
//! non-empty check, no uniqueness, no registry. The prefix is joined to a
//! route name with a literal `.` by [`composed_route`](crate::composed_route).

/// Declares a route prefix for a component.
///
/// Implementing this lets [`Redirector::prefixed`](crate::Redirector::prefixed)
/// capture the prefix, and is the usual source for a
/// [`ForwardsRequests::prefix`](crate::ForwardsRequests::prefix) override.
///
/// # Examples
///
/// ```
/// use route_prefixer::RoutePrefix;
///
/// struct AdminController;
///
/// impl RoutePrefix for AdminController {
///     fn route_prefix(&self) -> &str {
///         "admin"
///     }
/// }
///
/// assert_eq!(AdminController.route_prefix(), "admin");
/// ```
pub trait RoutePrefix {
    /// The token prepended to route names, without the trailing dot.
    fn route_prefix(&self) -> &str;
}

/// Declares a view prefix for a component.
///
/// The counterpart of [`RoutePrefix`] for view names. This crate exports the
/// contract but does not consume it; it exists for the host application's
/// view renderer to query.
///
/// # Examples
///
/// ```
/// use route_prefixer::ViewPrefix;
///
/// struct AdminController;
///
/// impl ViewPrefix for AdminController {
///     fn view_prefix(&self) -> &str {
///         "admin"
///     }
/// }
///
/// assert_eq!(AdminController.view_prefix(), "admin");
/// ```
pub trait ViewPrefix {
    /// The token prepended to view names, without the trailing dot.
    fn view_prefix(&self) -> &str;
}
