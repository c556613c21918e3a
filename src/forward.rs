//! Prefix-aware redirect forwarding.
//!
//! The helper here does one thing: compose an optional route prefix with a
//! route name (`"admin"` + `"dashboard"` → `"admin.dashboard"`) and hand the
//! result to the host framework's named-route router. It never builds URLs,
//! never registers routes, and never produces HTTP responses itself — the
//! router behind the [`RouteResolver`] seam owns all of that, including any
//! failure when the composed name is unknown.

use std::borrow::Cow;

use crate::contracts::RoutePrefix;

/// Route name used when the caller does not name one.
pub const DEFAULT_ROUTE: &str = "index";

// ============================================================================
// RouteResolver — the consumed router seam
// ============================================================================

/// A named-route router this crate delegates redirects to.
///
/// The associated [`Redirect`](RouteResolver::Redirect) type is whatever
/// redirect instruction the host framework uses; this crate only passes the
/// (possibly prefixed) route name through and returns the instruction
/// unmodified.
///
/// Any `Fn(&str) -> T` closure is a resolver, so plugging in a host
/// framework is one line:
///
/// ```
/// use axum::response::Redirect;
/// use route_prefixer::RouteResolver;
///
/// let router = |name: &str| Redirect::to(&format!("/{}", name.replace('.', "/")));
/// let _redirect: Redirect = router.resolve_redirect("auth.login");
/// ```
pub trait RouteResolver {
    /// The redirect instruction the router produces.
    type Redirect;

    /// Builds a redirect to the named route.
    fn resolve_redirect(&self, route_name: &str) -> Self::Redirect;
}

impl<F, T> RouteResolver for F
where
    F: Fn(&str) -> T,
{
    type Redirect = T;

    fn resolve_redirect(&self, route_name: &str) -> T {
        self(route_name)
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Composes an optional prefix with a route name.
///
/// **Pure function** with zero-copy optimization using `Cow<'_, str>`:
/// without a prefix the route name is returned as `Cow::Borrowed` (zero
/// allocations); with one, `{prefix}.{route_name}` is allocated once.
///
/// Composition is purely syntactic. No trimming, case-folding, or
/// validation is applied to either side, and an empty prefix still joins
/// with the dot.
///
/// # Examples
///
/// ```
/// use route_prefixer::composed_route;
///
/// assert_eq!(composed_route(Some("admin"), "dashboard"), "admin.dashboard");
/// assert_eq!(composed_route(None, "dashboard"), "dashboard");
/// assert_eq!(composed_route(Some(""), "show"), ".show");
/// ```
pub fn composed_route<'a>(prefix: Option<&str>, route_name: &'a str) -> Cow<'a, str> {
    match prefix {
        Some(prefix) => Cow::Owned(format!("{prefix}.{route_name}")),
        None => Cow::Borrowed(route_name),
    }
}

// ============================================================================
// Redirector — service object form
// ============================================================================

/// Prefix-aware redirect helper over a [`RouteResolver`].
///
/// The prefix is captured once, at construction: [`Redirector::prefixed`]
/// reads it from a component's [`RoutePrefix`] capability,
/// [`Redirector::with_prefix`] takes the token directly, and
/// [`Redirector::new`] builds an unprefixed helper. There is no runtime
/// type inspection — a component without the capability simply constructs
/// the unprefixed form.
///
/// # Examples
///
/// ```
/// use route_prefixer::{Redirector, RoutePrefix};
///
/// struct AdminController;
///
/// impl RoutePrefix for AdminController {
///     fn route_prefix(&self) -> &str {
///         "admin"
///     }
/// }
///
/// let router = |name: &str| format!("-> {name}");
/// let redirector = Redirector::prefixed(router, &AdminController);
///
/// assert_eq!(redirector.redirect("dashboard"), "-> admin.dashboard");
/// assert_eq!(redirector.redirect_index(), "-> admin.index");
/// ```
#[derive(Debug, Clone)]
pub struct Redirector<R> {
    router: R,
    prefix: Option<String>,
}

impl<R: RouteResolver> Redirector<R> {
    /// Creates an unprefixed redirector; route names pass through unmodified.
    pub fn new(router: R) -> Self {
        Self {
            router,
            prefix: None,
        }
    }

    /// Creates a redirector carrying the component's declared route prefix.
    pub fn prefixed(router: R, component: &impl RoutePrefix) -> Self {
        Self::with_prefix(router, component.route_prefix())
    }

    /// Creates a redirector with an explicit prefix token.
    pub fn with_prefix(router: R, prefix: impl Into<String>) -> Self {
        Self {
            router,
            prefix: Some(prefix.into()),
        }
    }

    /// The prefix this redirector composes with, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Redirects to the named route, prefixing the name when a prefix is set.
    pub fn redirect(&self, route_name: &str) -> R::Redirect {
        let target = composed_route(self.prefix(), route_name);
        tracing::debug!(route = %target, "delegating redirect to router");
        self.router.resolve_redirect(&target)
    }

    /// Redirects to the default route. Equivalent to `redirect(DEFAULT_ROUTE)`.
    pub fn redirect_index(&self) -> R::Redirect {
        self.redirect(DEFAULT_ROUTE)
    }
}

// ============================================================================
// ForwardsRequests — mixin form
// ============================================================================

/// Mixin that gives a controller prefix-aware `redirect` methods.
///
/// The host names its router and, to opt into prefixing, overrides
/// [`prefix`](ForwardsRequests::prefix) — typically forwarding to its
/// [`RoutePrefix`] impl. The default is `None`, in which case route names
/// are delegated unmodified.
///
/// # Examples
///
/// ```
/// use route_prefixer::{ForwardsRequests, RoutePrefix};
///
/// struct AdminController {
///     router: fn(&str) -> String,
/// }
///
/// impl RoutePrefix for AdminController {
///     fn route_prefix(&self) -> &str {
///         "admin"
///     }
/// }
///
/// impl ForwardsRequests for AdminController {
///     type Router = fn(&str) -> String;
///
///     fn router(&self) -> &Self::Router {
///         &self.router
///     }
///
///     fn prefix(&self) -> Option<&str> {
///         Some(self.route_prefix())
///     }
/// }
///
/// let controller = AdminController {
///     router: |name| format!("-> {name}"),
/// };
///
/// assert_eq!(controller.redirect("dashboard"), "-> admin.dashboard");
/// ```
pub trait ForwardsRequests {
    /// The router redirects are delegated to.
    type Router: RouteResolver;

    /// The host's router handle.
    fn router(&self) -> &Self::Router;

    /// The host's route prefix, if it declares one.
    fn prefix(&self) -> Option<&str> {
        None
    }

    /// Redirects to the named route, prefixing the name when a prefix is set.
    fn redirect(&self, route_name: &str) -> <Self::Router as RouteResolver>::Redirect {
        let target = composed_route(self.prefix(), route_name);
        tracing::debug!(route = %target, "delegating redirect to router");
        self.router().resolve_redirect(&target)
    }

    /// Redirects to the default route. Equivalent to `redirect(DEFAULT_ROUTE)`.
    fn redirect_index(&self) -> <Self::Router as RouteResolver>::Redirect {
        self.redirect(DEFAULT_ROUTE)
    }
}

// ============================================================================
// Tests
// ============================================================================
