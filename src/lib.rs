//! # Route Prefixer
//!
//! Prefix-aware redirects for web framework controllers:
//! - **Capability contracts** ([`RoutePrefix`], [`ViewPrefix`]) a controller
//!   implements to group its routes or views under a namespace
//! - **Redirect helpers** ([`Redirector`], [`ForwardsRequests`]) that compose
//!   `prefix.route_name` and delegate to the host framework's named-route
//!   router through the [`RouteResolver`] seam
//!
//! The crate is deliberately a thin convention layer. It performs no URL
//! construction, route registration, or view resolution; unknown route names
//! fail wherever the host router says they fail.
//!
//! ## Example
//!
//! ```
//! use route_prefixer::{Redirector, RoutePrefix};
//!
//! struct AdminController;
//!
//! impl RoutePrefix for AdminController {
//!     fn route_prefix(&self) -> &str {
//!         "admin"
//!     }
//! }
//!
//! // Any `Fn(&str) -> T` works as the router; real applications pass a
//! // closure over their framework's named-route lookup.
//! let router = |name: &str| format!("redirect:{name}");
//!
//! let redirector = Redirector::prefixed(router, &AdminController);
//! assert_eq!(redirector.redirect("dashboard"), "redirect:admin.dashboard");
//! assert_eq!(redirector.redirect_index(), "redirect:admin.index");
//! ```

pub mod contracts;
pub mod forward;

pub use contracts::{RoutePrefix, ViewPrefix};
pub use forward::{composed_route, ForwardsRequests, Redirector, RouteResolver, DEFAULT_ROUTE};
