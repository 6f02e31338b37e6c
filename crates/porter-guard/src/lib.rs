//! # porter-guard
//!
//! The navigation guard: runs once per route transition, synchronously
//! against the session store's last committed snapshot, and decides whether
//! the transition proceeds or is redirected to the home route.
//!
//! The page title is set for every attempt — including the ones that end in
//! a redirect — which matches how the product behaves: the title flashes to
//! the protected page's name even when the user is bounced to the login
//! screen.

mod guard;
mod route;

pub use guard::{Decision, GuardOptions, NavigationGuard, TitleSink};
pub use route::RouteDescriptor;
