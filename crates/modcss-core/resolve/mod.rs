//! Breakpoint/state resolution
//!
//! Everything needed to answer "what value does this attribute hold at this
//! breakpoint and state": breakpoint identity and declared ordering, state
//! identity, the inheritance-aware [`Resolver`], and the render-scoped
//! [`RenderCache`].

pub mod breakpoint;
pub mod cache;
pub mod resolver;
pub mod state;

pub use breakpoint::{Breakpoint, BreakpointOrder, BreakpointSpec};
pub use cache::RenderCache;
pub use resolver::{ResolveMode, Resolver};
pub use state::State;
