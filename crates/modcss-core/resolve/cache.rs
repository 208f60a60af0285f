//! Render-scoped resolution memoization
//!
//! Long-lived host processes render many modules per request; repeated
//! lookups against the same subtree are common (selector functions and
//! declaration functions frequently resolve the same composite). The cache
//! memoizes resolved values keyed by a content hash of the tree plus the
//! lookup coordinates.
//!
//! # Lifetime contract
//!
//! The cache is scoped to one render: call [`RenderCache::begin_render`] at
//! the start of every render pass. Nothing here persists across requests;
//! there is deliberately no process-global storage.

use crate::resolve::{Breakpoint, ResolveMode, Resolver, State};
use crate::tree::{AttrTree, AttrValue};
use crate::utils::hashers::create_hash_map;
use ahash::RandomState;
use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash, Hasher};

/// Memo table for resolved values, valid for one render pass.
#[derive(Debug)]
pub struct RenderCache {
    entries: HashMap<u64, Option<AttrValue>, RandomState>,
    hasher: RandomState,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: create_hash_map(),
            hasher: RandomState::new(),
        }
    }

    /// Invalidate everything. Must run at the start of each render.
    pub fn begin_render(&mut self) {
        self.entries.clear();
    }

    /// Number of memoized lookups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Memoized [`Resolver::resolve`]. Owned result; cache hits clone.
    ///
    /// Mirrors the resolver signature so call sites swap freely between
    /// cached and uncached resolution.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn resolve(
        &mut self,
        resolver: &Resolver<'_>,
        tree: &AttrTree,
        breakpoint: &Breakpoint,
        state: &State,
        sub_key: Option<&str>,
        default: Option<&AttrValue>,
        mode: ResolveMode,
    ) -> Option<AttrValue> {
        let key = self.key_for(tree, breakpoint, state, sub_key, default, mode);
        if let Some(hit) = self.entries.get(&key) {
            return hit.clone();
        }
        let value = resolver
            .resolve(tree, breakpoint, state, sub_key, default, mode)
            .map(Cow::into_owned);
        self.entries.insert(key, value.clone());
        value
    }

    fn key_for(
        &self,
        tree: &AttrTree,
        breakpoint: &Breakpoint,
        state: &State,
        sub_key: Option<&str>,
        default: Option<&AttrValue>,
        mode: ResolveMode,
    ) -> u64 {
        let mut hasher = self.hasher.build_hasher();
        tree.hash(&mut hasher);
        breakpoint.hash(&mut hasher);
        state.hash(&mut hasher);
        sub_key.hash(&mut hasher);
        default.hash(&mut hasher);
        mode.hash(&mut hasher);
        hasher.finish()
    }
}
