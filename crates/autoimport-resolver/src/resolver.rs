//! Resolver capability
//!
//! A resolver maps a candidate name to a [`ResolverOutput`] or declines with
//! `Ok(None)`. Resolution may be asynchronous; the engine awaits each call
//! before moving on. Any `Fn(String) -> impl Future` with the right output
//! is a resolver, as is any type implementing [`Resolver`] directly.

use std::future::Future;

use autoimport_common::ResolverOutput;
use futures::future::{self, BoxFuture};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Future returned by [`Resolver::resolve`].
pub type ResolveFuture<'a> = BoxFuture<'a, anyhow::Result<Option<ResolverOutput>>>;

/// How a resolver takes part in the chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    /// Consulted for every candidate.
    #[default]
    Component,
    /// Consulted only for names starting with [`DIRECTIVE_PREFIX`], and
    /// handed the name without it.
    Directive,
}

/// Name prefix that routes a candidate to directive resolvers.
pub const DIRECTIVE_PREFIX: char = 'v';

pub trait Resolver: Send + Sync {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Component
    }

    fn resolve<'a>(&'a self, name: &'a str) -> ResolveFuture<'a>;
}

impl<F, Fut> Resolver for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Option<ResolverOutput>>> + Send + 'static,
{
    fn resolve<'a>(&'a self, name: &'a str) -> ResolveFuture<'a> {
        Box::pin((self)(name.to_string()))
    }
}

/// Marks the wrapped resolver as a directive resolver.
#[derive(Clone, Debug)]
pub struct DirectiveResolver<R>(pub R);

impl<R: Resolver> Resolver for DirectiveResolver<R> {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Directive
    }

    fn resolve<'a>(&'a self, name: &'a str) -> ResolveFuture<'a> {
        self.0.resolve(name)
    }
}

/// Table-backed resolver, answering synchronously.
#[derive(Clone, Debug, Default)]
pub struct MapResolver {
    kind: ResolverKind,
    entries: FxHashMap<String, ResolverOutput>,
}

impl MapResolver {
    pub fn new(kind: ResolverKind) -> Self {
        MapResolver {
            kind,
            entries: FxHashMap::default(),
        }
    }

    pub fn with_entries(
        kind: ResolverKind,
        entries: impl IntoIterator<Item = (String, ResolverOutput)>,
    ) -> Self {
        MapResolver {
            kind,
            entries: entries.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, output: impl Into<ResolverOutput>) {
        self.entries.insert(name.into(), output.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Resolver for MapResolver {
    fn kind(&self) -> ResolverKind {
        self.kind
    }

    fn resolve<'a>(&'a self, name: &'a str) -> ResolveFuture<'a> {
        Box::pin(future::ready(Ok(self.entries.get(name).cloned())))
    }
}
