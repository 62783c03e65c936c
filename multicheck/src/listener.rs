//! Select/deselect listener registry.
//!
//! Listeners are kept per [`ListenerKind`] in registration order and invoked
//! synchronously, one after another. A listener may hand back a deferred
//! result; the registry never waits for it, it only collects it into the
//! returned [`Dispatch`] so whoever triggered the notification can observe
//! the outcome.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use futures::future::{join_all, LocalBoxFuture};
use futures::FutureExt;
use log::trace;

use crate::entry::EntryChange;
use crate::error::{Error, ListenerError};

/// The two notifications the widget emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Select,
    Deselect,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 2] = [ListenerKind::Select, ListenerKind::Deselect];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Deselect => "deselect",
        }
    }
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListenerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(Self::Select),
            "deselect" => Ok(Self::Deselect),
            other => Err(Error::UnknownListenerKind(other.to_string())),
        }
    }
}

/// A deferred listener result.
pub type ListenerFuture = LocalBoxFuture<'static, Result<(), ListenerError>>;

/// What a listener produced when it was called.
pub enum Outcome {
    /// Finished synchronously.
    Ready(Result<(), ListenerError>),
    /// Finishes later; driven by [`Dispatch::settle`].
    Deferred(ListenerFuture),
}

impl Outcome {
    pub fn deferred(future: impl Future<Output = Result<(), ListenerError>> + 'static) -> Self {
        Self::Deferred(future.boxed_local())
    }
}

impl From<()> for Outcome {
    fn from(_: ()) -> Self {
        Self::Ready(Ok(()))
    }
}

impl From<Result<(), ListenerError>> for Outcome {
    fn from(result: Result<(), ListenerError>) -> Self {
        Self::Ready(result)
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(result) => f.debug_tuple("Ready").field(result).finish(),
            Self::Deferred(_) => write!(f, "Deferred(...)"),
        }
    }
}

/// A registered callback.
pub type Listener = Box<dyn FnMut(&EntryChange) -> Outcome>;

/// Result of invoking every listener of one kind.
#[derive(Default)]
pub struct Dispatch {
    invoked: usize,
    failures: Vec<ListenerError>,
    pending: Vec<ListenerFuture>,
}

impl Dispatch {
    /// Number of listeners that were called.
    pub fn invoked(&self) -> usize {
        self.invoked
    }

    /// Failures reported synchronously.
    pub fn failures(&self) -> &[ListenerError] {
        &self.failures
    }

    /// Number of deferred results not yet driven to completion.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is pending and nothing failed.
    pub fn is_settled(&self) -> bool {
        self.pending.is_empty() && self.failures.is_empty()
    }

    /// Drive every deferred result to completion.
    ///
    /// Resolves to the first failure (synchronous ones first, then deferred
    /// ones in registration order) after all deferred results have finished.
    pub async fn settle(self) -> Result<(), ListenerError> {
        let mut first = self.failures.into_iter().next();
        for result in join_all(self.pending).await {
            if let Err(e) = result {
                first.get_or_insert(e);
            }
        }
        match first {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("invoked", &self.invoked)
            .field("failures", &self.failures)
            .field("pending", &self.pending.len())
            .finish()
    }
}

/// Ordered callbacks for each [`ListenerKind`].
///
/// There is no unregister: listeners live as long as the registry.
#[derive(Default)]
pub struct ListenerRegistry {
    select: Vec<Listener>,
    deselect: Vec<Listener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: ListenerKind) -> &Vec<Listener> {
        match kind {
            ListenerKind::Select => &self.select,
            ListenerKind::Deselect => &self.deselect,
        }
    }

    fn slot_mut(&mut self, kind: ListenerKind) -> &mut Vec<Listener> {
        match kind {
            ListenerKind::Select => &mut self.select,
            ListenerKind::Deselect => &mut self.deselect,
        }
    }

    /// Append a listener for `kind`.
    pub fn add<F, R>(&mut self, kind: ListenerKind, mut listener: F)
    where
        F: FnMut(&EntryChange) -> R + 'static,
        R: Into<Outcome>,
    {
        self.slot_mut(kind)
            .push(Box::new(move |change: &EntryChange| -> Outcome {
                listener(change).into()
            }));
    }

    /// Call every listener for `kind` in registration order.
    ///
    /// A failing listener does not stop the ones after it.
    pub fn call(&mut self, kind: ListenerKind, change: &EntryChange) -> Dispatch {
        let listeners = self.slot_mut(kind);
        trace!("Dispatching {kind} for {:?} to {} listeners", change.value, listeners.len());

        let mut dispatch = Dispatch::default();
        for listener in listeners.iter_mut() {
            dispatch.invoked += 1;
            match listener(change) {
                Outcome::Ready(Ok(())) => {}
                Outcome::Ready(Err(e)) => dispatch.failures.push(e),
                Outcome::Deferred(future) => dispatch.pending.push(future),
            }
        }
        dispatch
    }

    pub fn len(&self, kind: ListenerKind) -> usize {
        self.slot(kind).len()
    }

    pub fn is_empty(&self, kind: ListenerKind) -> bool {
        self.slot(kind).is_empty()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("select", &self.select.len())
            .field("deselect", &self.deselect.len())
            .finish()
    }
}
