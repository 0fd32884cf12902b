//! Two-field mirroring for interactive front ends.
//!
//! A UI that shows a Lis field next to a target field typically translates
//! on every edit and writes the result into the other field. If writing a
//! field fires the same change notification a user edit would, the two
//! directions would ping-pong forever. [`MirrorSession`] holds a
//! [`SyncGate`] for that: while one edit is being mirrored, any edit that
//! re-enters from the notification callback is dropped.
//!
//! The translation engine itself has no such state; this lives entirely on
//! the caller side.

use crate::{Direction, Translator};
use std::cell::{Cell, RefCell};

/// A single-holder boolean gate.
#[derive(Debug, Default)]
pub struct SyncGate {
    held: Cell<bool>,
}

impl SyncGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the gate, or `None` if it is already held.
    pub fn try_enter(&self) -> Option<GateGuard<'_>> {
        if self.held.replace(true) {
            return None;
        }
        Some(GateGuard { gate: self })
    }

    pub fn is_held(&self) -> bool {
        self.held.get()
    }
}

/// Releases its [`SyncGate`] on drop.
#[derive(Debug)]
pub struct GateGuard<'g> {
    gate: &'g SyncGate,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate.held.set(false);
    }
}

/// One of the two mirrored text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The Lis (source token) field.
    Source,
    /// The target text field.
    Target,
}

impl Field {
    pub fn other(self) -> Self {
        match self {
            Field::Source => Field::Target,
            Field::Target => Field::Source,
        }
    }

    /// Direction that translates out of this field.
    pub fn direction(self) -> Direction {
        match self {
            Field::Source => Direction::Forward,
            Field::Target => Direction::Reverse,
        }
    }
}

/// What happened to an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit was stored and the other field now holds this text.
    Mirrored { field: Field, text: String },
    /// Another edit was being mirrored; this one was ignored.
    Suppressed,
}

/// Keeps a source field and a target field in sync through a [`Translator`].
#[derive(Debug)]
pub struct MirrorSession<'r> {
    translator: Translator<'r>,
    source: RefCell<String>,
    target: RefCell<String>,
    gate: SyncGate,
}

impl<'r> MirrorSession<'r> {
    pub fn new(translator: Translator<'r>) -> Self {
        MirrorSession {
            translator,
            source: RefCell::new(String::new()),
            target: RefCell::new(String::new()),
            gate: SyncGate::new(),
        }
    }

    pub fn source(&self) -> String {
        self.source.borrow().clone()
    }

    pub fn target(&self) -> String {
        self.target.borrow().clone()
    }

    pub fn is_syncing(&self) -> bool {
        self.gate.is_held()
    }

    /// Set `field` to `text` and mirror the translation into the other field.
    ///
    /// `on_mirror` is called with the other field and its new text while the
    /// gate is still held, the way a UI would be notified of a programmatic
    /// write. Edits issued from inside it return [`EditOutcome::Suppressed`].
    pub fn edit<F>(&self, field: Field, text: &str, on_mirror: F) -> EditOutcome
    where
        F: FnOnce(Field, &str),
    {
        let Some(_guard) = self.gate.try_enter() else {
            if crate::engine::debug_enabled() {
                eprintln!("[session] suppressed re-entrant edit of {:?}", field);
            }
            return EditOutcome::Suppressed;
        };

        let mirrored = self.translator.translate(field.direction(), text);
        *self.slot(field).borrow_mut() = text.to_string();
        *self.slot(field.other()).borrow_mut() = mirrored.clone();

        on_mirror(field.other(), &mirrored);
        EditOutcome::Mirrored { field: field.other(), text: mirrored }
    }

    fn slot(&self, field: Field) -> &RefCell<String> {
        match field {
            Field::Source => &self.source,
            Field::Target => &self.target,
        }
    }
}
