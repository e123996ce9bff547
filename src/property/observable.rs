// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Change-notifying fields.

use crate::observability::messages::property::FieldAssigned;
use crate::observability::messages::StructuredLog;

/// Listener invoked on every assignment with `(previous, next)`.
///
/// `previous` is `None` on the first assignment after installation.
pub type ChangeListener<T> = Box<dyn FnMut(Option<&T>, &T) + Send>;

/// A field whose assignments are intercepted to notify a listener before
/// the new value is committed.
///
/// The notification happens-before the commit, so for a sequence of N
/// assignments the listener fires exactly N times and call *i*'s `next`
/// value equals call *i+1*'s `previous` value. Reads return the committed
/// value directly with no interception, and never re-trigger notification.
///
/// Assignments take `&mut self`; the exclusive borrow serializes writers,
/// which is what keeps the previous/next chain consistent without a lock.
/// Any panic raised by the listener propagates to the assigning caller
/// before the commit.
///
/// # Example
/// ```
/// use interpose::property::ObservableField;
/// use std::sync::mpsc;
///
/// let (tx, rx) = mpsc::channel();
/// let mut count = ObservableField::new("count", Box::new(move |prev: Option<&i64>, next: &i64| {
///     tx.send((prev.copied(), *next)).unwrap();
/// }));
///
/// count.set(-1);
/// count.set(10);
///
/// assert_eq!(rx.recv().unwrap(), (None, -1));
/// assert_eq!(rx.recv().unwrap(), (Some(-1), 10));
/// assert_eq!(count.get(), Some(&10));
/// ```
pub struct ObservableField<T> {
    name: String,
    value: Option<T>,
    listener: ChangeListener<T>,
}

impl<T> ObservableField<T> {
    /// Install over an absent field: the first assignment notifies with a
    /// `None` previous value.
    pub fn new(name: impl Into<String>, listener: ChangeListener<T>) -> Self {
        Self {
            name: name.into(),
            value: None,
            listener,
        }
    }

    /// Install over a field that already holds `initial`.
    ///
    /// The captured value becomes the `previous` of the next assignment;
    /// installation itself does not notify.
    pub fn with_initial(name: impl Into<String>, initial: T, listener: ChangeListener<T>) -> Self {
        Self {
            name: name.into(),
            value: Some(initial),
            listener,
        }
    }

    /// Assign a new value, notifying the listener first.
    pub fn set(&mut self, next: T) {
        FieldAssigned {
            field: &self.name,
            first_assignment: self.value.is_none(),
        }
        .log();

        (self.listener)(self.value.as_ref(), &next);
        self.value = Some(next);
    }

    /// Read the committed value. `None` until the first assignment on a
    /// field installed absent.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
