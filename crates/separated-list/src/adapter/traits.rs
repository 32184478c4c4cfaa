//! Core traits for list adapters.
//!
//! This module defines the capability every list adapter implements, the
//! signals adapters emit when their contents change, and the host-side
//! container adapters render rows into.

use std::sync::Arc;

use separated_list_core::{ConnectionId, Signal};

use super::item::ItemData;
use super::template::{LayoutId, SlotId};
use crate::error::AdapterResult;

/// The host side of row rendering.
///
/// The host owns views and their layouts. Adapters ask the container to
/// inflate a layout when no recycled view is available, and to bind text
/// into a slot of a view.
pub trait ViewContainer {
    /// The host's view type.
    type View;

    /// Creates a fresh view from the given layout.
    fn inflate(&mut self, layout: LayoutId) -> Self::View;

    /// Writes `text` into the given slot of `view`.
    ///
    /// Implementations return [`AdapterError::MissingTextSlot`] when the view
    /// has no such slot.
    ///
    /// [`AdapterError::MissingTextSlot`]: crate::AdapterError::MissingTextSlot
    fn bind_text(&mut self, view: &mut Self::View, slot: SlotId, text: &str) -> AdapterResult<()>;
}

/// The capability a list adapter provides to the view that displays it.
///
/// A list adapter exposes a flat sequence of rows, indexed `0..count()`.
/// Every positional method accepts any `position`; positions at or past
/// `count()` yield an empty answer (`ItemData::None`, `None`, or `false`)
/// rather than an error.
///
/// # Implementation Requirements
///
/// At minimum, you must implement:
/// - [`count`](ListAdapter::count) - Number of rows
/// - [`item`](ListAdapter::item) - Item at a position
/// - [`item_id`](ListAdapter::item_id) - Row identifier at a position
/// - [`view_for_item`](ListAdapter::view_for_item) - Render a row
/// - [`signals`](ListAdapter::signals) - Change notifications
///
/// Adapters with more than one row shape also override
/// [`view_type_count`](ListAdapter::view_type_count) and
/// [`item_view_type`](ListAdapter::item_view_type).
pub trait ListAdapter<C: ViewContainer>: Send + Sync {
    /// Returns the number of rows.
    fn count(&self) -> usize;

    /// Returns the item at `position`, or `ItemData::None` when out of range.
    fn item(&self, position: usize) -> ItemData;

    /// Returns the row identifier at `position`, or `None` when out of range.
    fn item_id(&self, position: usize) -> Option<i64>;

    /// Renders the row at `position`.
    ///
    /// `recycled` is a previously rendered view of the same view type that
    /// the host wants reused. Returns `Ok(None)` when `position` is out of
    /// range.
    fn view_for_item(
        &self,
        position: usize,
        recycled: Option<C::View>,
        container: &mut C,
    ) -> AdapterResult<Option<C::View>>;

    /// Returns the signals for this adapter.
    ///
    /// Views connect to these signals to learn when rows must be re-queried.
    fn signals(&self) -> &AdapterSignals;

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// Returns `true` if the adapter has no rows.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns `true` if item ids stay attached to the same item across
    /// data changes.
    fn has_stable_ids(&self) -> bool {
        false
    }

    /// Returns the number of distinct view types this adapter produces.
    fn view_type_count(&self) -> usize {
        1
    }

    /// Returns the view type of the row at `position`, in
    /// `0..view_type_count()`, or `None` when out of range.
    fn item_view_type(&self, position: usize) -> Option<usize> {
        (position < self.count()).then_some(0)
    }

    /// Returns `true` if every row can be selected and clicked.
    fn are_all_items_enabled(&self) -> bool {
        true
    }

    /// Returns `true` if the row at `position` can be selected and clicked.
    fn is_enabled(&self, position: usize) -> bool {
        position < self.count()
    }
}

/// Receives change notifications from an adapter.
pub trait DataSetObserver: Send + Sync {
    /// The adapter's rows changed and should be re-queried.
    fn on_changed(&self);

    /// The adapter's data is no longer valid.
    fn on_invalidated(&self);
}

/// Handle returned by [`AdapterSignals::register_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverRegistration {
    changed: ConnectionId,
    invalidated: ConnectionId,
}

/// Collection of signals emitted by list adapters.
///
/// - **`changed`**: rows were added, removed or modified; views re-query.
/// - **`invalidated`**: the underlying data is gone; views should stop
///   presenting it.
#[derive(Debug)]
pub struct AdapterSignals {
    /// Emitted after the adapter's rows changed.
    pub changed: Signal<()>,

    /// Emitted when the adapter's data has become invalid.
    pub invalidated: Signal<()>,
}

impl Default for AdapterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterSignals {
    /// Creates a new set of adapter signals.
    pub fn new() -> Self {
        Self {
            changed: Signal::new(),
            invalidated: Signal::new(),
        }
    }

    /// Emits `changed`.
    pub fn notify_changed(&self) {
        self.changed.emit(());
    }

    /// Emits `invalidated`.
    pub fn notify_invalidated(&self) {
        self.invalidated.emit(());
    }

    /// Subscribes an observer to both signals.
    pub fn register_observer(&self, observer: Arc<dyn DataSetObserver>) -> ObserverRegistration {
        let on_changed = observer.clone();
        let changed = self.changed.connect(move |_| on_changed.on_changed());
        let invalidated = self
            .invalidated
            .connect(move |_| observer.on_invalidated());
        ObserverRegistration {
            changed,
            invalidated,
        }
    }

    /// Removes an observer added with [`register_observer`](Self::register_observer).
    ///
    /// Returns `false` if the registration was already removed.
    pub fn unregister_observer(&self, registration: ObserverRegistration) -> bool {
        let changed = self.changed.disconnect(registration.changed);
        let invalidated = self.invalidated.disconnect(registration.invalidated);
        changed && invalidated
    }

    /// Returns the number of slots connected to either signal.
    pub fn observer_count(&self) -> usize {
        self.changed.connection_count() + self.invalidated.connection_count()
    }
}
