//! Generic array adapter implementation.
//!
//! `ArrayAdapter<T>` presents a `Vec<T>` as a list of single-line text rows.
//! It supports both trait-based and closure-based approaches for item data
//! extraction, and renders every row through one [`RowTemplate`].

use std::sync::Arc;

use parking_lot::RwLock;
use separated_list_core::logging::targets;

use super::item::ItemData;
use super::template::RowTemplate;
use super::traits::{AdapterSignals, ListAdapter, ViewContainer};
use crate::error::AdapterResult;

/// Trait for items that can provide their own row data.
///
/// Implement this trait for types that should be directly usable in an
/// `ArrayAdapter` without requiring an external data extractor.
///
/// # Example
///
/// ```
/// use separated_list::adapter::{ItemData, ListItem};
///
/// struct Contact {
///     name: String,
///     blocked: bool,
/// }
///
/// impl ListItem for Contact {
///     fn data(&self) -> ItemData {
///         ItemData::from(self.name.as_str())
///     }
///
///     fn is_enabled(&self) -> bool {
///         !self.blocked
///     }
/// }
/// ```
pub trait ListItem: Send + Sync {
    /// Returns the item handed out by [`ListAdapter::item`]. Its text form
    /// is what the row displays.
    fn data(&self) -> ItemData;

    /// Returns `true` if the row can be selected and clicked.
    fn is_enabled(&self) -> bool {
        true
    }
}

impl ListItem for String {
    fn data(&self) -> ItemData {
        ItemData::from(self.as_str())
    }
}

impl ListItem for &'static str {
    fn data(&self) -> ItemData {
        ItemData::from(*self)
    }
}

/// Type alias for a data extractor function.
pub type DataExtractor<T> = Arc<dyn Fn(&T) -> ItemData + Send + Sync>;

/// Type alias for an enabled-state extractor function.
pub type EnabledExtractor<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A list adapter over an in-memory array of items.
///
/// Every row has view type 0 and its position as its item id. Rows are
/// rendered by reusing the recycled view when one is offered, or inflating
/// the template's layout otherwise, then binding the row text into the
/// template's text slot.
///
/// Mutating methods emit `changed` unless notification was turned off with
/// [`set_notify_on_change`](Self::set_notify_on_change).
///
/// # Example (Trait-based)
///
/// ```
/// use separated_list::adapter::{ArrayAdapter, LayoutId, RowTemplate};
///
/// let adapter = ArrayAdapter::new(
///     RowTemplate::new(LayoutId(1)),
///     vec!["Apples".to_string(), "Pears".to_string()],
/// );
/// assert_eq!(adapter.len(), 2);
/// ```
///
/// # Example (Closure-based)
///
/// ```
/// use separated_list::adapter::{ArrayAdapter, ItemData, LayoutId, RowTemplate};
///
/// struct Person {
///     name: String,
///     email: String,
/// }
///
/// let adapter = ArrayAdapter::with_extractor(
///     RowTemplate::new(LayoutId(1)),
///     vec![Person { name: "Alice".into(), email: "alice@example.com".into() }],
///     |person| ItemData::from(person.email.as_str()),
/// );
/// assert_eq!(adapter.len(), 1);
/// ```
pub struct ArrayAdapter<T> {
    items: RwLock<Vec<T>>,
    template: RowTemplate,
    extractor: DataExtractor<T>,
    enabled_extractor: EnabledExtractor<T>,
    notify_on_change: RwLock<bool>,
    signals: AdapterSignals,
}

impl<T: Send + Sync + 'static> ArrayAdapter<T> {
    /// Creates an adapter that uses `extractor` to produce each row's item.
    pub fn with_extractor<F>(template: RowTemplate, items: Vec<T>, extractor: F) -> Self
    where
        F: Fn(&T) -> ItemData + Send + Sync + 'static,
    {
        Self::with_extractors(template, items, extractor, |_| true)
    }

    /// Creates an adapter with both data and enabled-state extractors.
    pub fn with_extractors<D, E>(
        template: RowTemplate,
        items: Vec<T>,
        data_extractor: D,
        enabled_extractor: E,
    ) -> Self
    where
        D: Fn(&T) -> ItemData + Send + Sync + 'static,
        E: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            items: RwLock::new(items),
            template,
            extractor: Arc::new(data_extractor),
            enabled_extractor: Arc::new(enabled_extractor),
            notify_on_change: RwLock::new(true),
            signals: AdapterSignals::new(),
        }
    }

    /// Returns the template rows are rendered with.
    pub fn template(&self) -> RowTemplate {
        self.template
    }

    /// Returns the number of items in the adapter.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the adapter has no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns the signals for this adapter.
    pub fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    /// Controls whether mutating methods emit `changed`.
    ///
    /// Turn this off around a batch of edits, then call
    /// [`notify_changed`](Self::notify_changed) once.
    pub fn set_notify_on_change(&self, notify: bool) {
        *self.notify_on_change.write() = notify;
    }

    /// Emits `changed` regardless of the notify-on-change setting.
    pub fn notify_changed(&self) {
        self.signals.notify_changed();
    }

    /// Emits `invalidated`.
    pub fn notify_invalidated(&self) {
        self.signals.notify_invalidated();
    }

    /// Appends an item to the end of the list.
    pub fn push(&self, item: T) {
        self.items.write().push(item);
        self.changed();
    }

    /// Inserts an item at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&self, index: usize, item: T) {
        self.items.write().insert(index, item);
        self.changed();
    }

    /// Removes and returns the item at the specified index.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn remove(&self, index: usize) -> Option<T> {
        let removed = {
            let mut items = self.items.write();
            (index < items.len()).then(|| items.remove(index))
        };
        if removed.is_some() {
            self.changed();
        }
        removed
    }

    /// Removes all items.
    pub fn clear(&self) {
        self.items.write().clear();
        self.changed();
    }

    /// Replaces all items.
    pub fn set_items(&self, items: Vec<T>) {
        *self.items.write() = items;
        self.changed();
    }

    /// Returns a reference to the items (read-only access).
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Provides mutable access to an item via a closure.
    ///
    /// Emits `changed` after modification.
    pub fn modify<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = {
            let mut items = self.items.write();
            f(items.get_mut(index)?)
        };
        self.changed();
        Some(result)
    }

    fn changed(&self) {
        if *self.notify_on_change.read() {
            self.signals.notify_changed();
        }
    }
}

impl<T: ListItem + 'static> ArrayAdapter<T> {
    /// Creates an adapter over items that implement `ListItem`.
    pub fn new(template: RowTemplate, items: Vec<T>) -> Self {
        Self::with_extractors(template, items, T::data, T::is_enabled)
    }

    /// Creates an empty adapter.
    pub fn empty(template: RowTemplate) -> Self {
        Self::new(template, Vec::new())
    }
}

impl<T, C> ListAdapter<C> for ArrayAdapter<T>
where
    T: Send + Sync + 'static,
    C: ViewContainer,
{
    fn count(&self) -> usize {
        self.items.read().len()
    }

    fn item(&self, position: usize) -> ItemData {
        self.items
            .read()
            .get(position)
            .map_or(ItemData::None, |item| (self.extractor)(item))
    }

    fn item_id(&self, position: usize) -> Option<i64> {
        if position < self.items.read().len() {
            i64::try_from(position).ok()
        } else {
            None
        }
    }

    fn view_for_item(
        &self,
        position: usize,
        recycled: Option<C::View>,
        container: &mut C,
    ) -> AdapterResult<Option<C::View>> {
        let Some(text) = self
            .items
            .read()
            .get(position)
            .map(|item| (self.extractor)(item).to_text())
        else {
            return Ok(None);
        };

        let mut view = match recycled {
            Some(view) => view,
            None => {
                tracing::trace!(
                    target: targets::ADAPTER,
                    position,
                    layout = %self.template.layout,
                    "inflating row"
                );
                container.inflate(self.template.layout)
            }
        };
        container.bind_text(&mut view, self.template.text_slot, &text)?;
        Ok(Some(view))
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn is_enabled(&self, position: usize) -> bool {
        self.items
            .read()
            .get(position)
            .is_some_and(|item| (self.enabled_extractor)(item))
    }
}
