//! Sectioned list adapter.
//!
//! `SeparatedListAdapter` composes several child adapters ("sections") into
//! one flat list. Every non-empty section is preceded by a header row that
//! shows the section's name; empty sections contribute no rows at all.
//!
//! ```text
//!  sections                 flat list
//!  ┌──────────────┐         0  [Fruit]        header, view type 0
//!  │ Fruit: 2     │ ──────> 1    apple        Fruit item 0
//!  ├──────────────┤         2    pear         Fruit item 1
//!  │ Dairy: 0     │ ──────>   (nothing)
//!  ├──────────────┤         3  [Bread]        header, view type 0
//!  │ Bread: 1     │ ──────> 4    rye          Bread item 0
//!  └──────────────┘
//! ```
//!
//! Every positional query walks the sections in order, subtracting each
//! section's row count from the position until it lands inside one. Nothing
//! about the layout is cached, so a child that grows or shrinks is reflected
//! by the very next query.

use std::sync::Arc;

use parking_lot::RwLock;
use separated_list_core::ConnectionId;
use separated_list_core::logging::targets;

use super::array_adapter::ArrayAdapter;
use super::item::ItemData;
use super::template::{LayoutId, RowTemplate, SlotId};
use super::traits::{AdapterSignals, ListAdapter, ViewContainer};
use crate::error::{AdapterError, AdapterResult};

/// View type reported for every header row.
pub const HEADER_VIEW_TYPE: usize = 0;

/// Item id reported for every header row.
pub const HEADER_ITEM_ID: i64 = 0;

/// What a flat position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlatPosition {
    /// The header row of the section at this ordinal.
    Header {
        /// Ordinal of the section, in insertion order.
        section: usize,
    },
    /// A row of a section's child adapter.
    Item {
        /// Ordinal of the section, in insertion order.
        section: usize,
        /// Position within the child adapter.
        index: usize,
    },
}

impl FlatPosition {
    /// Returns the section ordinal this position belongs to.
    pub fn section(&self) -> usize {
        match *self {
            Self::Header { section } | Self::Item { section, .. } => section,
        }
    }

    /// Returns `true` for a header row.
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }
}

/// Forwarding slots connected to one child's signals.
struct Forwarding {
    changed: ConnectionId,
    invalidated: ConnectionId,
}

impl Forwarding {
    fn disconnect_from<C: ViewContainer>(&self, child: &dyn ListAdapter<C>) {
        let child_signals = child.signals();
        child_signals.changed.disconnect(self.changed);
        child_signals.invalidated.disconnect(self.invalidated);
    }
}

fn same_adapter<C: ViewContainer>(a: &Arc<dyn ListAdapter<C>>, b: &Arc<dyn ListAdapter<C>>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

fn reject_duplicate(name: String) -> AdapterError {
    tracing::warn!(target: targets::SECTIONS, name = %name, "rejecting duplicate section");
    AdapterError::DuplicateSection { name }
}

struct Section<C: ViewContainer> {
    name: String,
    adapter: Arc<dyn ListAdapter<C>>,
    /// `None` when an earlier section already forwards this adapter.
    forwarding: Option<Forwarding>,
}

impl<C: ViewContainer> Section<C> {
    /// Rows this section occupies in the flat list: the header plus every
    /// child row, or nothing at all for an empty child.
    fn span(&self) -> usize {
        if self.adapter.is_empty() {
            0
        } else {
            self.adapter.count() + 1
        }
    }
}

/// A list adapter that shows several child adapters one after another, each
/// under its own header row.
///
/// Headers are rendered from the section names through a shared
/// [`RowTemplate`], are never enabled, report view type
/// [`HEADER_VIEW_TYPE`] and item id [`HEADER_ITEM_ID`]. Child rows keep their
/// own data, ids and enabled state; their view types are shifted into a
/// range reserved for their section so the host never recycles a row of one
/// section as a row of another.
///
/// Any `changed` or `invalidated` notification from a child is re-emitted on
/// this adapter's own signals.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use separated_list::adapter::{
///     ArrayAdapter, ItemData, LayoutId, ListAdapter, RowTemplate, SeparatedListAdapter,
///     SlotId, ViewContainer,
/// };
/// use separated_list::AdapterResult;
///
/// struct Rows;
///
/// impl ViewContainer for Rows {
///     type View = String;
///
///     fn inflate(&mut self, _layout: LayoutId) -> String {
///         String::new()
///     }
///
///     fn bind_text(&mut self, view: &mut String, _slot: SlotId, text: &str) -> AdapterResult<()> {
///         *view = text.to_string();
///         Ok(())
///     }
/// }
///
/// let rows = RowTemplate::new(LayoutId(1));
/// let adapter = SeparatedListAdapter::<Rows>::new(LayoutId(2));
/// adapter.add_section("Fruit", Arc::new(ArrayAdapter::new(rows, vec!["apple", "pear"])))?;
/// adapter.add_section("Dairy", Arc::new(ArrayAdapter::<&str>::empty(rows)))?;
/// adapter.add_section("Bread", Arc::new(ArrayAdapter::new(rows, vec!["rye"])))?;
///
/// assert_eq!(adapter.count(), 5);
/// assert_eq!(adapter.item(3), ItemData::from("Bread"));
/// assert_eq!(adapter.item(4), ItemData::from("rye"));
/// # Ok::<(), separated_list::AdapterError>(())
/// ```
pub struct SeparatedListAdapter<C: ViewContainer> {
    sections: RwLock<Vec<Section<C>>>,
    headers: ArrayAdapter<String>,
    signals: Arc<AdapterSignals>,
}

impl<C: ViewContainer> SeparatedListAdapter<C> {
    /// Creates an adapter whose headers bind into [`SlotId::TEXT`] of
    /// `header_layout`.
    pub fn new(header_layout: LayoutId) -> Self {
        Self::with_template(RowTemplate::new(header_layout))
    }

    /// Creates an adapter whose headers bind into `text_slot` of
    /// `header_layout`.
    pub fn with_text_slot(header_layout: LayoutId, text_slot: SlotId) -> Self {
        Self::with_template(RowTemplate::with_text_slot(header_layout, text_slot))
    }

    /// Creates an adapter that renders headers with `template`.
    pub fn with_template(template: RowTemplate) -> Self {
        Self {
            sections: RwLock::new(Vec::new()),
            headers: ArrayAdapter::empty(template),
            signals: Arc::new(AdapterSignals::new()),
        }
    }

    /// Returns the template header rows are rendered with.
    pub fn header_template(&self) -> RowTemplate {
        self.headers.template()
    }

    /// Appends a section after all existing ones.
    ///
    /// The adapter subscribes to the child's signals so that any change in
    /// the child is re-emitted on this adapter. A child added under several
    /// names is subscribed once. Adding a section emits nothing by itself.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::DuplicateSection`] if a section with the same
    /// name already exists; the adapter is left unchanged.
    pub fn add_section(
        &self,
        name: impl Into<String>,
        adapter: Arc<dyn ListAdapter<C>>,
    ) -> AdapterResult<()> {
        let name = name.into();

        let already_forwarded = {
            let sections = self.sections.read();
            if sections.iter().any(|section| section.name == name) {
                return Err(reject_duplicate(name));
            }
            sections
                .iter()
                .any(|section| same_adapter(&section.adapter, &adapter))
        };

        // No section lock is held while child code runs.
        let rows = adapter.count();
        let forwarding = (!already_forwarded).then(|| self.forward_from(adapter.as_ref()));

        let mut sections = self.sections.write();
        let duplicate = sections.iter().any(|section| section.name == name);
        let forwarded_meanwhile = sections
            .iter()
            .any(|section| section.forwarding.is_some() && same_adapter(&section.adapter, &adapter));
        let forwarding = match forwarding {
            Some(forwarding) if duplicate || forwarded_meanwhile => {
                forwarding.disconnect_from(adapter.as_ref());
                None
            }
            forwarding => forwarding,
        };
        if duplicate {
            return Err(reject_duplicate(name));
        }

        tracing::debug!(
            target: targets::SECTIONS,
            name = %name,
            ordinal = sections.len(),
            rows,
            "adding section"
        );

        // Headers and sections grow together, in the same order.
        self.headers.push(name.clone());
        sections.push(Section {
            name,
            adapter,
            forwarding,
        });
        Ok(())
    }

    fn forward_from(&self, child: &dyn ListAdapter<C>) -> Forwarding {
        let child_signals = child.signals();

        let signals = self.signals.clone();
        let changed = child_signals.changed.connect(move |_| {
            tracing::trace!(target: targets::SECTIONS, "forwarding child change");
            signals.notify_changed();
        });

        let signals = self.signals.clone();
        let invalidated = child_signals.invalidated.connect(move |_| {
            tracing::trace!(target: targets::SECTIONS, "forwarding child invalidation");
            signals.notify_invalidated();
        });

        Forwarding {
            changed,
            invalidated,
        }
    }

    /// Returns the number of sections, including empty ones.
    pub fn section_count(&self) -> usize {
        self.sections.read().len()
    }

    /// Returns the section names in presentation order.
    pub fn section_names(&self) -> Vec<String> {
        self.sections
            .read()
            .iter()
            .map(|section| section.name.clone())
            .collect()
    }

    /// Returns the child adapter registered under `name`.
    pub fn section_adapter(&self, name: &str) -> Option<Arc<dyn ListAdapter<C>>> {
        self.sections
            .read()
            .iter()
            .find(|section| section.name == name)
            .map(|section| section.adapter.clone())
    }

    /// Translates a flat position into a header or child row.
    ///
    /// Returns `None` when `position` is at or past [`count`](ListAdapter::count).
    pub fn locate(&self, position: usize) -> Option<FlatPosition> {
        let sections = self.sections.read();
        locate_in(&sections, position).map(|(located, _)| located)
    }

    /// Returns `true` if `position` is a header row.
    pub fn is_header(&self, position: usize) -> bool {
        self.locate(position).is_some_and(|located| located.is_header())
    }

    /// Returns the ordinal of the section that covers `position`.
    pub fn section_for_position(&self, position: usize) -> Option<usize> {
        self.locate(position).map(|located| located.section())
    }

    /// Returns the flat position of a section's header row.
    ///
    /// Returns `None` for an unknown ordinal and for an empty section, which
    /// has no header.
    pub fn position_for_section(&self, section: usize) -> Option<usize> {
        let sections = self.sections.read();
        let target = sections.get(section)?;
        if target.adapter.is_empty() {
            return None;
        }
        Some(sections[..section].iter().map(Section::span).sum())
    }
}

/// The walk shared by every positional query.
///
/// Returns the located row together with its section. The header wins when
/// `position` lands exactly on a section's first slot; the child's first row
/// sits one slot later.
fn locate_in<C: ViewContainer>(
    sections: &[Section<C>],
    mut position: usize,
) -> Option<(FlatPosition, &Section<C>)> {
    for (ordinal, section) in sections.iter().enumerate() {
        let span = section.span();

        if position == 0 && span > 0 {
            return Some((FlatPosition::Header { section: ordinal }, section));
        }
        if position < span {
            let located = FlatPosition::Item {
                section: ordinal,
                index: position - 1,
            };
            return Some((located, section));
        }

        position -= span;
    }

    tracing::trace!(target: targets::SECTIONS, remaining = position, "position past the last section");
    None
}

impl<C: ViewContainer> ListAdapter<C> for SeparatedListAdapter<C> {
    fn count(&self) -> usize {
        self.sections.read().iter().map(Section::span).sum()
    }

    fn item(&self, position: usize) -> ItemData {
        let sections = self.sections.read();
        match locate_in(&sections, position) {
            Some((FlatPosition::Header { .. }, section)) => ItemData::from(section.name.as_str()),
            Some((FlatPosition::Item { index, .. }, section)) => section.adapter.item(index),
            None => ItemData::None,
        }
    }

    fn item_id(&self, position: usize) -> Option<i64> {
        let sections = self.sections.read();
        match locate_in(&sections, position)? {
            (FlatPosition::Header { .. }, _) => Some(HEADER_ITEM_ID),
            (FlatPosition::Item { index, .. }, section) => section.adapter.item_id(index),
        }
    }

    fn view_for_item(
        &self,
        position: usize,
        recycled: Option<C::View>,
        container: &mut C,
    ) -> AdapterResult<Option<C::View>> {
        let sections = self.sections.read();
        match locate_in(&sections, position) {
            // Headers are looked up by section ordinal, not flat position.
            Some((FlatPosition::Header { section }, _)) => {
                self.headers.view_for_item(section, recycled, container)
            }
            Some((FlatPosition::Item { index, .. }, section)) => {
                section.adapter.view_for_item(index, recycled, container)
            }
            None => Ok(None),
        }
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    fn is_empty(&self) -> bool {
        self.sections
            .read()
            .iter()
            .all(|section| section.adapter.is_empty())
    }

    /// Header ids all collide at [`HEADER_ITEM_ID`].
    fn has_stable_ids(&self) -> bool {
        false
    }

    /// One shared header type plus every child's types, empty children
    /// included.
    fn view_type_count(&self) -> usize {
        1 + self
            .sections
            .read()
            .iter()
            .map(|section| section.adapter.view_type_count())
            .sum::<usize>()
    }

    fn item_view_type(&self, position: usize) -> Option<usize> {
        let sections = self.sections.read();
        let (located, _) = locate_in(&sections, position)?;
        let FlatPosition::Item { section, index } = located else {
            return Some(HEADER_VIEW_TYPE);
        };

        let offset = 1 + sections[..section]
            .iter()
            .map(|prior| prior.adapter.view_type_count())
            .sum::<usize>();
        sections[section]
            .adapter
            .item_view_type(index)
            .map(|child_type| offset + child_type)
    }

    /// Headers are never enabled.
    fn are_all_items_enabled(&self) -> bool {
        false
    }

    fn is_enabled(&self, position: usize) -> bool {
        let sections = self.sections.read();
        match locate_in(&sections, position) {
            Some((FlatPosition::Item { index, .. }, section)) => section.adapter.is_enabled(index),
            Some((FlatPosition::Header { .. }, _)) | None => false,
        }
    }
}

impl<C: ViewContainer> Drop for SeparatedListAdapter<C> {
    fn drop(&mut self) {
        for section in self.sections.get_mut().iter() {
            if let Some(forwarding) = &section.forwarding {
                forwarding.disconnect_from(section.adapter.as_ref());
            }
        }
    }
}
