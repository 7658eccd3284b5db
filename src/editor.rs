//! Editor state: the ordered list of editable rows and its mutations.
//!
//! `ParamList` holds the plain data and is what the tests exercise.
//! `ParamEditor` wraps it in a signal so the views re-render after each
//! mutation; the app shell creates one and hands it down via context.

use leptos::prelude::*;

use crate::error::EditorError;
use crate::logging;
use crate::model::{EditorParam, Model, Param, ParamId};

/// Rows in insertion order, ids unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList {
    rows: Vec<EditorParam>,
}

impl ParamList {
    /// Join the catalog with its seed values. Catalog entries without a
    /// value produce no row; values for unknown ids are ignored.
    pub fn initialize(params: &[Param], model: &Model) -> Self {
        let rows = params
            .iter()
            .filter_map(|param| {
                model
                    .value_for(param.id)
                    .map(|value| EditorParam::from_param(param, value))
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[EditorParam] {
        &self.rows
    }

    pub fn get(&self, id: ParamId) -> Option<&EditorParam> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn contains(&self, id: ParamId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn max_id(&self) -> Option<ParamId> {
        self.rows.iter().map(|row| row.id).max()
    }

    /// Append `row`. A row whose id is already present is refused.
    pub fn add(&mut self, row: EditorParam) -> Result<(), EditorError> {
        if self.contains(row.id) {
            return Err(EditorError::DuplicateId(row.id));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Replace the value of row `id`. Returns false if there is no such row.
    pub fn update(&mut self, id: ParamId, value: impl Into<String>) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Remove row `id`. Returns false if there is no such row.
    pub fn delete(&mut self, id: ParamId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }
}

/// Hands out row ids for new parameters.
///
/// Ids only grow, so an id freed by a delete is never handed out again.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: ParamId,
}

impl IdGenerator {
    /// Start right after `max_id` (or at 1 for an empty list).
    pub fn after(max_id: Option<ParamId>) -> Self {
        Self {
            next: max_id.map_or(1, |id| id.saturating_add(1)),
        }
    }

    pub fn next_id(&mut self) -> ParamId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    /// Skip past an id that was assigned elsewhere.
    pub fn observe(&mut self, id: ParamId) {
        if id >= self.next {
            self.next = id.saturating_add(1);
        }
    }
}

/// Reactive handle over the row list. `Copy`, so closures can capture it
/// freely.
#[derive(Clone, Copy)]
pub struct ParamEditor {
    rows: RwSignal<ParamList>,
    ids: StoredValue<IdGenerator>,
}

impl ParamEditor {
    pub fn new(params: &[Param], model: &Model) -> Self {
        let list = ParamList::initialize(params, model);
        log::info!(
            "Editor initialized with {} of {} catalog parameters",
            list.len(),
            params.len()
        );
        let ids = IdGenerator::after(list.max_id());
        Self {
            rows: RwSignal::new(list),
            ids: StoredValue::new(ids),
        }
    }

    /// Current rows, tracked.
    pub fn params(&self) -> Vec<EditorParam> {
        self.rows.with(|list| list.rows().to_vec())
    }

    /// Current value of row `id`, tracked.
    pub fn value_of(&self, id: ParamId) -> Option<String> {
        self.rows.with(|list| list.get(id).map(|row| row.value.clone()))
    }

    pub fn next_id(&self) -> ParamId {
        let mut id = 0;
        self.ids.update_value(|ids| id = ids.next_id());
        id
    }

    pub fn add(&self, row: EditorParam) {
        let id = row.id;
        self.ids.update_value(|ids| ids.observe(id));

        let mut result = Ok(());
        self.rows.maybe_update(|list| {
            result = list.add(row);
            result.is_ok()
        });
        match result {
            Ok(()) => log::debug!("Added parameter {}", id),
            Err(e) => log::warn!("Add refused: {}", e),
        }
    }

    pub fn update(&self, id: ParamId, value: String) {
        let mut changed = false;
        self.rows.maybe_update(|list| {
            changed = list.update(id, value);
            changed
        });
        if !changed {
            log::debug!("Update ignored, no parameter {}", id);
        }
    }

    pub fn delete(&self, id: ParamId) {
        let mut removed = false;
        self.rows.maybe_update(|list| {
            removed = list.delete(id);
            removed
        });
        if removed {
            log::debug!("Deleted parameter {}", id);
        } else {
            log::debug!("Delete ignored, no parameter {}", id);
        }
    }

    /// Write the current rows to the console. Does not track.
    pub fn dump(&self) {
        self.rows.with_untracked(|list| logging::dump_params(list.rows()));
    }
}
