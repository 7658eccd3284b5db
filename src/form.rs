//! Pending input of the add-parameter form.

use crate::model::{EditorParam, ParamId, ParamType};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingParam {
    pub kind: ParamType,
    pub name: String,
    pub value: String,
}

impl PendingParam {
    /// Switching type invalidates whatever was typed as the value.
    pub fn set_kind(&mut self, kind: ParamType) {
        self.kind = kind;
        self.value.clear();
    }

    /// True while the name or the value is blank.
    pub fn is_incomplete(&self) -> bool {
        [&self.name, &self.value]
            .iter()
            .any(|field| field.trim().is_empty())
    }

    /// Build the row to add and clear name and value. The type is kept.
    /// Returns `None` and leaves the form alone while it is incomplete.
    pub fn take(&mut self, id: ParamId) -> Option<EditorParam> {
        if self.is_incomplete() {
            return None;
        }
        let name = std::mem::take(&mut self.name);
        let value = std::mem::take(&mut self.value);
        Some(EditorParam::new(id, name, self.kind, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PendingParam {
        PendingParam {
            kind: ParamType::String,
            name: "Сезон".to_string(),
            value: "лето".to_string(),
        }
    }

    #[test]
    fn test_defaults() {
        let pending = PendingParam::default();
        assert_eq!(pending.kind, ParamType::String);
        assert!(pending.name.is_empty());
        assert!(pending.value.is_empty());
        assert!(pending.is_incomplete());
    }

    #[test]
    fn test_set_kind_clears_value_keeps_name() {
        let mut pending = filled();
        pending.set_kind(ParamType::Number);

        assert_eq!(pending.kind, ParamType::Number);
        assert_eq!(pending.name, "Сезон");
        assert!(pending.value.is_empty());
    }

    #[test]
    fn test_blank_fields_are_incomplete() {
        let mut pending = filled();
        pending.name = "   ".to_string();
        assert!(pending.is_incomplete());

        let mut pending = filled();
        pending.value = "\t".to_string();
        assert!(pending.is_incomplete());

        assert!(!filled().is_incomplete());
    }

    #[test]
    fn test_take_incomplete_returns_none() {
        let mut pending = filled();
        pending.value.clear();

        assert!(pending.take(5).is_none());
        assert_eq!(pending.name, "Сезон");
    }

    #[test]
    fn test_take_builds_row_and_resets() {
        let mut pending = filled();
        pending.set_kind(ParamType::Number);
        pending.value = "42".to_string();

        let row = pending.take(7).unwrap();
        assert_eq!(row, EditorParam::new(7, "Сезон", ParamType::Number, "42"));

        assert_eq!(pending.kind, ParamType::Number);
        assert!(pending.name.is_empty());
        assert!(pending.value.is_empty());
    }

    #[test]
    fn test_add_from_form_then_delete_round_trip() {
        use crate::editor::{IdGenerator, ParamList};
        use crate::seed;

        let seed = seed::load().unwrap();
        let original = ParamList::initialize(&seed.params, &seed.model);
        let mut list = original.clone();
        let mut ids = IdGenerator::after(list.max_id());

        let mut pending = filled();
        let row = pending.take(ids.next_id()).unwrap();
        let id = row.id;
        list.add(row).unwrap();

        assert_eq!(list.len(), 3);
        let last = &list.rows()[2];
        assert_eq!(last.name, "Сезон");
        assert_eq!(last.kind, ParamType::String);
        assert_eq!(last.value, "лето");
        assert!(!original.contains(id));

        assert!(list.delete(id));
        assert_eq!(list, original);
    }
}
