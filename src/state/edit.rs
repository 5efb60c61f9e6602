//! Inline edit session.
//!
//! Holds a scratch copy of one record. The session is keyed by the id the
//! record had when editing began, so editing the `id` field renames the
//! record on commit.

use crate::model::{Record, RecordField, RecordId};
use crate::state::TextInput;

/// One in-progress record edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    target: RecordId,
    draft: Record,
    field: RecordField,
    input: TextInput,
}

impl EditSession {
    /// Start editing `record`. The draft is a full copy, extras included.
    pub fn begin(record: Record) -> Self {
        let field = RecordField::Name;
        let input = TextInput::new(field_value(&record, field));
        Self {
            target: record.id.clone(),
            draft: record,
            field,
            input,
        }
    }

    /// Id of the record being edited, as it was when editing began.
    pub fn target(&self) -> &RecordId {
        &self.target
    }

    /// Scratch record reflecting every change so far.
    pub fn draft(&self) -> &Record {
        &self.draft
    }

    /// Field receiving keystrokes.
    pub fn active_field(&self) -> RecordField {
        self.field
    }

    /// Text input of the active field.
    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Overwrite one draft field. No validation.
    pub fn update_field(&mut self, field: RecordField, value: impl Into<String>) {
        let value = value.into();
        if field == self.field {
            self.input.set(value.clone());
        }
        set_field_value(&mut self.draft, field, value);
    }

    /// Switch keystrokes to `field`, cursor at its end.
    pub fn focus_field(&mut self, field: RecordField) {
        self.field = field;
        self.input = TextInput::new(field_value(&self.draft, field));
    }

    /// Move to the next field, wrapping.
    pub fn next_field(&mut self) {
        self.focus_field(self.field.next());
    }

    /// Move to the previous field, wrapping.
    pub fn prev_field(&mut self) {
        self.focus_field(self.field.prev());
    }

    /// Apply a text-input transition to the active field.
    pub fn edit_active(&mut self, apply: impl FnOnce(&mut TextInput)) {
        apply(&mut self.input);
        set_field_value(&mut self.draft, self.field, self.input.text().to_string());
    }

    /// Consume the session, yielding `(original id, replacement record)`.
    pub fn finish(self) -> (RecordId, Record) {
        (self.target, self.draft)
    }
}

/// Current text of `field` in `record`.
pub fn field_value(record: &Record, field: RecordField) -> String {
    match field {
        RecordField::Id => record.id.as_str().to_string(),
        RecordField::Name => record.name.clone(),
        RecordField::Email => record.email.clone(),
    }
}

fn set_field_value(record: &mut Record, field: RecordField, value: String) {
    match field {
        RecordField::Id => record.id = RecordId::new(value),
        RecordField::Name => record.name = value,
        RecordField::Email => record.email = value,
    }
}
