//! Form session - the add/edit form
//!
//! At most one session exists at a time (`AppModel::form`). A session either
//! creates a new row or is bound to exactly one existing row.

use super::input::{InputEdit, TextInput};
use super::layout::ColumnCount;
use super::list::RowId;

/// What a submit will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    /// Append a new row
    Create,
    /// Overwrite the fields of an existing row
    Edit(RowId),
}

#[derive(Debug, Clone)]
pub struct FormSession {
    pub target: FormTarget,
    inputs: Vec<TextInput>,
    focused: usize,
}

impl FormSession {
    /// Open for create: one empty input per column
    pub fn create(columns: ColumnCount) -> Self {
        Self::with_values(FormTarget::Create, &[], columns)
    }

    /// Open for edit, pre-filled from the row's current values
    ///
    /// Values beyond the column count are not shown; missing values are empty.
    pub fn edit(row: RowId, existing: &[String], columns: ColumnCount) -> Self {
        Self::with_values(FormTarget::Edit(row), existing, columns)
    }

    fn with_values(target: FormTarget, existing: &[String], columns: ColumnCount) -> Self {
        let inputs = (0..columns.get())
            .map(|i| {
                let value = existing.get(i).cloned().unwrap_or_default();
                TextInput::with_text(value, format!("Column {}", i + 1))
            })
            .collect();
        Self {
            target,
            inputs,
            focused: 0,
        }
    }

    #[inline]
    pub fn inputs(&self) -> &[TextInput] {
        &self.inputs
    }

    #[inline]
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Bound row, if editing
    pub fn editing(&self) -> Option<RowId> {
        match self.target {
            FormTarget::Edit(id) => Some(id),
            FormTarget::Create => None,
        }
    }

    pub fn focus(&mut self, idx: usize) {
        if idx < self.inputs.len() {
            self.focused = idx;
        }
    }

    pub fn focus_next(&mut self) {
        if !self.inputs.is_empty() {
            self.focused = (self.focused + 1) % self.inputs.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.inputs.is_empty() {
            self.focused = (self.focused + self.inputs.len() - 1) % self.inputs.len();
        }
    }

    /// Apply an edit to the focused input
    pub fn edit_focused(&mut self, edit: InputEdit) -> bool {
        match self.inputs.get_mut(self.focused) {
            Some(input) => input.apply(edit),
            None => false,
        }
    }

    /// Replace the text of one input (cursor moves to the end)
    pub fn set_value(&mut self, idx: usize, value: &str) {
        if let Some(input) = self.inputs.get_mut(idx) {
            let placeholder = input.placeholder().to_string();
            *input = TextInput::with_text(value, placeholder);
        }
    }

    /// Trimmed input values, or `None` if every value is blank
    ///
    /// An all-blank submission is ignored and the session stays open.
    pub fn submission(&self) -> Option<Vec<String>> {
        let values: Vec<String> = self
            .inputs
            .iter()
            .map(|input| input.text().trim().to_string())
            .collect();
        if values.iter().all(|v| v.is_empty()) {
            None
        } else {
            Some(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(n: u8) -> ColumnCount {
        ColumnCount::clamped(n as i64)
    }

    #[test]
    fn test_create_has_one_empty_input_per_column() {
        let form = FormSession::create(cols(3));
        assert_eq!(form.inputs().len(), 3);
        assert!(form.inputs().iter().all(|i| i.is_empty()));
        assert_eq!(form.inputs()[2].placeholder(), "Column 3");
        assert_eq!(form.editing(), None);
    }

    #[test]
    fn test_edit_prefills_and_pads_missing_values() {
        let form = FormSession::edit(RowId(7), &["x".to_string()], cols(3));
        let texts: Vec<&str> = form.inputs().iter().map(|i| i.text()).collect();
        assert_eq!(texts, vec!["x", "", ""]);
        assert_eq!(form.editing(), Some(RowId(7)));
    }

    #[test]
    fn test_edit_with_more_values_than_columns() {
        let values = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let form = FormSession::edit(RowId(1), &values, cols(2));
        assert_eq!(form.inputs().len(), 2);
        assert_eq!(form.inputs()[1].text(), "b");
    }

    #[test]
    fn test_submission_trims_values() {
        let mut form = FormSession::create(cols(2));
        form.set_value(0, "  A ");
        form.set_value(1, "B");
        assert_eq!(
            form.submission(),
            Some(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_blank_submission_is_none() {
        let mut form = FormSession::create(cols(3));
        form.set_value(1, "   ");
        assert_eq!(form.submission(), None);
    }

    #[test]
    fn test_focus_cycles() {
        let mut form = FormSession::create(cols(3));
        form.focus_prev();
        assert_eq!(form.focused(), 2);
        form.focus_next();
        assert_eq!(form.focused(), 0);
        form.focus(5);
        assert_eq!(form.focused(), 0);
    }
}
