use std::collections::HashSet;
use uuid::Uuid;

use crate::domain::contact::{Contact, ContactFields};
use crate::domain::identity::Identity;
use crate::domain::notification::Notification;

/// Editable copy of a contact's fields. `target` is `None` for a new contact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub target: Option<Uuid>,
    pub fields: ContactFields,
    pub saving: bool,
}

impl Draft {
    pub fn for_contact(contact: &Contact) -> Self {
        Self {
            target: Some(contact.id),
            fields: contact.fields(),
            saving: false,
        }
    }

    pub fn can_save(&self) -> bool {
        !self.saving && self.fields.has_name()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub total: usize,
    pub with_phone: usize,
    pub with_address: usize,
}

impl ContactStats {
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        Self {
            total: contacts.len(),
            with_phone: contacts.iter().filter(|c| c.has_phone()).count(),
            with_address: contacts.iter().filter(|c| c.has_address()).count(),
        }
    }
}

/// Everything the dashboard renders, taken from one consistent state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct BookView {
    pub identity: Identity,
    pub contacts: Vec<Contact>,
    pub visible: Vec<Contact>,
    pub stats: ContactStats,
    pub adding: bool,
    pub new_draft: Draft,
    pub edit_draft: Option<Draft>,
    pub deleting: HashSet<Uuid>,
    pub signing_out: bool,
    pub search_raw: String,
    pub search: String,
    pub toast: Option<Notification>,
}

impl BookView {
    pub fn count_label(&self) -> String {
        count_label(self.stats.total)
    }

    /// Heading above the grid: result count while searching, otherwise "All People".
    pub fn results_heading(&self) -> String {
        if self.search.is_empty() {
            return "All People".to_string();
        }
        let n = self.visible.len();
        format!(
            "{} result{} for \"{}\"",
            n,
            if n != 1 { "s" } else { "" },
            self.search
        )
    }

    /// Title and hint for an empty grid.
    pub fn empty_state(&self) -> (&'static str, &'static str) {
        if self.search.is_empty() {
            ("No contacts yet", "Tap + to add your first contact")
        } else {
            ("No matches found", "Try a different search term")
        }
    }

    pub fn is_deleting(&self, id: Uuid) -> bool {
        self.deleting.contains(&id)
    }

    pub fn is_editing(&self, id: Uuid) -> bool {
        self.edit_draft
            .as_ref()
            .is_some_and(|d| d.target == Some(id))
    }

    pub fn can_save_new(&self) -> bool {
        self.new_draft.can_save()
    }

    pub fn can_save_edit(&self) -> bool {
        self.edit_draft.as_ref().is_some_and(Draft::can_save)
    }
}

pub fn count_label(total: usize) -> String {
    match total {
        0 => "No contacts yet".to_string(),
        1 => "1 person saved".to_string(),
        n => format!("{} people saved", n),
    }
}
