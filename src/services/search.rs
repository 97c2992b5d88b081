use crate::domain::contact::Contact;

/// Contacts matching `query`, in list order.
///
/// Name and address match case-insensitively; phone numbers match on the raw
/// substring. A blank query matches everything.
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    if query.trim().is_empty() {
        return contacts.iter().collect();
    }

    let lowered = query.to_lowercase();
    contacts
        .iter()
        .filter(|c| matches_query(c, query, &lowered))
        .collect()
}

fn matches_query(contact: &Contact, raw: &str, lowered: &str) -> bool {
    contact.name.to_lowercase().contains(lowered)
        || (!contact.phone.is_empty() && contact.phone.contains(raw))
        || (!contact.address.is_empty() && contact.address.to_lowercase().contains(lowered))
}

/// Query text as typed, and the value last applied after the input settled.
#[derive(Debug, Clone, Default)]
pub struct DebouncedQuery {
    raw: String,
    applied: String,
    generation: u64,
}

impl DebouncedQuery {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn applied(&self) -> &str {
        &self.applied
    }

    /// Records a keystroke. Returns the ticket that must be settled to apply it.
    pub fn input(&mut self, raw: impl Into<String>) -> u64 {
        self.raw = raw.into();
        self.generation += 1;
        self.generation
    }

    /// Applies the raw text if no newer input arrived since `generation`.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.applied == self.raw {
            return false;
        }
        self.applied = self.raw.clone();
        true
    }
}
