use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

const AVATAR_COLORS: [&str; 8] = [
    "#C8B8E8", "#B8D4C8", "#E8C8B8", "#B8C8E8",
    "#E8D4B8", "#C8E8D4", "#E8B8C8", "#D4C8E8",
];

/// A persisted address-book entry owned by exactly one identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// The editable part of a contact, as typed into a form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Address,
}

impl Contact {
    /// Builds a record the way a backend does on insert: fresh id, current timestamp.
    pub fn new(user_id: Uuid, fields: ContactFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: fields.name,
            phone: fields.phone,
            address: fields.address,
            created_at: Utc::now(),
        }
    }

    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }

    /// Overwrites the editable fields, keeping id, owner and creation time.
    pub fn apply(&mut self, fields: ContactFields) {
        self.name = fields.name;
        self.phone = fields.phone;
        self.address = fields.address;
    }

    pub fn has_phone(&self) -> bool {
        has_value(&self.phone)
    }

    pub fn has_address(&self) -> bool {
        has_value(&self.address)
    }

    pub fn has_details(&self) -> bool {
        self.has_phone() || self.has_address()
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    pub fn avatar_color(&self) -> &'static str {
        avatar_color(&self.name)
    }
}

impl ContactFields {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Address => self.address = value,
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }

    pub fn has_name(&self) -> bool {
        has_value(&self.name)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn has_value(s: &str) -> bool {
    !s.trim().is_empty()
}

/// First letter of up to two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

pub fn avatar_color(name: &str) -> &'static str {
    let code = name.chars().next().map(|c| c as usize).unwrap_or(0);
    AVATAR_COLORS[code % AVATAR_COLORS.len()]
}

// PostgREST returns null for unset text columns.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contact() {
        let owner = Uuid::new_v4();
        let contact = Contact::new(owner, ContactFields::new("Jane Smith", "", "12 Elm St"));

        assert_eq!(contact.user_id, owner);
        assert_eq!(contact.name, "Jane Smith");
        assert!(!contact.has_phone());
        assert!(contact.has_address());
        assert!(contact.has_details());
    }

    #[test]
    fn test_trimmed_fields() {
        let fields = ContactFields::new("  Ann  ", " 111 ", "\tMain St\n");
        let trimmed = fields.trimmed();

        assert_eq!(trimmed, ContactFields::new("Ann", "111", "Main St"));
        assert!(!ContactFields::new("   ", "1", "").has_name());
    }

    #[test]
    fn test_set_field() {
        let mut fields = ContactFields::default();
        fields.set(Field::Phone, "555-0100");
        fields.set(Field::Name, "Jane");

        assert_eq!(fields.get(Field::Phone), "555-0100");
        assert_eq!(fields.get(Field::Name), "Jane");
        assert_eq!(fields.get(Field::Address), "");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("marcus  rivera smith"), "MR");
        assert_eq!(initials("Aiko"), "A");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_avatar_color_is_stable() {
        // 'J' is 74, 74 % 8 == 2
        assert_eq!(avatar_color("Jane"), "#E8C8B8");
        assert_eq!(avatar_color("Jane"), avatar_color("Jack"));
        assert_eq!(avatar_color(""), AVATAR_COLORS[0]);
    }

    #[test]
    fn test_deserialize_null_columns() {
        let json = r#"{
            "id": "7f0c3f62-5b1e-4d5e-9a55-2b7f3d0e1a11",
            "user_id": "0b8f1c1e-2a43-4d7b-8d2c-54b1f1d6b0aa",
            "name": "Ben",
            "phone": null,
            "address": "Main St",
            "created_at": "2024-05-01T10:00:00Z"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();

        assert_eq!(contact.phone, "");
        assert_eq!(contact.address, "Main St");
    }
}
