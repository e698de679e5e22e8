//! Contact book
//!
//! An owned, explicitly-passed collection of contacts. All mutation goes
//! through `&mut ContactBook` methods; lookups return explicit
//! found/not-found results.

mod store;

pub use store::{load_csv, load_json, save_csv, save_json};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single address-book entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(first_name: &str, last_name: &str, phone: &str, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} {}, Phone: {}, Email: {}",
            self.first_name, self.last_name, self.phone, self.email
        )
    }
}

/// Owned collection of contacts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Append a contact to the book
    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Find the first contact matching both names
    pub fn search(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        self.contacts
            .iter()
            .find(|c| c.first_name == first_name && c.last_name == last_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Number of contacts per surname, sorted by surname
    pub fn surname_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for contact in &self.contacts {
            *counts.entry(contact.last_name.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(surname, count)| (surname.to_string(), count))
            .collect()
    }

    /// Human-readable listing of the whole book
    pub fn listing(&self) -> String {
        if self.contacts.is_empty() {
            return "Address book is empty.".to_string();
        }
        let mut out = String::from("Contacts:");
        for contact in &self.contacts {
            out.push('\n');
            out.push_str(&contact.to_string());
        }
        out
    }
}
