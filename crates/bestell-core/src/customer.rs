//! # Customer
//!
//! A person (not a business) who owns orders.

use serde::Serialize;

use crate::contact::sanitize_contact;
use crate::error::CoreResult;
use crate::id::AssignOnce;
use crate::name::parse_name;
use crate::validation::validate_customer_id;

/// A person placing orders.
///
/// ## Invariants
/// - `first_name` / `last_name` are never absent, possibly empty
/// - `contacts` holds sanitized values without duplicates, in insertion order
/// - `id` never changes once assigned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: AssignOnce<u64>,
    first_name: String,
    last_name: String,
    contacts: Vec<String>,
}

impl Customer {
    /// Creates a customer from a single free-text name, e.g. `"Meyer, Eric"`.
    pub fn new(name: &str) -> Self {
        let mut customer = Customer::default();
        customer.set_name(name);
        customer
    }

    /// Customer id, `None` while unassigned.
    pub fn id(&self) -> Option<u64> {
        self.id.get().copied()
    }

    /// Assigns the id once. Later calls with a valid id are ignored; a
    /// negative id is always rejected.
    pub fn set_id(&mut self, id: i64) -> CoreResult<&mut Self> {
        let id = validate_customer_id(id)?;
        self.id.assign(id);
        Ok(self)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Splits a single free-text name into first and last name and
    /// overwrites both parts.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        let parts = parse_name(name);
        self.first_name = parts.first;
        self.last_name = parts.last;
        self
    }

    /// Sets both name parts as given.
    pub fn set_name_parts(&mut self, first: &str, last: &str) -> &mut Self {
        self.first_name = first.to_string();
        self.last_name = last.to_string();
        self
    }

    pub fn contacts(&self) -> &[String] {
        &self.contacts
    }

    pub fn contacts_count(&self) -> usize {
        self.contacts.len()
    }

    /// Sanitizes and appends a contact. A contact that is already present
    /// after normalization is silently skipped.
    ///
    /// ## Example
    /// ```rust
    /// use bestell_core::Customer;
    ///
    /// let mut eric = Customer::new("Eric Meyer");
    /// eric.add_contact("eric98@yahoo.com")?
    ///     .add_contact("\"eric98@yahoo.com\";")?;
    /// assert_eq!(eric.contacts_count(), 1);
    /// # Ok::<(), bestell_core::CoreError>(())
    /// ```
    pub fn add_contact(&mut self, contact: &str) -> CoreResult<&mut Self> {
        let contact = sanitize_contact(contact)?;
        if !self.contacts.contains(&contact) {
            self.contacts.push(contact);
        }
        Ok(self)
    }

    /// Deletes the contact at position `i`; out-of-range positions are
    /// ignored.
    pub fn delete_contact(&mut self, i: usize) {
        if i < self.contacts.len() {
            self.contacts.remove(i);
        }
    }

    pub fn delete_all_contacts(&mut self) {
        self.contacts.clear();
    }
}
