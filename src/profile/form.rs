//! Profile form controller
//!
//! Loads the saved record into a form and saves the form back as a fresh
//! record. Load problems are logged and otherwise ignored; save problems
//! are reported to the user.

use serde::Serialize;

use super::error::ProfileResult;
use super::record::ProfileRecord;
use super::storage::KeyValueStorage;

/// Storage key of the profile record
pub const DEFAULT_PROFILE_KEY: &str = "ebook_profile";

/// Message shown after a successful save
pub const SAVED_MESSAGE: &str = "Profile saved locally (demo).";

/// Message shown when saving fails
pub const SAVE_FAILED_MESSAGE: &str = "Could not save profile in this browser.";

/// A named input of the profile form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    /// HTML input type (`text`, `email`, `tel`, ...)
    pub kind: &'static str,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: &'static str) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            value: String::new(),
        }
    }
}

/// The profile form: an ordered set of named fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileForm {
    fields: Vec<FormField>,
}

impl ProfileForm {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// The fields shown on the demo profile page
    pub fn standard() -> Self {
        Self::new(vec![
            FormField::new("full_name", "Full name", "text"),
            FormField::new("phone", "Phone", "tel"),
            FormField::new("email", "Email", "email"),
            FormField::new("business_name", "Business name", "text"),
            FormField::new("business_type", "Business type", "text"),
            FormField::new("city", "City", "text"),
        ])
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Set a field's value. Returns false when no field has that name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Copy record values into matching fields; unknown keys are skipped
    pub fn apply(&mut self, record: &ProfileRecord) -> usize {
        record
            .iter()
            .filter(|(name, value)| self.set(name, *value))
            .count()
    }

    /// Snapshot every named field into a new record
    pub fn collect(&self) -> ProfileRecord {
        self.fields
            .iter()
            .filter(|f| !f.name.is_empty())
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::standard()
    }
}

/// Feedback shown after a save attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum SaveFeedback {
    /// Dismissible notification
    Toast(String),
    /// Blocking alert
    Alert(String),
}

impl SaveFeedback {
    /// Pick the feedback for a save result
    pub fn for_result<T>(result: &ProfileResult<T>, toast_available: bool) -> Self {
        match result {
            Ok(_) if toast_available => SaveFeedback::Toast(SAVED_MESSAGE.to_string()),
            Ok(_) => SaveFeedback::Alert(SAVED_MESSAGE.to_string()),
            Err(e) => SaveFeedback::Alert(format!("{} ({})", SAVE_FAILED_MESSAGE, e)),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SaveFeedback::Toast(m) | SaveFeedback::Alert(m) => m,
        }
    }
}

/// Reads and writes the profile record under one storage key
#[derive(Debug)]
pub struct ProfileStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> ProfileStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_PROFILE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored record, `Ok(None)` if nothing was saved yet
    pub fn read(&self) -> ProfileResult<Option<ProfileRecord>> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => ProfileRecord::from_json(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Fill the form from storage, returning the number of fields set.
    ///
    /// On error the form is left untouched.
    pub fn try_load_into(&self, form: &mut ProfileForm) -> ProfileResult<usize> {
        let applied = match self.read()? {
            Some(record) => form.apply(&record),
            None => 0,
        };
        tracing::debug!(key = %self.key, applied, "loaded profile");
        Ok(applied)
    }

    /// Like [`try_load_into`](Self::try_load_into), but failures are only
    /// logged and count as nothing loaded.
    pub fn load_into(&self, form: &mut ProfileForm) -> usize {
        self.try_load_into(form).unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, "Could not load profile from storage: {}", e);
            0
        })
    }

    /// Replace the stored record with the form's current values
    pub fn save(&self, form: &ProfileForm) -> ProfileResult<ProfileRecord> {
        let record = form.collect();
        self.storage.set_item(&self.key, &record.to_json()?)?;
        tracing::info!(key = %self.key, fields = record.len(), "saved profile");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{MemoryStorage, ProfileError};

    #[test]
    fn test_save_then_load_round_trip() {
        let storage = MemoryStorage::new();
        let store = ProfileStore::new(&storage);

        let mut form = ProfileForm::standard();
        form.set("full_name", "Dilnoza Karimova");
        form.set("phone", "+998 90 000 00 00");
        form.set("city", "Samarkand");
        store.save(&form).unwrap();

        let mut reloaded = ProfileForm::standard();
        assert_eq!(store.load_into(&mut reloaded), 6);
        assert_eq!(reloaded, form);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let storage = MemoryStorage::new().with_item(
            DEFAULT_PROFILE_KEY,
            r#"{"legacy_field":"old","city":"Bukhara"}"#,
        );
        let store = ProfileStore::new(&storage);

        let form = ProfileForm::new(vec![FormField::new("city", "City", "text")]);
        store.save(&form).unwrap();

        let record = store.read().unwrap().unwrap();
        assert_eq!(record.get("legacy_field"), None);
        assert_eq!(record.get("city"), Some(""));
    }

    #[test]
    fn test_load_skips_unknown_keys() {
        let storage = MemoryStorage::new()
            .with_item(DEFAULT_PROFILE_KEY, r#"{"city":"Khiva","shoe_size":"42"}"#);
        let store = ProfileStore::new(&storage);

        let mut form = ProfileForm::standard();
        assert_eq!(store.load_into(&mut form), 1);
        assert_eq!(form.value("city"), Some("Khiva"));
        assert_eq!(form.value("shoe_size"), None);
    }

    #[test]
    fn test_malformed_storage_leaves_defaults() {
        let storage = MemoryStorage::new().with_item(DEFAULT_PROFILE_KEY, "{broken");
        let store = ProfileStore::new(&storage);

        let mut form = ProfileForm::standard();
        assert_eq!(store.load_into(&mut form), 0);
        assert_eq!(form, ProfileForm::standard());
        assert!(matches!(store.read(), Err(ProfileError::Malformed(_))));
    }

    struct Unreadable;

    impl KeyValueStorage for Unreadable {
        fn get_item(&self, _key: &str) -> ProfileResult<Option<String>> {
            Err(ProfileError::Storage("access denied".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> ProfileResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unreadable_storage_leaves_defaults() {
        let store = ProfileStore::new(Unreadable);

        let mut form = ProfileForm::standard();
        assert_eq!(store.load_into(&mut form), 0);
        assert_eq!(form, ProfileForm::standard());

        match store.try_load_into(&mut form) {
            Err(ProfileError::Storage(msg)) => assert_eq!(msg, "access denied"),
            other => panic!("expected storage error, got {:?}", other),
        }
        assert_eq!(form, ProfileForm::standard());
    }

    #[test]
    fn test_numeric_values_fill_fields() {
        let storage = MemoryStorage::new()
            .with_item(DEFAULT_PROFILE_KEY, r#"{"city":"Khiva","phone":998901234567}"#);
        let store = ProfileStore::new(&storage);

        let mut form = ProfileForm::standard();
        assert_eq!(store.load_into(&mut form), 2);
        assert_eq!(form.value("city"), Some("Khiva"));
        assert_eq!(form.value("phone"), Some("998901234567"));
    }

    #[test]
    fn test_missing_record_is_not_an_error() {
        let store = ProfileStore::new(MemoryStorage::new());
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_failed_save_reports_alert() {
        let store = ProfileStore::new(MemoryStorage::read_only());
        let mut form = ProfileForm::standard();
        form.set("full_name", "Kept");

        let result = store.save(&form);
        assert!(result.is_err());
        assert_eq!(form.value("full_name"), Some("Kept"));

        match SaveFeedback::for_result(&result, true) {
            SaveFeedback::Alert(msg) => {
                assert!(msg.starts_with(SAVE_FAILED_MESSAGE));
                assert!(msg.contains("read-only"));
            }
            other => panic!("expected alert, got {:?}", other),
        }
    }

    #[test]
    fn test_success_feedback() {
        let ok: ProfileResult<()> = Ok(());
        assert_eq!(
            SaveFeedback::for_result(&ok, true),
            SaveFeedback::Toast(SAVED_MESSAGE.to_string())
        );
        assert_eq!(
            SaveFeedback::for_result(&ok, false),
            SaveFeedback::Alert(SAVED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let store = ProfileStore::with_key(&storage, "tenant_profile");
        store.save(&ProfileForm::standard()).unwrap();

        assert!(storage.get_item("tenant_profile").unwrap().is_some());
        assert!(storage.get_item(DEFAULT_PROFILE_KEY).unwrap().is_none());
    }
}
