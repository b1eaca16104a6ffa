//! Saving and restoring the service session across runs.
//!
//! Only the session handle is persisted. The source image and all derived
//! state stay with the service, which can re-run detection for a restored
//! session on demand.

use eframe::Storage;

use crate::service::SessionHandle;

const SESSION_KEY: &str = "gridshot.session";

#[must_use]
pub(crate) fn load_session(storage: &dyn Storage) -> Option<SessionHandle> {
    eframe::get_value::<Option<SessionHandle>>(storage, SESSION_KEY).flatten()
}

pub(crate) fn save_session(storage: &mut dyn Storage, session: Option<&SessionHandle>) {
    eframe::set_value(storage, SESSION_KEY, &session);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemStorage {
        values: HashMap<String, String>,
    }

    impl Storage for MemStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn session_round_trips() {
        let mut storage = MemStorage::default();
        let session = SessionHandle::new("abc123");

        save_session(&mut storage, Some(&session));

        assert_eq!(load_session(&storage), Some(session));
    }

    #[test]
    fn missing_key_loads_nothing() {
        let storage = MemStorage::default();
        assert_eq!(load_session(&storage), None);
    }

    #[test]
    fn saving_none_clears_a_previous_session() {
        let mut storage = MemStorage::default();
        save_session(&mut storage, Some(&SessionHandle::new("abc123")));

        save_session(&mut storage, None);

        assert_eq!(load_session(&storage), None);
    }
}
