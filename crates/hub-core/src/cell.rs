use crate::store::Store;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A persistent value bound to one storage key.
///
/// The value is read once at construction: the stored document when present
/// and decodable, the caller's default otherwise. From then on the in-memory
/// copy is authoritative and every mutation is written straight back through
/// the store. A failed persist keeps the in-memory value so the session stays
/// usable; only durability is lost.
pub struct StateCell<'s, T> {
    store: &'s Store,
    key: &'static str,
    value: T,
}

impl<'s, T> StateCell<'s, T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn load(store: &'s Store, key: &'static str, default: T) -> Self {
        let value = store.get(key, default);
        Self { store, key, value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, next: T) {
        self.value = next;
        self.store.set(self.key, &self.value);
    }

    /// Mutate in place, then persist the result.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.store.set(self.key, &self.value);
    }
}
