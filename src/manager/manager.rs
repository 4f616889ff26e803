use std::collections::HashMap;
use std::sync::{
    Arc,
    PoisonError,
    RwLock
};

use log::debug;

use super::managererror::{
    ManagerError,
    parse_json_value
};
use super::namedobject::NamedJsonObject;

/// Registry of named, shareable objects built from JSON.
///
/// Each JSON object must carry a `name`; the rest of it is handed to the
/// builder function the manager was created with.
pub struct Manager<V: ?Sized> {
    map_lock: RwLock<HashMap<String, Arc<V>>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<Arc<V>, ManagerError>
}

impl<V: ?Sized> Manager<V> {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<Arc<V>, ManagerError>) -> Manager<V> {
        Manager {
            map_lock: RwLock::new(HashMap::new()),
            get_obj_from_json
        }
    }

    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        let map = self.map_lock.read().unwrap_or_else(PoisonError::into_inner);
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        let map = self.map_lock.read().unwrap_or_else(PoisonError::into_inner);
        map.contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        let map = self.map_lock.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn insert(&self, name: String, value: Arc<V>) {
        let mut map = self.map_lock.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(name, value);
    }

    pub fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let value = (self.get_obj_from_json)(json_value)?;
        debug!("registered '{}'", named_object.name());
        self.insert(named_object.name().to_owned(), value);
        Ok(())
    }

    pub fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for json_value in json_vec {
            self.insert_obj_from_json(json_value.clone())?;
        }
        Ok(())
    }
}
