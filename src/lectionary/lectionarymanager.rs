use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};

use super::commonworshiplectionary::CommonWorshipLectionary;
use super::lectionary::Lectionary;

#[derive(Deserialize)]
enum LectionaryType {
    CommonWorship
}

#[derive(Deserialize)]
struct LectionaryTypedObject {
    lectionary_type: LectionaryType
}

fn get_lectionary_from_json(json_value: serde_json::Value) -> Result<Arc<dyn Lectionary>, ManagerError> {
    let typed_object: LectionaryTypedObject = parse_json_value(json_value)?;
    let lectionary: Arc<dyn Lectionary> = match typed_object.lectionary_type {
        LectionaryType::CommonWorship => Arc::new(CommonWorshipLectionary::new())
    };
    Ok(lectionary)
}

pub struct LectionaryManager;

impl LectionaryManager {
    pub fn new() -> Manager<dyn Lectionary> {
        Manager::new(get_lectionary_from_json)
    }
}
