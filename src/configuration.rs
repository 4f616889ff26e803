use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::calendar::churchcalendar::ChurchCalendar;
use crate::calendar::churchcalendarmanager::ChurchCalendarManager;
use crate::calendar::westernchurchcalendar::WesternChurchCalendar;
use crate::lectionary::commonworshiplectionary::CommonWorshipLectionary;
use crate::lectionary::lectionary::Lectionary;
use crate::lectionary::lectionarymanager::LectionaryManager;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;

pub const DEFAULT_CALENDAR: &str = "Western";
pub const DEFAULT_LECTIONARY: &str = "CommonWorship";

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    calendar: Vec<serde_json::Value>,
    #[serde(default)]
    lectionary: Vec<serde_json::Value>
}

/// Named calendars and lectionaries available to an application.
///
/// ```json
/// {
///     "calendar": [ { "name": "Western", "calendar_type": "Western" } ],
///     "lectionary": [ { "name": "CommonWorship", "lectionary_type": "CommonWorship" } ]
/// }
/// ```
pub struct Configuration {
    calendar_manager: Manager<dyn ChurchCalendar>,
    lectionary_manager: Manager<dyn Lectionary>
}

impl Configuration {
    /// An empty configuration; populate it with [`Configuration::from_reader`].
    pub fn new() -> Configuration {
        Configuration {
            calendar_manager: ChurchCalendarManager::new(),
            lectionary_manager: LectionaryManager::new()
        }
    }

    /// A configuration with the Western calendar and the Common Worship
    /// lectionary registered under their default names.
    pub fn with_defaults() -> Configuration {
        let config = Configuration::new();
        config.calendar_manager.insert(DEFAULT_CALENDAR.to_owned(), Arc::new(WesternChurchCalendar::new()));
        config.lectionary_manager.insert(DEFAULT_LECTIONARY.to_owned(), Arc::new(CommonWorshipLectionary::new()));
        config
    }

    pub fn calendar_manager(&self) -> &Manager<dyn ChurchCalendar> {
        &self.calendar_manager
    }

    pub fn lectionary_manager(&self) -> &Manager<dyn Lectionary> {
        &self.lectionary_manager
    }

    pub fn calendar(&self, name: &str) -> Result<Arc<dyn ChurchCalendar>, ManagerError> {
        self.calendar_manager.get(name)
    }

    pub fn lectionary(&self, name: &str) -> Result<Arc<dyn Lectionary>, ManagerError> {
        self.lectionary_manager.get(name)
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file_path = file_path.as_ref();
        debug!("loading configuration from {}", file_path.display());
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.from_json_prop(json_prop)
    }

    pub fn from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        self.from_json_prop(json_prop)
    }

    fn from_json_prop(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        self.calendar_manager.insert_obj_from_json_vec(&json_prop.calendar)?;
        self.lectionary_manager.insert_obj_from_json_vec(&json_prop.lectionary)?;
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::with_defaults()
    }
}
