use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};

use super::churchcalendar::ChurchCalendar;
use super::westernchurchcalendar::WesternChurchCalendar;

#[derive(Deserialize)]
enum CalendarType {
    Western
}

#[derive(Deserialize)]
struct CalendarTypedObject {
    calendar_type: CalendarType
}

fn get_church_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn ChurchCalendar>, ManagerError> {
    let typed_object: CalendarTypedObject = parse_json_value(json_value)?;
    let calendar: Arc<dyn ChurchCalendar> = match typed_object.calendar_type {
        CalendarType::Western => Arc::new(WesternChurchCalendar::new())
    };
    Ok(calendar)
}

pub struct ChurchCalendarManager;

impl ChurchCalendarManager {
    pub fn new() -> Manager<dyn ChurchCalendar> {
        Manager::new(get_church_calendar_from_json)
    }
}
