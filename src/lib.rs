pub mod configuration;

pub mod calendar {
    pub mod calendarerror;
    pub mod period;
    pub mod season;
    pub mod computus;
    pub mod churchcalendar;
    pub mod westernchurchcalendar;
    pub mod dayname;
    pub mod churchcalendarmanager;
}

pub mod lectionary {
    pub mod lectionary;
    pub mod commonworshiplectionary;
    pub mod lectionarymanager;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod text {
    pub mod ordinal;
}
