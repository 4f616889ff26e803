use super::lectionary::{
    CycleYear,
    Lectionary
};

const SUNDAY_CYCLE_EPOCH: i32 = 2001;
const SUNDAY_CYCLE_LENGTH: i32 = 3;
const WEEKDAY_CYCLE_EPOCH: i32 = 2000;
const WEEKDAY_CYCLE_LENGTH: i32 = 2;

/// Common Worship: three-year Sunday cycle (A, B, C) with 2001 as a year A,
/// two-year weekday cycle with 2000 as a year 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonWorshipLectionary;

impl CommonWorshipLectionary {
    pub fn new() -> CommonWorshipLectionary {
        CommonWorshipLectionary
    }
}

impl Lectionary for CommonWorshipLectionary {
    fn cyclic_year(&self, year: i32) -> CycleYear {
        let sunday = (year - SUNDAY_CYCLE_EPOCH).rem_euclid(SUNDAY_CYCLE_LENGTH);
        let weekday = (year - WEEKDAY_CYCLE_EPOCH).rem_euclid(WEEKDAY_CYCLE_LENGTH);
        CycleYear::new(sunday as u32, weekday as u32)
    }
}
