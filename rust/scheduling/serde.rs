use crate::json::JSON;
use crate::scheduling::{BusinessCalendar, BusinessDayConvention, DateSpecification};

impl JSON for DateSpecification {}
impl JSON for BusinessCalendar {}
impl JSON for BusinessDayConvention {}
