//! `example.enumerations`
//!
//! ```proto
//! enum DayOfTheWeek {
//!   UNKNOWN_DAY_OF_THE_WEEK = 0;
//!   MONDAY = 1;
//!   TUESDAY = 2;
//!   WEDNESDAY = 3;
//!   THURSDAY = 4;
//!   FRIDAY = 5;
//!   SATURDAY = 6;
//!   SUNDAY = 7;
//! }
//!
//! message EnumMessage {
//!   int64 id = 1;
//!   DayOfTheWeek day_of_the_week = 2;
//! }
//! ```

use std::fmt;

use proto_pack::encoding::{enumeration, int64};
use proto_pack::json::{fields, ObjectWriter};
use proto_pack::text_format::{self, TextWriter};
use proto_pack::{
    DecodeContext, DecodeError, Enumeration, Field, JsonMessage, Message, Reader, TextFormat,
    UnknownFields, UnmarshalOptions, WireType, Writer,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(i32)]
pub enum DayOfTheWeek {
    #[default]
    UnknownDayOfTheWeek = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl DayOfTheWeek {
    /// The seven named days, Monday first.
    pub const WEEK: [DayOfTheWeek; 7] = [
        DayOfTheWeek::Monday,
        DayOfTheWeek::Tuesday,
        DayOfTheWeek::Wednesday,
        DayOfTheWeek::Thursday,
        DayOfTheWeek::Friday,
        DayOfTheWeek::Saturday,
        DayOfTheWeek::Sunday,
    ];
}

impl Enumeration for DayOfTheWeek {
    fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(DayOfTheWeek::UnknownDayOfTheWeek),
            1 => Some(DayOfTheWeek::Monday),
            2 => Some(DayOfTheWeek::Tuesday),
            3 => Some(DayOfTheWeek::Wednesday),
            4 => Some(DayOfTheWeek::Thursday),
            5 => Some(DayOfTheWeek::Friday),
            6 => Some(DayOfTheWeek::Saturday),
            7 => Some(DayOfTheWeek::Sunday),
            _ => None,
        }
    }

    fn to_i32(self) -> i32 {
        self as i32
    }

    fn as_str_name(self) -> &'static str {
        match self {
            DayOfTheWeek::UnknownDayOfTheWeek => "UNKNOWN_DAY_OF_THE_WEEK",
            DayOfTheWeek::Monday => "MONDAY",
            DayOfTheWeek::Tuesday => "TUESDAY",
            DayOfTheWeek::Wednesday => "WEDNESDAY",
            DayOfTheWeek::Thursday => "THURSDAY",
            DayOfTheWeek::Friday => "FRIDAY",
            DayOfTheWeek::Saturday => "SATURDAY",
            DayOfTheWeek::Sunday => "SUNDAY",
        }
    }

    fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "UNKNOWN_DAY_OF_THE_WEEK" => Some(DayOfTheWeek::UnknownDayOfTheWeek),
            "MONDAY" => Some(DayOfTheWeek::Monday),
            "TUESDAY" => Some(DayOfTheWeek::Tuesday),
            "WEDNESDAY" => Some(DayOfTheWeek::Wednesday),
            "THURSDAY" => Some(DayOfTheWeek::Thursday),
            "FRIDAY" => Some(DayOfTheWeek::Friday),
            "SATURDAY" => Some(DayOfTheWeek::Saturday),
            "SUNDAY" => Some(DayOfTheWeek::Sunday),
            _ => None,
        }
    }
}

impl fmt::Display for DayOfTheWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_name())
    }
}

const ID: Field = Field::new(1, "id", "id");
const DAY_OF_THE_WEEK: Field = Field::new(2, "day_of_the_week", "dayOfTheWeek");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumMessage {
    pub id: i64,
    /// Raw enum number; values outside [`DayOfTheWeek`] are kept as is.
    pub day_of_the_week: i32,
    pub unknown_fields: UnknownFields,
}

impl EnumMessage {
    /// `None` when the stored number names no day.
    pub fn day_of_the_week(&self) -> Option<DayOfTheWeek> {
        DayOfTheWeek::from_i32(self.day_of_the_week)
    }

    pub fn set_day_of_the_week(&mut self, day: DayOfTheWeek) {
        self.day_of_the_week = day.to_i32();
    }
}

impl Message for EnumMessage {
    fn full_name(&self) -> &'static str {
        "example.enumerations.EnumMessage"
    }

    fn encode_raw(&self, writer: &mut Writer) {
        if self.id != 0 {
            int64::encode(&ID, self.id, writer);
        }
        if self.day_of_the_week != 0 {
            enumeration::encode(&DAY_OF_THE_WEEK, self.day_of_the_week, writer);
        }
        self.unknown_fields.encode(writer);
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if self.id != 0 {
            len += int64::encoded_len(&ID, self.id);
        }
        if self.day_of_the_week != 0 {
            len += enumeration::encoded_len(&DAY_OF_THE_WEEK, self.day_of_the_week);
        }
        len + self.unknown_fields.encoded_len()
    }

    fn merge_field(
        &mut self,
        number: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match number {
            1 => int64::merge(&ID, wire_type, &mut self.id, reader),
            2 => enumeration::merge(&DAY_OF_THE_WEEK, wire_type, &mut self.day_of_the_week, reader),
            _ => self
                .unknown_fields
                .merge_field(number, wire_type, reader, ctx),
        }
    }

    fn clear(&mut self) {
        *self = EnumMessage::default();
    }
}

impl JsonMessage for EnumMessage {
    fn write_json(&self, out: &mut ObjectWriter<'_>) {
        out.int64(&ID, self.id);
        out.enumeration::<DayOfTheWeek>(&DAY_OF_THE_WEEK, self.day_of_the_week);
    }

    fn merge_json_field(
        &mut self,
        key: &str,
        value: Value,
        _options: &UnmarshalOptions,
    ) -> Result<bool, DecodeError> {
        if ID.matches(key) {
            if let Some(v) = fields::int64(&ID, value)? {
                self.id = v;
            }
        } else if DAY_OF_THE_WEEK.matches(key) {
            if let Some(v) = fields::enumeration::<DayOfTheWeek>(&DAY_OF_THE_WEEK, value)? {
                self.day_of_the_week = v;
            }
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

impl TextFormat for EnumMessage {
    fn write_text(&self, out: &mut TextWriter) {
        out.int64(&ID, self.id);
        out.enumeration::<DayOfTheWeek>(&DAY_OF_THE_WEEK, self.day_of_the_week);
    }
}

impl fmt::Display for EnumMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&text_format::to_string(self))
    }
}
