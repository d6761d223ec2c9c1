//! Sample messages used by the demo.

use crate::pb::{ComplexMessage, DayOfTheWeek, DummyMessage, EnumMessage, SimpleMessage};

pub fn create_simple_message() -> SimpleMessage {
    SimpleMessage {
        id: 12345,
        is_simple: true,
        name: "My Simple Message".to_owned(),
        sample_list: vec![1, 4, 5, 6, 8],
        ..Default::default()
    }
}

pub fn create_enum_message() -> EnumMessage {
    let mut msg = EnumMessage {
        id: 42,
        ..Default::default()
    };
    msg.set_day_of_the_week(DayOfTheWeek::Thursday);
    msg
}

/// A message holding one sub-message and a list of two more.
pub fn create_complex_message() -> ComplexMessage {
    ComplexMessage {
        one_dummy: Some(DummyMessage::new(1, "First message")),
        multiple_dummy: vec![
            DummyMessage::new(2, "Second message"),
            DummyMessage::new(3, "Third message"),
        ],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_value_per_call() {
        let mut first = create_simple_message();
        first.sample_list.push(99);
        assert_eq!(create_simple_message().sample_list, vec![1, 4, 5, 6, 8]);
    }

    #[test]
    fn test_enum_sample_is_thursday() {
        let msg = create_enum_message();
        assert_eq!(msg.day_of_the_week(), Some(DayOfTheWeek::Thursday));
        assert_eq!(msg.day_of_the_week, 4);
    }
}
