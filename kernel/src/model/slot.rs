/// A discrete bookable half-hour of the day.
///
/// The generator only produces the fixed time tokens and display labels;
/// availability is a property of the schedule for a concrete date and is
/// resolved against the schedule store, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// `"HH:MM"` token, also used as the slot key in the schedule store.
    pub id: String,
    /// 12-hour display label, e.g. `"2:30 PM"`.
    pub label: String,
}

/// Generates the half-hour slot sequence from `open_hour` to `close_hour`
/// inclusive. Deterministic: same hours in, same slots out.
pub fn generate_slots(open_hour: u32, close_hour: u32) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    for hour in open_hour..=close_hour {
        for minute in [0, 30] {
            slots.push(TimeSlot {
                id: format!("{hour:02}:{minute:02}"),
                label: twelve_hour_label(hour, minute),
            });
        }
    }
    slots
}

fn twelve_hour_label(hour: u32, minute: u32) -> String {
    let (display_hour, meridiem) = match hour {
        0 => (12, "AM"),
        12 => (12, "PM"),
        h if h < 12 => (h, "AM"),
        h => (h - 12, "PM"),
    };
    format!("{display_hour}:{minute:02} {meridiem}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_two_slots_per_hour_inclusive() {
        let slots = generate_slots(9, 22);
        assert_eq!(slots.len(), (22 - 9 + 1) * 2);
        assert_eq!(slots.first().unwrap().id, "09:00");
        assert_eq!(slots.last().unwrap().id, "22:30");
    }

    #[test]
    fn labels_use_twelve_hour_clock() {
        let slots = generate_slots(9, 22);
        let label_of = |id: &str| {
            slots
                .iter()
                .find(|s| s.id == id)
                .map(|s| s.label.clone())
                .unwrap()
        };
        assert_eq!(label_of("09:00"), "9:00 AM");
        assert_eq!(label_of("12:00"), "12:00 PM");
        assert_eq!(label_of("14:30"), "2:30 PM");
        assert_eq!(label_of("22:30"), "10:30 PM");
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_slots(9, 22), generate_slots(9, 22));
    }

    #[test]
    fn midnight_labels_as_twelve_am() {
        assert_eq!(twelve_hour_label(0, 0), "12:00 AM");
    }
}
