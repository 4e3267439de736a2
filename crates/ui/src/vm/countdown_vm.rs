use services::CountdownSnapshot;

/// One cell of the countdown grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownUnitVm {
    pub value: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownVm {
    pub title: String,
    pub units: Vec<CountdownUnitVm>,
}

#[must_use]
pub fn map_countdown(snapshot: &CountdownSnapshot) -> CountdownVm {
    let remaining = snapshot.remaining;
    let unit = |value: i64, label: &'static str| CountdownUnitVm {
        value: value.to_string(),
        label,
    };

    CountdownVm {
        title: snapshot.title.clone(),
        units: vec![
            unit(remaining.days, "Days"),
            unit(remaining.hours, "Hours"),
            unit(remaining.minutes, "Minutes"),
            unit(remaining.seconds, "Seconds"),
        ],
    }
}
