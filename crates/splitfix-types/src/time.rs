use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// One of the two parallel clocks tracked for every measurement.
///
/// Real time is wall-clock elapsed time; game time is the in-game clock,
/// which may pause during loads. Every duration in the data model carries
/// an independent slot per method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingMethod {
    RealTime,
    GameTime,
}

impl TimingMethod {
    /// Both methods in the fixed order repairs are applied in.
    pub fn all() -> [TimingMethod; 2] {
        [TimingMethod::RealTime, TimingMethod::GameTime]
    }
}

/// A pair of independently-optional elapsed-time measurements, one per
/// timing method.
///
/// Absence means "not measured for that method", never zero. Values are
/// signed: intermediate arithmetic (e.g. subtracting cumulative splits
/// recorded out of order) can go negative before repairs clamp it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Time {
    /// Wall-clock duration in milliseconds, if measured.
    #[serde(default, with = "opt_millis")]
    pub real_time: Option<TimeDelta>,
    /// In-game-clock duration in milliseconds, if measured.
    #[serde(default, with = "opt_millis")]
    pub game_time: Option<TimeDelta>,
}

impl Time {
    pub fn new(real_time: Option<TimeDelta>, game_time: Option<TimeDelta>) -> Self {
        Self {
            real_time,
            game_time,
        }
    }

    /// Time with only the real-time component set.
    pub fn from_real_time(real_time: TimeDelta) -> Self {
        Self {
            real_time: Some(real_time),
            game_time: None,
        }
    }

    /// The component for one timing method.
    pub fn get(&self, method: TimingMethod) -> Option<TimeDelta> {
        match method {
            TimingMethod::RealTime => self.real_time,
            TimingMethod::GameTime => self.game_time,
        }
    }

    /// Overwrite the component for one timing method.
    pub fn set(&mut self, method: TimingMethod, value: Option<TimeDelta>) {
        match method {
            TimingMethod::RealTime => self.real_time = value,
            TimingMethod::GameTime => self.game_time = value,
        }
    }

    /// Copy of this time with one component replaced.
    pub fn with(&self, method: TimingMethod, value: Option<TimeDelta>) -> Self {
        let mut time = *self;
        time.set(method, value);
        time
    }

    /// Method-wise equality: both absent compares equal, absent vs
    /// present does not.
    pub fn eq_for(&self, other: &Time, method: TimingMethod) -> bool {
        self.get(method) == other.get(method)
    }

    /// True when neither method has a measurement.
    pub fn is_empty(&self) -> bool {
        self.real_time.is_none() && self.game_time.is_none()
    }
}

mod opt_millis {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<TimeDelta>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.map(|d| d.num_milliseconds()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<TimeDelta>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<i64>::deserialize(deserializer)?.map(TimeDelta::milliseconds))
    }
}
