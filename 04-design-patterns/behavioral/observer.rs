//! Observer: a `WeatherStation` pushes every temperature change to the
//! observers registered with it.
//!
//! Observers are shared as `Arc<Mutex<dyn Observer + Send>>` so the caller
//! keeps a handle to inspect them after notifications. Registration hands
//! back an [`ObserverId`]; removal takes that id.

use crate::code_point_string;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

pub trait Observer {
    fn update(&mut self, temperature: f64);
}

pub type SharedObserver = Arc<Mutex<dyn Observer + Send>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub struct WeatherStation {
    observers: Vec<(ObserverId, SharedObserver)>,
    temperature: f64,
    next_id: u64,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_observer(&mut self, observer: SharedObserver) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        debug!(id = id.0, total = self.observers.len(), "observer registered");
        id
    }

    /// Returns whether an observer with this id was registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        before != self.observers.len()
    }

    /// Notifies in registration order.
    pub fn notify_observers(&self) {
        for (id, observer) in &self.observers {
            let mut guard = match observer.lock() {
                Ok(guard) => guard,
                Err(poisoned) => {
                    warn!(id = id.0, "observer mutex poisoned; notifying anyway");
                    poisoned.into_inner()
                }
            };
            guard.update(self.temperature);
        }
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
        self.notify_observers();
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

/// Renders each reading and keeps the most recent line.
#[derive(Debug, Clone)]
pub struct TemperatureDisplay {
    name: String,
    last: Option<String>,
}

impl TemperatureDisplay {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last: None,
        }
    }

    /// The temperature is rendered as a code point (see [`code_point_string`]).
    pub fn display(&self, temperature: f64) -> String {
        format!(
            "Display {} shows temperature: {}",
            self.name,
            code_point_string(temperature as i64)
        )
    }

    pub fn last_line(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl Observer for TemperatureDisplay {
    fn update(&mut self, temperature: f64) {
        self.last = Some(self.display(temperature));
    }
}

/// Keeps every reading it has been sent.
#[derive(Debug, Clone, Default)]
pub struct TemperatureLogger {
    readings: Vec<f64>,
}

impl TemperatureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn readings(&self) -> &[f64] {
        &self.readings
    }
}

impl Observer for TemperatureLogger {
    fn update(&mut self, temperature: f64) {
        self.readings.push(temperature);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_observers_notified() {
        let mut station = WeatherStation::new();
        let display = Arc::new(Mutex::new(TemperatureDisplay::new("Display 1")));
        let logger = Arc::new(Mutex::new(TemperatureLogger::new()));
        station.register_observer(display.clone());
        station.register_observer(logger.clone());

        station.set_temperature(65.0);
        station.set_temperature(66.0);

        assert_eq!(
            display.lock().unwrap().last_line(),
            Some("Display Display 1 shows temperature: B")
        );
        assert_eq!(logger.lock().unwrap().readings(), &[65.0, 66.0]);
    }

    #[test]
    fn test_removed_observer_stops_receiving() {
        let mut station = WeatherStation::new();
        let kept = Arc::new(Mutex::new(TemperatureLogger::new()));
        let removed = Arc::new(Mutex::new(TemperatureLogger::new()));
        station.register_observer(kept.clone());
        let id = station.register_observer(removed.clone());

        station.set_temperature(1.0);
        assert!(station.remove_observer(id));
        assert!(!station.remove_observer(id));
        station.set_temperature(2.0);

        assert_eq!(kept.lock().unwrap().readings(), &[1.0, 2.0]);
        assert_eq!(removed.lock().unwrap().readings(), &[1.0]);
        assert_eq!(station.observer_count(), 1);
    }

    #[test]
    fn test_same_observer_registered_twice_gets_two_ids() {
        let mut station = WeatherStation::new();
        let logger = Arc::new(Mutex::new(TemperatureLogger::new()));
        let a = station.register_observer(logger.clone());
        let b = station.register_observer(logger.clone());
        assert_ne!(a, b);

        station.set_temperature(3.0);
        assert_eq!(logger.lock().unwrap().readings(), &[3.0, 3.0]);
    }

    #[test]
    fn test_display_before_any_update() {
        let display = TemperatureDisplay::new("idle");
        assert_eq!(display.last_line(), None);
        assert_eq!(display.display(67.9), "Display idle shows temperature: C");
    }
}
