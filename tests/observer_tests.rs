use std::cell::RefCell;
use std::rc::Rc;

use chart_axis::api::{
    Axis, AxisChange, AxisChangeKind, AxisConfig, AxisObserver, AxisPosition, AxisSnapshot, Linear,
};
use chart_axis::core::ScreenRect;
use chart_axis::error::ChartError;

type Log = Rc<RefCell<Vec<(String, AxisChange, AxisSnapshot)>>>;

struct RecordingObserver {
    id: String,
    log: Log,
}

impl RecordingObserver {
    fn boxed(id: impl Into<String>, log: Log) -> Box<Self> {
        Box::new(Self { id: id.into(), log })
    }
}

impl AxisObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_axis_changed(&mut self, change: AxisChange, snapshot: &AxisSnapshot) {
        self.log
            .borrow_mut()
            .push((self.id.clone(), change, snapshot.clone()));
    }
}

fn bottom_axis() -> Axis<Linear> {
    let config = AxisConfig::default()
        .with_position(AxisPosition::Bottom)
        .with_bounds(0.0, 100.0);
    let mut axis = Axis::with_config(Linear, config).expect("axis");
    axis.update(ScreenRect::new(0.0, 0.0, 1_000.0, 400.0))
        .expect("update");
    axis
}

#[test]
fn observer_ids_must_be_unique_and_non_empty() {
    let mut axis = bottom_axis();
    let log = Log::default();
    axis.register_observer(RecordingObserver::boxed("linked", log.clone()))
        .expect("register");

    assert!(matches!(
        axis.register_observer(RecordingObserver::boxed("linked", log.clone())),
        Err(ChartError::InvalidData(_))
    ));
    assert!(matches!(
        axis.register_observer(RecordingObserver::boxed("", log)),
        Err(ChartError::InvalidData(_))
    ));
    assert_eq!(axis.observer_count(), 1);
}

#[test]
fn changes_reach_observers_in_registration_order() {
    let mut axis = bottom_axis();
    let log = Log::default();
    for id in ["second-axis", "legend", "overview"] {
        axis.register_observer(RecordingObserver::boxed(id, log.clone()))
            .expect("register");
    }

    axis.pan(-100.0).expect("pan");
    let ids: Vec<String> = log.borrow().iter().map(|(id, _, _)| id.clone()).collect();
    assert_eq!(ids, vec!["second-axis", "legend", "overview"]);

    let (_, change, snapshot) = log.borrow()[0].clone();
    assert_eq!(change.kind, AxisChangeKind::Pan);
    assert!((change.delta_minimum - 10.0).abs() <= 1e-9);
    assert!((change.delta_maximum - 10.0).abs() <= 1e-9);
    assert!((snapshot.actual_minimum - 10.0).abs() <= 1e-9);
    assert_eq!(snapshot.view_minimum, Some(snapshot.actual_minimum));
}

#[test]
fn unregistered_observer_stops_receiving() {
    let mut axis = bottom_axis();
    let log = Log::default();
    axis.register_observer(RecordingObserver::boxed("a", log.clone()))
        .expect("register");
    axis.register_observer(RecordingObserver::boxed("b", log.clone()))
        .expect("register");

    assert!(axis.unregister_observer("a"));
    assert!(!axis.unregister_observer("a"));
    assert!(!axis.has_observer("a"));

    axis.zoom(10.0, 20.0).expect("zoom");
    axis.reset().expect("reset");
    let log = log.borrow();
    let kinds: Vec<(String, AxisChangeKind)> = log
        .iter()
        .map(|(id, change, _)| (id.clone(), change.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("b".to_owned(), AxisChangeKind::Zoom),
            ("b".to_owned(), AxisChangeKind::Reset),
        ]
    );
}

#[test]
fn disabled_axis_ignores_requests_without_notifying() {
    let config = AxisConfig::default()
        .with_position(AxisPosition::Bottom)
        .with_bounds(0.0, 100.0)
        .with_interaction(false, false);
    let mut axis = Axis::with_config(Linear, config).expect("axis");
    axis.update(ScreenRect::new(0.0, 0.0, 1_000.0, 400.0))
        .expect("update");
    let log = Log::default();
    axis.register_observer(RecordingObserver::boxed("watcher", log.clone()))
        .expect("register");

    assert_eq!(axis.pan(50.0).expect("pan"), None);
    assert_eq!(axis.zoom_at(2.0, 50.0).expect("zoom"), None);
    assert_eq!((axis.actual_minimum(), axis.actual_maximum()), (0.0, 100.0));
    assert!(log.borrow().is_empty());
}
