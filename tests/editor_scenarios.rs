//! End-to-end editing scenarios against a recording preview sink.

use std::cell::RefCell;
use std::rc::Rc;

use ledcube::core::event_bus::CubeEventEmitter;
use ledcube::entities::{AnimationSequence, CubeDims, LedChangedEvent};
use ledcube::{DisplayMode, EditorError, EventBus, RecordingSink, SinkCall, Synchronizer};
use serde_json::json;

fn editor(config: &str, frames: usize) -> Synchronizer<RecordingSink> {
    let mut sync = Synchronizer::new(RecordingSink::new());
    sync.load_cube(config, frames, false).unwrap();
    sync.sink_mut().take();
    sync
}

#[test]
fn toggle_then_layer_mode_then_frame_switch() {
    let mut sync = editor("5x5x5", 3);

    sync.on_led_toggled(0, 0, true).unwrap();
    assert_eq!(sync.sink_mut().take(), vec![SinkCall::SetLed { x: 0, y: 0, z: 0, state: true }]);

    assert!(sync.set_display_mode(DisplayMode::ActiveLayer));
    let calls = sync.sink_mut().take();
    assert_eq!(calls[0], SinkCall::ShowLayer(0));
    let paints: Vec<_> = calls[1..].to_vec();
    assert_eq!(paints.len(), 25);
    assert!(paints.contains(&SinkCall::SetLed { x: 0, y: 0, z: 0, state: true }));
    assert!(paints.iter().all(|c| matches!(c, SinkCall::SetLed { z: 0, .. })));

    sync.on_select_frame(1).unwrap();
    let leds = sync.sink().set_leds();
    assert_eq!(leds.len(), 25);
    assert!(leds.iter().all(|&(_, _, z, on)| z == 0 && !on));
}

#[test]
fn duration_is_per_frame_and_survives_navigation() {
    let mut sync = editor("5x5x5", 3);
    sync.on_set_duration(5000).unwrap();
    sync.on_select_frame(1).unwrap();
    assert_eq!(sync.animation().active_frame().duration(), 5);
    sync.on_select_frame(0).unwrap();
    assert_eq!(sync.animation().active_frame().duration(), 5000);
}

#[test]
fn duration_bounds_and_types() {
    let mut sync = editor("3x3x3", 1);
    assert!(sync.on_set_duration(0).is_ok());
    assert!(sync.on_set_duration(65535).is_ok());
    assert!(matches!(sync.on_set_duration(-1), Err(EditorError::Range { .. })));
    assert!(matches!(sync.on_set_duration(65536), Err(EditorError::Range { .. })));
    assert!(matches!(sync.on_set_duration_value(&json!("abc")), Err(EditorError::Type { .. })));
    assert!(matches!(sync.on_set_duration_value(&json!(1.5)), Err(EditorError::Type { .. })));
    assert_eq!(sync.animation().active_frame().duration(), 65535);
}

#[test]
fn resize_builds_empty_layers() {
    let mut animation = AnimationSequence::new(CubeDims::cube(2), 1);
    animation.set_cube_size(3, 4, 2, 2);
    assert_eq!(animation.frame_count(), 2);
    for i in 0..animation.frame_count() {
        let layers = animation.get_frame(i).unwrap().get_layers();
        assert_eq!(layers.len(), 2);
        for layer in layers {
            assert_eq!(layer.get_leds().len(), 12);
            assert!(layer.get_leds().iter().all(|led| !led.on));
        }
    }
}

#[test]
fn every_toggle_notifies_once() {
    let bus = EventBus::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    bus.subscribe::<LedChangedEvent, _>(move |e| sink.borrow_mut().push(*e));

    let mut sync = editor("4x4x4", 1);
    sync.set_event_emitter(CubeEventEmitter::from_emitter(bus.emitter()));

    sync.toggle_led(2, 3).unwrap();
    sync.toggle_led(2, 3).unwrap();
    assert!(!sync.animation().active_frame().led(2, 3, 0).unwrap());
    assert_eq!(
        *seen.borrow(),
        vec![LedChangedEvent::new(2, 3, 0, true), LedChangedEvent::new(2, 3, 0, false)]
    );

    // Same-state set is a no-op
    assert_eq!(sync.on_led_toggled(2, 3, false).unwrap(), None);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn out_of_range_frame_keeps_selection() {
    let mut sync = editor("5x5x5", 3);
    sync.on_select_frame(2).unwrap();
    assert!(matches!(sync.on_select_frame(3), Err(EditorError::Range { .. })));
    assert_eq!(sync.current_frame(), 2);
    assert_eq!(sync.forwarded_frame(), Some(2));
}

#[test]
fn edits_to_other_frames_stay_off_the_preview() {
    let mut sync = editor("5x5x5", 3);
    sync.edit_frame(1, 4, 4, 4, true).unwrap();
    assert!(sync.sink().calls.is_empty());

    sync.on_select_frame(1).unwrap();
    assert!(sync.sink().set_leds().contains(&(4, 4, 4, true)));
}

#[test]
fn unsupported_configs() {
    let mut sync = Synchronizer::new(RecordingSink::new());
    assert!(matches!(sync.load_cube("5x5x6", 1, true), Err(EditorError::NotImplemented(_))));
    assert!(matches!(sync.load_cube("17x17x17", 1, false), Err(EditorError::Configuration { .. })));
    assert_eq!(sync.forwarded_frame(), None);
    assert!(sync.sink().calls.is_empty());
}
