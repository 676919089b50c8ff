#![cfg(test)]

use crate::ui_bridge::boundary::FaultBoundary;
use crate::ui_bridge::error::ViewError;

#[test]
fn test_successful_render_passes_through() {
    let boundary = FaultBoundary::new("electricity");
    assert_eq!(boundary.run(|| Ok("ok".to_string())), Ok("ok".to_string()));
    assert_eq!(boundary.plugin(), "electricity");
}

#[test]
fn test_view_error_is_returned() {
    let boundary = FaultBoundary::new("electricity");
    let result = boundary.run(|| Err(ViewError::Render("meter offline".to_string())));
    assert_eq!(result, Err(ViewError::Render("meter offline".to_string())));
}

#[test]
fn test_static_str_panic_is_caught() {
    let boundary = FaultBoundary::new("camera");
    let result = boundary.run(|| panic!("feed decoder crashed"));
    assert_eq!(
        result,
        Err(ViewError::Panicked {
            plugin: "camera".to_string(),
            message: "feed decoder crashed".to_string(),
        })
    );
}

#[test]
fn test_formatted_panic_is_caught() {
    let boundary = FaultBoundary::new("camera");
    let feed = 3;
    let result = boundary.run(|| panic!("feed {} missing", feed));
    match result {
        Err(ViewError::Panicked { message, .. }) => assert_eq!(message, "feed 3 missing"),
        other => panic!("expected a caught panic, got {:?}", other),
    }
}

#[test]
fn test_panic_does_not_affect_sibling_boundary() {
    let broken = FaultBoundary::new("camera");
    let healthy = FaultBoundary::new("electricity");

    let first = broken.run(|| panic!("boom"));
    let second = healthy.run(|| Ok("meter: 42kWh".to_string()));

    assert!(first.is_err());
    assert_eq!(second, Ok("meter: 42kWh".to_string()));
}
