//! Snapshot export format tests.
//!
//! The inline snapshot pins the exact wire shape: runtime fields stripped,
//! abbreviated field names, version tag present.

use serde_json::Value;
use wirepad::document::Document;
use wirepad::ids::SequentialIdGenerator;
use wirepad::types::{Location, ObjectKind, PadObject};
use wirepad::geometry::Size;

fn demo_document() -> Document {
    let mut ids = SequentialIdGenerator::new();
    let mut doc = Document::new("demo");
    let mut hero = PadObject::new(
        ObjectKind::Image,
        Location::new(12.5, 20.0),
        Size::new(640.0, 480.0),
    );
    hero.label = Some("hero".to_string());
    let id = doc.add_object(hero, &mut ids);
    doc.select_only(id);
    doc
}

#[test]
fn snapshot_export_wire_shape() {
    let doc = demo_document();
    insta::assert_json_snapshot!(doc.snapshot(), @r#"
    {
      "name": "demo",
      "version": "2.0.1",
      "body": [
        {
          "label": "hero",
          "type": "image",
          "size": {
            "w": 640.0,
            "h": 480.0
          },
          "location": {
            "x": 12.5,
            "y": 20.0,
            "a": "left"
          }
        }
      ]
    }
    "#);
}

#[test]
fn test_export_strips_runtime_fields() {
    let doc = demo_document();
    let json: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

    let record = &json["body"][0];
    assert!(record.get("id").is_none());
    assert!(record.get("selected").is_none());
    assert!(record.get("pref").is_none());
    assert_eq!(json["version"], "2.0.1");
}

#[test]
fn test_export_reimports_cleanly() {
    let doc = demo_document();
    let json = doc.to_json().unwrap();

    let mut ids = SequentialIdGenerator::new();
    let again = Document::parse(&json, &mut ids).unwrap();
    assert_eq!(again.name, "demo");
    assert_eq!(again.object_count(), 1);
    // Selection never survives a round trip.
    assert!(again.selection_is_empty());
    assert_eq!(again.objects()[0].label.as_deref(), Some("hero"));
}
