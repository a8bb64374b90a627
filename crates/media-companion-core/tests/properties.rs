//! Cross-module properties of the filter compiler, driven through the
//! public API with JSON selections as the UI produces them.

use media_companion_core::timeline::TimelineBucket;
use media_companion_core::{
    assemble, assemble_named, get_view_modes, EntityType, FilterSelection,
};
use serde_json::{json, Value};

const DATED: [EntityType; 3] = [EntityType::Scene, EntityType::Gallery, EntityType::Image];

fn selection(v: Value) -> FilterSelection {
    serde_json::from_value(v).expect("selection json")
}

fn compiled(entity: EntityType, v: Value) -> Value {
    serde_json::to_value(assemble(entity, &selection(v))).unwrap()
}

#[test]
fn gallery_end_to_end_scenario() {
    let out = compiled(
        EntityType::Gallery,
        json!({
            "favorite": true,
            "date": {"start": "2024-01-01", "end": "2024-12-31"},
            "tagIds": ["tag1", "tag2"]
        }),
    );
    assert_eq!(
        out,
        json!({
            "favorite": true,
            "date": {"value": "2024-01-01", "value2": "2024-12-31", "modifier": "BETWEEN"},
            "tags": {"modifier": "INCLUDES", "value": ["tag1", "tag2"]}
        })
    );
}

#[test]
fn date_predicates_match_across_entities() {
    let ranges = [
        json!({"start": "2019-01-01", "end": "2019-06-30"}),
        json!({"start": "2024-03-15", "end": "2024-03-15"}),
        json!({"start": "2010-10-10"}),
        json!({"end": "2000-01-01"}),
        json!({"start": "2024-12-31", "end": "2024-01-01"}),
    ];
    for range in ranges {
        let scene = compiled(EntityType::Scene, json!({ "date": range.clone() }));
        let gallery = compiled(EntityType::Gallery, json!({ "date": range.clone() }));
        let image = compiled(EntityType::Image, json!({ "date": range.clone() }));
        assert_eq!(scene["date"], gallery["date"], "range {}", range);
        assert_eq!(scene["date"], image["date"], "range {}", range);
        assert!(scene["date"].is_object());
    }
}

#[test]
fn degenerate_range_is_between_everywhere() {
    for entity in DATED {
        let out = compiled(
            entity,
            json!({"date": {"start": "2024-03-15", "end": "2024-03-15"}}),
        );
        assert_eq!(
            out["date"],
            json!({"value": "2024-03-15", "value2": "2024-03-15", "modifier": "BETWEEN"})
        );
    }
}

#[test]
fn empty_input_omits_date() {
    for entity in EntityType::ALL {
        let out = compiled(entity, json!({}));
        assert!(out.get("date").is_none());
        assert_eq!(out, json!({}));
    }
}

#[test]
fn open_ended_ranges_use_inclusive_comparisons() {
    let out = compiled(
        EntityType::Scene,
        json!({"rating": {"max": 40}, "date": {"start": "2020-01-01"}}),
    );
    assert_eq!(out["rating100"], json!({"modifier": "LESS_THAN_OR_EQUAL", "value": 40}));
    assert_eq!(
        out["date"],
        json!({"modifier": "GREATER_THAN_OR_EQUAL", "value": "2020-01-01"})
    );
}

#[test]
fn relation_predicate_shape() {
    let out = compiled(EntityType::Gallery, json!({"tagIds": ["t1", "t2"]}));
    assert_eq!(out["tags"], json!({"modifier": "INCLUDES", "value": ["t1", "t2"]}));
}

#[test]
fn extra_dimension_does_not_disturb_existing_ones() {
    let base = json!({
        "favorite": true,
        "rating": {"min": 20, "max": 60},
        "performerIds": ["p9"]
    });
    let extras = [
        ("date", json!({"start": "2023-01-01", "end": "2023-01-31"})),
        ("tagIds", json!(["t1"])),
        ("studioIds", json!(["s1"])),
        ("organized", json!(true)),
    ];
    for entity in EntityType::ALL {
        let before = compiled(entity, base.clone());
        for (key, value) in &extras {
            let mut extended = base.clone();
            extended[*key] = value.clone();
            let after = compiled(entity, extended);
            for (field, predicate) in before.as_object().unwrap() {
                assert_eq!(&after[field], predicate, "{} {} after adding {}", entity, field, key);
            }
        }
    }
}

#[test]
fn timeline_day_bucket_compiles_to_degenerate_range() {
    let range = TimelineBucket::parse("2024-03-15").unwrap().date_range().unwrap();
    let sel = FilterSelection {
        date: Some(range),
        ..Default::default()
    };
    for entity in DATED {
        let out = serde_json::to_value(assemble(entity, &sel)).unwrap();
        assert_eq!(out["date"]["modifier"], "BETWEEN");
        assert_eq!(out["date"]["value"], out["date"]["value2"]);
    }
}

#[test]
fn registry_timeline_selectivity() {
    for entity in ["scene", "gallery", "image"] {
        assert!(get_view_modes(entity).iter().any(|m| m.id == "timeline"));
    }
    for entity in ["performer", "tag"] {
        assert!(!get_view_modes(entity).iter().any(|m| m.id == "timeline"));
    }
}

#[test]
fn named_assembly_fails_loudly_for_unknown_entity() {
    assert!(assemble_named("scene", &FilterSelection::default()).is_ok());
    assert!(assemble_named("scenes", &FilterSelection::default()).is_err());
}
