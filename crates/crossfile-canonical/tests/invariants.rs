//! Algebraic invariants of the canonicalization pipeline, checked over
//! generated input.

use proptest::prelude::*;

use crossfile_canonical::{FieldConfig, PropertyType, RecordJson};
use crossfile_testkit::ReferencePrimitives;

const PRIMITIVES: ReferencePrimitives = ReferencePrimitives;

fn clean_text(property: PropertyType, value: &str) -> Option<String> {
    property.clean(
        &PRIMITIVES,
        &serde_json::Value::String(value.to_string()),
        &RecordJson::Null,
        &FieldConfig::default(),
    )
}

proptest! {
    #[test]
    fn clean_is_idempotent(value in "\\PC{0,40}") {
        for property in PropertyType::ALL {
            if let Some(once) = clean_text(property, &value) {
                let twice = clean_text(property, &once);
                prop_assert_eq!(Some(once), twice, "{} clean not idempotent", property);
            }
        }
    }

    #[test]
    fn normalize_is_a_fixpoint(values in proptest::collection::vec("\\PC{0,30}", 0..6)) {
        for property in PropertyType::ALL {
            let once = property.normalize(&PRIMITIVES, &values);
            let twice = property.normalize(&PRIMITIVES, &once);
            prop_assert_eq!(&once, &twice, "{} normalize not a fixpoint", property);
        }
    }

    #[test]
    fn normalize_never_emits_empty_strings(values in proptest::collection::vec("\\PC{0,30}", 0..6)) {
        for property in PropertyType::ALL {
            let normalized = property.normalize(&PRIMITIVES, &values);
            prop_assert!(!normalized.contains(""), "{} emitted the empty string", property);
        }
    }
}
