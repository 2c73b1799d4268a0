//! JSON contract tests for identifiers embedded in protocol documents.

use serde::{Deserialize, Serialize};
use twinwire_id::{IdError, NamespacedId, PolicyId, ThingId};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Thing {
    thing_id: ThingId,
    policy_id: PolicyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    definition: Option<NamespacedId>,
}

#[test]
fn test_identifiers_serialize_as_bare_strings() {
    let thing = Thing {
        thing_id: ThingId::parse("org.example:sensor-1").unwrap(),
        policy_id: PolicyId::parse("org.example:default").unwrap(),
        definition: Some(NamespacedId::parse("org.example:Thermostat:1.0.0").unwrap()),
    };

    let value = serde_json::to_value(&thing).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "thingId": "org.example:sensor-1",
            "policyId": "org.example:default",
            "definition": "org.example:Thermostat:1.0.0",
        })
    );

    let parsed: Thing = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, thing);
}

#[test]
fn test_document_with_invalid_identifier_is_rejected() {
    let json = r#"{"thingId": "org.example:a/b", "policyId": "org.example:default"}"#;
    let err = serde_json::from_str::<Thing>(json).unwrap_err();
    assert!(err.to_string().contains("invalid namespaced ID 'org.example:a/b'"));
}

#[test]
fn test_document_with_object_identifier_is_rejected() {
    let json = r#"{"thingId": {"namespace": "a", "name": "b"}, "policyId": "a:b"}"#;
    assert!(serde_json::from_str::<Thing>(json).is_err());
}

#[test]
fn test_deserialize_in_place_populates_target() {
    let mut target = NamespacedId::default();
    let mut de = serde_json::Deserializer::from_str("\"test.namespace:testId\"");
    NamespacedId::deserialize_in_place(&mut de, &mut target).unwrap();

    assert_eq!(target, NamespacedId::new("test.namespace", "testId").unwrap());
}

#[test]
fn test_unmarshal_json_reuses_target() {
    let mut target = NamespacedId::parse("old:value").unwrap();
    target.unmarshal_json(b"\"new.namespace:value\"").unwrap();
    assert_eq!(target.namespace(), "new.namespace");

    let err = target.unmarshal_json(b"").unwrap_err();
    assert!(matches!(err, IdError::MalformedEncoding(_)));
    assert_eq!(target.namespace(), "new.namespace");
}

#[test]
fn test_marshal_matches_serde() {
    let id = NamespacedId::new("test.namespace", "testId").unwrap();
    assert_eq!(id.marshal_json().unwrap(), serde_json::to_vec(&id).unwrap());
}
