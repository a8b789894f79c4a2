use serde_json::{Map, Value};

// (full form, abbreviation)
const KEY_ABBREVIATIONS: [(&str, &str); 4] = [
    ("type", "t"),
    ("serviceEndpoint", "s"),
    ("routingKeys", "r"),
    ("accept", "a"),
];

const VALUE_ABBREVIATIONS: [(&str, &str); 1] = [("DIDCommMessaging", "dm")];

/// Shortens the well-known service keys and values before encoding a service
/// into a did:peer:2 address.
pub(super) fn abbreviate_service(value: &mut Value) {
    rewrite(value, &|key| lookup(&KEY_ABBREVIATIONS, key, false), &|val| {
        lookup(&VALUE_ABBREVIATIONS, val, false)
    })
}

/// Restores the full service keys and values of a decoded did:peer:2 service.
pub(super) fn expand_service(value: &mut Value) {
    rewrite(value, &|key| lookup(&KEY_ABBREVIATIONS, key, true), &|val| {
        lookup(&VALUE_ABBREVIATIONS, val, true)
    })
}

fn lookup(table: &[(&str, &str)], term: &str, reverse: bool) -> String {
    table
        .iter()
        .find_map(|(full, short)| match reverse {
            false => (*full == term).then_some(*short),
            true => (*short == term).then_some(*full),
        })
        .unwrap_or(term)
        .to_owned()
}

fn rewrite(value: &mut Value, map_key: &dyn Fn(&str) -> String, map_val: &dyn Fn(&str) -> String) {
    match value {
        Value::Object(obj) => {
            let mut rewritten = Map::new();

            for (key, mut val) in std::mem::take(obj) {
                rewrite(&mut val, map_key, map_val);
                rewritten.insert(map_key(&key), val);
            }

            *obj = rewritten;
        }
        Value::Array(arr) => arr.iter_mut().for_each(|val| rewrite(val, map_key, map_val)),
        Value::String(val) => *val = map_val(val),
        _ => (),
    }
}
