use itertools::Itertools;

use crate::card::Checkpoint;

/// decodes a JSON array of checkpoints such as
/// `[{"name": "Start", "distance": 0}, {"name": "Finish", "distance": 203}]`.
///
/// checkpoint lists typically arrive embedded in a request parameter, and a bad list
/// must not prevent a card from being produced. malformed input is logged and
/// decoded as an empty list.
pub fn decode_checkpoints(json: &str) -> Vec<Checkpoint> {
    if json.trim().is_empty() {
        return vec![];
    }
    match serde_json::from_str::<Vec<Checkpoint>>(json) {
        Ok(checkpoints) => checkpoints,
        Err(e) => {
            log::warn!("ignoring malformed checkpoint list: {e}");
            vec![]
        }
    }
}

/// true if each checkpoint is no further from the start than the next one
pub fn is_ascending(checkpoints: &[Checkpoint]) -> bool {
    checkpoints
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.distance_km <= b.distance_km)
}

/// stable sort of checkpoints by distance from the start. warns when the input was
/// not already in route order.
pub fn sort_by_distance(mut checkpoints: Vec<Checkpoint>) -> Vec<Checkpoint> {
    if !is_ascending(&checkpoints) {
        let names = checkpoints.iter().map(|c| c.name.as_str()).join(", ");
        log::warn!("checkpoints are not in route order, sorting by distance: [{names}]");
        checkpoints.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    }
    checkpoints
}
