//! Route metadata for drawing a shipment's legs.

/// Ordered (origin, destination) legs for a destination code.
const ROUTE_LEGS: &[(&str, &[(&str, &str)])] = &[
    ("LUB", &[("Dar es Salaam", "Lubumbashi")]),
    ("KIN", &[("Matadi", "Kinshasa")]),
    ("KOL", &[("Dar es Salaam", "Kolwezi")]),
];

/// Legs of the route to `destination`; empty for an unknown code.
pub fn route_legs(destination: &str) -> &'static [(&'static str, &'static str)] {
    ROUTE_LEGS
        .iter()
        .find(|(code, _)| *code == destination)
        .map(|(_, legs)| *legs)
        .unwrap_or(&[])
}

/// Destination codes with a known route, in table order.
pub fn known_destinations() -> impl Iterator<Item = &'static str> {
    ROUTE_LEGS.iter().map(|(code, _)| *code)
}
