use invasion_sim::World;
use invasion_sim::parse::parse_world;

/// The 4-city example map: a hub (Foo) with three leaves that each road
/// back to it.
pub const FOUR_CITY_MAP: &str = "\
Foo north=Bar west=Baz south=Qu-ux
Bar south=Foo
Baz east=Foo
Qu-ux north=Foo
";

pub fn four_city_world() -> World {
    parse_world(FOUR_CITY_MAP).unwrap()
}

/// Check the world invariants that must hold at every stable point:
/// no road to a missing city, mutual occupancy references in both
/// directions, and no alien occupying two cities.
pub fn assert_world_consistent(world: &World) {
    let mut seen_occupants = std::collections::BTreeSet::new();
    for (name, city) in &world.cities {
        for destination in city.roads.values() {
            assert!(
                world.cities.contains_key(destination),
                "road from {name} ends at missing city {destination}"
            );
        }
        if let Some(id) = city.occupant {
            assert!(
                seen_occupants.insert(id),
                "alien {id} occupies more than one city"
            );
            let alien = world
                .aliens
                .get(&id)
                .unwrap_or_else(|| panic!("occupant {id} of {name} not in registry"));
            assert_eq!(
                alien.city.as_deref(),
                Some(name.as_str()),
                "alien {id} does not point back at {name}"
            );
        }
    }
    for alien in world.aliens.values() {
        if let Some(city_name) = &alien.city {
            let city = world
                .cities
                .get(city_name)
                .unwrap_or_else(|| panic!("alien {} in missing city {city_name}", alien.id));
            assert_eq!(city.occupant, Some(alien.id));
        }
    }
}
