mod common;

use common::{FOUR_CITY_MAP, assert_world_consistent, four_city_world};
use invasion_sim::parse::parse_world;
use invasion_sim::{WarConfig, World, start_war};

#[test]
fn single_alien_leaves_all_cities_intact() {
    // No opponent, so no fight can ever happen; the alien just wanders
    // until its budget runs out.
    let outcome = start_war(four_city_world(), &WarConfig::new(1, 42));
    assert_eq!(outcome.world.cities.len(), 4);
    assert_eq!(outcome.world.aliens.len(), 1);
    assert_eq!(outcome.fights, 0);
    assert_world_consistent(&outcome.world);
}

#[test]
fn two_aliens_fight_at_most_once_and_usually_exactly_once() {
    // Two aliens can fight at most once (the first fight kills both).
    // A meeting is not guaranteed on any single run — the interleaving
    // is scheduler-dependent — but on this small hub-and-leaves graph
    // 10,000 steps each make one overwhelmingly likely, so across a
    // handful of seeds at least one run must raze a city.
    let mut fought = false;
    for seed in [42, 7, 99, 1234] {
        let outcome = start_war(four_city_world(), &WarConfig::new(2, seed));
        assert!(outcome.fights <= 1);
        assert_eq!(
            2 - outcome.world.aliens.len(),
            2 * outcome.fights as usize
        );
        assert_eq!(outcome.world.cities.len(), 4 - outcome.fights as usize);
        assert_world_consistent(&outcome.world);
        if outcome.fights == 1 {
            assert!(outcome.world.aliens.is_empty());
            fought = true;
        }
    }
    assert!(fought, "no fight across any seed");
}

#[test]
fn ten_aliens_annihilate_the_map() {
    // 10 aliens cannot all land on 4 cities, so placement alone must
    // exhaust the map: 4 fights, 4 razed cities, 8 dead aliens.
    let outcome = start_war(four_city_world(), &WarConfig::new(10, 7));
    assert!(outcome.world.cities.is_empty());
    assert_eq!(outcome.fights, 4);
    assert_eq!(outcome.world.aliens.len(), 2);
    assert!(outcome.world.aliens.values().all(|a| a.city.is_none()));
}

#[test]
fn zero_aliens_is_a_noop() {
    let outcome = start_war(four_city_world(), &WarConfig::new(0, 1));
    assert_eq!(outcome.world.cities.len(), 4);
    assert_eq!(outcome.placed, 0);
    assert_eq!(outcome.fights, 0);
}

#[test]
fn empty_map_skips_the_war() {
    let outcome = start_war(World::new(), &WarConfig::new(3, 1));
    assert!(outcome.world.cities.is_empty());
    assert_eq!(outcome.placed, 0);
    // Aliens stay registered but unplaced; they never moved.
    assert_eq!(outcome.world.aliens.len(), 3);
    assert!(outcome.world.aliens.values().all(|a| a.city.is_none()));
}

#[test]
fn terminates_with_a_tiny_budget() {
    let config = WarConfig {
        move_budget: 3,
        ..WarConfig::new(2, 9)
    };
    let outcome = start_war(four_city_world(), &config);
    assert_world_consistent(&outcome.world);
}

#[test]
fn trapped_alien_survives_cancelled_in_place() {
    // Isolated cities only: wherever the alien lands it can never move,
    // so its first attempted step cancels it on the spot.
    let world = parse_world("One\nTwo\n").unwrap();
    let outcome = start_war(world, &WarConfig::new(1, 13));

    assert_eq!(outcome.world.cities.len(), 2);
    assert_eq!(outcome.fights, 0);
    let alien = &outcome.world.aliens[&0];
    assert!(alien.is_cancelled());
    assert!(alien.city.is_some());
    assert_world_consistent(&outcome.world);
}

#[test]
fn casualties_always_equal_twice_the_fights() {
    for seed in [1, 2, 3, 4, 5] {
        for num_aliens in [1u64, 2, 3, 5, 8] {
            let outcome = start_war(four_city_world(), &WarConfig::new(num_aliens, seed));
            let destroyed = num_aliens as usize - outcome.world.aliens.len();
            assert_eq!(
                destroyed,
                2 * outcome.fights as usize,
                "seed {seed}, {num_aliens} aliens"
            );
            assert_world_consistent(&outcome.world);
        }
    }
}

#[test]
fn no_road_ever_points_at_a_razed_city() {
    // Extra one-way roads into the hub stress the inbound purge.
    let map = format!("{FOUR_CITY_MAP}Hidden south=Foo\nOutpost east=Bar\n");
    for seed in [3, 17, 29] {
        let world = parse_world(&map).unwrap();
        let outcome = start_war(world, &WarConfig::new(6, seed));
        assert_world_consistent(&outcome.world);
    }
}

#[test]
fn final_graph_renders_in_map_format() {
    let outcome = start_war(four_city_world(), &WarConfig::new(1, 21));
    let rendered = outcome.world.to_string();
    let reparsed = parse_world(&rendered).unwrap();
    assert_eq!(reparsed.cities.len(), 4);
    assert_eq!(reparsed.to_string(), rendered);
}
