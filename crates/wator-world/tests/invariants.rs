//! Grid-wide invariants checked over randomly generated worlds.

use proptest::prelude::*;
use wator_core::{neighbors, Census, Position, Rules, SimulationConfig, Species};
use wator_world::{process_chronon, seeded_rng, World};

fn config_strategy() -> impl Strategy<Value = SimulationConfig> {
    (1usize..12, 0u32..6, 0u32..8, 0u32..6, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(
        |(grid_size, fish_breed, shark_breed, starve, fill, shark_share)| {
            let occupied = ((grid_size * grid_size) as f64 * fill) as usize;
            let initial_sharks = (occupied as f64 * shark_share) as usize;
            SimulationConfig {
                grid_size,
                initial_sharks,
                initial_fish: occupied - initial_sharks,
                rules: Rules {
                    fish_breed,
                    shark_breed,
                    starve,
                },
            }
        },
    )
}

/// Creatures whose breed timer will be due after this chronon's tick
fn eligible_breeders(world: &World, species: Species) -> usize {
    world
        .grid()
        .iter()
        .filter(|(_, c)| c.species == species && c.breed_timer + 1 >= c.breed_threshold(world.rules()))
        .count()
}

proptest! {
    #[test]
    fn chronon_preserves_invariants(
        config in config_strategy(),
        seed in any::<u64>(),
        chronons in 1usize..15,
    ) {
        let mut rng = seeded_rng(seed);
        let mut world = World::from_config(&config, &mut rng).unwrap();
        let starve = i64::from(config.rules.starve);

        for _ in 0..chronons {
            let before = world.census();
            let fish_breeders = eligible_breeders(&world, Species::Fish);
            let shark_breeders = eligible_breeders(&world, Species::Shark);

            world = process_chronon(world, &mut rng).unwrap();
            let after = world.census();
            let events = *world.events();

            // Single occupancy: the census and the cell count agree
            prop_assert_eq!(world.grid().occupied(), after.total());

            // Conservation
            prop_assert!(after.fish <= before.fish + fish_breeders);
            prop_assert!(after.sharks <= before.sharks + shark_breeders);
            prop_assert!(events.fish_escaped <= events.fish_eaten);
            prop_assert_eq!(after.fish + events.fish_killed(), before.fish + events.fish_born);
            prop_assert_eq!(after.sharks + events.sharks_starved, before.sharks + events.sharks_born);

            // Every old creature is accounted for exactly once
            prop_assert_eq!(
                events.moves + events.stays + events.sharks_starved + events.fish_killed(),
                before.total()
            );

            // Newborns are exactly the creatures of age zero, all with reset timers
            let newborns: Vec<_> = world.grid().iter().filter(|(_, c)| c.age == 0).collect();
            prop_assert_eq!(newborns.len(), events.births());
            for (_, child) in newborns {
                prop_assert_eq!(child.breed_timer, 0);
            }

            // No starved shark survives; energy never exceeds the ceiling
            for (_, shark) in world.grid().iter().filter(|(_, c)| c.is_shark()) {
                prop_assert!(shark.energy > 0);
                prop_assert!(shark.energy <= starve);
            }

            if after.is_extinct() {
                break;
            }
        }
    }

    #[test]
    fn neighbors_wrap_toroidally(size in 1usize..64, x in 0usize..64, y in 0usize..64) {
        let (x, y) = (x % size, y % size);
        let n = neighbors(x, y, size);

        prop_assert_eq!(n[0], Position::new((x + size - 1) % size, y));
        prop_assert_eq!(n[1], Position::new((x + 1) % size, y));
        prop_assert_eq!(n[2], Position::new(x, (y + size - 1) % size));
        prop_assert_eq!(n[3], Position::new(x, (y + 1) % size));
        for pos in n {
            prop_assert!(pos.x < size && pos.y < size);
        }
    }
}

#[test]
fn neighbors_of_origin_cover_opposite_edges() {
    for size in [3usize, 7, 50] {
        let n = neighbors(0, 0, size);
        assert!(n.contains(&Position::new(size - 1, 0)));
        assert!(n.contains(&Position::new(1, 0)));
        assert!(n.contains(&Position::new(0, size - 1)));
        assert!(n.contains(&Position::new(0, 1)));
    }
}

#[test]
fn default_config_runs_to_budget_or_extinction() {
    let config = SimulationConfig::default();
    let mut rng = seeded_rng(2024);
    let mut world = World::from_config(&config, &mut rng).unwrap();
    assert_eq!(world.census(), Census { fish: 300, sharks: 100 });

    for _ in 0..200 {
        world = process_chronon(world, &mut rng).unwrap();
        if world.census().is_extinct() {
            break;
        }
    }
    assert!(world.chronon() >= 1);
    assert!(world.census().total() <= world.grid().capacity());
}
