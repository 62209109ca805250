//! Object placement for a fresh floor

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Ally, AllyActionKind, Enemy, Sprite, WorldObject};
use crate::data::ObjectTemplates;
use crate::world::{Map, Position};

pub fn stairs_sprite() -> Sprite {
    Sprite::new('>', '▼', (220, 220, 200))
}

/// Place the stairs and every template's objects on distinct reachable cells
///
/// The stairs go on the reachable cell farthest from the start. Everything
/// else is shuffled over the remaining cells; when the floor runs out of room
/// the rest is dropped.
pub fn spawn_objects_for_floor(
    rng: &mut impl Rng,
    map: &Map,
    templates: &ObjectTemplates,
    level: u32,
) -> Vec<WorldObject> {
    let mut free: Vec<Position> = map
        .reachable_from(map.start_pos)
        .into_iter()
        .filter(|pos| *pos != map.start_pos)
        .collect();

    let mut objects = Vec::new();

    // BFS order ends on the farthest cell
    let Some(exit) = free.pop() else {
        log::warn!("Floor {} has no room for stairs", level);
        return objects;
    };
    objects.push(WorldObject::Ally(Ally::new(
        "stairs",
        stairs_sprite(),
        exit,
        AllyActionKind::Descend.action(),
    )));

    free.shuffle(rng);

    for template in &templates.allies {
        for _ in 0..template.count.for_level(level) {
            let Some(pos) = free.pop() else { break };
            objects.push(
                Ally::new(template.name.clone(), template.sprite, pos, template.action.action()).into(),
            );
        }
    }

    for template in &templates.enemies {
        for _ in 0..template.count.for_level(level) {
            let Some(pos) = free.pop() else { break };
            let mut enemy = Enemy::new(
                template.name.clone(),
                template.sprite,
                template.stats.clone(),
                template.experience,
                pos,
            );
            if let Some(hex) = template.hex {
                enemy = enemy.with_hex(hex);
            }
            objects.push(enemy.into());
        }
    }

    log::info!("Spawned {} objects on floor {}", objects.len(), level);
    objects
}
