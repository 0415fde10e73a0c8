// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{InteractionManager, ManagerKey};
use bevy::{prelude::*, utils::HashMap};

/// Enabled interaction managers, indexed by [`ManagerKey`].
///
/// When several enabled managers share a key, lookups return the one with the lowest [`Entity`],
/// which is stable for the lifetime of the managers involved.
#[derive(Resource, Debug, Default)]
pub struct InteractionManagerRegistry {
    managers: HashMap<ManagerKey, Vec<Entity>>,
}

impl InteractionManagerRegistry {
    /// Returns the manager registered for `key`, if any.
    pub fn find(&self, key: ManagerKey) -> Option<Entity> {
        self.managers
            .get(&key)
            .and_then(|entities| entities.first().copied())
    }

    /// Number of enabled managers known to the registry.
    pub fn len(&self) -> usize {
        self.managers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }

    /// Replaces the registry contents.  Disabled managers are left out.
    pub fn rebuild<'a>(
        &mut self,
        managers: impl IntoIterator<Item = (Entity, &'a InteractionManager)>,
    ) {
        self.managers.clear();
        for (entity, manager) in managers {
            if manager.enabled {
                self.managers.entry(manager.key()).or_default().push(entity);
            }
        }
        for entities in self.managers.values_mut() {
            entities.sort_unstable();
        }
    }
}

/// Rebuilds the registry whenever a manager is added, reconfigured, or removed.
pub fn refresh_manager_registry(
    mut registry: ResMut<InteractionManagerRegistry>,
    managers: Query<(Entity, &InteractionManager)>,
    changed: Query<(), Changed<InteractionManager>>,
    mut removed: RemovedComponents<InteractionManager>,
) {
    // Drain the removal reader even when a change alone already forces a rebuild.
    let any_removed = removed.read().count() > 0;
    if changed.is_empty() && !any_removed {
        return;
    }

    registry.rebuild(managers.iter());
    debug!("Interaction manager registry holds {} manager(s)", registry.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackingPlugin;

    fn manager(player_index: i32, right_hand_interaction: bool) -> InteractionManager {
        InteractionManager {
            player_index,
            right_hand_interaction,
            ..default()
        }
    }

    fn key(player_index: i32, right_hand_interaction: bool) -> ManagerKey {
        ManagerKey {
            player_index,
            right_hand_interaction,
        }
    }

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(TrackingPlugin);
        app
    }

    #[test]
    fn lookup_by_player_and_hand() {
        let mut app = app();
        let first_right = app.world.spawn(manager(0, true)).id();
        let first_left = app.world.spawn(manager(0, false)).id();
        let second_right = app.world.spawn(manager(1, true)).id();
        app.update();

        let registry = app.world.resource::<InteractionManagerRegistry>();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.find(key(0, true)), Some(first_right));
        assert_eq!(registry.find(key(0, false)), Some(first_left));
        assert_eq!(registry.find(key(1, true)), Some(second_right));
        assert_eq!(registry.find(key(1, false)), None);
    }

    #[test]
    fn disabled_managers_are_skipped() {
        let mut app = app();
        app.world.spawn(InteractionManager {
            enabled: false,
            ..manager(0, true)
        });
        let enabled = app.world.spawn(manager(0, true)).id();
        app.update();

        let registry = app.world.resource::<InteractionManagerRegistry>();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find(key(0, true)), Some(enabled));
    }

    #[test]
    fn duplicate_keys_resolve_to_lowest_entity() {
        let mut app = app();
        let first = app.world.spawn(manager(2, true)).id();
        app.world.spawn(manager(2, true));
        app.update();

        assert_eq!(
            app.world
                .resource::<InteractionManagerRegistry>()
                .find(key(2, true)),
            Some(first)
        );
    }

    #[test]
    fn follows_reconfiguration_and_removal() {
        let mut app = app();
        let entity = app.world.spawn(manager(0, true)).id();
        app.update();

        app.world
            .get_mut::<InteractionManager>(entity)
            .unwrap()
            .enabled = false;
        app.update();
        assert!(app.world.resource::<InteractionManagerRegistry>().is_empty());

        app.world
            .get_mut::<InteractionManager>(entity)
            .unwrap()
            .enabled = true;
        app.update();
        assert_eq!(
            app.world
                .resource::<InteractionManagerRegistry>()
                .find(key(0, true)),
            Some(entity)
        );

        app.world.despawn(entity);
        app.update();
        assert!(app.world.resource::<InteractionManagerRegistry>().is_empty());
    }
}

// End of File
