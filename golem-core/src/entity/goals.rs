//! AI goal tables.
//!
//! The host owns the goal scheduler; this module only supplies what the
//! golem wants it to run. Each table is a static list of tagged goal
//! descriptors with a priority, lower numbers winning. Entries sharing a
//! priority keep their declaration order.

use super::golem::EnderiteGolem;
use super::{EntityKind, EntityRef};

/// A goal with its scheduling priority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalEntry<G> {
    /// Lower runs first.
    pub priority: u8,
    /// The goal descriptor.
    pub goal: G,
}

/// Movement and look goals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementGoal {
    /// Chase and hit the current target.
    MeleeAttack {
        /// Speed multiplier while chasing.
        speed_modifier: f64,
        /// Keep chasing after losing sight of the target.
        follow_even_if_not_seen: bool,
    },
    /// Walk towards the target while it is within range.
    MoveTowardsTarget {
        /// Speed multiplier.
        speed_modifier: f64,
        /// Maximum distance to the target.
        within: f32,
    },
    /// Head back to the home village.
    MoveBackToVillage {
        /// Speed multiplier.
        speed_modifier: f64,
        /// Only trigger after a period of idling.
        check_no_action_time: bool,
    },
    /// Wander around inside the village.
    GolemRandomStrollInVillage {
        /// Speed multiplier.
        speed_modifier: f64,
    },
    /// Watch nearby players.
    LookAtPlayer {
        /// Range at which players are noticed.
        look_distance: f32,
    },
    /// Idly look around.
    RandomLookAround,
}

/// Which entities a targeting goal scans for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    /// Players only.
    Player,
    /// Any mob.
    Mob,
}

impl TargetType {
    /// Whether an entity of `kind` is scanned by this type.
    #[must_use]
    pub const fn includes(self, kind: EntityKind) -> bool {
        match self {
            Self::Player => matches!(kind, EntityKind::Player),
            Self::Mob => kind.is_mob(),
        }
    }
}

/// Extra condition a candidate target must meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFilter {
    /// The golem holds a grudge against the candidate.
    AngryAt,
    /// The candidate is hostile but not a creeper.
    EnemyNotCreeper,
}

impl TargetFilter {
    /// Evaluates the filter for `candidate`.
    #[must_use]
    pub fn matches(self, golem: &EnderiteGolem, candidate: &EntityRef) -> bool {
        match self {
            Self::AngryAt => golem.is_angry_at(candidate),
            Self::EnemyNotCreeper => {
                candidate.kind.is_enemy() && candidate.kind != EntityKind::Creeper
            }
        }
    }
}

/// Target selection goals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetGoal {
    /// Retaliate against whoever last hurt the golem.
    HurtByTarget,
    /// Pick the nearest matching entity.
    NearestAttackableTarget {
        /// Entities scanned.
        target_type: TargetType,
        /// One in this many ticks a scan runs.
        random_interval: u32,
        /// Target must be visible.
        must_see: bool,
        /// Target must be reachable by path.
        must_reach: bool,
        /// Additional condition.
        filter: TargetFilter,
    },
    /// Drop universal anger once the target is gone.
    ResetUniversalAngerTarget {
        /// Also calm down nearby golems.
        also_alert_same_type: bool,
    },
}

impl TargetGoal {
    /// Whether this goal would accept `candidate` as a new target.
    #[must_use]
    pub fn accepts(&self, golem: &EnderiteGolem, candidate: &EntityRef) -> bool {
        if !golem.can_attack_type(candidate.kind) {
            return false;
        }
        match self {
            Self::HurtByTarget => golem
                .last_hurt_by_mob()
                .is_some_and(|attacker| attacker.uuid == candidate.uuid),
            Self::NearestAttackableTarget {
                target_type,
                filter,
                ..
            } => target_type.includes(candidate.kind) && filter.matches(golem, candidate),
            Self::ResetUniversalAngerTarget { .. } => false,
        }
    }
}

/// The golem's movement goals.
pub static GOLEM_GOALS: &[GoalEntry<MovementGoal>] = &[
    GoalEntry {
        priority: 1,
        goal: MovementGoal::MeleeAttack {
            speed_modifier: 1.0,
            follow_even_if_not_seen: true,
        },
    },
    GoalEntry {
        priority: 2,
        goal: MovementGoal::MoveTowardsTarget {
            speed_modifier: 0.9,
            within: 32.0,
        },
    },
    GoalEntry {
        priority: 2,
        goal: MovementGoal::MoveBackToVillage {
            speed_modifier: 0.6,
            check_no_action_time: false,
        },
    },
    GoalEntry {
        priority: 4,
        goal: MovementGoal::GolemRandomStrollInVillage {
            speed_modifier: 0.6,
        },
    },
    GoalEntry {
        priority: 7,
        goal: MovementGoal::LookAtPlayer { look_distance: 6.0 },
    },
    GoalEntry {
        priority: 8,
        goal: MovementGoal::RandomLookAround,
    },
];

/// The golem's target selection goals.
pub static GOLEM_TARGET_GOALS: &[GoalEntry<TargetGoal>] = &[
    GoalEntry {
        priority: 2,
        goal: TargetGoal::HurtByTarget,
    },
    GoalEntry {
        priority: 3,
        goal: TargetGoal::NearestAttackableTarget {
            target_type: TargetType::Player,
            random_interval: 10,
            must_see: true,
            must_reach: false,
            filter: TargetFilter::AngryAt,
        },
    },
    GoalEntry {
        priority: 3,
        goal: TargetGoal::NearestAttackableTarget {
            target_type: TargetType::Mob,
            random_interval: 5,
            must_see: false,
            must_reach: false,
            filter: TargetFilter::EnemyNotCreeper,
        },
    },
    GoalEntry {
        priority: 4,
        goal: TargetGoal::ResetUniversalAngerTarget {
            also_alert_same_type: false,
        },
    },
];

/// Entries in evaluation order: by priority, ties in declaration order.
pub fn by_priority<G>(
    table: &'static [GoalEntry<G>],
) -> impl Iterator<Item = &'static GoalEntry<G>> {
    let mut sorted: Vec<&'static GoalEntry<G>> = table.iter().collect();
    sorted.sort_by_key(|entry| entry.priority);
    sorted.into_iter()
}

/// The first entry, in evaluation order, that `can_use` accepts.
pub fn select<G>(
    table: &'static [GoalEntry<G>],
    mut can_use: impl FnMut(&G) -> bool,
) -> Option<&'static GoalEntry<G>> {
    by_priority(table).find(|entry| can_use(&entry.goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{golem, player, zombie};

    #[test]
    fn test_movement_table_order() {
        let priorities: Vec<u8> = by_priority(GOLEM_GOALS).map(|e| e.priority).collect();
        assert_eq!(priorities, vec![1, 2, 2, 4, 7, 8]);

        // Ties keep declaration order.
        let second: Vec<_> = by_priority(GOLEM_GOALS).skip(1).take(2).collect();
        assert!(matches!(second[0].goal, MovementGoal::MoveTowardsTarget { .. }));
        assert!(matches!(second[1].goal, MovementGoal::MoveBackToVillage { .. }));
    }

    #[test]
    fn test_select_skips_unusable() {
        let picked = select(GOLEM_GOALS, |goal| {
            !matches!(
                goal,
                MovementGoal::MeleeAttack { .. } | MovementGoal::MoveTowardsTarget { .. }
            )
        });
        assert!(matches!(
            picked.map(|e| e.goal),
            Some(MovementGoal::MoveBackToVillage { .. })
        ));

        assert!(select(GOLEM_GOALS, |_| false).is_none());
    }

    #[test]
    fn test_enemy_filter() {
        let golem = golem();
        let mob_goal = GOLEM_TARGET_GOALS[2].goal;

        assert!(mob_goal.accepts(&golem, &zombie()));
        assert!(!mob_goal.accepts(&golem, &player()));

        let creeper = EntityRef::new(zombie().uuid, EntityKind::Creeper);
        assert!(!mob_goal.accepts(&golem, &creeper));

        let cow = EntityRef::new(zombie().uuid, EntityKind::Animal);
        assert!(!mob_goal.accepts(&golem, &cow));
    }

    #[test]
    fn test_player_goal_requires_anger() {
        let mut golem = golem();
        let player_goal = GOLEM_TARGET_GOALS[1].goal;
        let player = player();

        assert!(!player_goal.accepts(&golem, &player));

        golem.anger_mut().set_target(Some(player.uuid));
        golem.anger_mut().set_remaining_ticks(100);
        assert!(player_goal.accepts(&golem, &player));

        golem.set_player_created(true);
        assert!(!player_goal.accepts(&golem, &player));
    }
}
