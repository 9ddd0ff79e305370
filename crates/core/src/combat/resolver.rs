//! Per-round combat resolution.

use crate::config::GameConfig;
use crate::entity::{Enemy, Player};
use crate::rng::CombatRng;

use super::{CombatAction, RoundOutcome, RoundReport};

/// Resolve one combat round.
///
/// The player acts first. Unless the action ended the fight (a successful
/// flee, or an attack that killed the enemy), the enemy always
/// counter-attacks. Terminal conditions are evaluated enemy-first, so a
/// round in which both sides drop is a victory.
///
/// All randomness comes from `rng`; the same roll sequence reproduces the
/// same round exactly.
pub fn resolve_round(
    player: &mut Player,
    enemy: &mut Enemy,
    action: CombatAction,
    rng: &mut impl CombatRng,
) -> RoundReport {
    // A fight that is already decided stays decided; draw no rolls.
    if enemy.is_dead() {
        return RoundReport::quiet(RoundOutcome::PlayerVictory);
    }
    if player.is_dead() {
        return RoundReport::quiet(RoundOutcome::PlayerDefeat);
    }

    let mut blocking = false;
    let mut damage_dealt = None;

    match action {
        CombatAction::Attack => {
            let damage = player.strength() * rng.next_roll();
            enemy.apply_damage(damage);
            damage_dealt = Some(damage);
        }
        CombatAction::Block => {
            // One-round stance; only the counter-attack below sees it.
            blocking = true;
        }
        CombatAction::Flee => {
            // The threshold is compared against the raw [0, 2) roll, so
            // escape lands 10% of the time.
            if rng.next_roll() < GameConfig::FLEE_SUCCESS_THRESHOLD {
                return RoundReport::quiet(RoundOutcome::PlayerFled);
            }
        }
    }

    let mut damage_taken = None;
    if !enemy.is_dead() {
        let factor = if blocking {
            GameConfig::BLOCK_DAMAGE_FACTOR
        } else {
            1.0
        };
        let damage = enemy.strength() * rng.next_roll() * factor;
        player.apply_damage(damage);
        damage_taken = Some(damage);
    }

    let outcome = if enemy.is_dead() {
        RoundOutcome::PlayerVictory
    } else if player.is_dead() {
        RoundOutcome::PlayerDefeat
    } else {
        RoundOutcome::RoundContinues
    };

    RoundReport {
        outcome,
        damage_dealt,
        damage_taken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRolls;

    #[test]
    fn attack_deals_and_takes_scaled_damage() {
        let mut player = Player::new("tester").with_strength(20.0);
        let mut enemy = Enemy::new(100.0, 15.0);
        let mut rng = ScriptedRolls::new([1.0, 0.5]);

        let report = resolve_round(&mut player, &mut enemy, CombatAction::Attack, &mut rng);

        // strength 20 * roll 1.0
        assert_eq!(report.damage_dealt, Some(20.0));
        assert_eq!(enemy.health(), 80.0);
        // counter: 15 * 0.5
        assert_eq!(report.damage_taken, Some(7.5));
        assert_eq!(player.health(), 92.5);
        assert_eq!(report.outcome, RoundOutcome::RoundContinues);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn block_quarters_the_counter_and_deals_nothing() {
        let mut player = Player::new("tester");
        let mut enemy = Enemy::new(100.0, 15.0);
        let mut rng = ScriptedRolls::new([0.8]);

        let report = resolve_round(&mut player, &mut enemy, CombatAction::Block, &mut rng);

        assert_eq!(report.damage_dealt, None);
        assert_eq!(enemy.health(), 100.0);
        // 15 * 0.8 * 0.25
        assert_eq!(report.damage_taken, Some(3.0));
        assert_eq!(player.health(), 97.0);
        assert_eq!(report.outcome, RoundOutcome::RoundContinues);
    }

    #[test]
    fn flee_below_threshold_escapes_without_counter() {
        let mut player = Player::new("tester");
        let mut enemy = Enemy::new(100.0, 15.0);
        let mut rng = ScriptedRolls::new([0.1]);

        let report = resolve_round(&mut player, &mut enemy, CombatAction::Flee, &mut rng);

        assert_eq!(report.outcome, RoundOutcome::PlayerFled);
        assert_eq!(report.damage_dealt, None);
        assert_eq!(report.damage_taken, None);
        assert_eq!(player.health(), 100.0);
        assert_eq!(enemy.health(), 100.0);
        // Only the flee roll was drawn.
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn failed_flee_still_eats_the_counter() {
        let mut player = Player::new("tester");
        let mut enemy = Enemy::new(100.0, 15.0);
        let mut rng = ScriptedRolls::new([0.3, 1.0]);

        let report = resolve_round(&mut player, &mut enemy, CombatAction::Flee, &mut rng);

        assert_eq!(report.outcome, RoundOutcome::RoundContinues);
        assert_eq!(report.damage_taken, Some(15.0));
        assert_eq!(player.health(), 85.0);
    }

    #[test]
    fn killing_blow_skips_the_counter() {
        let mut player = Player::new("tester");
        let mut enemy = Enemy::new(1.5, 15.0);
        let mut rng = ScriptedRolls::new([1.6]);

        let report = resolve_round(&mut player, &mut enemy, CombatAction::Attack, &mut rng);

        assert_eq!(report.outcome, RoundOutcome::PlayerVictory);
        assert!(enemy.is_dead());
        assert_eq!(report.damage_taken, None);
        assert_eq!(player.health(), 100.0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn player_death_in_counter_is_a_defeat() {
        let mut player = Player::new("tester");
        let mut enemy = Enemy::new(100.0, 100.0);
        let mut rng = ScriptedRolls::new([0.1, 1.5]);

        let report = resolve_round(&mut player, &mut enemy, CombatAction::Attack, &mut rng);

        assert_eq!(report.outcome, RoundOutcome::PlayerDefeat);
        assert!(player.is_dead());
        assert_eq!(player.health(), -50.0);
    }

    #[test]
    fn already_dead_enemy_reports_victory_with_no_rolls() {
        let mut player = Player::new("tester");
        let mut enemy = Enemy::new(10.0, 5.0);
        enemy.apply_damage(10.0);

        let mut rng = ScriptedRolls::new([]);
        let report = resolve_round(&mut player, &mut enemy, CombatAction::Attack, &mut rng);

        assert_eq!(report.outcome, RoundOutcome::PlayerVictory);
        assert_eq!(report.damage_dealt, None);
        assert_eq!(report.damage_taken, None);
    }

    #[test]
    fn already_dead_player_reports_defeat_with_no_rolls() {
        let mut player = Player::new("tester");
        player.apply_damage(200.0);
        let mut enemy = Enemy::new(10.0, 5.0);

        let mut rng = ScriptedRolls::new([]);
        let report = resolve_round(&mut player, &mut enemy, CombatAction::Block, &mut rng);

        assert_eq!(report.outcome, RoundOutcome::PlayerDefeat);
    }

    #[test]
    fn same_seed_replays_the_same_fight() {
        use crate::rng::PcgRng;

        let fight = |seed: u64| {
            let mut player = Player::new("tester");
            let mut enemy = Enemy::new(40.0, 3.0);
            let mut rng = PcgRng::new(seed);
            let mut trace = Vec::new();
            for _ in 0..16 {
                let report = resolve_round(&mut player, &mut enemy, CombatAction::Attack, &mut rng);
                trace.push((
                    report.outcome,
                    player.health().to_bits(),
                    enemy.health().to_bits(),
                ));
                if report.outcome.is_terminal() {
                    break;
                }
            }
            trace
        };

        assert_eq!(fight(7), fight(7));
        assert_ne!(fight(7), fight(8));
    }
}
