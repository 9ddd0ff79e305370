//! Interactive console shell over the combat core.
//!
//! The shell owns the prompt loop and all user-visible text. It feeds the
//! core already-validated actions and reads state back for display; rules
//! and randomness live entirely in `arena-core`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use arena_core::{
    CombatAction, Enemy, InventoryError, PcgRng, Player, RoundOutcome, resolve_round,
};
use strum::IntoEnumIterator;

use crate::config::ShellConfig;

/// Loot granted per defeated enemy, cycled by kill count.
const SPOILS: [&str; 3] = ["battle trophy", "chipped fang", "tattered banner"];

/// How an encounter ended, from the shell's point of view.
enum EncounterEnd {
    Victory,
    Defeat,
    Fled,
    Quit,
}

pub struct Shell {
    config: ShellConfig,
    rng: PcgRng,
    kills: u32,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let rng = PcgRng::new(config.seed);
        Self {
            config,
            rng,
            kills: 0,
        }
    }

    /// Run the full session: name prompt, then encounters until the player
    /// quits, dies, or the input ends.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        let Some(name) = prompt_line(input, out, "What is your name, challenger? ")? else {
            return Ok(());
        };
        let name = if name.trim().is_empty() {
            "Nameless".to_string()
        } else {
            name.trim().to_string()
        };
        let mut player = Player::new(name);
        writeln!(out, "Welcome to the arena, {}.", player.name())?;

        loop {
            let enemy = Enemy::new(self.config.enemy_health, self.config.enemy_strength);
            writeln!(
                out,
                "\nAn enemy steps into the ring ({:.0} health, {:.0} strength).",
                enemy.health(),
                enemy.strength()
            )?;

            match self.run_encounter(&mut player, enemy, input, out)? {
                EncounterEnd::Victory => {
                    self.grant_spoils(&mut player, out)?;
                }
                EncounterEnd::Defeat => {
                    writeln!(out, "You fall. The arena claims another challenger.")?;
                    return Ok(());
                }
                EncounterEnd::Fled => {
                    writeln!(out, "You slip away from the fight.")?;
                }
                EncounterEnd::Quit => return Ok(()),
            }

            match prompt_line(input, out, "Fight again? [y/n] ")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {}
                _ => {
                    writeln!(out, "You leave the arena, {}.", player.name())?;
                    return Ok(());
                }
            }
        }
    }

    /// One fight: prompt, resolve, display, until a terminal outcome.
    fn run_encounter(
        &mut self,
        player: &mut Player,
        mut enemy: Enemy,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<EncounterEnd> {
        loop {
            writeln!(
                out,
                "\nYou: {:.1}/{:.1}  Enemy: {:.1}/{:.1}",
                player.health(),
                player.max_health(),
                enemy.health(),
                enemy.max_health()
            )?;
            let menu: Vec<String> = CombatAction::iter()
                .map(|action| format!("[{}] {}", action.menu_index(), action))
                .collect();
            let prompt = format!("{}  (i)nventory (s)tats (q)uit > ", menu.join("  "));

            let Some(line) = prompt_line(input, out, &prompt)? else {
                return Ok(EncounterEnd::Quit);
            };

            match line.trim() {
                "i" => {
                    print_inventory(player, out)?;
                    continue;
                }
                "s" => {
                    print_stats(player, out)?;
                    continue;
                }
                "q" => return Ok(EncounterEnd::Quit),
                _ => {}
            }

            // Invalid input consumes no round: no roll, no counter-attack.
            let action = match line.parse::<CombatAction>() {
                Ok(action) => action,
                Err(error) => {
                    writeln!(out, "{error}; choose again.")?;
                    continue;
                }
            };

            let report = resolve_round(player, &mut enemy, action, &mut self.rng);

            if let Some(damage) = report.damage_dealt {
                writeln!(out, "You hit the enemy for {damage:.1} damage.")?;
            }
            if action == CombatAction::Block {
                writeln!(out, "You brace behind your guard.")?;
            }
            if let Some(damage) = report.damage_taken {
                writeln!(out, "The enemy strikes back for {damage:.1} damage.")?;
            }

            match report.outcome {
                RoundOutcome::PlayerVictory => {
                    writeln!(out, "The enemy collapses!")?;
                    return Ok(EncounterEnd::Victory);
                }
                RoundOutcome::PlayerDefeat => return Ok(EncounterEnd::Defeat),
                RoundOutcome::PlayerFled => return Ok(EncounterEnd::Fled),
                RoundOutcome::RoundContinues => {
                    if action == CombatAction::Flee {
                        writeln!(out, "You fail to break away.")?;
                    }
                }
            }
        }
    }

    /// Experience and loot for a kill.
    fn grant_spoils(&mut self, player: &mut Player, out: &mut impl Write) -> Result<()> {
        let before = player.level();
        player.add_experience(self.config.victory_experience);
        writeln!(
            out,
            "You gain {:.0} experience ({:.0}/{:.0} toward level {}).",
            self.config.victory_experience,
            player.experience(),
            player.experience_to_next_level(),
            player.level() + 1
        )?;
        if player.level() > before {
            writeln!(out, "You reach level {}!", player.level())?;
        }

        let loot = SPOILS[self.kills as usize % SPOILS.len()];
        self.kills += 1;
        match player.inventory_mut().add_item(loot) {
            Ok(index) => writeln!(out, "You pick up a {loot} (slot {index}).")?,
            Err(error @ InventoryError::Full { .. }) => {
                tracing::warn!(%error, "loot dropped");
                writeln!(out, "Your pack is full; the {loot} stays in the sand.")?;
            }
            Err(error) => return Err(error).context("storing loot"),
        }
        Ok(())
    }
}

/// Print a prompt and read one line. `None` means the input ended.
fn prompt_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn print_inventory(player: &Player, out: &mut impl Write) -> Result<()> {
    let inventory = player.inventory();
    writeln!(
        out,
        "Inventory ({}/{} slots):",
        inventory.occupied(),
        inventory.capacity()
    )?;
    for (index, name) in inventory.list_items() {
        writeln!(out, "  {index:>2}: {name}")?;
    }
    Ok(())
}

fn print_stats(player: &Player, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", player.name())?;
    writeln!(out, "  level:      {}", player.level())?;
    writeln!(
        out,
        "  experience: {:.1}/{:.1}",
        player.experience(),
        player.experience_to_next_level()
    )?;
    writeln!(
        out,
        "  health:     {:.1}/{:.1}",
        player.health(),
        player.max_health()
    )?;
    writeln!(out, "  strength:   {:.1}", player.strength())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_config() -> ShellConfig {
        ShellConfig {
            seed: 1,
            enemy_health: 100.0,
            enemy_strength: 15.0,
            victory_experience: 50.0,
        }
    }

    fn run_session(script: &str) -> String {
        let mut shell = Shell::new(fixed_config());
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        shell.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn session_ends_cleanly_on_eof() {
        let out = run_session("");
        assert!(out.contains("What is your name"));
    }

    #[test]
    fn greets_and_quits() {
        let out = run_session("Ayla\nq\n");
        assert!(out.contains("Welcome to the arena, Ayla."));
        assert!(out.contains("An enemy steps into the ring"));
    }

    #[test]
    fn blank_name_gets_a_default() {
        let out = run_session("\nq\n");
        assert!(out.contains("Welcome to the arena, Nameless."));
    }

    #[test]
    fn invalid_choice_reprompts_without_a_round() {
        let out = run_session("Ayla\ndance\nq\n");
        assert!(out.contains("invalid combat action"));
        // No damage line: the bad input consumed no round.
        assert!(!out.contains("strikes back"));
    }

    #[test]
    fn stats_view_shows_starting_numbers() {
        let out = run_session("Ayla\ns\nq\n");
        assert!(out.contains("level:      0"));
        assert!(out.contains("experience: 0.0/100.0"));
        assert!(out.contains("strength:   1.0"));
    }

    #[test]
    fn inventory_view_starts_empty() {
        let out = run_session("Ayla\ni\nq\n");
        assert!(out.contains("Inventory (0/27 slots):"));
    }

    #[test]
    fn attacking_prints_damage_lines() {
        let out = run_session("Ayla\nattack\nq\n");
        assert!(out.contains("You hit the enemy for"));
        assert!(out.contains("strikes back for"));
    }
}
