//! Gauntlet entry point
//!
//! Native headless runner: loads tuning, then drives the fixed-step loop with
//! a seeded random input stream and logs what happened. Useful as a soak test
//! for the simulation; drawing is left to a real frontend.
//!
//! Usage: `gauntlet [tuning.json] [seed] [seconds]`

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use gauntlet::assets::CharacterVisual;
use gauntlet::consts::*;
use gauntlet::sim::{GamePhase, GameState, LogicalKey, TickInput, tick};
use gauntlet::view::Frame;
use gauntlet::Tuning;

const DEFAULT_SEED: u64 = 0x6A75_6E74;
const DEFAULT_SECONDS: u64 = 120;
const WARRIOR_SHEET: &str = "assets/warrior.png";

/// Running totals over the whole soak
#[derive(Debug, Default)]
struct Totals {
    ticks: u64,
    shots: u64,
    spawned: u64,
    killed: u64,
    generators_destroyed: u64,
    damage_taken: u64,
    deaths: u64,
}

/// Random held keys, re-rolled every so often so the player wanders
fn random_input(rng: &mut Pcg32, held: &mut TickInput) -> TickInput {
    if rng.random_ratio(1, 20) {
        *held = TickInput::from_lookup(|key| match key {
            LogicalKey::Up | LogicalKey::Down | LogicalKey::Left | LogicalKey::Right => {
                rng.random_bool(0.3)
            }
            _ => false,
        });
    }
    let fire = rng.random_bool(0.2);
    TickInput::from_lookup(|key| held.is_pressed(key) || (key == LogicalKey::Fire && fire))
}

/// Fixed-step ticks covering `seconds` of game time
fn ticks_for(seconds: u64) -> Result<u64> {
    let ms = seconds
        .checked_mul(1000)
        .with_context(|| format!("{seconds} seconds is too long to simulate"))?;
    Ok(ms / SIM_DT_MS)
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Gauntlet (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) if path != "-" => {
            Tuning::load(&path).with_context(|| format!("loading tuning from {path}"))?
        }
        _ => Tuning::default(),
    };
    let seed = match args.next() {
        Some(s) => s.parse().with_context(|| format!("seed must be an integer, got {s:?}"))?,
        None => DEFAULT_SEED,
    };
    let seconds = match args.next() {
        Some(s) => s.parse().with_context(|| format!("seconds must be an integer, got {s:?}"))?,
        None => DEFAULT_SECONDS,
    };

    let visual = CharacterVisual::load_or_fallback(WARRIOR_SHEET, [0, 0, 255]);
    let kind = if visual.is_fallback() {
        "fallback box"
    } else {
        "sprite sheet"
    };
    log::info!("Player visual: {kind}");

    log::debug!("Tuning: {}", tuning.to_json()?);
    let mut state = GameState::new(tuning);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut held = TickInput::default();
    let mut totals = Totals::default();

    let total_ticks = ticks_for(seconds)?;
    for _ in 0..total_ticks {
        let input = match state.phase {
            GamePhase::Menu | GamePhase::GameOver => TickInput {
                confirm: true,
                ..Default::default()
            },
            _ => random_input(&mut rng, &mut held),
        };

        let events = tick(&mut state, &input, SIM_DT_MS);
        totals.ticks += 1;
        totals.shots += u64::from(events.shots_fired);
        totals.spawned += u64::from(events.enemies_spawned);
        totals.killed += u64::from(events.enemies_killed);
        totals.generators_destroyed += u64::from(events.generators_destroyed);
        totals.damage_taken += u64::from(events.damage_taken);
        if events.phase_changed == Some(GamePhase::GameOver) {
            totals.deaths += 1;
        }
    }

    let frame = Frame::capture(&state, &state.camera);
    log::info!("Final HUD: {:?}", frame.hud);
    println!(
        "seed {seed}: {} ticks, {} shots, {} spawned, {} killed, \
         {} generators destroyed, {} damage taken, {} deaths",
        totals.ticks,
        totals.shots,
        totals.spawned,
        totals.killed,
        totals.generators_destroyed,
        totals.damage_taken,
        totals.deaths
    );
    println!(
        "health {}/{}, {} enemies alive, {} generators left",
        frame.hud.health, frame.hud.max_health, frame.hud.enemies, frame.hud.generators
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_for() {
        assert_eq!(ticks_for(0).unwrap(), 0);
        assert_eq!(ticks_for(120).unwrap(), 120_000 / SIM_DT_MS);
        assert!(ticks_for(u64::MAX).is_err());
    }

    #[test]
    fn test_random_input_only_moves_and_fires() {
        let mut rng = Pcg32::seed_from_u64(DEFAULT_SEED);
        let mut held = TickInput::default();
        for _ in 0..2000 {
            let input = random_input(&mut rng, &mut held);
            assert!(!input.confirm && !input.pause);
            assert!(!held.fire);
            for key in [LogicalKey::Up, LogicalKey::Down, LogicalKey::Left, LogicalKey::Right] {
                assert_eq!(input.is_pressed(key), held.is_pressed(key));
            }
        }
    }
}
