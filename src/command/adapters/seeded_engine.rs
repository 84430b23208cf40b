//! Reference roll engine.
//!
//! A small Chronicles of Darkness style roller so the console binary is
//! usable without an external engine: d10 pools, successes on 8 or more,
//! exploding dice at the again threshold, rote rerolls and chance dice.

use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::command::domain::{AgainThreshold, RollRequest};
use crate::command::ports::RollEngine;

const SUCCESS_FACE: u8 = 8;
const EXCEPTIONAL_SUCCESSES: i32 = 5;

/// Roll engine backed by a seedable `ChaCha8` generator.
#[derive(Debug)]
pub struct SeededRollEngine {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededRollEngine {
    /// Creates an engine with a fixed seed, for reproducible rolls.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates an engine seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }

    fn roll_faces(&self, count: u32) -> Vec<u8> {
        // The generator holds no invariant a panicked roll could break.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| {
            warn!("roll generator lock poisoned; recovering");
            poisoned.into_inner()
        });
        (0..count).map(|_| rng.gen_range(1..=10)).collect()
    }

    fn roll_die(&self) -> u8 {
        self.roll_faces(1).first().copied().unwrap_or(1)
    }

    fn roll_pool(&self, request: &RollRequest) -> Vec<u8> {
        let mut faces = Vec::new();
        for face in self.roll_faces(request.dice_amount) {
            let mut current = if request.rote && face < SUCCESS_FACE {
                faces.push(face);
                self.roll_die()
            } else {
                face
            };
            faces.push(current);
            while request.again.explodes(current) {
                current = self.roll_die();
                faces.push(current);
            }
        }
        faces
    }
}

impl RollEngine for SeededRollEngine {
    fn roll_chance(&self, paradox: bool) -> Vec<String> {
        let face = self.roll_die();
        let verdict = match face {
            10 => "Success!",
            1 => "Dramatic failure!",
            _ => "Failure",
        };
        let label = if paradox { "Paradox chance die" } else { "Chance die" };
        vec![format!("{label}: {face}"), verdict.to_owned()]
    }

    fn roll_set(&self, request: &RollRequest) -> Vec<String> {
        let faces = self.roll_pool(request);
        let successes = count_successes(&faces);
        vec![
            header(request, &faces),
            verdict(i32::try_from(successes).unwrap_or(i32::MAX)),
        ]
    }

    fn special_roll_set(&self, request: &RollRequest) -> Vec<String> {
        let special = RollRequest {
            again: AgainThreshold::Never,
            ..request.clone()
        };
        let faces = self.roll_pool(&special);
        let ones = faces.iter().filter(|face| **face == 1).count();
        let net = i32::try_from(count_successes(&faces))
            .unwrap_or(i32::MAX)
            .saturating_sub(i32::try_from(ones).unwrap_or(i32::MAX));
        vec![header(&special, &faces), verdict(net)]
    }

    fn roll_special(&self) -> String {
        format!("Rolled one die: {}", self.roll_die())
    }
}

fn count_successes(faces: &[u8]) -> usize {
    faces.iter().filter(|face| **face >= SUCCESS_FACE).count()
}

fn header(request: &RollRequest, faces: &[u8]) -> String {
    let mut modifiers = vec![request.again.to_string()];
    for (enabled, name) in [
        (request.rote, "rote"),
        (request.paradox, "paradox"),
        (request.frenzy, "frenzy"),
    ] {
        if enabled {
            modifiers.push(name.to_owned());
        }
    }
    let rolled = faces
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} rolled {} dice ({}): {rolled}",
        request.sender_nick,
        request.dice_amount,
        modifiers.join(", ")
    )
}

fn verdict(successes: i32) -> String {
    match successes {
        count if count >= EXCEPTIONAL_SUCCESSES => format!("Exceptional success: {count} successes"),
        1 => "1 success".to_owned(),
        count if count > 1 => format!("{count} successes"),
        _ => "Failure".to_owned(),
    }
}
