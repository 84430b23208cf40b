//! Standard and special roll handling.

use std::sync::Arc;

use tracing::debug;

use crate::command::domain::{
    AddresseeSplit, BotIdSplit, EvaluatedPool, RollPlan, RollRequest, RollRequestBuilder,
    RollVariant,
};
use crate::command::ports::RollEngine;
use crate::command::render::Reply;

/// Turns roll commands into engine calls.
///
/// Both variants share one flow; they differ only in the again threshold
/// the builder forces and the engine entry point used.
#[derive(Debug)]
pub struct RollService<E, S = BotIdSplit>
where
    E: RollEngine,
{
    engine: Arc<E>,
    builder: RollRequestBuilder<S>,
}

impl<E, S> RollService<E, S>
where
    E: RollEngine,
    S: AddresseeSplit,
{
    /// Creates a roll service.
    #[must_use]
    pub const fn new(engine: Arc<E>, builder: RollRequestBuilder<S>) -> Self {
        Self { engine, builder }
    }

    /// Handles a roll command.
    ///
    /// Returns `None` when no dice amount could be found. Rejections and
    /// pool expression errors come back as reply text. Any
    /// [`MENTION_MARKER`](crate::command::render::MENTION_MARKER) in the
    /// engine's output names the author.
    #[must_use]
    pub fn handle(&self, text: &str, variant: RollVariant, sender_nick: &str) -> Option<Reply> {
        let plan = self.builder.plan(text, variant, sender_nick);
        debug!(?variant, ?plan, "planned roll");
        match plan {
            RollPlan::SingleDie => Some(Reply::addressed(self.engine.roll_special())),
            RollPlan::Dispatch { request, pool } => {
                Some(Reply::addressed(self.dispatch(&request, pool.as_ref()).join("\n")))
            }
            RollPlan::Rejected(rejection) => Some(Reply::verbatim(rejection.to_string())),
            RollPlan::NotUnderstood => None,
        }
    }

    fn dispatch(&self, request: &RollRequest, pool: Option<&EvaluatedPool>) -> Vec<String> {
        let mut lines: Vec<String> = pool
            .map(|evaluated| pool_preface(evaluated, request.chance))
            .into_iter()
            .collect();
        let rolled = if request.chance {
            self.engine.roll_chance(request.paradox)
        } else if request.special {
            self.engine.special_roll_set(request)
        } else {
            self.engine.roll_set(request)
        };
        lines.extend(rolled);
        lines
    }
}

/// Describes how a pool expression was resolved.
#[must_use]
pub fn pool_preface(pool: &EvaluatedPool, chance: bool) -> String {
    let suffix = if chance { " - chance roll" } else { "" };
    format!(
        "Calculated a pool of `{}={}` dice{suffix}",
        pool.expression, pool.total
    )
}
