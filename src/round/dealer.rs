use alloc::vec;
use alloc::vec::Vec;
use tracing::debug;

use crate::result::Outcome;
use crate::schedule::DealerTick;
use crate::score::BLACKJACK;

use super::{Effect, Pending, Round, RoundState, Side, Transition};

impl Round {
    /// Evaluates the dealer's hand after the player stands or after each
    /// dealer draw.
    ///
    /// The dealer busts over 21, stands according to the house rule, and
    /// otherwise schedules exactly one more draw.
    pub(super) fn dealer_step(&mut self) -> Vec<Effect> {
        let value = self.dealer.value();

        if value > BLACKJACK {
            self.finish(Outcome::DealerBust);
            return Vec::new();
        }

        if self.options.dealer_stands(value, self.dealer.is_soft()) {
            self.finish(Outcome::compare(self.player.value(), value));
            return Vec::new();
        }

        self.tick_armed = true;
        debug!(generation = self.generation, dealer = value, "dealer will draw");
        vec![Effect::ScheduleDealerDraw {
            tick: DealerTick {
                generation: self.generation,
            },
            delay: self.options.dealer_delay,
        }]
    }

    /// Delivers a scheduled dealer draw.
    ///
    /// Ticks from an earlier generation, or arriving when no draw is
    /// scheduled, are ignored.
    pub fn tick(&mut self, tick: DealerTick) -> Transition {
        if tick.generation != self.generation
            || !self.tick_armed
            || self.state != RoundState::DealerTurn
        {
            debug!(
                tick = tick.generation,
                generation = self.generation,
                "ignoring stale dealer tick"
            );
            return self.stale();
        }

        self.tick_armed = false;
        let effect = self.issue(Pending::Draw {
            side: Side::Dealer,
            count: 1,
        });

        self.transition(vec![effect])
    }
}
