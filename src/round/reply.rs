use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use tracing::{debug, info, warn};

use crate::card::{Card, WireCard};
use crate::error::{RoundError, SourceError};
use crate::result::Outcome;

use super::{Pending, Reply, Round, RoundState, Side, Transition};

impl Round {
    /// Feeds the card source's reply to the request issued under
    /// `generation`.
    ///
    /// Replies for an earlier generation, or arriving when nothing is in
    /// flight, are ignored and reported as a stale transition. An exhausted
    /// deck is replaced and the draw re-issued without surfacing an error.
    ///
    /// # Errors
    ///
    /// - [`RoundError::SourceUnavailable`] if the request failed. State and
    ///   hands are unchanged; use [`retry`](Self::retry) or repeat the action.
    /// - [`RoundError::MalformedCard`] or [`RoundError::WrongCardCount`] if the
    ///   cards cannot be used. The round is reset to idle.
    /// - [`RoundError::UnexpectedReply`] if the reply answers a different kind
    ///   of request. The request stays in flight.
    pub fn complete(&mut self, generation: u64, reply: Reply) -> Result<Transition, RoundError> {
        if generation != self.generation {
            debug!(
                reply = generation,
                generation = self.generation,
                "ignoring reply from an earlier round"
            );
            return Ok(self.stale());
        }

        let Some(pending) = self.in_flight.take() else {
            debug!(generation, "ignoring reply with nothing in flight");
            return Ok(self.stale());
        };

        match (pending, reply) {
            (Pending::Reshuffle | Pending::Draw { .. }, Reply::Failed(SourceError::Exhausted)) => {
                info!(
                    generation,
                    deck = ?self.deck,
                    "deck exhausted; requesting a new one"
                );
                let resume = match pending {
                    Pending::Draw { .. } => pending,
                    _ => Pending::INITIAL,
                };
                let effect = self.replace_deck(resume, true);
                Ok(self.transition(vec![effect]))
            }
            (_, Reply::Failed(error)) => {
                warn!(generation, ?pending, %error, "card source request failed");
                self.stalled = Some(pending);
                self.set_message(pending.failure_message());
                Err(RoundError::SourceUnavailable)
            }
            (Pending::NewDeck { replacing }, Reply::Deck(deck)) => {
                debug!(generation, deck = %deck, "deck acquired");
                self.deck = Some(deck);
                if replacing {
                    self.deck_replaced = true;
                    self.set_message("New deck shuffled.");
                }
                let resume = self.resume.take().unwrap_or(Pending::INITIAL);
                let effect = self.issue(resume);
                Ok(self.transition(vec![effect]))
            }
            (Pending::Reshuffle, Reply::Reshuffled) => {
                let effect = self.issue(Pending::INITIAL);
                Ok(self.transition(vec![effect]))
            }
            (Pending::Draw { side, count }, Reply::Cards(cards)) => {
                self.receive_cards(side, count, &cards)
            }
            (pending, reply) => {
                warn!(generation, ?pending, ?reply, "reply does not answer the request");
                self.in_flight = Some(pending);
                Err(RoundError::UnexpectedReply)
            }
        }
    }

    fn receive_cards(
        &mut self,
        side: Side,
        count: usize,
        wire: &[WireCard],
    ) -> Result<Transition, RoundError> {
        if wire.len() != count {
            return Err(self.fail_round(RoundError::WrongCardCount {
                expected: count,
                got: wire.len(),
            }));
        }

        let cards = match wire.iter().map(Card::try_from).collect::<Result<Vec<_>, _>>() {
            Ok(cards) => cards,
            Err(error) => return Err(self.fail_round(error.into())),
        };

        // A fresh-deck notice outlives the draw it was fetched for.
        let keep_notice = core::mem::take(&mut self.deck_replaced);

        match side {
            Side::Initial => {
                for (index, card) in cards.into_iter().enumerate() {
                    if index % 2 == 0 {
                        self.player.add_card(card);
                    } else {
                        self.dealer.add_card(card);
                    }
                }
                self.state = RoundState::PlayerTurn;
                if !keep_notice {
                    self.set_message("Game started! Your turn.");
                }
                Ok(self.transition(Vec::new()))
            }
            Side::Player => {
                self.player.extend(cards);
                let value = self.player.value();
                if self.player.is_bust() {
                    self.finish(Outcome::PlayerBust);
                } else if !keep_notice {
                    self.message = format!("You have {value}. Hit or stand?");
                }
                Ok(self.transition(Vec::new()))
            }
            Side::Dealer => {
                self.dealer.extend(cards);
                if !keep_notice {
                    self.message = format!("Dealer has {}.", self.dealer.value());
                }
                let effects = self.dealer_step();
                Ok(self.transition(effects))
            }
        }
    }
}
