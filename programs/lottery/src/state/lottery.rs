use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_PLAYERS, MIN_ENTRY},
    error::LotteryError,
    ledger::Ledger,
    randomness::RandomSource,
};

/// A lottery pool. Seeds: ["lottery", manager]
///
/// Entrants accumulate in `players` until the manager draws, at which point
/// the whole `pot` goes to one of them and the pool starts over empty.
#[account]
pub struct Lottery {
    /// Account that created the pool and alone may draw a winner.
    pub manager: Pubkey,
    /// Entrants in entry order. The same key may appear more than once.
    pub players: Vec<Pubkey>,
    /// Lamports paid in by the current entrants.
    pub pot: u64,
    /// Completed draws.
    pub round: u64,
    pub last_winner: Option<Pubkey>,
    pub bump: u8,
}

/// Outcome of a successful draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub winner: Pubkey,
    pub amount: u64,
    pub winning_index: u64,
}

impl Lottery {
    pub fn new(manager: Pubkey, bump: u8) -> Self {
        Self {
            manager,
            players: Vec::with_capacity(MAX_PLAYERS),
            pot: 0,
            round: 0,
            last_winner: None,
            bump,
        }
    }

    /// Records a paid entry for `player`.
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(amount >= MIN_ENTRY, LotteryError::InsufficientPayment);
        require!(self.players.len() < MAX_PLAYERS, LotteryError::PoolFull);

        let pot = self
            .pot
            .checked_add(amount)
            .ok_or(LotteryError::Overflow)?;

        self.players.push(player);
        self.pot = pot;

        Ok(())
    }

    pub fn players(&self) -> &[Pubkey] {
        &self.players
    }

    /// Pays the whole pot to a randomly selected entrant and resets the pool.
    ///
    /// Only the manager may draw, and the pool must hold at least one entrant.
    /// Every entrant must be payable before the draw runs, so the caller
    /// cannot steer the outcome by leaving some of them out. The transfer
    /// happens before any field changes, so a failed payout leaves the pool
    /// exactly as it was.
    pub fn pick_winner<L, R>(&mut self, ledger: &mut L, rng: &mut R) -> Result<Payout>
    where
        L: Ledger,
        R: RandomSource,
    {
        require_keys_eq!(ledger.caller(), self.manager, LotteryError::Unauthorized);
        require!(!self.players.is_empty(), LotteryError::NoEntrants);
        require!(
            self.players.iter().all(|player| ledger.can_pay(player)),
            LotteryError::EntrantAccountMissing
        );

        let winning_index = rng.next(self.players.len() as u64)?;
        let winner = *self
            .players
            .get(winning_index as usize)
            .ok_or(LotteryError::InvalidWinningIndex)?;
        let amount = self.pot;
        let round = self.round.checked_add(1).ok_or(LotteryError::Overflow)?;

        ledger.transfer(&winner, amount)?;

        self.players.clear();
        self.pot = 0;
        self.round = round;
        self.last_winner = Some(winner);

        Ok(Payout {
            winner,
            amount,
            winning_index,
        })
    }
}
