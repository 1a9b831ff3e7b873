use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// What the lottery needs from the chain it runs on.
pub trait Ledger {
    /// Identity invoking the current operation.
    fn caller(&self) -> Pubkey;

    /// Whether `transfer` to `to` could succeed in this operation.
    fn can_pay(&self, to: &Pubkey) -> bool;

    /// Moves `amount` out of the pool to `to`. An error aborts the enclosing
    /// operation.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;

    /// Opaque, unpredictable value for seeding winner selection.
    fn random_seed(&self) -> Result<u64>;
}

/// Solana-backed ledger for a single instruction.
///
/// The pool's lamports live in the lottery PDA, which the program owns, so a
/// payout debits it directly and credits one of the writable accounts the
/// caller supplied alongside the instruction.
pub struct SolanaLedger<'a, 'info> {
    caller: Pubkey,
    vault: AccountInfo<'info>,
    recipients: &'a [AccountInfo<'info>],
    seed: u64,
}

impl<'a, 'info> SolanaLedger<'a, 'info> {
    pub fn new(
        caller: Pubkey,
        vault: AccountInfo<'info>,
        recipients: &'a [AccountInfo<'info>],
        seed: u64,
    ) -> Self {
        Self {
            caller,
            vault,
            recipients,
            seed,
        }
    }

    fn recipient(&self, to: &Pubkey) -> Option<&'a AccountInfo<'info>> {
        self.recipients
            .iter()
            .find(|account| account.key == to && account.is_writable)
    }
}

impl Ledger for SolanaLedger<'_, '_> {
    fn caller(&self) -> Pubkey {
        self.caller
    }

    fn can_pay(&self, to: &Pubkey) -> bool {
        self.recipient(to).is_some()
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        let recipient = self
            .recipient(to)
            .ok_or(LotteryError::EntrantAccountMissing)?;

        self.vault.sub_lamports(amount)?;
        recipient.add_lamports(amount)?;

        Ok(())
    }

    fn random_seed(&self) -> Result<u64> {
        Ok(self.seed)
    }
}
