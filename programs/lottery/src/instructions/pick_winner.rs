use anchor_lang::prelude::*;

use crate::{
    constants::LOTTERY_SEED,
    ledger::{Ledger, SolanaLedger},
    randomness::{slot_hash_seed, SeededRandom},
    state::{Lottery, Payout},
};

/// Event emitted when a winner is paid
#[event]
pub struct WinnerPicked {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports paid to the winner
    pub amount: u64,
    /// Draw number, starting at 1
    pub round: u64,
    /// Position of the winning entry
    pub winning_index: u64,
}

/// Draws a winner, pays out the whole pot and reopens the pool empty.
///
/// The draw is seeded from the SlotHashes sysvar mixed with the cluster
/// timestamp. Because the winner is only known on-chain, the manager passes
/// every distinct entrant as a writable remaining account; the payout is
/// credited to whichever of them won.
///
/// # Errors
/// - `Unauthorized` if the signer is not the lottery manager
/// - `NoEntrants` if nobody has entered
/// - `InvalidSlotHashesAccount` if the provided SlotHashes account is invalid
/// - `EntrantAccountMissing` if any entrant was not supplied writable
pub fn pick_winner<'info>(ctx: Context<'_, '_, 'info, 'info, PickWinner<'info>>) -> Result<()> {
    let clock = Clock::get()?;
    let vault = ctx.accounts.lottery.to_account_info();

    let payout = draw(
        &mut ctx.accounts.lottery,
        ctx.accounts.manager.key(),
        vault,
        ctx.remaining_accounts,
        &ctx.accounts.recent_slothashes,
        clock.unix_timestamp,
    )?;

    msg!("Winning index: {}", payout.winning_index);
    msg!("Winner: {} receives {} lamports", payout.winner, payout.amount);

    emit!(WinnerPicked {
        lottery: ctx.accounts.lottery.key(),
        winner: payout.winner,
        amount: payout.amount,
        round: ctx.accounts.lottery.round,
        winning_index: payout.winning_index,
    });

    Ok(())
}

/// Seeds the draw from `slot_hashes` and pays the winner out of `vault`,
/// which must be the lottery's own account.
pub fn draw<'info>(
    lottery: &mut Lottery,
    manager: Pubkey,
    vault: AccountInfo<'info>,
    entrants: &[AccountInfo<'info>],
    slot_hashes: &AccountInfo,
    unix_timestamp: i64,
) -> Result<Payout> {
    let seed = slot_hash_seed(slot_hashes, unix_timestamp)?;

    let mut ledger = SolanaLedger::new(manager, vault, entrants, seed);
    let mut rng = SeededRandom::new(ledger.random_seed()?);

    lottery.pick_winner(&mut ledger, &mut rng)
}

/// Accounts required for the pick_winner instruction
#[derive(Accounts)]
pub struct PickWinner<'info> {
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.manager.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Must be the lottery manager; checked by the draw itself
    pub manager: Signer<'info>,

    /// The SlotHashes sysvar, used as the entropy source
    /// CHECK: Using UncheckedAccount because we manually validate the correct sysvar.
    /// This is needed because Anchor will always throw an error on the SlotHashes sysvar.
    pub recent_slothashes: UncheckedAccount<'info>,
}
