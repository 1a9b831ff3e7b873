use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_ACCOUNT_SIZE, LOTTERY_SEED},
    state::Lottery,
};

/// Event emitted when a lottery pool is created
#[event]
pub struct LotteryInitialized {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The manager allowed to draw winners
    pub manager: Pubkey,
}

/// Creates a lottery pool owned by the signing manager.
///
/// The pool starts open with no entrants and an empty pot. One pool exists
/// per manager, at the PDA ["lottery", manager].
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let manager = ctx.accounts.manager.key();
    ctx.accounts
        .lottery
        .set_inner(Lottery::new(manager, ctx.bumps.lottery));

    emit!(LotteryInitialized {
        lottery: ctx.accounts.lottery.key(),
        manager,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = manager,
        space = LOTTERY_ACCOUNT_SIZE,
        seeds = [LOTTERY_SEED, manager.key().as_ref()],
        bump,
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(mut)]
    pub manager: Signer<'info>,

    pub system_program: Program<'info, System>,
}
