use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{constants::LOTTERY_SEED, error::LotteryError, state::Lottery};

/// Event emitted when a player enters the lottery
#[event]
pub struct PlayerEntered {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The entrant's address
    pub player: Pubkey,
    /// Amount paid in lamports
    pub amount: u64,
    /// Entrant count after this entry
    pub player_count: u64,
    /// Pot after this entry
    pub pot: u64,
}

/// Instruction to enter the lottery by paying `amount` lamports into the pool
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports to pay, at least `MIN_ENTRY`
///
/// # Checks
/// 1. The payment meets the minimum entry
/// 2. The pool has room for another entrant
/// 3. The lottery account received exactly `amount` lamports
///
/// The same player may enter any number of times; each entry is a separate
/// slot in the draw.
pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.lottery.enter(player, amount)?;

    let lottery_info = ctx.accounts.lottery.to_account_info();
    let pre_transfer_balance = lottery_info.lamports();

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: lottery_info.clone(),
            },
        ),
        amount,
    )?;

    verify_deposit(pre_transfer_balance, lottery_info.lamports(), amount)?;

    let lottery = &ctx.accounts.lottery;
    emit!(PlayerEntered {
        lottery: lottery.key(),
        player,
        amount,
        player_count: lottery.players().len() as u64,
        pot: lottery.pot,
    });

    Ok(())
}

/// Checks that the lottery account grew by exactly `amount` across the transfer.
pub fn verify_deposit(pre_transfer_balance: u64, post_transfer_balance: u64, amount: u64) -> Result<()> {
    let expected = pre_transfer_balance
        .checked_add(amount)
        .ok_or(LotteryError::Overflow)?;
    require!(
        post_transfer_balance == expected,
        LotteryError::TransferFailed
    );
    Ok(())
}

/// Accounts required for the enter instruction
#[derive(Accounts)]
pub struct Enter<'info> {
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.manager.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// The entrant, paying the entry from its own balance
    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
