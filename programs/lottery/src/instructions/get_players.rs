use anchor_lang::prelude::*;

use crate::state::Lottery;

/// Returns the current entrants in entry order. Anyone may call it.
pub fn get_players(ctx: Context<GetPlayers>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.lottery.players().to_vec())
}

#[derive(Accounts)]
pub struct GetPlayers<'info> {
    pub lottery: Account<'info, Lottery>,
}
