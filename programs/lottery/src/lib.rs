use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod randomness;
pub mod state;

declare_id!("LotTeRy5qFNtT8ZFb8eXy2CM7YGtAvEGDq9P4w2xC1n");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
        instructions::enter::enter(ctx, amount)
    }

    pub fn get_players(ctx: Context<GetPlayers>) -> Result<Vec<Pubkey>> {
        instructions::get_players::get_players(ctx)
    }

    pub fn pick_winner<'info>(
        ctx: Context<'_, '_, 'info, 'info, PickWinner<'info>>,
    ) -> Result<()> {
        instructions::pick_winner::pick_winner(ctx)
    }
}
