use anchor_lang::prelude::*;

/// Smallest accepted entry payment: 0.01 SOL.
#[constant]
pub const MIN_ENTRY: u64 = 10_000_000;

/// Entrant capacity of a lottery account.
///
/// `pick_winner` lists every distinct entrant as a writable account, so a full
/// pool has to fit in one legacy transaction (1232 bytes). 25 keys also keep
/// the `get_players` return value under the 1024 byte return-data limit.
pub const MAX_PLAYERS: usize = 25;

pub const LOTTERY_SEED: &[u8] = b"lottery";

// Space calculation:
// 8 (discriminator) +
// 32 (manager) +
// 4 (length of players) +
// 32 * MAX_PLAYERS (players) +
// 8 (pot) +
// 8 (round) +
// 33 (last_winner: Option<Pubkey>) +
// 1 (bump)
pub const LOTTERY_ACCOUNT_SIZE: usize = 8 + 32 + 4 + 32 * MAX_PLAYERS + 8 + 8 + 33 + 1;

#[cfg(test)]
mod tests {
    use super::*;

    const PACKET_DATA_SIZE: usize = 1232;
    const MAX_RETURN_DATA: usize = 1024;

    #[test]
    fn full_draw_fits_a_legacy_transaction() {
        // program, lottery, manager, slot hashes, entrants, compute budget program
        let keys = 4 + MAX_PLAYERS + 1;
        // program index, account count, accounts, data length, discriminator
        let pick_winner_ix = 1 + 1 + (3 + MAX_PLAYERS) + 1 + 8;
        // SetComputeUnitLimit: tag + u32
        let compute_budget_ix = 1 + 1 + 1 + 5;

        let size = 1 + 64 // one signature
            + 3 // header
            + 1 + 32 * keys
            + 32 // recent blockhash
            + 1 + pick_winner_ix + compute_budget_ix;

        assert!(size <= PACKET_DATA_SIZE, "{size} bytes");
    }

    #[test]
    fn full_player_list_fits_return_data() {
        assert!(4 + 32 * MAX_PLAYERS <= MAX_RETURN_DATA);
    }

    #[test]
    fn account_size_matches_a_full_pool() {
        let full = crate::state::Lottery {
            manager: Pubkey::new_unique(),
            players: vec![Pubkey::new_unique(); MAX_PLAYERS],
            pot: u64::MAX,
            round: u64::MAX,
            last_winner: Some(Pubkey::new_unique()),
            bump: 255,
        };
        let mut data = Vec::new();
        full.try_serialize(&mut data).unwrap();

        assert_eq!(data.len(), LOTTERY_ACCOUNT_SIZE);
    }
}
