use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    #[msg("Entry payment is below the minimum")]
    InsufficientPayment,
    #[msg("Only the lottery manager can pick a winner")]
    Unauthorized,
    #[msg("The lottery has no entrants")]
    NoEntrants,
    #[msg("The lottery has reached its maximum number of entrants")]
    PoolFull,
    Overflow,
    #[msg("Entry payment transfer failed")]
    TransferFailed,
    #[msg("Invalid SlotHashes account provided")]
    InvalidSlotHashesAccount,
    #[msg("Every entrant account must be provided writable before a draw")]
    EntrantAccountMissing,
    #[msg("Random source returned an index outside the entrant list")]
    InvalidWinningIndex,
}
