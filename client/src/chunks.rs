use std::num::NonZeroUsize;

use solana_sdk::pubkey::Pubkey;

/// Most keys a node accepts in a single `getMultipleAccounts` request.
pub const MAX_ACCOUNTS_PER_REQUEST: usize = 99;

pub(crate) const REQUEST_LIMIT: NonZeroUsize =
    match NonZeroUsize::new(MAX_ACCOUNTS_PER_REQUEST) {
        Some(limit) => limit,
        None => unreachable!(),
    };

/// Splits `pubkeys` into consecutive chunks of at most `limit` keys.
/// Chunks are never empty and concatenated give back `pubkeys`, thus no
/// keys yield no chunks.
pub fn plan_chunks(
    pubkeys: &[Pubkey],
    limit: NonZeroUsize,
) -> Vec<&[Pubkey]> {
    pubkeys.chunks(limit.get()).collect()
}
