use solana_sdk::{account::Account, pubkey::Pubkey, system_program};

pub fn account_owned_by_system_program() -> Account {
    Account {
        owner: system_program::id(),
        lamports: 1_000_000,
        ..Account::default()
    }
}

pub fn account_with_data() -> Account {
    Account {
        owner: Pubkey::new_unique(),
        lamports: 42,
        data: vec![1, 2, 3, 4],
        ..Account::default()
    }
}

pub fn program_account() -> Account {
    Account {
        owner: solana_sdk::bpf_loader_upgradeable::id(),
        lamports: 1,
        executable: true,
        data: vec![2, 0, 0, 0],
        ..Account::default()
    }
}

pub fn unique_pubkeys(count: usize) -> Vec<Pubkey> {
    (0..count).map(|_| Pubkey::new_unique()).collect()
}
