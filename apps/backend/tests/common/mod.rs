#![allow(dead_code)]

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

// Policy defaults to rollback but can be flipped per-binary via `REVIEWS_TXN_POLICY=commit`.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = match std::env::var("REVIEWS_TXN_POLICY")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "commit" => game_reviews::db::txn_policy::TxnPolicy::CommitOnOk,
        _ => game_reviews::db::txn_policy::TxnPolicy::RollbackOnOk,
    };

    game_reviews::db::txn_policy::set_txn_policy(policy);
}
