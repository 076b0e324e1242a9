//! Digital wallet ledger engine.
//!
//! Maintains accounts with non-negative balances and an append-only ledger
//! of every balance change. Funding, peer-to-peer payments and product
//! purchases are applied atomically under concurrency; a statement reader
//! derives balances and transaction history, with optional conversion into
//! foreign currencies.
//!
//! The crate is layered bottom-up:
//!
//! - [`domain`]: amounts, accounts, ledger entries, products and the pure
//!   balance arithmetic
//! - [`storage`]: concurrent in-memory stores for accounts, ledger,
//!   catalog and purchases
//! - [`engine`]: the transfer engine applying wallet operations atomically
//! - [`rates`]: currency conversion rate lookup with static fallback
//! - [`query`]: read-side balance, statement and purchase history views
//! - [`io`]: CSV operation streams and balance snapshots
//! - [`streaming`]: operation replay with pluggable error policies
//! - [`app`]: CLI runner with signal handling

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod query;
pub mod rates;
pub mod storage;
pub mod streaming;
